//! 统计模块 - 汇总每次操作返回的探测次数
//!
//! 表本身不持有计数器，调用方把 `ProbeOutcome` 交给自己的记录器。

pub mod recorder;

pub use recorder::{OperationProbeStats, ProbeRecorder, ProbeStatsSnapshot};
