//! 定容整数哈希表库
//!
//! 提供三种经典冲突解决方式，用于在不同负载因子下比较探测开销。
//!
//! ## 主要特性
//! - 线性探测，删除时重排簇内后续键，查找链不断裂
//! - 双哈希，步长 `7 - (key mod 7)`，删除不重排
//! - 分离链接，每个槽位一条独立链表
//! - 每次操作返回探测次数，无全局计数器
//!
//! ## 快速开始
//!
//! ```rust
//! use probe_hashtable::*;
//!
//! let mut table = LinearProbingTable::new(TableConfig::with_capacity(11)).expect("配置无效");
//! table.insert(3).expect("插入失败");
//! table.insert(14).expect("插入失败");
//! assert!(table.search(14));
//!
//! table.remove(3);
//! assert!(table.search(14));
//! assert!(!table.search(3));
//! ```

#![warn(clippy::all)]

#[cfg(feature = "logging")]
#[doc(hidden)]
pub use log as __log;

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}

// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod table;
pub mod stats;
pub mod workload;

// 公共接口导出
pub use crate::{
    table::{
        HashTable,
        TableConfig,
        TableFactory,
        LinearProbingTable,
        DoubleHashingTable,
        SeparateChainingTable,
        build_all,
        DEFAULT_CAPACITY,
        DEFAULT_CONFIG,
    },
    hash::{
        ProbeStrategy,
        LinearProbeStrategy,
        DoubleHashStrategy,
        slot_index,
        step_size,
    },
    stats::{ProbeRecorder, ProbeStatsSnapshot},
    workload::{KeySet, LoadSweep, LoadLevelReport, verify_removal},
    error::ProbeError,
    types::{Key, Slot, TableType, OperationType, DuplicatePolicy, ProbeOutcome},
};
