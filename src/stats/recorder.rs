//! 探测统计记录器 - 按操作类型累计探测次数

use std::time::Duration;

use crate::types::{OperationType, ProbeOutcome, TableType};

/// 单类操作的探测统计
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct OperationProbeStats {
    pub count: u64,
    pub hits: u64,
    pub misses: u64,
    pub total_probes: u64,
    pub max_probes: u64,
    pub rehashed: u64,
    pub total_duration: u64, // 纳秒
}

impl OperationProbeStats {
    fn record(&mut self, outcome: ProbeOutcome) {
        let probes = outcome.probes as u64;
        self.count += 1;
        if outcome.found {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        self.total_probes += probes;
        self.max_probes = self.max_probes.max(probes);
        self.rehashed += outcome.rehashed as u64;
    }

    /// 平均探测次数
    pub fn avg_probes(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_probes as f64 / self.count as f64
        }
    }
}

/// 探测统计快照
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProbeStatsSnapshot {
    pub insert: OperationProbeStats,
    pub search: OperationProbeStats,
    pub remove: OperationProbeStats,
}

impl ProbeStatsSnapshot {
    pub fn get(&self, op_type: OperationType) -> &OperationProbeStats {
        match op_type {
            OperationType::Insert => &self.insert,
            OperationType::Search => &self.search,
            OperationType::Remove => &self.remove,
        }
    }
}

/// 探测统计记录器
///
/// 由调用方持有，每张表一个实例。
#[derive(Debug, Clone)]
pub struct ProbeRecorder {
    table_type: TableType,
    stats: ProbeStatsSnapshot,
}

impl ProbeRecorder {
    pub fn new(table_type: TableType) -> Self {
        Self {
            table_type,
            stats: ProbeStatsSnapshot::default(),
        }
    }

    pub fn table_type(&self) -> TableType {
        self.table_type
    }

    /// 记录一次操作结果
    pub fn record(&mut self, op_type: OperationType, outcome: ProbeOutcome) {
        self.stats_mut(op_type).record(outcome);
    }

    /// 记录一次带耗时的操作结果
    pub fn record_timed(&mut self, op_type: OperationType, outcome: ProbeOutcome, duration: Duration) {
        let stats = self.stats_mut(op_type);
        stats.record(outcome);
        stats.total_duration += duration.as_nanos() as u64;
    }

    /// 累加一批操作的总耗时，操作本身另行记录
    pub fn add_duration(&mut self, op_type: OperationType, duration: Duration) {
        self.stats_mut(op_type).total_duration += duration.as_nanos() as u64;
    }

    /// 获取统计快照
    pub fn snapshot(&self) -> ProbeStatsSnapshot {
        self.stats.clone()
    }

    /// 重置统计
    pub fn reset(&mut self) {
        self.stats = ProbeStatsSnapshot::default();
    }

    fn stats_mut(&mut self, op_type: OperationType) -> &mut OperationProbeStats {
        match op_type {
            OperationType::Insert => &mut self.stats.insert,
            OperationType::Search => &mut self.stats.search,
            OperationType::Remove => &mut self.stats.remove,
        }
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        let mut output = String::new();
        let table = self.table_type.as_str();

        output.push_str("# HELP probe_operation_count Total operations\n");
        output.push_str("# TYPE probe_operation_count counter\n");
        for op in OperationType::ALL {
            output.push_str(&format!(
                "probe_operation_count{{table=\"{}\",op=\"{}\"}} {}\n",
                table, op.as_str(), self.stats.get(op).count
            ));
        }

        output.push_str("# HELP probe_operation_probes_total Total probed slots\n");
        output.push_str("# TYPE probe_operation_probes_total counter\n");
        for op in OperationType::ALL {
            output.push_str(&format!(
                "probe_operation_probes_total{{table=\"{}\",op=\"{}\"}} {}\n",
                table, op.as_str(), self.stats.get(op).total_probes
            ));
        }

        output.push_str("# HELP probe_operation_duration_ns Total operation duration (ns)\n");
        output.push_str("# TYPE probe_operation_duration_ns counter\n");
        for op in OperationType::ALL {
            output.push_str(&format!(
                "probe_operation_duration_ns{{table=\"{}\",op=\"{}\"}} {}\n",
                table, op.as_str(), self.stats.get(op).total_duration
            ));
        }

        output
    }
}
