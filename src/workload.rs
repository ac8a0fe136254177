//! 负载测试驱动 - 生成键集合、按填充率测量查找开销、校验删除

use std::{
    ops::Range,
    time::{Duration, Instant},
};

use ahash::AHashSet;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    error::ProbeError,
    log_info,
    log_warn,
    stats::ProbeRecorder,
    table::{build_all, HashTable, TableConfig},
    types::{Key, OperationType, TableType},
};

/// 随机键取值范围
pub const KEY_RANGE: Range<Key> = 0..1_000_000;

/// 不存在键的偏移量，保证与 `KEY_RANGE` 内的键不相交
pub const ABSENT_OFFSET: Key = 1_000_001;

/// 默认随机种子
pub const DEFAULT_SEED: u64 = 42;

/// 互不相同的键集合，保持生成顺序
#[derive(Debug, Clone)]
pub struct KeySet {
    keys: Vec<Key>,
    seen: AHashSet<Key>,
    range: Range<Key>,
}

impl KeySet {
    /// 创建空集合，后续键从 `range` 中抽取
    pub fn empty(range: Range<Key>) -> Self {
        Self {
            keys: Vec::new(),
            seen: AHashSet::new(),
            range,
        }
    }

    /// 从 `range` 中生成 `count` 个不同的随机键
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        range: Range<Key>,
        rng: &mut R,
    ) -> Result<Self, ProbeError> {
        let mut set = Self::empty(range);
        set.extend_to(count, rng)?;
        Ok(set)
    }

    /// 生成 `count` 个保证不在 `KEY_RANGE` 内的键
    pub fn disjoint<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self, ProbeError> {
        let range = (KEY_RANGE.start + ABSENT_OFFSET)..(KEY_RANGE.end + ABSENT_OFFSET);
        Self::generate(count, range, rng)
    }

    /// 追加新键直到总数达到 `count`，返回新增的键
    pub fn extend_to<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<&[Key], ProbeError> {
        let available = (self.range.end as i128 - self.range.start as i128).max(0);
        if count as i128 > available {
            return Err(ProbeError::invalid_config(format!(
                "cannot draw {} distinct keys from {:?}",
                count, self.range
            )));
        }
        let start = self.keys.len();
        while self.keys.len() < count {
            let key = rng.gen_range(self.range.clone());
            if self.seen.insert(key) {
                self.keys.push(key);
            }
        }
        Ok(&self.keys[start.min(self.keys.len())..])
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: Key) -> bool {
        self.seen.contains(&key)
    }
}

/// 一次批量查找的测量结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchMeasurement {
    pub duration: Duration,
    pub avg_probes: f64,
    pub found: u64,
}

/// 单张表在某一填充率下的测量
#[derive(Debug, Clone, PartialEq)]
pub struct TableLevelReport {
    pub table_type: TableType,
    pub load_factor: f32,
    pub successful: SearchMeasurement,
    pub unsuccessful: SearchMeasurement,
}

/// 某一填充率下三张表的测量
#[derive(Debug, Clone, PartialEq)]
pub struct LoadLevelReport {
    /// 填充百分比
    pub percent: u32,
    pub key_count: usize,
    pub tables: Vec<TableLevelReport>,
}

impl LoadLevelReport {
    pub fn table(&self, table_type: TableType) -> Option<&TableLevelReport> {
        self.tables.iter().find(|report| report.table_type == table_type)
    }
}

/// 负载测试总结果
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub levels: Vec<LoadLevelReport>,
    /// 每张表累计的探测统计，顺序与 `TableType::ALL` 相同
    pub recorders: Vec<ProbeRecorder>,
    /// 全部删除后是否已查不到任何键
    pub removal_passed: bool,
}

impl SweepOutcome {
    /// 指定表类型的累计统计
    pub fn recorder(&self, table_type: TableType) -> Option<&ProbeRecorder> {
        self.recorders.iter().find(|recorder| recorder.table_type() == table_type)
    }
}

/// 按填充率逐级插入并测量查找开销
#[derive(Debug, Clone)]
pub struct LoadSweep {
    config: TableConfig,
    percents: Vec<u32>,
    seed: u64,
}

impl LoadSweep {
    /// 默认从 10% 到 90%，每级 10%
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            percents: (1..=9).map(|i| i * 10).collect(),
            seed: DEFAULT_SEED,
        }
    }

    /// 设置填充百分比，按升序去重后逐级执行
    pub fn percents(mut self, mut percents: Vec<u32>) -> Self {
        percents.sort_unstable();
        percents.dedup();
        self.percents = percents;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn run(&self) -> Result<SweepOutcome, ProbeError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut tables = build_all(self.config)?;
        let mut recorders: Vec<ProbeRecorder> = tables
            .iter()
            .map(|table| ProbeRecorder::new(table.table_type()))
            .collect();
        let mut keys = KeySet::empty(KEY_RANGE);
        let mut levels = Vec::with_capacity(self.percents.len());

        for &percent in &self.percents {
            let target = self.config.capacity * percent as usize / 100;
            let new_keys = keys.extend_to(target, &mut rng)?;
            for (table, recorder) in tables.iter_mut().zip(recorders.iter_mut()) {
                for &key in new_keys {
                    let start = Instant::now();
                    let outcome = table.insert_probed(key)?;
                    recorder.record_timed(OperationType::Insert, outcome, start.elapsed());
                }
            }

            let absent = KeySet::disjoint(target, &mut rng)?;
            let mut reports = Vec::with_capacity(tables.len());
            for (table, recorder) in tables.iter().zip(recorders.iter_mut()) {
                let successful = measure_search(table.as_ref(), keys.keys(), recorder);
                let unsuccessful = measure_search(table.as_ref(), absent.keys(), recorder);
                log_info!(
                    "{}% full, {}: hit {:?} ({:.2} probes), miss {:?} ({:.2} probes)",
                    percent, table.table_type(),
                    successful.duration, successful.avg_probes,
                    unsuccessful.duration, unsuccessful.avg_probes
                );
                reports.push(TableLevelReport {
                    table_type: table.table_type(),
                    load_factor: table.load_factor(),
                    successful,
                    unsuccessful,
                });
            }
            levels.push(LoadLevelReport {
                percent,
                key_count: keys.len(),
                tables: reports,
            });
        }

        let removal_passed = verify_removal(&mut tables, keys.keys());
        if !removal_passed {
            log_warn!("removal check failed: some keys still reachable after removal");
        }
        Ok(SweepOutcome {
            levels,
            recorders,
            removal_passed,
        })
    }
}

fn measure_search(table: &dyn HashTable, keys: &[Key], recorder: &mut ProbeRecorder) -> SearchMeasurement {
    let mut probes = 0u64;
    let mut found = 0u64;
    let start = Instant::now();
    for &key in keys {
        let outcome = table.search_probed(key);
        probes += outcome.probes as u64;
        found += outcome.found as u64;
        recorder.record(OperationType::Search, outcome);
    }
    let duration = start.elapsed();
    recorder.add_duration(OperationType::Search, duration);
    SearchMeasurement {
        duration,
        avg_probes: if keys.is_empty() { 0.0 } else { probes as f64 / keys.len() as f64 },
        found,
    }
}

/// 按插入顺序从每张表删除全部键，然后确认没有任何表还能查到这些键
pub fn verify_removal(tables: &mut [Box<dyn HashTable>], keys: &[Key]) -> bool {
    for &key in keys {
        for table in tables.iter_mut() {
            table.remove(key);
        }
    }
    keys.iter()
        .all(|&key| tables.iter().all(|table| !table.search(key)))
}
