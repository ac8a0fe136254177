//! 双哈希哈希表 - 步长 `7 - (key mod 7)`

use crate::{
    error::ProbeError,
    hash::DoubleHashStrategy,
    table::{open_addressing::OpenAddressing, HashTable, TableConfig, DEFAULT_CONFIG},
    types::{Key, ProbeOutcome, Slot, TableType},
};

/// 双哈希哈希表
///
/// 删除只清空目标槽位，不做重排。若其他键的探测序列曾经过该槽位，
/// 之后查找这些键可能提前在空槽位停下。
#[derive(Debug, Clone)]
pub struct DoubleHashingTable {
    inner: OpenAddressing<DoubleHashStrategy>,
}

impl DoubleHashingTable {
    /// 按配置创建空表，容量需为大于 7 的素数
    pub fn new(config: TableConfig) -> Result<Self, ProbeError> {
        config.validate(TableType::DoubleHashing)?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig) -> Self {
        Self {
            inner: OpenAddressing::new(
                DoubleHashStrategy::new(config.capacity),
                config.duplicate_policy,
            ),
        }
    }

    /// 槽位视图，仅用于观察分布
    pub fn slots(&self) -> &[Slot] {
        self.inner.slots()
    }
}

impl Default for DoubleHashingTable {
    fn default() -> Self {
        Self::build(*DEFAULT_CONFIG)
    }
}

impl HashTable for DoubleHashingTable {
    fn insert_probed(&mut self, key: Key) -> Result<ProbeOutcome, ProbeError> {
        self.inner.insert(key)
    }

    fn search_probed(&self, key: Key) -> ProbeOutcome {
        match self.inner.locate(key) {
            (Some(_), probes) => ProbeOutcome::hit(probes),
            (None, probes) => ProbeOutcome::miss(probes),
        }
    }

    fn remove_probed(&mut self, key: Key) -> ProbeOutcome {
        match self.inner.locate(key) {
            (Some(index), probes) => {
                self.inner.clear_at(index);
                ProbeOutcome::hit(probes)
            }
            (None, probes) => ProbeOutcome::miss(probes),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn table_type(&self) -> TableType {
        TableType::DoubleHashing
    }
}
