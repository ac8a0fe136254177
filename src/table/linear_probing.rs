//! 线性探测哈希表 - 删除后重排簇内后续键

use crate::{
    error::ProbeError,
    hash::LinearProbeStrategy,
    log_debug,
    table::{open_addressing::OpenAddressing, HashTable, TableConfig, DEFAULT_CONFIG},
    types::{Key, ProbeOutcome, Slot, TableType},
};

/// 线性探测哈希表
///
/// 没有墓碑。删除时把被删槽位之后、同一簇内的键逐个取出再重新插入，
/// 保证剩余键从起始槽位出发仍可达。
#[derive(Debug, Clone)]
pub struct LinearProbingTable {
    inner: OpenAddressing<LinearProbeStrategy>,
}

impl LinearProbingTable {
    /// 按配置创建空表
    pub fn new(config: TableConfig) -> Result<Self, ProbeError> {
        config.validate(TableType::LinearProbing)?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig) -> Self {
        Self {
            inner: OpenAddressing::new(
                LinearProbeStrategy::new(config.capacity),
                config.duplicate_policy,
            ),
        }
    }

    /// 槽位视图，仅用于观察分布
    pub fn slots(&self) -> &[Slot] {
        self.inner.slots()
    }

    /// 从 `freed` 之后开始重排，直到遇到空槽位，返回重新放置的键数
    fn rehash_cluster(&mut self, freed: usize) -> usize {
        let capacity = self.inner.capacity();
        let mut rehashed = 0;
        for offset in 1..capacity {
            let index = (freed + offset) % capacity;
            let Some(moved) = self.inner.clear_at(index) else {
                break;
            };
            // 刚清空的 index 本身就在探测序列上，回退到它不会丢键
            let target = self
                .inner
                .first_empty(moved)
                .map_or(index, |(target, _)| target);
            self.inner.store(target, moved);
            rehashed += 1;
        }
        rehashed
    }
}

impl Default for LinearProbingTable {
    fn default() -> Self {
        Self::build(*DEFAULT_CONFIG)
    }
}

impl HashTable for LinearProbingTable {
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
        let (index, probes) = match self.inner.locate(key) {
            (Some(index), probes) => (index, probes),
            (None, probes) => return ProbeOutcome::miss(probes),
        };
        self.inner.clear_at(index);
        let rehashed = self.rehash_cluster(index);
        if rehashed > 0 {
            log_debug!("removed {} at slot {}, rehashed {} keys in cluster", key, index, rehashed);
        }
        ProbeOutcome::hit(probes).with_rehashed(rehashed)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn table_type(&self) -> TableType {
        TableType::LinearProbing
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    fn table(capacity: usize) -> LinearProbingTable {
        LinearProbingTable::new(TableConfig::with_capacity(capacity)).expect("配置无效")
    }

    fn assert_len_invariant(table: &LinearProbingTable) {
        let occupied = table.slots().iter().filter(|s| s.is_occupied()).count();
        assert_eq!(table.len(), occupied, "len 应等于已占用槽位数");
    }

    #[test]
    fn test_empty_table_finds_nothing() {
        let table = table(11);
        for key in 0..50 {
            assert!(!table.search(key));
        }
    }

    #[test]
    fn test_insert_then_search() {
        let mut table = table(11);
        for key in [1, 12, 23, 5] {
            table.insert(key).expect("插入失败");
            assert_len_invariant(&table);
        }
        for key in [1, 12, 23, 5] {
            assert!(table.search(key), "key {} 应能找到", key);
        }
        assert!(!table.search(34));
    }

    #[test]
    fn test_remove_middle_of_cluster() {
        let mut table = table(11);
        // 全部落在槽位 1
        let cluster = [1, 12, 23, 34, 45];
        for key in cluster {
            table.insert(key).expect("插入失败");
        }

        let outcome = table.remove_probed(23);
        assert!(outcome.found);
        assert_eq!(outcome.probes, 3);
        assert_eq!(outcome.rehashed, 2);
        assert_len_invariant(&table);

        assert!(!table.search(23));
        for key in [1, 12, 34, 45] {
            assert!(table.search(key), "簇内 key {} 删除后应仍可达", key);
        }
        assert_eq!(table.slots()[4], Slot::Occupied(45));
        assert_eq!(table.slots()[5], Slot::Empty);
    }

    #[test]
    fn test_rehash_keeps_keys_in_home_slot() {
        let mut table = table(11);
        // 1、12 落在槽位 1，2 落在槽位 2 但被挤到槽位 3
        for key in [1, 12, 2, 3] {
            table.insert(key).expect("插入失败");
        }
        table.remove(1);
        assert_len_invariant(&table);
        assert_eq!(table.slots()[1], Slot::Occupied(12));
        assert_eq!(table.slots()[2], Slot::Occupied(2));
        assert_eq!(table.slots()[3], Slot::Occupied(3));
        for key in [12, 2, 3] {
            assert!(table.search(key));
        }
    }

    #[test]
    fn test_cluster_wraps_around() {
        let mut table = table(7);
        // 槽位 6 开始的簇回绕到 0、1
        for key in [6, 13, 20, 0] {
            table.insert(key).expect("插入失败");
        }
        assert_eq!(table.slots()[0], Slot::Occupied(13));
        table.remove(6);
        assert_len_invariant(&table);
        for key in [13, 20, 0] {
            assert!(table.search(key), "回绕簇内 key {} 应仍可达", key);
        }
        assert!(!table.search(6));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut table = table(11);
        table.insert(4).expect("插入失败");
        let outcome = table.remove_probed(15);
        assert!(!outcome.found);
        assert_eq!(outcome.rehashed, 0);
        assert_eq!(table.len(), 1);
        assert!(table.search(4));
    }

    #[test]
    fn test_table_full() {
        let mut table = table(5);
        for key in 0..5 {
            table.insert(key * 5).expect("插入失败");
        }
        let err = table.insert(99).unwrap_err();
        assert!(matches!(err, ProbeError::TableFull { capacity: 5, size: 5, .. }));
        // 满表时查找仍能终止
        assert!(!table.search(99));
        assert!(table.search(20));
    }

    #[test]
    fn test_full_table_remove_and_reinsert() {
        let mut table = table(5);
        for key in 0..5 {
            table.insert(key).expect("插入失败");
        }
        assert!(table.remove(2));
        assert_len_invariant(&table);
        for key in [0, 1, 3, 4] {
            assert!(table.search(key));
        }
        table.insert(7).expect("删除后应有空位");
        assert!(table.search(7));
    }

    #[test]
    fn test_probe_counts() {
        let mut table = table(11);
        assert_eq!(table.insert_probed(1).expect("插入失败").probes, 0);
        assert_eq!(table.insert_probed(12).expect("插入失败").probes, 1);
        assert_eq!(table.insert_probed(23).expect("插入失败").probes, 2);
        assert_eq!(table.search_probed(23).probes, 3);
        assert_eq!(table.search_probed(34), ProbeOutcome::miss(3));
    }

    #[test]
    fn test_duplicates_allowed_by_default() {
        let mut table = table(11);
        table.insert(3).expect("插入失败");
        table.insert(3).expect("插入失败");
        assert_eq!(table.len(), 2);
        assert!(table.remove(3));
        assert!(table.search(3), "第二个副本应仍可达");
        assert!(table.remove(3));
        assert!(!table.search(3));
    }

    #[test]
    fn test_default_uses_default_capacity() {
        let table = LinearProbingTable::default();
        assert_eq!(table.capacity(), crate::table::DEFAULT_CAPACITY);
    }
}
