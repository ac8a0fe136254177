//! 分离链接哈希表 - 每个槽位一条独立链表

use crate::{
    error::ProbeError,
    hash::slot_index,
    table::{HashTable, TableConfig, DEFAULT_CONFIG},
    types::{DuplicatePolicy, Key, ProbeOutcome, TableType},
};

/// 桶 - 无容量上限的键序列
pub type Bucket = Vec<Key>;

/// 分离链接哈希表
#[derive(Debug, Clone)]
pub struct SeparateChainingTable {
    buckets: Vec<Bucket>,
    len: usize,
    duplicate_policy: DuplicatePolicy,
}

impl SeparateChainingTable {
    /// 按配置创建空表
    pub fn new(config: TableConfig) -> Result<Self, ProbeError> {
        config.validate(TableType::SeparateChaining)?;
        Ok(Self::build(config))
    }

    fn build(config: TableConfig) -> Self {
        Self {
            buckets: vec![Bucket::new(); config.capacity],
            len: 0,
            duplicate_policy: config.duplicate_policy,
        }
    }

    /// 指定下标的桶
    pub fn bucket(&self, index: usize) -> &[Key] {
        &self.buckets[index]
    }

    /// 最长链长度
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn bucket_of(&self, key: Key) -> &Bucket {
        &self.buckets[slot_index(key, self.buckets.len())]
    }
}

impl Default for SeparateChainingTable {
    fn default() -> Self {
        Self::build(*DEFAULT_CONFIG)
    }
}

impl HashTable for SeparateChainingTable {
    fn insert_probed(&mut self, key: Key) -> Result<ProbeOutcome, ProbeError> {
        let mut probes = 0;
        if self.duplicate_policy == DuplicatePolicy::Reject {
            let outcome = self.search_probed(key);
            if outcome.found {
                return Err(ProbeError::KeyAlreadyExists { key });
            }
            probes = outcome.probes;
        }
        let index = slot_index(key, self.buckets.len());
        self.buckets[index].push(key);
        self.len += 1;
        Ok(ProbeOutcome::hit(probes))
    }

    fn search_probed(&self, key: Key) -> ProbeOutcome {
        let bucket = self.bucket_of(key);
        match bucket.iter().position(|&stored| stored == key) {
            Some(position) => ProbeOutcome::hit(position + 1),
            None => ProbeOutcome::miss(bucket.len()),
        }
    }

    /// 删除桶内所有等于 `key` 的条目
    fn remove_probed(&mut self, key: Key) -> ProbeOutcome {
        let index = slot_index(key, self.buckets.len());
        let bucket = &mut self.buckets[index];
        let probes = bucket.len();
        bucket.retain(|&stored| stored != key);
        let removed = probes - bucket.len();
        self.len -= removed;
        if removed > 0 {
            ProbeOutcome::hit(probes)
        } else {
            ProbeOutcome::miss(probes)
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn table_type(&self) -> TableType {
        TableType::SeparateChaining
    }
}
