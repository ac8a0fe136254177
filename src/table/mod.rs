//! 哈希表核心模块 - 公共接口、配置与工厂

mod open_addressing;
pub mod linear_probing;
pub mod double_hashing;
pub mod chaining;

use std::fmt;

pub use linear_probing::LinearProbingTable;
pub use double_hashing::DoubleHashingTable;
pub use chaining::SeparateChainingTable;

use once_cell::sync::Lazy;

use crate::{
    error::ProbeError,
    hash::is_prime,
    types::{DuplicatePolicy, Key, ProbeOutcome, TableType},
};

/// 默认容量（素数）
pub const DEFAULT_CAPACITY: usize = 10007;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<TableConfig> = Lazy::new(TableConfig::default);

/// 哈希表配置
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableConfig {
    /// 槽位（或桶）数量，建表后不变
    pub capacity: usize,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            duplicate_policy: DuplicatePolicy::Allow,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// 校验配置是否适用于指定表类型
    pub fn validate(&self, table_type: TableType) -> Result<(), ProbeError> {
        if self.capacity == 0 {
            return Err(ProbeError::invalid_config("capacity must be greater than zero"));
        }
        if table_type == TableType::DoubleHashing && (self.capacity <= 7 || !is_prime(self.capacity)) {
            return Err(ProbeError::invalid_config(format!(
                "double hashing needs a prime capacity greater than 7, got {}",
                self.capacity
            )));
        }
        Ok(())
    }
}

/// 哈希表能力接口
///
/// 三种冲突解决方式实现同一组操作，调用方不依赖具体实现。
pub trait HashTable: fmt::Debug + Send {
    /// 插入键并返回探测次数
    fn insert_probed(&mut self, key: Key) -> Result<ProbeOutcome, ProbeError>;

    /// 查找键并返回探测次数
    fn search_probed(&self, key: Key) -> ProbeOutcome;

    /// 删除键；键不存在时不做任何修改
    fn remove_probed(&mut self, key: Key) -> ProbeOutcome;

    /// 当前存储的键数量
    fn len(&self) -> usize;

    /// 槽位（或桶）数量
    fn capacity(&self) -> usize;

    /// 获取表类型
    fn table_type(&self) -> TableType;

    fn insert(&mut self, key: Key) -> Result<(), ProbeError> {
        self.insert_probed(key).map(|_| ())
    }

    fn search(&self, key: Key) -> bool {
        self.search_probed(key).found
    }

    /// 返回是否删除了键
    fn remove(&mut self, key: Key) -> bool {
        self.remove_probed(key).found
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn load_factor(&self) -> f32 {
        self.len() as f32 / self.capacity() as f32
    }
}

/// 哈希表工厂
#[derive(Debug, Clone, Copy)]
pub struct TableFactory {
    table_type: TableType,
    config: TableConfig,
}

impl TableFactory {
    /// 创建新工厂
    pub fn new(table_type: TableType, config: TableConfig) -> Self {
        Self { table_type, config }
    }

    /// 创建哈希表
    pub fn create(&self) -> Result<Box<dyn HashTable>, ProbeError> {
        Ok(match self.table_type {
            TableType::LinearProbing => Box::new(LinearProbingTable::new(self.config)?),
            TableType::DoubleHashing => Box::new(DoubleHashingTable::new(self.config)?),
            TableType::SeparateChaining => Box::new(SeparateChainingTable::new(self.config)?),
        })
    }
}

/// 按线性探测、双哈希、分离链接的顺序创建三张表
pub fn build_all(config: TableConfig) -> Result<Vec<Box<dyn HashTable>>, ProbeError> {
    TableType::ALL
        .iter()
        .map(|&table_type| TableFactory::new(table_type, config).create())
        .collect()
}
