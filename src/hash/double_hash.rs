//! 双哈希策略 - 步长由第二个哈希函数决定

use crate::{
    hash::{slot_index, step_size, strategy::ProbeStrategy},
    types::{Key, TableType},
};

/// 双哈希策略
///
/// 容量需为大于 7 的素数，这样任意步长 1..=7 都与容量互素，
/// 探测序列可以覆盖全部槽位。校验在建表时完成。
#[derive(Debug, Clone, Copy)]
pub struct DoubleHashStrategy {
    capacity: usize,
}

impl DoubleHashStrategy {
    /// 创建新双哈希策略
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl ProbeStrategy for DoubleHashStrategy {
    fn home_slot(&self, key: Key) -> usize {
        slot_index(key, self.capacity)
    }

    fn step(&self, key: Key) -> usize {
        step_size(key)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn strategy_type(&self) -> TableType {
        TableType::DoubleHashing
    }
}
