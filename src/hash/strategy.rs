//! 探测策略模块 - 定义开放寻址的探测序列

use crate::types::{Key, TableType};
use std::fmt;

/// 探测策略特征
pub trait ProbeStrategy: fmt::Debug + Send + Sync {
    /// 键的起始槽位
    fn home_slot(&self, key: Key) -> usize;

    /// 每次探测的增量
    fn step(&self, key: Key) -> usize;

    /// 槽位总数
    fn capacity(&self) -> usize;

    /// 对应的表类型
    fn strategy_type(&self) -> TableType;

    /// 生成键的探测序列
    fn probe_sequence(&self, key: Key) -> ProbeSequence {
        ProbeSequence::new(self.home_slot(key), self.step(key), self.capacity())
    }
}

/// 探测序列迭代器
///
/// 最多产出 `capacity` 个下标，满表时查找和插入都能终止。
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl ProbeSequence {
    pub fn new(start: usize, step: usize, capacity: usize) -> Self {
        Self {
            index: start,
            step,
            capacity,
            remaining: capacity,
        }
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.index;
        self.index = (self.index + self.step) % self.capacity;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
