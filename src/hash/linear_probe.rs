//! 线性探测策略 - 冲突时顺序检查下一个槽位

use crate::{
    hash::{slot_index, strategy::ProbeStrategy},
    types::{Key, TableType},
};

/// 线性探测策略
#[derive(Debug, Clone, Copy)]
pub struct LinearProbeStrategy {
    capacity: usize,
}

impl LinearProbeStrategy {
    /// 创建新线性探测策略
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl ProbeStrategy for LinearProbeStrategy {
    fn home_slot(&self, key: Key) -> usize {
        slot_index(key, self.capacity)
    }

    fn step(&self, _key: Key) -> usize {
        1
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn strategy_type(&self) -> TableType {
        TableType::LinearProbing
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_probe() {
        let strategy = LinearProbeStrategy::new(100);
        let seq: Vec<usize> = strategy.probe_sequence(198).take(3).collect();
        assert_eq!(seq, vec![98, 99, 0], "应顺序探测并在末尾回绕");
    }

    #[test]
    fn test_same_key_same_slot() {
        let strategy = LinearProbeStrategy::new(100);
        assert_eq!(strategy.home_slot(1234), strategy.home_slot(1234));
        assert_eq!(strategy.home_slot(34), strategy.home_slot(1234), "同余键应冲突");
    }

    #[test]
    fn test_strategy_type() {
        assert_eq!(LinearProbeStrategy::new(7).strategy_type(), TableType::LinearProbing);
    }
}
