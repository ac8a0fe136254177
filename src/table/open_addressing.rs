//! 开放寻址公共部分 - 槽位数组、定位与放置

use crate::{
    error::ProbeError,
    hash::ProbeStrategy,
    log_warn,
    types::{DuplicatePolicy, Key, ProbeOutcome, Slot},
};

/// 开放寻址槽位表
///
/// 不变量：`len` 始终等于非空槽位数量。
#[derive(Debug, Clone)]
pub(crate) struct OpenAddressing<S: ProbeStrategy> {
    slots: Vec<Slot>,
    len: usize,
    strategy: S,
    duplicate_policy: DuplicatePolicy,
}

impl<S: ProbeStrategy> OpenAddressing<S> {
    pub(crate) fn new(strategy: S, duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            slots: vec![Slot::Empty; strategy.capacity()],
            len: 0,
            strategy,
            duplicate_policy,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// 沿探测序列扫描连续的已占用槽位，遇到空槽位停止
    ///
    /// 返回键所在下标（若找到）和比较过的槽位数。
    pub(crate) fn locate(&self, key: Key) -> (Option<usize>, usize) {
        let mut probes = 0;
        for index in self.strategy.probe_sequence(key) {
            match self.slots[index] {
                Slot::Empty => break,
                Slot::Occupied(stored) => {
                    probes += 1;
                    if stored == key {
                        return (Some(index), probes);
                    }
                }
            }
        }
        (None, probes)
    }

    /// 探测序列上的第一个空槽位，以及途经的已占用槽位数
    pub(crate) fn first_empty(&self, key: Key) -> Option<(usize, usize)> {
        let mut probes = 0;
        for index in self.strategy.probe_sequence(key) {
            if self.slots[index].is_empty() {
                return Some((index, probes));
            }
            probes += 1;
        }
        None
    }

    pub(crate) fn insert(&mut self, key: Key) -> Result<ProbeOutcome, ProbeError> {
        if self.duplicate_policy == DuplicatePolicy::Reject {
            if let (Some(_), _) = self.locate(key) {
                return Err(ProbeError::KeyAlreadyExists { key });
            }
        }
        if self.len >= self.capacity() {
            log_warn!("{} table full, rejecting key {} (capacity {})",
                self.strategy.strategy_type(), key, self.capacity());
            return Err(ProbeError::table_full(self.capacity(), self.len));
        }
        let (index, probes) = self
            .first_empty(key)
            .ok_or_else(|| ProbeError::table_full(self.capacity(), self.len))?;
        self.store(index, key);
        Ok(ProbeOutcome::hit(probes))
    }

    pub(crate) fn store(&mut self, index: usize, key: Key) {
        debug_assert!(self.slots[index].is_empty());
        self.slots[index] = Slot::Occupied(key);
        self.len += 1;
    }

    /// 清空槽位并返回原来的键
    pub(crate) fn clear_at(&mut self, index: usize) -> Option<Key> {
        let key = self.slots[index].take()?;
        self.len -= 1;
        Some(key)
    }
}
