//! 哈希模块 - 主哈希、步长哈希与探测策略

pub mod strategy;
pub mod double_hash;
pub mod linear_probe;

pub use strategy::{ProbeSequence, ProbeStrategy};
pub use double_hash::DoubleHashStrategy;
pub use linear_probe::LinearProbeStrategy;

use crate::types::Key;

/// 步长哈希的模数
pub const STEP_MODULUS: i64 = 7;

/// 主哈希：`key mod capacity`
///
/// 负数键取欧几里得余数，结果始终落在 `0..capacity`。
pub fn slot_index(key: Key, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    key.rem_euclid(capacity as i64) as usize
}

/// 双哈希步长：`7 - (key mod 7)`，取值范围 [1, 7]，永不为零
pub fn step_size(key: Key) -> usize {
    (STEP_MODULUS - key.rem_euclid(STEP_MODULUS)) as usize
}

/// 素数判断，用于校验双哈希容量
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
