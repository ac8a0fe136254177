//! 统一错误处理 - 哈希表可能返回的错误

use crate::types::Key;

/// 哈希表可能发生的错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProbeError {
    #[error("表已满，无法插入新条目 (容量: {capacity}, 当前大小: {size}, 负载因子: {load_factor:.2})")]
    TableFull {
        capacity: usize,
        size: usize,
        load_factor: f32,
    },

    #[error("键已存在: {key}")]
    KeyAlreadyExists {
        key: Key,
    },

    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },
}

impl ProbeError {
    pub(crate) fn table_full(capacity: usize, size: usize) -> Self {
        Self::TableFull {
            capacity,
            size,
            load_factor: size as f32 / capacity as f32,
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TableFull { .. } => Some("删除部分键或使用更大容量新建表"),
            Self::KeyAlreadyExists { .. } => Some("改用 DuplicatePolicy::Allow 或先删除旧键"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidConfig { .. })
    }
}
