//! 核心类型定义 - 共享类型和接口

use std::fmt;

/// 键类型 - 固定宽度整数
pub type Key = i64;

/// 开放寻址槽位
///
/// 没有墓碑状态：删除后槽位直接回到 `Empty`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(Key),
}

impl Slot {
    /// 检查是否为空槽位
    pub const fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// 检查是否已占用
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// 获取槽位中的键
    pub const fn key(&self) -> Option<Key> {
        match self {
            Slot::Occupied(key) => Some(*key),
            Slot::Empty => None,
        }
    }

    /// 取出键并把槽位置空
    pub fn take(&mut self) -> Option<Key> {
        std::mem::take(self).key()
    }
}

/// 冲突解决方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableType {
    LinearProbing,
    DoubleHashing,
    SeparateChaining,
}

impl TableType {
    /// 全部表类型，按基准测试输出顺序排列
    pub const ALL: [TableType; 3] = [
        TableType::LinearProbing,
        TableType::DoubleHashing,
        TableType::SeparateChaining,
    ];

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            TableType::LinearProbing => "linear_probing",
            TableType::DoubleHashing => "double_hashing",
            TableType::SeparateChaining => "separate_chaining",
        }
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入操作
    Insert,
    /// 查找操作
    Search,
    /// 删除操作
    Remove,
}

impl OperationType {
    pub const ALL: [OperationType; 3] = [
        OperationType::Insert,
        OperationType::Search,
        OperationType::Remove,
    ];

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Insert => "insert",
            OperationType::Search => "search",
            OperationType::Remove => "remove",
        }
    }
}

/// 重复键处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// 不检查重复，按多重集合存储
    #[default]
    Allow,
    /// 插入前查找，已存在则返回 `KeyAlreadyExists`
    Reject,
}

/// 单次操作结果，携带探测次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProbeOutcome {
    /// 查找/删除是否命中；插入时恒为 true
    pub found: bool,
    /// 比较过的已占用槽位（或链表元素）数量
    pub probes: usize,
    /// 删除后重新放置的键数量（仅线性探测）
    pub rehashed: usize,
}

impl ProbeOutcome {
    pub const fn hit(probes: usize) -> Self {
        Self { found: true, probes, rehashed: 0 }
    }

    pub const fn miss(probes: usize) -> Self {
        Self { found: false, probes, rehashed: 0 }
    }

    pub const fn with_rehashed(mut self, rehashed: usize) -> Self {
        self.rehashed = rehashed;
        self
    }
}
