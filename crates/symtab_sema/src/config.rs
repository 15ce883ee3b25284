//! Table Configuration

/// 同一作用域内再次声明同名标识符时的处理策略
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RedeclarationPolicy {
    /// 报告 `DuplicateDeclaration`，表保持不变
    #[default]
    Reject,
    /// 原地替换旧绑定（保留其声明顺序位置）
    Replace,
}

/// 符号表配置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableConfig {
    pub redeclaration: RedeclarationPolicy,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_redeclaration(mut self, policy: RedeclarationPolicy) -> Self {
        self.redeclaration = policy;
        self
    }
}
