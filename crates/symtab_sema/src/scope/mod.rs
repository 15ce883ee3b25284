//! Scope Management
//!
//! 作用域管理，处理嵌套作用域和符号查找。
//! 采用栈式作用域设计：每个作用域独占自己的绑定，出栈即释放。

use crate::symbol::{ScopeLevel, SymbolRecord};
use indexmap::IndexMap;

pub mod stack;
pub use stack::ScopeStack;

/// 作用域类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// 全局作用域
    Global,
    /// 函数作用域
    Function,
    /// 类作用域
    Class,
    /// 块作用域 (if, while, {} 等)
    Block,
}

impl ScopeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Function => "function",
            Self::Class => "class",
            Self::Block => "block",
        }
    }
}

/// 单个作用域
#[derive(Debug, Clone)]
pub struct Scope {
    level: ScopeLevel,
    kind: ScopeKind,
    /// 名称 -> 符号，按声明顺序排列
    bindings: IndexMap<String, SymbolRecord>,
}

impl Scope {
    pub fn new(level: ScopeLevel, kind: ScopeKind) -> Self {
        Self {
            level,
            kind,
            bindings: IndexMap::new(),
        }
    }

    pub fn level(&self) -> ScopeLevel {
        self.level
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    /// 在当前作用域绑定符号，返回被替换的旧绑定
    pub(crate) fn bind(&mut self, record: SymbolRecord) -> Option<SymbolRecord> {
        self.bindings.insert(record.name().to_string(), record)
    }

    /// 在当前作用域查找符号（不向上查找）
    pub fn lookup_local(&self, name: &str) -> Option<&SymbolRecord> {
        self.bindings.get(name)
    }

    /// 按声明顺序遍历绑定
    pub fn records(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.bindings.values()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
