//! Symbol Records
//!
//! 符号记录：一次声明留下的全部信息。
//! 创建后不可修改，所有字段只通过访问器读取。

use std::fmt;
use symtab_diagnostics::Span;

/// 作用域层级，全局作用域为 0
pub type ScopeLevel = usize;

/// 一个已声明的标识符
///
/// `kind` 是不透明的分类字符串，例如 `int`、`float` 或 `fn(int) -> int`，
/// 符号表本身不解释它的含义。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRecord {
    name: String,
    kind: String,
    scope_level: ScopeLevel,
    span: Option<Span>,
}

impl SymbolRecord {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        scope_level: ScopeLevel,
        span: Option<Span>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            scope_level,
            span,
        }
    }

    /// 标识符文本
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 语义分类（类型或函数签名）
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// 声明所在的作用域层级
    pub fn scope_level(&self) -> ScopeLevel {
        self.scope_level
    }

    /// 声明在源码中的位置（若驱动程序提供）
    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }
}

impl fmt::Display for SymbolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Type: {}, Scope: {}",
            self.name, self.kind, self.scope_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let record = SymbolRecord::new("add", "fn(int, int) -> int", 0, Some(4..7));
        assert_eq!(record.name(), "add");
        assert_eq!(record.kind(), "fn(int, int) -> int");
        assert_eq!(record.scope_level(), 0);
        assert_eq!(record.span(), Some(&(4..7)));
    }

    #[test]
    fn test_display() {
        let record = SymbolRecord::new("x", "float", 2, None);
        assert_eq!(record.to_string(), "Name: x, Type: float, Scope: 2");
    }
}
