//! Symbol Table Error Types
//!
//! 符号表错误都是局部且可恢复的：失败的操作不会留下半修改的状态，
//! 由调用方决定是报告诊断后继续还是中止当前 Pass。

use crate::symbol::{ScopeLevel, SymbolRecord};
use symtab_diagnostics::{Diagnostic, Span};
use thiserror::Error;

/// 符号表错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolTableError {
    /// 同一作用域内重复声明
    #[error("'{name}' is already declared in this scope (level {level})")]
    DuplicateDeclaration {
        name: String,
        level: ScopeLevel,
        /// 保留在表中的原声明
        existing: SymbolRecord,
        span: Option<Span>,
    },

    /// 试图退出全局作用域
    #[error("cannot exit the global scope")]
    ScopeUnderflow { span: Option<Span> },

    /// 引用了未声明的名字（由调用方报告，lookup 本身不会失败）
    #[error("unresolved reference '{name}'")]
    UnresolvedReference { name: String, span: Option<Span> },
}

impl SymbolTableError {
    pub fn unresolved(name: impl Into<String>, span: Option<Span>) -> Self {
        Self::UnresolvedReference {
            name: name.into(),
            span,
        }
    }

    /// 错误发生的位置
    pub fn span(&self) -> Option<&Span> {
        match self {
            Self::DuplicateDeclaration { span, .. } => span.as_ref(),
            Self::ScopeUnderflow { span } => span.as_ref(),
            Self::UnresolvedReference { span, .. } => span.as_ref(),
        }
    }

    /// 附上位置（驱动程序在表返回错误后补充）
    pub fn with_span(mut self, at: Span) -> Self {
        match &mut self {
            Self::DuplicateDeclaration { span, .. }
            | Self::ScopeUnderflow { span }
            | Self::UnresolvedReference { span, .. } => *span = Some(at),
        }
        self
    }

    /// 稳定的错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateDeclaration { .. } => "S001",
            Self::ScopeUnderflow { .. } => "S002",
            Self::UnresolvedReference { .. } => "S003",
        }
    }

    /// 转换为统一诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.to_string()).with_code(self.code());
        if let Some(span) = self.span() {
            diag = diag.span(span.clone());
        }

        match self {
            Self::DuplicateDeclaration { existing, .. } => {
                if let Some(previous) = existing.span() {
                    diag = diag.with_label(previous.clone(), "first declared here");
                }
                diag.with_note(format!(
                    "the existing declaration has type '{}'",
                    existing.kind()
                ))
                .suggest("rename the new declaration or open a nested scope")
            }
            Self::ScopeUnderflow { .. } => {
                diag.with_note("every 'exit' must match an earlier 'enter'")
            }
            Self::UnresolvedReference { name, .. } => {
                diag.suggest(format!("declare '{}' in this or an enclosing scope", name))
            }
        }
    }
}
