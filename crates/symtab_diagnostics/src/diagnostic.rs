//! Diagnostic - 诊断信息
//!
//! 表示一个符号表诊断（重复声明、未解析引用等）

use crate::level::DiagnosticLevel;
use crate::span::Span;

/// 次要标注，例如 "之前的声明在这里"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// 诊断信息
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// 诊断级别
    pub level: DiagnosticLevel,
    /// 错误码，例如 `S001`
    pub code: Option<&'static str>,
    /// 主要消息
    pub message: String,
    /// 主要位置（可选）
    pub span: Option<Span>,
    /// 来源文件
    pub file: Option<String>,
    /// 次要标注
    pub labels: Vec<Label>,
    /// 补充注释
    pub notes: Vec<String>,
    /// 修复建议
    pub help: Vec<String>,
}

impl Diagnostic {
    fn new(level: DiagnosticLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            span: None,
            file: None,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
        }
    }

    /// 创建错误诊断
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, message)
    }

    /// 创建警告诊断
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Warning, message)
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// 设置位置信息
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// 设置来源文件
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// 添加次要标注
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// 添加注释
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// 添加建议
    pub fn suggest(mut self, message: impl Into<String>) -> Self {
        self.help.push(message.into());
        self
    }

    /// `[S001] message` 形式的标题
    pub fn headline(&self) -> String {
        match self.code {
            Some(code) => format!("[{}] {}", code, self.message),
            None => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_creation() {
        let diag = Diagnostic::error("'x' is already declared in this scope")
            .with_code("S001")
            .span(10..20)
            .with_label(0..5, "first declared here")
            .with_note("both declarations are at scope level 0")
            .suggest("rename one of the declarations");

        assert_eq!(diag.level, DiagnosticLevel::Error);
        assert_eq!(diag.span, Some(10..20));
        assert_eq!(diag.labels, vec![Label::new(0..5, "first declared here")]);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.help, vec!["rename one of the declarations".to_string()]);
    }

    #[test]
    fn test_headline() {
        let plain = Diagnostic::warning("unused");
        assert_eq!(plain.headline(), "unused");

        let coded = Diagnostic::error("cannot exit the global scope").with_code("S002");
        assert_eq!(coded.headline(), "[S002] cannot exit the global scope");
    }

    #[test]
    fn test_with_file() {
        let diag = Diagnostic::warning("1 scope(s) still open at end of trace")
            .with_file("main.trace");
        assert_eq!(diag.file.as_deref(), Some("main.trace"));
        assert_eq!(diag.level, DiagnosticLevel::Warning);
    }
}
