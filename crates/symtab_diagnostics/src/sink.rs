//! DiagnosticSink - 诊断收集器
//!
//! 重放过程中出现的错误都是可恢复的，先收集起来最后统一输出

use crate::diagnostic::Diagnostic;
use crate::level::DiagnosticLevel;

/// 诊断收集器
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    /// 所有诊断都会带上的来源文件
    file: Option<String>,
}

impl DiagnosticSink {
    /// 为之后加入的诊断统一设置来源文件
    pub fn for_file(file: impl Into<String>) -> Self {
        Self {
            diagnostics: Vec::new(),
            file: Some(file.into()),
        }
    }

    /// 添加诊断，未标注来源文件的补上收集器的文件
    pub fn add(&mut self, mut diagnostic: Diagnostic) {
        if diagnostic.file.is_none() {
            diagnostic.file = self.file.clone();
        }
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.level.is_error())
    }

    /// 按加入顺序返回所有诊断
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn error_count(&self) -> usize {
        self.count(DiagnosticLevel::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticLevel::Warning)
    }

    fn count(&self, level: DiagnosticLevel) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
