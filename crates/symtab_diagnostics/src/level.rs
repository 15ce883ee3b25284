//! DiagnosticLevel - 诊断级别

use ariadne::ReportKind;
use colored::*;
use std::fmt;

/// 诊断级别
///
/// 符号表错误（重复声明、作用域下溢、未解析引用）都是 `Error`；
/// 轨迹结束时仍未关闭的作用域只是 `Warning`，不影响退出码。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

impl DiagnosticLevel {
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }

    /// 终端里的级别标签
    pub fn colored_name(self) -> ColoredString {
        match self {
            Self::Error => self.name().red().bold(),
            Self::Warning => self.name().yellow().bold(),
        }
    }

    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    /// 渲染源码片段时用的 ariadne 报告类型
    pub fn report_kind(self) -> ReportKind<'static> {
        match self {
            Self::Error => ReportKind::Error,
            Self::Warning => ReportKind::Warning,
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
