//! Symtab Diagnostics
//!
//! 统一的诊断系统，为符号表及其驱动程序提供清晰的错误报告。
//!
//! # 核心类型
//!
//! - [`Diagnostic`] - 诊断信息主体
//! - [`DiagnosticLevel`] - 诊断级别（Error/Warning）
//! - [`DiagnosticSink`] - 诊断收集器
//! - [`Emitter`] - 诊断输出器
//! - [`Span`] - 源码位置信息（字节偏移）
//!
//! # 示例
//!
//! ```rust
//! use symtab_diagnostics::{Diagnostic, DiagnosticSink, Emitter};
//!
//! let source = "declare x int\ndeclare x float\n";
//! let mut sink = DiagnosticSink::for_file("main.trace");
//!
//! sink.add(
//!     Diagnostic::error("'x' is already declared in this scope")
//!         .span(14..29)
//!         .with_label(0..13, "first declared here")
//!         .suggest("rename the second declaration"),
//! );
//!
//! let emitter = Emitter::without_colors();
//! let mut out = Vec::new();
//! for diag in sink.diagnostics() {
//!     emitter.write(diag, Some(source), &mut out).unwrap();
//! }
//! assert!(String::from_utf8(out).unwrap().contains("main.trace:2:1"));
//! ```

pub mod diagnostic;
pub mod emitter;
pub mod level;
pub mod sink;
pub mod span;

// 重新导出核心类型
pub use diagnostic::{Diagnostic, Label};
pub use emitter::Emitter;
pub use level::DiagnosticLevel;
pub use sink::DiagnosticSink;
pub use span::{char_span, Span};
