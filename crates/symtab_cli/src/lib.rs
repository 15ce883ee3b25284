//! Symtab Driver
//!
//! 用纯文本事件轨迹驱动符号表，代替真实的解析器，
//! 便于端到端地检查作用域行为。

pub mod logger;
pub mod replay;
pub mod trace;

pub use replay::{ReplayOutput, Replayer};
pub use trace::{parse, Event, TraceError, TraceLine};

use symtab_diagnostics::DiagnosticSink;
use symtab_sema::{ScopedSymbolTable, TableConfig};

/// 一次完整检查的结果
pub struct CheckResult {
    pub outputs: Vec<ReplayOutput>,
    pub table: ScopedSymbolTable,
    pub diagnostics: DiagnosticSink,
}

/// 解析并重放一份轨迹
///
/// 解析错误的行被跳过，其余事件照常重放；所有问题都收集在
/// `diagnostics` 中。
pub fn check_source(source: &str, file: &str, config: TableConfig) -> CheckResult {
    let (lines, errors) = parse(source);

    let mut replayer = Replayer::for_file(config, file);
    for err in &errors {
        replayer.report(err.to_diagnostic());
    }
    let outputs = replayer.run(&lines);
    let (table, diagnostics) = replayer.finish();

    CheckResult {
        outputs,
        table,
        diagnostics,
    }
}
