//! Trace Replay
//!
//! 按顺序把事件应用到符号表上。符号表错误都可恢复，
//! 收集为诊断后继续重放后面的事件。

use crate::trace::{Event, TraceLine};
use log::debug;
use symtab_diagnostics::{Diagnostic, DiagnosticSink, Span};
use symtab_sema::{ScopedSymbolTable, SymbolRecord, SymbolTableError, TableConfig};

/// 重放产生的输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutput {
    /// 一次查找的结果（未找到为 None）
    Lookup {
        name: String,
        record: Option<SymbolRecord>,
        line: usize,
    },
    /// `dump` 时刻的符号表快照
    Dump { records: Vec<SymbolRecord>, line: usize },
}

/// 轨迹重放器
pub struct Replayer {
    table: ScopedSymbolTable,
    sink: DiagnosticSink,
}

impl Replayer {
    /// 诊断统一标注来源文件
    pub fn for_file(config: TableConfig, file: impl Into<String>) -> Self {
        Self {
            table: ScopedSymbolTable::with_config(config),
            sink: DiagnosticSink::for_file(file),
        }
    }

    /// 加入重放之外产生的诊断（例如解析错误）
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.sink.add(diagnostic);
    }

    /// 重放全部事件
    ///
    /// 结束时仍有未关闭的作用域会产生一条警告。
    pub fn run(&mut self, lines: &[TraceLine]) -> Vec<ReplayOutput> {
        debug!("replaying {} event(s)", lines.len());

        let mut outputs = Vec::new();
        for line in lines {
            if let Some(output) = self.step(line) {
                outputs.push(output);
            }
        }

        let open = self.table.depth() - 1;
        if open > 0 {
            self.sink.add(
                Diagnostic::warning(format!(
                    "{} scope(s) still open at end of trace",
                    open
                ))
                .with_code("T002")
                .suggest("add a matching 'exit' for every 'enter'"),
            );
        }
        outputs
    }

    /// 应用单个事件
    pub fn step(&mut self, line: &TraceLine) -> Option<ReplayOutput> {
        match &line.event {
            Event::Enter(kind) => {
                self.table.enter_scope_kind(*kind);
                None
            }
            Event::Exit => {
                if let Err(err) = self.table.exit_scope() {
                    self.fail(err, &line.span);
                }
                None
            }
            Event::Declare { name, kind } => {
                if let Err(err) = self.table.declare_at(name, kind, line.span.clone()) {
                    self.fail(err, &line.span);
                }
                None
            }
            Event::Lookup { name } => {
                let record = match self.table.resolve(name, Some(line.span.clone())) {
                    Ok(record) => Some(record.clone()),
                    Err(err) => {
                        self.fail(err, &line.span);
                        None
                    }
                };
                Some(ReplayOutput::Lookup {
                    name: name.clone(),
                    record,
                    line: line.line,
                })
            }
            Event::Dump => Some(ReplayOutput::Dump {
                records: self.table.dump(),
                line: line.line,
            }),
            Event::Reset => {
                self.table.reset();
                None
            }
        }
    }

    fn fail(&mut self, err: SymbolTableError, span: &Span) {
        debug!("trace error: {}", err);
        self.sink.add(err.with_span(span.clone()).to_diagnostic());
    }

    /// 结束重放，取出符号表和诊断
    pub fn finish(self) -> (ScopedSymbolTable, DiagnosticSink) {
        (self.table, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::parse;

    fn replay(source: &str) -> (Vec<ReplayOutput>, ScopedSymbolTable, DiagnosticSink) {
        let (lines, errors) = parse(source);
        assert!(errors.is_empty());
        let mut replayer = Replayer::for_file(TableConfig::default(), "test.trace");
        let outputs = replayer.run(&lines);
        let (table, sink) = replayer.finish();
        (outputs, table, sink)
    }

    #[test]
    fn test_lookup_output() {
        let (outputs, _, sink) = replay("declare x int\nenter\ndeclare x float\nlookup x\nexit\nlookup x\n");

        let kinds: Vec<_> = outputs
            .iter()
            .map(|o| match o {
                ReplayOutput::Lookup { record, .. } => record
                    .as_ref()
                    .map(|r| (r.kind().to_string(), r.scope_level())),
                ReplayOutput::Dump { .. } => None,
            })
            .collect();
        assert_eq!(
            kinds,
            vec![Some(("float".to_string(), 1)), Some(("int".to_string(), 0))]
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn test_errors_do_not_stop_replay() {
        let (outputs, table, sink) = replay("exit\ndeclare x int\ndeclare x bool\nlookup y\nlookup x\n");

        assert_eq!(outputs.len(), 2);
        let codes: Vec<_> = sink
            .diagnostics()
            .iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(codes, vec![Some("S002"), Some("S001"), Some("S003")]);
        assert_eq!(table.lookup("x").unwrap().kind(), "int");
    }

    #[test]
    fn test_duplicate_points_at_first_declaration() {
        let (_, _, sink) = replay("declare x int\ndeclare x float\n");
        let diag = &sink.diagnostics()[0];
        assert_eq!(diag.span, Some(14..29));
        assert_eq!(diag.file.as_deref(), Some("test.trace"));
        assert_eq!(diag.labels[0].span, 0..13);
    }

    #[test]
    fn test_unclosed_scope_warning() {
        let (_, _, sink) = replay("enter\nenter function\nexit\n");
        assert!(!sink.has_errors());
        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.diagnostics()[0].message, "1 scope(s) still open at end of trace");
    }

    #[test]
    fn test_dump_and_reset() {
        let (outputs, table, sink) = replay("declare a int\nenter\ndeclare b int\ndump\nreset\ndump\n");
        match (&outputs[0], &outputs[1]) {
            (
                ReplayOutput::Dump { records: first, line: 4 },
                ReplayOutput::Dump { records: second, line: 6 },
            ) => {
                assert_eq!(first.len(), 2);
                assert!(second.is_empty());
            }
            other => panic!("unexpected outputs: {:?}", other),
        }
        assert_eq!(table.depth(), 1);
        assert!(sink.is_empty());
    }
}
