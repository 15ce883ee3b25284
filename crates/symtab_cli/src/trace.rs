//! Event Trace Parser
//!
//! 事件轨迹是驱动符号表的纯文本脚本，每行一个事件：
//!
//! ```text
//! declare x int
//! enter function
//! declare x float     # 遮蔽外层的 x
//! lookup x
//! exit
//! dump
//! ```
//!
//! `#` 之后为注释，空行忽略。解析错误可恢复：出错的行被跳过，
//! 其余行照常解析。

use symtab_diagnostics::{Diagnostic, Span};
use symtab_sema::ScopeKind;
use thiserror::Error;

/// 单个事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Enter(ScopeKind),
    Exit,
    Declare { name: String, kind: String },
    Lookup { name: String },
    Dump,
    Reset,
}

/// 带位置的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceLine {
    pub event: Event,
    /// 去掉缩进和注释后的行范围
    pub span: Span,
    /// 1 起始的行号
    pub line: usize,
}

/// 轨迹解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    #[error("unknown command '{command}'")]
    UnknownCommand { command: String, span: Span },

    #[error("'{command}' expects {operand}")]
    MissingOperand {
        command: &'static str,
        operand: &'static str,
        span: Span,
    },

    #[error("'{command}' takes no operands")]
    UnexpectedOperand { command: &'static str, span: Span },

    #[error("unknown scope kind '{kind}'")]
    UnknownScopeKind { kind: String, span: Span },
}

impl TraceError {
    pub fn span(&self) -> &Span {
        match self {
            Self::UnknownCommand { span, .. } => span,
            Self::MissingOperand { span, .. } => span,
            Self::UnexpectedOperand { span, .. } => span,
            Self::UnknownScopeKind { span, .. } => span,
        }
    }

    /// 转换为统一诊断
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string())
            .with_code("T001")
            .span(self.span().clone());

        match self {
            Self::UnknownCommand { .. } => {
                diag.with_note("commands are: enter, exit, declare, lookup, dump, reset")
            }
            Self::UnknownScopeKind { .. } => {
                diag.with_note("scope kinds are: block, function, class")
            }
            _ => diag,
        }
    }
}

/// 解析整个轨迹，返回成功解析的事件和所有错误
pub fn parse(source: &str) -> (Vec<TraceLine>, Vec<TraceError>) {
    let mut lines = Vec::new();
    let mut errors = Vec::new();
    let mut offset = 0;

    for (index, raw) in source.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw.len();

        let code = match raw.find('#') {
            Some(hash) => &raw[..hash],
            None => raw,
        };
        let text = code.trim();
        if text.is_empty() {
            continue;
        }

        let start = line_start + (code.len() - code.trim_start().len());
        let span = start..start + text.len();

        match parse_event(text, span.clone()) {
            Ok(event) => lines.push(TraceLine {
                event,
                span,
                line: index + 1,
            }),
            Err(err) => errors.push(err),
        }
    }

    (lines, errors)
}

fn parse_event(text: &str, span: Span) -> Result<Event, TraceError> {
    let (command, rest) = match text.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (text, ""),
    };

    match command {
        "enter" => {
            let kind = match rest {
                "" | "block" => ScopeKind::Block,
                "function" => ScopeKind::Function,
                "class" => ScopeKind::Class,
                other => {
                    return Err(TraceError::UnknownScopeKind {
                        kind: other.to_string(),
                        span,
                    })
                }
            };
            Ok(Event::Enter(kind))
        }
        "exit" => no_operands("exit", rest, span).map(|()| Event::Exit),
        "dump" => no_operands("dump", rest, span).map(|()| Event::Dump),
        "reset" => no_operands("reset", rest, span).map(|()| Event::Reset),
        "lookup" => match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => Err(TraceError::MissingOperand {
                command: "lookup",
                operand: "a name",
                span,
            }),
            [name] => Ok(Event::Lookup {
                name: name.to_string(),
            }),
            _ => Err(TraceError::UnexpectedOperand {
                command: "lookup",
                span,
            }),
        },
        "declare" => {
            let (name, kind) = match rest.split_once(char::is_whitespace) {
                Some((name, kind)) => (name, kind.trim()),
                None => (rest, ""),
            };
            if name.is_empty() {
                return Err(TraceError::MissingOperand {
                    command: "declare",
                    operand: "a name and a type",
                    span,
                });
            }
            if kind.is_empty() {
                return Err(TraceError::MissingOperand {
                    command: "declare",
                    operand: "a type after the name",
                    span,
                });
            }
            Ok(Event::Declare {
                name: name.to_string(),
                kind: kind.to_string(),
            })
        }
        other => Err(TraceError::UnknownCommand {
            command: other.to_string(),
            span,
        }),
    }
}

fn no_operands(command: &'static str, rest: &str, span: Span) -> Result<(), TraceError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(TraceError::UnexpectedOperand { command, span })
    }
}
