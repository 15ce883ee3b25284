//! Emitter - 诊断输出器
//!
//! 负责将诊断信息格式化输出。没有源码时输出简短格式，
//! 有源码时借助 ariadne 标注出错的行。

use crate::diagnostic::Diagnostic;
use crate::span::{char_span, Span};
use ariadne::{sources, Color, Config, Label, Report, ReportBuilder};
use colored::*;
use std::io::{self, Write};

/// 诊断未标注来源文件时 ariadne 报告使用的名字
const ANONYMOUS_SOURCE: &str = "<trace>";

/// ariadne 的 span：(来源文件, 字符偏移范围)
type FileSpan = (String, Span);

/// 诊断输出器
pub struct Emitter {
    /// 是否使用颜色
    use_colors: bool,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// 创建新的输出器
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// 创建无颜色的输出器
    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }

    /// 带源码片段输出到 stderr
    pub fn emit_with_source(&self, diagnostic: &Diagnostic, source: &str) -> io::Result<()> {
        self.write(diagnostic, Some(source), &mut io::stderr().lock())
    }

    /// 写入任意输出流
    ///
    /// 有源码且诊断带位置时使用 ariadne 渲染，否则输出简短格式。
    pub fn write<W: Write>(
        &self,
        diagnostic: &Diagnostic,
        source: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        match (source, &diagnostic.span) {
            (Some(src), Some(span)) => self.write_report(diagnostic, span, src, out),
            _ if self.use_colors => self.write_colored(diagnostic, out),
            _ => self.write_plain(diagnostic, out),
        }
    }

    fn write_report<W: Write>(
        &self,
        diagnostic: &Diagnostic,
        span: &Span,
        source: &str,
        out: &mut W,
    ) -> io::Result<()> {
        let file = diagnostic
            .file
            .clone()
            .unwrap_or_else(|| ANONYMOUS_SOURCE.to_string());
        let primary = char_span(source, span);

        let mut report: ReportBuilder<'_, FileSpan> =
            Report::build(diagnostic.level.report_kind(), file.clone(), primary.start)
                .with_config(Config::default().with_color(self.use_colors))
                .with_message(&diagnostic.message)
                .with_label(
                    Label::new((file.clone(), primary))
                        .with_message(&diagnostic.message)
                        .with_color(Color::Red),
                );

        if let Some(code) = diagnostic.code {
            report = report.with_code(code);
        }
        for label in &diagnostic.labels {
            report = report.with_label(
                Label::new((file.clone(), char_span(source, &label.span)))
                    .with_message(&label.message)
                    .with_color(Color::Blue),
            );
        }
        if !diagnostic.notes.is_empty() {
            report = report.with_note(diagnostic.notes.join("\n"));
        }
        if !diagnostic.help.is_empty() {
            report = report.with_help(diagnostic.help.join("\n"));
        }

        report
            .finish()
            .write(sources(vec![(file, source.to_string())]), out)
    }

    fn write_colored<W: Write>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}: {}",
            diagnostic.level.colored_name(),
            diagnostic.headline().bold()
        )?;

        if let Some(location) = location(diagnostic) {
            writeln!(out, "  {} {}", "-->".blue().bold(), location)?;
        }
        for label in &diagnostic.labels {
            writeln!(
                out,
                "  {} {:?}: {}",
                "-".blue().bold(),
                label.span,
                label.message
            )?;
        }
        for note in &diagnostic.notes {
            writeln!(
                out,
                "  {} {}",
                "=".blue().bold(),
                format!("note: {}", note).bright_black()
            )?;
        }
        for help in &diagnostic.help {
            writeln!(
                out,
                "  {} {}",
                "=".green().bold(),
                format!("help: {}", help).green()
            )?;
        }
        Ok(())
    }

    fn write_plain<W: Write>(&self, diagnostic: &Diagnostic, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}: {}", diagnostic.level, diagnostic.headline())?;

        if let Some(location) = location(diagnostic) {
            writeln!(out, "  --> {}", location)?;
        }
        for label in &diagnostic.labels {
            writeln!(out, "  - {:?}: {}", label.span, label.message)?;
        }
        for note in &diagnostic.notes {
            writeln!(out, "  = note: {}", note)?;
        }
        for help in &diagnostic.help {
            writeln!(out, "  = help: {}", help)?;
        }
        Ok(())
    }
}

fn location(diagnostic: &Diagnostic) -> Option<String> {
    match (&diagnostic.file, &diagnostic.span) {
        (Some(file), Some(span)) => Some(format!("{}@{:?}", file, span)),
        (Some(file), None) => Some(file.clone()),
        (None, Some(span)) => Some(format!("{:?}", span)),
        (None, None) => None,
    }
}
