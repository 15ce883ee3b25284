//! Stderr Logger
//!
//! 把库里的 `log` 输出打印到 stderr，级别由 `-v` 次数决定。

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".blue().bold(),
            Level::Debug => "debug".bright_black().bold(),
            Level::Trace => "trace".bright_black(),
        };
        eprintln!("[{}] {}", tag, record.args());
    }

    fn flush(&self) {}
}

/// `-v` 次数对应的日志级别
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// 安装全局 logger，只能调用一次
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level_for(verbosity));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(5), LevelFilter::Trace);
    }

    #[test]
    fn test_init_installs_once() {
        use anyhow::Context;

        init(1).context("failed to install logger").unwrap();
        assert_eq!(log::max_level(), LevelFilter::Debug);

        let err = init(2).context("failed to install logger").unwrap_err();
        assert_eq!(err.to_string(), "failed to install logger");
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
