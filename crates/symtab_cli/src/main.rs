use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use symtab_cli::{check_source, logger, CheckResult, ReplayOutput};
use symtab_diagnostics::Emitter;
use symtab_sema::{RedeclarationPolicy, TableConfig};

#[derive(Parser)]
#[command(name = "symtabc")]
#[command(about = "带作用域的符号表 - 用事件轨迹检查名称解析", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 关闭彩色输出
    #[arg(long, global = true)]
    no_color: bool,

    /// 同一作用域内允许重复声明（新声明替换旧声明）
    #[arg(long, global = true)]
    allow_redeclaration: bool,

    /// 输出调试日志 (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// 重放轨迹，打印查找结果和符号表快照
    Run {
        /// 输入文件
        input: String,
    },

    /// 只检查错误
    Check {
        /// 输入文件
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::init(cli.verbose).context("failed to install logger")?;
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config = TableConfig::new();
    if cli.allow_redeclaration {
        config = config.with_redeclaration(RedeclarationPolicy::Replace);
    }
    let emitter = if cli.no_color {
        Emitter::without_colors()
    } else {
        Emitter::new()
    };

    let ok = match cli.command {
        Commands::Run { input } => cmd_run(&input, config, &emitter)?,
        Commands::Check { input } => cmd_check(&input, config, &emitter)?,
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

/// 运行命令
fn cmd_run(input: &str, config: TableConfig, emitter: &Emitter) -> Result<bool> {
    let source = read_trace(input)?;
    let result = check_source(&source, input, config);

    for output in &result.outputs {
        match output {
            ReplayOutput::Lookup { name, record, line } => match record {
                Some(record) => println!(
                    "{} {}: {} (scope {})",
                    format!("{}:{}", input, line).bright_black(),
                    name.bold(),
                    record.kind(),
                    record.scope_level()
                ),
                None => println!(
                    "{} {}: {}",
                    format!("{}:{}", input, line).bright_black(),
                    name.bold(),
                    "unresolved".red()
                ),
            },
            ReplayOutput::Dump { records, line } => {
                println!("{}", format!("{}:{} Symbol Table:", input, line).bright_black());
                for record in records {
                    println!("  {}", record);
                }
            }
        }
    }

    println!("\n{}", result.table);
    report(&source, &result, emitter)
}

/// 检查命令
fn cmd_check(input: &str, config: TableConfig, emitter: &Emitter) -> Result<bool> {
    println!("🔍 检查 {} ...", input);

    let source = read_trace(input)?;
    let result = check_source(&source, input, config);
    report(&source, &result, emitter)
}

fn read_trace(input: &str) -> Result<String> {
    fs::read_to_string(input).with_context(|| format!("cannot read trace file '{}'", input))
}

/// 输出诊断并返回是否没有错误
fn report(source: &str, result: &CheckResult, emitter: &Emitter) -> Result<bool> {
    let sink = &result.diagnostics;
    for diag in sink.diagnostics() {
        emitter
            .emit_with_source(diag, source)
            .context("failed to write diagnostics")?;
    }

    if sink.has_errors() {
        eprintln!(
            "❌ 发现 {} 个错误, {} 个警告",
            sink.error_count(),
            sink.warning_count()
        );
        Ok(false)
    } else {
        println!("✅ 无错误 ({} 个警告)", sink.warning_count());
        Ok(true)
    }
}
