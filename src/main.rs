// ==========================================
// 高校数据录入系统 - 命令行入口
// ==========================================
// 子命令: tabs / prompt / preview / import
// 标准输出: 表格与提示词；日志写入标准错误
// ==========================================

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use academic_data_entry::api::{ApiError, EntryApi};
use academic_data_entry::app::AppState;
use academic_data_entry::i18n::{t, t_with_args};
use academic_data_entry::importer::{AutoConfirm, CommitOutcome, Confirmer};
use academic_data_entry::RecordKind;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "academic-data-entry", version, about = "高校数据录入系统 - JSON 批量导入")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// 列出全部标签页
    Tabs,
    /// 输出某领域的生成提示词
    Prompt {
        /// 标签页键（training/personnel/admission/class/department/business）
        tab: String,
    },
    /// 解析 JSON 文件并输出预览
    Preview { tab: String, file: PathBuf },
    /// 解析 JSON 文件,确认后导入
    Import {
        tab: String,
        file: PathBuf,
        /// 跳过确认
        #[arg(long)]
        yes: bool,
    },
}

/// 标准输入确认
struct StdinConfirmer;

impl Confirmer for StdinConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        print!("{} [y/N] ", message);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

fn main() -> ExitCode {
    academic_data_entry::logging::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    tracing::debug!("{} v{}", academic_data_entry::APP_NAME, academic_data_entry::VERSION);
    let state = AppState::from_default_config().map_err(anyhow::Error::msg)?;
    let api = state.entry_api.as_ref();

    match cli.command {
        Commands::Tabs => {
            for tab in api.list_tabs().map_err(user_error)? {
                println!("{:<12} {}", tab.kind, tab.label);
            }
        }
        Commands::Prompt { tab } => {
            let kind = parse_ingestion_kind(&tab)?;
            println!("{}", api.get_generation_prompt(kind).map_err(user_error)?);
        }
        Commands::Preview { tab, file } => {
            let kind = parse_ingestion_kind(&tab)?;
            stage_file(api, kind, &file)?;
            println!("{}", api.get_preview(kind).map_err(user_error)?.render_text());
        }
        Commands::Import { tab, file, yes } => {
            let kind = parse_ingestion_kind(&tab)?;
            stage_file(api, kind, &file)?;
            println!("{}", api.get_preview(kind).map_err(user_error)?.render_text());

            let outcome = if yes {
                api.commit_staged(kind, &mut AutoConfirm(true))
            } else {
                api.commit_staged(kind, &mut StdinConfirmer)
            }
            .map_err(user_error)?;

            match outcome {
                CommitOutcome::Empty => println!("{}", t("cli.import_empty")),
                CommitOutcome::Cancelled => println!("{}", t("cli.import_cancelled")),
                CommitOutcome::Imported { count } => {
                    let context = api.get_context().map_err(user_error)?;
                    let count = count.to_string();
                    let label = kind.label();
                    println!(
                        "{}",
                        t_with_args(
                            "cli.imported",
                            &[
                                ("count", count.as_str()),
                                ("title", label.as_str()),
                                ("year", context.current_academic_year.as_str()),
                            ],
                        )
                    );
                }
            }
        }
    }

    Ok(())
}

fn parse_ingestion_kind(tab: &str) -> anyhow::Result<RecordKind> {
    let kind: RecordKind = tab.parse().map_err(anyhow::Error::msg)?;
    if !kind.is_ingestion() {
        bail!("{} 不支持 JSON 批量导入", kind);
    }
    Ok(kind)
}

fn stage_file(api: &EntryApi, kind: RecordKind, file: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("无法读取文件: {}", file.display()))?;
    api.paste_payload(kind, &text).map_err(user_error)?;
    Ok(())
}

/// 错误代码 + 本地化消息
fn user_error(err: ApiError) -> anyhow::Error {
    anyhow::anyhow!("[{}] {}", err.code(), err)
}
