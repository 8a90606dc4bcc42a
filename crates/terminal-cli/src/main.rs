//! 트레이딩 터미널 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 전체 지표 테이블 출력
//! terminal compute -i data/aapl_daily.csv
//!
//! # 마지막 20행을 JSON으로
//! terminal compute -i data/aapl_daily.json -f json --tail 20
//!
//! # 최신 RSI/MACD 요약
//! terminal summary -i data/aapl_daily.csv -c config/terminal.toml
//!
//! # 가격 알림 평가
//! terminal alert -s AAPL --threshold 190 --direction above --last 191.2
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use terminal_analytics::IndicatorEngine;
use terminal_core::{init_logging, AppConfig, LogConfig};
use tracing::{error, info};

use terminal_cli::commands::alert::{check_alert, AlertCheckConfig};
use terminal_cli::commands::compute::{run_compute, ComputeConfig, OutputFormat};
use terminal_cli::commands::summary::{summarize, write_summary};

#[derive(Parser)]
#[command(name = "terminal")]
#[command(about = "Trading terminal CLI - 기술적 지표 계산 도구", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 가격 파일의 차트 지표 계산 (SMA, EMA, RSI, MACD, 볼린저 밴드)
    Compute {
        /// 가격 파일 (CSV 또는 JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// 출력 형식 (table, csv, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// 마지막 N행만 출력 (0 = 전체)
        #[arg(long, default_value = "0")]
        tail: usize,
    },

    /// 최신 RSI/MACD 요약
    Summary {
        /// 가격 파일 (CSV 또는 JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// 가격 알림 규칙 평가
    Alert {
        /// 심볼 (예: AAPL)
        #[arg(short, long)]
        symbol: String,

        /// 기준가
        #[arg(long)]
        threshold: String,

        /// 방향 (above, below)
        #[arg(long, default_value = "above")]
        direction: String,

        /// 최근 체결가
        #[arg(long)]
        last: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    if let Err(e) = init_logging(LogConfig::from(&config.logging)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let engine = IndicatorEngine::from_settings(&config.indicators);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Compute {
            input,
            format,
            tail,
        } => {
            let compute = ComputeConfig {
                input,
                format: OutputFormat::parse(&format)?,
                tail,
            };

            match run_compute(&compute, &engine, &mut out) {
                Ok(count) => info!("Computed indicators for {} rows", count),
                Err(e) => {
                    error!("Compute failed: {:#}", e);
                    return Err(e);
                }
            }
        }

        Commands::Summary { input } => {
            let summary = summarize(&input, &engine)?;
            write_summary(&summary, &engine, &mut out)?;
        }

        Commands::Alert {
            symbol,
            threshold,
            direction,
            last,
        } => {
            let check = AlertCheckConfig {
                symbol,
                threshold,
                direction,
                last,
            };

            if check_alert(&check)? {
                writeln!(
                    out,
                    "알림 발동: {} {} {}",
                    check.symbol, check.direction, check.threshold
                )?;
            } else {
                writeln!(out, "알림 없음")?;
            }
        }
    }

    Ok(())
}
