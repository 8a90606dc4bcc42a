//! 지표 계산 및 출력.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use terminal_analytics::{build_chart_rows, ChartRow, IndicatorEngine};
use tracing::info;

use super::input::load_points;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!(
                "Invalid format: {}. Use: table, csv, json",
                s
            )),
        }
    }
}

/// 지표 계산 설정.
#[derive(Debug)]
pub struct ComputeConfig {
    /// 가격 파일 경로
    pub input: PathBuf,
    /// 출력 형식
    pub format: OutputFormat,
    /// 마지막 N개 행만 출력 (0 = 전체)
    pub tail: usize,
}

/// 가격 파일을 읽어 차트 행을 계산하고 출력합니다.
///
/// # 반환
/// 출력한 행 수
pub fn run_compute<W: Write>(
    config: &ComputeConfig,
    engine: &IndicatorEngine,
    out: &mut W,
) -> Result<usize> {
    let points = load_points(&config.input)?;
    let rows = build_chart_rows(&points, engine).context("Indicator computation failed")?;

    let skip = if config.tail == 0 {
        0
    } else {
        rows.len().saturating_sub(config.tail)
    };
    let rows = &rows[skip..];

    write_rows(rows, config.format, out)?;
    info!(rows = rows.len(), format = ?config.format, "Indicators written");
    Ok(rows.len())
}

/// 차트 행을 지정 형식으로 씁니다.
pub fn write_rows<W: Write>(rows: &[ChartRow], format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Table => write_table(rows, out)?,
    }
    Ok(())
}

fn write_table<W: Write>(rows: &[ChartRow], out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>7} {:>9} {:>9} {:>10} {:>10}",
        "date", "price", "sma_fast", "sma_slow", "ema", "rsi", "macd", "signal", "bb_upper",
        "bb_lower"
    )?;
    writeln!(out, "{}", "-".repeat(106))?;

    for row in rows {
        writeln!(
            out,
            "{:<12} {:>10.2} {:>10} {:>10} {:>10} {:>7} {:>9} {:>9} {:>10} {:>10}",
            row.timestamp.format("%Y-%m-%d"),
            row.price,
            cell(row.sma_fast, 2),
            cell(row.sma_slow, 2),
            cell(row.ema, 2),
            cell(row.rsi, 1),
            cell(row.macd, 3),
            cell(row.macd_signal, 3),
            cell(row.bb_upper, 2),
            cell(row.bb_lower, 2),
        )?;
    }
    Ok(())
}

fn cell(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("TABLE").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("xlsx").is_err());
    }

    #[test]
    fn test_cell_formatting() {
        assert_eq!(cell(Some(70.456), 1), "70.5");
        assert_eq!(cell(None, 2), "-");
    }
}
