//! 가격 파일 로드.
//!
//! CSV(`timestamp,value` 헤더) 또는 JSON 배열(`[{"timestamp": .., "value": ..}]`)을
//! 읽어 시간순 [`PricePoint`] 목록으로 변환합니다.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use std::io::Read;
use std::path::Path;
use terminal_core::{ensure_chronological, PricePoint};
use tracing::{debug, info};

const TIMESTAMP_COLUMNS: &[&str] = &["timestamp", "date", "datetime", "time"];
const VALUE_COLUMNS: &[&str] = &["value", "close", "price"];

/// 입력 파일 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Json,
}

impl InputFormat {
    /// 파일 확장자로 형식을 추정합니다. 알 수 없으면 CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

/// 파일에서 가격 포인트를 로드합니다.
pub fn load_points(path: &Path) -> Result<Vec<PricePoint>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open input file: {}", path.display()))?;

    let points = match InputFormat::from_path(path) {
        InputFormat::Csv => parse_csv(file),
        InputFormat::Json => parse_json(file),
    }
    .with_context(|| format!("Failed to parse input file: {}", path.display()))?;

    info!(path = %path.display(), points = points.len(), "Loaded price series");
    Ok(points)
}

/// CSV에서 가격 포인트를 파싱합니다.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<PricePoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers().context("Missing CSV header")?.clone();
    let find_column = |candidates: &[&str]| {
        headers
            .iter()
            .position(|h| candidates.iter().any(|c| h.eq_ignore_ascii_case(c)))
    };

    let ts_col = find_column(TIMESTAMP_COLUMNS)
        .ok_or_else(|| anyhow!("No timestamp column. Expected one of: {:?}", TIMESTAMP_COLUMNS))?;
    let value_col = find_column(VALUE_COLUMNS)
        .ok_or_else(|| anyhow!("No value column. Expected one of: {:?}", VALUE_COLUMNS))?;
    debug!(ts_col, value_col, "Detected CSV columns");

    let mut points = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Invalid CSV row {}", row + 1))?;
        let line = row + 2;

        let timestamp = record
            .get(ts_col)
            .ok_or_else(|| anyhow!("Line {}: missing timestamp", line))?;
        let value = record
            .get(value_col)
            .ok_or_else(|| anyhow!("Line {}: missing value", line))?;

        let timestamp =
            parse_timestamp(timestamp).with_context(|| format!("Line {}: bad timestamp", line))?;
        let value: f64 = value
            .parse()
            .with_context(|| format!("Line {}: bad value '{}'", line, value))?;

        points.push(PricePoint::new(timestamp, value));
    }

    ensure_chronological(&points)?;
    Ok(points)
}

/// JSON 배열에서 가격 포인트를 파싱합니다.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<PricePoint>> {
    let points: Vec<PricePoint> =
        serde_json::from_reader(reader).context("Expected a JSON array of {timestamp, value}")?;
    ensure_chronological(&points)?;
    Ok(points)
}

/// RFC 3339 타임스탬프 또는 `YYYY-MM-DD` 날짜(UTC 자정)를 파싱합니다.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Expected RFC 3339 or YYYY-MM-DD, got '{}'", s))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Invalid date: {}", s))?;
    Ok(midnight.and_utc())
}
