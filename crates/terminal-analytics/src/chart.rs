//! 차트 주석 데이터.
//!
//! 지표 함수는 숫자만 반환하므로, 여기서 원본 타임스탬프와 다시 짝을 맞춥니다.
//! 모든 정렬은 뒤쪽(최신) 기준입니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use terminal_core::{price_values, PricePoint};

use crate::indicators::series::{suffix_offset, value_at};
use crate::indicators::{IndicatorEngine, IndicatorError, IndicatorResult, RsiZone};

/// RSI 값이 없을 때 표시하는 중립값.
pub const NEUTRAL_RSI: f64 = 50.0;

/// 타임스탬프가 붙은 지표 값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    /// 구간이 닫히는 시점
    pub timestamp: DateTime<Utc>,
    /// 지표 값
    pub value: f64,
}

/// 지표 값에 입력 타임스탬프를 붙입니다.
///
/// 값의 `i`번째는 타임스탬프의 `len(timestamps) - len(values) + i`번째와 짝지어집니다.
/// 값이 타임스탬프보다 많으면 [`IndicatorError::LengthMismatch`].
pub fn align_to_timestamps(
    timestamps: &[DateTime<Utc>],
    values: &[f64],
) -> IndicatorResult<Vec<IndicatorPoint>> {
    if values.len() > timestamps.len() {
        return Err(IndicatorError::LengthMismatch {
            values: values.len(),
            timestamps: timestamps.len(),
        });
    }

    let offset = suffix_offset(timestamps.len(), values.len());
    Ok(values
        .iter()
        .zip(&timestamps[offset..])
        .map(|(&value, &timestamp)| IndicatorPoint { timestamp, value })
        .collect())
}

/// 가격 차트의 한 행.
///
/// 아직 값이 없는 지표 열은 `None`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
    pub sma_fast: Option<f64>,
    pub sma_slow: Option<f64>,
    pub ema: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_histogram: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
}

/// 가격 포인트마다 엔진 프로필의 모든 지표를 채운 차트 행을 만듭니다.
pub fn build_chart_rows(
    points: &[PricePoint],
    engine: &IndicatorEngine,
) -> IndicatorResult<Vec<ChartRow>> {
    let profile = engine.profile();
    let prices = price_values(points);
    let n = prices.len();

    let sma_fast = engine.sma(&prices, profile.sma_fast)?;
    let sma_slow = engine.sma(&prices, profile.sma_slow)?;
    let ema = engine.ema(&prices, profile.ema)?;
    let rsi = engine.rsi(&prices, profile.rsi)?;
    let macd = engine.macd(&prices, profile.macd)?;
    let bands = engine.bollinger_bands(&prices, profile.bollinger)?;

    let rows = points
        .iter()
        .enumerate()
        .map(|(i, point)| ChartRow {
            timestamp: point.timestamp,
            price: point.value,
            sma_fast: value_at(&sma_fast, n, i),
            sma_slow: value_at(&sma_slow, n, i),
            ema: value_at(&ema, n, i),
            rsi: value_at(&rsi, n, i),
            macd: value_at(&macd.macd, n, i),
            macd_signal: value_at(&macd.signal, n, i),
            macd_histogram: value_at(&macd.histogram, n, i),
            bb_upper: value_at(&bands.upper, n, i),
            bb_middle: value_at(&bands.middle, n, i),
            bb_lower: value_at(&bands.lower, n, i),
        })
        .collect();

    Ok(rows)
}

/// 최신 지표 요약.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    /// 최신 RSI (없으면 50)
    pub rsi: f64,
    /// RSI 구간
    pub rsi_zone: RsiZone,
    /// 최신 MACD (없으면 0)
    pub macd: f64,
    /// 최신 시그널 (없으면 0)
    pub signal: f64,
    /// MACD가 시그널 위에 있는지 여부
    pub macd_bullish: bool,
}

impl IndicatorSummary {
    /// 가격 시계열에서 최신 지표 요약을 계산합니다.
    pub fn from_prices(prices: &[f64], engine: &IndicatorEngine) -> IndicatorResult<Self> {
        let profile = engine.profile();
        let rsi = engine.rsi(prices, profile.rsi)?;
        let macd = engine.macd(prices, profile.macd)?;

        let rsi = rsi.last().copied().unwrap_or(NEUTRAL_RSI);
        let macd_value = macd.macd.last().copied().unwrap_or(0.0);
        let signal = macd.signal.last().copied().unwrap_or(0.0);

        Ok(Self {
            rsi,
            rsi_zone: RsiZone::classify(rsi, profile.rsi_thresholds),
            macd: macd_value,
            signal,
            macd_bullish: macd_value > signal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn timestamps(n: usize) -> Vec<DateTime<Utc>> {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        (0..n).map(|i| start + Duration::days(i as i64)).collect()
    }

    #[test]
    fn test_align_to_timestamps() {
        let ts = timestamps(5);
        let points = align_to_timestamps(&ts, &[2.0, 3.0, 4.0]).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].timestamp, ts[2]);
        assert_eq!(points[2].timestamp, ts[4]);
        assert_eq!(points[2].value, 4.0);
    }

    #[test]
    fn test_align_empty_values() {
        assert!(align_to_timestamps(&timestamps(3), &[]).unwrap().is_empty());
    }

    #[test]
    fn test_align_too_many_values() {
        let err = align_to_timestamps(&timestamps(2), &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::LengthMismatch {
                values: 3,
                timestamps: 2
            }
        );
    }

    #[test]
    fn test_summary_defaults_when_insufficient() {
        let summary = IndicatorSummary::from_prices(&[1.0, 2.0], &IndicatorEngine::new()).unwrap();

        assert_eq!(summary.rsi, NEUTRAL_RSI);
        assert_eq!(summary.rsi_zone, RsiZone::Neutral);
        assert_eq!(summary.macd, 0.0);
        assert_eq!(summary.signal, 0.0);
        assert!(!summary.macd_bullish);
    }

    #[test]
    fn test_summary_zero_rsi_is_oversold_not_neutral() {
        let prices: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
        let summary = IndicatorSummary::from_prices(&prices, &IndicatorEngine::new()).unwrap();

        assert_eq!(summary.rsi, 0.0);
        assert_eq!(summary.rsi_zone, RsiZone::Oversold);
    }

    #[test]
    fn test_summary_json_shape() {
        let prices: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
        let summary = IndicatorSummary::from_prices(&prices, &IndicatorEngine::new()).unwrap();

        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["rsi_zone"], "oversold");
        assert_eq!(json["macd_bullish"], summary.macd_bullish);

        let back: IndicatorSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back.rsi, 0.0);
        assert_eq!(back.rsi_zone, RsiZone::Oversold);
    }

    #[test]
    fn test_chart_row_json_uses_null_for_warmup() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let points: Vec<PricePoint> = (0..3)
            .map(|i| PricePoint::new(start + Duration::days(i), 10.0 + i as f64))
            .collect();
        let rows = build_chart_rows(&points, &IndicatorEngine::new()).unwrap();

        let json = serde_json::to_string(&rows).unwrap();
        assert!(json.contains("\"sma_fast\":null"));

        let back: Vec<ChartRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_summary_rising_market() {
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let summary = IndicatorSummary::from_prices(&prices, &IndicatorEngine::new()).unwrap();

        assert_eq!(summary.rsi, 100.0);
        assert_eq!(summary.rsi_zone, RsiZone::Overbought);
        assert!(summary.macd > 0.0);
    }
}
