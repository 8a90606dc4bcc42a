//! 최신 지표 요약 출력.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use terminal_analytics::{IndicatorEngine, IndicatorSummary};
use terminal_core::price_values;

use super::input::load_points;

/// 가격 파일의 최신 RSI/MACD 요약을 계산합니다.
pub fn summarize(input: &Path, engine: &IndicatorEngine) -> Result<IndicatorSummary> {
    let points = load_points(input)?;
    IndicatorSummary::from_prices(&price_values(&points), engine)
        .context("Indicator computation failed")
}

/// 요약을 사람이 읽는 형식으로 씁니다.
pub fn write_summary<W: Write>(
    summary: &IndicatorSummary,
    engine: &IndicatorEngine,
    out: &mut W,
) -> Result<()> {
    let profile = engine.profile();
    let trend = if summary.macd_bullish {
        "bullish"
    } else {
        "bearish"
    };

    writeln!(
        out,
        "RSI ({}):  {:.2}  {}",
        profile.rsi.period, summary.rsi, summary.rsi_zone
    )?;
    writeln!(
        out,
        "MACD ({},{},{}):  {:.2}  signal {:.2}  {}",
        profile.macd.fast_period,
        profile.macd.slow_period,
        profile.macd.signal_period,
        summary.macd,
        summary.signal,
        trend
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use terminal_analytics::RsiZone;

    #[test]
    fn test_write_summary() {
        let summary = IndicatorSummary {
            rsi: 72.5,
            rsi_zone: RsiZone::Overbought,
            macd: 1.5,
            signal: 1.25,
            macd_bullish: true,
        };
        let mut out = Vec::new();
        write_summary(&summary, &IndicatorEngine::new(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("RSI (14):  72.50  Overbought"));
        assert!(text.contains("MACD (12,26,9):  1.50  signal 1.25  bullish"));
    }
}
