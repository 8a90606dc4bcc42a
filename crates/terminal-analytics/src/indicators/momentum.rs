//! 모멘텀 지표 (Momentum Indicators).
//!
//! 가격 모멘텀과 과매수/과매도 상태를 측정하는 지표들을 제공합니다.
//! - RSI (Relative Strength Index, Wilder 평활)
//! - RSI 구간 분류 (과매수 / 중립 / 과매도)

use serde::{Deserialize, Serialize};

use super::series::{check_finite, check_period, has_enough, mean};
use super::IndicatorResult;

/// RSI 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsiParams {
    /// RSI 기간 (기본: 14).
    pub period: usize,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl RsiParams {
    /// 값을 하나 이상 얻기 위한 최소 입력 길이 (`period`개의 가격 변화).
    pub fn required_len(&self) -> usize {
        self.period + 1
    }
}

/// RSI 과매수/과매도 기준.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiThresholds {
    /// 과매수 기준 (기본: 70).
    pub overbought: f64,
    /// 과매도 기준 (기본: 30).
    pub oversold: f64,
}

impl Default for RsiThresholds {
    fn default() -> Self {
        Self {
            overbought: 70.0,
            oversold: 30.0,
        }
    }
}

/// RSI 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiZone {
    /// 과매수 (기준 초과)
    Overbought,
    /// 중립
    Neutral,
    /// 과매도 (기준 미만)
    Oversold,
}

impl RsiZone {
    /// RSI 값을 구간으로 분류합니다. 기준값과 같으면 중립입니다.
    pub fn classify(rsi: f64, thresholds: RsiThresholds) -> Self {
        if rsi > thresholds.overbought {
            Self::Overbought
        } else if rsi < thresholds.oversold {
            Self::Oversold
        } else {
            Self::Neutral
        }
    }

    /// 화면 표시용 라벨.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overbought => "Overbought",
            Self::Neutral => "Neutral",
            Self::Oversold => "Oversold",
        }
    }
}

impl std::fmt::Display for RsiZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// RSI (Relative Strength Index) 계산.
///
/// RSI = 100 - (100 / (1 + RS)), RS = 평균 상승폭 / 평균 하락폭
///
/// 첫 평균은 처음 `period`개 가격 변화의 단순 평균이고, 이후는
/// Wilder 평활 `avg = (avg × (period - 1) + 현재값) / period`을 사용합니다.
/// 평균 하락폭이 0이면 RSI는 100입니다.
///
/// # 반환
/// 길이 `prices.len() - period`의 0-100 사이 RSI 값들.
/// 데이터가 `period + 1`개보다 적으면 빈 벡터.
pub fn rsi(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_period("period", period)?;
    if !has_enough(prices.len(), period + 1) {
        return Ok(Vec::new());
    }
    check_finite(prices)?;

    // 가격 변화를 상승/하락으로 분리
    let (gains, losses): (Vec<f64>, Vec<f64>) = prices
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            let gain = if change > 0.0 { change } else { 0.0 };
            let loss = if change < 0.0 { -change } else { 0.0 };
            (gain, loss)
        })
        .unzip();

    let period_f = period as f64;
    let mut avg_gain = mean(&gains[..period]);
    let mut avg_loss = mean(&losses[..period]);

    let mut result = Vec::with_capacity(gains.len() - period + 1);
    result.push(rsi_from_averages(avg_gain, avg_loss));

    for (gain, loss) in gains[period..].iter().zip(&losses[period..]) {
        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;
        result.push(rsi_from_averages(avg_gain, avg_loss));
    }

    Ok(result)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}
