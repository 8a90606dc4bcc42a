//! 변동성 지표 (Volatility Indicators).
//!
//! 볼린저 밴드 (Bollinger Bands)를 제공합니다.

use serde::{Deserialize, Serialize};

use super::series::{check_finite, check_period, has_enough};
use super::trend::sma_values;
use super::{IndicatorError, IndicatorResult};

/// 볼린저 밴드 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsParams {
    /// 이동평균 기간 (기본: 20).
    pub period: usize,
    /// 표준편차 배수 (기본: 2.0).
    pub std_dev_multiplier: f64,
}

impl Default for BollingerBandsParams {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

impl BollingerBandsParams {
    /// 값을 하나 이상 얻기 위한 최소 입력 길이.
    pub fn required_len(&self) -> usize {
        self.period
    }
}

/// 볼린저 밴드 결과.
///
/// 세 밴드는 길이와 정렬이 같습니다 (SMA와 동일).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BollingerOutput {
    /// 상단 밴드 (MA + k × σ).
    pub upper: Vec<f64>,
    /// 중간 밴드 (이동평균).
    pub middle: Vec<f64>,
    /// 하단 밴드 (MA - k × σ).
    pub lower: Vec<f64>,
}

impl BollingerOutput {
    /// 데이터 부족으로 비었는지 여부.
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }

    /// 밴드 길이.
    pub fn len(&self) -> usize {
        self.middle.len()
    }
}

/// 볼린저 밴드 계산.
///
/// 상단 밴드 = MA + (k × σ)
/// 중간 밴드 = MA (단순 이동평균)
/// 하단 밴드 = MA - (k × σ)
///
/// σ는 구간의 모표준편차(편차 제곱 평균의 제곱근)입니다.
/// 데이터가 `period`보다 적으면 세 밴드 모두 비어 있습니다.
pub fn bollinger_bands(
    prices: &[f64],
    period: usize,
    std_dev_multiplier: f64,
) -> IndicatorResult<BollingerOutput> {
    check_period("period", period)?;
    if !std_dev_multiplier.is_finite() || std_dev_multiplier < 0.0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "표준편차 배수는 0 이상의 유한한 값이어야 합니다: {}",
            std_dev_multiplier
        )));
    }
    if !has_enough(prices.len(), period) {
        return Ok(BollingerOutput::default());
    }
    check_finite(prices)?;

    let middle = sma_values(prices, period);
    let period_f = period as f64;

    let (upper, lower): (Vec<f64>, Vec<f64>) = prices
        .windows(period)
        .zip(&middle)
        .map(|(window, &ma)| {
            let variance = window
                .iter()
                .map(|&p| {
                    let diff = p - ma;
                    diff * diff
                })
                .sum::<f64>()
                / period_f;
            let std_dev = variance.sqrt();

            (
                ma + std_dev_multiplier * std_dev,
                ma - std_dev_multiplier * std_dev,
            )
        })
        .unzip();

    Ok(BollingerOutput {
        upper,
        middle,
        lower,
    })
}
