//! 추세 지표 (Trend Indicators).
//!
//! 이동평균 기반의 추세 지표들을 제공합니다.
//! - SMA (Simple Moving Average)
//! - EMA (Exponential Moving Average)
//! - MACD (Moving Average Convergence Divergence)
//!
//! 결과 시계열은 입력의 뒤쪽에 정렬됩니다. SMA/EMA의 `i`번째 값은
//! 입력 인덱스 `i + period - 1`에서 닫히는 구간에 대응합니다.

use serde::{Deserialize, Serialize};

use super::series::{check_finite, check_period, has_enough, mean, suffix_offset};
use super::IndicatorResult;

/// SMA 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl SmaParams {
    /// 값을 하나 이상 얻기 위한 최소 입력 길이.
    pub fn required_len(&self) -> usize {
        self.period
    }
}

/// EMA 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl Default for EmaParams {
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl EmaParams {
    /// 값을 하나 이상 얻기 위한 최소 입력 길이.
    pub fn required_len(&self) -> usize {
        self.period
    }
}

/// MACD 파라미터.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdParams {
    /// 단기 EMA 기간 (기본: 12).
    pub fast_period: usize,
    /// 장기 EMA 기간 (기본: 26).
    pub slow_period: usize,
    /// 시그널 라인 기간 (기본: 9).
    pub signal_period: usize,
}

impl Default for MacdParams {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl MacdParams {
    /// MACD 라인을 얻기 위한 최소 입력 길이.
    ///
    /// 시그널/히스토그램은 `slow_period + signal_period - 1`개부터 채워집니다.
    pub fn required_len(&self) -> usize {
        self.slow_period
    }
}

/// MACD 결과.
///
/// 세 시계열은 모두 뒤쪽 기준으로 정렬되며, `signal`과 `histogram`은
/// 길이가 같고 `macd`보다 짧거나 같습니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD 라인 (단기 EMA - 장기 EMA).
    pub macd: Vec<f64>,
    /// 시그널 라인 (MACD의 EMA).
    pub signal: Vec<f64>,
    /// 히스토그램 (MACD - 시그널).
    pub histogram: Vec<f64>,
}

impl MacdOutput {
    /// 데이터 부족으로 세 시계열이 모두 비었는지 여부.
    pub fn is_empty(&self) -> bool {
        self.macd.is_empty() && self.signal.is_empty() && self.histogram.is_empty()
    }

    /// `signal[i]`에 대응하는 `macd` 인덱스 오프셋.
    pub fn signal_offset(&self) -> usize {
        suffix_offset(self.macd.len(), self.signal.len())
    }
}

/// 단순 이동평균 (SMA) 계산.
///
/// SMA = (P1 + P2 + ... + Pn) / n
///
/// 각 구간을 독립적으로 합산하므로 누적 오차가 없습니다.
/// 데이터가 `period`보다 적으면 빈 벡터를 반환합니다.
///
/// # 반환
/// 길이 `prices.len() - period + 1`의 SMA 값들
pub fn sma(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_period("period", period)?;
    if !has_enough(prices.len(), period) {
        return Ok(Vec::new());
    }
    check_finite(prices)?;

    Ok(sma_values(prices, period))
}

/// 지수 이동평균 (EMA) 계산.
///
/// 첫 값은 처음 `period`개의 단순 평균이고, 이후
/// EMA = (현재가 - 이전 EMA) × k + 이전 EMA, k = 2 / (period + 1).
///
/// # 반환
/// 길이 `prices.len() - period + 1`의 EMA 값들
pub fn ema(prices: &[f64], period: usize) -> IndicatorResult<Vec<f64>> {
    check_period("period", period)?;
    if !has_enough(prices.len(), period) {
        return Ok(Vec::new());
    }
    check_finite(prices)?;

    Ok(ema_values(prices, period))
}

/// MACD 계산.
///
/// MACD 라인 = 단기 EMA - 장기 EMA (뒤쪽 기준 정렬)
/// 시그널 라인 = MACD 라인의 EMA
/// 히스토그램 = MACD 라인 - 시그널 라인
///
/// 정렬은 위치 기준이며 타임스탬프를 보지 않습니다.
/// 데이터가 `slow_period`보다 적으면 세 시계열 모두 비어 있습니다.
pub fn macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> IndicatorResult<MacdOutput> {
    check_period("fast_period", fast_period)?;
    check_period("slow_period", slow_period)?;
    check_period("signal_period", signal_period)?;
    if !has_enough(prices.len(), slow_period) {
        return Ok(MacdOutput::default());
    }
    check_finite(prices)?;

    let fast_ema = ema_values(prices, fast_period);
    let slow_ema = ema_values(prices, slow_period);

    let min_len = fast_ema.len().min(slow_ema.len());
    let fast_offset = suffix_offset(fast_ema.len(), min_len);
    let slow_offset = suffix_offset(slow_ema.len(), min_len);

    let macd_line: Vec<f64> = (0..min_len)
        .map(|i| fast_ema[fast_offset + i] - slow_ema[slow_offset + i])
        .collect();

    let signal_line = ema_values(&macd_line, signal_period);

    let signal_offset = suffix_offset(macd_line.len(), signal_line.len());
    let histogram = signal_line
        .iter()
        .enumerate()
        .map(|(i, signal)| macd_line[signal_offset + i] - signal)
        .collect();

    Ok(MacdOutput {
        macd: macd_line,
        signal: signal_line,
        histogram,
    })
}

/// 검증 없이 SMA 계산. 데이터가 부족하면 빈 벡터.
pub(crate) fn sma_values(prices: &[f64], period: usize) -> Vec<f64> {
    if !has_enough(prices.len(), period) {
        return Vec::new();
    }
    prices.windows(period).map(mean).collect()
}

/// 검증 없이 EMA 계산. 데이터가 부족하면 빈 벡터.
pub(crate) fn ema_values(prices: &[f64], period: usize) -> Vec<f64> {
    if !has_enough(prices.len(), period) {
        return Vec::new();
    }

    let multiplier = 2.0 / (period + 1) as f64;
    let mut result = Vec::with_capacity(prices.len() - period + 1);

    // 첫 EMA는 SMA로 시작
    let mut prev_ema = mean(&prices[..period]);
    result.push(prev_ema);

    for &price in &prices[period..] {
        prev_ema = (price - prev_ema) * multiplier + prev_ema;
        result.push(prev_ema);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::IndicatorError;

    fn sample_prices() -> Vec<f64> {
        vec![
            100.0, 102.0, 101.0, 103.0, 105.0, 104.0, 106.0, 108.0, 107.0, 109.0,
        ]
    }

    #[test]
    fn test_sma_basic() {
        assert_eq!(sma(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap(), vec![2.0, 3.0, 4.0]);

        let result = sma(&sample_prices(), 3).unwrap();
        assert_eq!(result.len(), 8);
        // (100 + 102 + 101) / 3 = 101
        assert_eq!(result[0], 101.0);
    }

    #[test]
    fn test_sma_period_equals_length() {
        assert_eq!(sma(&[2.0, 4.0, 6.0], 3).unwrap(), vec![4.0]);
    }

    #[test]
    fn test_sma_insufficient_data_is_empty() {
        assert!(sma(&[1.0, 2.0], 3).unwrap().is_empty());
        assert!(sma(&[], 1).unwrap().is_empty());
    }

    #[test]
    fn test_ema_basic() {
        // 2 → (4-2)*0.5+2 = 3 → (5-3)*0.5+3 = 4
        assert_eq!(ema(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap(), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_ema_seed_matches_sma() {
        let prices = sample_prices();
        let ema = ema(&prices, 4).unwrap();
        let sma = sma(&prices, 4).unwrap();

        assert_eq!(ema.len(), prices.len() - 3);
        assert_eq!(ema[0].to_bits(), sma[0].to_bits());
    }

    #[test]
    fn test_ema_period_one_tracks_prices() {
        let prices = sample_prices();
        assert_eq!(ema(&prices, 1).unwrap(), prices);
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(matches!(sma(&[1.0], 0), Err(IndicatorError::InvalidParameter(_))));
        assert!(matches!(ema(&[1.0], 0), Err(IndicatorError::InvalidParameter(_))));
        assert!(matches!(
            macd(&[1.0; 40], 12, 26, 0),
            Err(IndicatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_non_finite_input_rejected() {
        let prices = [1.0, 2.0, f64::NAN, 4.0];
        assert!(matches!(
            sma(&prices, 2),
            Err(IndicatorError::NonFiniteInput { index: 2, .. })
        ));
        // 데이터 부족이 우선: 빈 결과
        assert!(ema(&prices, 10).unwrap().is_empty());
    }

    #[test]
    fn test_macd_insufficient_data() {
        let prices: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let result = macd(&prices, 12, 26, 9).unwrap();

        assert!(result.is_empty());
        assert_eq!(result, MacdOutput::default());
    }

    #[test]
    fn test_macd_lengths() {
        let prices: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let result = macd(&prices, 12, 26, 9).unwrap();

        // 장기 EMA 길이 = 50 - 26 + 1 = 25, 시그널 = 25 - 9 + 1 = 17
        assert_eq!(result.macd.len(), 25);
        assert_eq!(result.signal.len(), 17);
        assert_eq!(result.histogram.len(), 17);
        assert_eq!(result.signal_offset(), 8);
    }

    #[test]
    fn test_macd_line_is_fast_minus_slow() {
        let prices: Vec<f64> = (0..40).map(|i| 50.0 + (i % 7) as f64).collect();
        let result = macd(&prices, 5, 10, 3).unwrap();
        let fast = ema(&prices, 5).unwrap();
        let slow = ema(&prices, 10).unwrap();

        let offset = fast.len() - slow.len();
        for (i, value) in result.macd.iter().enumerate() {
            assert_eq!(*value, fast[offset + i] - slow[i]);
        }
    }

    #[test]
    fn test_macd_signal_longer_than_line() {
        // MACD 라인은 있으나 시그널 계산에는 부족
        let prices: Vec<f64> = (0..28).map(|i| 10.0 + i as f64).collect();
        let result = macd(&prices, 12, 26, 9).unwrap();

        assert_eq!(result.macd.len(), 3);
        assert!(result.signal.is_empty());
        assert!(result.histogram.is_empty());
        assert!(!result.is_empty());
    }

    #[test]
    fn test_macd_constant_prices_is_zero() {
        let result = macd(&[42.0; 60], 12, 26, 9).unwrap();
        assert!(result.macd.iter().all(|v| *v == 0.0));
        assert!(result.histogram.iter().all(|v| *v == 0.0));
    }
}
