//! 기술적 지표 모듈.
//!
//! 분석 화면의 가격 차트에 표시되는 기술적 지표를 계산합니다.
//! 모든 함수는 순수 함수이며 호출 간에 상태를 공유하지 않습니다.
//!
//! # 지원 지표
//!
//! ## 추세 지표 (Trend Indicators)
//! - **SMA**: 단순 이동평균 (Simple Moving Average)
//! - **EMA**: 지수 이동평균 (Exponential Moving Average)
//! - **MACD**: 이동평균 수렴/확산 (Moving Average Convergence Divergence)
//!
//! ## 모멘텀 지표 (Momentum Indicators)
//! - **RSI**: 상대강도지수 (Relative Strength Index)
//!
//! ## 변동성 지표 (Volatility Indicators)
//! - **Bollinger Bands**: 볼린저 밴드
//!
//! # 데이터 부족
//!
//! 입력이 최소 길이보다 짧으면 에러가 아니라 빈 결과를 반환합니다.
//! 에러는 잘못된 파라미터(기간 0 등)와 NaN/무한대 입력에만 사용됩니다.
//!
//! # 사용 예시
//!
//! ```
//! use terminal_analytics::indicators::{IndicatorEngine, RsiParams, SmaParams};
//!
//! let engine = IndicatorEngine::new();
//! let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let sma = engine.sma(&prices, SmaParams { period: 3 }).unwrap();
//! assert_eq!(sma, vec![2.0, 3.0, 4.0]);
//!
//! // 데이터 부족 → 빈 결과
//! let rsi = engine.rsi(&prices, RsiParams::default()).unwrap();
//! assert!(rsi.is_empty());
//! ```

pub mod momentum;
pub mod series;
pub mod trend;
pub mod volatility;

use terminal_core::IndicatorSettings;
use thiserror::Error;
use tracing::debug;

pub use momentum::{rsi, RsiParams, RsiThresholds, RsiZone};
pub use trend::{ema, macd, sma, EmaParams, MacdOutput, MacdParams, SmaParams};
pub use volatility::{bollinger_bands, BollingerBandsParams, BollingerOutput};

/// 지표 계산 오류.
#[derive(Debug, Error, PartialEq)]
pub enum IndicatorError {
    /// 잘못된 파라미터
    #[error("잘못된 파라미터: {0}")]
    InvalidParameter(String),

    /// NaN 또는 무한대 입력
    #[error("유한하지 않은 입력값: 인덱스 {index}, 값 {value}")]
    NonFiniteInput { index: usize, value: f64 },

    /// 지표 값과 타임스탬프 개수 불일치
    #[error("지표 값이 타임스탬프보다 많습니다: 값 {values}개, 타임스탬프 {timestamps}개")]
    LengthMismatch { values: usize, timestamps: usize },
}

/// 지표 계산 결과 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// 차트에 표시할 지표 파라미터 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorProfile {
    /// 단기 SMA
    pub sma_fast: SmaParams,
    /// 장기 SMA
    pub sma_slow: SmaParams,
    /// EMA
    pub ema: EmaParams,
    /// RSI
    pub rsi: RsiParams,
    /// RSI 과매수/과매도 기준
    pub rsi_thresholds: RsiThresholds,
    /// MACD
    pub macd: MacdParams,
    /// 볼린저 밴드
    pub bollinger: BollingerBandsParams,
}

impl Default for IndicatorProfile {
    fn default() -> Self {
        Self::from(&IndicatorSettings::default())
    }
}

impl From<&IndicatorSettings> for IndicatorProfile {
    fn from(settings: &IndicatorSettings) -> Self {
        Self {
            sma_fast: SmaParams {
                period: settings.sma_fast_period,
            },
            sma_slow: SmaParams {
                period: settings.sma_slow_period,
            },
            ema: EmaParams {
                period: settings.ema_period,
            },
            rsi: RsiParams {
                period: settings.rsi_period,
            },
            rsi_thresholds: RsiThresholds {
                overbought: settings.rsi_overbought,
                oversold: settings.rsi_oversold,
            },
            macd: MacdParams {
                fast_period: settings.macd_fast_period,
                slow_period: settings.macd_slow_period,
                signal_period: settings.macd_signal_period,
            },
            bollinger: BollingerBandsParams {
                period: settings.bollinger_period,
                std_dev_multiplier: settings.bollinger_std_dev,
            },
        }
    }
}

/// 통합 지표 엔진.
///
/// 모든 기술적 지표 계산을 위한 단일 진입점입니다.
/// 상태가 없으므로 여러 스레드에서 공유해도 안전합니다.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    profile: IndicatorProfile,
}

impl IndicatorEngine {
    /// 기본 파라미터로 새 지표 엔진 생성.
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정에서 지표 엔진 생성.
    pub fn from_settings(settings: &IndicatorSettings) -> Self {
        Self {
            profile: IndicatorProfile::from(settings),
        }
    }

    /// 차트 지표 파라미터.
    pub fn profile(&self) -> &IndicatorProfile {
        &self.profile
    }

    // ==================== 추세 지표 ====================

    /// 단순 이동평균 (SMA) 계산.
    pub fn sma(&self, prices: &[f64], params: SmaParams) -> IndicatorResult<Vec<f64>> {
        log_insufficient("sma", prices.len(), params.required_len());
        trend::sma(prices, params.period)
    }

    /// 지수 이동평균 (EMA) 계산.
    pub fn ema(&self, prices: &[f64], params: EmaParams) -> IndicatorResult<Vec<f64>> {
        log_insufficient("ema", prices.len(), params.required_len());
        trend::ema(prices, params.period)
    }

    /// MACD 계산.
    ///
    /// # 반환
    /// MACD 라인, 시그널 라인, 히스토그램
    pub fn macd(&self, prices: &[f64], params: MacdParams) -> IndicatorResult<MacdOutput> {
        log_insufficient("macd", prices.len(), params.required_len());
        trend::macd(
            prices,
            params.fast_period,
            params.slow_period,
            params.signal_period,
        )
    }

    // ==================== 모멘텀 지표 ====================

    /// RSI (Relative Strength Index) 계산.
    ///
    /// # 반환
    /// 0-100 사이의 RSI 값들
    pub fn rsi(&self, prices: &[f64], params: RsiParams) -> IndicatorResult<Vec<f64>> {
        log_insufficient("rsi", prices.len(), params.required_len());
        momentum::rsi(prices, params.period)
    }

    // ==================== 변동성 지표 ====================

    /// 볼린저 밴드 계산.
    ///
    /// # 반환
    /// 상단, 중간, 하단 밴드 값들
    pub fn bollinger_bands(
        &self,
        prices: &[f64],
        params: BollingerBandsParams,
    ) -> IndicatorResult<BollingerOutput> {
        log_insufficient("bollinger", prices.len(), params.required_len());
        volatility::bollinger_bands(prices, params.period, params.std_dev_multiplier)
    }
}

fn log_insufficient(indicator: &'static str, provided: usize, required: usize) {
    if provided < required {
        debug!(indicator, provided, required, "Insufficient data, returning empty series");
    }
}
