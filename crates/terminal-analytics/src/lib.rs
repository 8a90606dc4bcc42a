//! # Terminal Analytics
//!
//! 트레이딩 터미널 분석 화면을 위한 기술적 지표 계산 크레이트입니다.
//!
//! - [`indicators`]: SMA, EMA, RSI, MACD, 볼린저 밴드
//! - [`chart`]: 지표 값과 타임스탬프 정렬, 차트 행, 최신 지표 요약

pub mod chart;
pub mod indicators;

pub use chart::{align_to_timestamps, build_chart_rows, ChartRow, IndicatorPoint, IndicatorSummary};
pub use indicators::{
    BollingerBandsParams, BollingerOutput, EmaParams, IndicatorEngine, IndicatorError,
    IndicatorProfile, IndicatorResult, MacdOutput, MacdParams, RsiParams, RsiThresholds, RsiZone,
    SmaParams,
};
