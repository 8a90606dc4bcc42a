//! 설정 관리.
//!
//! 기본값 → TOML 파일 → `TERMINAL__` 접두사 환경 변수 순서로 설정을 병합합니다.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "compact"
//! with_file = true
//!
//! [indicators]
//! rsi_period = 21
//! bollinger_std_dev = 2.5
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{TerminalError, TerminalResult};

/// 환경 변수 접두사 (`TERMINAL__INDICATORS__RSI_PERIOD=21`).
pub const ENV_PREFIX: &str = "TERMINAL";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 기술적 지표 설정
    pub indicators: IndicatorSettings,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
    /// 파일명과 줄 번호 출력
    pub with_file: bool,
    /// 모듈 경로 출력
    pub with_target: bool,
    /// span 진입/종료 이벤트 출력
    pub span_events: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            with_file: false,
            with_target: true,
            span_events: false,
        }
    }
}

/// 기술적 지표 기본 파라미터.
///
/// 분석 화면의 차트가 사용하는 지표 구성입니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndicatorSettings {
    /// 단기 SMA 기간 (기본: 20)
    pub sma_fast_period: usize,
    /// 장기 SMA 기간 (기본: 50)
    pub sma_slow_period: usize,
    /// EMA 기간 (기본: 12)
    pub ema_period: usize,
    /// RSI 기간 (기본: 14)
    pub rsi_period: usize,
    /// RSI 과매수 기준 (기본: 70)
    pub rsi_overbought: f64,
    /// RSI 과매도 기준 (기본: 30)
    pub rsi_oversold: f64,
    /// MACD 단기 EMA 기간 (기본: 12)
    pub macd_fast_period: usize,
    /// MACD 장기 EMA 기간 (기본: 26)
    pub macd_slow_period: usize,
    /// MACD 시그널 기간 (기본: 9)
    pub macd_signal_period: usize,
    /// 볼린저 밴드 기간 (기본: 20)
    pub bollinger_period: usize,
    /// 볼린저 밴드 표준편차 배수 (기본: 2.0)
    pub bollinger_std_dev: f64,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma_fast_period: 20,
            sma_slow_period: 50,
            ema_period: 12,
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
        }
    }
}

impl IndicatorSettings {
    /// 설정 값의 유효성을 검사합니다.
    pub fn validate(&self) -> TerminalResult<()> {
        let periods = [
            ("sma_fast_period", self.sma_fast_period),
            ("sma_slow_period", self.sma_slow_period),
            ("ema_period", self.ema_period),
            ("rsi_period", self.rsi_period),
            ("macd_fast_period", self.macd_fast_period),
            ("macd_slow_period", self.macd_slow_period),
            ("macd_signal_period", self.macd_signal_period),
            ("bollinger_period", self.bollinger_period),
        ];

        if let Some((name, _)) = periods.iter().find(|(_, period)| *period == 0) {
            return Err(TerminalError::Config(format!(
                "{}는 0보다 커야 합니다",
                name
            )));
        }

        if !(0.0..=100.0).contains(&self.rsi_oversold)
            || !(0.0..=100.0).contains(&self.rsi_overbought)
            || self.rsi_oversold >= self.rsi_overbought
        {
            return Err(TerminalError::Config(format!(
                "RSI 기준이 잘못되었습니다: 과매도 {} / 과매수 {}",
                self.rsi_oversold, self.rsi_overbought
            )));
        }

        if !self.bollinger_std_dev.is_finite() || self.bollinger_std_dev < 0.0 {
            return Err(TerminalError::Config(format!(
                "bollinger_std_dev는 0 이상의 유한한 값이어야 합니다: {}",
                self.bollinger_std_dev
            )));
        }

        Ok(())
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// `path`가 `None`이거나 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load(path: Option<&Path>) -> TerminalResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.indicators.validate()?;

        tracing::debug!(
            path = ?path,
            rsi_period = app.indicators.rsi_period,
            "Configuration loaded"
        );

        Ok(app)
    }

    /// TOML 문자열에서 설정을 로드합니다 (환경 변수 미적용).
    pub fn from_toml_str(toml: &str) -> TerminalResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;

        let app: AppConfig = config.try_deserialize()?;
        app.indicators.validate()?;
        Ok(app)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = IndicatorSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.rsi_period, 14);
        assert_eq!(settings.macd_slow_period, 26);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [indicators]
            rsi_period = 21
            bollinger_std_dev = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(config.indicators.rsi_period, 21);
        assert_eq!(config.indicators.bollinger_std_dev, 2.5);
        assert_eq!(config.indicators.sma_fast_period, 20);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.with_target);
        assert!(!config.logging.span_events);
    }

    #[test]
    fn test_logging_switches_from_toml() {
        let config = AppConfig::from_toml_str(
            r#"
            [logging]
            format = "json"
            with_file = true
            with_target = false
            span_events = true
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.format, "json");
        assert!(config.logging.with_file);
        assert!(!config.logging.with_target);
        assert!(config.logging.span_events);
    }

    #[test]
    fn test_zero_period_rejected() {
        let result = AppConfig::from_toml_str(
            r#"
            [indicators]
            ema_period = 0
            "#,
        );
        assert!(matches!(result, Err(TerminalError::Config(_))));
    }

    #[test]
    fn test_inverted_rsi_thresholds_rejected() {
        let settings = IndicatorSettings {
            rsi_overbought: 30.0,
            rsi_oversold: 70.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_negative_band_multiplier_rejected() {
        let settings = IndicatorSettings {
            bollinger_std_dev: -1.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
