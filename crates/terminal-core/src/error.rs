//! 트레이딩 터미널의 에러 타입.
//!
//! 설정 로드, 입력 데이터 파싱, 직렬화 과정에서 발생하는 에러를 정의합니다.
//! 지표 계산 에러는 `terminal-analytics`의 `IndicatorError`가 담당합니다.

use thiserror::Error;

/// 터미널 공통 에러.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 입력 데이터 에러
    #[error("입력 데이터 에러: {0}")]
    Input(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 터미널 작업을 위한 Result 타입.
pub type TerminalResult<T> = Result<T, TerminalError>;

impl From<serde_json::Error> for TerminalError {
    fn from(err: serde_json::Error) -> Self {
        TerminalError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for TerminalError {
    fn from(err: config::ConfigError) -> Self {
        TerminalError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_conversion() {
        let err = serde_json::from_str::<Vec<f64>>("[1.0,").unwrap_err();
        let converted: TerminalError = err.into();
        assert!(matches!(converted, TerminalError::Serialization(_)));
    }

    #[test]
    fn test_error_display() {
        let err = TerminalError::Config("rsi period must be positive".to_string());
        assert_eq!(err.to_string(), "설정 에러: rsi period must be positive");

        let err = TerminalError::Input("timestamp 2 not after 1".to_string());
        assert_eq!(err.to_string(), "입력 데이터 에러: timestamp 2 not after 1");
    }
}
