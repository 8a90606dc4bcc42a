//! # Terminal Core
//!
//! 트레이딩 터미널의 공통 기반 타입을 제공합니다:
//! - 시세 데이터 구조체 (타임스탬프가 붙은 가격)
//! - 가격 알림 규칙
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
