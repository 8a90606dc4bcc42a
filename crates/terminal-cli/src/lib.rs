//! 트레이딩 터미널 CLI 도구 모음.
//!
//! - 가격 파일(CSV/JSON) 로드
//! - 차트 지표 계산 및 출력 (table, csv, json)
//! - 최신 지표 요약
//! - 가격 알림 평가

pub mod commands;
