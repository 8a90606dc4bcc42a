//! CLI 명령어 구현 모듈.

pub mod alert;
pub mod compute;
pub mod input;
pub mod summary;
