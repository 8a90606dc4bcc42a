//! 도메인 값 타입.

pub mod alert;
pub mod market_data;

pub use alert::{triggered_rules, AlertDirection, PriceAlertRule, QuotePayload};
pub use market_data::{
    ensure_chronological, is_chronological, price_timestamps, price_values, PricePoint,
};
