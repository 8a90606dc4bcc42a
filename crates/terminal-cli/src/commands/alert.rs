//! 단일 가격 알림 평가.

use anyhow::{anyhow, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use terminal_core::{AlertDirection, PriceAlertRule, QuotePayload};
use tracing::debug;

/// 알림 평가 설정.
#[derive(Debug)]
pub struct AlertCheckConfig {
    pub symbol: String,
    pub threshold: String,
    pub direction: String,
    pub last: String,
}

/// 규칙 하나를 시세 하나에 대해 평가합니다.
///
/// # 반환
/// 알림 발동 여부
pub fn check_alert(config: &AlertCheckConfig) -> Result<bool> {
    let threshold = Decimal::from_str(&config.threshold)
        .map_err(|e| anyhow!("Invalid threshold '{}': {}", config.threshold, e))?;
    let last = Decimal::from_str(&config.last)
        .map_err(|e| anyhow!("Invalid last price '{}': {}", config.last, e))?;
    let direction: AlertDirection = config.direction.parse().map_err(|e: String| anyhow!(e))?;

    let rule = PriceAlertRule::new(config.symbol.to_uppercase(), threshold, direction);
    let quote = QuotePayload::new(config.symbol.to_uppercase(), last);
    let triggered = rule.should_trigger(&quote);

    debug!(rule_id = %rule.id, symbol = %rule.symbol, triggered, "Alert evaluated");
    Ok(triggered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(direction: &str, threshold: &str, last: &str) -> AlertCheckConfig {
        AlertCheckConfig {
            symbol: "aapl".to_string(),
            threshold: threshold.to_string(),
            direction: direction.to_string(),
            last: last.to_string(),
        }
    }

    #[test]
    fn test_check_alert() {
        assert!(check_alert(&config("above", "190", "190.01")).unwrap());
        assert!(!check_alert(&config("below", "190", "190.01")).unwrap());
        assert!(check_alert(&config("below", "190", "190")).unwrap());
    }

    #[test]
    fn test_check_alert_invalid_input() {
        assert!(check_alert(&config("sideways", "190", "191")).is_err());
        assert!(check_alert(&config("above", "abc", "191")).is_err());
    }
}
