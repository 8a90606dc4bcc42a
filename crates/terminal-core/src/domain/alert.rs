//! 가격 알림 규칙.
//!
//! 실시간 시세가 사용자가 지정한 기준가를 넘거나 밑돌 때 알림을 발생시킵니다.
//!
//! # 사용 예시
//!
//! ```rust,ignore
//! use terminal_core::domain::{AlertDirection, PriceAlertRule, QuotePayload};
//!
//! let rule = PriceAlertRule::new("AAPL", dec!(190), AlertDirection::Above);
//! let quote = QuotePayload::new("AAPL", dec!(191.25));
//! assert!(rule.should_trigger(&quote));
//! ```

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 알림 방향.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertDirection {
    /// 기준가 이상
    Above,
    /// 기준가 이하
    Below,
}

impl std::str::FromStr for AlertDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "above" => Ok(Self::Above),
            "below" => Ok(Self::Below),
            _ => Err(format!("Unknown alert direction: {}", s)),
        }
    }
}

/// 가격 알림 규칙.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlertRule {
    /// 규칙 ID
    pub id: Uuid,
    /// 대상 심볼
    pub symbol: String,
    /// 기준가
    pub threshold: Decimal,
    /// 알림 방향
    pub direction: AlertDirection,
    /// 활성화 여부
    pub active: bool,
    /// 생성 시각
    pub created_at: DateTime<Utc>,
}

impl PriceAlertRule {
    /// 활성화된 새 알림 규칙 생성.
    pub fn new(symbol: impl Into<String>, threshold: Decimal, direction: AlertDirection) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into(),
            threshold,
            direction,
            active: true,
            created_at: Utc::now(),
        }
    }

    /// 활성화 여부 설정.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// 시세가 이 규칙을 발동시키는지 확인합니다.
    ///
    /// 비활성 규칙이거나 심볼이 다르면 항상 `false`입니다.
    /// 경계값(기준가와 같은 가격)은 양 방향 모두 발동합니다.
    pub fn should_trigger(&self, quote: &QuotePayload) -> bool {
        if !self.active || self.symbol != quote.symbol {
            return false;
        }

        match self.direction {
            AlertDirection::Above => quote.last >= self.threshold,
            AlertDirection::Below => quote.last <= self.threshold,
        }
    }
}

/// 시세 스트림의 단일 체결가.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotePayload {
    /// 심볼
    pub symbol: String,
    /// 최근 체결가
    pub last: Decimal,
}

impl QuotePayload {
    /// 새 시세 생성.
    pub fn new(symbol: impl Into<String>, last: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            last,
        }
    }
}

/// 시세에 대해 발동하는 규칙만 골라냅니다.
pub fn triggered_rules<'a>(
    rules: &'a [PriceAlertRule],
    quote: &QuotePayload,
) -> Vec<&'a PriceAlertRule> {
    rules.iter().filter(|rule| rule.should_trigger(quote)).collect()
}
