//! 시세 데이터 구조체.
//!
//! 지표 계산 함수는 숫자 배열만 다루므로, 타임스탬프는 호출자가
//! [`PricePoint`]로 함께 보관합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{TerminalError, TerminalResult};

/// 타임스탬프가 붙은 단일 가격.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// 관측 시각
    pub timestamp: DateTime<Utc>,
    /// 가격 (종가)
    pub value: f64,
}

impl PricePoint {
    /// 새 가격 포인트 생성.
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// 가격 포인트 목록에서 가격 값만 추출합니다.
pub fn price_values(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// 가격 포인트 목록에서 타임스탬프만 추출합니다.
pub fn price_timestamps(points: &[PricePoint]) -> Vec<DateTime<Utc>> {
    points.iter().map(|p| p.timestamp).collect()
}

/// 타임스탬프가 엄격하게 증가하는지 확인합니다.
///
/// 지표는 왼쪽에서 오른쪽으로 계산되므로 입력은 시간순이어야 합니다.
pub fn is_chronological(points: &[PricePoint]) -> bool {
    points.windows(2).all(|w| w[0].timestamp < w[1].timestamp)
}

/// 시간순이 아니면 처음 어긋난 위치를 담은 [`TerminalError::Input`]을 반환합니다.
pub fn ensure_chronological(points: &[PricePoint]) -> TerminalResult<()> {
    match points
        .windows(2)
        .position(|w| w[0].timestamp >= w[1].timestamp)
    {
        Some(i) => Err(TerminalError::Input(format!(
            "타임스탬프가 증가하지 않습니다: 인덱스 {} ({}) → {} ({})",
            i,
            points[i].timestamp,
            i + 1,
            points[i + 1].timestamp
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn points(values: &[f64]) -> Vec<PricePoint> {
        let start = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| PricePoint::new(start + Duration::days(i as i64), *v))
            .collect()
    }

    #[test]
    fn test_split_series() {
        let pts = points(&[1.0, 2.5, 3.0]);
        assert_eq!(price_values(&pts), vec![1.0, 2.5, 3.0]);
        assert_eq!(price_timestamps(&pts).len(), 3);
    }

    #[test]
    fn test_chronological_order() {
        let mut pts = points(&[1.0, 2.0, 3.0]);
        assert!(is_chronological(&pts));
        assert!(is_chronological(&pts[..1]));

        pts.swap(0, 2);
        assert!(!is_chronological(&pts));
    }

    #[test]
    fn test_duplicate_timestamp_is_not_chronological() {
        let mut pts = points(&[1.0, 2.0]);
        pts[1].timestamp = pts[0].timestamp;
        assert!(!is_chronological(&pts));
    }

    #[test]
    fn test_ensure_chronological_reports_position() {
        assert!(ensure_chronological(&points(&[1.0, 2.0, 3.0])).is_ok());
        assert!(ensure_chronological(&[]).is_ok());

        let mut pts = points(&[1.0, 2.0, 3.0]);
        pts[2].timestamp = pts[0].timestamp;
        match ensure_chronological(&pts) {
            Err(TerminalError::Input(msg)) => assert!(msg.contains("인덱스 1")),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
