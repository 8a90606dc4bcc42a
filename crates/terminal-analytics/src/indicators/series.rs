//! 시계열 공통 유틸리티.
//!
//! 모든 지표가 공유하는 입력 검증과 인덱스 정렬 헬퍼입니다.

use super::{IndicatorError, IndicatorResult};

/// 기간 파라미터 검증.
///
/// 기간은 1 이상이어야 합니다. `name`은 에러 메시지에 사용됩니다.
pub fn check_period(name: &str, period: usize) -> IndicatorResult<()> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "{}은(는) 0보다 커야 합니다",
            name
        )));
    }
    Ok(())
}

/// 가격에 NaN 또는 무한대가 없는지 검증.
pub fn check_finite(prices: &[f64]) -> IndicatorResult<()> {
    match prices.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(IndicatorError::NonFiniteInput {
            index,
            value: prices[index],
        }),
        None => Ok(()),
    }
}

/// 데이터 길이가 최소 요구량을 충족하는지 확인.
///
/// 충족하지 못하면 지표는 에러 대신 빈 결과를 반환합니다.
#[inline]
pub fn has_enough(len: usize, required: usize) -> bool {
    len >= required
}

/// 단순 산술 평균 (왼쪽부터 누적 합 / 개수).
///
/// 빈 슬라이스는 호출하지 않습니다.
#[inline]
pub fn mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// 길이가 다른 두 시계열을 뒤쪽 기준으로 맞출 때 앞에서 건너뛸 개수.
///
/// 짧은 시계열의 `i`번째 값은 긴 시계열의 `suffix_offset(len, min_len) + i`번째와 대응합니다.
/// `min_len`이 `len`보다 크면 0.
#[inline]
pub fn suffix_offset(len: usize, min_len: usize) -> usize {
    len.saturating_sub(min_len)
}

/// 뒤쪽 정렬된 지표 값을 원본 인덱스 `index`에서 조회.
///
/// 해당 시점에 아직 값이 없거나, `values`가 입력보다 길어
/// 정렬할 수 없으면 `None`.
pub fn value_at(values: &[f64], input_len: usize, index: usize) -> Option<f64> {
    if values.len() > input_len {
        return None;
    }
    let offset = suffix_offset(input_len, values.len());
    index.checked_sub(offset).and_then(|i| values.get(i).copied())
}
