//! 정수 수량 격자 위에서 샘플링된 곡선을 다룬다.
//!
//! 손익분기점은 일반적으로 정수가 아니므로 인접한 두 샘플 사이를 선형 보간해
//! 연속적인 수량을 추정한다. 이익 곡선뿐 아니라 ROI 곡선, 두 곡선의 차이에도
//! 같은 탐색기를 사용한다.
//!
//! 길이가 다른 시리즈는 공통 구간까지만 분석한다. 수량 시리즈는 엄격히
//! 증가한다고 가정한다.

/// 부호. 0은 +1, -1 어느 쪽과도 다르게 취급한다.
fn sign(v: f64) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// NaN은 정의되지 않은 샘플로 본다.
fn defined(v: f64) -> Option<f64> {
    if v.is_nan() {
        None
    } else {
        Some(v)
    }
}

/// (q0, v0)–(q1, v1) 구간에서 값이 0이 되는 수량을 선형 보간한다.
fn crossing_between(q0: f64, v0: f64, q1: f64, v1: f64) -> f64 {
    if v1 == v0 {
        return q0;
    }
    q0 - v0 * (q1 - q0) / (v1 - v0)
}

/// 낮은 수량부터 훑으며 첫 번째 부호 변화 구간을 찾는다.
/// 한쪽 끝이 정의되지 않은 구간은 교차로 보지 않는다.
fn first_crossing<I>(quantities: &[u32], values: I) -> Option<f64>
where
    I: Iterator<Item = Option<f64>>,
{
    let mut prev: Option<(f64, f64)> = None;
    for (&q, v) in quantities.iter().zip(values) {
        let q = f64::from(q);
        if let (Some((q0, v0)), Some(v1)) = (prev, v) {
            if sign(v0) != sign(v1) {
                return Some(crossing_between(q0, v0, q, v1));
            }
        }
        prev = v.map(|v| (q, v));
    }
    None
}

/// 곡선이 처음으로 0을 지나는 수량을 찾는다.
///
/// 부호 변화가 없으면(모두 양수, 모두 음수, 모두 0) `None`을 반환한다.
/// 샘플 값이 정확히 0이 되는 지점도 교차로 보며, 그 샘플의 수량이 결과가 된다.
/// 이후의 교차점은 무시한다.
pub fn find_zero_crossing(quantities: &[u32], values: &[f64]) -> Option<f64> {
    first_crossing(quantities, values.iter().map(|&v| defined(v)))
}

/// 일부 샘플이 정의되지 않은 곡선(ROI 등)의 첫 영점을 찾는다.
pub fn find_zero_crossing_partial(quantities: &[u32], values: &[Option<f64>]) -> Option<f64> {
    first_crossing(quantities, values.iter().map(|v| v.and_then(defined)))
}

/// 두 곡선이 처음 만나는 수량을 찾는다. `a - b` 차이 곡선의 영점과 같다.
pub fn find_intersection(quantities: &[u32], a: &[f64], b: &[f64]) -> Option<f64> {
    let diff: Vec<f64> = a.iter().zip(b).map(|(a, b)| a - b).collect();
    find_zero_crossing(quantities, &diff)
}

fn interpolate_with<F>(query: f64, quantities: &[u32], len: usize, value_at: F) -> Option<f64>
where
    F: Fn(usize) -> Option<f64>,
{
    if query.is_nan() {
        return None;
    }
    let quantities = &quantities[..len.min(quantities.len())];
    let last = quantities.len().checked_sub(1)?;
    if query <= f64::from(quantities[0]) {
        return value_at(0);
    }
    if query >= f64::from(quantities[last]) {
        return value_at(last);
    }
    // q[0] < query < q[last] 이므로 1 <= upper <= last
    let upper = quantities.partition_point(|&q| f64::from(q) <= query);
    let lower = upper - 1;
    let q0 = f64::from(quantities[lower]);
    let q1 = f64::from(quantities[upper]);
    let v0 = value_at(lower)?;
    if query == q0 {
        return Some(v0);
    }
    let v1 = value_at(upper)?;
    let t = (query - q0) / (q1 - q0);
    // v1 - v0 를 직접 계산하면 큰 값에서 넘칠 수 있다
    Some(v0 * (1.0 - t) + v1 * t)
}

/// 구간별 선형 보간으로 `query` 수량에서의 곡선 값을 구한다.
///
/// 샘플 범위 밖의 질의는 가장 가까운 경계 값으로 고정한다(외삽하지 않음).
/// `query`가 없거나 곡선이 비어 있으면 `None`.
pub fn interpolate(query: Option<f64>, quantities: &[u32], values: &[f64]) -> Option<f64> {
    interpolate_with(query?, quantities, values.len(), |i| defined(values[i]))
}

/// 일부 샘플이 정의되지 않은 곡선을 보간한다. 보간에 필요한 샘플이 없으면 `None`.
pub fn interpolate_partial(
    query: Option<f64>,
    quantities: &[u32],
    values: &[Option<f64>],
) -> Option<f64> {
    interpolate_with(query?, quantities, values.len(), |i| {
        values[i].and_then(defined)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_zero_sample_is_a_crossing_at_that_quantity() {
        let q = [1, 2, 3];
        assert_eq!(find_zero_crossing(&q, &[-1.0, 0.0, 1.0]), Some(2.0));
        assert_eq!(find_zero_crossing(&q, &[0.0, 5.0, 6.0]), Some(1.0));
    }

    #[test]
    fn all_zero_has_no_crossing() {
        assert_eq!(find_zero_crossing(&[1, 2, 3], &[0.0, 0.0, 0.0]), None);
    }

    #[test]
    fn undefined_samples_break_segments() {
        let q = [1, 2, 3, 4];
        let v = [Some(-1.0), None, Some(1.0), Some(3.0)];
        assert_eq!(find_zero_crossing_partial(&q, &v), None);
        let v = [Some(-1.0), None, Some(-1.0), Some(3.0)];
        assert_eq!(find_zero_crossing_partial(&q, &v), Some(3.25));
    }

    #[test]
    fn interpolation_needs_both_bracketing_samples() {
        let q = [1, 2, 3];
        let v = [Some(1.0), None, Some(3.0)];
        assert_eq!(interpolate_partial(Some(1.0), &q, &v), Some(1.0));
        assert_eq!(interpolate_partial(Some(1.5), &q, &v), None);
        assert_eq!(interpolate_partial(Some(2.0), &q, &v), None);
        assert_eq!(interpolate_partial(Some(10.0), &q, &v), Some(3.0));
    }

    #[test]
    fn interpolation_survives_extreme_samples() {
        let v = interpolate(Some(1.5), &[1, 2], &[f64::MAX, -f64::MAX]);
        assert_eq!(v, Some(0.0));
        assert_eq!(
            interpolate(Some(1.5), &[1, 2], &[f64::MAX, f64::MAX]),
            Some(f64::MAX)
        );
    }

    #[test]
    fn empty_curve_interpolates_to_nothing() {
        assert_eq!(interpolate(Some(1.0), &[], &[]), None);
        assert_eq!(interpolate(None, &[1, 2], &[1.0, 2.0]), None);
    }
}
