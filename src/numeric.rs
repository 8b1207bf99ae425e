//! 구간 이분법 근 탐색.

use crate::error::{DesignError, DesignResult};

/// 근 탐색 종료 허용 오차 (구간 반폭 기준)
pub const ROOT_TOLERANCE: f64 = 1e-12;
/// 이분법 최대 반복 수. 단위 구간 기준으로 2^-200이면 충분하다.
pub const MAX_BISECTION_STEPS: usize = 200;

/// `[lo, hi]` 구간에서 `f(x) = 0`의 근을 이분법으로 찾는다.
///
/// 양 끝의 부호가 같으면 경계값을 돌려주지 않고 `Convergence` 오류를 낸다.
/// `what`은 오류 메시지에 들어갈 탐색 대상 설명이다.
pub fn bisect<F>(f: F, lo: f64, hi: f64, what: &str) -> DesignResult<f64>
where
    F: Fn(f64) -> f64,
{
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return Err(DesignError::Convergence(format!(
            "{what}: 탐색 구간 [{lo}, {hi}]이 올바르지 않습니다."
        )));
    }
    let (mut a, mut b) = (lo, hi);
    let mut fa = f(a);
    let fb = f(b);
    if fa == 0.0 {
        return Ok(a);
    }
    if fb == 0.0 {
        return Ok(b);
    }
    if !(fa.is_finite() && fb.is_finite()) || fa.signum() == fb.signum() {
        return Err(DesignError::Convergence(format!(
            "{what}: 구간 [{lo}, {hi}]에서 부호 변화가 없습니다."
        )));
    }

    for _ in 0..MAX_BISECTION_STEPS {
        let mid = 0.5 * (a + b);
        let fm = f(mid);
        if fm == 0.0 || 0.5 * (b - a) < ROOT_TOLERANCE {
            return Ok(mid);
        }
        if fm.signum() == fa.signum() {
            a = mid;
            fa = fm;
        } else {
            b = mid;
        }
    }
    Ok(0.5 * (a + b))
}
