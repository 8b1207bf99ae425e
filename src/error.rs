use thiserror::Error;

/// 설계 계산 중 발생 가능한 오류를 표현한다.
///
/// 모든 오류는 잘못된 입력이거나 물리적으로 불가능한 설계를 뜻하므로
/// 코어에서 복구하지 않고 호출자에게 그대로 전달한다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DesignError {
    /// 평형 데이터 형식 오류
    #[error("평형 데이터 오류: {0}")]
    InvalidData(String),
    /// 보간 범위를 벗어난 평가
    #[error("보간 범위 밖의 x={x} (허용 범위 [{lo}, {hi}])")]
    Domain { x: f64, lo: f64, hi: f64 },
    /// 근을 찾지 못했거나 단수 계산이 상한 안에 끝나지 않음
    #[error("수렴 실패: {0}")]
    Convergence(String),
    /// 평행선 등 작도가 성립하지 않는 경우
    #[error("작도 오류: {0}")]
    InvalidGeometry(&'static str),
    /// 핀치점이 45° 선 위에 있음. 최소 환류에서 단수가 무한대.
    #[error("핀치점이 y=x 선 위에 있습니다 (x={x}). 최소 환류비가 무한대입니다.")]
    PinchOnDiagonal { x: f64 },
    /// 범위를 벗어난 스칼라 입력
    #[error("입력 오류: {name}={value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// 오류 종류만 필요할 때 쓰는 구분값.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidData,
    Domain,
    Convergence,
    InvalidGeometry,
    InvalidParameter,
}

impl DesignError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DesignError::InvalidData(_) => ErrorKind::InvalidData,
            DesignError::Domain { .. } => ErrorKind::Domain,
            DesignError::Convergence(_) => ErrorKind::Convergence,
            DesignError::InvalidGeometry(_) | DesignError::PinchOnDiagonal { .. } => {
                ErrorKind::InvalidGeometry
            }
            DesignError::InvalidParameter { .. } => ErrorKind::InvalidParameter,
        }
    }

    pub(crate) fn parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        DesignError::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}

pub type DesignResult<T> = Result<T, DesignError>;
