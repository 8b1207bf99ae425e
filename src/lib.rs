//! McCabe-Thiele 작도 계산 로직을 라이브러리로 분리하여 CLI 외의 보고/선도 도구에서도 쓸 수 있게 한다.

pub mod app;
pub mod column;
pub mod config;
pub mod design;
pub mod equilibrium;
pub mod error;
pub mod logging;
pub mod numeric;
pub mod report;
