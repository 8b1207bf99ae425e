//! 기-액 평형 데이터와 보간 모델.

pub mod data;
pub mod interpolation;
pub mod model;

pub use data::*;
pub use interpolation::{InterpolationMethod, Interpolant};
pub use model::*;
