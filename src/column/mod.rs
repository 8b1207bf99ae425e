//! 증류탑 작도 및 사이징 모듈 모음.

pub mod feed_line;
pub mod operating_lines;
pub mod reflux;
pub mod sizing;
pub mod stage_stepper;

pub use feed_line::*;
pub use operating_lines::*;
pub use reflux::*;
pub use sizing::*;
pub use stage_stepper::*;

/// x-y 선도 위의 한 점 (액상, 기상 몰분율).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
