//! 샘플링된 곡선의 영점/교차점 탐색과 전체 분석 파이프라인.

pub mod curve;
pub mod pipeline;

pub use curve::*;
pub use pipeline::{analyze, Analysis};
