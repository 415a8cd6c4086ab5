//! 단가 산정과 수량별 손익 계산 모듈 모음.

pub mod cost_model;
pub mod engine;

pub use cost_model::*;
pub use engine::*;
