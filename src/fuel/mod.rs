//! 연료 조성의 질량 기준 환산 계산 모듈 모음.

pub mod basis;
pub mod heating_value;

pub use basis::*;
pub use heating_value::*;
