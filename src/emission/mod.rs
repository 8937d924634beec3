//! 먼지(입자상 물질) 배출 계산 모듈 모음.

pub mod particulate;

pub use particulate::*;
