use crate::fuel::basis::{BasisCoefficients, WorkingComposition};

/// 기준 환산된 저위 발열량 쌍 [MJ/kg].
#[derive(Debug, Clone, Copy)]
pub struct RebasedHeatingValue {
    /// 건조 기준 저위 발열량 [MJ/kg]
    pub dry_mj_per_kg: f64,
    /// 가연 기준 저위 발열량 [MJ/kg]
    pub combustible_mj_per_kg: f64,
}

/// 공급 기준 저위 발열량을 경험식으로 계산한다 [kJ/kg].
///
/// Q = 339·C + 1030·H − 108.8·(O − S) − 25·W
///
/// 물리 법칙이 아닌 회귀식이므로 계수를 그대로 사용한다.
pub fn lower_heating_value_kj_per_kg(working: &WorkingComposition) -> f64 {
    339.0 * working.carbon_pct + 1030.0 * working.hydrogen_pct
        - 108.8 * (working.oxygen_pct - working.sulfur_pct)
        - 25.0 * working.moisture_pct
}

/// 공급 기준 발열량을 건조·가연 기준으로 환산한다.
///
/// 건조/가연 기준에는 수분이 없으므로 수분 증발 손실 25·wr를 먼저 되돌린 뒤
/// 환산 계수를 곱한다. 결과는 MJ/kg 단위다.
pub fn rebase_heating_value(
    q_working_kj_per_kg: f64,
    moisture_pct: f64,
    coeffs: &BasisCoefficients,
) -> RebasedHeatingValue {
    let moisture_free_kj = q_working_kj_per_kg + 25.0 * moisture_pct;
    RebasedHeatingValue {
        dry_mj_per_kg: moisture_free_kj * coeffs.dry / 1000.0,
        combustible_mj_per_kg: moisture_free_kj * coeffs.combustible / 1000.0,
    }
}
