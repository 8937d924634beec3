use tracing::warn;

use crate::config::Scenario;
use crate::emission::{self, FuelEmission};
use crate::fuel;
use crate::report;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 시나리오 로드/저장 오류
    Config(crate::config::ConfigError),
    /// 질량 기준 환산 오류
    Basis(fuel::BasisError),
    /// 배출 계산 오류
    Emission(emission::EmissionError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "시나리오 오류: {e}"),
            AppError::Basis(e) => write!(f, "질량 기준 환산 오류: {e}"),
            AppError::Emission(e) => write!(f, "배출 계산 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<fuel::BasisError> for AppError {
    fn from(value: fuel::BasisError) -> Self {
        AppError::Basis(value)
    }
}

impl From<emission::EmissionError> for AppError {
    fn from(value: emission::EmissionError) -> Self {
        AppError::Emission(value)
    }
}

/// 시나리오 하나를 끝까지 계산하고 결과를 보고한다.
///
/// 질량 기준 환산과 배출 계산은 서로 독립적인 두 파이프라인이며 상태를
/// 공유하지 않는다.
pub fn run(scenario: &Scenario) -> Result<(), AppError> {
    let analysis = &scenario.fuel_analysis;
    let coeffs = fuel::basis_coefficients(analysis.moisture_pct, analysis.ash_pct)?;
    let dry = fuel::dry_composition(analysis, coeffs.dry);
    let combustible = fuel::combustible_composition(analysis, coeffs.combustible);
    let q_working_kj = fuel::lower_heating_value_kj_per_kg(analysis);
    let rebased = fuel::rebase_heating_value(q_working_kj, analysis.moisture_pct, &coeffs);

    check_sum("건조", dry.sum_pct());
    check_sum("가연", combustible.sum_pct());

    report::print_mass_basis(
        &scenario.name,
        &coeffs,
        &dry,
        &combustible,
        q_working_kj / 1000.0,
        &rebased,
    );

    let mut emissions: Vec<FuelEmission> = Vec::with_capacity(scenario.fuels.len());
    for record in &scenario.fuels {
        emissions.push(emission::fuel_emission(record)?);
    }
    let total_tons = emission::total_emission_tons(&emissions);

    report::print_emissions(&scenario.fuels, &emissions, total_tons);
    Ok(())
}

/// 환산 후 조성 합계가 100%에서 벗어나면 입력 불일치 진단으로 경고한다.
fn check_sum(basis_label: &str, sum_pct: f64) {
    if (sum_pct - 100.0).abs() > 0.01 {
        warn!("{basis_label} 기준 조성 합계가 {sum_pct:.2}%입니다. 공급 기준 입력 조성을 확인하세요.");
    }
}
