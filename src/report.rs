use crate::emission::{FuelEmission, FuelRecord};
use crate::fuel::{
    BasisCoefficients, CombustibleComposition, DryComposition, RebasedHeatingValue,
};

/// 질량 기준 환산 결과를 콘솔에 출력한다.
pub fn print_mass_basis(
    scenario_name: &str,
    coeffs: &BasisCoefficients,
    dry: &DryComposition,
    combustible: &CombustibleComposition,
    q_working_mj_per_kg: f64,
    rebased: &RebasedHeatingValue,
) {
    println!("\n=== 질량 기준 환산 결과 ({scenario_name}) ===");
    println!("건조 질량 환산 계수: {:.4}", coeffs.dry);
    println!("가연 질량 환산 계수: {:.4}", coeffs.combustible);
    println!(
        "건조 질량 조성: H= {:.3}%, C= {:.3}%, S= {:.3}%, N= {:.3}%, O= {:.3}%, A= {:.3}%",
        dry.hydrogen_pct,
        dry.carbon_pct,
        dry.sulfur_pct,
        dry.nitrogen_pct,
        dry.oxygen_pct,
        dry.ash_pct
    );
    println!("건조 질량 합계: {:.2}% (기준 100%)", dry.sum_pct());
    println!(
        "가연 질량 조성: H= {:.3}%, C= {:.3}%, S= {:.3}%, N= {:.3}%, O= {:.3}%",
        combustible.hydrogen_pct,
        combustible.carbon_pct,
        combustible.sulfur_pct,
        combustible.nitrogen_pct,
        combustible.oxygen_pct
    );
    println!("가연 질량 합계: {:.2}% (기준 100%)", combustible.sum_pct());
    println!("저위 발열량 (공급 기준): {q_working_mj_per_kg:.4} MJ/kg");
    println!("저위 발열량 (건조 기준): {:.4} MJ/kg", rebased.dry_mj_per_kg);
    println!(
        "저위 발열량 (가연 기준): {:.4} MJ/kg",
        rebased.combustible_mj_per_kg
    );
}

/// 먼지 배출 계산 결과를 콘솔에 출력한다.
pub fn print_emissions(fuels: &[FuelRecord], emissions: &[FuelEmission], total_tons: f64) {
    println!("\n=== 먼지 배출 계산 결과 ===");
    for (record, emission) in fuels.iter().zip(emissions) {
        println!(
            "{}: 배출 계수 {:.2} g/GJ, 총 배출량 {:.2} t",
            record.name, emission.emission_factor_g_per_gj, emission.gross_emission_tons
        );
    }
    println!("총 배출량 합계: {total_tons:.2} t");
}
