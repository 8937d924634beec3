use serde::{Deserialize, Serialize};

/// 배출 계산 오류를 표현한다.
#[derive(Debug)]
pub enum EmissionError {
    /// 연료 파라미터가 잘못된 경우
    InvalidFuelParameters(&'static str),
}

impl std::fmt::Display for EmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmissionError::InvalidFuelParameters(msg) => {
                write!(f, "연료 파라미터 오류: {msg}")
            }
        }
    }
}

impl std::error::Error for EmissionError {}

/// 입자상 물질 생성 파라미터. 모든 값은 0~1 범위의 분율이다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticulateParams {
    /// 회분 함량 Ar (분율)
    pub ash_fraction: f64,
    /// 비산 회분 분율 aVin
    pub entrained_fraction: f64,
    /// 집진 효율 etaZu
    pub capture_efficiency: f64,
    /// 비산 회분 중 가연분 GVin (분율)
    pub combustible_in_ash_fraction: f64,
}

/// 연료별 배출 계산 입력. 처리량과 발열량 단위는 연료에 따라
/// [t]+[MJ/kg] 또는 [천m³]+[MJ/m³]를 사용한다.
///
/// `particulate`가 None이면 회분이 없는 연료(천연가스)로, 배출 계수와
/// 총 배출량을 계산 없이 명시적 0으로 취급한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelRecord {
    /// 연료 이름 (보고용)
    pub name: String,
    /// 연간 처리량 [연료단위]
    pub throughput_units: f64,
    /// 저위 발열량 [MJ/연료단위]
    pub lower_heating_mj_per_unit: f64,
    /// 입자상 물질 파라미터. 없으면 배출 기여가 0인 연료.
    pub particulate: Option<ParticulateParams>,
}

/// 연료별 배출 계산 결과.
#[derive(Debug, Clone, Copy)]
pub struct FuelEmission {
    /// 배출 계수 [g/GJ]
    pub emission_factor_g_per_gj: f64,
    /// 총 배출량 [t]
    pub gross_emission_tons: f64,
}

/// 먼지 배출 계수를 계산한다 [g/GJ].
///
/// k = (10⁶/Qri)·Ar·aVin·(1−etaZu)/(1−GVin)
///
/// Qri <= 0 또는 GVin >= 1이면 분모가 0 이하가 되므로 오류로 처리한다.
/// Ar = 0 또는 aVin = 0이면 식이 자연스럽게 정확히 0이 된다.
pub fn emission_factor_g_per_gj(
    lower_heating_mj: f64,
    params: &ParticulateParams,
) -> Result<f64, EmissionError> {
    if lower_heating_mj <= 0.0 {
        return Err(EmissionError::InvalidFuelParameters(
            "저위 발열량은 0보다 커야 합니다.",
        ));
    }
    if params.combustible_in_ash_fraction >= 1.0 {
        return Err(EmissionError::InvalidFuelParameters(
            "비산 회분 중 가연분은 1 미만이어야 합니다.",
        ));
    }
    Ok((1_000_000.0 / lower_heating_mj)
        * params.ash_fraction
        * params.entrained_fraction
        * (1.0 - params.capture_efficiency)
        / (1.0 - params.combustible_in_ash_fraction))
}

/// 총 배출량을 계산한다 [t].
///
/// E = k·B·Qri/10⁶ (g·t 단위를 t로 환산)
pub fn gross_emission_tons(
    emission_factor_g_per_gj: f64,
    throughput_units: f64,
    lower_heating_mj: f64,
) -> f64 {
    emission_factor_g_per_gj * throughput_units * lower_heating_mj / 1_000_000.0
}

/// 연료 하나의 배출 계수와 총 배출량을 계산한다.
///
/// 입자상 파라미터가 없는 연료는 일반식을 거치지 않고 명시적 0 쌍을
/// 반환한다. 물리 모델(회분 비산)이 적용되지 않는 연료이기 때문이다.
pub fn fuel_emission(record: &FuelRecord) -> Result<FuelEmission, EmissionError> {
    let Some(params) = &record.particulate else {
        return Ok(FuelEmission {
            emission_factor_g_per_gj: 0.0,
            gross_emission_tons: 0.0,
        });
    };
    let k = emission_factor_g_per_gj(record.lower_heating_mj_per_unit, params)?;
    Ok(FuelEmission {
        emission_factor_g_per_gj: k,
        gross_emission_tons: gross_emission_tons(
            k,
            record.throughput_units,
            record.lower_heating_mj_per_unit,
        ),
    })
}

/// 연료별 총 배출량의 합계를 구한다 [t]. 순서 무관 단순 합이다.
pub fn total_emission_tons(emissions: &[FuelEmission]) -> f64 {
    emissions.iter().map(|e| e.gross_emission_tons).sum()
}
