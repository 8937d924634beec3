use serde::{Deserialize, Serialize};

/// 질량 기준 환산 오류를 표현한다.
#[derive(Debug)]
pub enum BasisError {
    /// 수분/회분 비율이 환산 계수 분모를 0 이하로 만드는 경우
    InvalidBasis(&'static str),
}

impl std::fmt::Display for BasisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BasisError::InvalidBasis(msg) => write!(f, "기준 환산 오류: {msg}"),
        }
    }
}

impl std::error::Error for BasisError {}

/// 공급(수입) 기준 연료 원소 조성. 모든 값은 질량 백분율이다.
///
/// 7개 성분의 합이 100이 되는 것은 호출자 책임이며, 핵심 계산은 이를
/// 강제하지 않는다. 불일치는 환산 후 합계 점검으로 드러난다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkingComposition {
    /// 수소 [%]
    pub hydrogen_pct: f64,
    /// 탄소 [%]
    pub carbon_pct: f64,
    /// 황 [%]
    pub sulfur_pct: f64,
    /// 질소 [%]
    pub nitrogen_pct: f64,
    /// 산소 [%]
    pub oxygen_pct: f64,
    /// 회분 [%]
    pub ash_pct: f64,
    /// 수분 [%]
    pub moisture_pct: f64,
}

/// 건조 기준/가연 기준 환산 계수 쌍.
#[derive(Debug, Clone, Copy)]
pub struct BasisCoefficients {
    /// 건조 질량 환산 계수 krs = 100/(100-wr)
    pub dry: f64,
    /// 가연 질량 환산 계수 krg = 100/(100-wr-ar)
    pub combustible: f64,
}

/// 건조 기준 조성 (회분 포함 6개 성분) [%].
#[derive(Debug, Clone)]
pub struct DryComposition {
    pub hydrogen_pct: f64,
    pub carbon_pct: f64,
    pub sulfur_pct: f64,
    pub nitrogen_pct: f64,
    pub oxygen_pct: f64,
    pub ash_pct: f64,
}

impl DryComposition {
    /// 성분 합계 [%]. 입력 조성이 일관되면 100에 수렴한다.
    pub fn sum_pct(&self) -> f64 {
        self.hydrogen_pct
            + self.carbon_pct
            + self.sulfur_pct
            + self.nitrogen_pct
            + self.oxygen_pct
            + self.ash_pct
    }
}

/// 가연 기준 조성 (회분 제외 5개 성분) [%].
#[derive(Debug, Clone)]
pub struct CombustibleComposition {
    pub hydrogen_pct: f64,
    pub carbon_pct: f64,
    pub sulfur_pct: f64,
    pub nitrogen_pct: f64,
    pub oxygen_pct: f64,
}

impl CombustibleComposition {
    /// 성분 합계 [%]. 입력 조성이 일관되면 100에 수렴한다.
    pub fn sum_pct(&self) -> f64 {
        self.hydrogen_pct
            + self.carbon_pct
            + self.sulfur_pct
            + self.nitrogen_pct
            + self.oxygen_pct
    }
}

/// 수분/회분 백분율로부터 건조·가연 기준 환산 계수를 계산한다.
///
/// wr >= 100 또는 wr + ar >= 100이면 분모가 0 이하가 되므로 오류로 처리한다.
pub fn basis_coefficients(
    moisture_pct: f64,
    ash_pct: f64,
) -> Result<BasisCoefficients, BasisError> {
    if moisture_pct >= 100.0 {
        return Err(BasisError::InvalidBasis(
            "수분 비율은 100% 미만이어야 합니다.",
        ));
    }
    if moisture_pct + ash_pct >= 100.0 {
        return Err(BasisError::InvalidBasis(
            "수분과 회분 비율의 합은 100% 미만이어야 합니다.",
        ));
    }
    Ok(BasisCoefficients {
        dry: 100.0 / (100.0 - moisture_pct),
        combustible: 100.0 / (100.0 - moisture_pct - ash_pct),
    })
}

/// 공급 기준 조성에 건조 환산 계수를 곱해 건조 기준 조성을 구한다.
/// 회분은 건조 기준에 포함된다.
pub fn dry_composition(working: &WorkingComposition, dry_coeff: f64) -> DryComposition {
    DryComposition {
        hydrogen_pct: working.hydrogen_pct * dry_coeff,
        carbon_pct: working.carbon_pct * dry_coeff,
        sulfur_pct: working.sulfur_pct * dry_coeff,
        nitrogen_pct: working.nitrogen_pct * dry_coeff,
        oxygen_pct: working.oxygen_pct * dry_coeff,
        ash_pct: working.ash_pct * dry_coeff,
    }
}

/// 공급 기준 조성에 가연 환산 계수를 곱해 가연 기준 조성을 구한다.
/// 가연 질량의 정의상 회분은 제외된다.
pub fn combustible_composition(
    working: &WorkingComposition,
    combustible_coeff: f64,
) -> CombustibleComposition {
    CombustibleComposition {
        hydrogen_pct: working.hydrogen_pct * combustible_coeff,
        carbon_pct: working.carbon_pct * combustible_coeff,
        sulfur_pct: working.sulfur_pct * combustible_coeff,
        nitrogen_pct: working.nitrogen_pct * combustible_coeff,
        oxygen_pct: working.oxygen_pct * combustible_coeff,
    }
}
