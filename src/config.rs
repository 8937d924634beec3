use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::emission::{FuelRecord, ParticulateParams};
use crate::fuel::WorkingComposition;

/// 한 번의 실행에서 계산할 시나리오 입력값 전체를 표현한다.
///
/// 모든 값은 실행 시작 시 한 번 만들어져 계산에 소비될 뿐, 이후 변경되지
/// 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// 시나리오 이름 (보고용)
    pub name: String,
    /// 석탄 원소 분석값 (공급 기준)
    pub fuel_analysis: WorkingComposition,
    /// 배출 계산 대상 연료 목록
    pub fuels: Vec<FuelRecord>,
}

impl Default for Scenario {
    /// 변형 3(Variant 3) 기본 시나리오.
    fn default() -> Self {
        Self {
            name: "Variant 3".to_string(),
            fuel_analysis: WorkingComposition {
                hydrogen_pct: 3.8,
                carbon_pct: 62.4,
                sulfur_pct: 3.6,
                nitrogen_pct: 1.1,
                oxygen_pct: 4.3,
                ash_pct: 18.8,
                moisture_pct: 6.0,
            },
            fuels: vec![
                FuelRecord {
                    name: "석탄".to_string(),
                    throughput_units: 759_834.56,
                    lower_heating_mj_per_unit: 20.47,
                    particulate: Some(ParticulateParams {
                        ash_fraction: 0.252,
                        // 액상 슬래그 제거 방식 석탄 보일러의 비산 회분 분율
                        entrained_fraction: 0.80,
                        capture_efficiency: 0.985,
                        combustible_in_ash_fraction: 0.015,
                    }),
                },
                FuelRecord {
                    name: "중유".to_string(),
                    throughput_units: 99_672.62,
                    lower_heating_mj_per_unit: 39.48,
                    particulate: Some(ParticulateParams {
                        ash_fraction: 0.0015,
                        entrained_fraction: 1.0,
                        capture_efficiency: 0.985,
                        combustible_in_ash_fraction: 0.0,
                    }),
                },
                // 천연가스는 회분이 없어 배출 기여가 명시적 0이다.
                FuelRecord {
                    name: "천연가스".to_string(),
                    throughput_units: 115_923.14,
                    lower_heating_mj_per_unit: 33.08,
                    particulate: None,
                },
            ],
        }
    }
}

/// 시나리오 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "시나리오 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "시나리오 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 시나리오 TOML을 로드하거나 없으면 기본 시나리오를 생성한다.
pub fn load_or_default(path: &Path) -> Result<Scenario, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&content)?;
        Ok(scenario)
    } else {
        let scenario = Scenario::default();
        save_scenario(&scenario, path)?;
        Ok(scenario)
    }
}

fn save_scenario(scenario: &Scenario, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(scenario)?;
    fs::write(path, content)?;
    Ok(())
}

impl Scenario {
    /// 시나리오를 TOML 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_scenario(self, path)
    }
}
