use combustion_engineering_toolbox::config::Scenario;

#[test]
fn default_scenario_is_variant3() {
    let scenario = Scenario::default();
    assert_eq!(scenario.name, "Variant 3");
    assert_eq!(scenario.fuels.len(), 3);
    assert!((scenario.fuel_analysis.carbon_pct - 62.4).abs() < 1e-12);
    assert!((scenario.fuel_analysis.moisture_pct - 6.0).abs() < 1e-12);

    // 공급 기준 7개 성분의 합은 정확히 100%여야 한다.
    let a = &scenario.fuel_analysis;
    let sum = a.hydrogen_pct
        + a.carbon_pct
        + a.sulfur_pct
        + a.nitrogen_pct
        + a.oxygen_pct
        + a.ash_pct
        + a.moisture_pct;
    assert!((sum - 100.0).abs() < 1e-9);

    // 천연가스는 입자상 파라미터가 없는 명시적 0 기여 연료다.
    let gas = scenario.fuels.iter().find(|f| f.particulate.is_none());
    assert!(gas.is_some());
}

#[test]
fn scenario_round_trips_through_toml() {
    let scenario = Scenario::default();
    let serialized = toml::to_string_pretty(&scenario).expect("serialize");
    let parsed: Scenario = toml::from_str(&serialized).expect("parse");
    assert_eq!(parsed.name, scenario.name);
    assert_eq!(parsed.fuels.len(), scenario.fuels.len());
    assert!(
        (parsed.fuel_analysis.ash_pct - scenario.fuel_analysis.ash_pct).abs() < 1e-12
    );
    let coal = parsed
        .fuels
        .iter()
        .find(|f| f.name == "석탄")
        .expect("coal record");
    let params = coal.particulate.as_ref().expect("coal particulate");
    assert!((params.capture_efficiency - 0.985).abs() < 1e-12);
}
