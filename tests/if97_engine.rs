//! IF97 물성 계산기 회귀 테스트. 기준값은 IAPWS-IF97 증기표 값을 사용한다.
use approx::assert_abs_diff_eq;
use dual_state_steam::config::UnitSystem;
use dual_state_steam::quantity::PropertyType;
use dual_state_steam::steam::{
    EngineError, If97Engine, PropertyEngine, PropertySpec, ResolveError, StateResolver, ThermoState,
};
use seuif97::{OH, OS, OT, OU, OV};

fn spec(property: PropertyType, value: f64) -> PropertySpec {
    PropertySpec::new(property, value)
}

fn solve(a: PropertySpec, b: PropertySpec) -> ThermoState {
    If97Engine::new()
        .solve(a, b)
        .unwrap_or_else(|e| panic!("{} / {} 계산 실패: {e}", a.property, b.property))
}

fn assert_close_rel(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn superheated_steam_at_one_bar() {
    // 1 bar(abs), 100 °C: 포화온도(99.6 °C)보다 높아 과열 증기
    let s = solve(
        spec(PropertyType::Pressure, 1.0),
        spec(PropertyType::Temperature, 100.0),
    );
    assert_eq!(s.pressure_bar, 1.0);
    assert_eq!(s.temperature_c, 100.0);
    assert_abs_diff_eq!(s.enthalpy_kj_per_kg, 2675.8, epsilon = 1.5);
    assert_abs_diff_eq!(s.entropy_kj_per_kgk, 7.361, epsilon = 0.01);
    assert_abs_diff_eq!(s.specific_volume_m3_per_kg, 1.696, epsilon = 0.005);
    assert_abs_diff_eq!(s.internal_energy_kj_per_kg, 2506.2, epsilon = 1.5);
    assert_eq!(s.quality, None);
}

#[test]
fn compressed_liquid_at_ten_bar() {
    let s = solve(
        spec(PropertyType::Pressure, 10.0),
        spec(PropertyType::Temperature, 100.0),
    );
    assert_abs_diff_eq!(s.enthalpy_kj_per_kg, 419.9, epsilon = 1.0);
    assert_abs_diff_eq!(s.specific_volume_m3_per_kg, 0.001043, epsilon = 1e-5);
    assert_abs_diff_eq!(s.entropy_kj_per_kgk, 1.306, epsilon = 0.01);
    assert_eq!(s.quality, None);
}

#[test]
fn wet_steam_from_pressure_and_quality() {
    let s = solve(
        spec(PropertyType::Pressure, 1.0),
        spec(PropertyType::Quality, 0.5),
    );
    assert_abs_diff_eq!(s.temperature_c, 99.61, epsilon = 0.05);
    assert_abs_diff_eq!(s.enthalpy_kj_per_kg, 1546.2, epsilon = 1.5);
    assert_eq!(s.quality, Some(0.5));
    assert!(s.is_two_phase());
}

#[test]
fn saturated_endpoints_keep_defined_quality() {
    let liquid = solve(
        spec(PropertyType::Temperature, 150.0),
        spec(PropertyType::Quality, 0.0),
    );
    let vapor = solve(
        spec(PropertyType::Temperature, 150.0),
        spec(PropertyType::Quality, 1.0),
    );
    assert_eq!(liquid.quality, Some(0.0));
    assert_eq!(vapor.quality, Some(1.0));
    assert_close_rel("Psat", liquid.pressure_bar, vapor.pressure_bar, 1e-9);
    assert_abs_diff_eq!(liquid.pressure_bar, 4.76, epsilon = 0.01);
}

/// 과열 증기 한 점을 여러 물성치 조합으로 다시 찾는다.
#[test]
fn superheated_point_round_trips_through_other_pairs() {
    let reference = solve(
        spec(PropertyType::Pressure, 10.0),
        spec(PropertyType::Temperature, 250.0),
    );
    let pairs = [
        (PropertyType::Enthalpy, PropertyType::Entropy),
        (PropertyType::Pressure, PropertyType::Enthalpy),
        (PropertyType::Pressure, PropertyType::Entropy),
        (PropertyType::Pressure, PropertyType::InternalEnergy),
        (PropertyType::Pressure, PropertyType::SpecificVolume),
        (PropertyType::Temperature, PropertyType::Entropy),
        (PropertyType::Temperature, PropertyType::SpecificVolume),
        (PropertyType::Temperature, PropertyType::InternalEnergy),
        (PropertyType::Enthalpy, PropertyType::SpecificVolume),
        (PropertyType::Entropy, PropertyType::SpecificVolume),
        (PropertyType::InternalEnergy, PropertyType::SpecificVolume),
    ];
    for (a, b) in pairs {
        let value = |p: PropertyType| reference.get(p).expect("single-phase property");
        let s = solve(spec(a, value(a)), spec(b, value(b)));
        let label = format!("{a}/{b}");
        assert_close_rel(&format!("{label} P"), s.pressure_bar, 10.0, 5e-3);
        assert_abs_diff_eq!(s.temperature_c, 250.0, epsilon = 0.1);
        assert_eq!(s.quality, None, "{label}");
    }
}

#[test]
fn wet_point_round_trips_through_quality_pairs() {
    let reference = solve(
        spec(PropertyType::Pressure, 5.0),
        spec(PropertyType::Quality, 0.3),
    );
    let pairs = [
        (PropertyType::Temperature, PropertyType::Enthalpy),
        (PropertyType::Temperature, PropertyType::SpecificVolume),
        (PropertyType::Enthalpy, PropertyType::Quality),
        (PropertyType::SpecificVolume, PropertyType::Quality),
        (PropertyType::Pressure, PropertyType::Enthalpy),
    ];
    for (a, b) in pairs {
        let value = |p: PropertyType| reference.get(p).expect("two-phase property");
        let s = solve(spec(a, value(a)), spec(b, value(b)));
        let label = format!("{a}/{b}");
        assert_close_rel(&format!("{label} P"), s.pressure_bar, 5.0, 5e-3);
        let x = s.quality.unwrap_or_else(|| panic!("{label}: 건도가 정의되어야 함"));
        assert_abs_diff_eq!(x, 0.3, epsilon = 1e-3);
    }
}

/// (P, T) 한 점의 물성치를 seuif97 정방향 식으로 직접 계산한다.
fn forward_point(p_bar: f64, t_c: f64) -> ThermoState {
    let p = p_bar / 10.0;
    ThermoState {
        pressure_bar: p_bar,
        temperature_c: t_c,
        enthalpy_kj_per_kg: seuif97::pt(p, t_c, OH),
        entropy_kj_per_kgk: seuif97::pt(p, t_c, OS),
        internal_energy_kj_per_kg: seuif97::pt(p, t_c, OU),
        specific_volume_m3_per_kg: seuif97::pt(p, t_c, OV),
        quality: None,
    }
}

fn assert_round_trips(reference: &ThermoState, pairs: &[(PropertyType, PropertyType)]) {
    for &(a, b) in pairs {
        let value = |p: PropertyType| reference.get(p).expect("single-phase property");
        let s = solve(spec(a, value(a)), spec(b, value(b)));
        let label = format!("{a}/{b}");
        assert_close_rel(&format!("{label} P"), s.pressure_bar, reference.pressure_bar, 5e-3);
        assert_abs_diff_eq!(s.temperature_c, reference.temperature_c, epsilon = 0.1);
        assert_eq!(s.quality, None, "{label}");
    }
}

#[test]
fn compressed_liquid_round_trips() {
    let reference = forward_point(50.0, 80.0);
    assert_round_trips(
        &reference,
        &[
            (PropertyType::Pressure, PropertyType::Enthalpy),
            (PropertyType::Pressure, PropertyType::Entropy),
            (PropertyType::Pressure, PropertyType::InternalEnergy),
            (PropertyType::Pressure, PropertyType::SpecificVolume),
            (PropertyType::Temperature, PropertyType::Entropy),
            (PropertyType::Temperature, PropertyType::InternalEnergy),
            (PropertyType::Temperature, PropertyType::SpecificVolume),
        ],
    );
}

#[test]
fn supercritical_round_trips() {
    let reference = forward_point(300.0, 500.0);
    assert_round_trips(
        &reference,
        &[
            (PropertyType::Pressure, PropertyType::Enthalpy),
            (PropertyType::Pressure, PropertyType::Entropy),
            (PropertyType::Pressure, PropertyType::SpecificVolume),
            (PropertyType::Temperature, PropertyType::Entropy),
            (PropertyType::Temperature, PropertyType::SpecificVolume),
            (PropertyType::Entropy, PropertyType::SpecificVolume),
        ],
    );
}

/// 압축수 근처의 (T, h) 는 습증기와 압축수 두 상태에 모두 맞는다.
#[test]
fn liquid_temperature_and_enthalpy_is_ambiguous() {
    let reference = forward_point(50.0, 80.0);
    let err = If97Engine::new()
        .solve(
            spec(PropertyType::Temperature, 80.0),
            spec(PropertyType::Enthalpy, reference.enthalpy_kj_per_kg),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::Ambiguous(_)), "{err}");
}

/// 등엔탈피선에서 u = h − Pv 는 저압 습증기와 압축수에서 같은 값을 두 번 지난다.
#[test]
fn liquid_enthalpy_and_internal_energy_is_ambiguous() {
    let reference = forward_point(50.0, 80.0);
    let err = If97Engine::new()
        .solve(
            spec(PropertyType::Enthalpy, reference.enthalpy_kj_per_kg),
            spec(PropertyType::InternalEnergy, reference.internal_energy_kj_per_kg),
        )
        .unwrap_err();
    match err {
        EngineError::Ambiguous(msg) => assert!(msg.contains("P = "), "{msg}"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn pressure_and_saturation_temperature_is_rejected() {
    let t_sat = seuif97::px(0.1, 0.0, OT);
    let err = If97Engine::new()
        .solve(
            spec(PropertyType::Pressure, 1.0),
            spec(PropertyType::Temperature, t_sat),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::Ambiguous(_)), "{err}");

    // 포화온도에서 조금만 벗어나도 단상으로 결정된다.
    let vapor = solve(
        spec(PropertyType::Pressure, 1.0),
        spec(PropertyType::Temperature, t_sat + 0.5),
    );
    assert_eq!(vapor.quality, None);
}

#[test]
fn temperature_above_table_range_fails() {
    let err = If97Engine::new()
        .solve(
            spec(PropertyType::Pressure, 1.0),
            spec(PropertyType::Temperature, 900.0),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::OutOfRange(_)));
}

#[test]
fn quality_above_critical_pressure_fails() {
    let err = If97Engine::new()
        .solve(
            spec(PropertyType::Pressure, 300.0),
            spec(PropertyType::Quality, 0.5),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::OutOfRange(_)));
}

#[test]
fn unreachable_volume_has_no_solution() {
    // 1 bar 에서는 800 °C 에서도 비체적이 5 m³/kg 를 넘지 않는다.
    let err = If97Engine::new()
        .solve(
            spec(PropertyType::Pressure, 1.0),
            spec(PropertyType::SpecificVolume, 1.0e6),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::NoSolution(_)));
}

#[test]
fn english_inputs_resolve_to_same_state() {
    let resolver = StateResolver::new(If97Engine::new());
    let si = resolver
        .resolve(
            spec(PropertyType::Pressure, 1.0),
            spec(PropertyType::Temperature, 100.0),
            UnitSystem::SI,
        )
        .expect("si");
    let english = resolver
        .resolve(
            spec(PropertyType::Pressure, 14.503_77),
            spec(PropertyType::Temperature, 212.0),
            UnitSystem::English,
        )
        .expect("english");
    assert_abs_diff_eq!(si.enthalpy_kj_per_kg, english.enthalpy_kj_per_kg, epsilon = 1e-3);
    assert_abs_diff_eq!(si.temperature_c, english.temperature_c, epsilon = 1e-9);

    // 입력값은 같은 단위로 되돌리면 원래 값이 된다.
    let p_back = english
        .get_in(PropertyType::Pressure, UnitSystem::English)
        .expect("P");
    assert_abs_diff_eq!(p_back, 14.503_77, epsilon = 1e-3);
}

#[test]
fn engine_failure_is_wrapped_by_resolver() {
    let resolver = StateResolver::new(If97Engine::new());
    let err = resolver
        .resolve(
            spec(PropertyType::Pressure, 300.0),
            spec(PropertyType::Quality, 0.5),
            UnitSystem::SI,
        )
        .unwrap_err();
    assert!(matches!(err, ResolveError::Engine(EngineError::OutOfRange(_))));
}
