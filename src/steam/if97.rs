//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 물성 계산기.
//! 입출력: 압력 bar(abs), 온도 °C, 비에너지 kJ/kg, 엔트로피 kJ/(kg·K), 비체적 m³/kg.
//! seuif97 호출 시에만 압력을 MPa 로 바꾼다.
//!
//! 모든 입력 조합은 (p, h) 한 점으로 환원한 뒤 나머지 물성치를 `ph` 로 계산한다.

use seuif97::{hs, ph, ps, pt, px, tx, OH, OP, OS, OT, OU, OV};

use super::engine::{EngineError, PropertyEngine};
use super::state::{PropertySpec, ThermoState};
use crate::quantity::PropertyType;

const BAR_PER_MPA: f64 = 10.0;

// ---------------- IF97 유효 범위 (MPa, °C) ----------------
const P_TRIPLE_MPA: f64 = 0.000_611_657;
const P_CRIT_MPA: f64 = 22.064;
const P_LOW_MPA: f64 = 1e-5;
const P_MAX_MPA: f64 = 100.0;
const T_CRIT_C: f64 = 373.946;
const T_MIN_C: f64 = 0.0;
const T_MAX_C: f64 = 800.0;

// ---------------- 수치 해법 ----------------
const SCAN_POINTS: usize = 160;
const MAX_BISECTIONS: usize = 80;
/// 해로 인정하는 잔차(목표값 크기 대비)
const RESIDUAL_TOL: f64 = 1e-6;
/// 포화선에서 떨어뜨리는 상대 간격
const SAT_GAP: f64 = 1e-6;
/// 이보다 가까운 두 해는 같은 해로 본다(상대값)
const DISTINCT_TOL: f64 = 1e-5;
/// 포화온도와 이만큼 가까운 (P, T) 입력은 상태를 정하지 못한다(°C)
const SAT_T_TOL: f64 = 1e-3;

/// seuif97 기반 기본 물성 계산기.
#[derive(Debug, Clone, Copy, Default)]
pub struct If97Engine;

impl If97Engine {
    pub fn new() -> Self {
        Self
    }
}

impl PropertyEngine for If97Engine {
    fn solve(&self, a: PropertySpec, b: PropertySpec) -> Result<ThermoState, EngineError> {
        check_range(a)?;
        check_range(b)?;
        let (p, h) = locate(to_engine_units(a), to_engine_units(b))?;
        tracing::debug!(
            a = %a.property,
            b = %b.property,
            p_mpa = p,
            h_kj_per_kg = h,
            "IF97 상태점 결정"
        );
        let mut state = state_at(p, h)?;
        state.pin(a);
        state.pin(b);
        Ok(state)
    }
}

fn to_engine_units(spec: PropertySpec) -> PropertySpec {
    match spec.property {
        PropertyType::Pressure => PropertySpec::new(spec.property, spec.value / BAR_PER_MPA),
        _ => spec,
    }
}

fn check_range(spec: PropertySpec) -> Result<(), EngineError> {
    match spec.property {
        PropertyType::Pressure => {
            let p = spec.value / BAR_PER_MPA;
            if p <= 0.0 || p > P_MAX_MPA {
                return Err(EngineError::OutOfRange(format!(
                    "압력 {} bar (0~1000 bar(abs)에서 계산 가능)",
                    spec.value
                )));
            }
        }
        PropertyType::Temperature => {
            if !(T_MIN_C..=T_MAX_C).contains(&spec.value) {
                return Err(EngineError::OutOfRange(format!(
                    "온도 {} °C (0~800 °C에서 계산 가능)",
                    spec.value
                )));
            }
        }
        PropertyType::Quality => {
            if !(0.0..=1.0).contains(&spec.value) {
                return Err(EngineError::OutOfRange(format!(
                    "건도 {} (0~1 사이여야 함)",
                    spec.value
                )));
            }
        }
        _ => {}
    }
    Ok(())
}

fn finite(value: f64, what: &str) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::OutOfRange(format!(
            "{what} 계산 실패(유효 범위 밖이거나 수렴 실패)"
        )))
    }
}

/// (p, h) 점의 물성치. 압력은 MPa.
fn value_at_ph(p: f64, h: f64, property: PropertyType) -> f64 {
    match property {
        PropertyType::Pressure => p,
        PropertyType::Temperature => ph(p, h, OT),
        PropertyType::Enthalpy => h,
        PropertyType::Entropy => ph(p, h, OS),
        PropertyType::InternalEnergy => ph(p, h, OU),
        PropertyType::SpecificVolume => ph(p, h, OV),
        PropertyType::Quality => quality_at(p, h).unwrap_or(f64::NAN),
    }
}

/// 단상 (p, t) 점의 물성치.
fn value_at_pt(p: f64, t: f64, property: PropertyType) -> f64 {
    match property {
        PropertyType::Pressure => p,
        PropertyType::Temperature => t,
        PropertyType::Enthalpy => pt(p, t, OH),
        PropertyType::Entropy => pt(p, t, OS),
        PropertyType::InternalEnergy => pt(p, t, OU),
        PropertyType::SpecificVolume => pt(p, t, OV),
        PropertyType::Quality => f64::NAN,
    }
}

/// 포화 온도 t, 건도 x 점의 물성치.
fn value_at_tx(t: f64, x: f64, property: PropertyType) -> f64 {
    match property {
        PropertyType::Pressure => tx(t, x, OP),
        PropertyType::Temperature => t,
        PropertyType::Enthalpy => tx(t, x, OH),
        PropertyType::Entropy => tx(t, x, OS),
        PropertyType::InternalEnergy => tx(t, x, OU),
        PropertyType::SpecificVolume => tx(t, x, OV),
        PropertyType::Quality => x,
    }
}

/// 포화수/포화증기 엔탈피 사이에 있으면 건도를, 아니면 `None` 을 돌려준다.
fn quality_at(p: f64, h: f64) -> Option<f64> {
    if !(P_TRIPLE_MPA..P_CRIT_MPA).contains(&p) {
        return None;
    }
    let hf = px(p, 0.0, OH);
    let hg = px(p, 1.0, OH);
    if !hf.is_finite() || !hg.is_finite() || hg <= hf {
        return None;
    }
    let x = (h - hf) / (hg - hf);
    let tol = 1e-9;
    if (-tol..=1.0 + tol).contains(&x) {
        Some(x.clamp(0.0, 1.0))
    } else {
        None
    }
}

fn state_at(p: f64, h: f64) -> Result<ThermoState, EngineError> {
    Ok(ThermoState {
        pressure_bar: finite(p, "압력")? * BAR_PER_MPA,
        temperature_c: finite(ph(p, h, OT), "온도")?,
        enthalpy_kj_per_kg: finite(h, "엔탈피")?,
        entropy_kj_per_kgk: finite(ph(p, h, OS), "엔트로피")?,
        internal_energy_kj_per_kg: finite(ph(p, h, OU), "내부에너지")?,
        specific_volume_m3_per_kg: finite(ph(p, h, OV), "비체적")?,
        quality: quality_at(p, h),
    })
}

/// 두 입력을 (p[MPa], h[kJ/kg]) 점으로 환원한다.
fn locate(a: PropertySpec, b: PropertySpec) -> Result<(f64, f64), EngineError> {
    use PropertyType::*;
    match (a.property, b.property) {
        (pa, pb) if pa == pb => Err(EngineError::UnsupportedPair(pa, pb)),
        (Pressure, _) => Ok((a.value, enthalpy_at_pressure(a.value, b)?)),
        (_, Pressure) => Ok((b.value, enthalpy_at_pressure(b.value, a)?)),
        (Temperature, _) => locate_at_temperature(a.value, b),
        (_, Temperature) => locate_at_temperature(b.value, a),
        (Enthalpy, Entropy) => locate_by_hs(a.value, b.value),
        (Entropy, Enthalpy) => locate_by_hs(b.value, a.value),
        _ => {
            if anchor_rank(a.property) <= anchor_rank(b.property) {
                locate_by_pressure_scan(a, b)
            } else {
                locate_by_pressure_scan(b, a)
            }
        }
    }
}

/// 압력 주사 시 기준으로 삼기 쉬운 순서. 건도와 엔탈피는 직접 계산된다.
fn anchor_rank(property: PropertyType) -> u8 {
    match property {
        PropertyType::Quality => 0,
        PropertyType::Enthalpy => 1,
        PropertyType::Entropy => 2,
        PropertyType::InternalEnergy => 3,
        PropertyType::SpecificVolume => 4,
        PropertyType::Pressure | PropertyType::Temperature => 5,
    }
}

/// 압력과 다른 물성치 하나로 엔탈피를 구한다.
fn enthalpy_at_pressure(p: f64, spec: PropertySpec) -> Result<f64, EngineError> {
    let h = match spec.property {
        PropertyType::Temperature => {
            if (P_TRIPLE_MPA..P_CRIT_MPA).contains(&p) {
                let t_sat = px(p, 0.0, OT);
                if (spec.value - t_sat).abs() <= SAT_T_TOL {
                    return Err(EngineError::Ambiguous(format!(
                        "포화온도({t_sat:.3} °C)에서는 압력과 온도로 건도를 정할 수 없습니다."
                    )));
                }
            }
            pt(p, spec.value, OH)
        }
        PropertyType::Enthalpy => spec.value,
        PropertyType::Entropy => ps(p, spec.value, OH),
        PropertyType::Quality => {
            if p >= P_CRIT_MPA {
                return Err(EngineError::OutOfRange(
                    "임계압력(220.64 bar) 이상에서는 건도가 정의되지 않습니다.".to_string(),
                ));
            }
            px(p, spec.value, OH)
        }
        PropertyType::InternalEnergy | PropertyType::SpecificVolume => {
            let lo = finite(pt(p, T_MIN_C, OH), "엔탈피 하한")?;
            let hi = finite(pt(p, T_MAX_C, OH), "엔탈피 상한")?;
            find_root(
                Axis::Enthalpy,
                lo,
                hi,
                spec.value,
                |h| value_at_ph(p, h, spec.property),
                spec.property,
            )?
        }
        PropertyType::Pressure => {
            return Err(EngineError::UnsupportedPair(spec.property, spec.property))
        }
    };
    finite(h, "엔탈피")
}

fn locate_at_temperature(t: f64, other: PropertySpec) -> Result<(f64, f64), EngineError> {
    if other.property == PropertyType::Quality {
        if t >= T_CRIT_C {
            return Err(EngineError::OutOfRange(
                "임계온도(373.946 °C) 이상에서는 건도가 정의되지 않습니다.".to_string(),
            ));
        }
        let p = finite(tx(t, other.value, OP), "포화압력")?;
        let h = finite(tx(t, other.value, OH), "엔탈피")?;
        return Ok((p, h));
    }

    let mut found = Vec::new();
    let ranges = if t < T_CRIT_C {
        let p_sat = finite(tx(t, 0.0, OP), "포화압력")?;
        let y_f = finite(value_at_tx(t, 0.0, other.property), "포화수 물성")?;
        let y_g = finite(value_at_tx(t, 1.0, other.property), "포화증기 물성")?;
        if (y_f.min(y_g)..=y_f.max(y_g)).contains(&other.value) {
            let x = (other.value - y_f) / (y_g - y_f);
            found.push((p_sat, finite(tx(t, x, OH), "엔탈피")?));
        }
        // 습증기 해가 있어도 압축수와 과열 증기 쪽을 모두 확인한다.
        vec![
            (p_sat * (1.0 + SAT_GAP), P_MAX_MPA),
            (P_LOW_MPA, p_sat * (1.0 - SAT_GAP)),
        ]
    } else {
        vec![(P_LOW_MPA, P_MAX_MPA)]
    };
    for (lo, hi) in ranges {
        let roots = find_roots(Axis::Pressure, lo, hi, other.value, |p| {
            value_at_pt(p, t, other.property)
        });
        for p in roots {
            found.push((p, finite(pt(p, t, OH), "엔탈피")?));
        }
    }
    single_solution(Axis::Pressure, found, other)
}

fn locate_by_hs(h: f64, s: f64) -> Result<(f64, f64), EngineError> {
    let p = finite(hs(h, s, OP), "압력")?;
    if p <= 0.0 {
        return Err(EngineError::NoSolution(
            "h, s 조합에 해당하는 압력이 없습니다.".to_string(),
        ));
    }
    Ok((p, h))
}

/// 기준 물성치로 각 압력의 엔탈피를 구하고, 목표 물성치가 맞는 압력을 찾는다.
fn locate_by_pressure_scan(
    anchor: PropertySpec,
    target: PropertySpec,
) -> Result<(f64, f64), EngineError> {
    let two_phase_only = anchor.property == PropertyType::Quality;
    let (lo, hi) = if two_phase_only {
        (P_TRIPLE_MPA, P_CRIT_MPA * (1.0 - SAT_GAP))
    } else {
        (P_LOW_MPA, P_MAX_MPA)
    };
    let p = find_root(
        Axis::Pressure,
        lo,
        hi,
        target.value,
        |p| match enthalpy_at_pressure(p, anchor) {
            Ok(h) => value_at_ph(p, h, target.property),
            Err(_) => f64::NAN,
        },
        target.property,
    )?;
    let h = enthalpy_at_pressure(p, anchor)?;
    Ok((p, h))
}

/// 탐색 변수. 엔탈피는 선형 격자, 압력(MPa)은 로그 격자로 훑는다.
#[derive(Debug, Clone, Copy)]
enum Axis {
    Enthalpy,
    Pressure,
}

impl Axis {
    /// 구간 [lo, hi] 에서 비율 `frac` 위치의 점.
    fn point(self, lo: f64, hi: f64, frac: f64) -> f64 {
        match self {
            Axis::Enthalpy => lo + (hi - lo) * frac,
            Axis::Pressure => (lo.ln() + (hi.ln() - lo.ln()) * frac).exp(),
        }
    }

    fn describe(self, value: f64) -> String {
        match self {
            Axis::Enthalpy => format!("h = {value:.3} kJ/kg"),
            Axis::Pressure => format!("P = {:.4} bar", value * BAR_PER_MPA),
        }
    }
}

fn same_root(a: f64, b: f64) -> bool {
    (a - b).abs() <= DISTINCT_TOL * a.abs().max(b.abs())
}

/// 서로 다른 해가 정확히 하나일 때만 그 해를 돌려준다.
/// `found` 의 각 항목은 (탐색 변수 값, 그 해에 딸린 값) 이다.
fn single_solution<T>(
    axis: Axis,
    found: Vec<(f64, T)>,
    solving_for: PropertySpec,
) -> Result<(f64, T), EngineError> {
    let mut distinct: Vec<(f64, T)> = Vec::new();
    for (x, extra) in found {
        if distinct.iter().all(|(seen, _)| !same_root(*seen, x)) {
            distinct.push((x, extra));
        }
    }
    let PropertySpec { property, value } = solving_for;
    let mut solutions = distinct.into_iter();
    match (solutions.next(), solutions.next()) {
        (Some(only), None) => Ok(only),
        (Some((first, _)), Some((second, _))) => Err(EngineError::Ambiguous(format!(
            "{property} = {value} 을 만족하는 상태가 둘 이상입니다 ({}, {})",
            axis.describe(first),
            axis.describe(second)
        ))),
        (None, _) => Err(EngineError::NoSolution(format!(
            "{property} = {value} 을 만족하는 상태가 유효 범위 안에 없습니다."
        ))),
    }
}

/// `f(x) = target` 의 유일한 해.
fn find_root<F>(
    axis: Axis,
    lo: f64,
    hi: f64,
    target: f64,
    f: F,
    solving_for: PropertyType,
) -> Result<f64, EngineError>
where
    F: Fn(f64) -> f64,
{
    let found = find_roots(axis, lo, hi, target, f)
        .into_iter()
        .map(|x| (x, ()))
        .collect();
    single_solution(axis, found, PropertySpec::new(solving_for, target)).map(|(x, ())| x)
}

/// 격자 전체를 훑어 부호가 바뀌는 구간마다 이분법으로 해를 좁힌다.
/// 잔차가 남는 구간(상 경계 불연속)은 해로 보지 않는다.
fn find_roots<F>(axis: Axis, lo: f64, hi: f64, target: f64, f: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let residual = |frac: f64| f(axis.point(lo, hi, frac)) - target;
    let mut roots = Vec::new();
    let mut prev: Option<(f64, f64)> = None;
    for i in 0..=SCAN_POINTS {
        let frac = i as f64 / SCAN_POINTS as f64;
        let r = residual(frac);
        if !r.is_finite() {
            prev = None;
            continue;
        }
        if let Some((prev_frac, prev_r)) = prev {
            if (prev_r <= 0.0) != (r <= 0.0) {
                let root = bisect(prev_frac, frac, prev_r, &residual);
                let r_root = residual(root);
                if r_root.is_finite() && r_root.abs() <= RESIDUAL_TOL * target.abs().max(1.0) {
                    roots.push(axis.point(lo, hi, root));
                } else {
                    tracing::debug!(residual = r_root, "상 경계 불연속, 다음 구간 탐색");
                }
            }
        }
        prev = Some((frac, r));
    }
    roots
}

fn bisect<F>(mut a: f64, mut b: f64, mut r_a: f64, residual: &F) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (a + b);
        let r_mid = residual(mid);
        if !r_mid.is_finite() {
            break;
        }
        if (r_mid <= 0.0) == (r_a <= 0.0) {
            a = mid;
            r_a = r_mid;
        } else {
            b = mid;
        }
    }
    0.5 * (a + b)
}
