//! 물리량 분류에 따라 값 하나를 SI ↔ 영국식으로 변환한다.

use crate::config::UnitSystem;
use crate::quantity::{PropertyType, QuantityKind};
use crate::units::{
    pressure, specific_energy, specific_entropy, specific_volume, temperature, ConversionLaw,
};

/// 분류별 변환 법칙 표.
pub fn law_for(kind: QuantityKind) -> ConversionLaw {
    match kind {
        QuantityKind::Pressure => pressure::LAW,
        QuantityKind::Temperature => temperature::LAW,
        QuantityKind::SpecificEnergy => specific_energy::LAW,
        QuantityKind::SpecificEntropy => specific_entropy::LAW,
        QuantityKind::SpecificVolume => specific_volume::LAW,
        QuantityKind::Fraction => ConversionLaw::Identity,
    }
}

/// 분류를 알 수 없는 값에 적용하는 법칙.
pub const FALLBACK_LAW: ConversionLaw = ConversionLaw::Identity;

fn apply(law: ConversionLaw, value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::English, UnitSystem::SI) => law.to_si(value),
        (UnitSystem::SI, UnitSystem::English) => law.to_english(value),
        _ => value,
    }
}

/// 값 하나를 `from` 단위 시스템에서 `to` 단위 시스템으로 변환한다.
pub fn convert(kind: QuantityKind, value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    apply(law_for(kind), value, from, to)
}

/// 물성치 기준 변환.
pub fn convert_property(prop: PropertyType, value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    convert(prop.kind(), value, from, to)
}

/// 두 상태 값의 차이(Δ)를 변환한다. 온도차는 오프셋 없이 배율만 적용된다.
pub fn convert_difference(kind: QuantityKind, value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    apply(law_for(kind).difference(), value, from, to)
}

/// 기호 문자열로 지정된 물성치를 변환한다. 모르는 기호는 값을 그대로 돌려준다.
pub fn convert_symbol(symbol: &str, value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    let law = match symbol.parse::<PropertyType>() {
        Ok(prop) => law_for(prop.kind()),
        Err(_) => {
            tracing::debug!(symbol, "분류 없는 물성치, 항등 변환 적용");
            FALLBACK_LAW
        }
    };
    apply(law, value, from, to)
}

/// 표시용 단위 기호.
pub fn unit_label(kind: QuantityKind, system: UnitSystem) -> &'static str {
    let (si, english) = match kind {
        QuantityKind::Pressure => (pressure::SI_LABEL, pressure::ENGLISH_LABEL),
        QuantityKind::Temperature => (temperature::SI_LABEL, temperature::ENGLISH_LABEL),
        QuantityKind::SpecificEnergy => (specific_energy::SI_LABEL, specific_energy::ENGLISH_LABEL),
        QuantityKind::SpecificEntropy => {
            (specific_entropy::SI_LABEL, specific_entropy::ENGLISH_LABEL)
        }
        QuantityKind::SpecificVolume => (specific_volume::SI_LABEL, specific_volume::ENGLISH_LABEL),
        QuantityKind::Fraction => ("-", "-"),
    };
    match system {
        UnitSystem::SI => si,
        UnitSystem::English => english,
    }
}
