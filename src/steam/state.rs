use crate::config::UnitSystem;
use crate::conversion;
use crate::quantity::PropertyType;

/// 상태 지정에 쓰이는 (물성치, 값) 쌍. 값의 단위는 함께 전달되는 단위 시스템을 따른다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySpec {
    pub property: PropertyType,
    pub value: f64,
}

impl PropertySpec {
    pub fn new(property: PropertyType, value: f64) -> Self {
        Self { property, value }
    }

    /// 값을 다른 단위 시스템으로 옮긴다.
    pub fn converted(self, from: UnitSystem, to: UnitSystem) -> Self {
        Self {
            value: conversion::convert_property(self.property, self.value, from, to),
            ..self
        }
    }
}

/// 완전히 결정된 물의 열역학 상태. 모든 값은 SI(bar abs, °C, kJ/kg, kJ/(kg·K), m³/kg) 기준이다.
///
/// 건도는 2상 영역에서만 정의되며 그 밖에서는 `None` 이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoState {
    pub pressure_bar: f64,
    pub temperature_c: f64,
    pub enthalpy_kj_per_kg: f64,
    pub entropy_kj_per_kgk: f64,
    pub internal_energy_kj_per_kg: f64,
    pub specific_volume_m3_per_kg: f64,
    pub quality: Option<f64>,
}

impl ThermoState {
    /// SI 기준 물성치 값. 정의되지 않은 건도는 `None`.
    pub fn get(&self, property: PropertyType) -> Option<f64> {
        match property {
            PropertyType::Pressure => Some(self.pressure_bar),
            PropertyType::Temperature => Some(self.temperature_c),
            PropertyType::Enthalpy => Some(self.enthalpy_kj_per_kg),
            PropertyType::Entropy => Some(self.entropy_kj_per_kgk),
            PropertyType::InternalEnergy => Some(self.internal_energy_kj_per_kg),
            PropertyType::SpecificVolume => Some(self.specific_volume_m3_per_kg),
            PropertyType::Quality => self.quality,
        }
    }

    /// 요청한 단위 시스템으로 환산한 값.
    pub fn get_in(&self, property: PropertyType, system: UnitSystem) -> Option<f64> {
        self.get(property)
            .map(|v| conversion::convert_property(property, v, UnitSystem::SI, system))
    }

    /// 사용자가 지정한 값을 그대로 덮어쓴다.
    pub(crate) fn pin(&mut self, spec: PropertySpec) {
        match spec.property {
            PropertyType::Pressure => self.pressure_bar = spec.value,
            PropertyType::Temperature => self.temperature_c = spec.value,
            PropertyType::Enthalpy => self.enthalpy_kj_per_kg = spec.value,
            PropertyType::Entropy => self.entropy_kj_per_kgk = spec.value,
            PropertyType::InternalEnergy => self.internal_energy_kj_per_kg = spec.value,
            PropertyType::SpecificVolume => self.specific_volume_m3_per_kg = spec.value,
            PropertyType::Quality => self.quality = Some(spec.value),
        }
    }

    /// 2상 영역 여부.
    pub fn is_two_phase(&self) -> bool {
        self.quality.is_some()
    }
}

/// 상태 2 − 상태 1 의 물성치 차이. SI 기준.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeltaSet {
    pub pressure_bar: f64,
    pub temperature_c: f64,
    pub enthalpy_kj_per_kg: f64,
    pub entropy_kj_per_kgk: f64,
    pub internal_energy_kj_per_kg: f64,
    pub specific_volume_m3_per_kg: f64,
    /// 두 상태 모두 건도가 정의된 경우에만 값이 있다.
    pub quality: Option<f64>,
}

impl DeltaSet {
    pub fn between(state1: &ThermoState, state2: &ThermoState) -> Self {
        Self {
            pressure_bar: state2.pressure_bar - state1.pressure_bar,
            temperature_c: state2.temperature_c - state1.temperature_c,
            enthalpy_kj_per_kg: state2.enthalpy_kj_per_kg - state1.enthalpy_kj_per_kg,
            entropy_kj_per_kgk: state2.entropy_kj_per_kgk - state1.entropy_kj_per_kgk,
            internal_energy_kj_per_kg: state2.internal_energy_kj_per_kg
                - state1.internal_energy_kj_per_kg,
            specific_volume_m3_per_kg: state2.specific_volume_m3_per_kg
                - state1.specific_volume_m3_per_kg,
            quality: state1.quality.zip(state2.quality).map(|(x1, x2)| x2 - x1),
        }
    }

    pub fn get(&self, property: PropertyType) -> Option<f64> {
        match property {
            PropertyType::Pressure => Some(self.pressure_bar),
            PropertyType::Temperature => Some(self.temperature_c),
            PropertyType::Enthalpy => Some(self.enthalpy_kj_per_kg),
            PropertyType::Entropy => Some(self.entropy_kj_per_kgk),
            PropertyType::InternalEnergy => Some(self.internal_energy_kj_per_kg),
            PropertyType::SpecificVolume => Some(self.specific_volume_m3_per_kg),
            PropertyType::Quality => self.quality,
        }
    }

    /// 요청한 단위 시스템으로 환산한 차이값. 온도차는 배율만 적용한다.
    pub fn get_in(&self, property: PropertyType, system: UnitSystem) -> Option<f64> {
        self.get(property).map(|v| {
            conversion::convert_difference(property.kind(), v, UnitSystem::SI, system)
        })
    }
}
