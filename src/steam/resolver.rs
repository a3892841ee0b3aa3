use super::engine::{EngineError, PropertyEngine};
use super::state::{PropertySpec, ThermoState};
use crate::config::UnitSystem;
use crate::quantity::PropertyType;

/// 상태 결정 실패 원인.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("같은 물성치({0})를 두 번 지정했습니다.")]
    DuplicateProperty(PropertyType),
    #[error("{property} 값이 유한한 숫자가 아닙니다: {value}")]
    NonFinite { property: PropertyType, value: f64 },
    #[error("{property} = {value} 은(는) 물리적으로 의미가 없습니다: {reason}")]
    OutOfDomain {
        property: PropertyType,
        value: f64,
        reason: &'static str,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// 두 물성치와 단위 시스템으로 상태 하나를 결정한다.
#[derive(Debug, Clone, Default)]
pub struct StateResolver<E> {
    engine: E,
}

impl<E: PropertyEngine> StateResolver<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// 입력을 SI로 환산하고 검증한 뒤 물성 계산기에 위임한다.
    pub fn resolve(
        &self,
        a: PropertySpec,
        b: PropertySpec,
        unit_system: UnitSystem,
    ) -> Result<ThermoState, ResolveError> {
        if a.property == b.property {
            return Err(ResolveError::DuplicateProperty(a.property));
        }
        let a = validate(a.converted(unit_system, UnitSystem::SI))?;
        let b = validate(b.converted(unit_system, UnitSystem::SI))?;
        self.engine.solve(a, b).map_err(|e| {
            tracing::warn!(a = %a.property, b = %b.property, error = %e, "상태 결정 실패");
            ResolveError::from(e)
        })
    }
}

/// SI 기준 값의 기본 검증.
fn validate(spec: PropertySpec) -> Result<PropertySpec, ResolveError> {
    let PropertySpec { property, value } = spec;
    if !value.is_finite() {
        return Err(ResolveError::NonFinite { property, value });
    }
    let reason = match property {
        PropertyType::Pressure if value <= 0.0 => Some("절대압력은 양수여야 합니다"),
        PropertyType::Temperature if value <= -273.15 => Some("절대영도보다 낮은 온도입니다"),
        PropertyType::SpecificVolume if value <= 0.0 => Some("비체적은 양수여야 합니다"),
        PropertyType::Quality if !(0.0..=1.0).contains(&value) => {
            Some("건도는 0과 1 사이여야 합니다")
        }
        _ => None,
    };
    match reason {
        Some(reason) => Err(ResolveError::OutOfDomain {
            property,
            value,
            reason,
        }),
        None => Ok(spec),
    }
}
