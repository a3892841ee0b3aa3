//! 증기표 물성 계산기와의 경계.

use super::state::{PropertySpec, ThermoState};
use crate::quantity::PropertyType;

/// 물성 계산기가 두 입력을 풀지 못한 이유.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// 두 물성치로 상태를 결정할 수 없는 조합
    #[error("지원하지 않는 물성치 조합: {0}, {1}")]
    UnsupportedPair(PropertyType, PropertyType),
    /// IF97 유효 범위 밖
    #[error("유효 범위를 벗어남: {0}")]
    OutOfRange(String),
    /// 해를 찾지 못함
    #[error("해를 찾지 못함: {0}")]
    NoSolution(String),
    /// 두 물성치를 만족하는 상태가 둘 이상이거나 두 값이 독립이 아님
    #[error("상태를 하나로 정할 수 없음: {0}")]
    Ambiguous(String),
}

/// 서로 다른 두 물성치(SI 기준)로부터 나머지 다섯 물성치를 계산한다.
///
/// 구현체는 부분적으로 채워진 상태를 돌려주지 않는다.
pub trait PropertyEngine {
    fn solve(&self, a: PropertySpec, b: PropertySpec) -> Result<ThermoState, EngineError>;
}

impl<E: PropertyEngine + ?Sized> PropertyEngine for &E {
    fn solve(&self, a: PropertySpec, b: PropertySpec) -> Result<ThermoState, EngineError> {
        (**self).solve(a, b)
    }
}
