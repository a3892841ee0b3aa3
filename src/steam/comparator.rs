use std::fmt;

use super::engine::PropertyEngine;
use super::resolver::{ResolveError, StateResolver};
use super::state::{DeltaSet, PropertySpec, ThermoState};
use crate::config::UnitSystem;

/// 비교 대상 상태 번호.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateIndex {
    First,
    Second,
}

impl StateIndex {
    pub fn number(self) -> u8 {
        match self {
            StateIndex::First => 1,
            StateIndex::Second => 2,
        }
    }
}

impl fmt::Display for StateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "상태 {}", self.number())
    }
}

/// 한 상태의 결정 실패.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{state} 계산 실패: {cause}")]
pub struct StateFailure {
    pub state: StateIndex,
    #[source]
    pub cause: ResolveError,
}

/// 비교 실패. 두 상태 모두 시도한 뒤 실패한 상태를 전부 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonError {
    failures: Vec<StateFailure>,
}

impl ComparisonError {
    pub fn failures(&self) -> &[StateFailure] {
        &self.failures
    }

    /// 특정 상태의 실패 원인.
    pub fn failure_of(&self, state: StateIndex) -> Option<&ResolveError> {
        self.failures
            .iter()
            .find(|f| f.state == state)
            .map(|f| &f.cause)
    }
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.failures.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ComparisonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.failures
            .first()
            .map(|f| f as &(dyn std::error::Error + 'static))
    }
}

/// 두 상태와 그 차이. 둘 다 결정된 경우에만 만들어진다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub state1: ThermoState,
    pub state2: ThermoState,
    pub delta: DeltaSet,
}

impl Comparison {
    pub fn state(&self, index: StateIndex) -> &ThermoState {
        match index {
            StateIndex::First => &self.state1,
            StateIndex::Second => &self.state2,
        }
    }
}

/// 한 상태를 지정하는 두 입력.
pub type StateInputs = (PropertySpec, PropertySpec);

/// 두 상태를 각각 결정하고 차이를 계산한다.
#[derive(Debug, Clone, Default)]
pub struct DualStateComparator<E> {
    resolver: StateResolver<E>,
}

impl<E: PropertyEngine> DualStateComparator<E> {
    pub fn new(engine: E) -> Self {
        Self {
            resolver: StateResolver::new(engine),
        }
    }

    /// 전부 아니면 전무: 두 상태가 모두 결정되어야 결과를 돌려준다.
    /// 한쪽이 실패해도 다른 쪽은 시도하며, 실패는 상태 번호와 함께 모두 보고한다.
    pub fn recompute(
        &self,
        first: StateInputs,
        second: StateInputs,
        unit_system: UnitSystem,
    ) -> Result<Comparison, ComparisonError> {
        let state1 = self.resolver.resolve(first.0, first.1, unit_system);
        let state2 = self.resolver.resolve(second.0, second.1, unit_system);
        match (state1, state2) {
            (Ok(state1), Ok(state2)) => {
                let delta = DeltaSet::between(&state1, &state2);
                tracing::debug!(?delta, "두 상태 비교 완료");
                Ok(Comparison {
                    state1,
                    state2,
                    delta,
                })
            }
            (r1, r2) => {
                let failures: Vec<StateFailure> = [(StateIndex::First, r1), (StateIndex::Second, r2)]
                    .into_iter()
                    .filter_map(|(state, result)| {
                        result.err().map(|cause| StateFailure { state, cause })
                    })
                    .collect();
                for failure in &failures {
                    tracing::warn!(state = failure.state.number(), cause = %failure.cause, "상태 결정 실패");
                }
                Err(ComparisonError { failures })
            }
        }
    }
}
