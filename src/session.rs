//! 화면 계층과 맞닿는 세션. 단위 시스템 플래그와 네 개의 입력칸, 마지막 비교 결과를 소유한다.

use std::fmt;

use crate::config::UnitSystem;
use crate::quantity::PropertyType;
use crate::rebase::{self, InputSlot, RebaseReport};
use crate::steam::{
    Comparison, ComparisonError, DualStateComparator, PropertyEngine, PropertySpec, StateIndex,
};

/// 한 상태 안에서 물성치 입력칸의 순서.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotPosition {
    First,
    Second,
}

impl SlotPosition {
    pub const ALL: [SlotPosition; 2] = [SlotPosition::First, SlotPosition::Second];

    pub fn number(self) -> u8 {
        match self {
            SlotPosition::First => 1,
            SlotPosition::Second => 2,
        }
    }
}

/// 입력칸 위치: 상태 번호와 그 안의 첫째/둘째 물성치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub state: StateIndex,
    pub position: SlotPosition,
}

impl SlotId {
    pub const ALL: [SlotId; 4] = [
        SlotId::new(StateIndex::First, SlotPosition::First),
        SlotId::new(StateIndex::First, SlotPosition::Second),
        SlotId::new(StateIndex::Second, SlotPosition::First),
        SlotId::new(StateIndex::Second, SlotPosition::Second),
    ];

    pub const fn new(state: StateIndex, position: SlotPosition) -> Self {
        Self { state, position }
    }

    fn index(self) -> usize {
        let base = match self.state {
            StateIndex::First => 0,
            StateIndex::Second => 2,
        };
        match self.position {
            SlotPosition::First => base,
            SlotPosition::Second => base + 1,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 물성치 {}", self.state, self.position.number())
    }
}

/// 입력칸 원문을 숫자로 읽지 못함.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{slot} 입력값을 숫자로 읽을 수 없습니다: \"{raw}\"")]
pub struct InputError {
    pub slot: SlotId,
    pub raw: String,
}

/// 계산 실패.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculateError {
    #[error("{}", join_messages(.0))]
    InvalidInput(Vec<InputError>),
    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

fn join_messages(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// 한 사용자의 계산 세션.
#[derive(Debug, Clone)]
pub struct Session<E> {
    unit_system: UnitSystem,
    slots: [InputSlot; 4],
    comparator: DualStateComparator<E>,
    current: Option<Comparison>,
}

impl<E: PropertyEngine> Session<E> {
    /// 입력칸은 상태마다 P, T 선택과 빈 값으로 시작한다.
    pub fn new(engine: E, unit_system: UnitSystem) -> Self {
        let slot = |property| InputSlot::new(property, "");
        Self {
            unit_system,
            slots: [
                slot(PropertyType::Pressure),
                slot(PropertyType::Temperature),
                slot(PropertyType::Pressure),
                slot(PropertyType::Temperature),
            ],
            comparator: DualStateComparator::new(engine),
            current: None,
        }
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn slots(&self) -> &[InputSlot; 4] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> &InputSlot {
        &self.slots[id.index()]
    }

    /// 입력칸의 물성치 선택과 원문을 바꾼다.
    pub fn set_slot(&mut self, id: SlotId, property: PropertyType, raw: impl Into<String>) {
        self.slots[id.index()] = InputSlot::new(property, raw);
    }

    /// 마지막으로 성공한 비교 결과.
    pub fn current(&self) -> Option<&Comparison> {
        self.current.as_ref()
    }

    /// 단위 시스템을 바꾸고 입력칸 값을 환산한다. 같은 시스템이면 아무것도 하지 않는다.
    pub fn set_unit_system(&mut self, to: UnitSystem) -> RebaseReport {
        if to == self.unit_system {
            return RebaseReport::default();
        }
        let report = rebase::rebase(&mut self.slots, self.unit_system, to);
        tracing::info!(
            from = %self.unit_system,
            to = %to,
            converted = report.converted,
            skipped = report.skipped,
            "단위 시스템 전환"
        );
        self.unit_system = to;
        report
    }

    /// 네 입력칸으로 두 상태를 다시 계산한다. 실패하면 이전 결과도 비운다.
    pub fn calculate(&mut self) -> Result<&Comparison, CalculateError> {
        self.current = None;
        let specs = self.parse_slots()?;
        let comparison = self.comparator.recompute(
            (specs[0], specs[1]),
            (specs[2], specs[3]),
            self.unit_system,
        )?;
        Ok(self.current.insert(comparison))
    }

    fn parse_slots(&self) -> Result<[PropertySpec; 4], CalculateError> {
        let mut specs = [PropertySpec::new(PropertyType::Pressure, 0.0); 4];
        let mut errors = Vec::new();
        for id in SlotId::ALL {
            let slot = self.slot(id);
            match slot.value() {
                Some(value) => specs[id.index()] = PropertySpec::new(slot.property, value),
                None => errors.push(InputError {
                    slot: id,
                    raw: slot.raw.clone(),
                }),
            }
        }
        if errors.is_empty() {
            Ok(specs)
        } else {
            Err(CalculateError::InvalidInput(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_cover_four_distinct_slots() {
        let indices: Vec<usize> = SlotId::ALL.iter().map(|id| id.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        let id = SlotId::new(StateIndex::Second, SlotPosition::Second);
        assert_eq!(id.to_string(), "상태 2 물성치 2");
        assert_eq!(SlotId::ALL[3], id);
    }
}
