//! 비교 결과를 화면용 문자열로 만든다.

use std::fmt;

use crate::config::UnitSystem;
use crate::conversion::unit_label;
use crate::quantity::PropertyType;
use crate::steam::{Comparison, StateIndex};

/// 정의되지 않은 값(단상 영역의 건도 등) 표시.
pub const UNDEFINED: &str = "N/A";

/// 결과 표시 소수 자릿수. 입력칸 환산 자릿수와 같다.
pub const DISPLAY_DECIMALS: usize = crate::rebase::REBASE_DECIMALS;

/// 두 상태 14줄과 변화량 7줄.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub unit_system: UnitSystem,
    pub state1: Vec<String>,
    pub state2: Vec<String>,
    pub deltas: Vec<String>,
}

/// `"P: 1.000 bar"` 형식. 값이 없으면 `"x: N/A"`.
pub fn format_property(
    label: &str,
    property: PropertyType,
    value: Option<f64>,
    system: UnitSystem,
) -> String {
    match value {
        Some(v) => {
            let unit = unit_label(property.kind(), system);
            if unit == "-" {
                format!("{label}: {v:.DISPLAY_DECIMALS$}")
            } else {
                format!("{label}: {v:.DISPLAY_DECIMALS$} {unit}")
            }
        }
        None => format!("{label}: {UNDEFINED}"),
    }
}

pub fn render(comparison: &Comparison, system: UnitSystem) -> Report {
    let state_lines = |index: StateIndex| {
        let state = comparison.state(index);
        PropertyType::ALL
            .iter()
            .map(|&p| format_property(p.symbol(), p, state.get_in(p, system), system))
            .collect::<Vec<_>>()
    };
    let deltas = PropertyType::ALL
        .iter()
        .map(|&p| {
            let label = format!("Δ{}", p.symbol());
            format_property(&label, p, comparison.delta.get_in(p, system), system)
        })
        .collect();
    Report {
        unit_system: system,
        state1: state_lines(StateIndex::First),
        state2: state_lines(StateIndex::Second),
        deltas,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "현재 단위: {}", self.unit_system)?;
        for (title, lines) in [
            ("[상태 1]", &self.state1),
            ("[상태 2]", &self.state2),
            ("[변화량 (상태 2 - 상태 1)]", &self.deltas),
        ] {
            writeln!(f, "{title}")?;
            for line in lines {
                writeln!(f, "  {line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_decimals_with_unit() {
        let line = format_property("P", PropertyType::Pressure, Some(1.0), UnitSystem::SI);
        assert_eq!(line, "P: 1.000 bar");
        let line = format_property(
            "T",
            PropertyType::Temperature,
            Some(212.0),
            UnitSystem::English,
        );
        assert_eq!(line, "T: 212.000 °F");
    }

    #[test]
    fn undefined_quality_is_flagged() {
        let line = format_property("x", PropertyType::Quality, None, UnitSystem::SI);
        assert_eq!(line, "x: N/A");
        let line = format_property("x", PropertyType::Quality, Some(0.25), UnitSystem::SI);
        assert_eq!(line, "x: 0.250");
    }
}
