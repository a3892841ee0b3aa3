//! 단위 시스템 전환 시 입력칸 값을 제자리에서 환산한다.

use crate::config::UnitSystem;
use crate::conversion;
use crate::quantity::PropertyType;

/// 환산된 입력칸에 기록하는 소수 자릿수.
pub const REBASE_DECIMALS: usize = 3;

/// 물성치 선택과 사용자가 입력한 원문 값.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSlot {
    pub property: PropertyType,
    pub raw: String,
}

impl InputSlot {
    pub fn new(property: PropertyType, raw: impl Into<String>) -> Self {
        Self {
            property,
            raw: raw.into(),
        }
    }

    /// 원문을 숫자로 해석한다. 앞뒤 공백은 무시한다.
    pub fn value(&self) -> Option<f64> {
        self.raw.trim().parse::<f64>().ok()
    }
}

/// 환산 결과 요약.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebaseReport {
    pub converted: usize,
    /// 숫자가 아니어서 그대로 둔 칸 수
    pub skipped: usize,
}

/// 각 입력칸을 선택된 물성치 기준으로 `from` → `to` 환산한다.
/// 숫자로 읽히지 않는 칸은 건너뛰고 나머지 칸의 환산을 막지 않는다.
pub fn rebase(slots: &mut [InputSlot], from: UnitSystem, to: UnitSystem) -> RebaseReport {
    let mut report = RebaseReport::default();
    if from == to {
        return report;
    }
    for slot in slots.iter_mut() {
        match slot.value() {
            Some(value) => {
                let converted = conversion::convert_property(slot.property, value, from, to);
                slot.raw = format!("{converted:.prec$}", prec = REBASE_DECIMALS);
                report.converted += 1;
            }
            None => {
                tracing::debug!(property = %slot.property, raw = %slot.raw, "숫자가 아닌 입력칸 건너뜀");
                report.skipped += 1;
            }
        }
    }
    report
}
