use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::UnitSystem;
use crate::quantity::PropertyType;
use crate::session::{Session, SlotId, SlotPosition};
use crate::steam::{PropertyEngine, StateIndex};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditState(StateIndex),
    ToggleUnits,
    Calculate,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<E: PropertyEngine>(
    session: &Session<E>,
    input: &mut impl BufRead,
) -> Result<MenuChoice, AppError> {
    println!("\n=== Dual-State Steam Calculator ===");
    println!("현재 단위: {}", session.unit_system());
    print_slots(session);
    println!("1) 상태 1 입력");
    println!("2) 상태 2 입력");
    println!("3) 단위 전환 (SI ↔ English)");
    println!("4) 계산");
    println!("0) 종료");
    loop {
        let sel = read_line(input, "메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditState(StateIndex::First)),
            "2" => return Ok(MenuChoice::EditState(StateIndex::Second)),
            "3" => return Ok(MenuChoice::ToggleUnits),
            "4" => return Ok(MenuChoice::Calculate),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

fn print_slots<E: PropertyEngine>(session: &Session<E>) {
    for id in SlotId::ALL {
        let slot = session.slot(id);
        let raw = if slot.raw.is_empty() { "(비어 있음)" } else { slot.raw.as_str() };
        println!("  {id}: {} = {raw}", slot.property);
    }
}

/// 상태 하나의 두 물성치 선택과 값을 입력받는다.
/// 값은 원문 그대로 저장하며 숫자 검사는 계산 시점에 한다.
pub fn handle_edit_state<E: PropertyEngine>(
    session: &mut Session<E>,
    state: StateIndex,
    input: &mut impl BufRead,
) -> Result<(), AppError> {
    println!("\n-- {state} 입력 --");
    println!("물성치 기호: P, T, h, s, u, v, x");
    for position in SlotPosition::ALL {
        let id = SlotId::new(state, position);
        let property = read_property(input, &format!("{id} 기호: "))?;
        let hint = unit_hint(property, session.unit_system());
        let raw = read_line(input, &format!("{id} 값 ({hint}): "))?;
        session.set_slot(id, property, raw.trim());
    }
    Ok(())
}

/// 단위 시스템을 전환하고 환산 결과를 알려준다.
pub fn handle_toggle<E: PropertyEngine>(session: &mut Session<E>, to: UnitSystem) {
    let report = session.set_unit_system(to);
    println!(
        "단위 시스템이 {to} 로 설정되었습니다. (환산 {}칸, 건너뜀 {}칸)",
        report.converted, report.skipped
    );
}

fn unit_hint(property: PropertyType, system: UnitSystem) -> &'static str {
    crate::conversion::unit_label(property.kind(), system)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `EndOfInput`.
fn read_line(input: &mut impl BufRead, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::EndOfInput);
    }
    Ok(buf)
}

fn read_property(input: &mut impl BufRead, prompt: &str) -> Result<PropertyType, AppError> {
    loop {
        let s = read_line(input, prompt)?;
        match s.trim().parse::<PropertyType>() {
            Ok(p) => return Ok(p),
            Err(e) => println!("{e}"),
        }
    }
}
