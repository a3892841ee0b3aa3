use std::io::BufRead;
use std::path::Path;

use crate::config::{self, Config, ConfigError, UnitSystem};
use crate::conversion;
use crate::quantity::{ParsePropertyError, PropertyType};
use crate::rebase::REBASE_DECIMALS;
use crate::report;
use crate::session::{CalculateError, Session, SlotId, SlotPosition};
use crate::steam::{If97Engine, StateIndex};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("물성치 입력 오류: {0}")]
    Property(#[from] ParsePropertyError),
    #[error("입력 형식 오류: {0} (예: P=1.0)")]
    Assignment(String),
    #[error("증기 상태 계산 오류: {0}")]
    Calculate(#[from] CalculateError),
    #[error("입력이 끝났습니다.")]
    EndOfInput,
}

/// `P=1.0` 형식의 입력을 (물성치 기호, 원문 값)으로 나눈다.
pub fn parse_assignment(text: &str) -> Result<(PropertyType, String), AppError> {
    let (symbol, raw) = text
        .split_once('=')
        .ok_or_else(|| AppError::Assignment(text.to_string()))?;
    Ok((symbol.parse()?, raw.trim().to_string()))
}

/// 상태 하나에 해당하는 두 입력을 세션에 기록한다.
pub fn apply_state_inputs(
    session: &mut Session<If97Engine>,
    state: StateIndex,
    inputs: &[String],
) -> Result<(), AppError> {
    if inputs.len() != 2 {
        return Err(AppError::Assignment(format!(
            "{state}에는 물성치 두 개가 필요합니다 (입력 {}개)",
            inputs.len()
        )));
    }
    for (position, text) in SlotPosition::ALL.into_iter().zip(inputs) {
        let (property, raw) = parse_assignment(text)?;
        session.set_slot(SlotId::new(state, position), property, raw);
    }
    Ok(())
}

/// `SYM=VALUE` 하나를 다른 단위 시스템으로 옮긴다.
/// 모르는 기호는 항등 변환하고, 숫자가 아닌 값은 그대로 둔다.
pub fn convert_assignment(text: &str, from: UnitSystem, to: UnitSystem) -> Result<String, AppError> {
    let (symbol, raw) = text
        .split_once('=')
        .ok_or_else(|| AppError::Assignment(text.to_string()))?;
    let (symbol, raw) = (symbol.trim(), raw.trim());
    Ok(match raw.parse::<f64>() {
        Ok(value) => {
            let converted = conversion::convert_symbol(symbol, value, from, to);
            format!("{symbol}={converted:.REBASE_DECIMALS$}")
        }
        Err(_) => format!("{symbol}={raw}"),
    })
}

/// 한 번 계산하고 결과를 출력한다.
pub fn compare_once(session: &mut Session<If97Engine>) -> Result<report::Report, AppError> {
    let system = session.unit_system();
    let comparison = session.calculate()?;
    Ok(report::render(comparison, system))
}

/// CLI 대화형 세션의 메인 루프를 실행한다. 입력이 끝나거나 종료를 고르면
/// 단위 시스템을 설정 파일에 저장한다.
pub fn run(config: &mut Config, config_path: &Path, input: &mut impl BufRead) -> Result<(), AppError> {
    let mut session = Session::new(If97Engine::new(), config.unit_system);
    loop {
        match step(&mut session, input) {
            Ok(true) => {}
            Ok(false) | Err(AppError::EndOfInput) => break,
            Err(err) => return Err(err),
        }
    }
    config.unit_system = session.unit_system();
    config.save(config_path)?;
    println!("프로그램을 종료합니다.");
    Ok(())
}

/// 메뉴 한 번을 처리한다. 종료를 고르면 `false`.
fn step(session: &mut Session<If97Engine>, input: &mut impl BufRead) -> Result<bool, AppError> {
    match ui_cli::main_menu(session, input)? {
        MenuChoice::EditState(state) => ui_cli::handle_edit_state(session, state, input)?,
        MenuChoice::ToggleUnits => {
            let to = session.unit_system().toggled();
            ui_cli::handle_toggle(session, to);
        }
        MenuChoice::Calculate => {
            // 계산 실패는 메시지로만 보여주고 세션은 계속된다.
            match compare_once(session) {
                Ok(report) => print!("{report}"),
                Err(err) => println!("오류: {err}"),
            }
        }
        MenuChoice::Exit => return Ok(false),
    }
    Ok(true)
}

/// 설정 파일을 읽고 명령줄 단위 지정이 있으면 우선한다.
pub fn load_config(path: &Path, units: Option<UnitSystem>) -> Result<Config, AppError> {
    let mut cfg = config::load_or_default(path)?;
    if let Some(units) = units {
        cfg.unit_system = units;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_splits_symbol_and_value() {
        let (prop, raw) = parse_assignment("T= 100.5").expect("parse");
        assert_eq!(prop, PropertyType::Temperature);
        assert_eq!(raw, "100.5");
    }

    #[test]
    fn assignment_without_equals_is_rejected() {
        assert!(matches!(
            parse_assignment("P1.0"),
            Err(AppError::Assignment(_))
        ));
        assert!(matches!(
            parse_assignment("rho=1.0"),
            Err(AppError::Property(_))
        ));
    }

    #[test]
    fn convert_uses_identity_for_unknown_symbols() {
        let si = UnitSystem::SI;
        let en = UnitSystem::English;
        assert_eq!(convert_assignment("P=1", si, en).expect("P"), "P=14.504");
        assert_eq!(convert_assignment("T = 212", en, si).expect("T"), "T=100.000");
        assert_eq!(convert_assignment("rho=998.2", si, en).expect("rho"), "rho=998.200");
        assert_eq!(convert_assignment("h=abc", si, en).expect("h"), "h=abc");
        assert!(matches!(
            convert_assignment("P", si, en),
            Err(AppError::Assignment(_))
        ));
    }

    #[test]
    fn interactive_run_ends_with_input_and_saves_units() {
        let dir = std::env::temp_dir().join(format!("dual_state_run_{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("tmp dir");
        let path = dir.join(config::CONFIG_FILE);
        let mut cfg = Config::default();

        // 단위 전환 후 종료 선택 없이 입력이 끝난다.
        let mut input = "3\n".as_bytes();
        run(&mut cfg, &path, &mut input).expect("run");
        assert_eq!(cfg.unit_system, UnitSystem::English);
        assert_eq!(config::load_or_default(&path).expect("saved").unit_system, UnitSystem::English);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn state_needs_exactly_two_inputs() {
        let mut session = Session::new(If97Engine::new(), UnitSystem::SI);
        let err = apply_state_inputs(&mut session, StateIndex::First, &["P=1".to_string()]);
        assert!(matches!(err, Err(AppError::Assignment(_))));
    }
}
