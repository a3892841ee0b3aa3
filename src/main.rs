use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use dual_state_steam::{
    app::{self, AppError},
    config::{UnitSystem, CONFIG_FILE},
    session::Session,
    steam::{If97Engine, StateIndex},
};

/// 물/증기 두 상태의 물성치와 변화량을 계산한다.
#[derive(Debug, Parser)]
#[command(name = "dual_state_steam", version)]
struct Cli {
    /// 입력/출력 단위 시스템 (설정 파일보다 우선)
    #[arg(long, value_enum, global = true)]
    units: Option<UnitsArg>,
    /// 설정 파일 경로
    #[arg(long, default_value = CONFIG_FILE, global = true)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 메뉴 기반 대화형 세션 (기본)
    Interactive,
    /// 두 상태를 한 번 계산한다. 예: --state1 P=1 --state1 T=100 --state2 P=10 --state2 T=100
    Compare {
        #[arg(long = "state1", value_name = "PROP=VALUE", required = true)]
        state1: Vec<String>,
        #[arg(long = "state2", value_name = "PROP=VALUE", required = true)]
        state2: Vec<String>,
    },
    /// 입력값을 다른 단위 시스템으로 환산한다. 예: convert --to english P=1 T=100
    Convert {
        #[arg(long, value_enum)]
        to: UnitsArg,
        #[arg(value_name = "PROP=VALUE", required = true)]
        values: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum UnitsArg {
    Si,
    English,
}

impl From<UnitsArg> for UnitSystem {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Si => UnitSystem::SI,
            UnitsArg::English => UnitSystem::English,
        }
    }
}

/// 프로그램의 엔트리 포인트. 로깅과 설정을 준비한 뒤 명령을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dual_state_steam=warn")),
        )
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = app::load_config(&cli.config, cli.units.map(UnitSystem::from))?;
    match cli.command.unwrap_or(Command::Interactive) {
        Command::Interactive => app::run(&mut cfg, &cli.config, &mut std::io::stdin().lock()),
        Command::Compare { state1, state2 } => {
            let mut session = Session::new(If97Engine::new(), cfg.unit_system);
            app::apply_state_inputs(&mut session, StateIndex::First, &state1)?;
            app::apply_state_inputs(&mut session, StateIndex::Second, &state2)?;
            let report = app::compare_once(&mut session)?;
            print!("{report}");
            Ok(())
        }
        Command::Convert { to, values } => {
            let to = UnitSystem::from(to);
            for text in &values {
                println!("{}", app::convert_assignment(text, cfg.unit_system, to)?);
            }
            Ok(())
        }
    }
}
