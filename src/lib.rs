//! 물/증기 두 상태의 물성치 결정, 상태 간 변화량, SI/영국식 입력 환산을 제공한다.
//! 핵심 계산 로직은 라이브러리에 두고 CLI 는 얇은 입출력 계층으로 유지한다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod quantity;
pub mod rebase;
pub mod report;
pub mod session;
pub mod steam;
pub mod ui_cli;
pub mod units;
