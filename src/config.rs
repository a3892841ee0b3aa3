use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// 기본 설정 파일 이름.
pub const CONFIG_FILE: &str = "config.toml";

/// 입력 해석과 결과 표시에 쓰는 단위 시스템.
///
/// SI: bar(abs), °C, kJ/kg, kJ/(kg·K), m³/kg.
/// 영국식: psi(abs), °F, BTU/lb, BTU/(lb·°F), ft³/lb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UnitSystem {
    /// 내부 계산 기준.
    #[default]
    SI,
    English,
}

impl UnitSystem {
    /// 반대쪽 단위 시스템.
    pub fn toggled(self) -> Self {
        match self {
            UnitSystem::SI => UnitSystem::English,
            UnitSystem::English => UnitSystem::SI,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UnitSystem::SI => "SI",
            UnitSystem::English => "English",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 시 단위 시스템
    pub unit_system: UnitSystem,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), ?cfg, "설정 로드");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일 생성");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
