use std::fmt;
use std::str::FromStr;

/// 다루는 물리량 종류를 나타낸다. 단위 변환 법칙은 이 분류에 따라 정해진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuantityKind {
    Pressure,
    Temperature,
    /// 비엔탈피, 비내부에너지
    SpecificEnergy,
    SpecificEntropy,
    SpecificVolume,
    /// 무차원 비율(건도)
    Fraction,
}

/// 상태를 지정할 때 고를 수 있는 일곱 가지 물성치.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// P
    Pressure,
    /// T
    Temperature,
    /// h
    Enthalpy,
    /// s
    Entropy,
    /// u
    InternalEnergy,
    /// v
    SpecificVolume,
    /// x
    Quality,
}

impl PropertyType {
    /// 화면 표시 순서와 동일한 전체 목록.
    pub const ALL: [PropertyType; 7] = [
        PropertyType::Pressure,
        PropertyType::Temperature,
        PropertyType::Enthalpy,
        PropertyType::Entropy,
        PropertyType::InternalEnergy,
        PropertyType::SpecificVolume,
        PropertyType::Quality,
    ];

    /// 물성치가 속한 물리량 분류.
    pub fn kind(self) -> QuantityKind {
        match self {
            PropertyType::Pressure => QuantityKind::Pressure,
            PropertyType::Temperature => QuantityKind::Temperature,
            PropertyType::Enthalpy | PropertyType::InternalEnergy => QuantityKind::SpecificEnergy,
            PropertyType::Entropy => QuantityKind::SpecificEntropy,
            PropertyType::SpecificVolume => QuantityKind::SpecificVolume,
            PropertyType::Quality => QuantityKind::Fraction,
        }
    }

    /// 증기표에서 쓰는 한 글자 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PropertyType::Pressure => "P",
            PropertyType::Temperature => "T",
            PropertyType::Enthalpy => "h",
            PropertyType::Entropy => "s",
            PropertyType::InternalEnergy => "u",
            PropertyType::SpecificVolume => "v",
            PropertyType::Quality => "x",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 알 수 없는 물성치 기호.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 물성치 기호: {0} (P, T, h, s, u, v, x 중 선택)")]
pub struct ParsePropertyError(pub String);

impl FromStr for PropertyType {
    type Err = ParsePropertyError;

    /// 기호는 대소문자를 구분하지 않는다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "p" => Ok(PropertyType::Pressure),
            "t" => Ok(PropertyType::Temperature),
            "h" => Ok(PropertyType::Enthalpy),
            "s" => Ok(PropertyType::Entropy),
            "u" => Ok(PropertyType::InternalEnergy),
            "v" => Ok(PropertyType::SpecificVolume),
            "x" => Ok(PropertyType::Quality),
            _ => Err(ParsePropertyError(s.trim().to_string())),
        }
    }
}
