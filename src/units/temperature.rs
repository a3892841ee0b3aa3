use super::ConversionLaw;

/// °C = (°F − 32) × 5/9
pub const LAW: ConversionLaw = ConversionLaw::Affine {
    scale: 5.0 / 9.0,
    offset: 32.0,
};

pub const SI_LABEL: &str = "°C";
pub const ENGLISH_LABEL: &str = "°F";

/// 화씨를 섭씨로 변환한다.
pub fn fahrenheit_to_celsius(value_f: f64) -> f64 {
    LAW.to_si(value_f)
}

/// 섭씨를 화씨로 변환한다.
pub fn celsius_to_fahrenheit(value_c: f64) -> f64 {
    LAW.to_english(value_c)
}
