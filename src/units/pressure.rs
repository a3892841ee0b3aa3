use super::ConversionLaw;

/// 1 psi 에 해당하는 bar. 압력은 항상 절대압으로 다룬다.
pub const BAR_PER_PSI: f64 = 0.0689476;

pub const LAW: ConversionLaw = ConversionLaw::Scale {
    si_per_english: BAR_PER_PSI,
};

pub const SI_LABEL: &str = "bar";
pub const ENGLISH_LABEL: &str = "psi";
