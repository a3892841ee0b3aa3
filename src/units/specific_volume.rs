use super::ConversionLaw;

/// 1 ft³/lb 에 해당하는 m³/kg.
pub const M3_PER_KG_PER_FT3_PER_LB: f64 = 0.062428;

pub const LAW: ConversionLaw = ConversionLaw::Scale {
    si_per_english: M3_PER_KG_PER_FT3_PER_LB,
};

pub const SI_LABEL: &str = "m³/kg";
pub const ENGLISH_LABEL: &str = "ft³/lb";
