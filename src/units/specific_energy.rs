use super::ConversionLaw;

/// 1 BTU/lb 에 해당하는 kJ/kg. 비엔탈피와 비내부에너지가 공유한다.
pub const KJ_PER_KG_PER_BTU_PER_LB: f64 = 2.326;

pub const LAW: ConversionLaw = ConversionLaw::Scale {
    si_per_english: KJ_PER_KG_PER_BTU_PER_LB,
};

pub const SI_LABEL: &str = "kJ/kg";
pub const ENGLISH_LABEL: &str = "BTU/lb";
