use super::ConversionLaw;

/// 1 BTU/(lb·°F) 에 해당하는 kJ/(kg·K). 비에너지 배율과 독립된 상수.
pub const KJ_PER_KG_K_PER_BTU_PER_LB_F: f64 = 4.1868;

pub const LAW: ConversionLaw = ConversionLaw::Scale {
    si_per_english: KJ_PER_KG_K_PER_BTU_PER_LB_F,
};

pub const SI_LABEL: &str = "kJ/(kg·K)";
pub const ENGLISH_LABEL: &str = "BTU/(lb·°F)";
