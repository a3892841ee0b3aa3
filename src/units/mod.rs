//! 영국식/SI 단위 변환 법칙 모음.
//!
//! 각 물리량 모듈은 영국식 값을 SI 내부 기준으로 옮기는 법칙(`LAW`)과 표시용 단위 기호를 정의한다.

pub mod pressure;
pub mod specific_energy;
pub mod specific_entropy;
pub mod specific_volume;
pub mod temperature;

/// 영국식 → SI 변환 규칙. 역변환은 같은 규칙에서 유도한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConversionLaw {
    /// `si = english * si_per_english`
    Scale { si_per_english: f64 },
    /// `si = (english - offset) * scale`. 원점을 지나지 않는 변환(온도).
    Affine { scale: f64, offset: f64 },
    /// 단위가 없는 값
    Identity,
}

impl ConversionLaw {
    /// 영국식 값을 SI 값으로 변환한다.
    pub fn to_si(self, english: f64) -> f64 {
        match self {
            ConversionLaw::Scale { si_per_english } => english * si_per_english,
            ConversionLaw::Affine { scale, offset } => (english - offset) * scale,
            ConversionLaw::Identity => english,
        }
    }

    /// SI 값을 영국식 값으로 변환한다.
    pub fn to_english(self, si: f64) -> f64 {
        match self {
            ConversionLaw::Scale { si_per_english } => si / si_per_english,
            ConversionLaw::Affine { scale, offset } => si / scale + offset,
            ConversionLaw::Identity => si,
        }
    }

    /// 차이값(Δ)에 적용할 규칙. 오프셋은 차이에서 상쇄되므로 배율만 남긴다.
    pub fn difference(self) -> ConversionLaw {
        match self {
            ConversionLaw::Affine { scale, .. } => ConversionLaw::Scale {
                si_per_english: scale,
            },
            other => other,
        }
    }
}
