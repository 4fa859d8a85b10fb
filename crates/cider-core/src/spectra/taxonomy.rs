use serde::{Deserialize, Serialize};
use std::fmt;

/// The 10 transient classes the model predicts, in output-head order.
///
/// The order of `ALL` matches the model's logit layout; reordering it would
/// silently mislabel every classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransientClass {
    #[serde(rename = "AGN")]
    Agn,
    #[serde(rename = "Cataclysmic")]
    Cataclysmic,
    #[serde(rename = "II")]
    TypeII,
    #[serde(rename = "IIP")]
    TypeIIP,
    #[serde(rename = "IIb")]
    TypeIIb,
    #[serde(rename = "IIn")]
    TypeIIn,
    #[serde(rename = "Ia")]
    TypeIa,
    #[serde(rename = "Ib")]
    TypeIb,
    #[serde(rename = "Ic")]
    TypeIc,
    #[serde(rename = "Tidal Disruption Event")]
    TidalDisruptionEvent,
}

impl TransientClass {
    /// Number of classes in the model head.
    pub const COUNT: usize = 10;

    /// All variants in model output order.
    pub const ALL: [TransientClass; 10] = [
        Self::Agn,
        Self::Cataclysmic,
        Self::TypeII,
        Self::TypeIIP,
        Self::TypeIIb,
        Self::TypeIIn,
        Self::TypeIa,
        Self::TypeIb,
        Self::TypeIc,
        Self::TidalDisruptionEvent,
    ];

    /// Display label, matching the model's training labels.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Agn => "AGN",
            Self::Cataclysmic => "Cataclysmic",
            Self::TypeII => "II",
            Self::TypeIIP => "IIP",
            Self::TypeIIb => "IIb",
            Self::TypeIIn => "IIn",
            Self::TypeIa => "Ia",
            Self::TypeIb => "Ib",
            Self::TypeIc => "Ic",
            Self::TidalDisruptionEvent => "Tidal Disruption Event",
        }
    }

    /// Whether this class is a supernova subtype.
    pub fn is_supernova(&self) -> bool {
        matches!(
            self,
            Self::TypeII
                | Self::TypeIIP
                | Self::TypeIIb
                | Self::TypeIIn
                | Self::TypeIa
                | Self::TypeIb
                | Self::TypeIc
        )
    }
}

impl fmt::Display for TransientClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
