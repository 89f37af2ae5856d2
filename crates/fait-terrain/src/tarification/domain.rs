use serde::{Deserialize, Serialize};

/// Whole amount in Ariary. Notices never carry fractional currency units.
pub type Ariary = u64;

/// Legal constructibility of the parcel. Only constructible parcels owe the redevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneConstructibility {
    Constructible,
    Inconstructible,
}

impl ZoneConstructibility {
    pub fn label(&self) -> &'static str {
        match self {
            ZoneConstructibility::Constructible => "constructible",
            ZoneConstructibility::Inconstructible => "inconstructible",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "constructible" => Some(Self::Constructible),
            "inconstructible" => Some(Self::Inconstructible),
            _ => None,
        }
    }
}

/// Attraction category derived from the declared destination of the works.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttractionCategory {
    /// Habitation.
    H,
    /// Industriel.
    I,
    /// Commercial.
    C,
}

impl AttractionCategory {
    /// The rate table only distinguishes habitation from everything else.
    pub(crate) fn rate_column(&self) -> RateColumn {
        match self {
            AttractionCategory::H => RateColumn::Residential,
            AttractionCategory::I | AttractionCategory::C => RateColumn::NonResidential,
        }
    }
}

/// Administrative zone of the parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeographicZone {
    #[serde(rename = "CUA")]
    Cua,
    #[serde(rename = "peripherie")]
    Peripherie,
}

impl GeographicZone {
    pub fn label(&self) -> &'static str {
        match self {
            GeographicZone::Cua => "CUA",
            GeographicZone::Peripherie => "peripherie",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "cua" => Some(Self::Cua),
            "peripherie" | "périphérie" => Some(Self::Peripherie),
            _ => None,
        }
    }
}

/// Surface tiers used by the tariff table.
///
/// `ExactlyHundred` is its own tier even though its rates currently match the
/// intermediate band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaBand {
    BelowHundred,
    ExactlyHundred,
    Intermediate,
    Large,
}

impl AreaBand {
    pub const ALL: [AreaBand; 4] = [
        AreaBand::BelowHundred,
        AreaBand::ExactlyHundred,
        AreaBand::Intermediate,
        AreaBand::Large,
    ];

    /// Negative areas land in `BelowHundred`; NaN fails every comparison and lands in `Large`.
    pub fn classify(area: f64) -> Self {
        if area < 100.0 {
            AreaBand::BelowHundred
        } else if area == 100.0 {
            AreaBand::ExactlyHundred
        } else if area > 100.0 && area < 2000.0 {
            AreaBand::Intermediate
        } else {
            AreaBand::Large
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            AreaBand::BelowHundred => 0,
            AreaBand::ExactlyHundred => 1,
            AreaBand::Intermediate => 2,
            AreaBand::Large => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RateColumn {
    Residential,
    NonResidential,
}

impl RateColumn {
    pub(crate) fn index(&self) -> usize {
        match self {
            RateColumn::Residential => 0,
            RateColumn::NonResidential => 1,
        }
    }
}

/// Fee (redevance) and fine (amende) rates selected for a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffResult {
    pub fee: Ariary,
    pub fine: Ariary,
    pub fee_applies: bool,
}

impl TariffResult {
    pub fn total(&self) -> Ariary {
        self.fee + self.fine
    }
}

/// Which part of the assessment the payment notice collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentBasis {
    Fine,
    Total,
}

impl PaymentBasis {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentBasis::Fine => "Amende seule",
            PaymentBasis::Total => "Redevance et amende",
        }
    }
}
