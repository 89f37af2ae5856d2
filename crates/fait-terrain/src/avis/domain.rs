use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::tarification::{
    map_destination_to_category, Ariary, Assessment, AttractionCategory, GeographicZone,
    ZoneConstructibility,
};

/// Identifier of a field-inspection case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FtReference(pub String);

/// Identifier of an issued payment notice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApReference(pub String);

impl std::fmt::Display for FtReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for ApReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Land-use infraction recorded during a field inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaitTerrain {
    pub reference: FtReference,
    pub contrevenant: String,
    pub commune: String,
    /// Free-text destination as typed in the register (`INDUSTRIEL`, `COMMERCIAL`, ...).
    pub destination: String,
    pub zone: ZoneConstructibility,
    pub geo_zone: GeographicZone,
    /// Surface in square metres.
    pub area: f64,
    pub inspected_on: NaiveDate,
}

impl FaitTerrain {
    pub fn category(&self) -> AttractionCategory {
        map_destination_to_category(&self.destination)
    }

    pub fn assessment(&self) -> Assessment {
        Assessment::compute(self.zone, self.category(), self.area, self.geo_zone)
    }
}

/// Lifecycle of an avis de paiement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeStatus {
    Pending,
    Paid,
    FormalNotice,
}

impl NoticeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NoticeStatus::Pending => "En attente",
            NoticeStatus::Paid => "Payé",
            NoticeStatus::FormalNotice => "Mise en demeure",
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, NoticeStatus::Paid)
    }
}

/// Settlement recorded against a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub amount: Ariary,
    pub paid_on: NaiveDate,
    #[serde(default)]
    pub receipt: Option<String>,
}

/// Formal notice letter sent once an avis is left unpaid past its due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiseEnDemeure {
    pub ap_reference: ApReference,
    pub ft_reference: FtReference,
    pub contrevenant: String,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
    pub amount_due: Ariary,
    pub amount_in_words: String,
    pub days_overdue: i64,
}
