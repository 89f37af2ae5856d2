//! Tariff rules for Fait Terrain cases and the amount-in-words rendering used on notices.
//!
//! Everything here is pure: rates come from a fixed legal table keyed by geographic zone,
//! surface band, and a habitation / non-habitation split of the attraction category.

mod assessment;
pub mod domain;
mod engine;
pub mod router;
mod table;
mod words;

pub use assessment::Assessment;
pub use domain::{
    AreaBand, Ariary, AttractionCategory, GeographicZone, PaymentBasis, TariffResult,
    ZoneConstructibility,
};
pub use engine::{compute_tariff, map_destination_to_category, select_payment_basis};
pub use router::{tariff_router, validate_area, InvalidArea, TariffRequest, MAX_AREA};
pub use words::amount_to_french_words;
