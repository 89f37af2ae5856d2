use serde::{Deserialize, Serialize};

use super::domain::{
    AreaBand, Ariary, AttractionCategory, GeographicZone, PaymentBasis, TariffResult,
    ZoneConstructibility,
};
use super::engine::{compute_tariff, select_payment_basis};
use super::words::amount_to_french_words;

/// Amounts owed for a case once the per-square-metre rates are applied to its surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub zone: ZoneConstructibility,
    pub category: AttractionCategory,
    pub geo_zone: GeographicZone,
    pub area: f64,
    pub band: AreaBand,
    pub rates: TariffResult,
    pub fee_amount: Ariary,
    pub fine_amount: Ariary,
    pub basis: PaymentBasis,
    pub amount_due: Ariary,
    pub amount_in_words: String,
}

impl Assessment {
    pub fn compute(
        zone: ZoneConstructibility,
        category: AttractionCategory,
        area: f64,
        geo_zone: GeographicZone,
    ) -> Self {
        let rates = compute_tariff(zone, category, area, geo_zone);
        let basis = select_payment_basis(zone);
        let fee_amount = apply_rate(rates.fee, area);
        let fine_amount = apply_rate(rates.fine, area);
        let amount_due = match basis {
            PaymentBasis::Fine => fine_amount,
            PaymentBasis::Total => fee_amount.saturating_add(fine_amount),
        };

        Self {
            zone,
            category,
            geo_zone,
            area,
            band: AreaBand::classify(area),
            rates,
            fee_amount,
            fine_amount,
            basis,
            amount_due,
            amount_in_words: amount_to_french_words(amount_due),
        }
    }
}

/// Truncates toward zero; `as` saturates negative and NaN products to 0 and huge ones to `u64::MAX`.
fn apply_rate(rate: Ariary, area: f64) -> Ariary {
    (rate as f64 * area).trunc() as Ariary
}
