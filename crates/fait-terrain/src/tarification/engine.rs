use super::domain::{
    AreaBand, AttractionCategory, GeographicZone, PaymentBasis, TariffResult,
    ZoneConstructibility,
};
use super::table;

/// Selects the redevance and amende rates for a case.
///
/// The caller validates `area`; out-of-domain values still resolve to a tier.
pub fn compute_tariff(
    zone: ZoneConstructibility,
    category: AttractionCategory,
    area: f64,
    geo_zone: GeographicZone,
) -> TariffResult {
    let band = AreaBand::classify(area);
    let rate = table::lookup(geo_zone, band, category.rate_column());

    match zone {
        ZoneConstructibility::Constructible => TariffResult {
            fee: rate.fee,
            fine: rate.fine,
            fee_applies: true,
        },
        ZoneConstructibility::Inconstructible => TariffResult {
            fee: 0,
            fine: rate.fine,
            fee_applies: false,
        },
    }
}

pub fn select_payment_basis(zone: ZoneConstructibility) -> PaymentBasis {
    match zone {
        ZoneConstructibility::Inconstructible => PaymentBasis::Fine,
        ZoneConstructibility::Constructible => PaymentBasis::Total,
    }
}

/// Exact, case-sensitive match on the destination tokens used by the FT register.
pub fn map_destination_to_category(destination: &str) -> AttractionCategory {
    match destination {
        "INDUSTRIEL" => AttractionCategory::I,
        "COMMERCIAL" => AttractionCategory::C,
        _ => AttractionCategory::H,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inconstructible_keeps_the_fine_and_drops_the_fee() {
        let result = compute_tariff(
            ZoneConstructibility::Inconstructible,
            AttractionCategory::C,
            2500.0,
            GeographicZone::Cua,
        );
        assert_eq!(
            result,
            TariffResult {
                fee: 0,
                fine: 50_000,
                fee_applies: false
            }
        );
        assert_eq!(result.total(), 50_000);
    }

    #[test]
    fn negative_area_resolves_to_smallest_tier() {
        let result = compute_tariff(
            ZoneConstructibility::Constructible,
            AttractionCategory::H,
            -15.0,
            GeographicZone::Peripherie,
        );
        assert_eq!((result.fee, result.fine), (3_125, 6_250));
    }

    #[test]
    fn destination_mapping_is_case_sensitive() {
        assert_eq!(map_destination_to_category("INDUSTRIEL"), AttractionCategory::I);
        assert_eq!(map_destination_to_category("COMMERCIAL"), AttractionCategory::C);
        assert_eq!(map_destination_to_category("Industriel"), AttractionCategory::H);
        assert_eq!(map_destination_to_category(" COMMERCIAL"), AttractionCategory::H);
        assert_eq!(map_destination_to_category(""), AttractionCategory::H);
    }
}
