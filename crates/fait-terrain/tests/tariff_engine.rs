use fait_terrain::tarification::{
    amount_to_french_words, compute_tariff, map_destination_to_category, select_payment_basis,
    AreaBand, Assessment, AttractionCategory, GeographicZone, PaymentBasis, TariffResult,
    ZoneConstructibility,
};

const CATEGORIES: [AttractionCategory; 3] = [
    AttractionCategory::H,
    AttractionCategory::I,
    AttractionCategory::C,
];
const GEO_ZONES: [GeographicZone; 2] = [GeographicZone::Cua, GeographicZone::Peripherie];
const ZONES: [ZoneConstructibility; 2] = [
    ZoneConstructibility::Constructible,
    ZoneConstructibility::Inconstructible,
];
/// One representative surface per band, plus values hugging each boundary.
const AREAS: [f64; 9] = [0.0, 42.0, 99.999, 100.0, 100.001, 850.0, 1999.99, 2000.0, 12_000.0];

fn constructible(category: AttractionCategory, area: f64, geo: GeographicZone) -> TariffResult {
    compute_tariff(ZoneConstructibility::Constructible, category, area, geo)
}

#[test]
fn constructible_rates_match_the_legal_table() {
    // (geo, area, H fee, H fine, I/C fee, I/C fine)
    let table = [
        (GeographicZone::Cua, 50.0, 6_250, 12_500, 12_500, 25_000),
        (GeographicZone::Cua, 100.0, 12_500, 25_000, 18_750, 37_500),
        (GeographicZone::Cua, 500.0, 12_500, 25_000, 18_750, 37_500),
        (GeographicZone::Cua, 2000.0, 12_500, 25_000, 25_000, 50_000),
        (GeographicZone::Peripherie, 50.0, 3_125, 6_250, 6_250, 12_500),
        (GeographicZone::Peripherie, 100.0, 6_250, 12_500, 9_375, 18_750),
        (GeographicZone::Peripherie, 500.0, 6_250, 12_500, 9_375, 18_750),
        (GeographicZone::Peripherie, 2000.0, 6_250, 12_500, 12_500, 25_000),
    ];

    for (geo, area, h_fee, h_fine, other_fee, other_fine) in table {
        let residential = constructible(AttractionCategory::H, area, geo);
        assert_eq!(
            (residential.fee, residential.fine),
            (h_fee, h_fine),
            "H at {area} m² in {geo:?}"
        );
        assert!(residential.fee_applies);

        for category in [AttractionCategory::I, AttractionCategory::C] {
            let result = constructible(category, area, geo);
            assert_eq!(
                (result.fee, result.fine),
                (other_fee, other_fine),
                "{category:?} at {area} m² in {geo:?}"
            );
        }
    }
}

#[test]
fn urban_rates_are_double_peripheral_rates() {
    for category in CATEGORIES {
        for area in AREAS {
            let urban = constructible(category, area, GeographicZone::Cua);
            let peripheral = constructible(category, area, GeographicZone::Peripherie);
            assert_eq!(urban.fine, 2 * peripheral.fine, "{category:?} {area}");
            assert_eq!(urban.fee, 2 * peripheral.fee, "{category:?} {area}");
        }
    }
}

#[test]
fn inconstructible_suppresses_only_the_fee() {
    for category in CATEGORIES {
        for geo in GEO_ZONES {
            for area in AREAS {
                let result =
                    compute_tariff(ZoneConstructibility::Inconstructible, category, area, geo);
                assert_eq!(result.fee, 0);
                assert!(!result.fee_applies);
                assert_eq!(result.fine, constructible(category, area, geo).fine);
                assert_eq!(result.total(), result.fine);
            }
        }
    }
}

#[test]
fn industrial_and_commercial_are_indistinguishable() {
    for zone in ZONES {
        for geo in GEO_ZONES {
            for area in AREAS {
                assert_eq!(
                    compute_tariff(zone, AttractionCategory::I, area, geo),
                    compute_tariff(zone, AttractionCategory::C, area, geo)
                );
            }
        }
    }
}

#[test]
fn hundred_square_metres_is_its_own_band() {
    assert_eq!(AreaBand::classify(99.999), AreaBand::BelowHundred);
    assert_eq!(AreaBand::classify(100.0), AreaBand::ExactlyHundred);
    assert_eq!(AreaBand::classify(100.001), AreaBand::Intermediate);
    assert_eq!(AreaBand::classify(1999.99), AreaBand::Intermediate);
    assert_eq!(AreaBand::classify(2000.0), AreaBand::Large);

    let below = constructible(AttractionCategory::C, 99.999, GeographicZone::Cua);
    let at = constructible(AttractionCategory::C, 100.0, GeographicZone::Cua);
    let above = constructible(AttractionCategory::C, 100.001, GeographicZone::Cua);
    assert_eq!(below.fine, 25_000);
    assert_eq!(at.fine, 37_500);
    assert_eq!(above.fine, 37_500);
}

#[test]
fn payment_basis_follows_constructibility() {
    assert_eq!(
        select_payment_basis(ZoneConstructibility::Inconstructible),
        PaymentBasis::Fine
    );
    assert_eq!(
        select_payment_basis(ZoneConstructibility::Constructible),
        PaymentBasis::Total
    );
}

#[test]
fn unknown_destinations_default_to_habitation() {
    for destination in ["", "habitation", "Industriel", "commercial", "BUREAU", "INDUSTRIEL "] {
        assert_eq!(
            map_destination_to_category(destination),
            AttractionCategory::H,
            "{destination:?}"
        );
    }
}

#[test]
fn words_fixed_points() {
    assert_eq!(amount_to_french_words(0), "ZÉRO ARIARY");
    assert_eq!(amount_to_french_words(1000), "MILLE ARIARY");
    assert_eq!(amount_to_french_words(1_000_000), "UN MILLION ARIARY");
    assert_eq!(amount_to_french_words(70), "SOIXANTE-DIX ARIARY");
    assert_eq!(amount_to_french_words(95), "QUATRE-VINGT-QUINZE ARIARY");
    assert_eq!(amount_to_french_words(100), "CENT ARIARY");
    assert_eq!(amount_to_french_words(200), "DEUX CENTS ARIARY");
    assert_eq!(
        amount_to_french_words(2_001_001),
        "DEUX MILLIONS MILLE UN ARIARY"
    );
    assert_eq!(
        amount_to_french_words(380_250),
        "TROIS CENT QUATRE-VINGT MILLE DEUX CENT CINQUANTE ARIARY"
    );
}

#[test]
fn commercial_urban_case_end_to_end() {
    let category = map_destination_to_category("COMMERCIAL");
    let assessment = Assessment::compute(
        ZoneConstructibility::Constructible,
        category,
        762.0,
        GeographicZone::Cua,
    );

    assert_eq!(assessment.band, AreaBand::Intermediate);
    assert_eq!(assessment.fee_amount, 14_287_500);
    assert_eq!(assessment.fine_amount, 28_575_000);
    assert_eq!(assessment.amount_due, 42_862_500);
    assert_eq!(
        assessment.amount_in_words,
        "QUARANTE-DEUX MILLIONS HUIT CENT SOIXANTE-DEUX MILLE CINQ CENTS ARIARY"
    );
}
