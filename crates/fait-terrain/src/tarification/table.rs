use super::domain::{AreaBand, Ariary, GeographicZone, RateColumn};

/// `(redevance, amende)` per square metre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rate {
    pub(crate) fee: Ariary,
    pub(crate) fine: Ariary,
}

const fn rate(fee: Ariary, fine: Ariary) -> Rate {
    Rate { fee, fine }
}

/// Indexed `[band][column]`, columns ordered residential then non-residential.
type ZoneRates = [[Rate; 2]; 4];

const CUA_RATES: ZoneRates = [
    [rate(6_250, 12_500), rate(12_500, 25_000)],
    [rate(12_500, 25_000), rate(18_750, 37_500)],
    [rate(12_500, 25_000), rate(18_750, 37_500)],
    [rate(12_500, 25_000), rate(25_000, 50_000)],
];

const PERIPHERIE_RATES: ZoneRates = [
    [rate(3_125, 6_250), rate(6_250, 12_500)],
    [rate(6_250, 12_500), rate(9_375, 18_750)],
    [rate(6_250, 12_500), rate(9_375, 18_750)],
    [rate(6_250, 12_500), rate(12_500, 25_000)],
];

pub(crate) fn lookup(geo_zone: GeographicZone, band: AreaBand, column: RateColumn) -> Rate {
    let table = match geo_zone {
        GeographicZone::Cua => &CUA_RATES,
        GeographicZone::Peripherie => &PERIPHERIE_RATES,
    };
    table[band.index()][column.index()]
}
