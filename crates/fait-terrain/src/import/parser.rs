use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::FtImportError;
use crate::avis::{FaitTerrain, FtReference};
use crate::tarification::{validate_area, GeographicZone, ZoneConstructibility};

pub(crate) fn parse_cases<R: Read>(reader: R) -> Result<Vec<FaitTerrain>, FtImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut cases = Vec::new();

    for (index, record) in csv_reader.deserialize::<FtRow>().enumerate() {
        let row = record?;
        // Header is line 1.
        let line = index + 2;
        cases.push(row.into_case().map_err(|reason| FtImportError::InvalidRow { line, reason })?);
    }

    Ok(cases)
}

#[derive(Debug, Deserialize)]
struct FtRow {
    #[serde(rename = "Reference")]
    reference: String,
    #[serde(rename = "Contrevenant", default)]
    contrevenant: String,
    #[serde(rename = "Commune", default)]
    commune: String,
    #[serde(rename = "Destination", default)]
    destination: String,
    #[serde(rename = "Zone")]
    zone: String,
    #[serde(rename = "Zone Geographique")]
    geo_zone: String,
    #[serde(rename = "Superficie")]
    area: String,
    #[serde(
        rename = "Date Constat",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    inspected_on: Option<String>,
}

impl FtRow {
    fn into_case(self) -> Result<FaitTerrain, String> {
        if self.reference.is_empty() {
            return Err("missing FT reference".to_string());
        }

        let zone = ZoneConstructibility::parse(&self.zone)
            .ok_or_else(|| format!("unknown zone '{}'", self.zone))?;
        let geo_zone = GeographicZone::parse(&self.geo_zone)
            .ok_or_else(|| format!("unknown geographic zone '{}'", self.geo_zone))?;
        let area = parse_area(&self.area)
            .ok_or_else(|| format!("invalid surface '{}'", self.area))?;
        validate_area(area).map_err(|err| err.to_string())?;
        let inspected_on = self
            .inspected_on
            .as_deref()
            .ok_or_else(|| "missing inspection date".to_string())
            .and_then(|raw| parse_date(raw).ok_or_else(|| format!("invalid date '{raw}'")))?;

        Ok(FaitTerrain {
            reference: FtReference(self.reference),
            contrevenant: self.contrevenant,
            commune: self.commune,
            destination: self.destination,
            zone,
            geo_zone,
            area,
            inspected_on,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Registers are typed with either a decimal point or a decimal comma.
fn parse_area(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(' ', "").replace(',', ".");
    normalized.parse::<f64>().ok().filter(|area| area.is_finite())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_accepts_decimal_comma() {
        assert_eq!(parse_area("762,5"), Some(762.5));
        assert_eq!(parse_area(" 1 250 "), Some(1250.0));
        assert_eq!(parse_area("abc"), None);
        assert_eq!(parse_area("inf"), None);
    }

    #[test]
    fn dates_accept_iso_and_french_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 14);
        assert_eq!(parse_date("2025-03-14"), expected);
        assert_eq!(parse_date("14/03/2025"), expected);
        assert_eq!(parse_date("03-14-2025"), None);
    }
}
