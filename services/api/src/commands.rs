use crate::infra::{parse_area, parse_date, parse_geo_zone, parse_zone, InMemoryNoticeRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use fait_terrain::avis::{AvisDePaiement, AvisDePaiementService, MiseEnDemeure};
use fait_terrain::config::AppConfig;
use fait_terrain::error::AppError;
use fait_terrain::import::FtCaseImporter;
use fait_terrain::tarification::{
    amount_to_french_words, map_destination_to_category, Ariary, Assessment, GeographicZone,
    ZoneConstructibility,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct TariffArgs {
    /// Parcel constructibility (constructible | inconstructible)
    #[arg(long, value_parser = parse_zone)]
    pub(crate) zone: ZoneConstructibility,
    /// Declared destination as written in the register (INDUSTRIEL, COMMERCIAL, ...)
    #[arg(long, default_value = "")]
    pub(crate) destination: String,
    /// Surface in square metres
    #[arg(long, value_parser = parse_area)]
    pub(crate) area: f64,
    /// Geographic zone (CUA | peripherie)
    #[arg(long, value_parser = parse_geo_zone)]
    pub(crate) geo_zone: GeographicZone,
}

#[derive(Args, Debug)]
pub(crate) struct WordsArgs {
    /// Amount in Ariary
    pub(crate) amount: Ariary,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// FT register CSV export
    pub(crate) csv: PathBuf,
    /// Issue date for the generated notices (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) issued_on: Option<NaiveDate>,
    /// Date used to check for overdue notices (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_tariff(args: TariffArgs) -> Result<(), AppError> {
    let TariffArgs {
        zone,
        destination,
        area,
        geo_zone,
    } = args;

    let category = map_destination_to_category(&destination);
    let assessment = Assessment::compute(zone, category, area, geo_zone);
    println!("{}", render_assessment(&assessment));
    Ok(())
}

pub(crate) fn run_words(args: WordsArgs) -> Result<(), AppError> {
    println!("{}", amount_to_french_words(args.amount));
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let ImportArgs {
        csv,
        issued_on,
        today,
    } = args;

    let config = AppConfig::load()?;
    let current = Local::now().date_naive();
    let issued_on = issued_on.unwrap_or(current);
    let today = today.unwrap_or(current);

    let cases = FtCaseImporter::from_path(&csv)?;
    let service = AvisDePaiementService::new(
        Arc::new(InMemoryNoticeRepository::default()),
        config.notices,
    );

    println!("FT register import: {} case(s) from {}", cases.len(), csv.display());

    let mut notices = Vec::with_capacity(cases.len());
    for case in &cases {
        notices.push(service.issue(case, issued_on)?);
    }
    for notice in &notices {
        println!("\n{}", render_notice(notice));
    }

    let letters = service.escalate_overdue(today)?;
    if letters.is_empty() {
        println!("\nMises en demeure at {today}: none");
    } else {
        println!("\nMises en demeure at {today}");
        for letter in &letters {
            println!("{}", render_formal_notice(letter));
        }
    }

    Ok(())
}

fn render_assessment(assessment: &Assessment) -> String {
    let mut lines = vec![
        format!(
            "Zone: {} / {} / catégorie {:?}",
            assessment.zone.label(),
            assessment.geo_zone.label(),
            assessment.category
        ),
        format!("Superficie: {} m² ({:?})", assessment.area, assessment.band),
    ];

    if assessment.rates.fee_applies {
        lines.push(format!(
            "Redevance: {} Ar/m² -> {} Ar",
            assessment.rates.fee, assessment.fee_amount
        ));
    } else {
        lines.push("Redevance: non applicable".to_string());
    }
    lines.push(format!(
        "Amende: {} Ar/m² -> {} Ar",
        assessment.rates.fine, assessment.fine_amount
    ));
    lines.push(format!(
        "Montant à payer ({}): {} Ar",
        assessment.basis.label(),
        assessment.amount_due
    ));
    lines.push(format!("Arrêté à la somme de: {}", assessment.amount_in_words));

    lines.join("\n")
}

fn render_notice(notice: &AvisDePaiement) -> String {
    format!(
        "Avis {} | FT {} | {} ({}) | émis {} | échéance {} | {}\n{}",
        notice.reference,
        notice.ft_reference,
        notice.contrevenant,
        notice.commune,
        notice.issued_on,
        notice.due_on,
        notice.status.label(),
        render_assessment(&notice.assessment)
    )
}

fn render_formal_notice(letter: &MiseEnDemeure) -> String {
    format!(
        "- {} (FT {}), {}: {} jour(s) de retard, {}",
        letter.ap_reference,
        letter.ft_reference,
        letter.contrevenant,
        letter.days_overdue,
        letter.amount_in_words
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fait_terrain::tarification::AttractionCategory;

    #[test]
    fn assessment_rendering_omits_fee_when_not_applicable() {
        let assessment = Assessment::compute(
            ZoneConstructibility::Inconstructible,
            AttractionCategory::H,
            10.0,
            GeographicZone::Cua,
        );

        let rendered = render_assessment(&assessment);

        assert!(rendered.contains("Redevance: non applicable"));
        assert!(rendered.contains("Montant à payer (Amende seule): 125000 Ar"));
        assert!(rendered.contains("CENT VINGT-CINQ MILLE ARIARY"));
    }
}
