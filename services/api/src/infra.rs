use chrono::NaiveDate;
use fait_terrain::avis::{ApReference, AvisDePaiement, NoticeRepository, RepositoryError};
use fait_terrain::tarification::{validate_area, GeographicZone, ZoneConstructibility};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local notice register; notices live as long as the server does.
#[derive(Default, Clone)]
pub(crate) struct InMemoryNoticeRepository {
    notices: Arc<Mutex<BTreeMap<ApReference, AvisDePaiement>>>,
}

impl InMemoryNoticeRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<ApReference, AvisDePaiement>>, RepositoryError>
    {
        self.notices
            .lock()
            .map_err(|_| RepositoryError::Unavailable("notice register lock poisoned".to_string()))
    }
}

impl NoticeRepository for InMemoryNoticeRepository {
    fn insert(&self, notice: AvisDePaiement) -> Result<AvisDePaiement, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&notice.reference) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(notice.reference.clone(), notice.clone());
        Ok(notice)
    }

    fn modify<T, E, F>(&self, reference: &ApReference, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut AvisDePaiement) -> Result<T, E>,
        E: From<RepositoryError>,
    {
        let mut guard = self.lock()?;
        let stored = guard.get_mut(reference).ok_or(RepositoryError::NotFound)?;
        let mut draft = stored.clone();
        let value = change(&mut draft)?;
        *stored = draft;
        Ok(value)
    }

    fn fetch(&self, reference: &ApReference) -> Result<Option<AvisDePaiement>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(reference).cloned())
    }

    fn all(&self) -> Result<Vec<AvisDePaiement>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.values().cloned().collect())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_zone(raw: &str) -> Result<ZoneConstructibility, String> {
    ZoneConstructibility::parse(raw)
        .ok_or_else(|| format!("'{raw}' is not one of constructible, inconstructible"))
}

pub(crate) fn parse_geo_zone(raw: &str) -> Result<GeographicZone, String> {
    GeographicZone::parse(raw).ok_or_else(|| format!("'{raw}' is not one of CUA, peripherie"))
}

pub(crate) fn parse_area(raw: &str) -> Result<f64, String> {
    let area = raw
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{raw}' as a surface in m² ({err})"))?;
    validate_area(area).map_err(|err| err.to_string())?;
    Ok(area)
}
