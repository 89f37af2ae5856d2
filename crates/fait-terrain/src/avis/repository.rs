use serde::{Deserialize, Serialize};

use super::domain::{ApReference, NoticeStatus};
use super::notice::{AvisDePaiement, NoticeSummary};

/// Storage abstraction so the notice service can be exercised in isolation.
pub trait NoticeRepository: Send + Sync {
    fn insert(&self, notice: AvisDePaiement) -> Result<AvisDePaiement, RepositoryError>;
    /// Runs `change` against the stored notice while no other writer can touch it.
    /// The notice is written back only when `change` returns `Ok`.
    fn modify<T, E, F>(&self, reference: &ApReference, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut AvisDePaiement) -> Result<T, E>,
        E: From<RepositoryError>;
    fn fetch(&self, reference: &ApReference) -> Result<Option<AvisDePaiement>, RepositoryError>;
    /// Every stored notice ordered by reference.
    fn all(&self) -> Result<Vec<AvisDePaiement>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Listing filters offered by the notice table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NoticeFilter {
    #[serde(default)]
    pub status: Option<NoticeStatus>,
    #[serde(default)]
    pub commune: Option<String>,
    /// Case-insensitive substring of the offender's name.
    #[serde(default)]
    pub contrevenant: Option<String>,
}

impl NoticeFilter {
    pub fn matches(&self, notice: &AvisDePaiement) -> bool {
        if let Some(status) = self.status {
            if notice.status != status {
                return false;
            }
        }

        if let Some(commune) = self.commune.as_deref().filter(|value| !value.trim().is_empty()) {
            if !notice.commune.trim().eq_ignore_ascii_case(commune.trim()) {
                return false;
            }
        }

        if let Some(needle) = self
            .contrevenant
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
        {
            if !notice
                .contrevenant
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        true
    }
}

pub const DEFAULT_PER_PAGE: usize = 20;
pub const MAX_PER_PAGE: usize = 100;

/// One-based page selection; out-of-range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn first_page() -> usize {
    1
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: first_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticePage {
    pub items: Vec<NoticeSummary>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
}

impl NoticePage {
    pub fn paginate(notices: &[AvisDePaiement], filter: &NoticeFilter, page: PageRequest) -> Self {
        let page = page.normalized();
        let matching: Vec<&AvisDePaiement> =
            notices.iter().filter(|notice| filter.matches(notice)).collect();
        let total = matching.len();
        let items = matching
            .into_iter()
            .skip(page.offset())
            .take(page.per_page)
            .map(AvisDePaiement::summary)
            .collect();

        Self {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        }
    }
}
