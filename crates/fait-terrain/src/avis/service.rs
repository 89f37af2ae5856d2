use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, warn};

use super::domain::{ApReference, FaitTerrain, MiseEnDemeure, Payment};
use super::notice::{AvisDePaiement, NoticeError};
use super::repository::{NoticeFilter, NoticePage, NoticeRepository, PageRequest, RepositoryError};
use crate::config::NoticeConfig;

/// Service issuing notices, recording payments, and escalating overdue cases.
pub struct AvisDePaiementService<R> {
    repository: Arc<R>,
    config: NoticeConfig,
    sequence: AtomicU64,
}

impl<R> AvisDePaiementService<R>
where
    R: NoticeRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: NoticeConfig) -> Self {
        Self {
            repository,
            config,
            sequence: AtomicU64::new(1),
        }
    }

    fn next_reference(&self) -> ApReference {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        ApReference(format!("AP-{id:06}"))
    }

    /// Issue a payment notice for an FT case.
    pub fn issue(
        &self,
        case: &FaitTerrain,
        issued_on: NaiveDate,
    ) -> Result<AvisDePaiement, NoticeServiceError> {
        let notice = AvisDePaiement::issue(
            self.next_reference(),
            case,
            issued_on,
            self.config.payment_delay_days,
        )?;

        let stored = self.repository.insert(notice)?;
        info!(
            reference = %stored.reference,
            ft = %stored.ft_reference,
            amount_due = stored.amount_due(),
            due_on = %stored.due_on,
            "avis de paiement issued"
        );
        Ok(stored)
    }

    pub fn get(&self, reference: &ApReference) -> Result<AvisDePaiement, NoticeServiceError> {
        let notice = self
            .repository
            .fetch(reference)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(notice)
    }

    pub fn record_payment(
        &self,
        reference: &ApReference,
        payment: Payment,
    ) -> Result<AvisDePaiement, NoticeServiceError> {
        let notice = self
            .repository
            .modify(reference, |notice| {
                notice.record_payment(payment)?;
                Ok::<_, NoticeServiceError>(notice.clone())
            })
            .map_err(|error| {
                if let NoticeServiceError::Notice(rejection) = &error {
                    warn!(reference = %reference, error = %rejection, "payment rejected");
                }
                error
            })?;

        info!(reference = %reference, amount = notice.amount_due(), "payment recorded");
        Ok(notice)
    }

    /// Send a formal notice for every pending avis past its due date.
    pub fn escalate_overdue(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<MiseEnDemeure>, NoticeServiceError> {
        let mut letters = Vec::new();
        let references: Vec<ApReference> = self
            .repository
            .all()?
            .into_iter()
            .map(|notice| notice.reference)
            .collect();

        for reference in references {
            // Status is re-read under the repository lock; a payment landing meanwhile wins.
            let escalated = self.repository.modify(&reference, |notice| {
                Ok::<_, NoticeServiceError>(notice.escalate(today))
            })?;

            if let Some(letter) = escalated {
                info!(
                    reference = %letter.ap_reference,
                    days_overdue = letter.days_overdue,
                    "mise en demeure issued"
                );
                letters.push(letter);
            }
        }

        Ok(letters)
    }

    pub fn list(
        &self,
        filter: &NoticeFilter,
        page: PageRequest,
    ) -> Result<NoticePage, NoticeServiceError> {
        let notices = self.repository.all()?;
        Ok(NoticePage::paginate(&notices, filter, page))
    }
}

/// Error raised by the notice service.
#[derive(Debug, thiserror::Error)]
pub enum NoticeServiceError {
    #[error(transparent)]
    Notice(#[from] NoticeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
