use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{
    ApReference, FaitTerrain, FtReference, MiseEnDemeure, NoticeStatus, Payment,
};
use crate::tarification::{validate_area, Ariary, Assessment, InvalidArea};

/// Payment notice issued for an FT case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvisDePaiement {
    pub reference: ApReference,
    pub ft_reference: FtReference,
    pub contrevenant: String,
    pub commune: String,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
    pub assessment: Assessment,
    pub status: NoticeStatus,
    pub payment: Option<Payment>,
    pub formal_notice: Option<MiseEnDemeure>,
}

/// Rejections raised while issuing or settling a notice.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoticeError {
    #[error("FT case reference is required")]
    MissingReference,
    #[error(transparent)]
    InvalidArea(#[from] InvalidArea),
    #[error("avis {0} is already settled")]
    AlreadySettled(ApReference),
    #[error("payment of {received} Ar does not match the {expected} Ar due")]
    AmountMismatch { expected: Ariary, received: Ariary },
    #[error("due date {payment_delay_days} day(s) after {issued_on} is out of range")]
    DueDateOutOfRange {
        issued_on: NaiveDate,
        payment_delay_days: i64,
    },
}

impl AvisDePaiement {
    pub fn issue(
        reference: ApReference,
        case: &FaitTerrain,
        issued_on: NaiveDate,
        payment_delay_days: i64,
    ) -> Result<Self, NoticeError> {
        if case.reference.0.trim().is_empty() {
            return Err(NoticeError::MissingReference);
        }
        validate_area(case.area)?;
        let due_on = Duration::try_days(payment_delay_days)
            .and_then(|delay| issued_on.checked_add_signed(delay))
            .ok_or(NoticeError::DueDateOutOfRange {
                issued_on,
                payment_delay_days,
            })?;

        Ok(Self {
            reference,
            ft_reference: case.reference.clone(),
            contrevenant: case.contrevenant.clone(),
            commune: case.commune.clone(),
            issued_on,
            due_on,
            assessment: case.assessment(),
            status: NoticeStatus::Pending,
            payment: None,
            formal_notice: None,
        })
    }

    pub fn amount_due(&self) -> Ariary {
        self.assessment.amount_due
    }

    /// Settles the notice. A formal notice does not prevent settlement.
    pub fn record_payment(&mut self, payment: Payment) -> Result<(), NoticeError> {
        if self.status.is_settled() {
            return Err(NoticeError::AlreadySettled(self.reference.clone()));
        }
        if payment.amount != self.amount_due() {
            return Err(NoticeError::AmountMismatch {
                expected: self.amount_due(),
                received: payment.amount,
            });
        }

        self.payment = Some(payment);
        self.status = NoticeStatus::Paid;
        Ok(())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == NoticeStatus::Pending && today > self.due_on
    }

    /// Moves an unpaid, overdue notice to formal notice and returns the letter to send.
    pub fn escalate(&mut self, today: NaiveDate) -> Option<MiseEnDemeure> {
        if !self.is_overdue(today) {
            return None;
        }

        let letter = MiseEnDemeure {
            ap_reference: self.reference.clone(),
            ft_reference: self.ft_reference.clone(),
            contrevenant: self.contrevenant.clone(),
            issued_on: today,
            due_on: self.due_on,
            amount_due: self.amount_due(),
            amount_in_words: self.assessment.amount_in_words.clone(),
            days_overdue: (today - self.due_on).num_days(),
        };

        self.status = NoticeStatus::FormalNotice;
        self.formal_notice = Some(letter.clone());
        Some(letter)
    }

    pub fn summary(&self) -> NoticeSummary {
        NoticeSummary {
            reference: self.reference.clone(),
            ft_reference: self.ft_reference.clone(),
            contrevenant: self.contrevenant.clone(),
            commune: self.commune.clone(),
            issued_on: self.issued_on,
            due_on: self.due_on,
            amount_due: self.amount_due(),
            status: self.status,
            status_label: self.status.label(),
        }
    }
}

/// Row shown in the notice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoticeSummary {
    pub reference: ApReference,
    pub ft_reference: FtReference,
    pub contrevenant: String,
    pub commune: String,
    pub issued_on: NaiveDate,
    pub due_on: NaiveDate,
    pub amount_due: Ariary,
    pub status: NoticeStatus,
    pub status_label: &'static str,
}
