//! Avis de paiement workflow: issue from an FT case, settle, and escalate to mise en demeure.

pub mod domain;
mod notice;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    ApReference, FaitTerrain, FtReference, MiseEnDemeure, NoticeStatus, Payment,
};
pub use notice::{AvisDePaiement, NoticeError, NoticeSummary};
pub use repository::{
    NoticeFilter, NoticePage, NoticeRepository, PageRequest, RepositoryError, DEFAULT_PER_PAGE,
    MAX_PER_PAGE,
};
pub use router::notice_router;
pub use service::{AvisDePaiementService, NoticeServiceError};
