use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

use super::domain::{ApReference, FaitTerrain, NoticeStatus, Payment};
use super::repository::{NoticeFilter, NoticeRepository, PageRequest};
use super::service::AvisDePaiementService;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct IssueRequest {
    pub case: FaitTerrain,
    #[serde(default)]
    pub issued_on: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub status: Option<NoticeStatus>,
    #[serde(default)]
    pub commune: Option<String>,
    #[serde(default)]
    pub contrevenant: Option<String>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
}

impl ListQuery {
    fn split(self) -> (NoticeFilter, PageRequest) {
        let defaults = PageRequest::default();
        let filter = NoticeFilter {
            status: self.status,
            commune: self.commune,
            contrevenant: self.contrevenant,
        };
        let page = PageRequest {
            page: self.page.unwrap_or(defaults.page),
            per_page: self.per_page.unwrap_or(defaults.per_page),
        };
        (filter, page)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EscalationRequest {
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Router builder exposing notice issue, listing, payment, and escalation endpoints.
pub fn notice_router<R>(service: Arc<AvisDePaiementService<R>>) -> Router
where
    R: NoticeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/avis",
            post(issue_handler::<R>).get(list_handler::<R>),
        )
        .route(
            "/api/v1/avis/mises-en-demeure",
            post(escalation_handler::<R>),
        )
        .route("/api/v1/avis/:reference", get(fetch_handler::<R>))
        .route(
            "/api/v1/avis/:reference/paiements",
            post(payment_handler::<R>),
        )
        .with_state(service)
}

fn current_date() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) async fn issue_handler<R>(
    State(service): State<Arc<AvisDePaiementService<R>>>,
    Json(request): Json<IssueRequest>,
) -> Result<Response, AppError>
where
    R: NoticeRepository + 'static,
{
    let issued_on = request.issued_on.unwrap_or_else(current_date);
    let notice = service.issue(&request.case, issued_on)?;
    Ok((StatusCode::CREATED, Json(notice)).into_response())
}

pub(crate) async fn list_handler<R>(
    State(service): State<Arc<AvisDePaiementService<R>>>,
    Query(query): Query<ListQuery>,
) -> Result<Response, AppError>
where
    R: NoticeRepository + 'static,
{
    let (filter, page) = query.split();
    let page = service.list(&filter, page)?;
    Ok((StatusCode::OK, Json(page)).into_response())
}

pub(crate) async fn fetch_handler<R>(
    State(service): State<Arc<AvisDePaiementService<R>>>,
    Path(reference): Path<String>,
) -> Result<Response, AppError>
where
    R: NoticeRepository + 'static,
{
    let notice = service.get(&ApReference(reference))?;
    Ok((StatusCode::OK, Json(notice)).into_response())
}

pub(crate) async fn payment_handler<R>(
    State(service): State<Arc<AvisDePaiementService<R>>>,
    Path(reference): Path<String>,
    Json(payment): Json<Payment>,
) -> Result<Response, AppError>
where
    R: NoticeRepository + 'static,
{
    let notice = service.record_payment(&ApReference(reference), payment)?;
    Ok((StatusCode::OK, Json(notice)).into_response())
}

pub(crate) async fn escalation_handler<R>(
    State(service): State<Arc<AvisDePaiementService<R>>>,
    Json(request): Json<EscalationRequest>,
) -> Result<Response, AppError>
where
    R: NoticeRepository + 'static,
{
    let today = request.today.unwrap_or_else(current_date);
    let letters = service.escalate_overdue(today)?;
    Ok((StatusCode::OK, Json(letters)).into_response())
}
