use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::assessment::Assessment;
use super::domain::{Ariary, AttractionCategory, GeographicZone, ZoneConstructibility};
use super::engine::map_destination_to_category;
use super::words::amount_to_french_words;

/// Form values posted by the notice editor whenever a tariff input changes.
#[derive(Debug, Clone, Deserialize)]
pub struct TariffRequest {
    pub zone: ZoneConstructibility,
    #[serde(default)]
    pub category: Option<AttractionCategory>,
    #[serde(default)]
    pub destination: Option<String>,
    pub area: f64,
    pub geo_zone: GeographicZone,
}

impl TariffRequest {
    /// An explicit category wins over the free-text destination.
    pub fn category(&self) -> AttractionCategory {
        self.category.unwrap_or_else(|| {
            map_destination_to_category(self.destination.as_deref().unwrap_or_default())
        })
    }

    pub fn assess(&self) -> Result<Assessment, InvalidArea> {
        validate_area(self.area)?;
        Ok(Assessment::compute(
            self.zone,
            self.category(),
            self.area,
            self.geo_zone,
        ))
    }
}

/// Largest surface accepted on a case, in square metres (1 000 km²).
pub const MAX_AREA: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("surface must be a finite, non-negative number of square metres up to 1000000000 (got {0})")]
pub struct InvalidArea(pub f64);

pub fn validate_area(area: f64) -> Result<(), InvalidArea> {
    if area.is_finite() && (0.0..=MAX_AREA).contains(&area) {
        Ok(())
    } else {
        Err(InvalidArea(area))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordsRequest {
    pub amount: Ariary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsResponse {
    pub amount: Ariary,
    pub words: String,
}

/// Router exposing the tariff calculator to the notice editor.
pub fn tariff_router() -> Router {
    Router::new()
        .route("/api/v1/tariffs/compute", post(compute_handler))
        .route("/api/v1/tariffs/words", post(words_handler))
}

pub(crate) async fn compute_handler(Json(request): Json<TariffRequest>) -> Response {
    match request.assess() {
        Ok(assessment) => (StatusCode::OK, Json(assessment)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn words_handler(Json(request): Json<WordsRequest>) -> Json<WordsResponse> {
    Json(WordsResponse {
        amount: request.amount,
        words: amount_to_french_words(request.amount),
    })
}
