//! HTTP API surface (feature `server`): a thin axum wrapper around
//! [`crate::orchestrator`] exposing single, batch, comparison, metadata, and
//! targeted-attacker estimation endpoints.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::data;
use crate::error::CrackTimeError;
use crate::hardware;
use crate::orchestrator::{self, DEFAULT_ALGORITHM, DEFAULT_HARDWARE_TIER};

pub fn router() -> Router {
    Router::new()
        .route("/estimate", post(estimate))
        .route("/batch", post(batch))
        .route("/compare/passwords", post(compare_passwords))
        .route("/compare/algorithms", post(compare_algorithms))
        .route("/compare/attackers", post(compare_attackers))
        .route("/metadata", get(metadata))
        .route("/targeted", post(targeted))
        .layer(CorsLayer::permissive())
}

impl IntoResponse for CrackTimeError {
    fn into_response(self) -> Response {
        let status = match &self {
            CrackTimeError::UnknownAlgorithm { .. } | CrackTimeError::UnknownHardwareTier { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            CrackTimeError::EmptyBatch | CrackTimeError::TooFewItems { .. } => StatusCode::BAD_REQUEST,
            CrackTimeError::MissingDataFile { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct EstimateRequestBody {
    password: String,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    #[serde(default = "default_hardware_tier")]
    hardware_tier: String,
}

fn default_algorithm() -> String {
    DEFAULT_ALGORITHM.to_string()
}

fn default_hardware_tier() -> String {
    DEFAULT_HARDWARE_TIER.to_string()
}

async fn estimate(Json(req): Json<EstimateRequestBody>) -> Result<Json<serde_json::Value>, CrackTimeError> {
    let result = orchestrator::estimate(&req.password, &req.algorithm, &req.hardware_tier)?;
    Ok(Json(result.to_json()))
}

#[derive(Debug, Deserialize)]
struct BatchRequestBody {
    passwords: Vec<String>,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    #[serde(default = "default_hardware_tier")]
    hardware_tier: String,
}

async fn batch(Json(req): Json<BatchRequestBody>) -> Result<Json<serde_json::Value>, CrackTimeError> {
    let results = orchestrator::estimate_batch(&req.passwords, &req.algorithm, &req.hardware_tier)?;
    Ok(Json(serde_json::Value::Array(results.iter().map(|r| r.to_json()).collect())))
}

#[derive(Debug, Deserialize)]
struct ComparePasswordsBody {
    passwords: Vec<String>,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    #[serde(default = "default_hardware_tier")]
    hardware_tier: String,
}

/// Rank a list of passwords from weakest to strongest under one
/// algorithm/hardware pairing.
async fn compare_passwords(Json(req): Json<ComparePasswordsBody>) -> Result<Json<serde_json::Value>, CrackTimeError> {
    if req.passwords.len() < 2 {
        return Err(CrackTimeError::TooFewItems { need: 2, got: req.passwords.len() });
    }
    let mut results = orchestrator::estimate_batch(&req.passwords, &req.algorithm, &req.hardware_tier)?;
    results.sort_by(|a, b| a.guess_number.cmp(&b.guess_number));
    Ok(Json(serde_json::Value::Array(results.iter().map(|r| r.to_json()).collect())))
}

#[derive(Debug, Deserialize)]
struct CompareAlgorithmsBody {
    password: String,
    algorithms: Vec<String>,
    #[serde(default = "default_hardware_tier")]
    hardware_tier: String,
}

/// Compare how long the same password survives under different hash algorithms.
async fn compare_algorithms(Json(req): Json<CompareAlgorithmsBody>) -> Result<Json<serde_json::Value>, CrackTimeError> {
    if req.algorithms.len() < 2 {
        return Err(CrackTimeError::TooFewItems { need: 2, got: req.algorithms.len() });
    }
    let mut results = Vec::with_capacity(req.algorithms.len());
    for algorithm in &req.algorithms {
        results.push(orchestrator::estimate(&req.password, algorithm, &req.hardware_tier)?);
    }
    results.sort_by(|a, b| a.crack_time_seconds.partial_cmp(&b.crack_time_seconds).unwrap());
    Ok(Json(serde_json::Value::Array(results.iter().map(|r| r.to_json()).collect())))
}

#[derive(Debug, Deserialize)]
struct CompareAttackersBody {
    password: String,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    hardware_tiers: Vec<String>,
}

/// Compare how long the same password survives against different attacker hardware budgets.
async fn compare_attackers(Json(req): Json<CompareAttackersBody>) -> Result<Json<serde_json::Value>, CrackTimeError> {
    if req.hardware_tiers.len() < 2 {
        return Err(CrackTimeError::TooFewItems { need: 2, got: req.hardware_tiers.len() });
    }
    let mut results = Vec::with_capacity(req.hardware_tiers.len());
    for tier in &req.hardware_tiers {
        results.push(orchestrator::estimate(&req.password, &req.algorithm, tier)?);
    }
    results.sort_by(|a, b| a.crack_time_seconds.partial_cmp(&b.crack_time_seconds).unwrap());
    Ok(Json(serde_json::Value::Array(results.iter().map(|r| r.to_json()).collect())))
}

/// Supported algorithm and hardware-tier names, for clients building a picker UI.
async fn metadata() -> Json<serde_json::Value> {
    let store = data::store();
    Json(json!({
        "algorithms": hardware::supported_algorithms(store),
        "hardware_tiers": hardware::supported_hardware_tiers(),
    }))
}

#[derive(Debug, Deserialize)]
struct TargetedRequestBody {
    password: String,
    /// Attacker-known context about the target: names, dates, pet names,
    /// anything that might appear verbatim in a custom wordlist built for
    /// this one person.
    context: Vec<String>,
    #[serde(default = "default_algorithm")]
    algorithm: String,
    #[serde(default = "default_hardware_tier")]
    hardware_tier: String,
}

/// Re-estimate a password assuming the attacker has also built a
/// target-specific wordlist from known facts about the victim. If any
/// context term appears in the password, the estimate collapses to a
/// single targeted guess instead of the generic guess number.
async fn targeted(Json(req): Json<TargetedRequestBody>) -> Result<Json<serde_json::Value>, CrackTimeError> {
    let mut result = orchestrator::estimate(&req.password, &req.algorithm, &req.hardware_tier)?;
    let lower_password = result.password.to_lowercase();
    let hit = req.context.iter().any(|term| {
        let term = term.trim().to_lowercase();
        !term.is_empty() && lower_password.contains(&term)
    });

    if hit && result.guess_number > 1 {
        result.guess_number = 1;
        result.winning_attack = format!("targeted_{}", result.winning_attack);
        result.crack_time_seconds = hardware::crack_time_seconds(1, &req.algorithm, &req.hardware_tier, data::store())?;
        result.crack_time_display = crate::format::format_time_or_instant(1, result.crack_time_seconds);
        result.rating = crate::rating::rate(result.crack_time_seconds);
        let last = result.length.saturating_sub(1);
        result.decomposition = vec![crate::matching::Match::make_bruteforce(&result.password, 0, last)];
    }

    let mut body = result.to_json();
    body["targeted"] = json!(hit);
    Ok(Json(body))
}
