//! API route handlers

use axum::{Json, extract::State};
use log::{debug, warn};
use machine_learning::{Model, stats};
use serde::{Deserialize, Serialize};

use crate::{coerce, error::PredictErr, service::AppState};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictRequest {
    #[serde(deserialize_with = "coerce::int")]
    pub student_id: i64,
    #[serde(deserialize_with = "coerce::floats")]
    pub previous_marks: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictResponse {
    pub student_id: i64,
    pub average: f64,
    pub prediction: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Predicts a student's next mark from the average of their previous ones.
///
/// # Errors
/// Returns `PredictErr::EmptyMarks` if there are no previous marks to average, or
/// `PredictErr::NotFinite` if the average or the prediction overflow.
pub fn predict_marks<M: Model>(
    model: &M,
    req: &PredictRequest,
) -> Result<PredictResponse, PredictErr> {
    let student_id = req.student_id;
    let average =
        stats::mean(&req.previous_marks).ok_or(PredictErr::EmptyMarks { student_id })?;
    let prediction = model.predict(average);

    if !average.is_finite() || !prediction.is_finite() {
        return Err(PredictErr::NotFinite { student_id });
    }

    Ok(PredictResponse {
        student_id,
        average,
        prediction,
    })
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, PredictErr> {
    match predict_marks(state.model(), &req) {
        Ok(res) => {
            debug!(
                student_id = res.student_id,
                average = res.average,
                prediction = res.prediction;
                "prediction served"
            );
            Ok(Json(res))
        }
        Err(e) => {
            warn!(student_id = req.student_id; "rejected prediction: {e}");
            Err(e)
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
