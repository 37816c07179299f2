use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{
    InjectedMetrics, ModuleRecord, PredictionResult, RecommendationResult, StudentKey,
    StudentRecord,
};
use super::lookup::ReferenceData;
use super::quiz::QuizSet;
use super::service::LearningInsightsService;
use super::validation;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    pub student_id: i64,
    pub module_code: String,
    #[serde(default)]
    pub custom_metrics: Option<InjectedMetrics>,
}

#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    pub student_id: StudentKey,
    pub module_code: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuizParams {
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Router exposing prediction, recommendation, quiz and catalog endpoints.
pub fn analytics_router<D>(service: Arc<LearningInsightsService<D>>) -> Router
where
    D: ReferenceData + 'static,
{
    Router::new()
        .route("/predict", post(predict_handler::<D>))
        .route("/predict/simulate", post(simulate_handler::<D>))
        .route(
            "/reco/:student_id/:module_code",
            get(recommendation_handler::<D>),
        )
        .route("/quiz/:module_code", get(quiz_handler::<D>))
        .route("/students", get(students_handler::<D>))
        .route("/modules", get(modules_handler::<D>))
        .with_state(service)
}

pub(crate) async fn predict_handler<D>(
    State(service): State<Arc<LearningInsightsService<D>>>,
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionResult>, AppError>
where
    D: ReferenceData + 'static,
{
    let student_id = validation::student_id(request.student_id)?;
    let module_code = validation::module_code(&request.module_code)?;
    if let Some(metrics) = &request.custom_metrics {
        validation::metrics(metrics)?;
    }

    Ok(Json(service.predict(
        student_id,
        module_code,
        request.custom_metrics.as_ref(),
    )))
}

pub(crate) async fn simulate_handler<D>(
    State(service): State<Arc<LearningInsightsService<D>>>,
    Json(request): Json<SimulationRequest>,
) -> Result<Json<PredictionResult>, AppError>
where
    D: ReferenceData + 'static,
{
    let module_code = validation::module_code(&request.module_code)?;
    Ok(Json(service.simulate(request.student_id, module_code)))
}

pub(crate) async fn recommendation_handler<D>(
    State(service): State<Arc<LearningInsightsService<D>>>,
    Path((student_id, module_code)): Path<(i64, String)>,
) -> Result<Json<RecommendationResult>, AppError>
where
    D: ReferenceData + 'static,
{
    let student_id = validation::student_id(student_id)?;
    let module_code = validation::module_code(&module_code)?;
    Ok(Json(service.recommend(student_id, module_code)))
}

pub(crate) async fn quiz_handler<D>(
    State(service): State<Arc<LearningInsightsService<D>>>,
    Path(module_code): Path<String>,
    Query(params): Query<QuizParams>,
) -> Result<Json<QuizSet>, AppError>
where
    D: ReferenceData + 'static,
{
    let module_code = validation::module_code(&module_code)?;
    Ok(Json(service.quiz(module_code, params.difficulty.as_deref())))
}

pub(crate) async fn students_handler<D>(
    State(service): State<Arc<LearningInsightsService<D>>>,
) -> Json<Vec<StudentRecord>>
where
    D: ReferenceData + 'static,
{
    Json(service.students())
}

pub(crate) async fn modules_handler<D>(
    State(service): State<Arc<LearningInsightsService<D>>>,
) -> Json<Vec<ModuleRecord>>
where
    D: ReferenceData + 'static,
{
    Json(service.modules())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::domain::RiskLevel;
    use crate::analytics::lookup::StaticCatalog;
    use crate::analytics::scoring::ScoringConfig;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn service() -> Arc<LearningInsightsService<StaticCatalog>> {
        Arc::new(LearningInsightsService::new(
            Arc::new(StaticCatalog),
            ScoringConfig::default(),
        ))
    }

    #[tokio::test]
    async fn predict_handler_scores_stored_profile() {
        let request = PredictionRequest {
            student_id: 1,
            module_code: "CS101".to_string(),
            custom_metrics: None,
        };

        let Json(body) = predict_handler(State(service()), Json(request))
            .await
            .expect("prediction succeeds");

        assert_eq!(body.success_proba, 1.0);
        assert_eq!(body.risk_level, RiskLevel::Low);
    }

    #[tokio::test]
    async fn predict_handler_rejects_blank_module_code() {
        let request = PredictionRequest {
            student_id: 1,
            module_code: "  ".to_string(),
            custom_metrics: None,
        };

        let err = predict_handler(State(service()), Json(request))
            .await
            .expect_err("blank module rejected");

        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn quiz_handler_accepts_difficulty() {
        let params = QuizParams {
            difficulty: Some("beginner".to_string()),
        };

        let Json(body) = quiz_handler(
            State(service()),
            Path("Kubernetes-Ops".to_string()),
            Query(params),
        )
        .await
        .expect("quiz builds");

        assert_eq!(body.questions.len(), 5);
        assert_eq!(body.difficulty.as_deref(), Some("beginner"));
    }
}
