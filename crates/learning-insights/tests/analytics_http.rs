//! End-to-end checks of the analytics router: requests go through axum extraction,
//! validation, the service facade and JSON serialization.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use learning_insights::analytics::{
    analytics_router, LearningInsightsService, ScoringConfig, StaticCatalog,
};

fn app() -> Router {
    let service = LearningInsightsService::new(Arc::new(StaticCatalog), ScoringConfig::default());
    analytics_router(Arc::new(service))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

fn post_json(uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

#[tokio::test]
async fn predict_scores_stored_profile() {
    let (status, body) = send(post_json(
        "/predict",
        json!({ "student_id": 1, "module_code": "CS101" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_id"], 1);
    assert_eq!(body["module_code"], "CS101");
    assert_eq!(body["success_proba"], 1.0);
    assert_eq!(body["risk_level"], "Low");
    assert_eq!(
        body["message"],
        "Prediction for Alice Johnson in Introduction to Computer Science"
    );
}

#[tokio::test]
async fn predict_uses_injected_metrics_from_client() {
    let (status, body) = send(post_json(
        "/predict",
        json!({
            "student_id": 42,
            "module_code": "7",
            "custom_metrics": {
                "avg_score": 50,
                "num_of_prev_attempts": 0,
                "studied_credits": 60,
                "region": 1
            }
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success_proba"], 0.55);
    assert_eq!(body["risk_level"], "Medium");
    assert_eq!(body["message"], "Real-time prediction (injected metrics)");
}

#[tokio::test]
async fn predict_treats_empty_metrics_as_absent() {
    let (status, body) = send(post_json(
        "/predict",
        json!({ "student_id": 1, "module_code": "CS101", "custom_metrics": {} }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success_proba"], 1.0);
    assert_eq!(body["risk_level"], "Low");
    assert_eq!(
        body["message"],
        "Prediction for Alice Johnson in Introduction to Computer Science"
    );
}

#[tokio::test]
async fn predict_echoes_module_code_as_supplied() {
    let (status, body) = send(post_json(
        "/predict",
        json!({ "student_id": 1, "module_code": " cs101 " }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["module_code"], " cs101 ");
    assert_eq!(
        body["message"],
        "Prediction for Alice Johnson in Introduction to Computer Science"
    );
}

#[tokio::test]
async fn predict_rejects_out_of_range_scores() {
    let (status, body) = send(post_json(
        "/predict",
        json!({
            "student_id": 1,
            "module_code": "CS101",
            "custom_metrics": { "avg_score": 140 }
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("avg_score"));
}

#[tokio::test]
async fn predict_rejects_non_positive_student() {
    let (status, _) = send(post_json(
        "/predict",
        json!({ "student_id": 0, "module_code": "CS101" }),
    ))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn simulation_is_stable_across_requests() {
    let payload = json!({ "student_id": 1, "module_code": "CS101" });
    let (first_status, first) = send(post_json("/predict/simulate", payload.clone())).await;
    let (_, second) = send(post_json("/predict/simulate", payload)).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(first, second);
    let proba = first["success_proba"].as_f64().expect("probability");
    assert!((0.45..=0.95).contains(&proba));
    assert_eq!(first["message"], "Simulation (missing data)");
}

#[tokio::test]
async fn simulation_accepts_opaque_student_ids() {
    let (status, body) = send(post_json(
        "/predict/simulate",
        json!({ "student_id": "guest-7", "module_code": "CS101" }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_id"], "guest-7");
}

#[tokio::test]
async fn simulation_echoes_module_code_as_supplied() {
    let (status, body) = send(post_json(
        "/predict/simulate",
        json!({ "student_id": 3, "module_code": "CS301 " }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["module_code"], "CS301 ");
}

#[tokio::test]
async fn recommendations_follow_catalog_order() {
    let (status, body) = send(get("/reco/2/CS201")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_id"], 2);
    let ids: Vec<&str> = body["recommendations"]
        .as_array()
        .expect("recommendations array")
        .iter()
        .map(|item| item["resource_id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["art_001", "ex_001", "quiz_001", "vid_003"]);
    assert_eq!(body["recommendations"][0]["type"], "article");
    assert_eq!(
        body["recommendations"][0]["reason"],
        "Recommended based on topics in CS201"
    );
}

#[tokio::test]
async fn recommendations_are_idempotent() {
    let (_, first) = send(get("/reco/9/UNKNOWN1")).await;
    let (_, second) = send(get("/reco/9/UNKNOWN1")).await;

    assert_eq!(first, second);
    assert_eq!(
        first["recommendations"]
            .as_array()
            .expect("recommendations array")
            .len(),
        5
    );
}

#[tokio::test]
async fn quiz_classifies_module_codes() {
    let (status, devops) = send(get("/quiz/DevOps101?difficulty=advanced")).await;
    let (_, java) = send(get("/quiz/javabackend")).await;
    let (_, general) = send(get("/quiz/MATH101")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(devops["category"], "devops");
    assert_eq!(devops["questions"][0]["id"], 101);
    assert_eq!(java["category"], "java_backend");
    assert_eq!(java["questions"][4]["id"], 205);
    assert_eq!(general["category"], "general");
    assert_eq!(
        general["questions"]
            .as_array()
            .expect("questions array")
            .len(),
        3
    );
}

#[tokio::test]
async fn catalog_listings_are_exposed() {
    let (status, students) = send(get("/students")).await;
    let (_, modules) = send(get("/modules")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(students.as_array().expect("students array").len(), 3);
    assert_eq!(modules[1]["module_code"], "CS201");
    assert_eq!(modules[1]["difficulty"], "intermediate");
}
