use crate::infra::{deserialize_optional_date, resolve_phase, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::NaiveDate;
use recruit_scoring::engine::fit::{
    assess, calculate_fit_score, fit_score_recommendation, FitAssessment, FitScoreInputs,
    FitScoreResult,
};
use recruit_scoring::engine::phase::{
    advancement, MilestoneProgress, Phase, PhaseAdvancement, PhaseBlueprint,
};
use recruit_scoring::engine::portfolio::{
    calculate_portfolio_health, PortfolioHealth, SchoolEntry, SchoolListImporter,
};
use recruit_scoring::engine::status::{status_report, ScoreBreakdown, StatusReport};
use recruit_scoring::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct StatusReportRequest {
    /// Overall score; derived from the breakdown when omitted.
    #[serde(default)]
    pub(crate) score: Option<f64>,
    #[serde(default)]
    pub(crate) breakdown: ScoreBreakdown,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhaseAdvancementRequest {
    #[serde(default)]
    pub(crate) phase: Option<Phase>,
    #[serde(default)]
    pub(crate) graduation_year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) completed: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MilestoneView {
    pub(crate) key: &'static str,
    pub(crate) name: &'static str,
    pub(crate) guidance: &'static str,
    pub(crate) completed: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct PhaseAdvancementResponse {
    #[serde(flatten)]
    pub(crate) advancement: PhaseAdvancement,
    pub(crate) milestones: Vec<MilestoneView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FitScoreResponse {
    #[serde(flatten)]
    pub(crate) result: FitScoreResult,
    pub(crate) tier_label: &'static str,
    pub(crate) tier_color: &'static str,
    pub(crate) recommendation: String,
}

impl From<FitScoreResult> for FitScoreResponse {
    fn from(result: FitScoreResult) -> Self {
        Self {
            tier_label: result.tier.label(),
            tier_color: result.tier.color(),
            recommendation: fit_score_recommendation(result.score, result.tier),
            result,
        }
    }
}

/// Schools may arrive as JSON entries, as a CSV export, or both; CSV rows are
/// appended after the JSON entries.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PortfolioHealthRequest {
    #[serde(default)]
    pub(crate) schools: Vec<SchoolEntry>,
    #[serde(default)]
    pub(crate) csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PortfolioHealthResponse {
    #[serde(flatten)]
    pub(crate) health: PortfolioHealth,
    pub(crate) status_label: &'static str,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/status/report", post(status_report_endpoint))
        .route("/api/v1/phase/advancement", post(phase_advancement_endpoint))
        .route("/api/v1/fit/score", post(fit_score_endpoint))
        .route("/api/v1/fit/assess", post(fit_assess_endpoint))
        .route("/api/v1/portfolio/health", post(portfolio_health_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn status_report_endpoint(
    Json(payload): Json<StatusReportRequest>,
) -> Json<StatusReport> {
    Json(status_report(payload.score, &payload.breakdown))
}

pub(crate) async fn phase_advancement_endpoint(
    Json(payload): Json<PhaseAdvancementRequest>,
) -> Result<Json<PhaseAdvancementResponse>, AppError> {
    let PhaseAdvancementRequest {
        phase,
        graduation_year,
        today,
        completed,
    } = payload;

    let phase = resolve_phase(phase, graduation_year, today)?;
    let progress = MilestoneProgress::for_phase(phase, completed);

    let blueprint = PhaseBlueprint::standard();
    let milestones = blueprint
        .milestones_for_phase(phase)
        .into_iter()
        .map(|milestone| MilestoneView {
            key: milestone.key,
            name: milestone.name,
            guidance: milestone.guidance,
            completed: progress.completed.iter().any(|key| key == milestone.key),
        })
        .collect();

    Ok(Json(PhaseAdvancementResponse {
        advancement: advancement(phase, Some(&progress)),
        milestones,
    }))
}

pub(crate) async fn fit_score_endpoint(
    Json(payload): Json<FitScoreInputs>,
) -> Json<FitScoreResponse> {
    Json(calculate_fit_score(&payload).into())
}

pub(crate) async fn fit_assess_endpoint(
    Json(payload): Json<FitAssessment>,
) -> Json<FitScoreResponse> {
    Json(assess(&payload).into())
}

pub(crate) async fn portfolio_health_endpoint(
    Json(payload): Json<PortfolioHealthRequest>,
) -> Result<Json<PortfolioHealthResponse>, AppError> {
    let PortfolioHealthRequest { mut schools, csv } = payload;

    if let Some(csv) = csv {
        let reader = Cursor::new(csv.into_bytes());
        schools.extend(SchoolListImporter::from_reader(reader)?);
    }

    let health = calculate_portfolio_health(&schools);
    Ok(Json(PortfolioHealthResponse {
        status_label: health.status.label(),
        health,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use recruit_scoring::engine::fit::FitTier;
    use recruit_scoring::engine::portfolio::PortfolioStatus;
    use recruit_scoring::engine::status::StatusLabel;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        router().layer(Extension(state))
    }

    async fn post_json(
        app: Router,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");

        let response = app.oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let json = serde_json::from_slice(&bytes).expect("body is json");
        (status, json)
    }

    #[tokio::test]
    async fn status_report_falls_back_to_weighted_score() {
        let request = StatusReportRequest {
            score: None,
            breakdown: ScoreBreakdown::new(80.0, 80.0, 80.0, 80.0),
        };

        let Json(report) = status_report_endpoint(Json(request)).await;

        assert_eq!(report.score, 80);
        assert_eq!(report.label, StatusLabel::Excellent);
        assert!(report.weakest_areas.is_empty());
    }

    #[tokio::test]
    async fn fit_score_endpoint_attaches_recommendation() {
        let inputs = FitScoreInputs::new(30.0, 15.0, 10.0, 5.0);
        let Json(body) = fit_score_endpoint(Json(inputs)).await;

        assert_eq!(body.result.score, 60);
        assert_eq!(body.result.tier, FitTier::Reach);
        assert_eq!(body.tier_label, "Reach");
        assert!(body.recommendation.contains("60"));
    }

    #[tokio::test]
    async fn phase_advancement_derives_phase_from_graduation_year() {
        let request = PhaseAdvancementRequest {
            phase: None,
            graduation_year: Some(2028),
            today: NaiveDate::from_ymd_opt(2026, 10, 17),
            completed: vec!["register_eligibility_center".to_string()],
        };

        let Json(body) = phase_advancement_endpoint(Json(request))
            .await
            .expect("phase resolves");

        assert_eq!(body.advancement.current, Phase::Junior);
        assert_eq!(body.advancement.next, Some(Phase::Senior));
        assert!(!body.advancement.can_advance);
        assert_eq!(body.advancement.percent_complete, 25);
        assert_eq!(body.milestones.len(), 4);
        assert_eq!(
            body.milestones.iter().filter(|view| view.completed).count(),
            1
        );
    }

    #[tokio::test]
    async fn portfolio_health_merges_json_and_csv_schools() {
        let request = PortfolioHealthRequest {
            schools: vec![SchoolEntry::new(90.0, Some(FitTier::Safety))],
            csv: Some(
                "School,Fit Score,Fit Tier\nState,74,\nTech,55,\nCoastal,72,match\nValley,58,reach\n"
                    .to_string(),
            ),
        };

        let Json(body) = portfolio_health_endpoint(Json(request))
            .await
            .expect("csv imports");

        assert_eq!(body.health.total, 5);
        assert_eq!(body.health.safeties, 1);
        assert_eq!(body.health.matches, 2);
        assert_eq!(body.health.reaches, 2);
        assert_eq!(body.health.status, PortfolioStatus::Healthy);
        assert_eq!(body.status_label, "Healthy");
    }

    #[tokio::test]
    async fn portfolio_health_rejects_malformed_csv() {
        let request = PortfolioHealthRequest {
            csv: Some("School,Fit Score\nState,high\n".to_string()),
            ..PortfolioHealthRequest::default()
        };

        let err = portfolio_health_endpoint(Json(request))
            .await
            .expect_err("score column is not numeric");
        assert!(matches!(err, AppError::Import(_)));
    }

    #[tokio::test]
    async fn health_and_readiness_probes() {
        let response = test_app(false)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let response = test_app(false)
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = test_app(true)
            .oneshot(
                Request::builder()
                    .uri("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn assess_route_scores_partial_assessment() {
        let (status, body) = post_json(
            test_app(true),
            "/api/v1/fit/assess",
            json!({
                "athletic": {
                    "position": "SS",
                    "positions_needed": ["SS"],
                    "coach_interest": "high",
                    "sport": "baseball",
                    "height_inches": 72,
                    "weight_lbs": 180,
                    "velocity_mph": 88
                },
                "academic": { "gpa": 3.8 }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        // athletic 15 + 10 + 8 + 5, academic 10 + 3
        assert_eq!(body["score"], 51);
        assert_eq!(body["tier"], "reach");
        assert_eq!(body["tier_label"], "Reach");
        assert_eq!(body["missing_dimensions"], json!(["opportunity", "personal"]));
    }

    #[tokio::test]
    async fn phase_route_without_phase_or_year_is_bad_request() {
        let (status, body) = post_json(
            test_app(true),
            "/api/v1/phase/advancement",
            json!({ "completed": [] }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .contains("graduation_year"));
    }

    #[tokio::test]
    async fn oversized_csv_upload_is_rejected() {
        let app = router().layer(axum::extract::DefaultBodyLimit::max(256));
        let rows: String = (0..50).map(|i| format!("School {i},60,\n")).collect();
        let body = json!({ "csv": format!("School,Fit Score,Fit Tier\n{rows}") });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/portfolio/health")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn status_route_serializes_breakdown() {
        let (status, body) = post_json(
            test_app(true),
            "/api/v1/status/report",
            json!({
                "score": 45,
                "breakdown": { "task_completion_rate": 90, "coach_interest_score": 30 }
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["label"], "poor");
        assert_eq!(body["breakdown"].as_array().map(Vec::len), Some(4));
        assert_eq!(body["strongest_areas"], json!(["Task Completion"]));
    }
}
