pub mod handlers;

pub use handlers::*;

use crate::service::DashboardService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// 构建路由
pub fn router(service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/partners", get(list_partners))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockPartnerSource;
    use crate::error::LoadError;
    use crate::service::loader::tests::{summary, LAYOUT};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(source: MockPartnerSource) -> Router {
        router(Arc::new(DashboardService::new(Arc::new(source), LAYOUT)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_check_responds() {
        let response = app(MockPartnerSource::new())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn partners_are_rendered_as_cards() {
        let mut source = MockPartnerSource::new();
        source.expect_fetch_partner_summaries().returning(|| {
            Ok(vec![
                summary(1, "A", 5_000),
                summary(2, "B", 75_000),
                summary(3, "C", 0),
            ])
        });

        let (status, body) = get_json(app(source), "/api/partners").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["content_extent"], 410);

        let cards = body["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0]["header"], "ООО | A");
        assert_eq!(cards[1]["discount"], "10%");
        assert_eq!(cards[1]["discount_percent"], 10);
        assert_eq!(cards[2]["discount"], "0%");
        let tops: Vec<i64> = cards.iter().map(|c| c["top"].as_i64().unwrap()).collect();
        assert_eq!(tops, vec![20, 155, 290]);
        assert_eq!(cards[2]["height"], 120);
    }

    #[tokio::test]
    async fn failed_load_returns_no_cards() {
        let mut source = MockPartnerSource::new();
        source.expect_fetch_partner_summaries().returning(|| {
            Err(LoadError::Query(sqlx::Error::ColumnNotFound(
                "total_sales".to_string(),
            )))
        });

        let (status, body) = get_json(app(source), "/api/partners").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Database query error"));
        assert!(body["cards"].as_array().unwrap().is_empty());
        assert!(body["content_extent"].is_null());
    }
}
