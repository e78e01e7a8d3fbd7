use crate::error::LoadError;
use crate::models::Snapshot;
use crate::service::DashboardService;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// 单张合作伙伴卡片 (渲染端直接使用)
#[derive(Debug, Serialize)]
pub struct PartnerCard {
    pub partner_id: i32,
    pub top: i64,
    pub height: u32,
    /// "类型 | 名称"
    pub header: String,
    /// "10%"
    pub discount: String,
    pub discount_percent: u8,
    pub director: String,
    pub phone: String,
    pub rating: String,
    pub total_sales: BigDecimal,
}

/// 响应体
#[derive(Debug, Serialize)]
pub struct PartnersResponse {
    pub success: bool,
    pub message: String,
    pub content_extent: Option<i64>,
    pub loaded_at: Option<DateTime<Utc>>,
    pub cards: Vec<PartnerCard>,
}

impl PartnersResponse {
    fn from_snapshot(snapshot: &Snapshot) -> Self {
        let cards = snapshot
            .cards()
            .map(|(summary, tier, placement)| PartnerCard {
                partner_id: summary.id,
                top: placement.top,
                height: placement.height,
                header: format!("{} | {}", summary.partner_type, summary.name),
                discount: tier.to_string(),
                discount_percent: tier.percent(),
                director: summary.director.clone(),
                phone: summary.phone.clone(),
                rating: summary.rating.clone(),
                total_sales: summary.total_sales.clone(),
            })
            .collect();

        Self {
            success: true,
            message: format!("Loaded {} partners", snapshot.len()),
            content_extent: Some(snapshot.content_extent),
            loaded_at: Some(snapshot.loaded_at),
            cards,
        }
    }

    fn failure(err: &LoadError) -> Self {
        Self {
            success: false,
            message: err.user_message(),
            content_extent: None,
            loaded_at: None,
            cards: Vec::new(),
        }
    }
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 合作伙伴看板: 每次请求执行一次完整加载
pub async fn list_partners(State(service): State<Arc<DashboardService>>) -> Response {
    match service.load().await {
        Ok(snapshot) => {
            (StatusCode::OK, Json(PartnersResponse::from_snapshot(&snapshot))).into_response()
        }
        Err(e) => {
            let status = match e {
                LoadError::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(PartnersResponse::failure(&e))).into_response()
        }
    }
}
