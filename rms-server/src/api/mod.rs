//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`roles`], [`employees`], [`customers`] - 人员
//! - [`tables`], [`reservations`], [`shifts`] - 桌台 / 预订 / 班次
//! - [`menu_categories`], [`dishes`], [`products`] - 菜单与原料
//! - [`orders`], [`payments`] - 订单与支付
//! - [`reports`] - 报表 (只读)
//! - [`batch_import`] - 批量导入

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::ServerState;

pub mod health;

pub mod customers;
pub mod employees;
pub mod roles;

pub mod reservations;
pub mod shifts;
pub mod tables;

pub mod dishes;
pub mod menu_categories;
pub mod products;

pub mod orders;
pub mod payments;

pub mod batch_import;
pub mod reports;

/// `?limit=` for list endpoints; clamped per endpoint
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i64>,
}

/// All routes, without middleware
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(roles::router())
        .merge(employees::router())
        .merge(customers::router())
        .merge(tables::router())
        .merge(reservations::router())
        .merge(shifts::router())
        .merge(menu_categories::router())
        .merge(dishes::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(payments::router())
        .merge(reports::router())
        .merge(batch_import::router())
}

/// Default request body ceiling
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUID v4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Fully configured application: routes, middleware and state
///
/// Used by the HTTP server and by router-level tests alike.
pub fn build_app(state: ServerState) -> Router {
    let request_timeout = state.config.request_timeout;

    build_router()
        .layer(DefaultBodyLimit::max(DEFAULT_BODY_LIMIT))
        // Deadline; dropping the handler future cancels in-flight store work
        .layer(TimeoutLayer::with_status_code(
            http::StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
