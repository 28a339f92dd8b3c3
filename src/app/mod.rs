//! 应用层：实体、GraphQL schema 与 HTTP 路由

pub mod adress;
pub mod handler;
pub mod schema;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

use axum::{
    body::Bytes,
    http::Method,
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use schema::{build_schema, sdl, AppSchema, Repositories};

use crate::core::{error::handle_panic, middleware::request_logging_middleware};

/// GraphQL 端点与控制台共用的路径
pub const ENDPOINT: &str = "/";

/// 应用状态，启动时构建一次，之后只读
#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub console: Bytes,
}

impl AppState {
    pub fn new(schema: AppSchema) -> Self {
        Self {
            schema,
            console: Bytes::from(handler::console_page(ENDPOINT)),
        }
    }
}

/// 创建路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            ENDPOINT,
            get(handler::console)
                .post(handler::graphql_handler)
                .fallback(handler::method_not_allowed),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        )
        .with_state(state)
}
