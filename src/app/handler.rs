//! HTTP 处理器
//!
//! GET 返回交互式控制台页面，POST 执行 GraphQL 请求，其余方法返回 405。

use async_graphql::{http::GraphiQLSource, Variables};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::Method,
    response::{Html, Json},
};
use serde::Deserialize;
use tracing::debug;

use super::AppState;
use crate::core::error::CoreError;

/// POST 请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLBody {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub variables: Option<serde_json::Value>,
    #[serde(default)]
    pub operation_name: Option<String>,
}

impl GraphQLBody {
    /// 解析请求体；不是 JSON 对象时返回 `BadRequest`
    pub fn parse(body: &[u8]) -> Result<Self, CoreError> {
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|e| CoreError::BadRequest(e.to_string()))?;
        // 结构体反序列化也接受按位置排列的数组，这里只放行对象
        if !value.is_object() {
            return Err(CoreError::BadRequest(
                "expected a JSON object with a `query` field".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| CoreError::BadRequest(e.to_string()))
    }

    pub fn into_request(self) -> async_graphql::Request {
        let mut request = async_graphql::Request::new(self.query);
        if let Some(variables) = self.variables {
            request = request.variables(Variables::from_json(variables));
        }
        if let Some(operation_name) = self.operation_name {
            request = request.operation_name(operation_name);
        }
        request
    }
}

/// 生成控制台页面，请求发回同一路径
pub fn console_page(endpoint: &str) -> String {
    GraphiQLSource::build().endpoint(endpoint).finish()
}

pub async fn console(State(state): State<AppState>) -> Html<Bytes> {
    Html(state.console.clone())
}

pub async fn graphql_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<async_graphql::Response>, CoreError> {
    let body = body.map_err(|rejection| CoreError::Rejected {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;
    let request = GraphQLBody::parse(&body)?.into_request();
    let response = state.schema.execute(request).await;

    if response.is_err() {
        debug!(errors = response.errors.len(), "graphql response carries errors");
    }
    Ok(Json(response))
}

pub async fn method_not_allowed(method: Method) -> CoreError {
    CoreError::MethodNotAllowed(method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_defaults() {
        let body = GraphQLBody::parse(br#"{}"#).unwrap();
        assert_eq!(body.query, "");
        assert!(body.variables.is_none());
        assert!(body.operation_name.is_none());
    }

    #[test]
    fn test_body_reads_variables_and_operation_name() {
        let body = GraphQLBody::parse(
            br#"{"query": "query Q($id: ID!) { user(id: $id) { id } }", "variables": {"id": "3"}, "operationName": "Q"}"#,
        )
        .unwrap();
        assert_eq!(body.operation_name.as_deref(), Some("Q"));
        assert_eq!(body.variables, Some(serde_json::json!({ "id": "3" })));
    }

    #[test]
    fn test_null_variables_are_absent() {
        let body = GraphQLBody::parse(br#"{"query": "{ allUsers { id } }", "variables": null}"#).unwrap();
        assert!(body.variables.is_none());
    }

    #[test]
    fn test_non_object_body_is_bad_request() {
        assert!(matches!(
            GraphQLBody::parse(b"{ not json"),
            Err(CoreError::BadRequest(_))
        ));
        assert!(matches!(
            GraphQLBody::parse(b"[1, 2]"),
            Err(CoreError::BadRequest(_))
        ));
    }

    #[test]
    fn test_positional_array_body_is_bad_request() {
        assert!(matches!(
            GraphQLBody::parse(br#"["{ allUsers { id } }"]"#),
            Err(CoreError::BadRequest(_))
        ));
        assert!(matches!(
            GraphQLBody::parse(br#"["{ allUsers { id } }", null, null]"#),
            Err(CoreError::BadRequest(_))
        ));
        assert!(matches!(
            GraphQLBody::parse(br#""{ allUsers { id } }""#),
            Err(CoreError::BadRequest(_))
        ));
    }

    #[test]
    fn test_console_page_posts_to_endpoint() {
        let page = console_page("/");
        assert!(page.contains("graphiql"));
        assert_eq!(page, console_page("/"));
    }
}
