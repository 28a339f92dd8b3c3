//! 核心错误处理模块

use std::any::Any;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use super::response::ErrorEnvelope;

/// 存储层错误
///
/// 连接失败、约束冲突、行结构不匹配都归到这里，不做重试。
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// 调度边界上的错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid request body: {0}")]
    BadRequest(String),
    #[error("method {0} is not allowed, use GET or POST")]
    MethodNotAllowed(Method),
    /// 请求体提取失败（例如超过大小限制），保留提取器给出的状态码
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("{0}")]
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            CoreError::Rejected { status, .. } => *status,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", message);
        } else {
            warn!(status = status.as_u16(), "{}", message);
        }

        let mut response = (status, Json(ErrorEnvelope::single(message))).into_response();
        if let CoreError::MethodNotAllowed(_) = self {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("GET, POST"));
        }
        response
    }
}

/// panic 捕获处理器，供 `CatchPanicLayer` 使用
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = detail, "request handler panicked");

    CoreError::InternalServerError("internal server error".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn envelope_of(response: Response) -> ErrorEnvelope {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_bad_request_envelope() {
        let response = CoreError::BadRequest("expected value at line 1".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );

        let envelope = envelope_of(response).await;
        assert_eq!(envelope.errors.len(), 1);
        assert!(envelope.errors[0].message.starts_with("invalid request body"));
    }

    #[tokio::test]
    async fn test_method_not_allowed_sets_allow_header() {
        let response = CoreError::MethodNotAllowed(Method::PUT).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET, POST");

        let envelope = envelope_of(response).await;
        assert!(envelope.errors[0].message.contains("PUT"));
    }

    #[tokio::test]
    async fn test_rejection_keeps_status() {
        let response = CoreError::Rejected {
            status: StatusCode::PAYLOAD_TOO_LARGE,
            message: "length limit exceeded".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let envelope = envelope_of(response).await;
        assert_eq!(envelope.errors[0].message, "length limit exceeded");
    }

    #[tokio::test]
    async fn test_panic_becomes_500_envelope() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let envelope = envelope_of(response).await;
        assert_eq!(envelope.errors[0].message, "internal server error");
    }

    #[test]
    fn test_storage_error_message_carries_cause() {
        let err = StorageError::from(sqlx::Error::PoolTimedOut);
        assert!(err.to_string().starts_with("database error:"));
    }
}
