//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 错误信封中的单条错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
}

/// 调度层错误响应结构
///
/// 与 GraphQL 响应中的 `errors` 字段保持同一形状，客户端可以用同一套逻辑处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorEntry>,
}

impl ErrorEnvelope {
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorEntry {
                message: message.into(),
            }],
        }
    }
}
