//! 核心层：错误处理、响应封装、中间件与解析器诊断

pub mod diagnostics;
pub mod error;
pub mod middleware;
pub mod response;
