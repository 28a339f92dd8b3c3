//! # adressbook-graphql
//!
//! 以 GraphQL 查询/变更 API 暴露用户与地址数据集，底层为 PostgreSQL：
//! - `app`：实体模型、存储端口、GraphQL schema 与 HTTP 路由
//! - `core`：错误处理、错误信封、请求日志中间件、解析器诊断
//! - `infrastructure`：配置加载、日志初始化、数据库连接池

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{build_schema, create_routes, AppSchema, AppState, Repositories};
pub use infrastructure::config::Config;
