//! 基础设施层：配置、日志、数据库连接池

pub mod config;
pub mod database;
pub mod logger;
