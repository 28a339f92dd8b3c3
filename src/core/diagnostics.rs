//! 解析器诊断
//!
//! 解析器遇到存储失败时先写 tracing 日志；配置了 `diagnostics.error_log`
//! 时再把一行记录追加到该文件，格式为 `<rfc3339 时间> <字段>: <错误>`。

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};
use tracing::{error, warn};

use super::error::StorageError;

#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    error_log: Option<PathBuf>,
}

impl ErrorReporter {
    pub fn new(error_log: Option<PathBuf>) -> Self {
        Self { error_log }
    }

    pub fn error_log(&self) -> Option<&Path> {
        self.error_log.as_deref()
    }

    /// 记录一次解析器存储失败
    ///
    /// 写侧文件失败只会产生一条警告，不影响 GraphQL 响应。
    pub async fn record(&self, field: &str, err: &StorageError) {
        error!(field, error = %err, "resolver storage failure");

        let Some(path) = &self.error_log else {
            return;
        };
        let line = format!("{} {}: {}\n", Utc::now().to_rfc3339(), field, err);
        if let Err(e) = append_line(path, &line).await {
            warn!(path = %path.display(), error = %e, "failed to write diagnostics file");
        }
    }
}

async fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await
}
