use anyhow::{anyhow, Result};
use std::env;

pub const DEFAULT_DB_PATH: &str = "data/taskflow.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_GATEWAY_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// 运行时配置：数据库 + Gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskflowConfig {
    pub db_path: String,
    pub db_max_connections: u32,
    pub gateway_bind: String,
    pub default_page_size: i64,
}

impl Default for TaskflowConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            gateway_bind: DEFAULT_GATEWAY_BIND.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TaskflowConfig {
    /// 从进程环境变量构建
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意 key -> value 查找函数构建（测试里用 HashMap 代替环境变量）
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let db_path = text("TASKFLOW_DB_PATH", DEFAULT_DB_PATH);
        let gateway_bind = text("TASKFLOW_GATEWAY_BIND", DEFAULT_GATEWAY_BIND);

        let db_max_connections = positive(
            "TASKFLOW_DB_MAX_CONNECTIONS",
            lookup("TASKFLOW_DB_MAX_CONNECTIONS"),
            DEFAULT_DB_MAX_CONNECTIONS as i64,
        )? as u32;

        let default_page_size = positive(
            "TASKFLOW_DEFAULT_PAGE_SIZE",
            lookup("TASKFLOW_DEFAULT_PAGE_SIZE"),
            DEFAULT_PAGE_SIZE,
        )?;

        Ok(Self {
            db_path,
            db_max_connections,
            gateway_bind,
            default_page_size,
        })
    }

    /// 日志摘要
    pub fn summary(&self) -> String {
        format!(
            "db_path={}, db_max_connections={}, gateway_bind={}, default_page_size={}",
            self.db_path, self.db_max_connections, self.gateway_bind, self.default_page_size
        )
    }
}

fn positive(key: &str, raw: Option<String>, default: i64) -> Result<i64> {
    let raw = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    let value = raw
        .parse::<i64>()
        .map_err(|e| anyhow!("Invalid {}: {} ({})", key, raw, e))?;

    if value <= 0 || value > u32::MAX as i64 {
        return Err(anyhow!("Invalid {}: {} (must be a positive integer)", key, raw));
    }
    Ok(value)
}
