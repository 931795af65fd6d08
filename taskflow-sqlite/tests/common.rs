#![allow(dead_code)]

use chrono::{Duration, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::env;
use taskflow_sqlite::models::task_template::TaskTemplate;

// 测试数据库 URL，默认使用内存 SQLite 数据库
static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string())
});

// 每个内存连接都是独立的数据库，所以只保留一个长期连接
pub async fn setup_pool() -> Pool<Sqlite> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(&DATABASE_URL)
        .await
        .expect("Failed to create connection pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn minutes_ago(minutes: i64) -> NaiveDateTime {
    Utc::now().naive_utc() - Duration::minutes(minutes)
}

pub fn template_row(id: &str, name: &str, created_at: NaiveDateTime) -> TaskTemplate {
    TaskTemplate {
        id: id.to_string(),
        name: name.to_string(),
        stage: "Save".to_string(),
        created_by: "user-1".to_string(),
        created_at,
    }
}
