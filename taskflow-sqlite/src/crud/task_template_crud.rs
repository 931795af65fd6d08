use sqlx::{Executor, QueryBuilder, Result, Sqlite};

use crate::models::task_template::{TaskTemplate, UpdateTaskTemplate};
use crate::utils::{push_in_list, push_name_filter};

// 创建新模板
pub async fn create_template<'e, E>(executor: E, tpl: &TaskTemplate) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO task_templates (id, name, stage, created_by, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&tpl.id)
    .bind(&tpl.name)
    .bind(&tpl.stage)
    .bind(&tpl.created_by)
    .bind(tpl.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

// 主键查询单条记录
pub async fn get_template<'e, E>(executor: E, id: &str) -> Result<Option<TaskTemplate>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, TaskTemplate>(
        r#"
        SELECT id, name, stage, created_by, created_at
        FROM task_templates WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

// 按名称关键字分页查询，最新创建的排在前面
pub async fn find_templates<'e, E>(
    executor: E,
    keyword: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<TaskTemplate>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT id, name, stage, created_by, created_at FROM task_templates",
    );
    push_name_filter(&mut query, keyword);
    query
        .push(" ORDER BY created_at DESC, rowid DESC LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(offset);

    query
        .build_query_as::<TaskTemplate>()
        .fetch_all(executor)
        .await
}

pub async fn count_templates<'e, E>(executor: E, keyword: Option<&str>) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut query = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM task_templates");
    push_name_filter(&mut query, keyword);
    query.build_query_scalar::<i64>().fetch_one(executor).await
}

// 部分更新模板，返回受影响行数
pub async fn update_template<'e, E>(
    executor: E,
    id: &str,
    changes: &UpdateTaskTemplate,
) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let mut query = QueryBuilder::<Sqlite>::new("UPDATE task_templates SET ");
    let mut has_prev = false;

    macro_rules! set_field {
        ($field:ident) => {
            if let Some(value) = &changes.$field {
                if has_prev {
                    query.push(", ");
                }
                query.push(stringify!($field)).push(" = ").push_bind(value.clone());
                has_prev = true;
            }
        };
    }

    set_field!(name);
    set_field!(stage);

    if !has_prev {
        return Ok(0);
    }

    query.push(" WHERE id = ").push_bind(id.to_string());

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}

// 批量推进模板阶段
pub async fn update_stage_for_templates<'e, E>(
    executor: E,
    ids: &[String],
    stage: &str,
) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    if ids.is_empty() {
        return Ok(0);
    }
    let mut query = QueryBuilder::<Sqlite>::new("UPDATE task_templates SET stage = ");
    query.push_bind(stage.to_string()).push(" WHERE id IN ");
    push_in_list(&mut query, ids);

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}
