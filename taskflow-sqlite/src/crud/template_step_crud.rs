use sqlx::{Executor, QueryBuilder, Result, Sqlite};

use crate::models::template_step::{StepOperation, TemplateStep};
use crate::utils::push_in_list;

pub async fn create_step<'e, E>(executor: E, step: &TemplateStep) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO task_template_steps
        (id, template_id, name, order_no, created_by, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&step.id)
    .bind(&step.template_id)
    .bind(&step.name)
    .bind(step.order_no)
    .bind(&step.created_by)
    .bind(step.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn create_operation<'e, E>(executor: E, op: &StepOperation) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO task_template_step_operations
        (id, step_id, name, seq, created_by, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&op.id)
    .bind(&op.step_id)
    .bind(&op.name)
    .bind(op.seq)
    .bind(&op.created_by)
    .bind(op.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn find_steps_by_template<'e, E>(
    executor: E,
    template_id: &str,
) -> Result<Vec<TemplateStep>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, TemplateStep>(
        r#"
        SELECT id, template_id, name, order_no, created_by, created_at
        FROM task_template_steps
        WHERE template_id = ?
        ORDER BY order_no ASC
        "#,
    )
    .bind(template_id)
    .fetch_all(executor)
    .await
}

// 一次性加载多个步骤的操作，按步骤内顺序返回
pub async fn find_operations_by_steps<'e, E>(
    executor: E,
    step_ids: &[String],
) -> Result<Vec<StepOperation>>
where
    E: Executor<'e, Database = Sqlite>,
{
    if step_ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut query = QueryBuilder::<Sqlite>::new(
        "SELECT id, step_id, name, seq, created_by, created_at \
         FROM task_template_step_operations WHERE step_id IN ",
    );
    push_in_list(&mut query, step_ids);
    query.push(" ORDER BY step_id, seq ASC");

    query
        .build_query_as::<StepOperation>()
        .fetch_all(executor)
        .await
}

pub async fn delete_operations_by_steps<'e, E>(executor: E, step_ids: &[String]) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    if step_ids.is_empty() {
        return Ok(0);
    }
    let mut query =
        QueryBuilder::<Sqlite>::new("DELETE FROM task_template_step_operations WHERE step_id IN ");
    push_in_list(&mut query, step_ids);

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}

pub async fn delete_steps_by_ids<'e, E>(executor: E, step_ids: &[String]) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    if step_ids.is_empty() {
        return Ok(0);
    }
    let mut query = QueryBuilder::<Sqlite>::new("DELETE FROM task_template_steps WHERE id IN ");
    push_in_list(&mut query, step_ids);

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}

// 删除若干模板下全部步骤的操作
pub async fn delete_operations_by_templates<'e, E>(
    executor: E,
    template_ids: &[String],
) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    if template_ids.is_empty() {
        return Ok(0);
    }
    let mut query = QueryBuilder::<Sqlite>::new(
        "DELETE FROM task_template_step_operations WHERE step_id IN \
         (SELECT id FROM task_template_steps WHERE template_id IN ",
    );
    push_in_list(&mut query, template_ids);
    query.push(")");

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}

pub async fn delete_steps_by_templates<'e, E>(executor: E, template_ids: &[String]) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    if template_ids.is_empty() {
        return Ok(0);
    }
    let mut query =
        QueryBuilder::<Sqlite>::new("DELETE FROM task_template_steps WHERE template_id IN ");
    push_in_list(&mut query, template_ids);

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}
