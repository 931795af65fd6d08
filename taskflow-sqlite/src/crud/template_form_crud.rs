use sqlx::{Executor, QueryBuilder, Result, Sqlite};

use crate::models::template_form::TemplateForm;
use crate::utils::push_in_list;

pub async fn create_form<'e, E>(executor: E, form: &TemplateForm) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO task_template_forms
        (id, template_id, name, order_no, definition, created_by, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&form.id)
    .bind(&form.template_id)
    .bind(&form.name)
    .bind(form.order_no)
    .bind(&form.definition)
    .bind(&form.created_by)
    .bind(form.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn find_forms_by_template<'e, E>(
    executor: E,
    template_id: &str,
) -> Result<Vec<TemplateForm>>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, TemplateForm>(
        r#"
        SELECT id, template_id, name, order_no, definition, created_by, created_at
        FROM task_template_forms
        WHERE template_id = ?
        ORDER BY order_no ASC
        "#,
    )
    .bind(template_id)
    .fetch_all(executor)
    .await
}

// 删除若干模板下的全部表单
pub async fn delete_forms_by_templates<'e, E>(executor: E, template_ids: &[String]) -> Result<u64>
where
    E: Executor<'e, Database = Sqlite>,
{
    if template_ids.is_empty() {
        return Ok(0);
    }
    let mut query =
        QueryBuilder::<Sqlite>::new("DELETE FROM task_template_forms WHERE template_id IN ");
    push_in_list(&mut query, template_ids);

    let result = query.build().execute(executor).await?;
    Ok(result.rows_affected())
}
