mod common;
use common::{minutes_ago, setup_pool};
use taskflow_sqlite::crud::template_step_crud::*;
use taskflow_sqlite::models::template_step::{StepOperation, TemplateStep};
use taskflow_sqlite::tx_exec;

fn step_row(id: &str, template_id: &str, order_no: i64) -> TemplateStep {
    TemplateStep {
        id: id.to_string(),
        template_id: template_id.to_string(),
        name: format!("step {id}"),
        order_no,
        created_by: "user-1".to_string(),
        created_at: minutes_ago(0),
    }
}

fn op_row(id: &str, step_id: &str, name: &str, seq: i64) -> StepOperation {
    StepOperation {
        id: id.to_string(),
        step_id: step_id.to_string(),
        name: name.to_string(),
        seq,
        created_by: "user-1".to_string(),
        created_at: minutes_ago(0),
    }
}

#[tokio::test]
async fn test_steps_and_operations_load_in_order() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_step(&step_row("s2", "t1", 2))).unwrap();
    tx_exec!(tx, create_step(&step_row("s1", "t1", 1))).unwrap();
    tx_exec!(tx, create_operation(&op_row("o2", "s1", "reject", 1))).unwrap();
    tx_exec!(tx, create_operation(&op_row("o1", "s1", "approve", 0))).unwrap();
    tx_exec!(tx, create_operation(&op_row("o3", "s2", "archive", 0))).unwrap();

    let steps = tx_exec!(tx, find_steps_by_template("t1")).unwrap();
    let ids: Vec<_> = steps.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids, vec!["s1".to_string(), "s2".to_string()]);

    let ops = tx_exec!(tx, find_operations_by_steps(&ids)).unwrap();
    let names: Vec<_> = ops.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["approve", "reject", "archive"]);

    let none: Vec<String> = Vec::new();
    assert!(tx_exec!(tx, find_operations_by_steps(&none)).unwrap().is_empty());
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_delete_by_step_ids_leaves_siblings() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_step(&step_row("s1", "t1", 1))).unwrap();
    tx_exec!(tx, create_step(&step_row("s2", "t1", 2))).unwrap();
    tx_exec!(tx, create_operation(&op_row("o1", "s1", "approve", 0))).unwrap();
    tx_exec!(tx, create_operation(&op_row("o2", "s2", "approve", 0))).unwrap();

    let ids = vec!["s1".to_string()];
    assert_eq!(tx_exec!(tx, delete_operations_by_steps(&ids)).unwrap(), 1);
    assert_eq!(tx_exec!(tx, delete_steps_by_ids(&ids)).unwrap(), 1);

    let steps = tx_exec!(tx, find_steps_by_template("t1")).unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].id, "s2");
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_delete_by_template_scope() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_step(&step_row("s1", "t1", 1))).unwrap();
    tx_exec!(tx, create_step(&step_row("s2", "t2", 1))).unwrap();
    tx_exec!(tx, create_operation(&op_row("o1", "s1", "approve", 0))).unwrap();
    tx_exec!(tx, create_operation(&op_row("o2", "s2", "approve", 0))).unwrap();

    let templates = vec!["t1".to_string()];
    assert_eq!(tx_exec!(tx, delete_operations_by_templates(&templates)).unwrap(), 1);
    assert_eq!(tx_exec!(tx, delete_steps_by_templates(&templates)).unwrap(), 1);

    assert!(tx_exec!(tx, find_steps_by_template("t1")).unwrap().is_empty());
    let remaining_ops = tx_exec!(tx, find_operations_by_steps(&["s2".to_string()])).unwrap();
    assert_eq!(remaining_ops.len(), 1);
    tx.rollback().await.unwrap();
}
