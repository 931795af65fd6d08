mod common;
use common::setup_pool;
use serde_json::json;
use taskflow_sqlite::crud::task_template_crud::get_template;
use taskflow_sqlite::{tx_exec, SqliteStorageManager};
use taskflow_storage::entities::*;
use taskflow_storage::traits::*;

fn template(id: &str, name: &str) -> StoredTaskTemplate {
    StoredTaskTemplate {
        id: id.to_string(),
        name: name.to_string(),
        stage: TemplateStage::Save,
        audit: AuditStamp::new("user-1"),
    }
}

fn form(id: &str, template_id: &str, order: i64) -> StoredTemplateForm {
    StoredTemplateForm {
        id: id.to_string(),
        template_id: template_id.to_string(),
        name: format!("form {id}"),
        order,
        definition: json!({ "layout": "grid", "fields": [id] }),
        audit: AuditStamp::new("user-1"),
    }
}

fn step(id: &str, template_id: &str, order: i64, ops: &[&str]) -> StoredTemplateStep {
    StoredTemplateStep {
        id: id.to_string(),
        template_id: template_id.to_string(),
        name: format!("step {id}"),
        order,
        audit: AuditStamp::new("user-1"),
        operations: ops
            .iter()
            .enumerate()
            .map(|(i, name)| StoredStepOperation {
                id: format!("{id}-op{i}"),
                step_id: id.to_string(),
                name: name.to_string(),
                audit: AuditStamp::new("user-1"),
            })
            .collect(),
    }
}

#[tokio::test]
async fn test_template_entity_round_trip() {
    let manager = SqliteStorageManager::new(setup_pool().await);
    let tpl = template("t1", "Purchase order");
    manager.create_template(&tpl).await.unwrap();

    let fetched = manager.get_template("t1").await.unwrap().unwrap();
    assert_eq!(fetched, tpl);

    let changed = manager
        .update_template(
            "t1",
            &UpdateStoredTaskTemplate {
                stage: Some(TemplateStage::DesignSteps),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(changed, 1);
    let fetched = manager.get_template("t1").await.unwrap().unwrap();
    assert_eq!(fetched.stage, TemplateStage::DesignSteps);
    assert_eq!(fetched.name, "Purchase order");
}

#[tokio::test]
async fn test_replace_forms_advances_stage_and_swaps_rows() {
    let manager = SqliteStorageManager::new(setup_pool().await);
    manager.create_template(&template("t1", "a")).await.unwrap();
    manager.create_template(&template("t2", "b")).await.unwrap();
    let ids = vec!["t1".to_string()];

    manager
        .replace_forms(&ids, TemplateStage::DesignForms, &[form("f1", "t1", 1), form("f2", "t1", 2)])
        .await
        .unwrap();
    manager
        .replace_forms(
            &["t2".to_string()],
            TemplateStage::DesignForms,
            &[form("g1", "t2", 1)],
        )
        .await
        .unwrap();
    manager
        .replace_forms(&ids, TemplateStage::DesignForms, &[form("f3", "t1", 1)])
        .await
        .unwrap();

    let forms = manager.find_forms_by_template("t1").await.unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].id, "f3");
    assert_eq!(forms[0].definition, json!({ "layout": "grid", "fields": ["f3"] }));
    assert_eq!(manager.find_forms_by_template("t2").await.unwrap().len(), 1);

    let t1 = manager.get_template("t1").await.unwrap().unwrap();
    assert_eq!(t1.stage, TemplateStage::DesignForms);
}

#[tokio::test]
async fn test_replace_steps_removes_stale_steps_and_operations() {
    let manager = SqliteStorageManager::new(setup_pool().await);
    manager.create_template(&template("t1", "a")).await.unwrap();
    let ids = vec!["t1".to_string()];

    manager
        .replace_steps(
            &ids,
            TemplateStage::DesignSteps,
            &[step("s1", "t1", 1, &["approve", "reject"]), step("s2", "t1", 2, &["archive"])],
        )
        .await
        .unwrap();
    manager
        .replace_steps(
            &ids,
            TemplateStage::DesignSteps,
            &[step("s3", "t1", 1, &["sign", "countersign"])],
        )
        .await
        .unwrap();

    let steps = manager.find_steps_by_template("t1").await.unwrap();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].id, "s3");
    let names: Vec<_> = steps[0].operations.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["sign", "countersign"]);

    let t1 = manager.get_template("t1").await.unwrap().unwrap();
    assert_eq!(t1.stage, TemplateStage::DesignSteps);
}

#[tokio::test]
async fn test_failed_replace_rolls_back() {
    let manager = SqliteStorageManager::new(setup_pool().await);
    manager.create_template(&template("t1", "a")).await.unwrap();
    let ids = vec!["t1".to_string()];
    manager
        .replace_forms(&ids, TemplateStage::DesignForms, &[form("f1", "t1", 1)])
        .await
        .unwrap();

    // 同一批次里重复主键，插入第二条时失败
    let result = manager
        .replace_forms(&ids, TemplateStage::DesignForms, &[form("dup", "t1", 1), form("dup", "t1", 2)])
        .await;
    assert!(result.is_err());

    let forms = manager.find_forms_by_template("t1").await.unwrap();
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].id, "f1");
}

#[tokio::test]
async fn test_pool_transaction_reads_raw_rows() {
    let manager = SqliteStorageManager::new(setup_pool().await);
    manager.create_template(&template("t1", "a")).await.unwrap();

    let mut tx = manager.pool().begin().await.unwrap();
    let row = tx_exec!(tx, get_template("t1")).unwrap().unwrap();
    assert_eq!(row.stage, "Save");
    tx.rollback().await.unwrap();
}
