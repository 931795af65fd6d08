mod common;
use common::{minutes_ago, setup_pool, template_row};
use taskflow_sqlite::crud::task_template_crud::*;
use taskflow_sqlite::models::task_template::UpdateTaskTemplate;
use taskflow_sqlite::tx_exec;

#[tokio::test]
async fn test_create_and_get_template() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    let template = template_row("tpl_001", "Expense claim", minutes_ago(0));
    tx_exec!(tx, create_template(&template)).unwrap();

    let fetched = tx_exec!(tx, get_template("tpl_001")).unwrap().unwrap();
    assert_eq!(fetched.id, "tpl_001");
    assert_eq!(fetched.name, "Expense claim");
    assert_eq!(fetched.stage, "Save");
    assert_eq!(fetched.created_by, "user-1");
    assert_eq!(fetched.created_at, template.created_at);

    assert!(tx_exec!(tx, get_template("missing")).unwrap().is_none());
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_find_templates_newest_first_with_paging() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_template(&template_row("t1", "oldest", minutes_ago(30)))).unwrap();
    tx_exec!(tx, create_template(&template_row("t2", "middle", minutes_ago(20)))).unwrap();
    tx_exec!(tx, create_template(&template_row("t3", "newest", minutes_ago(10)))).unwrap();

    let all = tx_exec!(tx, find_templates(None, 10, 0)).unwrap();
    let ids: Vec<_> = all.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t3", "t2", "t1"]);

    let second_page = tx_exec!(tx, find_templates(None, 2, 2)).unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, "t1");

    assert_eq!(tx_exec!(tx, count_templates(None)).unwrap(), 3);
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_keyword_filter_is_case_sensitive_substring() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_template(&template_row("t1", "foo approval", minutes_ago(3)))).unwrap();
    tx_exec!(tx, create_template(&template_row("t2", "seafood order", minutes_ago(2)))).unwrap();
    tx_exec!(tx, create_template(&template_row("t3", "FOO upper", minutes_ago(1)))).unwrap();
    tx_exec!(tx, create_template(&template_row("t4", "bar", minutes_ago(0)))).unwrap();

    let found = tx_exec!(tx, find_templates(Some("foo"), 10, 0)).unwrap();
    let ids: Vec<_> = found.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["t2", "t1"]);
    assert_eq!(tx_exec!(tx, count_templates(Some("foo"))).unwrap(), 2);
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_update_template_partial() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_template(&template_row("t1", "Original", minutes_ago(0)))).unwrap();

    let changes = UpdateTaskTemplate {
        name: Some("Renamed".to_string()),
        stage: None,
    };
    let affected = tx_exec!(tx, update_template("t1", &changes)).unwrap();
    assert_eq!(affected, 1);

    let updated = tx_exec!(tx, get_template("t1")).unwrap().unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.stage, "Save");

    let missing = tx_exec!(tx, update_template("nope", &changes)).unwrap();
    assert_eq!(missing, 0);
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_update_template_no_changes() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_template(&template_row("t1", "Same", minutes_ago(0)))).unwrap();

    // 测试空更新
    let affected = tx_exec!(tx, update_template("t1", &UpdateTaskTemplate::default())).unwrap();
    assert_eq!(affected, 0);

    let unchanged = tx_exec!(tx, get_template("t1")).unwrap().unwrap();
    assert_eq!(unchanged.name, "Same");
    tx.rollback().await.unwrap();
}

#[tokio::test]
async fn test_update_stage_for_templates() {
    let pool = setup_pool().await;
    let mut tx = pool.begin().await.unwrap();

    tx_exec!(tx, create_template(&template_row("t1", "a", minutes_ago(0)))).unwrap();
    tx_exec!(tx, create_template(&template_row("t2", "b", minutes_ago(0)))).unwrap();
    tx_exec!(tx, create_template(&template_row("t3", "c", minutes_ago(0)))).unwrap();

    let ids = vec!["t1".to_string(), "t3".to_string(), "ghost".to_string()];
    let affected = tx_exec!(tx, update_stage_for_templates(&ids, "DesignForms")).unwrap();
    assert_eq!(affected, 2);

    assert_eq!(tx_exec!(tx, get_template("t1")).unwrap().unwrap().stage, "DesignForms");
    assert_eq!(tx_exec!(tx, get_template("t2")).unwrap().unwrap().stage, "Save");
    assert_eq!(tx_exec!(tx, get_template("t3")).unwrap().unwrap().stage, "DesignForms");

    let none: Vec<String> = Vec::new();
    assert_eq!(tx_exec!(tx, update_stage_for_templates(&none, "DesignSteps")).unwrap(), 0);
    tx.rollback().await.unwrap();
}
