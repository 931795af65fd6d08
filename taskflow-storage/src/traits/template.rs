use crate::entities::task_template::{StoredTaskTemplate, UpdateStoredTaskTemplate};
use crate::error::StorageError;

#[async_trait::async_trait]
pub trait TemplateStorage: Send + Sync {
    /// Create a new task template
    async fn create_template(&self, tpl: &StoredTaskTemplate) -> Result<(), StorageError>;

    /// Get a task template by id
    async fn get_template(&self, id: &str) -> Result<Option<StoredTaskTemplate>, StorageError>;

    /// Apply a partial update; fields left as `None` are untouched.
    /// Returns the number of rows changed (0 when the id is unknown).
    async fn update_template(
        &self,
        id: &str,
        changes: &UpdateStoredTaskTemplate,
    ) -> Result<u64, StorageError>;

    /// Find templates newest-first, optionally keeping only names that
    /// contain `keyword` (case-sensitive).
    async fn find_templates(
        &self,
        keyword: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StoredTaskTemplate>, StorageError>;

    /// Count templates matching the same filter as `find_templates`.
    async fn count_templates(&self, keyword: Option<&str>) -> Result<i64, StorageError>;
}
