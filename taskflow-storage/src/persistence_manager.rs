use crate::traits::*;

/// 模板服务对存储后端的全部要求
pub trait PersistenceManager: TemplateStorage + FormStorage + StepStorage + Send + Sync {}

// 自动 blanket-impl
impl<T> PersistenceManager for T where T: TemplateStorage + FormStorage + StepStorage + Send + Sync {}
