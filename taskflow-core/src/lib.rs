pub mod error;
pub mod service;

pub use error::{AppError, AppResult};
pub use service::{TaskTemplateService, TaskTemplateSvc};
