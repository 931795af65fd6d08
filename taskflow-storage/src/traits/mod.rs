pub mod form;
pub mod step;
pub mod template;

pub use form::FormStorage;
pub use step::StepStorage;
pub use template::TemplateStorage;
