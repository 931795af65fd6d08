pub mod audit;
pub mod task_template;
pub mod template_form;
pub mod template_step;

pub use audit::*;
pub use task_template::*;
pub use template_form::*;
pub use template_step::*;
