pub mod form;
pub mod paging;
pub mod step;
pub mod template;
pub mod user;
