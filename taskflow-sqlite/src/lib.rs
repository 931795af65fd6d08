pub mod db;
pub mod storage_manager;
pub mod utils;

pub mod models {
    pub mod task_template;
    pub mod template_form;
    pub mod template_step;
}

pub mod crud {
    pub mod task_template_crud;
    pub mod template_form_crud;
    pub mod template_step_crud;
}

pub mod persistence {
    pub mod task_template;
    pub mod template_form;
    pub mod template_step;
}

pub use storage_manager::SqliteStorageManager;

#[macro_export]
macro_rules! tx_exec {
    ($tx:expr, $fn:ident($($arg:expr),*)) => {
        $fn(&mut *$tx, $($arg),*).await
    };
}
