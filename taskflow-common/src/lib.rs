pub mod config;

pub use config::TaskflowConfig;
