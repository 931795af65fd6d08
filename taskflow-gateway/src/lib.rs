pub mod app_state;
pub mod extract;
pub mod middleware;
pub mod routes;

pub use app_state::AppState;
pub use routes::{new, ApiDoc};
