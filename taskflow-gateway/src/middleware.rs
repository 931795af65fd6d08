use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// 默认中间件栈：请求追踪 + CORS
pub fn default_stack<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
