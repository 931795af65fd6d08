use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts};
use http::request::Parts;
use taskflow_dto::dto::user::CurrentUser;

/// 调用方通过该请求头声明自己的用户 id
pub const USER_ID_HEADER: &str = "x-user-id";

/// 当前操作用户：取自 `x-user-id`，缺省为 `anonymous`
#[derive(Debug, Clone)]
pub struct ActingUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(CurrentUser::new)
            .unwrap_or_else(CurrentUser::anonymous);
        Ok(Self(user))
    }
}
