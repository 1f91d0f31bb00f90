use axum::http::{HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission, CALLER_ID_HEADER},
};
use test_utils::{builder::TestBuilder, factory};


fn headers_for(user_id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CALLER_ID_HEADER, HeaderValue::from_str(user_id).unwrap());
    headers
}
