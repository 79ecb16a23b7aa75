//! Typed wrappers for the `/users` endpoints.

use ticket_models::{User, UserId};

use crate::error::ClientError;
use crate::http::{HttpClient, RequestOptions};

const USERS: &str = "users";

/// `GET /users`
///
/// # Errors
/// See [`ClientError`].
pub async fn get_users(http: &HttpClient, options: &RequestOptions) -> Result<Vec<User>, ClientError> {
    http.get_json(&[USERS], options).await
}

/// `GET /users/{id}`
///
/// # Errors
/// See [`ClientError`]; an unknown id yields a 404 status error.
pub async fn get_user_by_id(
    http: &HttpClient,
    id: UserId,
    options: &RequestOptions,
) -> Result<User, ClientError> {
    http.get_json(&[USERS, &id.to_string()], options).await
}
