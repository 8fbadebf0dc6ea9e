//! Response body shapes and helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `GET /user` wraps the list under a `users` key.
#[derive(Serialize)]
pub struct UsersBody<T> {
    pub users: Vec<T>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize)]
pub struct CreatedBody<T> {
    pub message: String,
    pub favorite: T,
}

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn users<T: Serialize>(users: Vec<T>) -> (StatusCode, Json<UsersBody<T>>) {
    (StatusCode::OK, Json(UsersBody { users }))
}

pub fn message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}

pub fn created<T: Serialize>(message: impl Into<String>, favorite: T) -> (StatusCode, Json<CreatedBody<T>>) {
    (
        StatusCode::CREATED,
        Json(CreatedBody {
            message: message.into(),
            favorite,
        }),
    )
}
