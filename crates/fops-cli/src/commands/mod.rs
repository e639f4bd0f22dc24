pub mod admin;
pub mod auth;
pub mod chat;
pub mod dispatch;
pub mod schema;
pub mod shared;
