pub mod admin;
pub mod auth;
pub mod chat;

pub use admin::AdminCommands;
pub use auth::AuthCommands;
pub use chat::ChatCommands;
