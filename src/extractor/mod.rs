pub mod auth_token;
pub mod json;
pub mod path;
