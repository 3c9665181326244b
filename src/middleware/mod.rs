pub mod require_auth_token;
