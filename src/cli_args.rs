use std::net::SocketAddr;

use clap::{Args, Parser};

use crate::storage::PostgresConfig;

#[derive(Parser)]
#[command(author, about, version)]
pub struct CliArgs {
    /// Socket address the server listens on.
    #[clap(long, env = "LISTEN_ADDRESS", default_value = "127.0.0.1:8080")]
    pub listen_address: SocketAddr,

    /// Shared secret expected as the literal `Authorization` header value on
    /// mutating routes.
    #[clap(long, env = "AUTH_TOKEN", default_value = "static-token")]
    pub auth_token: String,

    #[clap(flatten)]
    pub database: DatabaseArgs,
}

#[derive(Args)]
pub struct DatabaseArgs {
    /// Database host.
    #[clap(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Database user.
    #[clap(long, env = "DB_USER")]
    pub db_user: String,

    /// Database password.
    #[clap(long, env = "DB_PASSWORD")]
    pub db_password: String,

    /// Database name.
    #[clap(long, env = "DB_NAME")]
    pub db_name: String,

    /// Database port.
    #[clap(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,
}

impl DatabaseArgs {
    pub fn postgres_config(&self) -> PostgresConfig {
        PostgresConfig {
            host: self.db_host.clone(),
            user: self.db_user.clone(),
            password: self.db_password.clone(),
            name: self.db_name.clone(),
            port: self.db_port,
        }
    }
}
