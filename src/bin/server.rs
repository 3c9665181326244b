use anyhow::Context;
use clap::Parser;
use library_system::{
    cli_args::CliArgs,
    server::{Server, ServerConfig},
    storage::Storage,
};

fn init_tracing() -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .finish(),
    )
    .context("Failed to set global tracing subscriber")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "server=info,library_system=info,tower_http=info");
    }

    init_tracing()?;

    tracing::info!("Starting ...");

    let cli_args = CliArgs::parse();

    let storage = Storage::connect(&cli_args.database.postgres_config())
        .await
        .context("Failed to connect to database")?;

    let server_config = ServerConfig::new(cli_args.listen_address, cli_args.auth_token);
    let server = Server::new(server_config, storage);

    server.run().await?;

    Ok(())
}
