use std::path::{Path, PathBuf};

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::entity::book;

/// Connection parameters of the persistent store, supplied via environment.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
}

impl PostgresConfig {
    fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

/// Owns the database connection.
///
/// Two modes: a persistent Postgres store for production and an ephemeral
/// SQLite file store for tests. Closing an ephemeral store removes its
/// backing file.
#[derive(Debug, Clone)]
pub struct Storage {
    conn: DatabaseConnection,
    ephemeral_path: Option<PathBuf>,
}

impl Storage {
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DbErr> {
        tracing::info!(host = %config.host, name = %config.name, "Connecting to database");

        let conn = Database::connect(config.url()).await?;

        create_schema(&conn).await?;

        Ok(Storage {
            conn,
            ephemeral_path: None,
        })
    }

    pub async fn connect_ephemeral(path: impl AsRef<Path>) -> Result<Self, DbErr> {
        let path = path.as_ref();

        tracing::info!(path = %path.display(), "Connecting to ephemeral database");

        let conn = Database::connect(format!("sqlite://{}?mode=rwc", path.display())).await?;

        create_schema(&conn).await?;

        Ok(Storage {
            conn,
            ephemeral_path: Some(path.to_path_buf()),
        })
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Closes the connection and removes the backing file of an ephemeral store.
    pub async fn close(self) -> Result<(), DbErr> {
        self.conn.close().await?;

        if let Some(path) = self.ephemeral_path {
            if let Err(err) = std::fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), %err, "Failed to remove ephemeral database file");
            }
        }

        Ok(())
    }
}

async fn create_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut statement = schema.create_table_from_entity(book::Entity);
    statement.if_not_exists();

    conn.execute(backend.build(&statement)).await?;

    Ok(())
}
