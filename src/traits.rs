use sea_orm::DatabaseConnection;

pub trait TokenVerifier {
    /// Verifies the literal `Authorization` header value.
    fn verify(&self, token: &str) -> bool;
}

pub trait StorageProvider {
    /// Returns the database connection handle.
    fn db(&self) -> &DatabaseConnection;
}
