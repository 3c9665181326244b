use std::{ops::Deref, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::{
    storage::Storage,
    traits::{StorageProvider, TokenVerifier},
};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(storage: Storage, auth_token: String) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                storage,
                auth_token,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    storage: Storage,
    auth_token: String,
}

impl StorageProvider for ApiState {
    fn db(&self) -> &DatabaseConnection {
        self.storage.conn()
    }
}

impl TokenVerifier for ApiState {
    fn verify(&self, token: &str) -> bool {
        token == self.auth_token
    }
}
