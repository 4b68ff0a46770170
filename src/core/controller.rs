use std::sync::Arc;
use axum::http::StatusCode;
use tracing::{info, warn};
use crate::auth::credentials::{CredentialStore, StaticCredentialStore};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repositories;

// AppState is shared by every request of a process so that all handlers see the same store
#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub repos: Repositories,
    pub credentials: Arc<dyn CredentialStore>,
}

impl AppState {
    pub fn new(config: Configuration, repos: Repositories, credentials: Arc<dyn CredentialStore>) -> AppState {
        AppState {
            config,
            repos,
            credentials,
        }
    }

    // connects the repositories and loads admin credentials named by the configuration
    pub async fn build(config: Configuration) -> LibraryResult<AppState> {
        let repos = Repositories::build(&config).await?;
        let credentials: Arc<dyn CredentialStore> = match &config.credentials_file {
            Some(path) => {
                let store = StaticCredentialStore::from_json_file(path.as_str())?;
                info!(path = path.as_str(), admins = store.len(), "loaded admin credentials");
                Arc::new(store)
            }
            None => {
                warn!("no credentials file configured, every mutating request will be rejected");
                Arc::new(StaticCredentialStore::empty())
            }
        };
        info!(branch = config.branch_id.as_str(), store = ?config.store, "built application state");
        Ok(AppState::new(config, repos, credentials))
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Unauthenticated { .. } => {
                (StatusCode::UNAUTHORIZED, format!("{:?}", err))
            }
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
