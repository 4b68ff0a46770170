use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const DEFAULT_DDB_ENDPOINT: &str = "http://localhost:8000";

// Configuration abstracts config options for library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    #[serde(rename = "branch")]
    pub branch_id: String,
    pub store: RepositoryStore,
    pub dev_mode: bool,
    pub ddb_endpoint: String,
    pub books_table: String,
    pub customers_table: String,
    pub checkouts_table: String,
    pub sequences_table: String,
    pub credentials_file: Option<String>,
    pub log_level: String,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            store: RepositoryStore::Memory,
            dev_mode: true,
            ddb_endpoint: DEFAULT_DDB_ENDPOINT.to_string(),
            books_table: "books".to_string(),
            customers_table: "customers".to_string(),
            checkouts_table: "checkouts".to_string(),
            sequences_table: "sequences".to_string(),
            credentials_file: None,
            log_level: "info".to_string(),
        }
    }

    // builds configuration from LMS_* environment variables, falling back to defaults
    pub fn from_env() -> LibraryResult<Self> {
        Self::from_source(Environment::with_prefix("LMS").try_parsing(true))
    }

    // layers the given environment over the defaults, e.g. LMS_BOOKS_TABLE sets books_table
    pub fn from_source(env: Environment) -> LibraryResult<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Configuration::new("dev"))?)
            .add_source(env)
            .build()?;
        Ok(config.try_deserialize::<Configuration>()?)
    }
}
