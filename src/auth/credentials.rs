use std::collections::HashMap;
use std::fs;
use sha2::{Digest, Sha256};
use crate::core::library::{LibraryError, LibraryResult};

// CredentialStore looks up administrators and their password hashes
pub trait CredentialStore: Sync + Send {
    fn has_credential(&self, id: &str) -> bool;

    // lowercase hex SHA-256 of the password
    fn get_hash(&self, id: &str) -> Option<String>;

    fn verify(&self, id: &str, password: &str) -> bool {
        match self.get_hash(id) {
            Some(hash) => hash.eq_ignore_ascii_case(sha256_hex(password).as_str()),
            None => false,
        }
    }
}

// StaticCredentialStore keeps administrator hashes loaded once at startup
#[derive(Debug, Default, Clone)]
pub struct StaticCredentialStore {
    hashes: HashMap<String, String>,
}

impl StaticCredentialStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(hashes: HashMap<String, String>) -> Self {
        Self {
            hashes: hashes.into_iter().map(|(id, hash)| (id, hash.to_ascii_lowercase())).collect(),
        }
    }

    // reads a JSON object of admin id to password hash
    pub fn from_json_file(path: &str) -> LibraryResult<Self> {
        let body = fs::read_to_string(path)?;
        let hashes: HashMap<String, String> = serde_json::from_str(body.as_str())?;
        if let Some((id, _)) = hashes.iter().find(|(_, hash)| !is_sha256_hex(hash)) {
            return Err(LibraryError::validation(
                format!("credential for {} in {} is not a SHA-256 hex digest", id, path).as_str(), None));
        }
        Ok(Self::from_map(hashes))
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }
}

impl CredentialStore for StaticCredentialStore {
    fn has_credential(&self, id: &str) -> bool {
        self.hashes.contains_key(id)
    }

    fn get_hash(&self, id: &str) -> Option<String> {
        self.hashes.get(id).cloned()
    }
}

pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

fn is_sha256_hex(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env;
    use std::fs;
    use crate::auth::credentials::{CredentialStore, sha256_hex, StaticCredentialStore};

    const SECRET_HASH: &str = "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b";

    #[tokio::test]
    async fn test_should_hash_as_lowercase_hex() {
        assert_eq!(SECRET_HASH, sha256_hex("secret").as_str());
        assert_eq!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855", sha256_hex("").as_str());
        assert_eq!(64, sha256_hex("any").len());
    }

    #[tokio::test]
    async fn test_should_verify_credentials() {
        let store = StaticCredentialStore::from_map(
            HashMap::from([("admin".to_string(), SECRET_HASH.to_ascii_uppercase())]));
        assert!(store.has_credential("admin"));
        assert!(!store.has_credential("guest"));
        assert_eq!(Some(SECRET_HASH.to_string()), store.get_hash("admin"));
        assert!(store.verify("admin", "secret"));
        assert!(!store.verify("admin", "Secret"));
        assert!(!store.verify("guest", "secret"));
    }

    #[tokio::test]
    async fn test_should_load_json_file() {
        let path = env::temp_dir().join(format!("lms-credentials-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, format!(r#"{{"admin": "{}"}}"#, SECRET_HASH)).expect("should write file");
        let store = StaticCredentialStore::from_json_file(path.to_str().expect("should be utf8")).expect("should load");
        assert_eq!(1, store.len());
        assert!(store.verify("admin", "secret"));

        fs::write(&path, r#"{"admin": "plain-text"}"#).expect("should write file");
        assert!(StaticCredentialStore::from_json_file(path.to_str().expect("should be utf8")).is_err());
        let _ = fs::remove_file(&path);
    }
}
