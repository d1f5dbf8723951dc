use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Password must be at least {min} characters")]
    TooShort { min: usize },
    #[error("Failed to access password file")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse password file")]
    Serde(#[from] serde_json::Error),
}

/// Salted SHA-256 digest of the admin password, stored as hex.
#[derive(Serialize, Deserialize, Clone)]
struct StoredCredentials {
    salt: String,
    hash: String,
}

impl StoredCredentials {
    fn from_password(password: &str) -> Self {
        let mut salt = [0u8; 16];
        rand::rng().fill(&mut salt[..]);
        let salt = to_hex(&salt);
        let hash = digest(&salt, password);
        StoredCredentials { salt, hash }
    }

    fn matches(&self, password: &str) -> bool {
        let candidate = digest(&self.salt, password);
        bool::from(candidate.as_bytes().ct_eq(self.hash.as_bytes()))
    }
}

fn digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    to_hex(&hasher.finalize())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Admin credentials, optionally persisted to a JSON file.
///
/// Without a saved file the default admin password is accepted until it is
/// changed.
pub struct PasswordStore {
    path: Option<PathBuf>,
    credentials: RwLock<StoredCredentials>,
}

impl PasswordStore {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, CredentialError> {
        let path = path.into();

        let credentials = if path.is_file() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            info!(
                "no password file at {}, using the default admin password",
                path.display()
            );
            StoredCredentials::from_password(DEFAULT_ADMIN_PASSWORD)
        };

        Ok(PasswordStore {
            path: Some(path),
            credentials: RwLock::new(credentials),
        })
    }

    pub fn in_memory() -> Self {
        PasswordStore {
            path: None,
            credentials: RwLock::new(StoredCredentials::from_password(DEFAULT_ADMIN_PASSWORD)),
        }
    }

    pub fn verify(&self, password: &str) -> bool {
        self.credentials.read().matches(password)
    }

    pub fn change(&self, new_password: &str) -> Result<(), CredentialError> {
        if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CredentialError::TooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        let credentials = StoredCredentials::from_password(new_password);

        if let Some(path) = &self.path {
            save(path, &credentials)?;
            info!("admin password hash written to {}", path.display());
        }

        *self.credentials.write() = credentials;
        Ok(())
    }
}

fn save(path: &Path, credentials: &StoredCredentials) -> Result<(), CredentialError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, serde_json::to_string_pretty(credentials)?)?;
    Ok(())
}
