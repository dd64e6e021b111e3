//! Price Rule Providers
//!
//! Read-only sources of price rules. Callers take a snapshot and hand it to
//! the engine; the engine never holds a provider.

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::PriceRule;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable list of rules shared across concurrent calculations
pub type RuleSnapshot = Arc<[PriceRule]>;

#[async_trait]
pub trait PriceRuleProvider: Send + Sync {
    /// Current rule snapshot, in stored order
    async fn load_rules(&self) -> AppResult<RuleSnapshot>;

    /// Find rule by id
    async fn find_by_id(&self, id: &str) -> AppResult<Option<PriceRule>> {
        let rules = self.load_rules().await?;
        Ok(rules.iter().find(|rule| rule.id == id).cloned())
    }

    /// Re-read the underlying source; returns the number of rules loaded.
    /// Sources without backing storage keep their snapshot.
    async fn reload(&self) -> AppResult<usize> {
        Ok(self.load_rules().await?.len())
    }
}

/// Fixed in-memory rule set
#[derive(Debug, Clone)]
pub struct InMemoryRuleProvider {
    rules: RuleSnapshot,
}

impl InMemoryRuleProvider {
    pub fn new(rules: Vec<PriceRule>) -> Self {
        Self {
            rules: rules.into(),
        }
    }
}

#[async_trait]
impl PriceRuleProvider for InMemoryRuleProvider {
    async fn load_rules(&self) -> AppResult<RuleSnapshot> {
        Ok(self.rules.clone())
    }
}

/// Rules stored as a JSON array on disk
///
/// Keeps the last good snapshot; a failed reload leaves it untouched.
#[derive(Debug)]
pub struct JsonFileRuleProvider {
    path: PathBuf,
    snapshot: RwLock<RuleSnapshot>,
}

impl JsonFileRuleProvider {
    /// Read and parse `path`; fails if the file is missing or invalid
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let rules = read_rules(&path).await?;
        tracing::info!(path = %path.display(), count = rules.len(), "Price rules loaded");

        Ok(Self {
            path,
            snapshot: RwLock::new(rules.into()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PriceRuleProvider for JsonFileRuleProvider {
    async fn load_rules(&self) -> AppResult<RuleSnapshot> {
        Ok(self.snapshot.read().clone())
    }

    async fn reload(&self) -> AppResult<usize> {
        let rules = match read_rules(&self.path).await {
            Ok(rules) => rules,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Price rule reload failed, keeping previous rules"
                );
                return Err(e);
            }
        };

        let count = rules.len();
        *self.snapshot.write() = rules.into();
        tracing::info!(path = %self.path.display(), count, "Price rules reloaded");
        Ok(count)
    }
}

async fn read_rules(path: &Path) -> AppResult<Vec<PriceRule>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        AppError::storage(format!("Failed to read {}: {}", path.display(), e))
            .with_detail("path", path.display().to_string())
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::invalid_rules(format!("Invalid price rules in {}: {}", path.display(), e))
            .with_detail("path", path.display().to_string())
            .with_detail("line", e.line())
    })
}
