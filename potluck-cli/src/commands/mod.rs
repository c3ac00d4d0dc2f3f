pub mod costs;
pub mod events;
pub mod item;
pub mod select;
pub mod summary;
pub mod view;

use std::path::PathBuf;

use anyhow::{Context, Result};
use potluck_core::UserId;
use potluck_core::potluck_config::PotluckConfig;
use potluck_core::store::MemoryStore;

pub use view::PageName;

/// The loaded snapshot plus who is looking at it.
pub struct Workspace {
    pub store: MemoryStore,
    pub data_path: PathBuf,
    pub user_id: Option<UserId>,
}

impl Workspace {
    pub fn load(data: Option<PathBuf>, user: Option<UserId>) -> Result<Self> {
        let config = PotluckConfig::load()?;
        let data_path = data.unwrap_or_else(|| config.data_path());

        let store = MemoryStore::load(&data_path)
            .with_context(|| format!("Failed to load {}", data_path.display()))?;

        Ok(Workspace {
            store,
            data_path,
            user_id: user.or(config.user_id),
        })
    }

    pub fn require_user(&self) -> Result<UserId> {
        self.user_id.ok_or_else(|| {
            anyhow::anyhow!(
                "No user selected.\n\n\
                Pass one with:\n  \
                potluck --user <id> ...\n\n\
                or set user_id in {}",
                PotluckConfig::config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the potluck config file".to_string())
            )
        })
    }

    pub fn save(&self) -> Result<()> {
        self.store
            .save(&self.data_path)
            .with_context(|| format!("Failed to save {}", self.data_path.display()))
    }
}
