//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use aythana_cart::cart::CartStore;
use aythana_storage::Store;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => tracing::warn!(
                            path = %config_path.display(),
                            error = %format!("{:#}", e),
                            "skipping unreadable config"
                        ),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory holding the persisted cart.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        match self.config.storage.dir {
            Some(ref dir) => Ok(self.resolve_path(dir)),
            None => dirs::data_local_dir()
                .map(|dir| dir.join("aythana"))
                .context("No local data directory on this platform; set storage.dir in the config"),
        }
    }

    /// Open the cart store described by the config.
    pub fn open_cart_store(&self) -> Result<CartStore> {
        let dir = self.storage_dir()?;
        let store = Store::open_dir(&dir)
            .with_context(|| format!("Failed to open cart storage at {}", dir.display()))?;
        let catalog = self.config.catalog()?;
        let format = self.config.number_format()?;

        self.output
            .debug(&format!("Cart storage: {}", dir.display()));

        Ok(CartStore::load_with_key(store, self.config.storage.key.clone(), catalog)
            .with_format(format))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}
