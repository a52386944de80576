//! CLI configuration.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use aythana_cart::cart::DEFAULT_CART_KEY;
use aythana_cart::catalog::{Catalog, Product};
use aythana_cart::checkout::ContactDetails;
use aythana_cart::NumberFormat;
use serde::{Deserialize, Serialize};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["aythana.toml", ".aythana.toml", "aythana.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Hand-off recipients.
    #[serde(default)]
    pub contact: ContactDetails,

    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Formatting and feedback.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Catalog override. Empty means the built-in Aythana catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// The product catalog in effect.
    pub fn catalog(&self) -> Result<Catalog> {
        if self.products.is_empty() {
            return Ok(Catalog::aythana());
        }
        Catalog::new(self.products.clone()).context("Invalid [[products]] in config")
    }

    /// The number format in effect.
    pub fn number_format(&self) -> Result<NumberFormat> {
        NumberFormat::from_tag(&self.display.locale).with_context(|| {
            format!(
                "display.locale must be one of: {}",
                NumberFormat::supported_tags().collect::<Vec<_>>().join(", ")
            )
        })
    }

    /// How long an add acknowledgment stays up.
    pub fn ack_delay(&self) -> Duration {
        Duration::from_millis(self.display.ack_delay_ms)
    }

    /// Check the config, returning `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.contact.phone.is_empty() || !self.contact.phone.chars().all(|c| c.is_ascii_digit())
        {
            errors.push("contact.phone must be digits only (international format)".to_string());
        }
        if !self.contact.email.contains('@') {
            errors.push(format!("contact.email '{}' is not an address", self.contact.email));
        }
        if let Err(e) = aythana_storage::validate_key(&self.storage.key) {
            errors.push(format!("storage.key: {}", e));
        }
        if let Err(e) = self.number_format() {
            errors.push(format!("{:#}", e));
        }
        if let Err(e) = self.catalog() {
            errors.push(format!("{:#}", e));
        }

        if self.display.ack_delay_ms == 0 {
            warnings.push("display.ack_delay_ms is 0; acknowledgments will not be visible".to_string());
        }
        if self.storage.key != DEFAULT_CART_KEY {
            warnings.push(format!(
                "storage.key '{}' differs from '{}'; existing carts will not be found",
                self.storage.key, DEFAULT_CART_KEY
            ));
        }

        (errors, warnings)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key the cart is stored under.
    #[serde(default = "default_key")]
    pub key: String,

    /// Storage directory (default: the platform local data dir joined with `aythana`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key: default_key(),
            dir: None,
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Locale for number formatting.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Acknowledgment duration in milliseconds.
    #[serde(default = "default_ack_delay_ms")]
    pub ack_delay_ms: u64,
}

fn default_locale() -> String {
    NumberFormat::default().tag().to_string()
}

fn default_ack_delay_ms() -> u64 {
    1500
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            ack_delay_ms: default_ack_delay_ms(),
        }
    }
}

/// Generate a default aythana.toml config file.
pub fn generate_default_config() -> String {
    let contact = ContactDetails::default();
    format!(
        r#"# Aythana cart configuration

[contact]
phone = "{phone}"
email = "{email}"

[storage]
key = "{key}"
# dir = "/path/to/cart/store"

[display]
locale = "{locale}"
ack_delay_ms = {delay}

# Uncomment to replace the built-in catalog.
# [[products]]
# id = 1
# name = "Shampoo Nutritivo"
# price = 2500
"#,
        phone = contact.phone,
        email = contact.email,
        key = DEFAULT_CART_KEY,
        locale = default_locale(),
        delay = default_ack_delay_ms(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.contact, ContactDetails::default());
        assert_eq!(config.storage.key, "aythanaCart");
        assert_eq!(config.display.locale, "es-AR");
        assert_eq!(config.ack_delay(), Duration::from_millis(1500));
        assert!(config.products.is_empty());

        let (errors, warnings) = config.validate();
        assert!(errors.is_empty(), "{:?}", errors);
        assert!(warnings.is_empty(), "{:?}", warnings);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CliConfig = toml::from_str("[display]\nlocale = \"en-US\"\n").unwrap();
        assert_eq!(config.number_format().unwrap(), NumberFormat::EN_US);
        assert_eq!(config.display.ack_delay_ms, 1500);
        assert_eq!(config.contact.phone, "549380325913");
    }

    #[test]
    fn test_catalog_override() {
        let config: CliConfig = toml::from_str(
            r#"
[[products]]
id = 10
name = "Aceite de Argán"
price = 5200
"#,
        )
        .unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.iter().next().unwrap().name, "Aceite de Argán");
    }

    #[test]
    fn test_validate_reports_errors() {
        let mut config = CliConfig::default();
        config.contact.phone = "+54 9 380".to_string();
        config.contact.email = "nobody".to_string();
        config.display.locale = "tlh".to_string();
        config.products = vec![Product::new(1, "A", 1), Product::new(1, "B", 2)];

        let (errors, _) = config.validate();
        assert_eq!(errors.len(), 4, "{:?}", errors);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aythana.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.display.ack_delay_ms = 800;
        config.save(path).unwrap();

        let loaded = CliConfig::load(path).unwrap();
        assert_eq!(loaded.display.ack_delay_ms, 800);
    }
}
