use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`PresenterSettings::validate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("presenter.{0} must not be empty")]
    Empty(&'static str),

    /// The placeholder is spliced into a quoted `onerror` script literal.
    #[error("presenter.placeholder_image must not contain quotes or backslashes")]
    UnsafePlaceholder,
}

/// Presentation knobs that are not part of the record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterSettings {
    /// Image shown when a record has no images or its image fails to load.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    /// Prefix for formatted prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Page that detail links point at; the record id goes in `?id=`.
    #[serde(default = "default_detail_page")]
    pub detail_page: String,
}

impl PresenterSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.placeholder_image.trim().is_empty() {
            return Err(SettingsError::Empty("placeholder_image"));
        }
        if self
            .placeholder_image
            .contains(['\'', '"', '\\'])
        {
            return Err(SettingsError::UnsafePlaceholder);
        }
        if self.detail_page.trim().is_empty() {
            return Err(SettingsError::Empty("detail_page"));
        }
        Ok(())
    }
}

impl Default for PresenterSettings {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            currency_symbol: default_currency_symbol(),
            detail_page: default_detail_page(),
        }
    }
}

fn default_placeholder_image() -> String {
    "images/placeholder.png".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_detail_page() -> String {
    "vehicle.html".to_string()
}
