//! Helper settings
//!
//! Settings can be built in code or read from a TOML fragment:
//!
//! ```toml
//! sample_size = 5
//! ```

use crate::error::{AssertionError, Result};
use serde::{Deserialize, Serialize};

/// Rows shown in a failure report unless configured otherwise
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Settings for [`DatabaseAssertions`](crate::DatabaseAssertions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssertionSettings {
	/// Maximum number of rows rendered in a failure report
	pub sample_size: usize,
}

impl Default for AssertionSettings {
	fn default() -> Self {
		Self {
			sample_size: DEFAULT_SAMPLE_SIZE,
		}
	}
}

impl AssertionSettings {
	/// Parse and validate settings from TOML
	///
	/// # Examples
	///
	/// ```
	/// use dbassert_test::AssertionSettings;
	///
	/// let settings = AssertionSettings::from_toml_str("sample_size = 5").unwrap();
	/// assert_eq!(settings.sample_size, 5);
	///
	/// let defaults = AssertionSettings::from_toml_str("").unwrap();
	/// assert_eq!(defaults, AssertionSettings::default());
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self =
			toml::from_str(source).map_err(|e| AssertionError::Settings(e.to_string()))?;
		settings.validate()?;
		Ok(settings)
	}

	pub fn validate(&self) -> Result<()> {
		if self.sample_size == 0 {
			return Err(AssertionError::Settings(
				"sample_size must be at least 1".to_string(),
			));
		}
		Ok(())
	}
}
