//! Runtime configuration for annotation forms.
//!
//! Supported environment variables:
//! - `BIOBANK_ANNOTATION_DEFAULT_REQUIRED`: `true`/`false`, used when an
//!   annotation type does not say whether it is required
//! - `BIOBANK_UTC_OFFSET_MINUTES`: wall-clock offset of date-time inputs
//!   (range: -720..=840, default 0)

use chrono::{FixedOffset, Offset, Utc};

pub const DEFAULT_REQUIRED_VAR: &str = "BIOBANK_ANNOTATION_DEFAULT_REQUIRED";
pub const UTC_OFFSET_VAR: &str = "BIOBANK_UTC_OFFSET_MINUTES";

const MIN_OFFSET_MINUTES: i32 = -12 * 60;
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationFormConfig {
    /// Fallback for annotation types without a `required` flag
    pub default_required: Option<bool>,
    /// Offset the date and time inputs are expressed in
    pub utc_offset: FixedOffset,
}

impl Default for AnnotationFormConfig {
    fn default() -> Self {
        Self {
            default_required: None,
            utc_offset: Utc.fix(),
        }
    }
}

impl AnnotationFormConfig {
    pub fn with_default_required(mut self, required: bool) -> Self {
        self.default_required = Some(required);
        self
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`; malformed values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup(DEFAULT_REQUIRED_VAR) {
            match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => config.default_required = Some(true),
                "false" | "0" | "no" => config.default_required = Some(false),
                _ => tracing::warn!(
                    val = %val,
                    "{} is not a boolean, ignoring",
                    DEFAULT_REQUIRED_VAR
                ),
            }
        }

        if let Some(val) = lookup(UTC_OFFSET_VAR) {
            match val.trim().parse::<i32>() {
                Ok(minutes) if (MIN_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) => {
                    if let Some(offset) = FixedOffset::east_opt(minutes * 60) {
                        config.utc_offset = offset;
                        tracing::info!(minutes, "Applied {} environment variable", UTC_OFFSET_VAR);
                    }
                }
                Ok(minutes) => tracing::warn!(
                    minutes,
                    "{} out of range [-720, 840], ignoring",
                    UTC_OFFSET_VAR
                ),
                Err(_) => tracing::warn!(
                    val = %val,
                    "{} is not a valid i32, ignoring",
                    UTC_OFFSET_VAR
                ),
            }
        }

        config
    }
}
