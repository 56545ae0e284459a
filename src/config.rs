//! Drawer configuration baked in at build time.
//!
//! A WASM bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled:
//!
//! - `API_BASE_URL`: account service origin (default `http://localhost:8080`)
//! - `DRAWER_MOBILE_BREAKPOINT`: widest viewport treated as mobile, in CSS px (default 768)
//! - `DRAWER_AGENCY`: branch code shown in the profile block (default `0001`)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_AGENCY: &str = "0001";

/// Errors raised while parsing build-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid DRAWER_MOBILE_BREAKPOINT: {0}")]
    InvalidBreakpoint(String),
    #[error("invalid API_BASE_URL: {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    pub api_base_url: String,
    pub mobile_breakpoint: f64,
    pub agency: String,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            agency: DEFAULT_AGENCY.to_owned(),
        }
    }
}

impl DrawerConfig {
    /// Build config from the compile-time environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a provided value fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("API_BASE_URL"),
            option_env!("DRAWER_MOBILE_BREAKPOINT"),
            option_env!("DRAWER_AGENCY"),
        )
    }

    /// Build config from raw optional values; `None` or blank selects the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not http(s) or the breakpoint is not
    /// a positive number.
    pub fn from_values(
        api_base_url: Option<&str>,
        mobile_breakpoint: Option<&str>,
        agency: Option<&str>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            mobile_breakpoint: parse_breakpoint(mobile_breakpoint)?,
            agency: non_blank(agency).unwrap_or(DEFAULT_AGENCY).to_owned(),
        })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(url) = non_blank(raw) else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(url.to_owned()));
    }
    Ok(url.trim_end_matches('/').to_owned())
}

fn parse_breakpoint(raw: Option<&str>) -> Result<f64, ConfigError> {
    let Some(value) = non_blank(raw) else {
        return Ok(DEFAULT_MOBILE_BREAKPOINT);
    };
    match value.parse::<f64>() {
        Ok(px) if px.is_finite() && px > 0.0 => Ok(px),
        _ => Err(ConfigError::InvalidBreakpoint(value.to_owned())),
    }
}
