//! Credential loading from the process environment.

use anyhow::{Result, bail};

use crate::runtime::Runtime;

/// Environment variable names, one per vendor.
pub const ALPHA_VANTAGE_KEY: &str = "ALPHA_VANTAGE_KEY";
pub const COINAPI_KEY: &str = "COINAPI_KEY";
pub const COINAPI_NAAS_KEY: &str = "COINAPI_NAAS_KEY";
pub const BIRDEYE_KEY: &str = "BIRDEYE_KEY";

/// One API key per vendor, loaded once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub alpha_vantage_key: String,
    pub coinapi_key: String,
    pub coinapi_naas_key: String,
    pub birdeye_key: String,
}

impl Config {
    /// Reads all four credentials. A variable that is set but empty counts
    /// as missing, and every absent name is reported in one error.
    pub fn from_runtime<R: Runtime>(runtime: &R) -> Result<Self> {
        let mut missing = Vec::new();

        let alpha_vantage_key = read_key(runtime, ALPHA_VANTAGE_KEY, &mut missing);
        let coinapi_key = read_key(runtime, COINAPI_KEY, &mut missing);
        let coinapi_naas_key = read_key(runtime, COINAPI_NAAS_KEY, &mut missing);
        let birdeye_key = read_key(runtime, BIRDEYE_KEY, &mut missing);

        if !missing.is_empty() {
            bail!("One or more API keys are missing: {}", missing.join(", "));
        }

        Ok(Self {
            alpha_vantage_key,
            coinapi_key,
            coinapi_naas_key,
            birdeye_key,
        })
    }
}

fn read_key<R: Runtime>(
    runtime: &R,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match runtime.env_var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}
