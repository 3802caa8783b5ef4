use std::env;

use anyhow::{anyhow, Context};

use crate::app::OverlapPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Whether a car may be leased twice for overlapping days
    pub overlap_policy: OverlapPolicy,
    /// Load the sample fleet on startup when the database has no cars
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let overlap_policy = match lookup("LEASE_OVERLAP_POLICY") {
            Some(value) => value
                .parse()
                .map_err(|e: String| anyhow!(e))
                .context("Invalid LEASE_OVERLAP_POLICY")?,
            None => OverlapPolicy::default(),
        };

        let seed_sample_data = lookup("SEED_SAMPLE_DATA")
            .map(|value| parse_flag(&value))
            .transpose()
            .context("Invalid SEED_SAMPLE_DATA")?
            .unwrap_or(false);

        Ok(Self {
            database_url,
            overlap_policy,
            seed_sample_data,
        })
    }
}

fn parse_flag(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(anyhow!("expected true or false, got {:?}", other)),
    }
}
