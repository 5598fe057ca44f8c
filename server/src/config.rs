use anyhow::{Result, anyhow};

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub seed_on_start: bool,
}

impl AppConfig {
    /// Reads `CORS_ALLOWED_ORIGINS` and `SEED_ON_START` from the environment.
    pub fn load() -> Result<Self> {
        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
        let seed_on_start = match std::env::var("SEED_ON_START") {
            Ok(raw) => parse_flag("SEED_ON_START", &raw)?,
            Err(_) => false,
        };
        Ok(Self {
            cors_allowed_origins,
            seed_on_start,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("invalid boolean {other:?} for {key}")),
    }
}
