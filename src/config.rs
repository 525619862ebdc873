// src/config.rs
use crate::error::{AppError, AppResult};
use std::{env, path::PathBuf};

const DEFAULT_AUDIT_LOG: &str = "escola-audit.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Ficheiro JSON-lines do registo de auditoria; `None` desliga a escrita em disco
    pub audit_log_path: Option<PathBuf>,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            audit_log_path: Some(PathBuf::from(DEFAULT_AUDIT_LOG)),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// Lê a configuração do ambiente (e do `.env`, se existir).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual a `from_env`, mas com uma fonte de variáveis arbitrária.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let defaults = Self::default();

        let audit_log_path = match lookup("ESCOLA_AUDIT_LOG") {
            Some(path) if path.trim().is_empty() => None,
            Some(path) => Some(PathBuf::from(path.trim())),
            None => defaults.audit_log_path,
        };

        let seed_demo_data = match lookup("ESCOLA_SEED_DEMO") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                AppError::Config(format!("ESCOLA_SEED_DEMO deve ser true ou false, não '{}'", value))
            })?,
            None => defaults.seed_demo_data,
        };

        Ok(Self {
            audit_log_path,
            seed_demo_data,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "sim" | "yes" => Some(true),
        "0" | "false" | "nao" | "não" | "no" => Some(false),
        _ => None,
    }
}
