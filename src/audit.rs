// src/audit.rs
//
// Registo de auditoria: quem fez o quê e quando.
// Funciona como middleware explícito à volta de qualquer operação do núcleo.
use crate::{
    error::AppResult,
    models::{ids::UserId, user::User},
};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum AuditOutcome {
    Ok,
    Rejected(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub actor: String,
    pub actor_id: UserId,
    pub timestamp: DateTime<Local>,
    pub action: String,
    pub outcome: AuditOutcome,
}

#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    // Ficheiro JSON-lines opcional
    path: Option<PathBuf>,
}

impl AuditLog {
    /// Registo só em memória.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            path: Some(path.into()),
        }
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Guarda a entrada. Falhas ao escrever no ficheiro só geram aviso.
    pub fn record(&mut self, actor: &User, action: &str, outcome: AuditOutcome) {
        let entry = AuditEntry {
            actor: actor.name.clone(),
            actor_id: actor.id,
            timestamp: Local::now(),
            action: action.to_string(),
            outcome,
        };
        tracing::info!(
            actor = %entry.actor,
            action = %entry.action,
            "[{}@{}] {}",
            entry.actor,
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.action
        );

        if let Some(path) = &self.path {
            if let Err(e) = append_line(path, &entry) {
                tracing::warn!("Não foi possível escrever no registo de auditoria {}: {}", path.display(), e);
            }
        }
        self.entries.push(entry);
    }
}

fn append_line(path: &Path, entry: &AuditEntry) -> AppResult<()> {
    let line = serde_json::to_string(entry)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// Executa `op` e regista (ator, hora, ação, resultado).
/// O resultado de `op` é devolvido sem alteração.
pub fn audited<T>(
    log: &mut AuditLog,
    actor: &User,
    action: &str,
    op: impl FnOnce() -> AppResult<T>,
) -> AppResult<T> {
    let result = op();
    let outcome = match &result {
        Ok(_) => AuditOutcome::Ok,
        Err(e) => AuditOutcome::Rejected(e.to_string()),
    };
    log.record(actor, action, outcome);
    result
}
