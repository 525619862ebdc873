// src/services/auth_service.rs
use crate::{error::AppResult, models::user::User, state::School};

/// Valida nome + senha. Não altera nada no estado.
/// Em caso de falha devolve sempre `InvalidCredentials`, sem dizer qual campo errou.
pub fn authenticate(school: &School, name: &str, password: &str) -> AppResult<User> {
    tracing::debug!("Tentativa de login para '{}'", name);
    match school.users.validate_user(name, password) {
        Ok(user) => {
            tracing::info!("Login de '{}' (ID {}) como {}", user.name, user.id, user.type_label());
            Ok(user.clone())
        }
        Err(e) => {
            tracing::warn!("Login falhou para '{}'", name);
            Err(e)
        }
    }
}
