// src/store/users.rs
use super::ids::IdAllocator;
use crate::{
    error::{AppError, AppResult},
    models::{
        ids::UserId,
        user::{NewUser, User},
    },
};
use std::collections::BTreeMap;

/// Guarda todas as contas (alunos, funcionários e responsáveis).
/// O BTreeMap mantém a ordem de inserção, já que os IDs são crescentes.
#[derive(Debug, Default)]
pub struct UserRepository {
    users: BTreeMap<UserId, User>,
    ids: IdAllocator,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atribui um ID ao utilizador, guarda-o e devolve o ID.
    pub fn add_user(&mut self, new_user: NewUser) -> UserId {
        let id = UserId(self.ids.next());
        tracing::debug!("Guardando utilizador '{}' com ID {}", new_user.name, id);
        self.users.insert(
            id,
            User {
                id,
                name: new_user.name,
                password: new_user.password,
                kind: new_user.kind,
            },
        );
        id
    }

    /// Procura o primeiro utilizador com este nome e compara a senha.
    /// Os nomes não são únicos: ganha o primeiro cadastrado.
    pub fn validate_user(&self, name: &str, password: &str) -> AppResult<&User> {
        let selected = self
            .users
            .values()
            .find(|user| user.name == name)
            .ok_or(AppError::InvalidCredentials)?;

        if !selected.check_password(password) {
            return Err(AppError::InvalidCredentials);
        }

        Ok(selected)
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn get_student(&self, id: UserId) -> Option<&User> {
        self.get(id).filter(|user| user.is_student())
    }

    pub fn students(&self) -> Vec<&User> {
        self.users.values().filter(|u| u.is_student()).collect()
    }

    pub fn employees(&self) -> Vec<&User> {
        self.users.values().filter(|u| u.is_employee()).collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::Position;

    #[test]
    fn ids_follow_insertion() {
        let mut repo = UserRepository::new();
        let a = repo.add_user(NewUser::student("João", "123"));
        let b = repo.add_user(NewUser::employee("Fernanda", "123", Position::Director));
        assert_eq!(a, UserId(1));
        assert_eq!(b, UserId(2));
        assert_eq!(repo.students().len(), 1);
        assert_eq!(repo.employees()[0].name, "Fernanda");
    }

    #[test]
    fn first_name_match_wins() {
        let mut repo = UserRepository::new();
        repo.add_user(NewUser::student("Ana", "aaa"));
        repo.add_user(NewUser::student("Ana", "bbb"));

        assert_eq!(repo.validate_user("Ana", "aaa").unwrap().id, UserId(1));
        // A segunda "Ana" nunca é alcançada pelo login
        assert!(matches!(
            repo.validate_user("Ana", "bbb"),
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            repo.validate_user("Beto", "aaa"),
            Err(AppError::InvalidCredentials)
        ));
    }
}
