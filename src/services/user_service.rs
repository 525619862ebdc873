// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        ids::{ClassId, UserId},
        user::{NewUser, Position, User, UserKind},
    },
    state::School,
};

/// Cadastra um utilizador e devolve o ID atribuído.
/// Um responsável só pode ser criado se o aluno indicado existir.
pub fn register_user(school: &mut School, new_user: NewUser) -> AppResult<UserId> {
    tracing::info!("Tentando cadastrar utilizador: {}", new_user.name);

    if new_user.name.trim().is_empty() {
        return Err(AppError::UserCreation("O nome não pode ser vazio.".into()));
    }
    if new_user.password.trim().is_empty() {
        return Err(AppError::UserCreation("A senha não pode ser vazia.".into()));
    }

    if let UserKind::Employee { position } = &new_user.kind {
        match position {
            Position::Professor { subject } if subject.trim().is_empty() => {
                return Err(AppError::UserCreation(
                    "O professor precisa de uma disciplina.".into(),
                ));
            }
            Position::Other(title) if title.trim().is_empty() => {
                return Err(AppError::UserCreation("O cargo não pode ser vazio.".into()));
            }
            _ => {}
        }
    }

    if let UserKind::Guardian { student } = &new_user.kind {
        if school.users.get_student(*student).is_none() {
            tracing::warn!(
                "Falha ao cadastrar responsável '{}': aluno {} inexistente.",
                new_user.name,
                student
            );
            return Err(AppError::InvalidEnrollment(format!(
                "o aluno {} não existe",
                student
            )));
        }
    }

    let id = school.users.add_user(new_user);
    tracing::info!("Utilizador cadastrado com ID {}", id);
    Ok(id)
}

pub fn find_user(school: &School, id: UserId) -> AppResult<&User> {
    school
        .users
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Utilizador {}", id)))
}

pub fn find_student(school: &School, id: UserId) -> AppResult<&User> {
    school
        .users
        .get_student(id)
        .ok_or_else(|| AppError::NotFound(format!("Aluno {}", id)))
}

/// Todos os alunos, por ordem de cadastro.
pub fn list_students(school: &School) -> Vec<&User> {
    school.users.students()
}

/// Funcionários que dão esta turma.
pub fn employees_teaching(school: &School, class_id: ClassId) -> AppResult<Vec<&User>> {
    let sclass = school.classes.get(class_id)?;
    Ok(school
        .users
        .employees()
        .into_iter()
        .filter(|employee| employee.id == sclass.roster.teacher)
        .collect())
}
