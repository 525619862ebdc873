// src/state.rs
use crate::{
    error::AppResult,
    models::user::{NewUser, Position},
    services::user_service,
    store::{ActivityRepository, AttendanceRepository, ClassRepository, ExamRepository, UserRepository},
};

/// Estado da escola: todos os repositórios juntos.
/// Criado uma vez no arranque e passado explicitamente a cada serviço,
/// nunca guardado numa variável global.
#[derive(Debug, Default)]
pub struct School {
    pub(crate) users: UserRepository,
    pub(crate) classes: ClassRepository,
    pub(crate) activities: ActivityRepository,
    pub(crate) exams: ExamRepository,
    pub(crate) attendance: AttendanceRepository,
}

impl School {
    pub fn new() -> Self {
        Self::default()
    }

    // Acesso só de leitura; as alterações passam pelos serviços.

    pub fn users(&self) -> &UserRepository {
        &self.users
    }

    pub fn classes(&self) -> &ClassRepository {
        &self.classes
    }

    pub fn activities(&self) -> &ActivityRepository {
        &self.activities
    }

    pub fn exams(&self) -> &ExamRepository {
        &self.exams
    }

    pub fn attendance(&self) -> &AttendanceRepository {
        &self.attendance
    }
}

/// Carrega o banco de exemplos (alunos, funcionários e uma responsável).
pub fn seed_demo_data(school: &mut School) -> AppResult<()> {
    tracing::info!("Carregando banco de exemplos...");

    let joao = user_service::register_user(school, NewUser::student("João", "123"))?;
    user_service::register_user(school, NewUser::student("Maria", "123"))?;

    user_service::register_user(
        school,
        NewUser::employee(
            "Carlos",
            "123",
            Position::Professor {
                subject: "Matemática".into(),
            },
        ),
    )?;
    user_service::register_user(school, NewUser::employee("Fernanda", "123", Position::Director))?;
    user_service::register_user(school, NewUser::employee("José", "123", Position::Driver))?;

    // Responsável ligada ao João
    user_service::register_user(school, NewUser::guardian("Ana", "123", joao))?;

    tracing::info!("Banco de exemplos carregado ({} utilizadores).", school.users.len());
    Ok(())
}
