// src/error.rs
use crate::models::ids::{ClassId, ExamId, UserId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Nome ou senha errados: nunca dizemos qual dos dois
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    #[error("Não encontrado: {0}")]
    NotFound(String),

    #[error("Aluno {student} não está cadastrado na prova {exam}")]
    StudentNotInExam { exam: ExamId, student: UserId },

    #[error("Matrícula inválida: {0}")]
    InvalidEnrollment(String),

    #[error("Aluno {student} não está matriculado na turma {class}")]
    NotEnrolled { class: ClassId, student: UserId },

    #[error("Nota inválida: {0}")]
    InvalidGrade(f64),

    #[error("As notas da prova {0} já foram digitadas")]
    GradingClosed(ExamId),

    #[error("Erro ao cadastrar utilizador: {0}")]
    UserCreation(String),

    #[error("Dados inválidos: {0}")]
    InvalidInput(String),

    #[error("Configuração inválida: {0}")]
    Config(String),

    #[error("Erro de I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de serialização: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Mensagem curta mostrada ao utilizador no terminal.
    /// O detalhe completo vai para o log.
    pub fn user_message(&self) -> String {
        tracing::debug!("Erro processado: {:?}", self);

        match self {
            AppError::InvalidCredentials => "Nome ou senha inválidos.".to_string(),
            AppError::NotFound(what) => format!("{} não encontrado(a).", what),
            AppError::StudentNotInExam { .. } => "Aluno não está cadastrado na prova.".to_string(),
            AppError::InvalidEnrollment(reason) => format!("Matrícula inválida: {}", reason),
            AppError::NotEnrolled { .. } => "Aluno não pertence a esta turma.".to_string(),
            AppError::InvalidGrade(_) => "A nota deve estar entre 0 e 10.".to_string(),
            AppError::GradingClosed(_) => "As notas desta prova já foram digitadas.".to_string(),
            AppError::UserCreation(reason) | AppError::InvalidInput(reason) => reason.clone(),
            AppError::Config(_) => "Erro de configuração.".to_string(),
            AppError::Io(_) | AppError::Json(_) => "Ocorreu um erro inesperado.".to_string(),
        }
    }
}

// Tipo Result padrão para a aplicação
pub type AppResult<T = ()> = Result<T, AppError>;
