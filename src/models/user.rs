// src/models/user.rs
use super::ids::UserId;
use crate::error::{AppError, AppResult};
use serde::Serialize;

/// Cargo de um funcionário. Só o professor tem disciplina.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Position {
    Professor { subject: String },
    Director,
    Driver,
    Janitor,
    // Qualquer outro cargo administrativo (ex: "secretária")
    Other(String),
}

impl Position {
    /// Converte o cargo digitado ("professor", "diretor", ...) num `Position`.
    /// O professor exige disciplina; nos outros cargos ela é ignorada.
    pub fn from_title(title: &str, subject: Option<&str>) -> AppResult<Self> {
        let title = title.trim();
        match title.to_lowercase().as_str() {
            "" => Err(AppError::UserCreation("O cargo não pode ser vazio.".into())),
            "professor" => match subject.map(str::trim).filter(|s| !s.is_empty()) {
                Some(subject) => Ok(Position::Professor {
                    subject: subject.to_string(),
                }),
                None => Err(AppError::UserCreation(
                    "O professor precisa de uma disciplina.".into(),
                )),
            },
            "diretor" => Ok(Position::Director),
            "motorista" => Ok(Position::Driver),
            "zelador" => Ok(Position::Janitor),
            _ => Ok(Position::Other(title.to_string())),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Position::Professor { .. } => "professor",
            Position::Director => "diretor",
            Position::Driver => "motorista",
            Position::Janitor => "zelador",
            Position::Other(title) => title,
        }
    }

    /// Professores e diretores têm o menu completo (turmas, provas, matrículas).
    /// Os restantes funcionários só registam presença.
    pub fn can_manage_classes(&self) -> bool {
        matches!(self, Position::Professor { .. } | Position::Director)
    }
}

/// Variantes de utilizador. O match exaustivo obriga a tratar cada tipo novo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum UserKind {
    Student,
    Employee { position: Position },
    // Referência (não-dona) ao aluno pelo qual o responsável responde
    Guardian { student: UserId },
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    // Comparada só por igualdade; nunca sai em relatórios
    #[serde(skip)]
    pub password: String,
    pub kind: UserKind,
}

impl User {
    pub fn is_student(&self) -> bool {
        matches!(self.kind, UserKind::Student)
    }

    pub fn is_employee(&self) -> bool {
        matches!(self.kind, UserKind::Employee { .. })
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }

    /// Rótulo mostrado após o login e nas listagens.
    pub fn type_label(&self) -> String {
        match &self.kind {
            UserKind::Student => "Aluno".to_string(),
            UserKind::Guardian { .. } => "Responsável".to_string(),
            UserKind::Employee { position } => match position {
                Position::Professor { subject } => {
                    format!("Funcionário (professor de {})", subject)
                }
                Position::Director => "Funcionário (diretor)".to_string(),
                other => format!("Funcionário ({})", other.title()),
            },
        }
    }
}

/// Dados de cadastro, antes de o utilizador receber um ID.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub kind: UserKind,
}

impl NewUser {
    pub fn student(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            kind: UserKind::Student,
        }
    }

    pub fn employee(
        name: impl Into<String>,
        password: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            kind: UserKind::Employee { position },
        }
    }

    pub fn guardian(name: impl Into<String>, password: impl Into<String>, student: UserId) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            kind: UserKind::Guardian { student },
        }
    }
}
