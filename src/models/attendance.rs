// src/models/attendance.rs
use super::ids::{ClassId, UserId};
use chrono::NaiveDate;
use serde::Serialize;

/// Uma linha por presença registada. Só se acrescentam linhas, nunca se alteram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendance {
    pub student_id: UserId,
    pub class_id: ClassId,
    pub date: NaiveDate,
}

/// Resultado de uma aula dada (`presence_service::hold_session`).
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub class_id: ClassId,
    // Número da aula depois do incremento
    pub session_number: u32,
    pub present: Vec<UserId>,
    pub absent: Vec<UserId>,
}
