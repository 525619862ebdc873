// src/models/report.rs
// Estruturas prontas para exibição (boletim do aluno, detalhes da turma).
use super::{
    activity::Resource,
    exam::{ExamProgress, ExamStatus},
    ids::{ClassId, ExamId, UserId},
};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExamLine {
    pub exam_id: ExamId,
    pub name: String,
    pub date: NaiveDate,
    pub status: ExamStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClassReport {
    pub class_id: ClassId,
    pub name: String,
    pub schedule: NaiveTime,
    pub resources: Vec<Resource>,
    // Ordenadas por data, da mais antiga para a mais recente
    pub exams: Vec<ExamLine>,
    pub attendance: Option<f64>,
    pub sessions_held: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityLine {
    pub name: String,
    pub schedule: NaiveTime,
}

/// Boletim completo de um aluno.
#[derive(Debug, Clone, Serialize)]
pub struct StudentReport {
    pub student_id: UserId,
    pub student_name: String,
    pub classes: Vec<ClassReport>,
    pub activities: Vec<ActivityLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExamOverviewLine {
    pub exam_id: ExamId,
    pub name: String,
    pub date: NaiveDate,
    pub progress: ExamProgress,
}

/// Detalhes de uma turma, na visão do professor.
#[derive(Debug, Clone, Serialize)]
pub struct ClassOverview {
    pub class_id: ClassId,
    pub name: String,
    pub schedule: NaiveTime,
    pub n_classes_total: u32,
    pub n_classes_passed: u32,
    pub students: Vec<(UserId, String)>,
    pub exams: Vec<ExamOverviewLine>,
}
