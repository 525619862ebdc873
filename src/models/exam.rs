// src/models/exam.rs
use super::ids::{ClassId, ExamId, UserId};
use chrono::NaiveDate;
use serde::Serialize;

/// Nota máxima. Também é a nota dada a quem entra na turma
/// depois de uma prova já ter as notas fechadas.
pub const MAX_GRADE: f64 = 10.0;

pub fn is_valid_grade(grade: f64) -> bool {
    grade.is_finite() && (0.0..=MAX_GRADE).contains(&grade)
}

#[derive(Debug, Clone, Serialize)]
pub struct Exam {
    pub id: ExamId,
    pub class_id: ClassId,
    pub name: String,
    pub date: NaiveDate,
    // Falso até o professor fechar a digitação das notas
    pub grades_submitted: bool,
}

impl Exam {
    /// Situação da prova na visão da turma.
    pub fn progress(&self, today: NaiveDate) -> ExamProgress {
        if self.date > today {
            ExamProgress::Scheduled
        } else if !self.grades_submitted {
            ExamProgress::AwaitingGrades
        } else {
            ExamProgress::GradesSubmitted
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewExam {
    pub name: String,
    pub date: NaiveDate,
}

/// Uma linha por par (prova, aluno). `grade == None` = ainda sem nota.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentExamResult {
    pub exam_id: ExamId,
    pub student_id: UserId,
    pub grade: Option<f64>,
}

impl StudentExamResult {
    /// Situação derivada para o boletim (não é guardada).
    pub fn status(&self, exam_date: NaiveDate, today: NaiveDate) -> ExamStatus {
        match self.grade {
            Some(grade) => ExamStatus::Graded(grade),
            None if exam_date > today => ExamStatus::Scheduled,
            None => ExamStatus::NotYetGraded,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ExamStatus {
    Scheduled,
    NotYetGraded,
    Graded(f64),
}

impl ExamStatus {
    pub fn label(&self) -> String {
        match self {
            ExamStatus::Scheduled => "prova agendada".to_string(),
            ExamStatus::NotYetGraded => "nota não registrada".to_string(),
            ExamStatus::Graded(grade) => format!("nota {:.1}", grade),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExamProgress {
    Scheduled,
    AwaitingGrades,
    GradesSubmitted,
}

impl ExamProgress {
    pub fn label(&self) -> &'static str {
        match self {
            ExamProgress::Scheduled => "prova agendada",
            ExamProgress::AwaitingGrades => "notas não digitadas",
            ExamProgress::GradesSubmitted => "notas digitadas",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn status_is_derived_from_date_and_grade() {
        let mut result = StudentExamResult {
            exam_id: ExamId(1),
            student_id: UserId(1),
            grade: None,
        };
        assert_eq!(result.status(day(20), day(10)), ExamStatus::Scheduled);
        assert_eq!(result.status(day(10), day(10)), ExamStatus::NotYetGraded);
        result.grade = Some(7.5);
        assert_eq!(result.status(day(20), day(10)), ExamStatus::Graded(7.5));
    }

    #[test]
    fn grade_bounds() {
        assert!(is_valid_grade(0.0));
        assert!(is_valid_grade(MAX_GRADE));
        assert!(!is_valid_grade(-0.5));
        assert!(!is_valid_grade(10.01));
        assert!(!is_valid_grade(f64::NAN));
    }
}
