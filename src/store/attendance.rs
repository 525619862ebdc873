// src/store/attendance.rs
use crate::models::{
    activity::SchoolClass,
    attendance::Attendance,
    ids::{ClassId, UserId},
};
use chrono::NaiveDate;

/// Lista de presenças, só de acréscimo.
/// Nada impede duas presenças no mesmo dia; quem controla isso é `hold_session`.
#[derive(Debug, Default)]
pub struct AttendanceRepository {
    rows: Vec<Attendance>,
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_presence(&mut self, student_id: UserId, class_id: ClassId, date: NaiveDate) -> Attendance {
        let row = Attendance {
            student_id,
            class_id,
            date,
        };
        self.rows.push(row.clone());
        row
    }

    pub fn count_for_student_in_class(&self, student_id: UserId, class_id: ClassId) -> usize {
        self.rows
            .iter()
            .filter(|at| at.student_id == student_id && at.class_id == class_id)
            .count()
    }

    /// Presenças / aulas dadas. `None` enquanto a turma não tiver nenhuma aula.
    pub fn percentage_for_student_in_class(&self, student_id: UserId, sclass: &SchoolClass) -> Option<f64> {
        if sclass.n_classes_passed == 0 {
            return None;
        }
        let count = self.count_for_student_in_class(student_id, sclass.id);
        Some(count as f64 / sclass.n_classes_passed as f64)
    }

    pub fn for_student(&self, student_id: UserId) -> Vec<&Attendance> {
        self.rows.iter().filter(|at| at.student_id == student_id).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
