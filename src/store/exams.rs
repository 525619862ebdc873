// src/store/exams.rs
use super::ids::IdAllocator;
use crate::{
    error::{AppError, AppResult},
    models::{
        activity::SchoolClass,
        exam::{Exam, NewExam, StudentExamResult},
        ids::{ClassId, ExamId, UserId},
    },
};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct ExamRepository {
    exams: BTreeMap<ExamId, Exam>,
    // Uma linha por par (prova, aluno)
    results: BTreeMap<(ExamId, UserId), StudentExamResult>,
    ids: IdAllocator,
}

impl ExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda a prova e cria uma linha sem nota para cada aluno
    /// matriculado *neste momento* na turma.
    pub fn create_exam(&mut self, sclass: &SchoolClass, new_exam: NewExam) -> ExamId {
        let id = ExamId(self.ids.next());
        tracing::debug!(
            "Guardando prova '{}' (ID {}) da turma {} com {} aluno(s)",
            new_exam.name,
            id,
            sclass.id,
            sclass.roster.students.len()
        );

        self.exams.insert(
            id,
            Exam {
                id,
                class_id: sclass.id,
                name: new_exam.name,
                date: new_exam.date,
                grades_submitted: false,
            },
        );

        for &student_id in &sclass.roster.students {
            self.results.insert(
                (id, student_id),
                StudentExamResult {
                    exam_id: id,
                    student_id,
                    grade: None,
                },
            );
        }

        id
    }

    /// Cria a linha (prova, aluno) se ainda não existir.
    /// Devolve `false` quando a linha já existia (fica como estava).
    pub(crate) fn add_result(&mut self, exam_id: ExamId, student_id: UserId, grade: Option<f64>) -> bool {
        if self.results.contains_key(&(exam_id, student_id)) {
            return false;
        }
        self.results.insert(
            (exam_id, student_id),
            StudentExamResult {
                exam_id,
                student_id,
                grade,
            },
        );
        true
    }

    /// Lança (ou corrige) a nota de um aluno numa prova.
    pub fn register_grade(&mut self, exam_id: ExamId, student_id: UserId, grade: f64) -> AppResult<()> {
        let result = self
            .results
            .get_mut(&(exam_id, student_id))
            .ok_or(AppError::StudentNotInExam {
                exam: exam_id,
                student: student_id,
            })?;
        result.grade = Some(grade);
        Ok(())
    }

    pub fn has_result(&self, exam_id: ExamId, student_id: UserId) -> bool {
        self.results.contains_key(&(exam_id, student_id))
    }

    pub fn get(&self, id: ExamId) -> AppResult<&Exam> {
        self.exams
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Prova {}", id)))
    }

    pub(crate) fn close_grading(&mut self, id: ExamId) -> AppResult<()> {
        let exam = self
            .exams
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Prova {}", id)))?;
        exam.grades_submitted = true;
        Ok(())
    }

    pub fn exams_for_class(&self, class_id: ClassId) -> Vec<&Exam> {
        self.exams
            .values()
            .filter(|exam| exam.class_id == class_id)
            .collect()
    }

    /// Provas da turma cujas notas ainda não foram fechadas.
    pub fn exams_for_class_without_grades(&self, class_id: ClassId) -> Vec<&Exam> {
        self.exams
            .values()
            .filter(|exam| exam.class_id == class_id && !exam.grades_submitted)
            .collect()
    }

    pub fn results_for_student_in_class(
        &self,
        student_id: UserId,
        class_id: ClassId,
    ) -> Vec<&StudentExamResult> {
        self.results
            .values()
            .filter(|result| {
                result.student_id == student_id
                    && self
                        .exams
                        .get(&result.exam_id)
                        .is_some_and(|exam| exam.class_id == class_id)
            })
            .collect()
    }

    pub fn results_for_exam(&self, exam_id: ExamId) -> Vec<&StudentExamResult> {
        self.results
            .range((exam_id, UserId(0))..=(exam_id, UserId(u64::MAX)))
            .map(|(_, result)| result)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::Roster;
    use chrono::{NaiveDate, NaiveTime};

    fn class_with(students: &[u64]) -> SchoolClass {
        let mut roster = Roster::new("7A", UserId(100), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        for &s in students {
            roster.add(UserId(s));
        }
        SchoolClass {
            id: ClassId(1),
            roster,
            resources: Vec::new(),
            n_classes_total: 10,
            n_classes_passed: 0,
        }
    }

    fn exam(name: &str) -> NewExam {
        NewExam {
            name: name.into(),
            date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
        }
    }

    #[test]
    fn create_exam_seeds_current_roster_only() {
        let mut repo = ExamRepository::new();
        let sclass = class_with(&[1, 2]);
        let id = repo.create_exam(&sclass, exam("P1"));

        let results = repo.results_for_exam(id);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.grade.is_none()));
        assert!(!repo.has_result(id, UserId(3)));
    }

    #[test]
    fn register_grade_requires_existing_row() {
        let mut repo = ExamRepository::new();
        let id = repo.create_exam(&class_with(&[1]), exam("P1"));

        repo.register_grade(id, UserId(1), 6.0).unwrap();
        repo.register_grade(id, UserId(1), 8.0).unwrap();
        assert_eq!(repo.results_for_exam(id)[0].grade, Some(8.0));

        assert!(matches!(
            repo.register_grade(id, UserId(2), 5.0),
            Err(AppError::StudentNotInExam { .. })
        ));
    }

    #[test]
    fn add_result_never_overwrites() {
        let mut repo = ExamRepository::new();
        let id = repo.create_exam(&class_with(&[1]), exam("P1"));
        repo.register_grade(id, UserId(1), 4.0).unwrap();

        assert!(!repo.add_result(id, UserId(1), Some(10.0)));
        assert_eq!(repo.results_for_exam(id)[0].grade, Some(4.0));
        assert!(repo.add_result(id, UserId(2), None));
    }

    #[test]
    fn ungraded_filter_and_close() {
        let mut repo = ExamRepository::new();
        let sclass = class_with(&[]);
        let p1 = repo.create_exam(&sclass, exam("P1"));
        let p2 = repo.create_exam(&sclass, exam("P2"));
        repo.close_grading(p1).unwrap();

        let open: Vec<ExamId> = repo
            .exams_for_class_without_grades(sclass.id)
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(open, vec![p2]);
        assert_eq!(repo.exams_for_class(sclass.id).len(), 2);
        assert!(repo.close_grading(ExamId(42)).is_err());
    }
}
