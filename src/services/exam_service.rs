// src/services/exam_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        exam::{is_valid_grade, Exam, NewExam, StudentExamResult},
        ids::{ClassId, ExamId, UserId},
    },
    state::School,
};

/// Agenda uma prova para a turma. Cada aluno matriculado agora
/// recebe uma linha sem nota; quem entrar depois é tratado na matrícula.
pub fn schedule_exam(school: &mut School, class_id: ClassId, new_exam: NewExam) -> AppResult<ExamId> {
    if new_exam.name.trim().is_empty() {
        return Err(AppError::InvalidInput("A prova precisa de um nome.".into()));
    }
    let sclass = school.classes.get(class_id)?;
    let id = school.exams.create_exam(sclass, new_exam);
    tracing::info!("Prova {} agendada para a turma {}", id, class_id);
    Ok(id)
}

/// Lança ou corrige a nota de um aluno.
pub fn submit_grade(school: &mut School, exam_id: ExamId, student_id: UserId, grade: f64) -> AppResult<()> {
    if !is_valid_grade(grade) {
        return Err(AppError::InvalidGrade(grade));
    }
    school.exams.get(exam_id)?;
    school.exams.register_grade(exam_id, student_id, grade).map_err(|e| {
        tracing::warn!("Nota recusada (prova {}, aluno {}): {}", exam_id, student_id, e);
        e
    })?;
    tracing::info!("Nota {} lançada para o aluno {} na prova {}", grade, student_id, exam_id);
    Ok(())
}

/// Fecha a digitação de notas da prova.
pub fn close_grading(school: &mut School, exam_id: ExamId) -> AppResult<()> {
    school.exams.close_grading(exam_id)?;
    tracing::info!("Notas da prova {} fechadas.", exam_id);
    Ok(())
}

/// Digitação em lote: valida todas as notas, lança-as e fecha a prova.
/// Se alguma falhar, nada é alterado.
pub fn grade_exam(school: &mut School, exam_id: ExamId, grades: &[(UserId, f64)]) -> AppResult<()> {
    let exam = school.exams.get(exam_id)?;
    if exam.grades_submitted {
        return Err(AppError::GradingClosed(exam_id));
    }
    for &(student_id, grade) in grades {
        if !is_valid_grade(grade) {
            return Err(AppError::InvalidGrade(grade));
        }
        if !school.exams.has_result(exam_id, student_id) {
            return Err(AppError::StudentNotInExam {
                exam: exam_id,
                student: student_id,
            });
        }
    }

    for &(student_id, grade) in grades {
        school.exams.register_grade(exam_id, student_id, grade)?;
    }
    school.exams.close_grading(exam_id)?;
    tracing::info!("{} nota(s) lançada(s) e prova {} fechada.", grades.len(), exam_id);
    Ok(())
}

pub fn find_exam(school: &School, exam_id: ExamId) -> AppResult<&Exam> {
    school.exams.get(exam_id)
}

pub fn exams_for_class(school: &School, class_id: ClassId) -> Vec<&Exam> {
    school.exams.exams_for_class(class_id)
}

pub fn exams_for_class_without_grades(school: &School, class_id: ClassId) -> Vec<&Exam> {
    school.exams.exams_for_class_without_grades(class_id)
}

pub fn exam_results_for_student_in_class(
    school: &School,
    student_id: UserId,
    class_id: ClassId,
) -> Vec<&StudentExamResult> {
    school.exams.results_for_student_in_class(student_id, class_id)
}

pub fn exam_results_for_exam(school: &School, exam_id: ExamId) -> Vec<&StudentExamResult> {
    school.exams.results_for_exam(exam_id)
}
