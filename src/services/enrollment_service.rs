// src/services/enrollment_service.rs
//
// Matrícula tardia: um aluno que entra numa turma com provas e aulas já
// realizadas recebe as linhas que lhe faltam, em vez de ficar com buracos.
use crate::{
    error::{AppError, AppResult},
    models::{
        exam::MAX_GRADE,
        ids::{ClassId, UserId},
    },
    state::School,
};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrollmentReport {
    pub enrolled: Vec<UserId>,
    // Já estavam na turma: nada foi feito para eles
    pub already_enrolled: Vec<UserId>,
    pub backfilled_results: usize,
    pub backfilled_attendance: usize,
}

/// Matricula cada aluno e completa provas e presenças.
///
/// Para cada aluno novo:
/// 1. entra na lista da turma (se já estiver, é ignorado);
/// 2. ganha uma linha em cada prova da turma. Provas com notas já fechadas
///    dão nota máxima ao aluno; as restantes ficam sem nota;
/// 3. ganha `n_classes_passed` presenças, para a percentagem começar em 100%.
///
/// Todos os IDs são validados antes de qualquer alteração, e os passos 1-3
/// não falham depois disso, logo nenhum aluno fica meio matriculado.
pub fn enroll_students(
    school: &mut School,
    class_id: ClassId,
    students: &[UserId],
    today: NaiveDate,
) -> AppResult<EnrollmentReport> {
    school.classes.get(class_id)?;
    for &student in students {
        if school.users.get_student(student).is_none() {
            tracing::warn!("Matrícula recusada na turma {}: {} não é aluno", class_id, student);
            return Err(AppError::InvalidEnrollment(format!(
                "o utilizador {} não é um aluno",
                student
            )));
        }
    }

    let mut report = EnrollmentReport::default();
    for &student in students {
        let sclass = school.classes.get_mut(class_id)?;
        if !sclass.roster.add(student) {
            report.already_enrolled.push(student);
            continue;
        }
        let sessions_held = sclass.n_classes_passed;

        // Passo 2: provas existentes
        let exams: Vec<(_, bool)> = school
            .exams
            .exams_for_class(class_id)
            .iter()
            .map(|exam| (exam.id, exam.grades_submitted))
            .collect();
        for (exam_id, closed) in exams {
            let grade = if closed { Some(MAX_GRADE) } else { None };
            if school.exams.add_result(exam_id, student, grade) {
                report.backfilled_results += 1;
            }
        }

        // Passo 3: aulas já dadas contam como presença
        for _ in 0..sessions_held {
            school.attendance.record_presence(student, class_id, today);
        }
        report.backfilled_attendance += sessions_held as usize;

        report.enrolled.push(student);
    }

    tracing::info!(
        "Turma {}: {} aluno(s) matriculado(s), {} linha(s) de prova e {} presença(s) completadas",
        class_id,
        report.enrolled.len(),
        report.backfilled_results,
        report.backfilled_attendance
    );
    Ok(report)
}
