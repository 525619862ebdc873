// src/services/presence_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        attendance::SessionSummary,
        ids::{ClassId, UserId},
    },
    state::School,
};
use chrono::NaiveDate;

/// Regista uma aula dada: soma exatamente uma aula à turma e uma presença
/// a cada aluno presente. Os ausentes são os restantes alunos da lista.
///
/// Todos os presentes têm de estar matriculados; senão nada é alterado.
/// Um aluno repetido em `present` conta uma só vez.
pub fn hold_session(
    school: &mut School,
    class_id: ClassId,
    present: &[UserId],
    date: NaiveDate,
) -> AppResult<SessionSummary> {
    let sclass = school.classes.get(class_id)?;
    if let Some(&stranger) = present.iter().find(|s| !sclass.roster.contains(**s)) {
        tracing::warn!("Aula recusada na turma {}: aluno {} não matriculado", class_id, stranger);
        return Err(AppError::NotEnrolled {
            class: class_id,
            student: stranger,
        });
    }

    // Percorre a lista da turma para manter a ordem e ignorar repetidos
    let (present, absent): (Vec<UserId>, Vec<UserId>) = sclass
        .roster
        .students
        .iter()
        .copied()
        .partition(|s| present.contains(s));

    let session_number = school.classes.increment_sessions(class_id)?;
    for &student in &present {
        school.attendance.record_presence(student, class_id, date);
    }

    tracing::info!(
        "Aula {} da turma {} em {}: {} presente(s), {} ausente(s)",
        session_number,
        class_id,
        date,
        present.len(),
        absent.len()
    );
    Ok(SessionSummary {
        class_id,
        session_number,
        present,
        absent,
    })
}

/// Percentagem de presença (0.0 a 1.0) do aluno na turma.
/// `None` enquanto a turma não tiver nenhuma aula dada.
pub fn percentage_for_student_in_class(
    school: &School,
    student_id: UserId,
    class_id: ClassId,
) -> AppResult<Option<f64>> {
    let sclass = school.classes.get(class_id)?;
    Ok(school.attendance.percentage_for_student_in_class(student_id, sclass))
}

/// Percentagem de presença em cada turma em que o aluno está matriculado.
pub fn all_attendance_for_student(school: &School, student_id: UserId) -> Vec<(ClassId, Option<f64>)> {
    tracing::debug!("Buscando presenças do aluno {}", student_id);
    school
        .classes
        .with_student(student_id)
        .into_iter()
        .map(|sclass| {
            (
                sclass.id,
                school.attendance.percentage_for_student_in_class(student_id, sclass),
            )
        })
        .collect()
}
