// src/services/activity_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{ExtracurricularActivity, NewActivity, Offering},
        ids::{ActivityId, UserId},
    },
    state::School,
};

pub fn create_activity(school: &mut School, new_activity: NewActivity) -> AppResult<ActivityId> {
    if new_activity.name.trim().is_empty() {
        return Err(AppError::InvalidInput("A atividade precisa de um nome.".into()));
    }
    if !school
        .users
        .get(new_activity.teacher)
        .is_some_and(|user| user.is_employee())
    {
        return Err(AppError::NotFound(format!("Funcionário {}", new_activity.teacher)));
    }

    let id = school.activities.create_activity(new_activity);
    tracing::info!("Atividade extracurricular {} criada.", id);
    Ok(id)
}

/// Inscreve alunos numa atividade. Atividades não têm provas nem presenças,
/// por isso não há nada a completar: só a lista muda.
/// Devolve quantos alunos foram de facto acrescentados.
pub fn enroll_in_activity(
    school: &mut School,
    activity_id: ActivityId,
    students: &[UserId],
) -> AppResult<usize> {
    // Valida tudo antes de mexer na lista
    school.activities.get(activity_id)?;
    for &student in students {
        if school.users.get_student(student).is_none() {
            return Err(AppError::InvalidEnrollment(format!(
                "o utilizador {} não é um aluno",
                student
            )));
        }
    }

    let activity = school.activities.get_mut(activity_id)?;
    let added = students.iter().filter(|&&s| activity.roster.add(s)).count();
    tracing::info!("{} aluno(s) adicionado(s) à atividade {}", added, activity_id);
    Ok(added)
}

pub fn find_activity(school: &School, activity_id: ActivityId) -> AppResult<&ExtracurricularActivity> {
    school.activities.get(activity_id)
}

pub fn activities_taught_by(school: &School, teacher_id: UserId) -> Vec<&ExtracurricularActivity> {
    school.activities.taught_by(teacher_id)
}

pub fn activities_with_student(school: &School, student_id: UserId) -> Vec<&ExtracurricularActivity> {
    school.activities.with_student(student_id)
}

/// Turmas e atividades do aluno, turmas primeiro.
pub fn offerings_for_student(school: &School, student_id: UserId) -> Vec<Offering<'_>> {
    school
        .classes
        .with_student(student_id)
        .into_iter()
        .map(Offering::Class)
        .chain(
            school
                .activities
                .with_student(student_id)
                .into_iter()
                .map(Offering::Extracurricular),
        )
        .collect()
}
