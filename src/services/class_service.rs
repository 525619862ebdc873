// src/services/class_service.rs
use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{NewClass, Resource, SchoolClass},
        ids::{ClassId, UserId},
    },
    services::enrollment_service::{self, EnrollmentReport},
    state::School,
};
use chrono::NaiveDate;

/// Cria uma turma. O professor tem de ser um funcionário cadastrado.
pub fn create_class(school: &mut School, new_class: NewClass) -> AppResult<ClassId> {
    if new_class.name.trim().is_empty() {
        return Err(AppError::InvalidInput("A turma precisa de um nome.".into()));
    }
    let teacher_ok = school
        .users
        .get(new_class.teacher)
        .is_some_and(|user| user.is_employee());
    if !teacher_ok {
        tracing::warn!("Turma '{}' recusada: professor {} inválido", new_class.name, new_class.teacher);
        return Err(AppError::NotFound(format!("Funcionário {}", new_class.teacher)));
    }

    let id = school.classes.create_class(new_class);
    tracing::info!("Turma {} criada.", id);
    Ok(id)
}

/// Disponibiliza um material para a turma.
pub fn distribute_resource(school: &mut School, class_id: ClassId, resource: Resource) -> AppResult<()> {
    let name = resource.name.clone();
    school.classes.add_resource(class_id, resource)?;
    tracing::info!("Material '{}' distribuído para a turma {}", name, class_id);
    Ok(())
}

/// Matricula alunos na turma, completando provas e presenças já existentes.
pub fn enroll_students(
    school: &mut School,
    class_id: ClassId,
    students: &[UserId],
    today: NaiveDate,
) -> AppResult<EnrollmentReport> {
    enrollment_service::enroll_students(school, class_id, students, today)
}

pub fn find_class(school: &School, class_id: ClassId) -> AppResult<&SchoolClass> {
    school.classes.get(class_id)
}

pub fn classes_taught_by(school: &School, teacher_id: UserId) -> Vec<&SchoolClass> {
    school.classes.taught_by(teacher_id)
}

pub fn classes_with_student(school: &School, student_id: UserId) -> Vec<&SchoolClass> {
    school.classes.with_student(student_id)
}
