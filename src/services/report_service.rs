// src/services/report_service.rs
use crate::{
    error::AppResult,
    models::{
        ids::{ClassId, UserId},
        report::{ActivityLine, ClassOverview, ClassReport, ExamLine, ExamOverviewLine, StudentReport},
    },
    services::user_service,
    state::School,
};
use chrono::NaiveDate;

/// Monta o boletim do aluno: turmas, materiais, provas, presença e atividades.
pub fn student_report(school: &School, student_id: UserId, today: NaiveDate) -> AppResult<StudentReport> {
    let student = user_service::find_student(school, student_id)?;
    tracing::debug!("Montando boletim do aluno {}", student_id);

    let classes = school
        .classes
        .with_student(student_id)
        .into_iter()
        .map(|sclass| {
            let mut exams: Vec<ExamLine> = school
                .exams
                .results_for_student_in_class(student_id, sclass.id)
                .into_iter()
                .filter_map(|result| {
                    // Toda linha de resultado aponta para uma prova existente
                    let exam = school.exams.get(result.exam_id).ok()?;
                    Some(ExamLine {
                        exam_id: exam.id,
                        name: exam.name.clone(),
                        date: exam.date,
                        status: result.status(exam.date, today),
                    })
                })
                .collect();
            exams.sort_by_key(|line| line.date);

            ClassReport {
                class_id: sclass.id,
                name: sclass.roster.name.clone(),
                schedule: sclass.roster.schedule,
                resources: sclass.resources.clone(),
                exams,
                attendance: school.attendance.percentage_for_student_in_class(student_id, sclass),
                sessions_held: sclass.n_classes_passed,
            }
        })
        .collect();

    let activities = school
        .activities
        .with_student(student_id)
        .into_iter()
        .map(|activity| ActivityLine {
            name: activity.roster.name.clone(),
            schedule: activity.roster.schedule,
        })
        .collect();

    Ok(StudentReport {
        student_id,
        student_name: student.name.clone(),
        classes,
        activities,
    })
}

/// Detalhes da turma: totais de aulas, alunos e situação de cada prova.
pub fn class_overview(school: &School, class_id: ClassId, today: NaiveDate) -> AppResult<ClassOverview> {
    let sclass = school.classes.get(class_id)?;

    let students = sclass
        .roster
        .students
        .iter()
        .filter_map(|&id| school.users.get(id).map(|user| (id, user.name.clone())))
        .collect();

    let exams = school
        .exams
        .exams_for_class(class_id)
        .into_iter()
        .map(|exam| ExamOverviewLine {
            exam_id: exam.id,
            name: exam.name.clone(),
            date: exam.date,
            progress: exam.progress(today),
        })
        .collect();

    Ok(ClassOverview {
        class_id,
        name: sclass.roster.name.clone(),
        schedule: sclass.roster.schedule,
        n_classes_total: sclass.n_classes_total,
        n_classes_passed: sclass.n_classes_passed,
        students,
        exams,
    })
}
