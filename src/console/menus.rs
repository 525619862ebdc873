// src/console/menus.rs
// Ações de cada opção de menu.
use super::{render, Console};
use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{NewActivity, NewClass, Resource, SchoolClass},
        exam::NewExam,
        ids::{ClassId, ExamId, UserId},
        user::{NewUser, Position, User},
    },
    services::{
        activity_service, class_service, exam_service, presence_service, report_service, user_service,
    },
    state::School,
};
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Console<R, W> {
    // --- Aluno / Responsável ---

    pub(super) fn show_student_report(&mut self, school: &School, student_id: UserId) -> AppResult<()> {
        let report = report_service::student_report(school, student_id, self.today())?;
        write!(self.out, "{}", render::student_report(&report))?;
        Ok(())
    }

    pub(super) fn show_attendance(&mut self, school: &School, student_id: UserId) -> AppResult<()> {
        let summary = presence_service::all_attendance_for_student(school, student_id);
        if summary.is_empty() {
            writeln!(self.out, "📭 Nenhuma turma encontrada.")?;
        }
        for (class_id, ratio) in summary {
            let sclass = class_service::find_class(school, class_id)?;
            writeln!(self.out, "✅ {}: {}", sclass.roster.name, render::percentage(ratio))?;
        }
        Ok(())
    }

    // --- Funcionário ---

    /// Escolhe uma das turmas do funcionário.
    fn select_class(&mut self, school: &School, teacher: &User) -> AppResult<Option<ClassId>> {
        let classes: Vec<&SchoolClass> = class_service::classes_taught_by(school, teacher.id);
        let labels: Vec<String> = classes
            .iter()
            .map(|c| format!("{} (ID: {})", c.roster.name, c.id))
            .collect();
        let ids: Vec<ClassId> = classes.iter().map(|c| c.id).collect();
        Ok(self.select_index("Selecione uma turma", &labels)?.map(|i| ids[i]))
    }

    pub(super) fn hold_session(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        let Some(class_id) = self.select_class(school, teacher)? else {
            return Ok(());
        };

        let roster: Vec<(UserId, String)> = report_service::class_overview(school, class_id, self.today())?.students;
        writeln!(self.out, "Registre a presença de cada aluno:")?;
        let mut present = Vec::new();
        for (id, name) in roster {
            if self.confirm(&format!("{} presente", name))? {
                present.push(id);
            }
        }

        let summary = presence_service::hold_session(school, class_id, &present, self.today())?;
        writeln!(
            self.out,
            "Aula {} registrada: {} presente(s), {} ausente(s).",
            summary.session_number,
            summary.present.len(),
            summary.absent.len()
        )?;
        Ok(())
    }

    pub(super) fn grade_exam(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        let Some(class_id) = self.select_class(school, teacher)? else {
            return Ok(());
        };

        let exams: Vec<(ExamId, String)> = exam_service::exams_for_class_without_grades(school, class_id)
            .iter()
            .map(|e| (e.id, format!("[{}] {}", e.date, e.name)))
            .collect();
        let labels: Vec<String> = exams.iter().map(|(_, label)| label.clone()).collect();
        let Some(index) = self.select_index("Selecione uma prova", &labels)? else {
            return Ok(());
        };
        let exam_id = exams[index].0;

        let students: Vec<UserId> = exam_service::exam_results_for_exam(school, exam_id)
            .iter()
            .map(|r| r.student_id)
            .collect();
        let mut grades = Vec::with_capacity(students.len());
        for student_id in students {
            let name = user_service::find_user(school, student_id)?.name.clone();
            let grade = self.read_grade(&format!("Nota de {}", name))?;
            grades.push((student_id, grade));
        }

        exam_service::grade_exam(school, exam_id, &grades)?;
        writeln!(self.out, "✅ {} nota(s) lançada(s).", grades.len())?;
        Ok(())
    }

    pub(super) fn distribute_resource(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        let Some(class_id) = self.select_class(school, teacher)? else {
            return Ok(());
        };
        let name = self.read_non_empty("Nome do material")?;
        let url = self.read_non_empty("Link do material")?;

        class_service::distribute_resource(school, class_id, Resource::new(name.clone(), url))?;
        writeln!(self.out, "Material '{}' disponível para a turma.", name)?;
        Ok(())
    }

    pub(super) fn schedule_exam(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        let Some(class_id) = self.select_class(school, teacher)? else {
            return Ok(());
        };
        writeln!(self.out, "Insira informações da prova:")?;
        let name = self.read_non_empty("Nome")?;
        let date = self.read_date()?;

        let id = exam_service::schedule_exam(school, class_id, NewExam { name: name.clone(), date })?;
        writeln!(self.out, "Prova '{}' (ID {}) agendada para {}.", name, id, date)?;
        Ok(())
    }

    pub(super) fn list_students(&mut self, school: &School) -> AppResult<()> {
        writeln!(self.out, "👤 Veja todos os alunos matriculados:")?;
        for student in user_service::list_students(school) {
            writeln!(self.out, "{} (ID: {})", student.name, student.id)?;
        }
        Ok(())
    }

    pub(super) fn show_class(&mut self, school: &School, teacher: &User) -> AppResult<()> {
        let Some(class_id) = self.select_class(school, teacher)? else {
            return Ok(());
        };
        let overview = report_service::class_overview(school, class_id, self.today())?;
        write!(self.out, "{}", render::class_overview(&overview))?;
        Ok(())
    }

    pub(super) fn create_class(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        writeln!(self.out, "--- Cadastro de Turma ---")?;
        let name = self.read_non_empty("Nome da turma")?;
        let schedule = self.read_time()?;
        let n_classes_total = self.read_u32("Número total de aulas previstas")?;

        let id = class_service::create_class(
            school,
            NewClass {
                name: name.clone(),
                teacher: teacher.id,
                schedule,
                n_classes_total,
            },
        )?;
        writeln!(self.out, "\nTurma {} (ID {}) criada com sucesso!", name, id)?;
        Ok(())
    }

    pub(super) fn enroll_students(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        let Some(class_id) = self.select_class(school, teacher)? else {
            return Ok(());
        };
        let sclass = class_service::find_class(school, class_id)?;
        let candidates: Vec<(UserId, String)> = user_service::list_students(school)
            .into_iter()
            .filter(|s| !sclass.roster.contains(s.id))
            .map(|s| (s.id, format!("{} (ID: {})", s.name, s.id)))
            .collect();

        let labels: Vec<String> = candidates.iter().map(|(_, l)| l.clone()).collect();
        let chosen: Vec<UserId> = self
            .select_many("Alunos disponíveis", &labels)?
            .into_iter()
            .map(|i| candidates[i].0)
            .collect();
        if chosen.is_empty() {
            return Ok(());
        }

        let report = class_service::enroll_students(school, class_id, &chosen, self.today())?;
        writeln!(self.out, "\n{} aluno(s) adicionado(s) à turma.", report.enrolled.len())?;
        Ok(())
    }

    pub(super) fn list_activities(&mut self, school: &School, teacher: &User) -> AppResult<()> {
        let activities = activity_service::activities_taught_by(school, teacher.id);
        if activities.is_empty() {
            writeln!(self.out, "Você não gerencia nenhuma atividade extracurricular.")?;
            return Ok(());
        }
        writeln!(self.out, "🎯 Atividades extracurriculares que você gerencia:")?;
        for activity in activities {
            writeln!(
                self.out,
                "[{}] {} ({} aluno(s))",
                activity.id,
                activity.roster.name,
                activity.roster.students.len()
            )?;
        }
        Ok(())
    }

    pub(super) fn create_activity(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        writeln!(self.out, "--- Cadastro de Atividade Extracurricular ---")?;
        let name = self.read_non_empty("Nome da atividade")?;
        let schedule = self.read_time()?;

        let id = activity_service::create_activity(
            school,
            NewActivity {
                name: name.clone(),
                teacher: teacher.id,
                schedule,
            },
        )?;
        writeln!(self.out, "\nAtividade {} (ID {}) criada com sucesso!", name, id)?;
        Ok(())
    }

    pub(super) fn enroll_in_activity(&mut self, school: &mut School, teacher: &User) -> AppResult<()> {
        let activities: Vec<_> = activity_service::activities_taught_by(school, teacher.id)
            .iter()
            .map(|a| (a.id, format!("{} (ID: {})", a.roster.name, a.id)))
            .collect();
        let labels: Vec<String> = activities.iter().map(|(_, l)| l.clone()).collect();
        let Some(index) = self.select_index("Selecione uma atividade extracurricular", &labels)? else {
            return Ok(());
        };
        let activity_id = activities[index].0;

        let roster = &activity_service::find_activity(school, activity_id)?.roster;
        let candidates: Vec<(UserId, String)> = user_service::list_students(school)
            .into_iter()
            .filter(|s| !roster.contains(s.id))
            .map(|s| (s.id, format!("{} (ID: {})", s.name, s.id)))
            .collect();
        let labels: Vec<String> = candidates.iter().map(|(_, l)| l.clone()).collect();
        let chosen: Vec<UserId> = self
            .select_many("Alunos disponíveis", &labels)?
            .into_iter()
            .map(|i| candidates[i].0)
            .collect();
        if chosen.is_empty() {
            return Ok(());
        }

        let added = activity_service::enroll_in_activity(school, activity_id, &chosen)?;
        writeln!(self.out, "\n{} aluno(s) adicionado(s) à atividade.", added)?;
        Ok(())
    }

    pub(super) fn register_user(&mut self, school: &mut School) -> AppResult<()> {
        let kinds = ["Aluno".to_string(), "Funcionário".to_string(), "Responsável".to_string()];
        let Some(kind) = self.select_index("Tipo de usuário", &kinds)? else {
            return Ok(());
        };

        let name = self.read_non_empty("Nome")?;
        let password = self.read_non_empty("Senha")?;

        let new_user = match kind {
            0 => NewUser::student(name, password),
            1 => {
                let title = self.read_non_empty("Cargo do funcionário")?;
                let subject = if title.eq_ignore_ascii_case("professor") {
                    Some(self.read_non_empty("Matéria do professor")?)
                } else {
                    None
                };
                let position = Position::from_title(&title, subject.as_deref())?;
                NewUser::employee(name, password, position)
            }
            _ => {
                let students: Vec<(UserId, String)> = user_service::list_students(school)
                    .into_iter()
                    .map(|s| (s.id, format!("{} (ID: {})", s.name, s.id)))
                    .collect();
                let labels: Vec<String> = students.iter().map(|(_, l)| l.clone()).collect();
                let Some(index) = self.select_index("Selecione um estudante", &labels)? else {
                    return Err(AppError::UserCreation(
                        "É necessário selecionar um aluno para cadastrar um responsável.".into(),
                    ));
                };
                NewUser::guardian(name, password, students[index].0)
            }
        };

        let label = new_user.name.clone();
        let id = user_service::register_user(school, new_user)?;
        writeln!(self.out, "✅ {} cadastrado(a) com ID {}", label, id)?;
        Ok(())
    }
}
