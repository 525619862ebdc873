// src/console/mod.rs
//
// Camada de apresentação: menus e perguntas no terminal.
// Só chama os serviços e mostra os resultados; as regras ficam no núcleo.
mod menus;
mod prompt;
pub mod render;

use crate::{
    audit::{audited, AuditLog},
    error::{AppError, AppResult},
    models::{
        ids::UserId,
        user::{User, UserKind},
    },
    services::auth_service,
    state::School,
};
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};

/// Conjunto de opções a que cada tipo de utilizador tem acesso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Student,
    Guardian { student: UserId },
    // `full = false` para funcionários que só registam presença
    Employee { full: bool },
}

impl Menu {
    pub fn for_user(user: &User) -> Self {
        match &user.kind {
            UserKind::Student => Menu::Student,
            UserKind::Guardian { student } => Menu::Guardian { student: *student },
            UserKind::Employee { position } => Menu::Employee {
                full: position.can_manage_classes(),
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Menu::Student => "aluno",
            Menu::Guardian { .. } => "responsável",
            Menu::Employee { .. } => "funcionário",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Menu::Student => &["Ver boletim (turmas, materiais, provas e notas)", "Ver presenças"],
            Menu::Guardian { .. } => &["Consultar dados do aluno"],
            Menu::Employee { full: false } => &["Registrar presença"],
            Menu::Employee { full: true } => &[
                "Registrar presença",
                "Lançar nota",
                "Disponibilizar material para a turma",
                "Agendar prova",
                "Consultar alunos matriculados",
                "Visualizar turmas",
                "Criar turma",
                "Adicionar alunos a turmas",
                "Visualizar atividades extracurriculares",
                "Criar atividade extracurricular",
                "Adicionar alunos a atividades",
                "Cadastrar usuários",
            ],
        }
    }
}

pub struct Console<R, W> {
    pub(crate) input: R,
    pub(crate) out: W,
    today_override: Option<NaiveDate>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            today_override: None,
        }
    }

    /// Fixa a data "de hoje" (usado nos testes).
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today_override = Some(today);
        self
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.today_override.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Laço principal. Termina com "0" ou no fim da entrada.
    pub fn run(&mut self, school: &mut School, audit: &mut AuditLog) -> AppResult<()> {
        match self.main_loop(school, audit) {
            Err(e) if is_end_of_input(&e) => {
                writeln!(self.out, "\n\nSistema encerrado.")?;
                Ok(())
            }
            other => other,
        }
    }

    fn main_loop(&mut self, school: &mut School, audit: &mut AuditLog) -> AppResult<()> {
        loop {
            writeln!(self.out, "\n=== 🎓 Sistema de Gestão Escolar ===\n")?;
            writeln!(self.out, "1 - Login")?;
            writeln!(self.out, "0 - Sair")?;

            match self.read_line("\nEscolha uma opção: ")?.as_str() {
                "1" => {
                    if let Some(user) = self.login(school)? {
                        self.menu_loop(school, audit, &user)?;
                    }
                }
                "0" => {
                    writeln!(self.out, "Saindo do sistema...")?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Opção inválida. Tente novamente.")?,
            }
        }
    }

    fn login(&mut self, school: &School) -> AppResult<Option<User>> {
        let name = self.read_line("\nNome: ")?;
        let password = self.read_line("Senha: ")?;

        match auth_service::authenticate(school, &name, &password) {
            Ok(user) => {
                writeln!(self.out, "\n✅ Login realizado como {}.", user.type_label())?;
                Ok(Some(user))
            }
            Err(AppError::InvalidCredentials) => {
                writeln!(self.out, "❌ {}", AppError::InvalidCredentials.user_message())?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn menu_loop(&mut self, school: &mut School, audit: &mut AuditLog, user: &User) -> AppResult<()> {
        let menu = Menu::for_user(user);
        loop {
            writeln!(self.out, "\nBem-vindo(a), {}! (menu do {})", user.name, menu.name())?;
            for (i, option) in menu.options().iter().enumerate() {
                writeln!(self.out, "{:>2}. {}", i + 1, option)?;
            }
            writeln!(self.out, " 0. Voltar")?;

            let choice = self.read_line("\nEscolha uma opção: ")?;
            if choice == "0" {
                return Ok(());
            }

            let action = format!("escolheu a opção {} no menu {}", choice, menu.name());
            let result = audited(audit, user, &action, || self.dispatch(school, user, menu, &choice));
            match result {
                Ok(()) => {}
                Err(e) if is_end_of_input(&e) => return Err(e),
                Err(e) => writeln!(self.out, "❌ {}", e.user_message())?,
            }
        }
    }

    fn dispatch(&mut self, school: &mut School, user: &User, menu: Menu, choice: &str) -> AppResult<()> {
        match (menu, choice) {
            (Menu::Student, "1") => self.show_student_report(school, user.id),
            (Menu::Student, "2") => self.show_attendance(school, user.id),
            (Menu::Guardian { student }, "1") => self.show_student_report(school, student),
            (Menu::Employee { .. }, "1") => self.hold_session(school, user),
            (Menu::Employee { full: true }, option) => match option {
                "2" => self.grade_exam(school, user),
                "3" => self.distribute_resource(school, user),
                "4" => self.schedule_exam(school, user),
                "5" => self.list_students(school),
                "6" => self.show_class(school, user),
                "7" => self.create_class(school, user),
                "8" => self.enroll_students(school, user),
                "9" => self.list_activities(school, user),
                "10" => self.create_activity(school, user),
                "11" => self.enroll_in_activity(school, user),
                "12" => self.register_user(school),
                _ => self.invalid_option(),
            },
            _ => self.invalid_option(),
        }
    }

    fn invalid_option(&mut self) -> AppResult<()> {
        writeln!(self.out, "Opção inválida.")?;
        Ok(())
    }
}

fn is_end_of_input(error: &AppError) -> bool {
    matches!(error, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}
