// src/models/activity.rs
use super::ids::{ActivityId, ClassId, UserId};
use chrono::NaiveTime;
use serde::Serialize;

/// Material distribuído a uma turma (nome + link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub name: String,
    pub url: String,
}

impl Resource {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Parte comum a turmas e atividades extracurriculares:
/// nome, professor responsável, horário e lista de alunos.
#[derive(Debug, Clone, Serialize)]
pub struct Roster {
    pub name: String,
    // Funcionário dono da oferta; não muda depois da criação
    pub teacher: UserId,
    pub schedule: NaiveTime,
    // Ordem de matrícula, sem repetidos
    pub students: Vec<UserId>,
}

impl Roster {
    pub fn new(name: impl Into<String>, teacher: UserId, schedule: NaiveTime) -> Self {
        Self {
            name: name.into(),
            teacher,
            schedule,
            students: Vec::new(),
        }
    }

    pub fn contains(&self, student: UserId) -> bool {
        self.students.contains(&student)
    }

    /// Acrescenta o aluno se ainda não estiver na lista.
    /// Devolve `true` quando houve alteração.
    pub fn add(&mut self, student: UserId) -> bool {
        if self.contains(student) {
            return false;
        }
        self.students.push(student);
        true
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SchoolClass {
    pub id: ClassId,
    pub roster: Roster,
    pub resources: Vec<Resource>,
    // Aulas previstas
    pub n_classes_total: u32,
    // Aulas já dadas; só cresce
    pub n_classes_passed: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtracurricularActivity {
    pub id: ActivityId,
    pub roster: Roster,
}

/// Dados para criar uma turma nova (o antigo builder de turma).
#[derive(Debug, Clone)]
pub struct NewClass {
    pub name: String,
    pub teacher: UserId,
    pub schedule: NaiveTime,
    pub n_classes_total: u32,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub name: String,
    pub teacher: UserId,
    pub schedule: NaiveTime,
}

/// Visão emprestada de qualquer oferta (turma ou atividade).
#[derive(Debug, Clone, Copy)]
pub enum Offering<'a> {
    Class(&'a SchoolClass),
    Extracurricular(&'a ExtracurricularActivity),
}

impl<'a> Offering<'a> {
    pub fn roster(&self) -> &'a Roster {
        match self {
            Offering::Class(sclass) => &sclass.roster,
            Offering::Extracurricular(activity) => &activity.roster,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Offering::Class(_) => "Turma",
            Offering::Extracurricular(_) => "Atividade extracurricular",
        }
    }
}
