// src/store/classes.rs
use super::ids::IdAllocator;
use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{NewClass, Resource, Roster, SchoolClass},
        ids::{ClassId, UserId},
    },
};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct ClassRepository {
    classes: BTreeMap<ClassId, SchoolClass>,
    ids: IdAllocator,
}

impl ClassRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria a turma com lista de alunos vazia e nenhuma aula dada.
    pub fn create_class(&mut self, new_class: NewClass) -> ClassId {
        let id = ClassId(self.ids.next());
        tracing::debug!("Guardando turma '{}' com ID {}", new_class.name, id);
        self.classes.insert(
            id,
            SchoolClass {
                id,
                roster: Roster::new(new_class.name, new_class.teacher, new_class.schedule),
                resources: Vec::new(),
                n_classes_total: new_class.n_classes_total,
                n_classes_passed: 0,
            },
        );
        id
    }

    pub fn get(&self, id: ClassId) -> AppResult<&SchoolClass> {
        self.classes
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Turma {}", id)))
    }

    pub(crate) fn get_mut(&mut self, id: ClassId) -> AppResult<&mut SchoolClass> {
        self.classes
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Turma {}", id)))
    }

    /// Turmas do professor, na ordem em que foram criadas.
    pub fn taught_by(&self, teacher_id: UserId) -> Vec<&SchoolClass> {
        self.classes
            .values()
            .filter(|sclass| sclass.roster.teacher == teacher_id)
            .collect()
    }

    pub fn with_student(&self, student_id: UserId) -> Vec<&SchoolClass> {
        self.classes
            .values()
            .filter(|sclass| sclass.roster.contains(student_id))
            .collect()
    }

    pub fn add_resource(&mut self, class_id: ClassId, resource: Resource) -> AppResult<()> {
        self.get_mut(class_id)?.resources.push(resource);
        Ok(())
    }

    /// Conta mais uma aula dada e devolve o novo total.
    pub(crate) fn increment_sessions(&mut self, class_id: ClassId) -> AppResult<u32> {
        let sclass = self.get_mut(class_id)?;
        sclass.n_classes_passed += 1;
        Ok(sclass.n_classes_passed)
    }

    pub fn all(&self) -> impl Iterator<Item = &SchoolClass> {
        self.classes.values()
    }
}
