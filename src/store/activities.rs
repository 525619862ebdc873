// src/store/activities.rs
use super::ids::IdAllocator;
use crate::{
    error::{AppError, AppResult},
    models::{
        activity::{ExtracurricularActivity, NewActivity, Roster},
        ids::{ActivityId, UserId},
    },
};
use std::collections::BTreeMap;

/// Atividades extracurriculares. Mesma forma da turma, sem provas nem presenças.
#[derive(Debug, Default)]
pub struct ActivityRepository {
    activities: BTreeMap<ActivityId, ExtracurricularActivity>,
    ids: IdAllocator,
}

impl ActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_activity(&mut self, new_activity: NewActivity) -> ActivityId {
        let id = ActivityId(self.ids.next());
        tracing::debug!("Guardando atividade '{}' com ID {}", new_activity.name, id);
        self.activities.insert(
            id,
            ExtracurricularActivity {
                id,
                roster: Roster::new(new_activity.name, new_activity.teacher, new_activity.schedule),
            },
        );
        id
    }

    pub fn get(&self, id: ActivityId) -> AppResult<&ExtracurricularActivity> {
        self.activities
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Atividade {}", id)))
    }

    pub(crate) fn get_mut(&mut self, id: ActivityId) -> AppResult<&mut ExtracurricularActivity> {
        self.activities
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Atividade {}", id)))
    }

    pub fn taught_by(&self, teacher_id: UserId) -> Vec<&ExtracurricularActivity> {
        self.activities
            .values()
            .filter(|activity| activity.roster.teacher == teacher_id)
            .collect()
    }

    pub fn with_student(&self, student_id: UserId) -> Vec<&ExtracurricularActivity> {
        self.activities
            .values()
            .filter(|activity| activity.roster.contains(student_id))
            .collect()
    }
}
