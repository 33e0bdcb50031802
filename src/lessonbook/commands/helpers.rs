use crate::error::{AppError, Result};
use crate::index::DisplayIndex;
use crate::manager::ModelManager;
use crate::model::{Lesson, Person, RecordKind};
use crate::store::DataStore;

/// The visible person at `index`, or an index error.
pub fn resolve_person<S: DataStore>(
    model: &ModelManager<S>,
    index: DisplayIndex,
) -> Result<Person> {
    index
        .get(model.visible_persons())
        .cloned()
        .ok_or(AppError::Index(RecordKind::Person))
}

/// The visible lesson at `index`, or an index error.
pub fn resolve_lesson<S: DataStore>(
    model: &ModelManager<S>,
    index: DisplayIndex,
) -> Result<Lesson> {
    index
        .get(model.visible_lessons())
        .cloned()
        .ok_or(AppError::Index(RecordKind::Lesson))
}

/// Fails unless `index` points into the active list.
pub fn check_index<S: DataStore>(model: &ModelManager<S>, index: DisplayIndex) -> Result<()> {
    if index.one_based() > model.active_len() {
        return Err(AppError::Index(model.active_kind()));
    }
    Ok(())
}
