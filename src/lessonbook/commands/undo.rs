//! Undo and redo, by snapshot.
//!
//! Before an undoable command runs, the facade pushes a [`Snapshot`] of the
//! book and favourites. Undo swaps the current state for the latest snapshot
//! and keeps the current one for redo; redo does the reverse.

use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::error::{AppError, Result};
use crate::manager::{ModelManager, Snapshot};
use crate::store::DataStore;

pub const USAGE: &str = "undo: Reverts the last add, edit, delete, clear or bookmark.\n\
Example: undo";

pub const REDO_USAGE: &str = "redo: Re-applies the last undone command.\n\
Example: redo";

pub const MESSAGE_NOTHING_TO_UNDO: &str = "No more commands to undo!";
pub const MESSAGE_NOTHING_TO_REDO: &str = "No more commands to redo!";

#[derive(Debug, Default)]
pub struct UndoRedoStack {
    undo: Vec<Snapshot>,
    redo: Vec<Snapshot>,
}

impl UndoRedoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the state before a new undoable command. Anything that could
    /// have been redone is dropped.
    pub fn push(&mut self, before: Snapshot) {
        self.undo.push(before);
        self.redo.clear();
    }
}

pub fn undo<S: DataStore>(model: &mut ModelManager<S>, stack: &mut UndoRedoStack) -> Result<CmdResult> {
    let previous = stack
        .undo
        .pop()
        .ok_or_else(|| AppError::Unavailable(MESSAGE_NOTHING_TO_UNDO.into()))?;
    let current = model.snapshot();
    if let Err(e) = model.restore(previous.clone()) {
        stack.undo.push(previous);
        return Err(e);
    }
    stack.redo.push(current);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Undo success!"))
        .with_update(UiUpdate::ModelChanged))
}

pub fn redo<S: DataStore>(model: &mut ModelManager<S>, stack: &mut UndoRedoStack) -> Result<CmdResult> {
    let next = stack
        .redo
        .pop()
        .ok_or_else(|| AppError::Unavailable(MESSAGE_NOTHING_TO_REDO.into()))?;
    let current = model.snapshot();
    if let Err(e) = model.restore(next.clone()) {
        stack.redo.push(next);
        return Err(e);
    }
    stack.undo.push(current);
    Ok(CmdResult::default()
        .with_message(CmdMessage::success("Redo success!"))
        .with_update(UiUpdate::ModelChanged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingUnit;
    use crate::manager::fixtures::ModelFixture;
    use crate::model::book::fixtures as fx;

    #[test]
    fn undo_then_redo_an_add() {
        let mut model = ModelFixture::new().listing(ListingUnit::Person).build();
        let mut stack = UndoRedoStack::new();

        stack.push(model.snapshot());
        model.add_person(fx::alice()).unwrap();

        undo(&mut model, &mut stack).unwrap();
        assert!(model.book().is_empty());
        assert!(model.visible_persons().is_empty());

        redo(&mut model, &mut stack).unwrap();
        assert_eq!(model.visible_persons(), &[fx::alice()]);
        assert!(matches!(
            redo(&mut model, &mut stack),
            Err(AppError::Unavailable(_))
        ));
        undo(&mut model, &mut stack).unwrap();
        assert!(model.book().is_empty());
    }

    #[test]
    fn empty_stacks_are_unavailable() {
        let mut model = ModelFixture::new().build();
        let mut stack = UndoRedoStack::new();
        assert!(matches!(
            undo(&mut model, &mut stack),
            Err(AppError::Unavailable(_))
        ));
        assert!(matches!(
            redo(&mut model, &mut stack),
            Err(AppError::Unavailable(_))
        ));
    }

    #[test]
    fn new_command_clears_redo() {
        let mut model = ModelFixture::new().build();
        let mut stack = UndoRedoStack::new();
        stack.push(model.snapshot());
        model.add_person(fx::alice()).unwrap();
        undo(&mut model, &mut stack).unwrap();

        stack.push(model.snapshot());
        model.add_person(fx::benson()).unwrap();
        assert!(matches!(
            redo(&mut model, &mut stack),
            Err(AppError::Unavailable(_))
        ));
        assert_eq!(model.book().persons(), &[fx::benson()]);
    }

    #[test]
    fn undo_restores_favourites() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Lesson).build();
        let mut stack = UndoRedoStack::new();
        let lesson = model.visible_lessons()[0].clone();

        stack.push(model.snapshot());
        model.bookmark_lesson(&lesson).unwrap();
        undo(&mut model, &mut stack).unwrap();
        assert!(model.favourites().is_empty());
    }
}
