use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::manager::ModelManager;
use crate::model::RecordKind;
use crate::store::DataStore;

use super::helpers::{resolve_lesson, resolve_person};

pub const USAGE: &str = "delete: Deletes the person or lesson identified by the index number used in the last listing.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";

pub fn run<S: DataStore>(model: &mut ModelManager<S>, index: DisplayIndex) -> Result<CmdResult> {
    let message = match model.active_kind() {
        RecordKind::Person => {
            let target = resolve_person(model, index)?;
            model.delete_person(&target)?;
            format!("Deleted Person: {}", target)
        }
        RecordKind::Lesson => {
            let target = resolve_lesson(model, index)?;
            model.delete_lesson(&target)?;
            format!("Deleted Lesson: {}", target)
        }
    };

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_update(UiUpdate::ModelChanged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::listing::ListingUnit;
    use crate::manager::fixtures::ModelFixture;
    use crate::model::book::fixtures as fx;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(n).unwrap()
    }

    #[test]
    fn deletes_visible_person() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        run(&mut model, idx(2)).unwrap();
        assert!(!model.book().persons().contains(&fx::benson()));
        assert_eq!(model.visible_persons().len(), 3);
    }

    #[test]
    fn deletes_visible_lesson() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Module).build();
        let second = model.visible_lessons()[1].clone();
        run(&mut model, idx(2)).unwrap();
        assert!(!model.book().lessons().contains(&second));
        // CS2010 had a single lesson, so only CS1010 is left in module view.
        assert_eq!(model.visible_lessons().len(), 1);
    }

    #[test]
    fn out_of_range_is_index_error() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        assert!(matches!(
            run(&mut model, idx(5)),
            Err(AppError::Index(RecordKind::Person))
        ));
        assert_eq!(model.store().saves(), 0);
    }
}
