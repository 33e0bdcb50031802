use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AppError, Result};
use crate::index::DisplayIndex;
use crate::manager::ModelManager;
use crate::model::RecordKind;
use crate::store::DataStore;

use super::helpers::resolve_lesson;

pub const USAGE: &str = "bookmark: Marks the lesson identified by the index number used in the last listing \
as a favourite. Marked lessons are shown by `list marked`.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: bookmark 2";

/// Favourites live beside the book, so nothing is saved and the visible
/// list is left as it is.
pub fn run<S: DataStore>(model: &mut ModelManager<S>, index: DisplayIndex) -> Result<CmdResult> {
    if model.active_kind() == RecordKind::Person {
        return Err(AppError::validation(
            "index",
            "Only lessons can be bookmarked. List lessons first.",
        ));
    }
    let lesson = resolve_lesson(model, index)?;
    model.bookmark_lesson(&lesson)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Bookmarked Lesson: {}", lesson))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingUnit;
    use crate::manager::fixtures::ModelFixture;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(n).unwrap()
    }

    #[test]
    fn bookmarks_the_visible_lesson() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Lesson).build();
        let expected = model.visible_lessons()[2].clone();
        let result = run(&mut model, idx(3)).unwrap();
        assert!(model.favourites().contains(&expected));
        assert!(result.updates.is_empty());
        // Favourites are session state, not part of the saved book.
        assert_eq!(model.store().saves(), 0);
    }

    #[test]
    fn bookmarking_twice_is_a_duplicate() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Lesson).build();
        run(&mut model, idx(1)).unwrap();
        assert!(matches!(run(&mut model, idx(1)), Err(AppError::Duplicate(_))));
    }

    #[test]
    fn person_list_cannot_be_bookmarked() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        assert!(matches!(
            run(&mut model, idx(1)),
            Err(AppError::Validation { field: "index", .. })
        ));
    }
}
