use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::manager::ModelManager;
use crate::store::DataStore;

use super::helpers::check_index;

pub const USAGE: &str = "select: Selects the row identified by the index number used in the last listing.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: select 1";

pub fn run<S: DataStore>(model: &ModelManager<S>, index: DisplayIndex) -> Result<CmdResult> {
    check_index(model, index)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(format!(
            "Selected {} #{}",
            model.active_kind(),
            index
        )))
        .with_update(UiUpdate::SelectionChanged(index)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::listing::ListingUnit;
    use crate::manager::fixtures::ModelFixture;
    use crate::model::RecordKind;

    #[test]
    fn selects_without_touching_the_filter() {
        let model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let index = DisplayIndex::from_one_based(4).unwrap();
        let result = run(&model, index).unwrap();
        assert_eq!(result.messages[0].content, "Selected person #4");
        assert!(result.has_update(UiUpdate::SelectionChanged(index)));
        assert_eq!(model.visible_persons().len(), 4);
    }

    #[test]
    fn rejects_rows_that_are_not_shown() {
        // Module unit shows one lesson per code: two rows.
        let model = ModelFixture::typical().build();
        let index = DisplayIndex::from_one_based(3).unwrap();
        assert!(matches!(
            run(&model, index),
            Err(AppError::Index(RecordKind::Lesson))
        ));
    }
}
