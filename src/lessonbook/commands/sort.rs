use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::manager::ModelManager;
use crate::store::DataStore;

pub const USAGE: &str = "sort: Sorts the listed records: persons by name, lessons by module code then location.\n\
Example: sort";

pub const MESSAGE_SUCCESS: &str = "List sorted successfully";

/// Sorting is a presentation concern; the store is never reordered.
pub fn run<S: DataStore>(model: &ModelManager<S>) -> CmdResult {
    CmdResult::default()
        .with_message(CmdMessage::success(MESSAGE_SUCCESS))
        .with_update(UiUpdate::SortRequested(model.listing().current()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingUnit;
    use crate::manager::fixtures::ModelFixture;

    #[test]
    fn requests_sort_of_current_unit_and_leaves_store_alone() {
        let model = ModelFixture::typical().listing(ListingUnit::Location).build();
        let before = model.book().clone();
        let result = run(&model);
        assert_eq!(result.messages[0].content, MESSAGE_SUCCESS);
        assert!(result.has_update(UiUpdate::SortRequested(ListingUnit::Location)));
        assert_eq!(model.book(), &before);
        assert_eq!(model.store().saves(), 0);
    }

    #[test]
    fn succeeds_on_empty_book() {
        let model = ModelFixture::new().build();
        assert!(run(&model).has_update(UiUpdate::SortRequested(ListingUnit::Module)));
    }
}
