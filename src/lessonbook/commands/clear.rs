use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::error::Result;
use crate::manager::ModelManager;
use crate::store::DataStore;

pub const USAGE: &str = "clear: Removes every person, lesson and bookmark.\n\
Example: clear";

pub const MESSAGE_SUCCESS: &str = "Address book has been cleared!";

pub fn run<S: DataStore>(model: &mut ModelManager<S>) -> Result<CmdResult> {
    model.clear()?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(MESSAGE_SUCCESS))
        .with_update(UiUpdate::ModelChanged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::fixtures::ModelFixture;

    #[test]
    fn empties_the_book() {
        let mut model = ModelFixture::typical().build();
        run(&mut model).unwrap();
        assert!(model.book().is_empty());
        assert!(model.visible_lessons().is_empty());
        assert!(model.store().book().is_empty());
    }
}
