use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::error::Result;
use crate::model::{Lesson, Person};
use crate::manager::ModelManager;
use crate::store::DataStore;

pub const USAGE: &str = "add: Adds a person or a lesson to the address book.\n\
Parameters (person): n/NAME p/PHONE e/EMAIL a/ADDRESS [t/TAG]...\n\
Parameters (lesson): m/CODE ct/CLASS_TYPE l/LOCATION g/GROUP ts/TIME_SLOT\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2 t/friends\n\
Example: add m/CS2103T ct/tut l/COM1-B103 g/4 ts/WED[1000-1100]";

pub fn person<S: DataStore>(model: &mut ModelManager<S>, person: Person) -> Result<CmdResult> {
    let message = format!("New person added: {}", person);
    model.add_person(person)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_update(UiUpdate::ModelChanged))
}

pub fn lesson<S: DataStore>(model: &mut ModelManager<S>, lesson: Lesson) -> Result<CmdResult> {
    let message = format!("New lesson added: {}", lesson);
    model.add_lesson(lesson)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_update(UiUpdate::ModelChanged))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::delete;
    use crate::error::AppError;
    use crate::index::DisplayIndex;
    use crate::listing::ListingUnit;
    use crate::manager::fixtures::ModelFixture;
    use crate::model::book::fixtures as fx;

    #[test]
    fn adds_person_and_reports_change() {
        let mut model = ModelFixture::new().listing(ListingUnit::Person).build();
        let result = person(&mut model, fx::alice()).unwrap();
        assert!(result.has_update(UiUpdate::ModelChanged));
        assert!(result.messages[0]
            .content
            .starts_with("New person added: Alice Pauline"));
        assert_eq!(model.visible_persons(), &[fx::alice()]);
    }

    #[test]
    fn duplicate_person_fails() {
        let mut model = ModelFixture::typical().build();
        assert!(matches!(
            person(&mut model, fx::alice()),
            Err(AppError::Duplicate(_))
        ));
    }

    #[test]
    fn add_then_delete_restores_store() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let before = model.book().clone();

        let extra = fx::person("Hoon Meier", "8482424", "stefan@example.com", "little india");
        person(&mut model, extra).unwrap();
        let last = DisplayIndex::from_one_based(model.visible_persons().len()).unwrap();
        delete::run(&mut model, last).unwrap();
        assert_eq!(model.book(), &before);
    }

    #[test]
    fn add_then_delete_lesson_restores_store() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Lesson).build();
        let before = model.book().clone();

        lesson(&mut model, fx::lesson("MA1101R", "LT27", 1, "FRI[1400-1600]")).unwrap();
        let last = DisplayIndex::from_one_based(model.visible_lessons().len()).unwrap();
        delete::run(&mut model, last).unwrap();
        assert_eq!(model.book(), &before);
    }
}
