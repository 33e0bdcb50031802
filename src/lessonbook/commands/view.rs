use crate::commands::{CmdMessage, CmdResult, UiUpdate};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::listing::ListingUnit;
use crate::manager::ModelManager;
use crate::model::RecordKind;
use crate::predicates::{LessonPredicate, PersonPredicate};
use crate::store::DataStore;

use super::helpers::{check_index, resolve_lesson, resolve_person};

pub const USAGE: &str = "view: Shows every record sharing the listed value of the row at the index. \
In address, email and phone units this lists the persons with that value; in module and \
location units, the lessons of that module or location.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: view 1";

pub fn run<S: DataStore>(model: &mut ModelManager<S>, index: DisplayIndex) -> Result<CmdResult> {
    check_index(model, index)?;
    let unit = model.listing().current();

    let (target_unit, message) = match model.active_kind() {
        RecordKind::Person => {
            let person = resolve_person(model, index)?;
            let (predicate, value) = match unit {
                ListingUnit::Address => (
                    PersonPredicate::FixedAddress(person.address.clone()),
                    person.address.to_string(),
                ),
                ListingUnit::Email => (
                    PersonPredicate::FixedEmail(person.email.clone()),
                    person.email.to_string(),
                ),
                ListingUnit::Phone => (
                    PersonPredicate::FixedPhone(person.phone.clone()),
                    person.phone.to_string(),
                ),
                ListingUnit::Person
                | ListingUnit::Module
                | ListingUnit::Location
                | ListingUnit::Lesson => {
                    let name = person.name.to_string();
                    (PersonPredicate::ShowSpecified(person), name)
                }
            };
            model.update_person_filter(predicate);
            (ListingUnit::Person, format!("persons found with {}", value))
        }
        RecordKind::Lesson => {
            let lesson = resolve_lesson(model, index)?;
            let (predicate, value) = match unit {
                ListingUnit::Module => (
                    LessonPredicate::FixedCode(lesson.code.clone()),
                    lesson.code.to_string(),
                ),
                ListingUnit::Location => (
                    LessonPredicate::FixedLocation(lesson.location.clone()),
                    lesson.location.to_string(),
                ),
                ListingUnit::Lesson
                | ListingUnit::Person
                | ListingUnit::Address
                | ListingUnit::Email
                | ListingUnit::Phone => {
                    let value = lesson.to_string();
                    (LessonPredicate::ShowSpecified(lesson), value)
                }
            };
            model.update_lesson_filter(predicate);
            (ListingUnit::Lesson, format!("lessons found with {}", value))
        }
    };

    model.switch_unit(target_unit);
    Ok(CmdResult::default()
        .with_message(CmdMessage::info(message))
        .with_update(UiUpdate::ListingUnitChanged(target_unit)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::manager::fixtures::ModelFixture;
    use crate::model::book::fixtures as fx;
    use crate::model::Code;
    use crate::predicates::PersonField;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(n).unwrap()
    }

    #[test]
    fn address_unit_shows_everyone_at_that_address() {
        let mut model = ModelFixture::typical().build();
        let unique = PersonPredicate::unique_by(PersonField::Address, model.book().persons());
        model.switch_unit(ListingUnit::Address);
        model.update_person_filter(unique);
        assert_eq!(model.visible_persons().len(), 3);

        let result = run(&mut model, idx(3)).unwrap();
        assert_eq!(result.messages[0].content, "persons found with wall street");
        assert_eq!(model.visible_persons(), &[fx::carl(), fx::daniel()]);
        assert_eq!(model.listing().current(), ListingUnit::Person);
        assert!(result.has_update(UiUpdate::ListingUnitChanged(ListingUnit::Person)));
    }

    #[test]
    fn person_unit_shows_only_that_person() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let result = run(&mut model, idx(2)).unwrap();
        assert_eq!(result.messages[0].content, "persons found with Benson Meier");
        assert_eq!(model.visible_persons(), &[fx::benson()]);
    }

    #[test]
    fn module_unit_shows_every_lesson_of_the_module() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Module).build();
        let result = run(&mut model, idx(1)).unwrap();
        assert_eq!(result.messages[0].content, "lessons found with CS1010");
        assert_eq!(model.visible_lessons().len(), 2);
        assert_eq!(
            model.lesson_filter(),
            &LessonPredicate::FixedCode(Code::new("CS1010").unwrap())
        );
        assert_eq!(model.listing().current(), ListingUnit::Lesson);
        assert_eq!(model.listing().previous(), ListingUnit::Module);
    }

    #[test]
    fn index_past_the_end_is_an_index_error() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        assert!(matches!(
            run(&mut model, idx(5)),
            Err(AppError::Index(RecordKind::Person))
        ));

        let mut empty = ModelFixture::new().build();
        assert!(matches!(
            run(&mut empty, idx(1)),
            Err(AppError::Index(RecordKind::Lesson))
        ));
        assert_eq!(empty.listing().current(), ListingUnit::Module);
    }
}
