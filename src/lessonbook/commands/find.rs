use crate::commands::{CmdMessage, CmdResult, FindField, UiUpdate};
use crate::error::{AppError, Result};
use crate::listing::ListingUnit;
use crate::manager::ModelManager;
use crate::predicates::{LessonPredicate, PersonPredicate};
use crate::store::DataStore;

pub const USAGE: &str = "find: Finds all persons whose field contains any of the given keywords, \
or all lessons whose module code does.\n\
Parameters: [name|phone|email|address|module] KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie\n\
Example: find module cs2103";

pub fn run<S: DataStore>(
    model: &mut ModelManager<S>,
    field: FindField,
    keywords: &[String],
) -> Result<CmdResult> {
    if keywords.is_empty() {
        return Err(AppError::validation(
            "keywords",
            "At least one keyword must be given",
        ));
    }
    let keywords = keywords.to_vec();

    let (unit, message) = match field {
        FindField::Module => {
            model.switch_unit(ListingUnit::Lesson);
            model.update_lesson_filter(LessonPredicate::CodeContainsKeywords(keywords));
            (
                ListingUnit::Lesson,
                format!("{} lessons listed!", model.visible_lessons().len()),
            )
        }
        person_field => {
            let predicate = match person_field {
                FindField::Phone => PersonPredicate::PhoneContainsKeywords(keywords),
                FindField::Email => PersonPredicate::EmailContainsKeywords(keywords),
                FindField::Address => PersonPredicate::AddressContainsKeywords(keywords),
                _ => PersonPredicate::NameContainsKeywords(keywords),
            };
            model.switch_unit(ListingUnit::Person);
            model.update_person_filter(predicate);
            (
                ListingUnit::Person,
                format!("{} persons listed!", model.visible_persons().len()),
            )
        }
    };

    Ok(CmdResult::default()
        .with_message(CmdMessage::info(message))
        .with_update(UiUpdate::ListingUnitChanged(unit)))
}
