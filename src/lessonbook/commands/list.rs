use crate::commands::{CmdMessage, CmdResult, ListTarget, UiUpdate};
use crate::listing::ListingUnit;
use crate::manager::ModelManager;
use crate::predicates::{LessonPredicate, PersonField, PersonPredicate};
use crate::store::DataStore;

pub const USAGE: &str = "list: Lists records in the given unit. Defaults to every person.\n\
Parameters: [person|module|location|lesson|address|email|phone|marked]\n\
Example: list module";

pub fn run<S: DataStore>(model: &mut ModelManager<S>, target: ListTarget) -> CmdResult {
    let (unit, message) = match target {
        ListTarget::Marked => {
            model.switch_unit(ListingUnit::Lesson);
            model.update_lesson_filter(model.favourites_predicate());
            (ListingUnit::Lesson, "Listed all marked lessons".to_string())
        }
        ListTarget::Unit(unit) => {
            model.switch_unit(unit);
            match unit {
                ListingUnit::Person => model.update_person_filter(PersonPredicate::All),
                ListingUnit::Address => unique_persons(model, PersonField::Address),
                ListingUnit::Email => unique_persons(model, PersonField::Email),
                ListingUnit::Phone => unique_persons(model, PersonField::Phone),
                ListingUnit::Module | ListingUnit::Location => model.handle_listing_unit(),
                ListingUnit::Lesson => model.update_lesson_filter(LessonPredicate::All),
            }
            (unit, format!("Listed all {}", plural(unit)))
        }
    };

    CmdResult::default()
        .with_message(CmdMessage::info(message))
        .with_update(UiUpdate::ListingUnitChanged(unit))
}

fn plural(unit: ListingUnit) -> &'static str {
    match unit {
        ListingUnit::Person => "persons",
        ListingUnit::Module => "modules",
        ListingUnit::Location => "locations",
        ListingUnit::Lesson => "lessons",
        ListingUnit::Address => "addresses",
        ListingUnit::Email => "emails",
        ListingUnit::Phone => "phones",
    }
}

fn unique_persons<S: DataStore>(model: &mut ModelManager<S>, field: PersonField) {
    let predicate = PersonPredicate::unique_by(field, model.book().persons());
    model.update_person_filter(predicate);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::bookmark;
    use crate::index::DisplayIndex;
    use crate::manager::fixtures::ModelFixture;
    use crate::model::book::fixtures as fx;

    #[test]
    fn module_unit_shows_one_row_per_code() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let result = run(&mut model, ListTarget::Unit(ListingUnit::Module));
        assert_eq!(result.messages[0].content, "Listed all modules");
        assert!(result.has_update(UiUpdate::ListingUnitChanged(ListingUnit::Module)));
        let codes: Vec<_> = model
            .visible_lessons()
            .iter()
            .map(|l| l.code.as_str())
            .collect();
        assert_eq!(codes, vec!["CS1010", "CS2010"]);
    }

    #[test]
    fn location_unit_shows_one_row_per_location() {
        let mut model = ModelFixture::typical().build();
        run(&mut model, ListTarget::Unit(ListingUnit::Location));
        assert_eq!(model.visible_lessons().len(), 2);
        assert_eq!(model.listing().previous(), ListingUnit::Module);
    }

    #[test]
    fn person_field_units_deduplicate() {
        let mut model = ModelFixture::typical().build();
        run(&mut model, ListTarget::Unit(ListingUnit::Address));
        assert_eq!(
            model.visible_persons(),
            &[fx::alice(), fx::benson(), fx::carl()]
        );

        run(&mut model, ListTarget::Unit(ListingUnit::Phone));
        assert_eq!(model.visible_persons().len(), 4);

        run(&mut model, ListTarget::Unit(ListingUnit::Person));
        assert_eq!(model.person_filter(), &PersonPredicate::All);
    }

    #[test]
    fn lesson_unit_shows_everything() {
        let mut model = ModelFixture::typical().build();
        run(&mut model, ListTarget::Unit(ListingUnit::Lesson));
        assert_eq!(model.visible_lessons(), fx::typical_lessons().as_slice());
    }

    #[test]
    fn marked_shows_favourites() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Lesson).build();
        bookmark::run(&mut model, DisplayIndex::from_one_based(2).unwrap()).unwrap();

        let result = run(&mut model, ListTarget::Marked);
        assert!(result.has_update(UiUpdate::ListingUnitChanged(ListingUnit::Lesson)));
        assert_eq!(model.visible_lessons(), &fx::typical_lessons()[1..2]);
    }
}
