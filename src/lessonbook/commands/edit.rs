use crate::commands::{CmdMessage, CmdResult, EditFields, UiUpdate};
use crate::error::{AppError, Result};
use crate::index::DisplayIndex;
use crate::manager::ModelManager;
use crate::model::{Lesson, Person, RecordKind};
use crate::store::DataStore;

use super::helpers::{resolve_lesson, resolve_person};

pub const USAGE: &str = "edit: Edits the person or lesson identified by the index number used in the last listing. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
            INDEX [m/CODE] [ct/CLASS_TYPE] [l/LOCATION] [g/GROUP] [ts/TIME_SLOT]\n\
Example: edit 1 p/91234567 e/johndoe@example.com";

pub fn run<S: DataStore>(
    model: &mut ModelManager<S>,
    index: DisplayIndex,
    fields: &EditFields,
) -> Result<CmdResult> {
    let message = match model.active_kind() {
        RecordKind::Person => {
            if fields.has_lesson_fields() {
                return Err(AppError::validation(
                    "fields",
                    "Lesson fields cannot be applied to a person",
                ));
            }
            let target = resolve_person(model, index)?;
            let edited = apply_to_person(&target, fields);
            let message = format!("Edited Person: {}", edited);
            model.update_person(&target, edited)?;
            message
        }
        RecordKind::Lesson => {
            if fields.has_person_fields() {
                return Err(AppError::validation(
                    "fields",
                    "Person fields cannot be applied to a lesson",
                ));
            }
            let target = resolve_lesson(model, index)?;
            let edited = apply_to_lesson(&target, fields);
            let message = format!("Edited Lesson: {}", edited);
            model.update_lesson(&target, edited)?;
            message
        }
    };

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_update(UiUpdate::ModelChanged))
}

fn apply_to_person(target: &Person, fields: &EditFields) -> Person {
    Person {
        name: fields.name.clone().unwrap_or_else(|| target.name.clone()),
        phone: fields.phone.clone().unwrap_or_else(|| target.phone.clone()),
        email: fields.email.clone().unwrap_or_else(|| target.email.clone()),
        address: fields
            .address
            .clone()
            .unwrap_or_else(|| target.address.clone()),
        tags: fields.tags.clone().unwrap_or_else(|| target.tags.clone()),
    }
}

fn apply_to_lesson(target: &Lesson, fields: &EditFields) -> Lesson {
    Lesson {
        code: fields.code.clone().unwrap_or_else(|| target.code.clone()),
        class_type: fields.class_type.unwrap_or(target.class_type),
        location: fields
            .location
            .clone()
            .unwrap_or_else(|| target.location.clone()),
        group: fields.group.unwrap_or(target.group),
        time_slot: fields.time_slot.unwrap_or(target.time_slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingUnit;
    use crate::manager::fixtures::ModelFixture;
    use crate::model::book::fixtures as fx;
    use crate::model::{Group, Phone};

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::from_one_based(n).unwrap()
    }

    #[test]
    fn edits_only_given_person_fields() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let fields = EditFields {
            phone: Some(Phone::new("91234567").unwrap()),
            ..Default::default()
        };
        run(&mut model, idx(1), &fields).unwrap();

        let edited = &model.book().persons()[0];
        assert_eq!(edited.phone.as_str(), "91234567");
        assert_eq!(edited.name, fx::alice().name);
        assert_eq!(edited.tags, fx::alice().tags);
    }

    #[test]
    fn empty_tag_set_clears_tags() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let fields = EditFields {
            tags: Some(Default::default()),
            ..Default::default()
        };
        run(&mut model, idx(1), &fields).unwrap();
        assert!(model.book().persons()[0].tags.is_empty());
    }

    #[test]
    fn editing_into_an_existing_person_is_duplicate() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let alice = fx::alice();
        let fields = EditFields {
            name: Some(alice.name),
            phone: Some(alice.phone),
            email: Some(alice.email),
            address: Some(alice.address),
            tags: Some(alice.tags),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut model, idx(2), &fields),
            Err(AppError::Duplicate(_))
        ));
    }

    #[test]
    fn edits_lesson_in_lesson_units() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Lesson).build();
        let fields = EditFields {
            group: Some(Group::new(9).unwrap()),
            ..Default::default()
        };
        run(&mut model, idx(3), &fields).unwrap();
        assert_eq!(model.book().lessons()[2].group.value(), 9);
    }

    #[test]
    fn mismatched_fields_are_rejected() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Lesson).build();
        let fields = EditFields {
            phone: Some(Phone::new("91234567").unwrap()),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut model, idx(1), &fields),
            Err(AppError::Validation { field: "fields", .. })
        ));
    }

    #[test]
    fn out_of_range_is_index_error() {
        let mut model = ModelFixture::typical().listing(ListingUnit::Person).build();
        let fields = EditFields {
            phone: Some(Phone::new("91234567").unwrap()),
            ..Default::default()
        };
        assert!(matches!(
            run(&mut model, idx(9), &fields),
            Err(AppError::Index(RecordKind::Person))
        ));
    }
}
