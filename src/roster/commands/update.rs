use crate::commands::{CmdMessage, CmdResult, RecordPatch};
use crate::error::Result;
use crate::index::{DisplayRecord, RecordSelector};
use crate::store::{RecordStore, StorageBackend};
use crate::validation::RecordInput;

use super::helpers::resolve_selector;

/// Applies `patch` on top of the selected record and re-validates the whole
/// form before replacing it. Unset patch fields keep their current values.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    selector: &RecordSelector,
    patch: &RecordPatch,
) -> Result<CmdResult> {
    let position = resolve_selector(store, selector)?;
    let current = store.get(position)?;

    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Nothing to update for {} {}",
            current.id, current.name
        )));
        return Ok(result);
    }

    let input = apply_patch(RecordInput::from_record(&current), patch);
    let record = input.validate()?;
    store.update(position, record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {} {}",
        position + 1,
        record.id,
        record.name
    )));
    result
        .listed_records
        .push(DisplayRecord::at(position, record.clone()));
    result.affected_records.push(record);
    Ok(result)
}

fn apply_patch(mut input: RecordInput, patch: &RecordPatch) -> RecordInput {
    let fields = [
        (&mut input.id, &patch.id),
        (&mut input.name, &patch.name),
        (&mut input.role, &patch.role),
        (&mut input.department, &patch.department),
        (&mut input.email, &patch.email),
        (&mut input.phone, &patch.phone),
        (&mut input.hire_date, &patch.hire_date),
        (&mut input.status, &patch.status),
    ];
    for (target, value) in fields {
        if let Some(value) = value {
            *target = value.clone();
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::{Record, Status};
    use crate::store::MemBackend;
    use crate::validation::ValidationError;
    use chrono::NaiveDate;

    fn store() -> RecordStore<MemBackend> {
        RecordStore::open(MemBackend::with_records(vec![
            Record::new("AB1234", "Jane Doe", "Engineer", "R&D")
                .with_hire_date(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()),
            Record::new("CD5678", "John Roe", "Analyst", "Finance"),
        ]))
        .unwrap()
    }

    #[test]
    fn patch_changes_only_given_fields() {
        let mut store = store();
        let patch = RecordPatch {
            role: Some("Lead Engineer".into()),
            status: Some("On Leave".into()),
            ..Default::default()
        };

        run(&mut store, &RecordSelector::Id("AB1234".into()), &patch).unwrap();

        let updated = store.get(0).unwrap();
        assert_eq!(updated.role, "Lead Engineer");
        assert_eq!(updated.status, Status::OnLeave);
        assert_eq!(updated.name, "Jane Doe");
        assert_eq!(
            updated.hire_date,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
        assert_eq!(store.get(1).unwrap().name, "John Roe");
    }

    #[test]
    fn invalid_patch_leaves_record_unchanged() {
        let mut store = store();
        let before = store.records();
        let patch = RecordPatch {
            email: Some("nope".into()),
            ..Default::default()
        };

        let err = run(&mut store, &RecordSelector::Position(1), &patch).unwrap_err();
        assert!(matches!(
            err,
            RosterError::Validation(ValidationError::InvalidEmail)
        ));
        assert_eq!(store.records(), before);
    }

    #[test]
    fn changing_id_to_an_existing_one_is_rejected() {
        let mut store = store();
        let patch = RecordPatch {
            id: Some("CD5678".into()),
            ..Default::default()
        };
        let err = run(&mut store, &RecordSelector::Position(1), &patch).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(_)));
    }

    #[test]
    fn missing_record_is_not_found() {
        let mut store = store();
        let patch = RecordPatch {
            name: Some("X".into()),
            ..Default::default()
        };
        let err = run(&mut store, &RecordSelector::Position(9), &patch).unwrap_err();
        assert!(matches!(err, RosterError::NotFound(_)));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut store = store();
        let result = run(
            &mut store,
            &RecordSelector::Position(1),
            &RecordPatch::default(),
        )
        .unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(store.backend().save_count(), 0);
    }
}
