use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecordSelector;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::records_by_selectors;

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let records = records_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::model::Record;
    use crate::store::MemBackend;

    #[test]
    fn views_selected_records() {
        let store = RecordStore::open(MemBackend::with_records(vec![
            Record::new("AB1234", "Jane", "R", "D"),
            Record::new("CD5678", "John", "R", "D"),
        ]))
        .unwrap();

        let result = run(&store, &[RecordSelector::Id("CD5678".into())]).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].position, 2);
        assert_eq!(result.listed_records[0].record.name, "John");

        assert!(matches!(
            run(&store, &[RecordSelector::Position(5)]),
            Err(RosterError::NotFound(_))
        ));
    }
}
