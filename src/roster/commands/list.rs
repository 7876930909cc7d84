use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayRecord;
use crate::model::RecordField;
use crate::store::{RecordStore, StorageBackend};

#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search_term: Option<String>,
    pub sort_by: Option<RecordField>,
}

/// Lists records in stored order, optionally filtered and/or sorted for
/// display. Display positions always refer to the stored order.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, options: &ListOptions) -> Result<CmdResult> {
    let mut positions: Vec<usize> = match &options.search_term {
        Some(term) => store.search_positions(term),
        None => (0..store.len()).collect(),
    };

    if let Some(field) = options.sort_by {
        let sorted: Vec<usize> = store
            .sorted_positions(field)
            .into_iter()
            .filter(|p| positions.contains(p))
            .collect();
        positions = sorted;
    }

    let listed = positions
        .into_iter()
        .map(|pos| Ok(DisplayRecord::at(pos, store.get(pos)?)))
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::MemBackend;

    fn store() -> RecordStore<MemBackend> {
        RecordStore::open(MemBackend::with_records(vec![
            Record::new("CD5678", "Zed", "Engineer", "R&D"),
            Record::new("AB1234", "Amy", "Analyst", "Finance"),
            Record::new("EF9012", "Bob", "Engineer", "Ops"),
        ]))
        .unwrap()
    }

    fn listed(result: &CmdResult) -> Vec<(usize, String)> {
        result
            .listed_records
            .iter()
            .map(|dr| (dr.position, dr.record.id.clone()))
            .collect()
    }

    #[test]
    fn lists_in_stored_order() {
        let result = run(&store(), &ListOptions::default()).unwrap();
        assert_eq!(
            listed(&result),
            vec![
                (1, "CD5678".to_string()),
                (2, "AB1234".to_string()),
                (3, "EF9012".to_string())
            ]
        );
    }

    #[test]
    fn sorting_keeps_stored_positions() {
        let options = ListOptions {
            sort_by: Some(RecordField::Id),
            ..Default::default()
        };
        let result = run(&store(), &options).unwrap();
        assert_eq!(
            listed(&result),
            vec![
                (2, "AB1234".to_string()),
                (1, "CD5678".to_string()),
                (3, "EF9012".to_string())
            ]
        );
    }

    #[test]
    fn search_and_sort_combine() {
        let options = ListOptions {
            search_term: Some("engineer".into()),
            sort_by: Some(RecordField::Name),
        };
        let result = run(&store(), &options).unwrap();
        assert_eq!(
            listed(&result),
            vec![(3, "EF9012".to_string()), (1, "CD5678".to_string())]
        );
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = RecordStore::open(MemBackend::new()).unwrap();
        let result = run(&store, &ListOptions::default()).unwrap();
        assert!(result.listed_records.is_empty());
    }
}
