use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayRecord;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, term: &str) -> Result<CmdResult> {
    let listed: Vec<DisplayRecord> = store
        .search_positions(term)
        .into_iter()
        .map(|pos| Ok(DisplayRecord::at(pos, store.get(pos)?)))
        .collect::<Result<_>>()?;

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No records match \"{}\".", term)));
    }
    Ok(result.with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;
    use crate::store::MemBackend;

    fn store() -> RecordStore<MemBackend> {
        RecordStore::open(MemBackend::with_records(vec![
            Record::new("AB1234", "Jane Doe", "Engineer", "R&D"),
            Record::new("CD5678", "John Roe", "Analyst", "Finance"),
            Record::new("EF9012", "Ann Lee", "Engineer", "Support"),
        ]))
        .unwrap()
    }

    #[test]
    fn finds_matches_with_their_positions() {
        let result = run(&store(), "ENGINEER").unwrap();
        let found: Vec<(usize, &str)> = result
            .listed_records
            .iter()
            .map(|dr| (dr.position, dr.record.id.as_str()))
            .collect();
        assert_eq!(found, vec![(1, "AB1234"), (3, "EF9012")]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn reports_when_nothing_matches() {
        let result = run(&store(), "marketing").unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
