//! Tag substring match predicate

use reflect_core::Searchable;

/// Does any of the record's tags contain `term`?
///
/// Case-sensitive substring match. A record without tags never matches.
/// The empty term is not special-cased here; callers bypass filtering
/// entirely when the term is empty.
pub fn matches<R: Searchable + ?Sized>(term: &str, record: &R) -> bool {
    record.search().iter().any(|tag| tag.contains(term))
}

/// Records matching `term`, in their original order
pub fn filter_records<R: Searchable + Clone>(term: &str, records: &[R]) -> Vec<R> {
    records
        .iter()
        .filter(|record| matches(term, *record))
        .cloned()
        .collect()
}
