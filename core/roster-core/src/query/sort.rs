//! Comparator builders.

use super::SortMode;
use crate::model::Candidate;
use std::cmp::Ordering;

/// Boxed candidate comparator.
pub type Comparator = Box<dyn Fn(&Candidate, &Candidate) -> Ordering + Send + Sync>;

/// Name ascending, case-insensitive.
pub fn by_name_asc() -> Comparator {
    Box::new(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
}

/// Name descending, case-insensitive. Exact reverse of [`by_name_asc`].
pub fn by_name_desc() -> Comparator {
    let asc = by_name_asc();
    Box::new(move |a, b| asc(a, b).reverse())
}

/// Registration time ascending; records without a timestamp sort last.
pub fn by_date_of_register() -> Comparator {
    Box::new(|a, b| match (a.registered_at(), b.registered_at()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    })
}

pub fn build_comparator(mode: SortMode) -> Comparator {
    match mode {
        SortMode::NameAsc => by_name_asc(),
        SortMode::NameDesc => by_name_desc(),
        SortMode::DateOfRegister => by_date_of_register(),
    }
}
