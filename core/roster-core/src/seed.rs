//! 샘플 데이터 시딩
//!
//! `load_if_empty`는 여러 번 호출해도 데이터가 중복되지 않습니다.

use crate::error::RosterResult;
use crate::model::Candidate;
use crate::storage::RecordStore;
use tracing::info;

/// Pre-built sample candidates, all with `id == 0`.
pub fn samples() -> Vec<Candidate> {
    [
        ("Alice Johnson", 28, "Software", 5),
        ("Bob Martin", 35, "Finance", 10),
        ("Carla Gomez", 31, "Marketing", 7),
        ("David Alrefai", 26, "Software", 3),
        ("Elena Petrova", 29, "Healthcare", 6),
        ("Fahad Al-Salem", 33, "Sales", 8),
        ("Grace Kim", 24, "Design", 2),
        ("Hassan Ali", 41, "Education", 15),
        ("Isabella Rossi", 30, "Software", 6),
        ("Jamal Hassan", 27, "Retail", 4),
        ("Karin Svensson", 38, "Operations", 12),
        ("Lars Nilsson", 22, "Support", 1),
    ]
    .into_iter()
    .map(|(name, age, industry, years)| Candidate::new(name, age, industry, years))
    .collect()
}

/// Adds every sample, even when the store already has data.
pub fn load<S: RecordStore + ?Sized>(store: &S) -> RosterResult<usize> {
    let samples = samples();
    for candidate in &samples {
        store.add(candidate)?;
    }
    Ok(samples.len())
}

/// Seeds the store only when it is empty. Returns how many records were added.
pub fn load_if_empty<S: RecordStore + ?Sized>(store: &S) -> RosterResult<usize> {
    if !store.find_all().is_empty() {
        return Ok(0);
    }
    let added = load(store)?;
    info!("Seeded {} sample candidates", added);
    Ok(added)
}
