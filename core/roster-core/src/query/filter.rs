//! Predicate builders.

use super::{Field, NumOp, QuerySpec, TextOp};
use crate::model::Candidate;
use tracing::debug;

/// Boxed candidate predicate.
pub type Predicate = Box<dyn Fn(&Candidate) -> bool + Send + Sync>;

/// Case-insensitive "industry contains" filter.
///
/// The query is trimmed; a blank query matches every candidate.
pub fn by_industry_contains(query: &str) -> Predicate {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return match_all();
    }
    Box::new(move |c| c.industry.to_lowercase().contains(&q))
}

/// `years_of_experience >= min`.
pub fn by_min_years(min: i32) -> Predicate {
    Box::new(move |c| c.years_of_experience >= min)
}

pub fn match_all() -> Predicate {
    Box::new(|_| true)
}

pub fn match_none() -> Predicate {
    Box::new(|_| false)
}

/// Builds the filter for `spec`.
///
/// NAME/INDUSTRY compare lower-cased text with the text operator. AGE/YEARS
/// parse the query as an integer; an unparsable query yields a predicate
/// that matches nothing. No field means no filtering.
pub fn build_predicate(spec: &QuerySpec) -> Predicate {
    match spec.field {
        Some(Field::Name) => text_predicate(spec.text_op, &spec.query, |c| c.name.as_str()),
        Some(Field::Industry) => text_predicate(spec.text_op, &spec.query, |c| c.industry.as_str()),
        Some(Field::Age) => match parse_number(&spec.query) {
            Some(n) => numeric_predicate(spec.num_op, n, |c| c.age),
            None => match_none(),
        },
        Some(Field::Years) => match parse_number(&spec.query) {
            Some(n) if spec.num_op == NumOp::Gte => by_min_years(n),
            Some(n) => numeric_predicate(spec.num_op, n, |c| c.years_of_experience),
            None => match_none(),
        },
        None => match_all(),
    }
}

fn text_predicate(op: TextOp, query: &str, field: fn(&Candidate) -> &str) -> Predicate {
    let q = query.to_lowercase();
    match op {
        TextOp::Contains => Box::new(move |c| field(c).to_lowercase().contains(&q)),
        TextOp::StartsWith => Box::new(move |c| field(c).to_lowercase().starts_with(&q)),
        TextOp::Equals => Box::new(move |c| field(c).to_lowercase() == q),
    }
}

fn numeric_predicate(op: NumOp, n: i32, field: fn(&Candidate) -> i32) -> Predicate {
    match op {
        NumOp::Eq => Box::new(move |c| field(c) == n),
        NumOp::Gte => Box::new(move |c| field(c) >= n),
        NumOp::Lte => Box::new(move |c| field(c) <= n),
    }
}

fn parse_number(query: &str) -> Option<i32> {
    match query.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            debug!(query, "bad number in numeric query, matching nothing");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<Candidate> {
        vec![
            Candidate::new("Alice Johnson", 28, "Software", 5),
            Candidate::new("Bob Martin", 35, "Finance", 10),
            Candidate::new("Carla Gomez", 31, "Marketing", 7),
        ]
    }

    fn names(pred: &Predicate) -> Vec<String> {
        people()
            .into_iter()
            .filter(|c| pred(c))
            .map(|c| c.name)
            .collect()
    }

    #[test]
    fn name_contains_is_case_insensitive() {
        let p = build_predicate(&QuerySpec::text(Field::Name, TextOp::Contains, "MAR"));
        assert_eq!(names(&p), vec!["Bob Martin"]);
    }

    #[test]
    fn name_starts_with_and_equals() {
        let p = build_predicate(&QuerySpec::text(Field::Name, TextOp::StartsWith, "car"));
        assert_eq!(names(&p), vec!["Carla Gomez"]);

        let p = build_predicate(&QuerySpec::text(Field::Name, TextOp::Equals, "alice johnson"));
        assert_eq!(names(&p), vec!["Alice Johnson"]);

        let p = build_predicate(&QuerySpec::text(Field::Name, TextOp::Equals, "alice"));
        assert!(names(&p).is_empty());
    }

    #[test]
    fn industry_uses_text_operator() {
        let p = build_predicate(&QuerySpec::text(Field::Industry, TextOp::StartsWith, "FIN"));
        assert_eq!(names(&p), vec!["Bob Martin"]);

        let p = build_predicate(&QuerySpec::text(Field::Industry, TextOp::Contains, "ing"));
        assert_eq!(names(&p), vec!["Carla Gomez"]);
    }

    #[test]
    fn industry_contains_helper_trims_and_matches_all_on_blank() {
        assert_eq!(names(&by_industry_contains("  soft ")), vec!["Alice Johnson"]);
        assert_eq!(names(&by_industry_contains("   ")).len(), 3);
    }

    #[test]
    fn age_operators() {
        let p = build_predicate(&QuerySpec::numeric(Field::Age, NumOp::Eq, "35"));
        assert_eq!(names(&p), vec!["Bob Martin"]);

        let p = build_predicate(&QuerySpec::numeric(Field::Age, NumOp::Gte, "31"));
        assert_eq!(names(&p), vec!["Bob Martin", "Carla Gomez"]);

        let p = build_predicate(&QuerySpec::numeric(Field::Age, NumOp::Lte, " 31 "));
        assert_eq!(names(&p), vec!["Alice Johnson", "Carla Gomez"]);
    }

    #[test]
    fn years_gte_matches_min_years_helper() {
        let via_spec = build_predicate(&QuerySpec::numeric(Field::Years, NumOp::Gte, "7"));
        let via_helper = by_min_years(7);
        assert_eq!(names(&via_spec), names(&via_helper));
        assert_eq!(names(&via_spec), vec!["Bob Martin", "Carla Gomez"]);
    }

    #[test]
    fn years_eq_and_lte() {
        let p = build_predicate(&QuerySpec::numeric(Field::Years, NumOp::Eq, "5"));
        assert_eq!(names(&p), vec!["Alice Johnson"]);
        let p = build_predicate(&QuerySpec::numeric(Field::Years, NumOp::Lte, "7"));
        assert_eq!(names(&p), vec!["Alice Johnson", "Carla Gomez"]);
    }

    #[test]
    fn bad_number_matches_nothing() {
        for field in [Field::Age, Field::Years] {
            for op in [NumOp::Eq, NumOp::Gte, NumOp::Lte] {
                let p = build_predicate(&QuerySpec::numeric(field, op, "invalid"));
                assert!(names(&p).is_empty());
            }
        }
    }

    #[test]
    fn no_field_matches_everything() {
        let p = build_predicate(&QuerySpec::all());
        assert_eq!(names(&p).len(), 3);
    }
}
