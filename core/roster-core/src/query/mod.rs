//! Query 모듈 — QuerySpec → Predicate + Comparator
//!
//! ```text
//! QuerySpec → build_predicate / build_comparator → QueryEngine::query_with
//!           → find_all() snapshot → filter → stable sort → Vec<Candidate>
//! ```

pub mod engine;
pub mod filter;
pub mod sort;

pub use engine::QueryEngine;
pub use filter::{Predicate, build_predicate, by_industry_contains, by_min_years};
pub use sort::{Comparator, build_comparator, by_date_of_register, by_name_asc, by_name_desc};

use std::fmt;
use std::str::FromStr;

/// 필터 대상 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Industry,
    Age,
    Years,
}

/// NAME/INDUSTRY 텍스트 연산자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextOp {
    #[default]
    Contains,
    StartsWith,
    Equals,
}

/// AGE/YEARS 숫자 연산자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumOp {
    #[default]
    Eq,
    Gte,
    Lte,
}

/// 정렬 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    NameAsc,
    NameDesc,
    DateOfRegister,
}

/// Returned when a selector name is not one of the known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSelector {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownSelector {}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace(['-', ' '], "_")
}

macro_rules! selector_from_str {
    ($ty:ty, $kind:literal, { $($name:literal => $variant:expr),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = UnknownSelector;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match normalize(s).as_str() {
                    $($name => Ok($variant),)+
                    _ => Err(UnknownSelector {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

selector_from_str!(Field, "field", {
    "NAME" => Field::Name,
    "INDUSTRY" => Field::Industry,
    "AGE" => Field::Age,
    "YEARS" => Field::Years,
});

selector_from_str!(TextOp, "text operator", {
    "CONTAINS" => TextOp::Contains,
    "STARTS_WITH" => TextOp::StartsWith,
    "EQUALS" => TextOp::Equals,
});

selector_from_str!(NumOp, "numeric operator", {
    "EQ" => NumOp::Eq,
    "GTE" => NumOp::Gte,
    "LTE" => NumOp::Lte,
});

selector_from_str!(SortMode, "sort mode", {
    "NAME_ASC" => SortMode::NameAsc,
    "NAME_DESC" => SortMode::NameDesc,
    "DATEOFREGISTER" => SortMode::DateOfRegister,
    "DATE_OF_REGISTER" => SortMode::DateOfRegister,
});

/// One query: field + operator + raw query text + sort.
///
/// `field == None` means no filtering. `sort == None` keeps snapshot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    pub field: Option<Field>,
    pub text_op: TextOp,
    pub num_op: NumOp,
    pub query: String,
    pub sort: Option<SortMode>,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            field: Some(Field::Name),
            text_op: TextOp::Contains,
            num_op: NumOp::Eq,
            query: String::new(),
            sort: Some(SortMode::NameAsc),
        }
    }
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text query on NAME or INDUSTRY.
    pub fn text(field: Field, op: TextOp, query: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            text_op: op,
            query: query.into(),
            ..Self::default()
        }
    }

    /// Numeric query on AGE or YEARS.
    pub fn numeric(field: Field, op: NumOp, query: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            num_op: op,
            query: query.into(),
            ..Self::default()
        }
    }

    /// Query without any filter.
    pub fn all() -> Self {
        Self {
            field: None,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn without_sort(mut self) -> Self {
        self.sort = None;
        self
    }

    /// Sets the field from its selector name. Unrecognised names clear the
    /// field, which turns the filter into match-all.
    pub fn with_field_name(mut self, name: &str) -> Self {
        self.field = name.parse().ok();
        if self.field.is_none() {
            tracing::debug!(field = name, "unrecognised query field, filter disabled");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_spec() {
        let spec = QuerySpec::default();
        assert_eq!(spec.field, Some(Field::Name));
        assert_eq!(spec.text_op, TextOp::Contains);
        assert_eq!(spec.num_op, NumOp::Eq);
        assert!(spec.query.is_empty());
        assert_eq!(spec.sort, Some(SortMode::NameAsc));
    }

    #[test]
    fn selectors_parse_case_insensitively() {
        assert_eq!("name".parse::<Field>(), Ok(Field::Name));
        assert_eq!("YEARS".parse::<Field>(), Ok(Field::Years));
        assert_eq!("starts_with".parse::<TextOp>(), Ok(TextOp::StartsWith));
        assert_eq!("starts-with".parse::<TextOp>(), Ok(TextOp::StartsWith));
        assert_eq!(" gte ".parse::<NumOp>(), Ok(NumOp::Gte));
        assert_eq!(
            "DATEOFREGISTER".parse::<SortMode>(),
            Ok(SortMode::DateOfRegister)
        );
        assert_eq!("name_desc".parse::<SortMode>(), Ok(SortMode::NameDesc));
    }

    #[test]
    fn unknown_selector_reports_kind() {
        let err = "salary".parse::<Field>().unwrap_err();
        assert_eq!(err.kind, "field");
        assert_eq!(err.to_string(), "unknown field 'salary'");
    }

    #[test]
    fn unknown_field_name_disables_filter() {
        let spec = QuerySpec::new().with_field_name("salary");
        assert_eq!(spec.field, None);
        let spec = QuerySpec::new().with_field_name("industry");
        assert_eq!(spec.field, Some(Field::Industry));
    }
}
