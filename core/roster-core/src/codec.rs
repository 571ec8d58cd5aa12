//! TSV line codec for the backing file.
//!
//! Layout (one header line, then one record per line):
//!
//! ```text
//! id\tname\tage\tindustry\tyears\tdate_of_register
//! ```
//!
//! Text fields are escaped so that record text may contain tabs, newlines
//! and backslashes without breaking the line-oriented format:
//!
//! | raw  | escaped |
//! |------|---------|
//! | `\`  | `\\`    |
//! | TAB  | `\t`    |
//! | LF   | `\n`    |
//! | CR   | `\r`    |

use crate::model::{Candidate, TIMESTAMP_FORMAT};
use crate::validation::{MAX_ID, is_storable_id};
use chrono::NaiveDateTime;
use thiserror::Error;

/// 파일 헤더 라인
pub const HEADER: &str = "id\tname\tage\tindustry\tyears\tdate_of_register";

/// 레코드당 필드 수
pub const FIELD_COUNT: usize = 6;

const SEPARATOR: char = '\t';

/// Why a single line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected {expected} fields, found {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("invalid number in field '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("id {0} out of range (1..={max})", max = MAX_ID)]
    IdOutOfRange(i64),
}

/// Escapes backslash, tab, LF and CR.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Reverses [`escape`] in a single left-to-right pass.
///
/// Unknown sequences and a trailing lone backslash are kept as-is, so
/// hand-edited files never fail to load because of stray backslashes.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// 레코드를 한 줄로 인코딩 (개행 문자 미포함)
pub fn encode_line(candidate: &Candidate) -> String {
    let registered = candidate
        .registered_at()
        .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_default();

    [
        candidate.id.to_string(),
        escape(&candidate.name),
        candidate.age.to_string(),
        escape(&candidate.industry),
        candidate.years_of_experience.to_string(),
        registered,
    ]
    .join("\t")
}

/// Decodes one data line. The header must be skipped by the caller.
pub fn decode_line(line: &str) -> Result<Candidate, LineError> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() != FIELD_COUNT {
        return Err(LineError::FieldCount {
            expected: FIELD_COUNT,
            actual: parts.len(),
        });
    }

    let id: i64 = parse_number("id", parts[0])?;
    if !is_storable_id(id) {
        return Err(LineError::IdOutOfRange(id));
    }
    let age: i32 = parse_number("age", parts[2])?;
    let years: i32 = parse_number("years", parts[4])?;

    let mut candidate = Candidate::new(unescape(parts[1]), age, unescape(parts[3]), years).with_id(id);
    candidate.set_registered_at(parse_timestamp(parts[5]));
    Ok(candidate)
}

/// Whether `line` is the header row.
pub fn is_header(line: &str) -> bool {
    line.trim_end() == HEADER
}

fn parse_number<T: std::str::FromStr>(field: &'static str, raw: &str) -> Result<T, LineError> {
    raw.trim().parse().map_err(|_| LineError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

// 비어 있거나 "null"이거나 포맷이 다르면 시각 없음으로 취급 (라인 자체는 유효)
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
        return None;
    }
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape("a\tb"), "a\\tb");
        assert_eq!(escape("line1\nline2\r"), "line1\\nline2\\r");
        assert_eq!(escape("C:\\temp"), "C:\\\\temp");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn unescape_is_single_pass() {
        // backslash followed by 'n' must survive as two characters
        let raw = "\\n";
        assert_eq!(unescape(&escape(raw)), raw);
        assert_eq!(unescape("\\\\n"), "\\n");
    }

    #[test]
    fn unescape_keeps_unknown_sequences() {
        assert_eq!(unescape("a\\qb"), "a\\qb");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn decode_valid_line() {
        let c = decode_line("1\tJohn\t30\tIT\t5\t2025-10-31 12:00:00").unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.name, "John");
        assert_eq!(c.age, 30);
        assert_eq!(c.industry, "IT");
        assert_eq!(c.years_of_experience, 5);
        let expected = NaiveDate::from_ymd_opt(2025, 10, 31)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(c.registered_at(), Some(expected));
    }

    #[test]
    fn decode_tolerates_missing_timestamp() {
        let c = decode_line("2\tAnna\t28\tFinance\t5\tnull").unwrap();
        assert!(c.registered_at().is_none());
        let c = decode_line("3\tAnna\t28\tFinance\t5\t").unwrap();
        assert!(c.registered_at().is_none());
    }

    #[test]
    fn decode_rejects_wrong_field_count() {
        assert_eq!(
            decode_line("1\tJohn\t30\tIT"),
            Err(LineError::FieldCount {
                expected: 6,
                actual: 4
            })
        );
    }

    #[test]
    fn decode_rejects_bad_number() {
        let err = decode_line("1\tJohn\tthirty\tIT\t5\t").unwrap_err();
        assert_eq!(
            err,
            LineError::InvalidNumber {
                field: "age",
                value: "thirty".to_string()
            }
        );
    }

    #[test]
    fn decode_rejects_unreachable_ids() {
        for id in ["0", "-4", "9223372036854775807"] {
            let line = format!("{id}\tJohn\t30\tIT\t5\t");
            assert!(
                matches!(decode_line(&line), Err(LineError::IdOutOfRange(_))),
                "{id}"
            );
        }
        assert_eq!(decode_line(&format!("{MAX_ID}\tJohn\t30\tIT\t5\t")).unwrap().id, MAX_ID);
    }

    #[test]
    fn encode_escapes_text_fields() {
        let c = Candidate::new("Tab\tName", 30, "Multi\nLine", 3).with_id(4);
        let line = encode_line(&c);
        assert_eq!(line.split('\t').count(), FIELD_COUNT);
        assert!(!line.contains('\n'));

        let back = decode_line(&line).unwrap();
        assert_eq!(back.name, "Tab\tName");
        assert_eq!(back.industry, "Multi\nLine");
    }

    #[test]
    fn header_detection() {
        assert!(is_header(HEADER));
        assert!(is_header(&format!("{HEADER}\r")));
        assert!(!is_header("1\tJohn\t30\tIT\t5\t"));
    }

    proptest! {
        #[test]
        fn escape_round_trip(s in any::<String>()) {
            prop_assert_eq!(unescape(&escape(&s)), s);
        }

        #[test]
        fn escaped_text_has_no_separators(s in "[a-z\\t\\n\\r\\\\ ]{0,32}") {
            let escaped = escape(&s);
            prop_assert!(!escaped.contains('\t'));
            prop_assert!(!escaped.contains('\n'));
            prop_assert!(!escaped.contains('\r'));
        }
    }
}
