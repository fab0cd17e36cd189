//! MWON record parser.
//!
//! An MWON page is ordinary wikitext written to a convention:
//!
//! ```text
//! == Group ==              (discarded)
//! === Alpha ===            (starts a record, id = "Alpha")
//! * Key: Value             (scalar field)
//! * Tags                   (list field...)
//! ** a                     (...populated by nested bullets)
//! ** b
//! Anything else            (appended to "section body")
//! ```
//!
//! Parsing never fails. Lines that do not fit the convention are either kept
//! as free text or skipped, and skipped lines are reported as [`Diagnostic`]s.

use crate::normalize::normalize;
use crate::types::{Diagnostic, DiagnosticSeverity, FieldValue, Record, SECTION_BODY_FIELD};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// A whole line holding a `== Title ==` heading.
#[allow(clippy::expect_used)]
static LEVEL2_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^==[^=]+==$").expect("level 2 heading regex is valid"));

/// A `=== Title ===` heading, capturing the title.
#[allow(clippy::expect_used)]
static LEVEL3_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"===\s*(.*?)\s*===").expect("level 3 heading regex is valid"));

const BULLET: &str = "* ";
const NESTED_BULLET: &str = "** ";

/// Output of [`MwonParser::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// One record per `=== Title ===` section, in document order.
    pub records: Vec<Record>,
    /// Notes about skipped content.
    pub diagnostics: Vec<Diagnostic>,
}

/// Stateless parser turning MWON wikitext into [`Record`]s.
///
/// ```rust
/// use mwon_core::MwonParser;
///
/// let result = MwonParser::new().parse("=== Alpha ===\n* Key: Value\n");
/// assert_eq!(result.records.len(), 1);
/// assert_eq!(result.records[0].id(), "Alpha");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MwonParser;

/// A `=== Title ===` heading and the text up to the next one.
struct Section<'a> {
    title: &'a str,
    body: &'a str,
    /// 1-based document line of the body's first line (the heading's own line).
    first_line: usize,
}

impl MwonParser {
    /// Creates a parser.
    pub const fn new() -> Self {
        Self
    }

    /// Parses a whole document.
    pub fn parse(&self, text: &str) -> ParseResult {
        let text = LEVEL2_HEADING_RE.replace_all(text, "");
        let sections = split_sections(&text);
        let mut diagnostics = Vec::new();

        if sections.is_empty() {
            diagnostics.push(Diagnostic {
                severity: DiagnosticSeverity::Warn,
                message: "No `=== Title ===` headings found; document produced no records".into(),
                line: None,
            });
        }

        let records: Vec<Record> = sections
            .iter()
            .map(|section| Self::parse_section(section, &mut diagnostics))
            .collect();

        debug!(
            records = records.len(),
            diagnostics = diagnostics.len(),
            "Parsed MWON document"
        );

        ParseResult {
            records,
            diagnostics,
        }
    }

    fn parse_section(section: &Section<'_>, diagnostics: &mut Vec<Diagnostic>) -> Record {
        let mut record = Record::new(normalize(section.title));
        let mut current_key: Option<String> = None;

        for (offset, raw_line) in section.body.lines().enumerate() {
            let line_no = section.first_line + offset;
            let line = normalize(raw_line);

            if let Some(rest) = line.strip_prefix(BULLET) {
                current_key = Some(apply_bullet(&mut record, rest));
            } else if let Some(rest) = line.strip_prefix(NESTED_BULLET) {
                let item = normalize(rest);
                // `* :` declares field "" but it cannot take items.
                match current_key.as_deref().filter(|key| !key.is_empty()) {
                    Some(key) => append_item(&mut record, key, item, line_no, diagnostics),
                    None => diagnostics.push(Diagnostic {
                        severity: DiagnosticSeverity::Info,
                        message: format!(
                            "Nested bullet '{item}' in section '{}' has no parent bullet; skipped",
                            record.id()
                        ),
                        line: Some(line_no),
                    }),
                }
            } else if !line.is_empty() {
                append_body(&mut record, normalize(line));
            }
        }

        // Only the last declared key is pruned; earlier unpopulated lists stay.
        if let Some(key) = current_key {
            if record.get(&key).is_some_and(FieldValue::is_empty_list) {
                record.remove(&key);
            }
        }

        record
    }
}

/// Parses a document and returns only its records.
///
/// ```rust
/// use mwon_core::parse_records;
///
/// let records = parse_records("=== Beta ===\n* Empty:\n");
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].len(), 1); // only `id`
/// ```
pub fn parse_records(text: &str) -> Vec<Record> {
    MwonParser::new().parse(text).records
}

/// Splits on level 3 headings. Text before the first heading is dropped.
fn split_sections(text: &str) -> Vec<Section<'_>> {
    let headings: Vec<_> = LEVEL3_HEADING_RE.captures_iter(text).collect();
    let mut sections = Vec::with_capacity(headings.len());

    let mut counted_to = 0;
    let mut line = 1;

    for (idx, caps) in headings.iter().enumerate() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let title = caps.get(1).map_or("", |m| m.as_str());
        let body_end = headings
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |m| m.start());

        line += text[counted_to..whole.end()].matches('\n').count();
        counted_to = whole.end();

        sections.push(Section {
            title,
            body: &text[whole.end()..body_end],
            first_line: line,
        });
    }

    sections
}

/// Applies a `* key: value`, `* key:` or `* key` bullet; returns the key.
fn apply_bullet(record: &mut Record, rest: &str) -> String {
    if let Some((key, value)) = rest.split_once(':') {
        let key = normalize(key);
        let value = normalize(value);
        if value.is_empty() {
            record.insert(key, Vec::<String>::new());
        } else {
            record.insert(key, value);
        }
        key.to_string()
    } else {
        let key = normalize(rest);
        if !record.contains_key(key) {
            record.insert(key, Vec::<String>::new());
        }
        key.to_string()
    }
}

fn append_item(
    record: &mut Record,
    key: &str,
    item: &str,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) {
    if let Some(FieldValue::List(items)) = record.get_mut(key) {
        items.push(item.to_string());
        return;
    }

    diagnostics.push(Diagnostic {
        severity: DiagnosticSeverity::Warn,
        message: format!(
            "Nested bullet '{item}' under scalar field '{key}' in section '{}'; skipped",
            record.id()
        ),
        line: Some(line),
    });
}

fn append_body(record: &mut Record, line: &str) {
    match record.get_mut(SECTION_BODY_FIELD) {
        Some(FieldValue::Text(body)) => {
            body.push(' ');
            body.push_str(line);
        },
        Some(FieldValue::List(items)) => items.push(line.to_string()),
        None => record.insert(SECTION_BODY_FIELD, line),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn to_json(records: &[Record]) -> serde_json::Value {
        serde_json::to_value(records).unwrap()
    }

    #[test]
    fn test_full_example() {
        let text = "== Ignore ==\n=== Alpha ===\n* Key: Value\n* Tags\n** a\n** b\n\nfree text";

        let records = parse_records(text);

        assert_eq!(
            to_json(&records),
            json!([{
                "id": "Alpha",
                "Key": "Value",
                "Tags": ["a", "b"],
                "section body": "free text"
            }])
        );
    }

    #[test]
    fn test_empty_list_declaration_is_pruned() {
        let records = parse_records("=== Beta ===\n* Empty:\n");
        assert_eq!(to_json(&records), json!([{ "id": "Beta" }]));
    }

    #[test]
    fn test_only_last_empty_key_is_pruned() {
        let text = "=== Gamma ===\n* First\n* Second\n** x\n";
        let records = parse_records(text);

        assert_eq!(
            to_json(&records),
            json!([{ "id": "Gamma", "First": [], "Second": ["x"] }])
        );
    }

    #[test]
    fn test_nested_bullet_before_any_bullet_is_dropped() {
        let result = MwonParser::new().parse("=== Delta ===\n** orphan\n* Key: v\n");

        assert_eq!(to_json(&result.records), json!([{ "id": "Delta", "Key": "v" }]));
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, DiagnosticSeverity::Info);
        assert_eq!(result.diagnostics[0].line, Some(2));
    }

    #[test]
    fn test_sections_are_independent() {
        let text = "=== One ===\n* A: 1\nbody one\n=== Two ===\n* B\n** x\n";
        let records = parse_records(text);

        assert_eq!(
            to_json(&records),
            json!([
                { "id": "One", "A": "1", "section body": "body one" },
                { "id": "Two", "B": ["x"] }
            ])
        );
    }

    #[test]
    fn test_no_headings_yields_no_records() {
        let result = MwonParser::new().parse("Intro text\n* Key: v\n== Group ==\n");

        assert!(result.records.is_empty());
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, DiagnosticSeverity::Warn);
    }

    #[test]
    fn test_text_before_first_heading_is_discarded() {
        let records = parse_records("preamble\n* Stray: 1\n=== Only ===\n* Kept: 2\n");
        assert_eq!(to_json(&records), json!([{ "id": "Only", "Kept": "2" }]));
    }

    #[test]
    fn test_section_without_body() {
        let records = parse_records("=== Empty ===");
        assert_eq!(to_json(&records), json!([{ "id": "Empty" }]));
    }

    #[test]
    fn test_body_lines_joined_with_spaces() {
        let records = parse_records("=== Prose ===\nfirst line  \n\n  second line\nthird\n");
        assert_eq!(
            records[0].section_body(),
            Some("first line second line third")
        );
    }

    #[test]
    fn test_body_keeps_first_assignment_position() {
        let records = parse_records("=== Order ===\nintro\n* Key: v\noutro\n");
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"id":"Order","section body":"intro outro","Key":"v"}"#
        );
    }

    #[test]
    fn test_value_split_on_first_colon() {
        let records = parse_records("=== Links ===\n* Homepage: https://example.org:8080/x\n");
        assert_eq!(
            records[0].get("Homepage"),
            Some(&FieldValue::Text("https://example.org:8080/x".into()))
        );
    }

    #[test]
    fn test_scalar_overwrites_and_keeps_position() {
        let records = parse_records("=== Dup ===\n* A: 1\n* B: 2\n* A: 3\n");
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"id":"Dup","A":"3","B":"2"}"#
        );
    }

    #[test]
    fn test_bare_key_repeated_merges_items() {
        let records = parse_records("=== Merge ===\n* Tags\n** a\n* Other: x\n* Tags\n** b\n");
        assert_eq!(
            records[0].get("Tags").and_then(FieldValue::as_list),
            Some(&["a".to_string(), "b".to_string()][..])
        );
    }

    #[test]
    fn test_empty_value_key_resets_list() {
        let records = parse_records("=== Reset ===\n* Tags\n** a\n* Tags:\n** b\n");
        assert_eq!(
            records[0].get("Tags").and_then(FieldValue::as_list),
            Some(&["b".to_string()][..])
        );
    }

    #[test]
    fn test_nested_bullet_under_scalar_is_skipped() {
        let result = MwonParser::new().parse("=== Scalar ===\n* Key: v\n** item\n");

        assert_eq!(to_json(&result.records), json!([{ "id": "Scalar", "Key": "v" }]));
        assert_eq!(result.diagnostics[0].severity, DiagnosticSeverity::Warn);
        assert_eq!(result.diagnostics[0].line, Some(3));
    }

    #[test]
    fn test_direction_marks_stripped_from_tokens() {
        let text = "=== Title\u{200f} ===\n* Key\u{200e}: Value\u{200e}\n* Tags\u{202c}\n** a\u{200e}\n";
        let records = parse_records(text);

        assert_eq!(
            to_json(&records),
            json!([{ "id": "Title", "Key": "Value", "Tags": ["a"] }])
        );
    }

    #[test]
    fn test_heading_whitespace_variants() {
        let records = parse_records("===Tight===\n* A: 1\n===   Loose   ===\n");
        assert_eq!(records[0].id(), "Tight");
        assert_eq!(records[1].id(), "Loose");
    }

    #[test]
    fn test_level2_heading_not_treated_as_record() {
        let text = "=== A ===\n* K: 1\n== Next group ==\n=== B ===\n";
        let records = parse_records(text);

        assert_eq!(records.len(), 2);
        assert!(records[0].section_body().is_none());
    }

    #[test]
    fn test_bullet_without_space_is_body_text() {
        let records = parse_records("=== Odd ===\n*NoSpace\n*\n");
        assert_eq!(records[0].section_body(), Some("*NoSpace *"));
    }

    #[test]
    fn test_empty_key_bullet() {
        let records = parse_records("=== Blank ===\n* :\n");
        assert_eq!(to_json(&records), json!([{ "id": "Blank" }]));
    }

    #[test]
    fn test_nested_bullet_under_empty_key_is_dropped() {
        let result = MwonParser::new().parse("=== T ===\n* :\n** x\n");

        assert_eq!(to_json(&result.records), json!([{ "id": "T" }]));
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, DiagnosticSeverity::Info);
        assert_eq!(result.diagnostics[0].line, Some(3));
    }

    #[test]
    fn test_empty_key_kept_when_not_last() {
        let records = parse_records("=== T ===\n* :\n** x\n* K: v\n");
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"id":"T","":[],"K":"v"}"#
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let records = parse_records("=== Win ===\r\n* Key: v\r\n* Tags\r\n** a\r\n");
        assert_eq!(
            to_json(&records),
            json!([{ "id": "Win", "Key": "v", "Tags": ["a"] }])
        );
    }

    #[test]
    fn test_free_text_into_list_section_body() {
        let records = parse_records("=== Weird ===\n* section body\n** item\nprose\n");
        assert_eq!(
            records[0].get(SECTION_BODY_FIELD).and_then(FieldValue::as_list),
            Some(&["item".to_string(), "prose".to_string()][..])
        );
    }

    #[test]
    fn test_id_bullet_overwrites_title() {
        let records = parse_records("=== Title ===\n* id: custom\n* K: v\n");
        assert_eq!(
            serde_json::to_string(&records[0]).unwrap(),
            r#"{"id":"custom","K":"v"}"#
        );
    }

    #[test]
    fn test_diagnostic_line_numbers_account_for_previous_sections() {
        let text = "intro\n=== One ===\n* K: v\n=== Two ===\n** orphan\n";
        let result = MwonParser::new().parse(text);
        assert_eq!(result.diagnostics[0].line, Some(5));
    }

    proptest! {
        #[test]
        fn test_parse_is_deterministic(text in "[=*: a-z\n]{0,200}") {
            let parser = MwonParser::new();
            prop_assert_eq!(parser.parse(&text), parser.parse(&text));
        }

        #[test]
        fn test_without_triple_equals_no_records(text in "[=*: a-z\n]{0,200}") {
            prop_assume!(!text.contains("==="));
            prop_assert!(parse_records(&text).is_empty());
        }

        #[test]
        fn test_every_record_has_id_first(text in "(=== [a-z]{1,5} ===\n(\\* [j-z]{1,3}(: [a-z]{0,3})?\n|\\*\\* [a-z]{1,3}\n|[a-z ]{0,8}\n){0,6}){1,4}") {
            let records = parse_records(&text);
            prop_assert!(!records.is_empty());
            for record in &records {
                let first = record.fields().next().map(|(k, _)| k);
                prop_assert_eq!(first, Some("id"));
            }
        }
    }
}
