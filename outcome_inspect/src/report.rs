//! Loads a JSON document of serialized outcomes and renders one line per entry.
//!
//! Malformed entries are counted and logged, never fatal: one bad entry must
//! not hide the rest of the document. A missing file, a file that is not JSON
//! or an unparsable `--default` value are fatal.
use log::warn;
use outcome_common::shape::from_json;
use outcome_common::{OutcomeError, Result, Tag};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Reads the JSON document at `path`.
pub fn load_document(path: &Path) -> Result<Value> {
    if !is_file_exist(path) {
        return Err(OutcomeError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file: {}", path.display()),
        )));
    }
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Parses the raw `--default` argument, if one was given.
pub fn parse_fallback(raw: Option<&str>) -> Result<Option<Value>> {
    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        None => Ok(None),
    }
}

/// Returns `true` if the provided path exists and is a regular file.
fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// Per-tag counts over a whole document.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Entries tagged `ok`.
    pub ok: usize,
    /// Entries tagged `err`.
    pub err: usize,
    /// Entries without a valid outcome shape.
    pub malformed: usize,
}

/// Rendered lines plus counts for a document.
#[derive(Debug)]
pub struct Report {
    /// One line per reported entry, in document order.
    pub lines: Vec<String>,
    /// Counts over every entry, filtered or not.
    pub summary: Summary,
}

/// Inspects `document`, which is either a single outcome or an array of them.
///
/// Entries whose tag differs from `only` are counted but not rendered. With a
/// `fallback`, error entries render the fallback instead of their payload.
pub fn inspect(document: Value, only: Option<Tag>, fallback: Option<&Value>) -> Result<Report> {
    let entries = match document {
        Value::Array(entries) => entries,
        entry @ Value::Object(_) => vec![entry],
        other => {
            return Err(OutcomeError::Malformed(format!(
                "document must be an object or an array, got {}",
                other
            )));
        }
    };

    let mut lines = Vec::new();
    let mut summary = Summary::default();

    for (index, entry) in entries.into_iter().enumerate() {
        let outcome = match from_json(entry) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Entry #{} skipped: {}", index, e);
                summary.malformed += 1;
                continue;
            }
        };

        let tag = outcome.tag();
        match tag {
            Tag::Ok => summary.ok += 1,
            Tag::Err => summary.err += 1,
        }
        if only.is_some_and(|wanted| wanted != tag) {
            continue;
        }

        let shown = match fallback {
            Some(fallback) => outcome.unwrap_or_default(fallback.clone()).to_string(),
            None => outcome.match_with(|value| value.to_string(), |error| error.to_string()),
        };
        lines.push(format!("#{} {} {}", index, tag, shown));
    }

    Ok(Report { lines, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("outcome_inspect_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_document_from_disk() {
        let path = scratch_file("ok.json", r#"[{"isOk": true, "isErr": false, "value": 1}]"#);
        let document = load_document(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(document, json!([{"isOk": true, "isErr": false, "value": 1}]));
    }

    #[test]
    fn missing_file_is_not_found() {
        let res = load_document(Path::new("/definitely/not/here.json"));
        match res {
            Err(OutcomeError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn non_json_file_is_rejected() {
        let path = scratch_file("broken.json", "{not json");
        let res = load_document(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(res, Err(OutcomeError::SerdeJson(_))));
    }

    #[test]
    fn fallback_must_be_json() {
        assert_eq!(parse_fallback(None).unwrap(), None);
        assert_eq!(parse_fallback(Some("null")).unwrap(), Some(Value::Null));
        assert!(matches!(parse_fallback(Some("{oops")), Err(OutcomeError::SerdeJson(_))));
    }

    fn document() -> Value {
        json!([
            {"isOk": true, "isErr": false, "value": 10},
            {"isOk": false, "isErr": true, "value": "boom"},
            {"isOk": true, "value": 1},
            {"isOk": true, "isErr": false, "value": {"name": "x"}}
        ])
    }

    #[test]
    fn renders_every_valid_entry() {
        let report = inspect(document(), None, None).unwrap();
        assert_eq!(
            report.lines,
            vec![
                "#0 ok 10".to_string(),
                "#1 err \"boom\"".to_string(),
                "#3 ok {\"name\":\"x\"}".to_string(),
            ]
        );
        assert_eq!(
            report.summary,
            Summary {
                ok: 2,
                err: 1,
                malformed: 1
            }
        );
    }

    #[test]
    fn filters_by_tag_but_counts_everything() {
        let report = inspect(document(), Some(Tag::Err), None).unwrap();
        assert_eq!(report.lines, vec!["#1 err \"boom\"".to_string()]);
        assert_eq!(report.summary.ok, 2);
    }

    #[test]
    fn fallback_replaces_error_payloads() {
        let fallback = json!(null);
        let report = inspect(document(), None, Some(&fallback)).unwrap();
        assert_eq!(report.lines[0], "#0 ok 10");
        assert_eq!(report.lines[1], "#1 err null");
    }

    #[test]
    fn single_object_is_a_document() {
        let report = inspect(json!({"isOk": false, "isErr": true, "value": 3}), None, None).unwrap();
        assert_eq!(report.lines, vec!["#0 err 3".to_string()]);
    }

    #[test]
    fn scalar_document_is_rejected() {
        let res = inspect(json!(42), None, None);
        assert!(matches!(res, Err(OutcomeError::Malformed(_))));
    }
}
