use std::io::BufRead;
use std::sync::OnceLock;

use jbopwd_core::{Cmavo, Gismu};
use regex::Regex;

use crate::errors::DictError;

/// Minimum accepted byte length for a gismu data line.
pub const GISMU_MIN_LINE: usize = 157;
/// Minimum accepted byte length for a cmavo data line.
pub const CMAVO_MIN_LINE: usize = 63;

fn placement_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"x\d").expect("hard-coded pattern"))
}

fn see_also_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\(cf\. ([^)]+)\)").expect("hard-coded pattern"))
}

/// Trimmed field at byte range `[start, end)` of a line already checked to
/// be long enough. Lossy recovery keeps a column boundary that splits a
/// multibyte character from panicking.
fn field(line: &str, start: usize, end: usize) -> String {
    String::from_utf8_lossy(&line.as_bytes()[start..end])
        .trim()
        .to_string()
}

/// Trimmed field from byte `start` to the end of the line.
fn tail(line: &str, start: usize) -> String {
    String::from_utf8_lossy(&line.as_bytes()[start..])
        .trim()
        .to_string()
}

/// Cross-references from the first `(cf. <list>)` block anywhere in the
/// line, split on `", "`; empty when the block is absent.
fn see_also(line: &str) -> Vec<String> {
    see_also_regex()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|list| list.as_str().split(", ").map(str::to_string).collect())
        .unwrap_or_default()
}

/// Argument-slot markers (`x` followed by a digit), in order of appearance.
fn placements(meaning: &str) -> Vec<String> {
    placement_regex()
        .find_iter(meaning)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parses the gismu table from a line stream.
///
/// The first line is a version header and is skipped without validation.
/// Every later line must be at least [`GISMU_MIN_LINE`] bytes; a shorter
/// line rejects the whole table. A header-only stream yields an empty
/// vector.
pub fn parse_gismu<R: BufRead>(reader: R) -> Result<Vec<Gismu>, DictError> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            continue;
        }
        if line.len() < GISMU_MIN_LINE {
            return Err(DictError::LineTooShort {
                line: index + 1,
                expected: GISMU_MIN_LINE,
                content: line,
            });
        }

        let meaning = field(&line, 62, 157);
        entries.push(Gismu {
            word: field(&line, 1, 6),
            rafsi_cvc: field(&line, 7, 10),
            rafsi_ccv: field(&line, 11, 14),
            rafsi_cvv: field(&line, 15, 19),
            keyword: field(&line, 20, 40),
            hint: field(&line, 41, 61),
            placements: placements(&meaning),
            see_also: see_also(&line),
            meaning,
        });
    }
    Ok(entries)
}

/// Parses the cmavo table from a line stream.
///
/// Same header and failure policy as [`parse_gismu`], with
/// [`CMAVO_MIN_LINE`] as the minimum line length. The meaning column runs
/// from byte 63 to the end of the line, so a line of exactly the minimum
/// length carries an empty meaning.
pub fn parse_cmavo<R: BufRead>(reader: R) -> Result<Vec<Cmavo>, DictError> {
    let mut entries = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            continue;
        }
        if line.len() < CMAVO_MIN_LINE {
            return Err(DictError::LineTooShort {
                line: index + 1,
                expected: CMAVO_MIN_LINE,
                content: line,
            });
        }

        entries.push(Cmavo {
            word: field(&line, 0, 11),
            category: field(&line, 12, 20),
            keyword: field(&line, 21, 62),
            meaning: tail(&line, 63),
            see_also: see_also(&line),
        });
    }
    Ok(entries)
}
