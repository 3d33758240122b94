//! Line-level extraction over a buffered study file.
//!
//! Study files are tab-separated, one logical record per line: `Key\tValue`
//! for scalar fields, with component sections delimited solely by
//! `<Type> Number\t<index>` marker lines.

use std::collections::BTreeMap;

use crate::error::StudyError;
use crate::schema::{ComponentType, Entity, SchemaRegistry};

/// Returns the value of the first line whose text before the first tab equals
/// `key`, with trailing whitespace trimmed. The value may itself contain tabs
/// (multi-valued fields). Later duplicate keys are ignored.
pub fn value<'a>(lines: &[&'a str], key: &str) -> Option<&'a str> {
    lines.iter().find_map(|line| {
        let (prefix, rest) = line.split_once('\t')?;
        (prefix == key).then(|| rest.trim_end())
    })
}

/// Like [`value`], but absent or empty values are an error.
pub fn required_value<'a>(lines: &[&'a str], key: &str) -> Result<&'a str, StudyError> {
    match value(lines, key) {
        Some(found) if !found.is_empty() => Ok(found),
        _ => Err(StudyError::MissingKey(key.to_string())),
    }
}

/// Isolates the contiguous run of lines belonging to the `index`-th component
/// of the given kind: from its `<kind> Number\t<index>` marker line
/// (inclusive) up to the next marker with a different number (exclusive), or
/// the end of the file. Markers repeating the same number do not terminate
/// the section.
pub fn section<'a>(
    lines: &'a [&'a str],
    kind: ComponentType,
    index: usize,
) -> Result<&'a [&'a str], StudyError> {
    let marker_key = kind.marker_key();
    let marker = |line: &str| -> Option<usize> {
        let (prefix, rest) = line.split_once('\t')?;
        if prefix != marker_key {
            return None;
        }
        rest.trim_end().parse().ok()
    };

    let start = lines
        .iter()
        .position(|line| marker(line) == Some(index))
        .ok_or(StudyError::MissingComponent { kind, index })?;
    let end = lines[start..]
        .iter()
        .position(|line| matches!(marker(line), Some(number) if number != index))
        .map_or(lines.len(), |offset| start + offset);
    Ok(&lines[start..end])
}

/// Applies the schema over a line subset: every mandatory key must resolve to
/// a non-empty value, optional keys are included only when present and
/// non-empty.
pub fn fields(
    registry: &SchemaRegistry,
    entity: Entity,
    lines: &[&str],
) -> Result<BTreeMap<String, String>, StudyError> {
    let mut record = BTreeMap::new();
    for key in registry.mandatory(entity) {
        record.insert((*key).to_string(), required_value(lines, key)?.to_string());
    }
    for key in registry.optional(entity) {
        if let Some(found) = value(lines, key).filter(|found| !found.is_empty()) {
            record.insert((*key).to_string(), found.to_string());
        }
    }
    Ok(record)
}
