//! Companion annotation file resolution.
//!
//! Each component may ship a per-image annotation table next to the study
//! file, under `<slug>/<accession>-<slug>-annotation.csv[.gz]`. When one
//! exists, the component is linked to its public GitHub rendering.

use std::collections::BTreeMap;

use camino::Utf8Path;
use regex::Regex;
use tracing::debug;

use crate::error::StudyError;
use crate::schema::ComponentType;

const EXTENSIONS: [&str; 2] = [".csv", ".csv.gz"];
const BASE_URL: &str = "https://github.com/IDR";

/// Derives the annotation file URL for a finished component record, probing
/// `.csv` then `.csv.gz` inside the component's subdirectory of `dir`. A
/// component name that does not match `<accession>-<token>-<token>/<slug>`
/// is an error; a missing annotation file is not.
pub fn annotation_url(
    dir: &Utf8Path,
    kind: ComponentType,
    fields: &BTreeMap<String, String>,
) -> Result<Option<String>, StudyError> {
    let accession = fields
        .get("Comment[IDR Study Accession]")
        .ok_or_else(|| StudyError::MissingKey("Comment[IDR Study Accession]".to_string()))?;
    let name_key = kind.name_key();
    let name = fields
        .get(&name_key)
        .ok_or_else(|| StudyError::MissingKey(name_key))?;

    let pattern =
        Regex::new(&format!(r"^({}-\w+-\w+)/(\w+)$", regex::escape(accession))).unwrap();
    let captures = pattern
        .captures(name)
        .ok_or_else(|| StudyError::UnmatchedName(name.clone()))?;
    let repository = &captures[1];
    let slug = &captures[2];

    let component_dir = dir.join(slug);
    let basename = format!("{accession}-{slug}-annotation");
    for extension in EXTENSIONS {
        let filename = format!("{basename}{extension}");
        let path = component_dir.join(&filename);
        if !path.as_std_path().exists() {
            debug!("cannot find {path}");
            continue;
        }
        // A .git marker means the study file lives in the component's own
        // repository checkout; otherwise it is served from idr-metadata.
        let url = if dir.join(".git").as_std_path().exists() {
            format!("{BASE_URL}/{repository}/blob/master/{slug}/{filename}")
        } else {
            format!("{BASE_URL}/idr-metadata/blob/master/{name}/{filename}")
        };
        return Ok(Some(url));
    }
    Ok(None)
}
