//! Reconciliation of the study's parallel multi-valued publication fields.
//!
//! `Study Publication Title`, `Study Author List` and the optional
//! identifier lists all share one index space: segment `i` of each field
//! describes publication `i`.

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;

use crate::error::StudyError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub title: String,
    pub authors: String,
    pub pubmed_id: Option<String>,
    pub pmc_id: Option<String>,
    pub doi: Option<String>,
}

impl Publication {
    fn new(title: &str, authors: &str) -> Self {
        Self {
            title: title.to_string(),
            authors: authors.to_string(),
            pubmed_id: None,
            pmc_id: None,
            doi: None,
        }
    }

    /// Field lookup under the labels used by the report templates.
    pub fn get(&self, label: &str) -> Option<&str> {
        match label {
            "Title" => Some(&self.title),
            "Author List" => Some(&self.authors),
            "PubMed ID" => self.pubmed_id.as_deref(),
            "PMC ID" => self.pmc_id.as_deref(),
            "DOI" => self.doi.as_deref(),
            _ => None,
        }
    }
}

/// Splits the study's publication fields into one `Publication` per index and
/// validates the optional identifier lists against their formats.
pub fn reconcile(fields: &BTreeMap<String, String>) -> Result<Vec<Publication>, StudyError> {
    let titles = split_list(fields, "Study Publication Title")
        .ok_or_else(|| StudyError::MissingKey("Study Publication Title".to_string()))?;
    let authors = split_list(fields, "Study Author List")
        .ok_or_else(|| StudyError::MissingKey("Study Author List".to_string()))?;
    if titles.len() != authors.len() {
        return Err(StudyError::MismatchedPublications {
            titles: titles.len(),
            authors: authors.len(),
        });
    }

    let mut publications: Vec<Publication> = titles
        .iter()
        .zip(&authors)
        .map(|(title, author)| Publication::new(title, author))
        .collect();

    apply_ids(
        fields,
        &mut publications,
        "Study PubMed ID",
        "PubMed ID",
        &Regex::new(r"^\d+$").unwrap(),
        |publication| &mut publication.pubmed_id,
    )?;
    apply_ids(
        fields,
        &mut publications,
        "Study PMC ID",
        "PMC ID",
        &Regex::new(r"^PMC\d+$").unwrap(),
        |publication| &mut publication.pmc_id,
    )?;
    apply_ids(
        fields,
        &mut publications,
        "Study DOI",
        "DOI",
        &Regex::new(r"^https?://(dx\.)?doi\.org/").unwrap(),
        |publication| &mut publication.doi,
    )?;

    Ok(publications)
}

fn split_list<'a>(fields: &'a BTreeMap<String, String>, key: &str) -> Option<Vec<&'a str>> {
    fields.get(key).map(|raw| raw.split('\t').collect())
}

/// Distributes one tab-separated identifier list over the publication slots.
/// Empty segments are skipped without affecting alignment.
fn apply_ids(
    fields: &BTreeMap<String, String>,
    publications: &mut [Publication],
    key: &str,
    label: &'static str,
    pattern: &Regex,
    slot: impl Fn(&mut Publication) -> &mut Option<String>,
) -> Result<(), StudyError> {
    let Some(ids) = split_list(fields, key) else {
        return Ok(());
    };
    if ids.len() > publications.len() {
        return Err(StudyError::PublicationIdCount {
            field: label,
            ids: ids.len(),
            publications: publications.len(),
        });
    }
    for (publication, id) in publications.iter_mut().zip(ids) {
        if id.is_empty() {
            continue;
        }
        if !pattern.is_match(id) {
            return Err(StudyError::InvalidIdentifier {
                field: label,
                value: id.to_string(),
            });
        }
        *slot(publication) = Some(id.to_string());
    }
    Ok(())
}
