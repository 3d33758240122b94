use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::schema::ComponentType;

#[derive(Debug, Error, Diagnostic)]
pub enum StudyError {
    #[error("failed to read study file at {0}")]
    StudyRead(PathBuf),

    #[error("could not find value for key {0}")]
    MissingKey(String),

    #[error("mismatching publication titles and authors: {titles} titles, {authors} authors")]
    MismatchedPublications { titles: usize, authors: usize },

    #[error("{field} lists {ids} entries but the study lists {publications} publications")]
    PublicationIdCount {
        field: &'static str,
        ids: usize,
        publications: usize,
    },

    #[error("invalid {field}: {value}")]
    InvalidIdentifier {
        field: &'static str,
        value: String,
    },

    #[error("could not find {kind} {index}")]
    MissingComponent { kind: ComponentType, index: usize },

    #[error("invalid value for {field}: {value}")]
    InvalidCount { field: String, value: String },

    #[error("unmatched name {0}")]
    UnmatchedName(String),

    #[error("need to define at least one screen or experiment")]
    NoComponents,
}
