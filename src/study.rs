//! Study orchestration: one pass over a study file producing the study
//! record and its component records.

use std::collections::BTreeMap;
use std::fs;

use camino::Utf8Path;
use tracing::{debug, info};

use crate::annotation;
use crate::error::StudyError;
use crate::extract;
use crate::publications::{self, Publication};
use crate::schema::{ComponentType, Entity, SchemaRegistry};

/// Top-level study metadata plus the reconciled publication list.
#[derive(Debug, Clone)]
pub struct Study {
    pub fields: BTreeMap<String, String>,
    pub publications: Vec<Publication>,
}

/// One experiment or screen: its own section fields merged with every study
/// field (component fields win on collision), with the annotation file URL
/// under `Annotation File` when one was resolved.
#[derive(Debug, Clone)]
pub struct Component {
    pub kind: ComponentType,
    pub fields: BTreeMap<String, String>,
    pub publications: Vec<Publication>,
}

/// The result of parsing one study file: the study record and its components,
/// experiments first, then screens.
#[derive(Debug, Clone)]
pub struct ParsedStudy {
    pub study: Study,
    pub components: Vec<Component>,
}

impl ParsedStudy {
    /// Reads and parses a study file. The file is buffered whole before any
    /// parsing; annotation files are probed relative to its directory.
    pub fn from_file(registry: &SchemaRegistry, path: &Utf8Path) -> Result<Self, StudyError> {
        info!("parsing {path}");
        let text = fs::read_to_string(path)
            .map_err(|_| StudyError::StudyRead(path.as_std_path().to_path_buf()))?;
        let lines: Vec<&str> = text.lines().collect();
        let dir = path.parent().unwrap_or(Utf8Path::new(""));
        Self::from_lines(registry, &lines, dir)
    }

    pub fn from_lines(
        registry: &SchemaRegistry,
        lines: &[&str],
        dir: &Utf8Path,
    ) -> Result<Self, StudyError> {
        let fields = extract::fields(registry, Entity::Study, lines)?;
        let publications = publications::reconcile(&fields)?;
        let study = Study {
            fields,
            publications,
        };

        let mut components = Vec::new();
        for kind in ComponentType::ALL {
            for index in 1..=component_count(&study, kind)? {
                debug!("parsing {kind} {index}");
                let section = extract::section(lines, kind, index)?;
                let mut fields = extract::fields(registry, kind.into(), section)?;
                for (key, value) in &study.fields {
                    fields.entry(key.clone()).or_insert_with(|| value.clone());
                }
                if let Some(url) = annotation::annotation_url(dir, kind, &fields)? {
                    fields.insert("Annotation File".to_string(), url);
                }
                components.push(Component {
                    kind,
                    fields,
                    publications: study.publications.clone(),
                });
            }
        }

        if components.is_empty() {
            return Err(StudyError::NoComponents);
        }
        Ok(ParsedStudy { study, components })
    }
}

fn component_count(study: &Study, kind: ComponentType) -> Result<usize, StudyError> {
    let key = kind.count_key();
    match study.fields.get(&key) {
        Some(value) => value.parse().map_err(|_| StudyError::InvalidCount {
            field: key,
            value: value.clone(),
        }),
        None => Ok(0),
    }
}
