//! Annotation object rendering.
//!
//! Each component kind has a fixed template configuration; rendering
//! substitutes `%(Field)s` placeholders from the component and publication
//! records. A pair whose template references a missing field is skipped
//! rather than failing, since partial optional metadata is expected in a
//! report.

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::StudyError;
use crate::schema::ComponentType;
use crate::study::Component;

const PUBLICATION_PAIRS: &[(&str, &str)] = &[
    ("Publication Title", "%(Title)s"),
    ("Publication Authors", "%(Author List)s"),
    (
        "Pubmed ID",
        "%(PubMed ID)s https://www.ncbi.nlm.nih.gov/pubmed/%(PubMed ID)s",
    ),
    ("PMC ID", "%(PMC ID)s"),
    (
        "Publication DOI",
        "%(DOI)s https://dx.doi.org/%(DOI)s",
    ),
];

const BOTTOM_PAIRS: &[(&str, &str)] = &[
    ("License", "%(Study License)s %(Study License URL)s"),
    ("Copyright", "%(Study Copyright)s"),
    ("Data Publisher", "%(Study Data Publisher)s"),
    (
        "Data DOI",
        "%(Study Data DOI)s https://dx.doi.org/%(Study Data DOI)s",
    ),
    ("Annotation File", "%(Annotation File)s"),
];

struct ObjectTemplate {
    name: &'static str,
    description: &'static str,
    top: &'static [(&'static str, &'static str)],
}

const SCREEN_TEMPLATE: ObjectTemplate = ObjectTemplate {
    name: "%(Comment[IDR Screen Name])s",
    description: "Publication Title\n%(Study Publication Title)s\n\n\
                  Screen Description\n%(Screen Description)s",
    top: &[
        ("Study Type", "%(Study Type)s"),
        ("Organism", "%(Study Organism)s"),
        ("Screen Type", "%(Screen Type)s"),
        ("Screen Technology Type", "%(Screen Technology Type)s"),
        ("Imaging Method", "%(Screen Imaging Method)s"),
    ],
};

const EXPERIMENT_TEMPLATE: ObjectTemplate = ObjectTemplate {
    name: "%(Comment[IDR Experiment Name])s",
    description: "Publication Title\n%(Study Publication Title)s\n\n\
                  Experiment Description\n%(Experiment Description)s",
    top: &[
        ("Study Type", "%(Study Type)s"),
        ("Organism", "%(Study Organism)s"),
        ("Imaging Method", "%(Experiment Imaging Method)s"),
    ],
};

fn template_for(kind: ComponentType) -> &'static ObjectTemplate {
    match kind {
        ComponentType::Experiment => &EXPERIMENT_TEMPLATE,
        ComponentType::Screen => &SCREEN_TEMPLATE,
    }
}

/// A component rendered for reporting: display name, free-text description,
/// and an ordered list of label/value pairs.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationObject {
    pub name: String,
    pub description: String,
    pub map: Vec<(String, String)>,
}

impl AnnotationObject {
    pub fn build(component: &Component) -> Result<Self, StudyError> {
        let template = template_for(component.kind);
        let lookup = |label: &str| component.fields.get(label).map(String::as_str);

        let name = render(template.name, lookup)
            .ok_or_else(|| StudyError::MissingKey(template.name.to_string()))?;
        let description = render(template.description, lookup)
            .ok_or_else(|| StudyError::MissingKey(template.description.to_string()))?;

        let mut map = Vec::new();
        push_pairs(&mut map, template.top, lookup);
        for publication in &component.publications {
            push_pairs(&mut map, PUBLICATION_PAIRS, |label| publication.get(label));
        }
        push_pairs(&mut map, BOTTOM_PAIRS, lookup);

        Ok(Self {
            name,
            description,
            map,
        })
    }
}

fn push_pairs<'a>(
    map: &mut Vec<(String, String)>,
    pairs: &[(&str, &str)],
    lookup: impl Fn(&str) -> Option<&'a str> + Copy,
) {
    for (label, template) in pairs {
        match render(template, lookup) {
            Some(value) => map.push(((*label).to_string(), value)),
            None => debug!("missing field for {label}"),
        }
    }
}

/// Best-effort substitution of `%(Field)s` placeholders. Returns `None` as
/// soon as any placeholder has no value.
fn render<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> Option<String> {
    let placeholder = Regex::new(r"%\(([^)]+)\)s").unwrap();
    let mut rendered = String::new();
    let mut last = 0;
    for captures in placeholder.captures_iter(template) {
        let matched = captures.get(0).unwrap();
        let value = lookup(&captures[1])?;
        rendered.push_str(&template[last..matched.start()]);
        rendered.push_str(value);
        last = matched.end();
    }
    rendered.push_str(&template[last..]);
    Some(rendered)
}
