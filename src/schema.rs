use std::fmt;

/// Component kinds that carry their own metadata section in a study file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Experiment,
    Screen,
}

impl ComponentType {
    /// Fixed processing order: experiments before screens.
    pub const ALL: [ComponentType; 2] = [ComponentType::Experiment, ComponentType::Screen];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Experiment => "Experiment",
            ComponentType::Screen => "Screen",
        }
    }

    /// Study key holding the number of components of this kind.
    pub fn count_key(&self) -> String {
        format!("Study {}s Number", self.as_str())
    }

    /// Key holding the component's repository name.
    pub fn name_key(&self) -> String {
        format!("Comment[IDR {} Name]", self.as_str())
    }

    /// Marker key opening a component section.
    pub fn marker_key(&self) -> String {
        format!("{} Number", self.as_str())
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Study,
    Experiment,
    Screen,
}

impl From<ComponentType> for Entity {
    fn from(kind: ComponentType) -> Self {
        match kind {
            ComponentType::Experiment => Entity::Experiment,
            ComponentType::Screen => Entity::Screen,
        }
    }
}

const STUDY_MANDATORY: &[&str] = &[
    "Comment[IDR Study Accession]",
    "Study Title",
    "Study Description",
    "Study Type",
    "Study Publication Title",
    "Study Author List",
    "Study Organism",
];

const STUDY_OPTIONAL: &[&str] = &[
    "Study Publication Preprint",
    "Study PubMed ID",
    "Study PMC ID",
    "Study DOI",
    "Study Copyright",
    "Study License",
    "Study License URL",
    "Study Data Publisher",
    "Study Data DOI",
    "Study Experiments Number",
    "Study Screens Number",
];

const EXPERIMENT_MANDATORY: &[&str] = &[
    "Comment[IDR Experiment Name]",
    "Experiment Description",
    "Experiment Imaging Method",
    "Experiment Number",
];

const EXPERIMENT_OPTIONAL: &[&str] = &["Experiment Data DOI", "Experiment Data Publisher"];

const SCREEN_MANDATORY: &[&str] = &[
    "Comment[IDR Screen Name]",
    "Screen Description",
    "Screen Imaging Method",
    "Screen Number",
    "Screen Type",
];

const SCREEN_OPTIONAL: &[&str] = &[
    "Screen Data DOI",
    "Screen Data Publisher",
    "Screen Technology Type",
];

/// Static per-entity field lists. Constructed once and passed explicitly to
/// every extractor call; adding an entity kind means adding a registry entry,
/// nothing else in the pipeline changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    pub fn mandatory(&self, entity: Entity) -> &'static [&'static str] {
        match entity {
            Entity::Study => STUDY_MANDATORY,
            Entity::Experiment => EXPERIMENT_MANDATORY,
            Entity::Screen => SCREEN_MANDATORY,
        }
    }

    pub fn optional(&self, entity: Entity) -> &'static [&'static str] {
        match entity {
            Entity::Study => STUDY_OPTIONAL,
            Entity::Experiment => EXPERIMENT_OPTIONAL,
            Entity::Screen => SCREEN_OPTIONAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandatory_keys_ordered() {
        let registry = SchemaRegistry;
        assert_eq!(
            registry.mandatory(Entity::Study)[0],
            "Comment[IDR Study Accession]"
        );
        assert_eq!(registry.mandatory(Entity::Experiment).len(), 4);
        assert_eq!(registry.mandatory(Entity::Screen).len(), 5);
    }

    #[test]
    fn optional_keys_include_counts() {
        let registry = SchemaRegistry;
        assert!(
            registry
                .optional(Entity::Study)
                .contains(&"Study Experiments Number")
        );
        assert!(
            registry
                .optional(Entity::Screen)
                .contains(&"Screen Technology Type")
        );
    }

    #[test]
    fn derived_keys() {
        assert_eq!(
            ComponentType::Experiment.count_key(),
            "Study Experiments Number"
        );
        assert_eq!(
            ComponentType::Screen.name_key(),
            "Comment[IDR Screen Name]"
        );
        assert_eq!(ComponentType::Screen.marker_key(), "Screen Number");
    }
}
