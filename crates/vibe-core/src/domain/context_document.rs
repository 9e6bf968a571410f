//! AI context document: literal placeholder substitution.

use crate::domain::project_config::Metadata;

/// Bracketed tokens recognised in the context template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ProjectName,
    ProjectType,
    Domain,
    Status,
}

impl Placeholder {
    /// Substitution order.
    pub const ALL: [Self; 4] = [Self::ProjectName, Self::ProjectType, Self::Domain, Self::Status];

    pub const fn token(self) -> &'static str {
        match self {
            Self::ProjectName => "[PROJECT_NAME]",
            Self::ProjectType => "[PROJECT_TYPE]",
            Self::Domain => "[DOMAIN]",
            Self::Status => "[STATUS]",
        }
    }

    /// The metadata value that replaces this token.
    pub fn value(self, metadata: &Metadata) -> &str {
        match self {
            Self::ProjectName => &metadata.name,
            Self::ProjectType => metadata.project_type.as_str(),
            Self::Domain => metadata.domain.as_str(),
            Self::Status => metadata.status.as_str(),
        }
    }
}

/// Stateless materializer of the AI context text.
pub struct ContextDocument;

impl ContextDocument {
    /// Replace every occurrence of each placeholder, one token at a time in
    /// [`Placeholder::ALL`] order.
    pub fn substitute(template: &str, metadata: &Metadata) -> String {
        Placeholder::ALL
            .iter()
            .fold(template.to_string(), |text, placeholder| {
                text.replace(placeholder.token(), placeholder.value(metadata))
            })
    }
}
