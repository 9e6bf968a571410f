//! Domain value objects: the closed vocabularies the questionnaire offers.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Each one owns its wire label (used both in the JSON config and in the
//! numbered menus) and a `FromStr` parser over that label. Menu order is the
//! order of the `ALL` constant.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a labelled enum with `ALL`, `as_str`, `Display` and `FromStr`.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl $name {
            /// Every variant, in menu order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    other => Err(DomainError::UnknownValue {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

// ── ProjectType ──────────────────────────────────────────────────────────────

labelled_enum! {
    /// What kind of application is being planned.
    ProjectType, "project type" {
        WebApp => "web-app",
        Tool => "tool",
        Dashboard => "dashboard",
        Game => "game",
        Api => "api",
        MobileApp => "mobile-app",
    }
}

// ── Domain ───────────────────────────────────────────────────────────────────

labelled_enum! {
    /// Theme of the application.
    ///
    /// `Business` is never offered in the full questionnaire menu; it only
    /// comes out of the type lookup used by quick setup.
    Domain, "domain" {
        Productivity => "productivity",
        Entertainment => "entertainment",
        Education => "education",
        Ecommerce => "ecommerce",
        Healthcare => "healthcare",
        Finance => "finance",
        Other => "other",
        Business => "business",
    }
}

impl Domain {
    /// Options shown by the full questionnaire.
    pub const MENU: &'static [Self] = &[
        Self::Productivity,
        Self::Entertainment,
        Self::Education,
        Self::Ecommerce,
        Self::Healthcare,
        Self::Finance,
        Self::Other,
    ];

    /// Domain implied by a project type. Unmapped types land in `Other`.
    pub const fn for_project_type(project_type: ProjectType) -> Self {
        match project_type {
            ProjectType::WebApp | ProjectType::Tool => Self::Productivity,
            ProjectType::Dashboard | ProjectType::Api => Self::Business,
            ProjectType::Game => Self::Entertainment,
            ProjectType::MobileApp => Self::Other,
        }
    }

    /// Same lookup keyed by a raw type label; unrecognised labels map to `Other`.
    pub fn for_type_label(label: &str) -> Self {
        label
            .parse::<ProjectType>()
            .map_or(Self::Other, Self::for_project_type)
    }
}

// ── Audience ─────────────────────────────────────────────────────────────────

labelled_enum! {
    TechnicalLevel, "technical level" {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Expert => "expert",
    }
}

labelled_enum! {
    UsageFrequency, "usage frequency" {
        Daily => "daily",
        Weekly => "weekly",
        Monthly => "monthly",
        Occasional => "occasional",
    }
}

labelled_enum! {
    Device, "device" {
        Desktop => "desktop",
        Mobile => "mobile",
        Tablet => "tablet",
    }
}

// ── Features ─────────────────────────────────────────────────────────────────

labelled_enum! {
    Priority, "priority" {
        Critical => "critical",
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

labelled_enum! {
    Complexity, "complexity" {
        Simple => "simple",
        Moderate => "moderate",
        Complex => "complex",
    }
}

/// Estimate used when a complexity label is not recognised.
pub const UNKNOWN_COMPLEXITY_HOURS: u32 = 16;

impl Complexity {
    pub const fn estimated_hours(self) -> u32 {
        match self {
            Self::Simple => 8,
            Self::Moderate => 24,
            Self::Complex => 48,
        }
    }
}

/// Hours for a raw complexity label, falling back to
/// [`UNKNOWN_COMPLEXITY_HOURS`].
pub fn estimated_hours(label: &str) -> u32 {
    label
        .parse::<Complexity>()
        .map_or(UNKNOWN_COMPLEXITY_HOURS, Complexity::estimated_hours)
}

// ── Status ───────────────────────────────────────────────────────────────────

labelled_enum! {
    /// Lifecycle status stamped into metadata. New configs are always `planning`.
    ProjectStatus, "status" {
        Planning => "planning",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for t in ProjectType::ALL {
            assert_eq!(t.as_str().parse::<ProjectType>().unwrap(), *t);
        }
        assert_eq!("Mobile-App".parse::<ProjectType>().unwrap(), ProjectType::MobileApp);
        assert!("desktop-app".parse::<ProjectType>().is_err());
    }

    #[test]
    fn hours_table() {
        assert_eq!(estimated_hours("simple"), 8);
        assert_eq!(estimated_hours("moderate"), 24);
        assert_eq!(estimated_hours("complex"), 48);
        assert_eq!(estimated_hours("gigantic"), 16);
        assert_eq!(estimated_hours(""), 16);
    }

    #[test]
    fn domain_lookup_by_type() {
        assert_eq!(Domain::for_type_label("web-app"), Domain::Productivity);
        assert_eq!(Domain::for_type_label("tool"), Domain::Productivity);
        assert_eq!(Domain::for_type_label("dashboard"), Domain::Business);
        assert_eq!(Domain::for_type_label("api"), Domain::Business);
        assert_eq!(Domain::for_type_label("game"), Domain::Entertainment);
        assert_eq!(Domain::for_type_label("mobile-app"), Domain::Other);
        assert_eq!(Domain::for_type_label("spaceship"), Domain::Other);
    }

    #[test]
    fn domain_menu_excludes_business() {
        assert_eq!(Domain::MENU.len(), 7);
        assert!(!Domain::MENU.contains(&Domain::Business));
        assert_eq!(Domain::MENU.last(), Some(&Domain::Other));
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&ProjectType::MobileApp).unwrap();
        assert_eq!(json, "\"mobile-app\"");
    }
}
