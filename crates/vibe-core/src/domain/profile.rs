//! Setup profiles: the parameters that distinguish the full generator from
//! quick setup while they share one pipeline.

use std::fmt;

use crate::domain::{
    answers::{AnswerSet, or_default},
    value_objects::{Device, ProjectType, TechnicalLevel, UsageFrequency},
};

/// How the materializer treats a missing AI context template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePolicy {
    /// Missing template aborts the run.
    Required,
    /// Missing template is skipped silently.
    Optional,
}

/// Which question set to ask and which default table to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupProfile {
    /// Multi-section questionnaire producing the rich configuration.
    Full,
    /// Five questions, everything else defaulted.
    Quick,
}

impl SetupProfile {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Quick => "quick",
        }
    }

    pub const fn template_policy(self) -> TemplatePolicy {
        match self {
            Self::Full => TemplatePolicy::Required,
            Self::Quick => TemplatePolicy::Optional,
        }
    }

    /// Title line printed when a session starts.
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Full => "🚀 Vibe Project Generator",
            Self::Quick => "🚀 Quick Vibe Project Setup",
        }
    }

    pub const fn tagline(self) -> &'static str {
        match self {
            Self::Full => "Answer these questions to generate your project config:",
            Self::Quick => "Just 5 questions to get AI-optimized configuration!",
        }
    }
}

impl fmt::Display for SetupProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default table applied by quick setup to unanswered or unasked questions.
pub mod quick_defaults {
    use super::*;

    pub const NAME: &str = "My Project";
    pub const PROJECT_TYPE: ProjectType = ProjectType::WebApp;
    pub const USERS: &str = "General users";
    pub const PRIORITY: &str = "user experience";
    pub const TECHNICAL_LEVEL: TechnicalLevel = TechnicalLevel::Intermediate;
    pub const USAGE_FREQUENCY: UsageFrequency = UsageFrequency::Daily;
    pub const DEVICES: [Device; 2] = [Device::Desktop, Device::Mobile];

    /// Type menu offered by quick setup: label shown, type selected.
    pub const TYPE_MENU: [(&str, ProjectType); 5] = [
        ("Web App (React/Vue/etc)", ProjectType::WebApp),
        ("Tool/Utility", ProjectType::Tool),
        ("Dashboard/Admin", ProjectType::Dashboard),
        ("Game", ProjectType::Game),
        ("API/Backend", ProjectType::Api),
    ];

    pub fn description(project_type: ProjectType) -> String {
        format!("A {project_type} that helps users accomplish their goals")
    }

    /// Build a complete answer set from the five quick answers, substituting
    /// defaults for empty text.
    pub fn answers(
        name: &str,
        project_type: ProjectType,
        description: &str,
        users: &str,
        priority: &str,
    ) -> AnswerSet {
        AnswerSet {
            name: or_default(name, NAME).to_string(),
            project_type,
            domain: crate::domain::Domain::for_project_type(project_type),
            description: if description.is_empty() {
                self::description(project_type)
            } else {
                description.to_string()
            },
            primary_users: or_default(users, USERS).to_string(),
            technical_level: TECHNICAL_LEVEL,
            usage_frequency: USAGE_FREQUENCY,
            devices: DEVICES.to_vec(),
            core_features: Vec::new(),
            needs_auth: false,
            needs_realtime: false,
            needs_offline: false,
            integrations: String::new(),
            business_logic: String::new(),
            user_workflows: String::new(),
            priorities: or_default(priority, PRIORITY).to_string(),
        }
    }
}
