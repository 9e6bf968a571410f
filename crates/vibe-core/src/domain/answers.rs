//! The answers collected during one questionnaire run.

use crate::domain::value_objects::{
    Complexity, Device, Domain, Priority, ProjectType, TechnicalLevel, UsageFrequency,
};

/// Upper bound on collected core features.
pub const MAX_FEATURES: usize = 5;

/// One entry of the repeated feature sub-form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureAnswer {
    pub name: String,
    pub priority: Priority,
    pub complexity: Complexity,
}

impl FeatureAnswer {
    pub fn new(name: impl Into<String>, priority: Priority, complexity: Complexity) -> Self {
        Self {
            name: name.into(),
            priority,
            complexity,
        }
    }

    /// Stand-in used when no feature was entered.
    pub fn placeholder() -> Self {
        Self::new("Main Feature", Priority::Critical, Complexity::Moderate)
    }
}

/// Complete set of responses to one questionnaire run.
///
/// Optional free-text answers are kept as `String`; empty means "not given".
/// Once built it is only ever borrowed by the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub name: String,
    pub project_type: ProjectType,
    pub domain: Domain,
    pub description: String,
    pub primary_users: String,
    pub technical_level: TechnicalLevel,
    pub usage_frequency: UsageFrequency,
    pub devices: Vec<Device>,
    pub core_features: Vec<FeatureAnswer>,
    pub needs_auth: bool,
    pub needs_realtime: bool,
    pub needs_offline: bool,
    pub integrations: String,
    pub business_logic: String,
    pub user_workflows: String,
    pub priorities: String,
}

impl AnswerSet {
    /// An answer set with the first option of every menu and nothing typed.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            project_type: ProjectType::WebApp,
            domain: Domain::Productivity,
            description: String::new(),
            primary_users: String::new(),
            technical_level: TechnicalLevel::Beginner,
            usage_frequency: UsageFrequency::Daily,
            devices: Vec::new(),
            core_features: Vec::new(),
            needs_auth: false,
            needs_realtime: false,
            needs_offline: false,
            integrations: String::new(),
            business_logic: String::new(),
            user_workflows: String::new(),
            priorities: String::new(),
        }
    }

    /// Devices after default substitution: desktop and mobile if none selected.
    pub fn effective_devices(&self) -> Vec<Device> {
        if self.devices.is_empty() {
            vec![Device::Desktop, Device::Mobile]
        } else {
            self.devices.clone()
        }
    }

    /// Features after default substitution: a single placeholder if none entered.
    pub fn effective_features(&self) -> Vec<FeatureAnswer> {
        if self.core_features.is_empty() {
            vec![FeatureAnswer::placeholder()]
        } else {
            self.core_features.clone()
        }
    }

    /// Whether mobile is among the selected devices (raw selection, no default).
    pub fn targets_mobile(&self) -> bool {
        self.devices.contains(&Device::Mobile)
    }
}

impl Default for AnswerSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Returns `value` unless it is empty, in which case `fallback`.
pub(crate) fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
