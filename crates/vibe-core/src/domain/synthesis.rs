//! Config synthesis: the pure mapping from an [`AnswerSet`] to a
//! [`ProjectConfig`].
//!
//! The shared skeleton (metadata, audience, features, stack, requirements,
//! testing) is built the same way for every profile. Only the sections the
//! profiles disagree on are dispatched on [`SetupProfile`].

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    answers::{AnswerSet, or_default},
    profile::SetupProfile,
    project_config::{
        Ai, AiContext, AiPrompts, Audience, CONFIG_VERSION, Deployment, Feature, Features,
        Integration, Metadata, PrimaryAudience, ProjectConfig, Requirements, SCHEMA_REF, Stack,
        Technical, Testing,
    },
    value_objects::{ProjectStatus, TechnicalLevel, UsageFrequency},
};

/// Constraint text when no flag contributes a fragment.
pub const DEFAULT_CONSTRAINTS: &str = "Standard web application constraints";

const QUICK_CONSTRAINTS: &str = "Must be fast, accessible, and user-friendly";
const DEFAULT_WORKFLOWS: &str = "Standard user interaction patterns";

/// Stateless synthesizer.
pub struct ConfigSynthesizer;

impl ConfigSynthesizer {
    /// Build the configuration for `answers` as of `today`.
    ///
    /// Deterministic for identical inputs; `answers` is only borrowed.
    pub fn synthesize(
        answers: &AnswerSet,
        profile: SetupProfile,
        today: NaiveDate,
    ) -> ProjectConfig {
        debug!(%profile, name = %answers.name, "Synthesizing project config");

        ProjectConfig {
            schema: SCHEMA_REF.to_string(),
            version: CONFIG_VERSION.to_string(),
            metadata: Metadata {
                name: answers.name.clone(),
                project_type: answers.project_type,
                domain: answers.domain,
                description: answers.description.clone(),
                status: ProjectStatus::Planning,
                created: today,
                last_updated: today,
            },
            audience: Audience {
                primary: PrimaryAudience {
                    demographics: answers.primary_users.clone(),
                    technical_level: answers.technical_level,
                    devices: answers.effective_devices(),
                    usage_frequency: answers.usage_frequency,
                },
            },
            features: Features {
                core: Self::features(answers, profile),
            },
            technical: Technical {
                stack: Stack::default(),
                requirements: Self::requirements(answers),
                integrations: Self::integrations(answers, profile),
            },
            testing: Testing::standard(),
            deployment: match profile {
                SetupProfile::Full => None,
                SetupProfile::Quick => Some(Deployment::default()),
            },
            ai: Ai {
                context: Self::ai_context(answers, profile),
                prompts: Self::ai_prompts(answers, profile),
            },
        }
    }

    /// Constraint sentence derived from the boolean flags and audience.
    ///
    /// Fragments appear in a fixed order and are joined with `", "`.
    pub fn constraints(answers: &AnswerSet) -> String {
        let fragments: Vec<&str> = [
            (answers.needs_offline, "Must work offline"),
            (answers.needs_realtime, "Requires real-time updates"),
            (answers.targets_mobile(), "Must be mobile-friendly"),
            (
                answers.technical_level == TechnicalLevel::Beginner,
                "Keep interface simple and intuitive",
            ),
            (
                answers.usage_frequency == UsageFrequency::Daily,
                "Optimize for frequent use and efficiency",
            ),
        ]
        .into_iter()
        .filter_map(|(on, text)| on.then_some(text))
        .collect();

        if fragments.is_empty() {
            DEFAULT_CONSTRAINTS.to_string()
        } else {
            fragments.join(", ")
        }
    }

    fn features(answers: &AnswerSet, profile: SetupProfile) -> Vec<Feature> {
        answers
            .effective_features()
            .into_iter()
            .enumerate()
            .map(|(index, feature)| Feature {
                id: Feature::id_for(index + 1),
                description: match profile {
                    SetupProfile::Full => format!("{} functionality", feature.name),
                    SetupProfile::Quick => "Primary functionality of the application".into(),
                },
                estimated_hours: feature.complexity.estimated_hours(),
                name: feature.name,
                priority: feature.priority,
                complexity: feature.complexity,
            })
            .collect()
    }

    fn requirements(answers: &AnswerSet) -> Requirements {
        Requirements {
            authentication: answers.needs_auth,
            realtime: answers.needs_realtime,
            offline: answers.needs_offline,
            mobile: answers.targets_mobile(),
            pwa: answers.needs_offline,
            seo: true,
        }
    }

    fn integrations(answers: &AnswerSet, profile: SetupProfile) -> Option<Vec<Integration>> {
        match profile {
            SetupProfile::Quick => None,
            SetupProfile::Full if answers.integrations.is_empty() => Some(Vec::new()),
            SetupProfile::Full => Some(vec![Integration {
                service: answers.integrations.clone(),
                purpose: "As specified by user".into(),
                required: true,
            }]),
        }
    }

    fn ai_context(answers: &AnswerSet, profile: SetupProfile) -> AiContext {
        match profile {
            SetupProfile::Full => AiContext {
                business_logic: or_default(
                    &answers.business_logic,
                    "Focus on user needs and efficiency",
                )
                .to_string(),
                user_workflows: or_default(&answers.user_workflows, DEFAULT_WORKFLOWS)
                    .to_string(),
                constraints: Self::constraints(answers),
                priorities: or_default(
                    &answers.priorities,
                    "User experience and performance are critical",
                )
                .to_string(),
            },
            SetupProfile::Quick => AiContext {
                business_logic: format!(
                    "Focus on {} for {}",
                    answers.priorities, answers.primary_users
                ),
                user_workflows: DEFAULT_WORKFLOWS.into(),
                constraints: QUICK_CONSTRAINTS.into(),
                priorities: answers.priorities.clone(),
            },
        }
    }

    fn ai_prompts(answers: &AnswerSet, profile: SetupProfile) -> AiPrompts {
        match profile {
            SetupProfile::Full => {
                let mut testing = String::from("Emphasize ");
                if answers.needs_offline {
                    testing.push_str("offline functionality and ");
                }
                if answers.needs_realtime {
                    testing.push_str("real-time features and ");
                }
                testing.push_str("core functionality");

                // Defaulted list: an empty selection still names desktop and
                // mobile instead of leaving a blank in the prompt.
                let devices: Vec<&str> = answers
                    .effective_devices()
                    .iter()
                    .map(|d| d.as_str())
                    .collect();

                AiPrompts {
                    development: format!(
                        "Focus on {} for {}",
                        or_default(&answers.priorities, "user experience"),
                        answers.primary_users
                    ),
                    testing,
                    deployment: format!("Optimize for {} usage", devices.join(" and ")),
                }
            }
            SetupProfile::Quick => AiPrompts {
                development: format!(
                    "Build a {} focused on {} for {}",
                    answers.project_type, answers.priorities, answers.primary_users
                ),
                testing: "Emphasize core functionality and user experience".into(),
                deployment: "Optimize for web deployment and performance".into(),
            },
        }
    }
}
