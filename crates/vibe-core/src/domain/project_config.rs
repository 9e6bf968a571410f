//! The persisted project configuration.
//!
//! Field names and nesting follow the JSON schema referenced by
//! [`SCHEMA_REF`]; serde renames map the Rust names onto it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Complexity, Device, Domain, Priority, ProjectStatus, ProjectType, TechnicalLevel,
    UsageFrequency,
};

/// Value of the `$schema` field.
pub const SCHEMA_REF: &str = "./schemas/vibe-project.schema.json";

/// Value of the `version` field.
pub const CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub metadata: Metadata,
    pub audience: Audience,
    pub features: Features,
    pub technical: Technical,
    pub testing: Testing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<Deployment>,
    pub ai: Ai,
}

impl ProjectConfig {
    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub domain: Domain,
    pub description: String,
    pub status: ProjectStatus,
    pub created: NaiveDate,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audience {
    pub primary: PrimaryAudience,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryAudience {
    pub demographics: String,
    pub technical_level: TechnicalLevel,
    pub devices: Vec<Device>,
    pub usage_frequency: UsageFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    pub core: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub complexity: Complexity,
    pub estimated_hours: u32,
}

impl Feature {
    /// Identifier for the feature at 1-based `position`.
    pub fn id_for(position: usize) -> String {
        format!("feature-{position}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technical {
    pub stack: Stack,
    pub requirements: Requirements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<Vec<Integration>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stack {
    pub frontend: String,
    pub backend: String,
    pub database: String,
    pub styling: String,
    pub state_management: String,
}

impl Default for Stack {
    fn default() -> Self {
        Self {
            frontend: "react".into(),
            backend: "none".into(),
            database: "none".into(),
            styling: "tailwind".into(),
            state_management: "zustand".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub authentication: bool,
    pub realtime: bool,
    pub offline: bool,
    pub mobile: bool,
    pub pwa: bool,
    pub seo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    pub service: String,
    pub purpose: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testing {
    pub coverage: Coverage,
    pub types: Vec<String>,
    pub automation: Automation,
}

impl Testing {
    /// The fixed testing policy written into every config.
    pub fn standard() -> Self {
        Self {
            coverage: Coverage {
                target: 80,
                critical: 95,
            },
            types: ["unit", "integration", "accessibility", "performance", "security"]
                .into_iter()
                .map(String::from)
                .collect(),
            automation: Automation {
                pre_commit: true,
                ci: true,
                deployment: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coverage {
    pub target: u8,
    pub critical: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub pre_commit: bool,
    pub ci: bool,
    pub deployment: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub platform: String,
    pub domain: String,
    pub environment: Environments,
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            platform: "vercel".into(),
            domain: String::new(),
            environment: Environments::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environments {
    pub staging: String,
    pub production: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ai {
    pub context: AiContext,
    pub prompts: AiPrompts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiContext {
    pub business_logic: String,
    pub user_workflows: String,
    pub constraints: String,
    pub priorities: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiPrompts {
    pub development: String,
    pub testing: String,
    pub deployment: String,
}
