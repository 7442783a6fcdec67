use crate::track::LearningTrack;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum AssistantLanguage {
    English,
    Acholi,
    Luganda,
    Swahili,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Preferences {
    pub low_bandwidth: bool,
    pub assistant_language: AssistantLanguage,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            low_bandwidth: false,
            assistant_language: AssistantLanguage::English,
            notifications_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SubmissionStatus {
    Pending,
    Reviewed,
    Approved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProjectSubmission {
    pub module_id: String,
    pub title: String,
    pub content: String,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// The single authoritative record for the local learner. Everything else in
/// the engine is a read-only view or writes back through one mutation path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnerProfile {
    pub name: String,
    pub email: String,
    pub track: LearningTrack,
    pub progress: u8,
    pub quizzes_completed: u32,
    pub projects_submitted: u32,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub completed_modules: BTreeSet<String>,
    pub attendance_rate: u8,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub skill_scores: HashMap<String, u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_id: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub project_submissions: Vec<ProjectSubmission>,
}

impl LearnerProfile {
    #[must_use]
    pub fn new(name: String, email: String, track: LearningTrack) -> Self {
        Self {
            name,
            email,
            track,
            progress: 0,
            quizzes_completed: 0,
            projects_submitted: 0,
            completed_modules: BTreeSet::new(),
            attendance_rate: 100,
            skill_scores: HashMap::new(),
            certificate_id: None,
            preferences: Preferences::default(),
            project_submissions: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_completed(&self, module_id: &str) -> bool {
        self.completed_modules.contains(module_id)
    }
}
