use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The view the learner last had open; persisted alongside the profile so
/// the client can resume where it left off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tab {
    #[default]
    Dashboard,
    Assistant,
    Courses,
    Certificates,
    Settings,
    Progress,
}
