use akili_model::track::LearningTrack;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TrackV01 {
    /// # Track this curriculum document belongs to
    #[schemars(with = "String")]
    pub id: LearningTrack,
    /// # Persona framing handed to the assistant responder for this track
    pub persona: String,
    /// # Ordered module list; array order is dependency order
    pub modules: Vec<ModuleV01>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ModuleV01 {
    /// # Stable module identifier, unique within the track
    pub id: String,
    /// # Title shown to the learner and handed to the question generator
    pub title: String,
    /// # One-line summary for the curriculum listing
    #[serde(default)]
    pub description: String,
    /// # Body content; also the source material for quiz generation
    pub content: String,
    /// # Whether this module accepts a project submission
    #[serde(default)]
    pub has_project: bool,
}
