use crate::curriculum::error::CurriculumError;
use akili_model::track::LearningTrack;
use akili_utils::loader::{FileSystemLoader, Filter};
use futures::StreamExt;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::Deserialize;
use std::collections::HashSet;

pub mod error;
pub mod v01;

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { track: v01::TrackV01 },
}

#[derive(Debug, Clone)]
pub struct CourseModule {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub has_project: bool,
}

#[derive(Debug, Clone)]
pub struct TrackCurriculum {
    pub track: LearningTrack,
    pub persona: String,
    modules: Vec<CourseModule>,
}

impl TrackCurriculum {
    fn from_v01(track: v01::TrackV01) -> Self {
        let modules = track
            .modules
            .into_iter()
            .map(|module| CourseModule {
                id: module.id,
                title: module.title,
                description: module.description,
                content: module.content,
                has_project: module.has_project,
            })
            .collect();

        Self {
            track: track.id,
            persona: track.persona,
            modules,
        }
    }

    #[must_use]
    pub fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    #[must_use]
    pub fn total_modules(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn module(&self, id: &str) -> Option<&CourseModule> {
        self.modules.iter().find(|module| module.id == id)
    }

    #[must_use]
    pub fn module_index(&self, id: &str) -> Option<usize> {
        self.modules.iter().position(|module| module.id == id)
    }

    pub fn validate(&self) -> Result<Vec<String>, CurriculumError> {
        if self.modules.is_empty() {
            tracing::error!(track = %self.track, "track has no modules");
            return Err(CurriculumError::EmptyTrack(self.track));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let mut warnings = Vec::new();
        for module in &self.modules {
            if !seen.insert(&module.id) {
                tracing::error!(track = %self.track, module_id = module.id, "duplicate module id");
                return Err(CurriculumError::DuplicateModuleId {
                    track: self.track,
                    id: module.id.clone(),
                });
            }
            if module.title.trim().is_empty() {
                return Err(CurriculumError::MissingTitle(module.id.clone()));
            }
            if module.content.trim().is_empty() {
                return Err(CurriculumError::MissingContent(module.id.clone()));
            }
            if module.description.trim().is_empty() {
                warnings.push(format!("module {} has no description", module.id));
            }
        }
        Ok(warnings)
    }
}

#[derive(Debug, Clone)]
pub struct Curriculum {
    tracks: IndexMap<LearningTrack, TrackCurriculum>,
}

impl Curriculum {
    /// The curriculum shipped with the client, one document per track.
    pub fn builtin() -> Result<Self, CurriculumError> {
        let documents = [
            include_str!("../curriculum/explorers.yaml"),
            include_str!("../curriculum/foundations.yaml"),
            include_str!("../curriculum/workplace.yaml"),
            include_str!("../curriculum/leaders.yaml"),
        ];
        let mut curriculum = Self {
            tracks: IndexMap::new(),
        };
        for document in documents {
            curriculum.insert(load(document.as_bytes())?)?;
        }
        Ok(curriculum)
    }

    pub async fn load(loader: &FileSystemLoader) -> Result<Self, CurriculumError> {
        tracing::debug!("Loading curriculum");
        let mut curriculum = Self {
            tracks: IndexMap::new(),
        };
        let mut stream = loader.load_dir(Filter::Yaml);
        while let Some(file) = stream.next().await {
            let file = file?;
            curriculum.insert(load(&file.content)?)?;
        }
        Ok(curriculum)
    }

    fn insert(&mut self, track: TrackCurriculum) -> Result<(), CurriculumError> {
        if self.tracks.contains_key(&track.track) {
            return Err(CurriculumError::DuplicateTrack(track.track));
        }
        self.tracks.insert(track.track, track);
        Ok(())
    }

    pub fn get(&self, track: LearningTrack) -> Result<&TrackCurriculum, CurriculumError> {
        self.tracks.get(&track).ok_or(CurriculumError::TrackNotFound(track))
    }

    #[must_use]
    pub fn tracks(&self) -> &IndexMap<LearningTrack, TrackCurriculum> {
        &self.tracks
    }

    pub fn validate(&self) -> Result<Vec<String>, CurriculumError> {
        let mut warnings = Vec::new();
        for track in self.tracks.values() {
            warnings.extend(track.validate()?);
        }
        Ok(warnings)
    }
}

pub fn load(content: &[u8]) -> Result<TrackCurriculum, CurriculumError> {
    let VersionConfig::V01 { track } = serde_yml::from_slice::<VersionConfig>(content)?;
    let track = TrackCurriculum::from_v01(track);
    tracing::debug!(track = %track.track, modules = track.total_modules(), "Loaded track curriculum");
    Ok(track)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_curriculum_loads() {
        let curriculum = Curriculum::builtin().unwrap();
        assert_eq!(curriculum.tracks().len(), 4);
        for track in curriculum.tracks().values() {
            assert_eq!(track.total_modules(), 3);
        }
        let warnings = curriculum.validate().unwrap();
        assert!(warnings.is_empty(), "builtin curriculum has warnings: {warnings:?}");
    }

    #[test]
    fn test_module_order_is_dependency_order() {
        let curriculum = Curriculum::builtin().unwrap();
        let explorers = curriculum.get(LearningTrack::Explorers).unwrap();
        assert_eq!(explorers.module_index("e1"), Some(0));
        assert_eq!(explorers.module_index("e3"), Some(2));
        assert_eq!(explorers.module_index("w1"), None);
    }

    #[test]
    fn test_duplicate_module_id_is_rejected() {
        let doc = r"
version: '0.1'
track:
  id: explorers
  persona: 'Track: AI Explorers.'
  modules:
    - id: e1
      title: One
      description: d
      content: c
    - id: e1
      title: Two
      description: d
      content: c
";
        let track = load(doc.as_bytes()).unwrap();
        assert!(matches!(
            track.validate(),
            Err(CurriculumError::DuplicateModuleId { id, .. }) if id == "e1"
        ));
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let doc = "version: '0.2'\ntrack:\n  id: explorers\n  persona: p\n  modules: []\n";
        assert!(load(doc.as_bytes()).is_err());
    }

    #[test]
    fn test_missing_description_is_a_warning() {
        let doc = r"
version: '0.1'
track:
  id: leaders
  persona: 'Track: AI for Business Growth.'
  modules:
    - id: l1
      title: One
      content: c
";
        let track = load(doc.as_bytes()).unwrap();
        let warnings = track.validate().unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_generate_json_schema() {
        let _schema = serde_json::to_string_pretty(&schemars::schema_for!(VersionConfig)).unwrap();
    }

    #[tokio::test]
    async fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let document = include_str!("../curriculum/explorers.yaml");
        std::fs::write(dir.path().join("explorers.yaml"), document).unwrap();
        std::fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let loader = FileSystemLoader::new(dir.path().to_path_buf());
        let curriculum = Curriculum::load(&loader).await.unwrap();
        assert_eq!(curriculum.tracks().len(), 1);
        assert!(curriculum.get(LearningTrack::Explorers).is_ok());
    }

    #[tokio::test]
    async fn test_load_rejects_duplicate_track_documents() {
        let dir = tempfile::tempdir().unwrap();
        let document = include_str!("../curriculum/explorers.yaml");
        std::fs::write(dir.path().join("a.yaml"), document).unwrap();
        std::fs::write(dir.path().join("b.yaml"), document).unwrap();

        let loader = FileSystemLoader::new(dir.path().to_path_buf());
        assert!(matches!(
            Curriculum::load(&loader).await,
            Err(CurriculumError::DuplicateTrack(LearningTrack::Explorers))
        ));
    }
}
