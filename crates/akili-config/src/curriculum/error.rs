use akili_model::track::LearningTrack;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurriculumError {
    #[error(transparent)]
    Parse(#[from] serde_yml::Error),

    #[error(transparent)]
    Loading(#[from] akili_utils::loader::LoadingError),

    #[error("track {0} is defined more than once")]
    DuplicateTrack(LearningTrack),

    #[error("track {0} has no modules")]
    EmptyTrack(LearningTrack),

    #[error("module id {id} appears more than once in track {track}")]
    DuplicateModuleId { track: LearningTrack, id: String },

    #[error("module {0} has an empty title")]
    MissingTitle(String),

    #[error("module {0} has no content to learn or quiz from")]
    MissingContent(String),

    #[error("no curriculum is defined for track {0}")]
    TrackNotFound(LearningTrack),
}
