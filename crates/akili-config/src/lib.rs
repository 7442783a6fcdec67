pub mod curriculum;

pub use curriculum::{CourseModule, Curriculum, TrackCurriculum};
pub use curriculum::error::CurriculumError;
