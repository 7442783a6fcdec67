use crate::track::LearningTrack;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived on demand from a certified profile; never stored as its own
/// record. The verification id is taken from the profile, which records it
/// once when progress first reaches 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub name: String,
    pub track: LearningTrack,
    pub verification_id: String,
    pub issued_at: DateTime<Utc>,
}
