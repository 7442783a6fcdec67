use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter)]
pub enum LearningTrack {
    #[serde(rename = "explorers", alias = "AI Explorers")]
    #[strum(serialize = "AI Explorers")]
    Explorers,
    #[serde(rename = "foundations", alias = "AI Foundations")]
    #[strum(serialize = "AI Foundations")]
    Foundations,
    #[serde(rename = "workplace", alias = "AI in the Workplace")]
    #[strum(serialize = "AI in the Workplace")]
    Workplace,
    #[serde(rename = "leaders", alias = "AI for Business Growth")]
    #[strum(serialize = "AI for Business Growth")]
    Leaders,
}

impl LearningTrack {
    /// Short uppercase code used in certificate verification ids.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            LearningTrack::Explorers => "EXPLORERS",
            LearningTrack::Foundations => "FOUNDATIONS",
            LearningTrack::Workplace => "WORKPLACE",
            LearningTrack::Leaders => "LEADERS",
        }
    }

    #[must_use]
    pub fn age_range(self) -> &'static str {
        match self {
            LearningTrack::Explorers => "10-16",
            LearningTrack::Foundations => "17-25",
            LearningTrack::Workplace => "Professionals",
            LearningTrack::Leaders => "Executives",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            LearningTrack::Explorers => "🚀",
            LearningTrack::Foundations => "🎓",
            LearningTrack::Workplace => "💼",
            LearningTrack::Leaders => "🏢",
        }
    }

    #[must_use]
    pub fn focus(self) -> &'static str {
        match self {
            LearningTrack::Explorers => "Fun, Games, Analogies",
            LearningTrack::Foundations => "Academic, Python, ML",
            LearningTrack::Workplace => "ROI, Efficiency, Tools",
            LearningTrack::Leaders => "Strategy, Innovation, Scaling",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        assert_eq!(r#""explorers""#, serde_json::to_string(&LearningTrack::Explorers).unwrap());
        assert_eq!(r#""leaders""#, serde_json::to_string(&LearningTrack::Leaders).unwrap());
    }

    #[test]
    fn test_deserialize_display_alias() {
        let track: LearningTrack = serde_json::from_str(r#""AI Foundations""#).unwrap();
        assert_eq!(track, LearningTrack::Foundations);
    }

    #[test]
    fn test_display() {
        assert_eq!("AI Explorers", format!("{}", LearningTrack::Explorers));
        assert_eq!("AI in the Workplace", format!("{}", LearningTrack::Workplace));
    }
}
