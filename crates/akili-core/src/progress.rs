use crate::certificate;
use akili_config::TrackCurriculum;
use akili_model::profile::LearnerProfile;

/// Applies a finished quiz attempt to the profile. This is the only place
/// `completed_modules`, `progress` and `quizzes_completed` are written, so
/// the stored percentage can never drift from the completed set.
///
/// Returns whether the profile changed: a failed attempt changes nothing,
/// and re-passing an already completed module is ignored rather than double
/// counted.
pub fn on_quiz_completed(
    profile: &mut LearnerProfile,
    curriculum: &TrackCurriculum,
    module_id: &str,
    passed: bool,
) -> bool {
    if !passed {
        return false;
    }
    if curriculum.module_index(module_id).is_none() {
        tracing::warn!(module_id, track = %curriculum.track, "quiz result for a module outside the track");
        return false;
    }
    if profile.has_completed(module_id) {
        tracing::debug!(module_id, "module already recorded complete, ignoring repeat pass");
        return false;
    }

    profile.completed_modules.insert(module_id.to_owned());
    profile.progress = completion_percent(profile.completed_modules.len(), curriculum.total_modules());
    profile.quizzes_completed += 1;

    if profile.progress >= certificate::CERTIFIED_PROGRESS && profile.certificate_id.is_none() {
        let verification_id = certificate::derive_verification_id(profile.track);
        tracing::info!(verification_id, "track completed, recording certificate id");
        profile.certificate_id = Some(verification_id);
    }

    tracing::info!(module_id, progress = profile.progress, "module recorded complete");
    true
}

fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round().min(100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use akili_config::Curriculum;
    use akili_model::track::LearningTrack;

    fn setup() -> (LearnerProfile, TrackCurriculum) {
        let curriculum = Curriculum::builtin().unwrap();
        let track = curriculum.get(LearningTrack::Explorers).unwrap().clone();
        let profile = LearnerProfile::new("A".to_owned(), "a@example.ug".to_owned(), LearningTrack::Explorers);
        (profile, track)
    }

    #[test]
    fn test_three_module_scenario() {
        let (mut profile, track) = setup();

        assert!(on_quiz_completed(&mut profile, &track, "e1", true));
        assert_eq!(profile.progress, 33);
        assert_eq!(profile.quizzes_completed, 1);

        assert!(on_quiz_completed(&mut profile, &track, "e2", true));
        assert_eq!(profile.progress, 67);

        assert!(on_quiz_completed(&mut profile, &track, "e3", true));
        assert_eq!(profile.progress, 100);
        assert_eq!(profile.quizzes_completed, 3);
        assert!(certificate::is_certified(&profile));
        assert!(profile.certificate_id.is_some());
    }

    #[test]
    fn test_failed_attempt_changes_nothing() {
        let (mut profile, track) = setup();
        let before = profile.clone();
        assert!(!on_quiz_completed(&mut profile, &track, "e1", false));
        assert_eq!(profile, before);
    }

    #[test]
    fn test_repeat_pass_is_idempotent() {
        let (mut profile, track) = setup();
        assert!(on_quiz_completed(&mut profile, &track, "e1", true));
        let once = profile.clone();
        assert!(!on_quiz_completed(&mut profile, &track, "e1", true));
        assert_eq!(profile, once);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let (mut profile, track) = setup();
        let mut last = profile.progress;
        for id in ["e2", "e1", "e2", "e3"] {
            on_quiz_completed(&mut profile, &track, id, true);
            assert!(profile.progress >= last);
            last = profile.progress;
        }
        assert_eq!(profile.progress, 100);
    }

    #[test]
    fn test_unknown_module_is_ignored() {
        let (mut profile, track) = setup();
        assert!(!on_quiz_completed(&mut profile, &track, "w1", true));
        assert_eq!(profile.progress, 0);
    }

    #[test]
    fn test_certificate_id_recorded_once() {
        let (mut profile, track) = setup();
        for id in ["e1", "e2", "e3"] {
            on_quiz_completed(&mut profile, &track, id, true);
        }
        let recorded = profile.certificate_id.clone();
        assert!(recorded.is_some());
        // Another pass over the same modules must not rotate the id.
        on_quiz_completed(&mut profile, &track, "e1", true);
        assert_eq!(profile.certificate_id, recorded);
    }

    #[test]
    fn test_completion_percent() {
        assert_eq!(completion_percent(0, 3), 0);
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(3, 3), 100);
        assert_eq!(completion_percent(0, 0), 0);
    }
}
