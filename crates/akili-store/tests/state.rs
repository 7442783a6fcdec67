use akili_model::profile::{AssistantLanguage, Preferences, ProjectSubmission, SubmissionStatus};
use akili_model::tab::Tab;
use akili_model::track::LearningTrack;
use akili_store::profile::{Mutation, Query};
use akili_store::state::{PersistedState, STATE_FILE, StateStore};
use chrono::Utc;
use test_log::test;

fn store() -> (tempfile::TempDir, StateStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path());
    (dir, store)
}

#[test(tokio::test)]
async fn test_missing_file_hydrates_fresh() {
    let (_dir, store) = store();
    let state = Query::hydrate(&store).await;
    assert_eq!(state, PersistedState::default());
    assert!(state.user.is_none());
    assert_eq!(state.active_tab, Tab::Dashboard);
}

#[test(tokio::test)]
async fn test_profile_round_trip() {
    let (_dir, store) = store();
    let mut state = PersistedState::default();

    Mutation::create_profile(
        &store,
        &mut state,
        "Okello Patrick".to_owned(),
        "okello.patrick@example.ug".to_owned(),
        LearningTrack::Foundations,
    )
    .await;
    Mutation::set_active_tab(&store, &mut state, Tab::Courses).await;

    let loaded = Query::hydrate(&store).await;
    assert_eq!(loaded, state);
    assert_eq!(loaded.user.unwrap().track, LearningTrack::Foundations);
    assert_eq!(loaded.active_tab, Tab::Courses);
}

#[test(tokio::test)]
async fn test_corrupt_state_is_a_fresh_start() {
    let (dir, store) = store();
    tokio::fs::write(dir.path().join(STATE_FILE), b"{ not json")
        .await
        .unwrap();

    let state = Query::hydrate(&store).await;
    assert_eq!(state, PersistedState::default());
}

#[test(tokio::test)]
async fn test_save_overwrites_atomically() {
    let (dir, store) = store();
    let mut state = PersistedState::default();

    Mutation::create_profile(&store, &mut state, "A".to_owned(), "a@example.ug".to_owned(), LearningTrack::Leaders)
        .await;
    if let Some(user) = state.user.as_mut() {
        user.progress = 33;
        user.completed_modules.insert("l1".to_owned());
        user.quizzes_completed = 1;
    }
    Mutation::save(&store, &state).await;

    let loaded = Query::hydrate(&store).await;
    assert_eq!(loaded.user.as_ref().unwrap().progress, 33);
    // No temp file is left behind.
    let leftover = dir.path().join("akili_state.json.tmp");
    assert!(!leftover.exists());
}

#[test(tokio::test)]
async fn test_update_preferences() {
    let (_dir, store) = store();
    let mut state = PersistedState::default();

    // Without a profile there is nothing to update.
    assert!(!Mutation::update_preferences(&store, &mut state, Preferences::default()).await);

    Mutation::create_profile(&store, &mut state, "A".to_owned(), "a@example.ug".to_owned(), LearningTrack::Explorers)
        .await;
    let preferences = Preferences {
        low_bandwidth: true,
        assistant_language: AssistantLanguage::Luganda,
        notifications_enabled: false,
    };
    assert!(Mutation::update_preferences(&store, &mut state, preferences.clone()).await);

    let loaded = Query::hydrate(&store).await;
    assert_eq!(loaded.user.unwrap().preferences, preferences);
}

#[test(tokio::test)]
async fn test_submit_project_counts_and_persists() {
    let (_dir, store) = store();
    let mut state = PersistedState::default();
    Mutation::create_profile(&store, &mut state, "A".to_owned(), "a@example.ug".to_owned(), LearningTrack::Foundations)
        .await;

    let submission = ProjectSubmission {
        module_id: "f3".to_owned(),
        title: "Crop disease detection".to_owned(),
        content: "Classifier trained on leaf photos.".to_owned(),
        status: SubmissionStatus::Pending,
        feedback: None,
        submitted_at: Utc::now(),
    };
    assert!(Mutation::submit_project(&store, &mut state, submission).await);

    let loaded = Query::hydrate(&store).await;
    let user = loaded.user.unwrap();
    assert_eq!(user.projects_submitted, 1);
    assert_eq!(user.project_submissions.len(), 1);
    assert_eq!(user.project_submissions[0].status, SubmissionStatus::Pending);
}

#[test(tokio::test)]
async fn test_sign_out_wipes_everything() {
    let (dir, store) = store();
    let mut state = PersistedState::default();
    Mutation::create_profile(&store, &mut state, "A".to_owned(), "a@example.ug".to_owned(), LearningTrack::Workplace)
        .await;
    assert!(dir.path().join(STATE_FILE).exists());

    Mutation::sign_out(&store, &mut state).await;
    assert_eq!(state, PersistedState::default());
    assert!(!dir.path().join(STATE_FILE).exists());

    // Signing out twice is harmless.
    Mutation::sign_out(&store, &mut state).await;
}
