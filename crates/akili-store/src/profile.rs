use crate::state::{PersistedState, StateStore};
use akili_model::profile::{LearnerProfile, Preferences, ProjectSubmission};
use akili_model::tab::Tab;
use akili_model::track::LearningTrack;

pub struct Query;

impl Query {
    /// Reads the stored record once at startup.
    pub async fn hydrate(store: &StateStore) -> PersistedState {
        store.load().await
    }
}

pub struct Mutation;

impl Mutation {
    /// The profile comes into existence the moment a track is chosen.
    pub async fn create_profile(
        store: &StateStore,
        state: &mut PersistedState,
        name: String,
        email: String,
        track: LearningTrack,
    ) {
        state.user = Some(LearnerProfile::new(name, email, track));
        tracing::info!(%track, "profile created");
        store.persist(state).await;
    }

    /// Persists the record after the caller mutated the profile in place
    /// (quiz completion, settings edits).
    pub async fn save(store: &StateStore, state: &PersistedState) {
        store.persist(state).await;
    }

    pub async fn set_active_tab(store: &StateStore, state: &mut PersistedState, tab: Tab) {
        state.active_tab = tab;
        store.persist(state).await;
    }

    pub async fn update_preferences(store: &StateStore, state: &mut PersistedState, preferences: Preferences) -> bool {
        let updated = match state.user.as_mut() {
            Some(user) => {
                user.preferences = preferences;
                true
            }
            None => false,
        };
        if updated {
            store.persist(state).await;
        }
        updated
    }

    pub async fn submit_project(
        store: &StateStore,
        state: &mut PersistedState,
        submission: ProjectSubmission,
    ) -> bool {
        let submitted = match state.user.as_mut() {
            Some(user) => {
                user.projects_submitted += 1;
                user.project_submissions.push(submission);
                true
            }
            None => false,
        };
        if submitted {
            store.persist(state).await;
        }
        submitted
    }

    /// The deliberate, user-confirmed, irreversible local wipe: both the
    /// in-memory record and the stored one are gone afterwards.
    pub async fn sign_out(store: &StateStore, state: &mut PersistedState) {
        *state = PersistedState::default();
        if let Err(error) = store.wipe().await {
            tracing::error!(error = &error as &dyn std::error::Error, "failed to remove stored state");
        }
    }
}
