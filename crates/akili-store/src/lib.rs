pub mod error;
pub mod profile;
pub mod state;

pub use error::StoreError;
pub use state::{PersistedState, StateStore};
