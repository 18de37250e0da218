//! Planet resources: entities, the in-memory store, the listing engine
//! and the manager tying them together.

mod types;
pub use types::{Planet, PlanetCandidate, Satellite};

mod store;
pub use store::{PlanetSnapshot, PlanetStore};

pub mod query;
pub use query::{PlanetQuery, QueryPage, SortField, SortOrder, SortSpec, StatusFilter};

pub mod seed;

mod manager;
pub use manager::PlanetManager;
