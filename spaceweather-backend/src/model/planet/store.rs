use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use super::types::{Planet, PlanetCandidate};
use crate::error::{PlanetError, PlanetResult};

/// Point-in-time, read-only view of the store contents in insertion order
pub type PlanetSnapshot = Arc<Vec<Planet>>;

struct StoreInner {
    /// Copy-on-write: snapshots already handed out keep the old vector
    planets: PlanetSnapshot,
    /// Next id to hand out, only ever increases
    next_id: i64,
}

/// Authoritative in-memory planet collection
///
/// Every mutation holds the write lock for its whole duration. Snapshots
/// only clone the `Arc` under the read lock, so queries run lock-free on
/// a vector that can no longer change.
pub struct PlanetStore {
    inner: RwLock<StoreInner>,
}

impl PlanetStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                planets: Arc::new(Vec::new()),
                next_id: 1,
            }),
        }
    }

    /// Insert a new planet, assigning its id and creation time
    pub fn insert(&self, candidate: PlanetCandidate) -> Planet {
        self.insert_at(candidate, Utc::now())
    }

    /// Insert a new planet with an explicit creation time
    pub fn insert_at(&self, candidate: PlanetCandidate, created_date: DateTime<Utc>) -> Planet {
        let mut inner = self.inner.write();

        let id = inner.next_id;
        inner.next_id += 1;

        let planet = Planet {
            id,
            name: candidate.name,
            created_date,
            is_active: candidate.is_active.unwrap_or(false),
            satellites: candidate.satellites,
        };
        Arc::make_mut(&mut inner.planets).push(planet.clone());

        debug!("Inserted planet {} '{}'", planet.id, planet.name);
        planet
    }

    pub fn find_by_id(&self, id: i64) -> PlanetResult<Planet> {
        let inner = self.inner.read();
        inner
            .planets
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PlanetError::NotFound(id))
    }

    /// Overwrite name and satellites (and `is_active` when given) in place
    ///
    /// `id` and `created_date` are never touched.
    pub fn replace(&self, id: i64, candidate: PlanetCandidate) -> PlanetResult<Planet> {
        let mut inner = self.inner.write();

        let index = inner
            .planets
            .iter()
            .position(|p| p.id == id)
            .ok_or(PlanetError::NotFound(id))?;

        let planet = &mut Arc::make_mut(&mut inner.planets)[index];
        planet.name = candidate.name;
        planet.satellites = candidate.satellites;
        if let Some(is_active) = candidate.is_active {
            planet.is_active = is_active;
        }

        debug!("Replaced planet {}", id);
        Ok(planet.clone())
    }

    /// Hard delete; the id is never handed out again
    pub fn remove(&self, id: i64) -> PlanetResult<()> {
        let mut inner = self.inner.write();

        let index = inner
            .planets
            .iter()
            .position(|p| p.id == id)
            .ok_or(PlanetError::NotFound(id))?;
        Arc::make_mut(&mut inner.planets).remove(index);

        debug!("Removed planet {}", id);
        Ok(())
    }

    pub fn snapshot(&self) -> PlanetSnapshot {
        self.inner.read().planets.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.read().planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlanetStore {
    fn default() -> Self {
        Self::new()
    }
}
