use chrono::Utc;
use spaceweather_common::{PlanetDto, PlanetPayload};
use tracing::{debug, info};

use super::query::{self, PlanetQuery, QueryPage};
use super::seed;
use super::store::PlanetStore;
use super::types::PlanetCandidate;
use crate::error::PlanetResult;

/// Planet resource manager
///
/// Entry point for the five planet operations. Mutations go straight to the
/// store; listings validate first, then query a snapshot outside the lock.
pub struct PlanetManager {
    store: PlanetStore,
}

impl PlanetManager {
    pub fn new() -> Self {
        Self {
            store: PlanetStore::new(),
        }
    }

    /// Load the demo planets with back-dated creation times
    pub fn seed_demo_data(&self) -> usize {
        let planets = seed::demo_planets(Utc::now());
        let count = planets.len();

        for (candidate, created_date) in planets {
            self.store.insert_at(candidate, created_date);
        }

        info!("Seeded {} demo planets", count);
        count
    }

    pub fn list(&self, query: &PlanetQuery) -> PlanetResult<QueryPage> {
        query.validate()?;

        let snapshot = self.store.snapshot();
        let page = query::execute(&snapshot, query)?;

        debug!(
            "Listed planets page={} size={} filter={:?} sort={:?}: {} of {}",
            query.page,
            query.size,
            query.filter,
            query.sort,
            page.items.len(),
            page.total_count
        );
        Ok(page)
    }

    pub fn get_by_id(&self, id: i64) -> PlanetResult<PlanetDto> {
        self.store.find_by_id(id).map(|p| p.to_dto())
    }

    /// Create a planet; any `id` or `createdDate` in the payload is ignored
    pub fn create(&self, payload: PlanetPayload) -> PlanetDto {
        if let Some(client_id) = payload.id {
            debug!("Ignoring client-supplied id {} on create", client_id);
        }

        let planet = self.store.insert(PlanetCandidate::from(payload));
        info!("Created planet {} '{}'", planet.id, planet.name);
        planet.to_dto()
    }

    pub fn update(&self, id: i64, payload: PlanetPayload) -> PlanetResult<PlanetDto> {
        let planet = self.store.replace(id, PlanetCandidate::from(payload))?;
        info!("Updated planet {} '{}'", planet.id, planet.name);
        Ok(planet.to_dto())
    }

    pub fn delete(&self, id: i64) -> PlanetResult<()> {
        self.store.remove(id)?;
        info!("Deleted planet {}", id);
        Ok(())
    }

    /// (total, active)
    pub fn get_planet_count(&self) -> (usize, usize) {
        let snapshot = self.store.snapshot();
        let active = snapshot.iter().filter(|p| p.is_active).count();
        (snapshot.len(), active)
    }
}

impl Default for PlanetManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanetError;
    use spaceweather_common::SatellitePayload;

    fn payload(name: &str) -> PlanetPayload {
        PlanetPayload {
            id: None,
            name: name.to_string(),
            created_date: None,
            is_active: None,
            satellites: Vec::new(),
        }
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let manager = PlanetManager::new();
        let mut body = payload("Venus");
        body.id = Some(1000);
        body.created_date = Some(Utc::now() - chrono::Duration::days(365));
        body.satellites.push(SatellitePayload {
            id: 4,
            name: "Zoozve".to_string(),
            weather: "Acid Rain".to_string(),
        });

        let before = Utc::now();
        let created = manager.create(body);

        assert_eq!(created.id, 1);
        assert!(created.created_date >= before);
        assert!(!created.is_active);

        let fetched = manager.get_by_id(created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.satellites[0].weather, "Acid Rain");
    }

    #[test]
    fn test_update_ignores_id_and_created_date_in_payload() {
        let manager = PlanetManager::new();
        let created = manager.create(payload("Earth"));

        let mut body = payload("Terra");
        body.id = Some(77);
        body.created_date = Some(Utc::now() + chrono::Duration::days(10));
        let updated = manager.update(created.id, body).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_date, created.created_date);
        assert_eq!(updated.name, "Terra");
        assert_eq!(manager.get_by_id(77), Err(PlanetError::NotFound(77)));
    }

    #[test]
    fn test_never_issued_ids_are_not_found() {
        let manager = PlanetManager::new();
        manager.create(payload("Earth"));

        assert_eq!(manager.get_by_id(2), Err(PlanetError::NotFound(2)));
        assert_eq!(manager.update(2, payload("x")), Err(PlanetError::NotFound(2)));
        assert_eq!(manager.delete(2), Err(PlanetError::NotFound(2)));
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let manager = PlanetManager::new();
        let created = manager.create(payload("Pluto"));

        manager.delete(created.id).unwrap();
        assert_eq!(manager.get_by_id(created.id), Err(PlanetError::NotFound(created.id)));
        assert_eq!(manager.delete(created.id), Err(PlanetError::NotFound(created.id)));

        let next = manager.create(payload("Pluto"));
        assert_ne!(next.id, created.id);
    }

    #[test]
    fn test_list_rejects_invalid_page_before_querying() {
        let manager = PlanetManager::new();
        let result = manager.list(&PlanetQuery::default().page(0, 10));
        assert!(matches!(result, Err(PlanetError::InvalidQuery(_))));
    }

    #[test]
    fn test_seeded_listing() {
        let manager = PlanetManager::new();
        assert_eq!(manager.seed_demo_data(), 5);

        let page = manager.list(&PlanetQuery::default()).unwrap();
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Earth", "Mars", "Jupiter", "Saturn", "Neptune"]);

        let page = manager
            .list(&PlanetQuery::default().sort("created_date,desc").page(1, 2))
            .unwrap();
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Neptune", "Saturn"]);

        assert_eq!(manager.get_planet_count(), (5, 0));
    }
}
