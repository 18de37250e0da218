//! Demo data loaded on startup when `seed_demo_data` is enabled.

use chrono::{DateTime, Duration, Utc};

use super::types::{PlanetCandidate, Satellite};

/// The five demo planets, oldest first, created 5..1 days before `now`
pub fn demo_planets(now: DateTime<Utc>) -> Vec<(PlanetCandidate, DateTime<Utc>)> {
    let planets = [
        PlanetCandidate::new("Earth").with_satellite(Satellite::new(1, "Moon", "Clear")),
        PlanetCandidate::new("Mars")
            .with_satellite(Satellite::new(1, "Phobos", "Cloudy"))
            .with_satellite(Satellite::new(2, "Deimos", "Cloudy")),
        PlanetCandidate::new("Jupiter").with_satellite(Satellite::new(1, "Europa", "Windy")),
        PlanetCandidate::new("Saturn").with_satellite(Satellite::new(1, "Titan", "Cloudy")),
        PlanetCandidate::new("Neptune").with_satellite(Satellite::new(1, "Triton", "Clear")),
    ];

    planets
        .into_iter()
        .zip((1..=5).rev())
        .map(|(candidate, days_ago)| (candidate, now - Duration::days(days_ago)))
        .collect()
}
