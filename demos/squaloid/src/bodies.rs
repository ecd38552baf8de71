//! Celestial body registry.
//!
//! Loads the star and planet records from embedded JSON and validates them
//! once. Records are immutable after construction.

use serde::Deserialize;
use thiserror::Error;

/// Embed the Squaloid dataset at compile time.
const SQUALOID_JSON: &str = include_str!("../data/squaloid.json");

/// Largest valid `0xRRGGBB` color.
const MAX_COLOR: u32 = 0xFF_FF_FF;

/// Error type for registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed star system data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{planet}: revolution period must be positive, got {value}")]
    InvalidPeriod { planet: String, value: f64 },

    #[error("{body}: {field} must be positive, got {value}")]
    InvalidGeometry {
        body: String,
        field: &'static str,
        value: f64,
    },

    #[error("{body}: color {value:#x} is not a 0xRRGGBB value")]
    InvalidColor { body: String, value: u32 },

    #[error("star system has no planets")]
    NoPlanets,
}

/// The central star.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Star {
    pub name: String,
    pub mass: String,
    pub diameter: String,
    pub composition: String,
    pub color: u32,
    pub rationale: String,
}

/// One planet record. `revolution` drives orbital speed; the string fields
/// are display-only labels.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub mass: String,
    pub composition: String,
    pub rotation: String,
    pub revolution: f64,
    pub distance_from_star: f64,
    pub distance_from_previous: String,
    pub color: u32,
    pub size: f64,
}

/// Typed reference from a scene object back to its source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRef {
    Star,
    Planet(usize),
}

/// A borrowed body record.
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    Star(&'a Star),
    Planet(&'a Planet),
}

impl Body<'_> {
    pub fn name(&self) -> &str {
        match self {
            Body::Star(star) => &star.name,
            Body::Planet(planet) => &planet.name,
        }
    }
}

/// The validated registry: one star, an ordered list of planets.
#[derive(Debug, Clone, Deserialize)]
pub struct StarSystem {
    name: String,
    star: Star,
    planets: Vec<Planet>,
}

impl StarSystem {
    /// Parse and validate the embedded dataset.
    pub fn load() -> Result<Self, RegistryError> {
        Self::from_json(SQUALOID_JSON)
    }

    /// Parse and validate a dataset of the same shape as the embedded one.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let system: StarSystem = serde_json::from_str(json)?;
        system.validate()?;
        Ok(system)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        check_color(&self.star.name, self.star.color)?;
        if self.planets.is_empty() {
            return Err(RegistryError::NoPlanets);
        }
        for planet in &self.planets {
            if !(planet.revolution.is_finite() && planet.revolution > 0.0) {
                return Err(RegistryError::InvalidPeriod {
                    planet: planet.name.clone(),
                    value: planet.revolution,
                });
            }
            check_positive(&planet.name, "size", planet.size)?;
            check_positive(&planet.name, "distanceFromStar", planet.distance_from_star)?;
            check_color(&planet.name, planet.color)?;
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn star(&self) -> &Star {
        &self.star
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn planet(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    /// Resolve a scene back-reference to its record.
    pub fn body(&self, body: BodyRef) -> Option<Body<'_>> {
        match body {
            BodyRef::Star => Some(Body::Star(&self.star)),
            BodyRef::Planet(index) => self.planet(index).map(Body::Planet),
        }
    }

    /// Number of planets.
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }
}

fn check_positive(body: &str, field: &'static str, value: f64) -> Result<(), RegistryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidGeometry {
            body: body.to_string(),
            field,
            value,
        })
    }
}

fn check_color(body: &str, value: u32) -> Result<(), RegistryError> {
    if value > MAX_COLOR {
        return Err(RegistryError::InvalidColor {
            body: body.to_string(),
            value,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(planets: &str) -> String {
        format!(
            r#"{{
                "name": "Test",
                "star": {{
                    "name": "Sol", "mass": "1", "diameter": "2",
                    "composition": "H", "color": 16776960, "rationale": "test"
                }},
                "planets": [{planets}]
            }}"#
        )
    }

    fn planet(revolution: &str, distance: &str, size: &str, color: &str) -> String {
        format!(
            r#"{{
                "name": "P", "type": "Rocky", "mass": "1", "composition": "Rock",
                "rotation": "1 day", "revolution": {revolution},
                "distanceFromStar": {distance}, "distanceFromPrevious": "N/A",
                "color": {color}, "size": {size}
            }}"#
        )
    }

    #[test]
    fn embedded_dataset_loads() {
        let system = StarSystem::load().unwrap();
        assert_eq!(system.name(), "Squaloid");
        assert_eq!(system.star().name, "Phlegm");
        assert_eq!(system.star().color, 0xff0000);
        assert_eq!(system.len(), 5);

        let names: Vec<&str> = system.planets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Jeglant", "Lugubrious", "Moist", "Gassy", "Oozey Igneus"]);

        let moist = system.planet(2).unwrap();
        assert_eq!(moist.kind, "Ice Giant/Water World");
        assert_eq!(moist.revolution, 26.5);
        assert_eq!(moist.distance_from_star, 150.0);
        assert_eq!(moist.color, 0xadd8e6);
    }

    #[test]
    fn body_resolves_references() {
        let system = StarSystem::load().unwrap();
        assert_eq!(system.body(BodyRef::Star).unwrap().name(), "Phlegm");
        assert_eq!(system.body(BodyRef::Planet(3)).unwrap().name(), "Gassy");
        assert!(system.body(BodyRef::Planet(5)).is_none());
    }

    #[test]
    fn valid_custom_dataset_parses() {
        let json = dataset(&planet("1.5", "10", "1", "255"));
        let system = StarSystem::from_json(&json).unwrap();
        assert_eq!(system.planets()[0].revolution, 1.5);
    }

    #[test]
    fn rejects_non_positive_period() {
        for period in ["0", "-2"] {
            let json = dataset(&planet(period, "10", "1", "255"));
            assert!(matches!(
                StarSystem::from_json(&json),
                Err(RegistryError::InvalidPeriod { .. })
            ));
        }
    }

    #[test]
    fn rejects_bad_geometry() {
        let json = dataset(&planet("1", "0", "1", "255"));
        match StarSystem::from_json(&json) {
            Err(RegistryError::InvalidGeometry { field, .. }) => assert_eq!(field, "distanceFromStar"),
            other => panic!("expected InvalidGeometry, got {other:?}"),
        }

        let json = dataset(&planet("1", "10", "-1", "255"));
        assert!(matches!(
            StarSystem::from_json(&json),
            Err(RegistryError::InvalidGeometry { field: "size", .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_color() {
        let json = dataset(&planet("1", "10", "1", "16777216"));
        assert!(matches!(
            StarSystem::from_json(&json),
            Err(RegistryError::InvalidColor { .. })
        ));
    }

    #[test]
    fn rejects_empty_planet_list() {
        assert!(matches!(
            StarSystem::from_json(&dataset("")),
            Err(RegistryError::NoPlanets)
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            StarSystem::from_json("{ not json"),
            Err(RegistryError::Parse(_))
        ));
    }
}
