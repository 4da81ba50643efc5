//! Garden: an owner's ordered collection of plants

use std::fmt;

use tracing::debug;

use crate::domain::{Plant, PlantClass, PlantTraits};

/// Growth applied to one plant during `Garden::grow_all_plants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowthEvent {
    pub plant: String,
    pub delta: u32,
}

/// Plant counts by most specific classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlantCensus {
    pub regular: usize,
    /// Flowering plants that are not prize flowers
    pub flowering: usize,
    pub prize: usize,
}

impl PlantCensus {
    pub fn total(&self) -> usize {
        self.regular + self.flowering + self.prize
    }
}

/// Read-only view of a garden's current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenReport {
    pub owner: String,
    /// One `describe()` line per plant, in insertion order
    pub plants: Vec<String>,
    pub added_count: usize,
    pub total_growth: u64,
    pub census: PlantCensus,
    pub heights_valid: bool,
}

impl fmt::Display for GardenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {}'s Garden Report ===", self.owner)?;
        writeln!(f, "Plants in garden:")?;
        for line in &self.plants {
            writeln!(f, "- {line}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Plants added: {}, Total growth: {}cm",
            self.added_count, self.total_growth
        )?;
        writeln!(
            f,
            "Plant types: {} regular, {} flowering, {} prize flowers",
            self.census.regular, self.census.flowering, self.census.prize
        )?;
        write!(f, "Height validation test: {}", self.heights_valid)
    }
}

/// A garden owned by one person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Garden {
    owner_name: String,
    plants: Vec<Plant>,
    added_count: usize,
    total_growth: u64,
}

impl Garden {
    /// Create an empty garden.
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            plants: Vec::new(),
            added_count: 0,
            total_growth: 0,
        }
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Plants in insertion order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn added_count(&self) -> usize {
        self.added_count
    }

    pub fn total_growth(&self) -> u64 {
        self.total_growth
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Append a plant.
    pub fn add_plant(&mut self, plant: Plant) {
        debug!("Added {} to {}'s garden", plant.name(), self.owner_name);
        self.plants.push(plant);
        self.added_count += 1;
    }

    /// First plant with the given name (names may repeat).
    pub fn find_plant_mut(&mut self, name: &str) -> Option<&mut Plant> {
        self.plants.iter_mut().find(|p| p.name() == name)
    }

    /// Grow every plant once, in insertion order.
    ///
    /// Each growth delta is added to `total_growth`.
    pub fn grow_all_plants(&mut self) -> Vec<GrowthEvent> {
        debug!("{} is helping all plants grow", self.owner_name);
        let events: Vec<GrowthEvent> = self
            .plants
            .iter_mut()
            .map(|plant| GrowthEvent {
                delta: plant.grow(),
                plant: plant.name().to_string(),
            })
            .collect();
        self.total_growth += events.iter().map(|e| u64::from(e.delta)).sum::<u64>();
        events
    }

    /// Count plants by most specific classification in a single pass.
    pub fn classify_plants(&self) -> PlantCensus {
        self.plants
            .iter()
            .fold(PlantCensus::default(), |mut census, plant| {
                match plant.class() {
                    PlantClass::Regular => census.regular += 1,
                    PlantClass::Flowering => census.flowering += 1,
                    PlantClass::Prize => census.prize += 1,
                }
                census
            })
    }

    /// Sum of every plant's score contribution.
    pub fn calculate_score(&self) -> u64 {
        self.plants.iter().map(PlantTraits::score_contribution).sum()
    }

    /// True iff every plant is taller than 0cm.
    pub fn validate_heights(&self) -> bool {
        self.plants.iter().all(|p| p.height() > 0)
    }

    /// Summed height of all plants.
    pub fn total_height(&self) -> u64 {
        self.plants.iter().map(|p| u64::from(p.height())).sum()
    }

    pub fn generate_report(&self) -> GardenReport {
        GardenReport {
            owner: self.owner_name.clone(),
            plants: self.plants.iter().map(PlantTraits::describe).collect(),
            added_count: self.added_count,
            total_growth: self.total_growth,
            census: self.classify_plants(),
            heights_valid: self.validate_heights(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display_lists_plants_and_counts() {
        let mut garden = Garden::new("Alice");
        garden.add_plant(Plant::new("Oak Tree", 100, 365));
        garden.add_plant(Plant::flowering("Rose", 25, 30, "red"));
        garden.grow_all_plants();

        let text = garden.generate_report().to_string();

        assert!(text.starts_with("=== Alice's Garden Report ==="));
        assert!(text.contains("- Oak Tree: 101cm"));
        assert!(text.contains("- Rose: 26cm, red flowers (not blooming)"));
        assert!(text.contains("Plants added: 2, Total growth: 2cm"));
        assert!(text.contains("Plant types: 1 regular, 1 flowering, 0 prize flowers"));
        assert!(text.ends_with("Height validation test: true"));
    }

    #[test]
    fn test_empty_garden_validates_heights() {
        let garden = Garden::new("Nobody");
        assert!(garden.validate_heights());
        assert_eq!(garden.calculate_score(), 0);
        assert_eq!(garden.classify_plants().total(), 0);
    }
}
