//! Garden manager: a keyed collection of gardens plus network-wide analytics

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::statistics;
use crate::domain::{Garden, Plant, PlantTraits};

/// Counts how many managers have been constructed against it.
///
/// `ManagerCounter::global()` is the process-wide instance used by
/// `GardenManager::new`. Tests inject an isolated counter via
/// `GardenManager::with_counter` so parallel tests do not observe each other.
#[derive(Debug, Clone, Default)]
pub struct ManagerCounter {
    count: Arc<AtomicUsize>,
}

impl ManagerCounter {
    /// Fresh counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide counter, starts at zero when the process starts.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<ManagerCounter> = OnceLock::new();
        GLOBAL.get_or_init(ManagerCounter::new).clone()
    }

    /// Number of managers constructed so far.
    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Network-wide statistics, derived fresh from the manager's current state.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkAnalytics<'a> {
    pub total_plants: usize,
    pub average_height: f64,
    pub tallest: Option<&'a Plant>,
    pub blooming_flowers: usize,
    pub total_prize_points: u64,
    pub total_gardens: usize,
}

impl fmt::Display for NetworkAnalytics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total plants: {}", self.total_plants)?;
        writeln!(f, "Average height: {:.2}cm", self.average_height)?;
        match self.tallest {
            Some(plant) => writeln!(f, "Tallest plant: {} ({}cm)", plant.name(), plant.height())?,
            None => writeln!(f, "Tallest plant: none")?,
        }
        writeln!(f, "Blooming flowers: {}", self.blooming_flowers)?;
        writeln!(f, "Total prize points: {}", self.total_prize_points)?;
        write!(f, "Total gardens managed: {}", self.total_gardens)
    }
}

/// Owns gardens keyed by owner name, in insertion order.
#[derive(Debug)]
pub struct GardenManager {
    gardens: Vec<Garden>,
    counter: ManagerCounter,
}

impl GardenManager {
    /// Create an empty manager, counted against the process-wide counter.
    pub fn new() -> Self {
        Self::with_counter(ManagerCounter::global())
    }

    /// Create an empty manager counted against `counter` (for testing).
    pub fn with_counter(counter: ManagerCounter) -> Self {
        let created = counter.increment();
        debug!("GardenManager #{} created", created);
        Self {
            gardens: Vec::new(),
            counter,
        }
    }

    /// Build one manager holding an empty garden per owner name, in order.
    pub fn create_network<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::create_network_with_counter(ManagerCounter::global(), names)
    }

    /// `create_network` counted against `counter` (for testing).
    pub fn create_network_with_counter<I, S>(counter: ManagerCounter, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut manager = Self::with_counter(counter);
        for name in names {
            manager.add_garden(Garden::new(name));
        }
        info!("Garden network created with {} gardens", manager.total_gardens());
        manager
    }

    /// Number of managers constructed against this manager's counter.
    pub fn total_managers_created(&self) -> usize {
        self.counter.get()
    }

    pub fn utility_garden_tip() -> &'static str {
        "Water your plants in the morning for best results."
    }

    /// Insert a garden; an existing garden with the same owner is replaced in place.
    pub fn add_garden(&mut self, garden: Garden) {
        match self.position(garden.owner_name()) {
            Some(idx) => {
                debug!("Replacing garden for {}", garden.owner_name());
                self.gardens[idx] = garden;
            }
            None => {
                debug!("Adding garden for {}", garden.owner_name());
                self.gardens.push(garden);
            }
        }
    }

    pub fn get_garden(&self, owner_name: &str) -> Option<&Garden> {
        self.gardens.iter().find(|g| g.owner_name() == owner_name)
    }

    pub fn get_garden_mut(&mut self, owner_name: &str) -> Option<&mut Garden> {
        self.gardens.iter_mut().find(|g| g.owner_name() == owner_name)
    }

    /// Like `get_garden_mut`, but an unknown owner is an error.
    pub fn require_garden_mut(&mut self, owner_name: &str) -> ApplicationResult<&mut Garden> {
        self.get_garden_mut(owner_name)
            .ok_or_else(|| ApplicationError::GardenNotFound(owner_name.to_string()))
    }

    /// Add a plant to the owner's garden. Returns `false`, changing nothing,
    /// if the owner has no garden.
    pub fn add_plant_to_garden(&mut self, owner_name: &str, plant: Plant) -> bool {
        match self.get_garden_mut(owner_name) {
            Some(garden) => {
                garden.add_plant(plant);
                true
            }
            None => {
                debug!("No garden for {}, plant {} not added", owner_name, plant.name());
                false
            }
        }
    }

    /// Gardens in insertion order.
    pub fn gardens(&self) -> &[Garden] {
        &self.gardens
    }

    pub fn owners(&self) -> impl Iterator<Item = &str> {
        self.gardens.iter().map(Garden::owner_name)
    }

    pub fn total_gardens(&self) -> usize {
        self.gardens.len()
    }

    /// Score per owner, in insertion order.
    pub fn calculate_all_scores(&self) -> Vec<(String, u64)> {
        self.gardens
            .iter()
            .map(|g| (g.owner_name().to_string(), g.calculate_score()))
            .collect()
    }

    /// Plants of every garden, gardens in insertion order.
    pub fn all_plants(&self) -> impl Iterator<Item = &Plant> {
        self.gardens.iter().flat_map(|g| g.plants().iter())
    }

    pub fn comprehensive_analytics(&self) -> NetworkAnalytics<'_> {
        let plants: Vec<&Plant> = self.all_plants().collect();
        let plants = plants.iter().copied();
        NetworkAnalytics {
            total_plants: plants.len(),
            average_height: statistics::average_height(plants.clone()),
            tallest: statistics::tallest_plant(plants.clone()),
            blooming_flowers: statistics::count_blooming(plants.clone()),
            total_prize_points: statistics::total_prize_points(plants),
            total_gardens: self.total_gardens(),
        }
    }

    /// Total plants across gardens (counted per garden, not flattened).
    pub fn total_plants(&self) -> usize {
        statistics::total_plants(&self.gardens)
    }

    /// Mean of per-garden summed heights over non-empty gardens.
    pub fn average_garden_height(&self) -> f64 {
        statistics::average_garden_height(&self.gardens)
    }

    fn position(&self, owner_name: &str) -> Option<usize> {
        self.gardens.iter().position(|g| g.owner_name() == owner_name)
    }
}

impl Default for GardenManager {
    fn default() -> Self {
        Self::new()
    }
}
