//! Plant entities: regular plants (plain, tree, vegetable), flowering plants and prize flowers
//!
//! The hierarchy is a tagged variant (`PlantKind`) on a single `Plant` struct.
//! Shared behavior lives in the `PlantTraits` capability trait so statistics
//! can run over any plant-like value.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{DomainError, DomainResult};

/// Most specific classification of a plant.
///
/// Ordering of specificity: `Prize` > `Flowering` > `Regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlantClass {
    Regular,
    Flowering,
    Prize,
}

impl fmt::Display for PlantClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlantClass::Regular => "regular",
            PlantClass::Flowering => "flowering",
            PlantClass::Prize => "prize flower",
        };
        f.write_str(label)
    }
}

/// Kind-specific state of a plant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantKind {
    /// Plain plant: only name, height and age
    Regular,
    /// Tree; counts as regular, shade scales with trunk diameter
    Tree { trunk_diameter: u32 },
    /// Vegetable; counts as regular
    Vegetable {
        harvest_season: String,
        nutritional_value: String,
    },
    /// Flowering plant; `blooming` only ever goes from false to true
    Flowering { color: String, blooming: bool },
    /// Prize-winning flower; `points` only ever increases
    Prize {
        color: String,
        blooming: bool,
        points: u32,
    },
}

impl PlantKind {
    pub fn class(&self) -> PlantClass {
        match self {
            PlantKind::Regular | PlantKind::Tree { .. } | PlantKind::Vegetable { .. } => {
                PlantClass::Regular
            }
            PlantKind::Flowering { .. } => PlantClass::Flowering,
            PlantKind::Prize { .. } => PlantClass::Prize,
        }
    }
}

/// Capability set shared by every plant variant.
pub trait PlantTraits {
    /// Plant name (immutable after creation).
    fn name(&self) -> &str;

    /// Current height in centimeters.
    fn height(&self) -> u32;

    /// Most specific classification.
    fn class(&self) -> PlantClass;

    /// Bloom state, `None` for plants that cannot flower.
    fn is_blooming(&self) -> Option<bool>;

    /// Competition points, `None` for plants that cannot hold them.
    fn prize_points(&self) -> Option<u32>;

    /// Grow by one centimeter; returns the growth actually applied (0 at the height ceiling).
    fn grow(&mut self) -> u32;

    /// Human-readable one-line description.
    fn describe(&self) -> String;

    /// Contribution to a garden score: height plus any prize points.
    fn score_contribution(&self) -> u64 {
        u64::from(self.height()) + u64::from(self.prize_points().unwrap_or(0))
    }
}

/// A plant in a garden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plant {
    name: String,
    height: u32,
    age: u32,
    initial_height: u32,
    kind: PlantKind,
}

impl Plant {
    /// Create a regular plant.
    pub fn new(name: impl Into<String>, height: u32, age: u32) -> Self {
        Self::with_kind(name, height, age, PlantKind::Regular)
    }

    /// Create a flowering plant (not yet blooming).
    pub fn flowering(
        name: impl Into<String>,
        height: u32,
        age: u32,
        color: impl Into<String>,
    ) -> Self {
        let kind = PlantKind::Flowering {
            color: color.into(),
            blooming: false,
        };
        Self::with_kind(name, height, age, kind)
    }

    /// Create a prize flower (not yet blooming) holding `points` competition points.
    pub fn prize_flower(
        name: impl Into<String>,
        height: u32,
        age: u32,
        color: impl Into<String>,
        points: u32,
    ) -> Self {
        let kind = PlantKind::Prize {
            color: color.into(),
            blooming: false,
            points,
        };
        Self::with_kind(name, height, age, kind)
    }

    /// Create a tree with a trunk diameter in centimeters.
    pub fn tree(name: impl Into<String>, height: u32, age: u32, trunk_diameter: u32) -> Self {
        Self::with_kind(name, height, age, PlantKind::Tree { trunk_diameter })
    }

    /// Create a vegetable.
    pub fn vegetable(
        name: impl Into<String>,
        height: u32,
        age: u32,
        harvest_season: impl Into<String>,
        nutritional_value: impl Into<String>,
    ) -> Self {
        let kind = PlantKind::Vegetable {
            harvest_season: harvest_season.into(),
            nutritional_value: nutritional_value.into(),
        };
        Self::with_kind(name, height, age, kind)
    }

    /// Create regular plants from `(name, height, age)` specs, in order.
    pub fn batch<I, S>(specs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (S, u32, u32)>,
        S: Into<String>,
    {
        let plants: Vec<Self> = specs
            .into_iter()
            .map(|(name, height, age)| Self::new(name, height, age))
            .collect();
        debug!("Created {} plants", plants.len());
        plants
    }

    fn with_kind(name: impl Into<String>, height: u32, age: u32, kind: PlantKind) -> Self {
        Self {
            name: name.into(),
            height,
            age,
            initial_height: height,
            kind,
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn initial_height(&self) -> u32 {
        self.initial_height
    }

    pub fn kind(&self) -> &PlantKind {
        &self.kind
    }

    /// Flower color, `None` for plants that cannot flower.
    pub fn color(&self) -> Option<&str> {
        match &self.kind {
            PlantKind::Flowering { color, .. } | PlantKind::Prize { color, .. } => Some(color),
            _ => None,
        }
    }

    /// Set height from raw input.
    ///
    /// Negative or out-of-range values are rejected and the current height is kept.
    pub fn set_height(&mut self, value: i64) -> DomainResult<()> {
        if value < 0 {
            warn!("{}: negative height {}cm rejected", self.name, value);
            return Err(DomainError::NegativeHeight {
                name: self.name.clone(),
                value,
            });
        }
        self.height = self.checked_u32("height", value)?;
        debug!("{}: height updated to {}cm", self.name, self.height);
        Ok(())
    }

    /// Set age from raw input.
    ///
    /// Negative or out-of-range values are rejected and the current age is kept.
    pub fn set_age(&mut self, value: i64) -> DomainResult<()> {
        if value < 0 {
            warn!("{}: negative age {} days rejected", self.name, value);
            return Err(DomainError::NegativeAge {
                name: self.name.clone(),
                value,
            });
        }
        self.age = self.checked_u32("age", value)?;
        debug!("{}: age updated to {} days", self.name, self.age);
        Ok(())
    }

    fn checked_u32(&self, field: &'static str, value: i64) -> DomainResult<u32> {
        u32::try_from(value).map_err(|_| {
            warn!("{}: {} {} out of range", self.name, field, value);
            DomainError::ValueOutOfRange {
                name: self.name.clone(),
                field,
                value,
            }
        })
    }

    /// Advance age by one day.
    pub fn age_up(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    /// Simulate `days` days: each day grows and ages the plant once.
    /// Returns the total growth over the period.
    pub fn simulate_days(&mut self, days: u32) -> u32 {
        (0..days).fold(0, |total, _| {
            let delta = self.grow();
            self.age_up();
            total + delta
        })
    }

    /// Height gained (or lost through `set_height`) since construction.
    pub fn growth_since_planting(&self) -> i64 {
        i64::from(self.height) - i64::from(self.initial_height)
    }

    /// Shade area in square meters (`trunk_diameter * height / 100`), trees only.
    pub fn produce_shade(&self) -> Option<u64> {
        match &self.kind {
            PlantKind::Tree { trunk_diameter } => {
                Some(u64::from(*trunk_diameter) * u64::from(self.height) / 100)
            }
            _ => None,
        }
    }

    /// Nutritional value of a vegetable's harvest, vegetables only.
    pub fn harvest(&self) -> Option<&str> {
        match &self.kind {
            PlantKind::Vegetable {
                nutritional_value, ..
            } => Some(nutritional_value),
            _ => None,
        }
    }

    /// Make a flowering plant bloom.
    ///
    /// Idempotent. Returns `false` for plants that cannot bloom.
    pub fn bloom(&mut self) -> bool {
        match &mut self.kind {
            PlantKind::Flowering { blooming, .. } | PlantKind::Prize { blooming, .. } => {
                if !*blooming {
                    debug!("{}: blooming", self.name);
                }
                *blooming = true;
                true
            }
            _ => {
                debug!("{}: non-flowering plants do not bloom", self.name);
                false
            }
        }
    }

    /// Award competition points to a prize flower; returns the new total.
    pub fn award_points(&mut self, awarded: u32) -> DomainResult<u32> {
        if let PlantKind::Prize { points, .. } = &mut self.kind {
            *points = points.saturating_add(awarded);
            debug!("{}: awarded {} points, total {}", self.name, awarded, points);
            return Ok(*points);
        }
        warn!("{}: cannot award points to a {}", self.name, self.kind.class());
        Err(DomainError::NotPrizeFlower(self.name.clone()))
    }
}

impl PlantTraits for Plant {
    fn name(&self) -> &str {
        &self.name
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn class(&self) -> PlantClass {
        self.kind.class()
    }

    fn is_blooming(&self) -> Option<bool> {
        match &self.kind {
            PlantKind::Flowering { blooming, .. } | PlantKind::Prize { blooming, .. } => {
                Some(*blooming)
            }
            _ => None,
        }
    }

    fn prize_points(&self) -> Option<u32> {
        match &self.kind {
            PlantKind::Prize { points, .. } => Some(*points),
            _ => None,
        }
    }

    fn grow(&mut self) -> u32 {
        let before = self.height;
        self.height = self.height.saturating_add(1);
        if self.height == before {
            warn!("{}: height at maximum, no growth applied", self.name);
        }
        self.height - before
    }

    fn describe(&self) -> String {
        let base = format!("{}: {}cm", self.name, self.height);
        let bloom_status = |blooming: bool| if blooming { "blooming" } else { "not blooming" };
        match &self.kind {
            PlantKind::Regular => base,
            PlantKind::Tree { trunk_diameter } => {
                format!("{base}, {trunk_diameter}cm trunk diameter")
            }
            PlantKind::Vegetable {
                harvest_season,
                nutritional_value,
            } => format!("{base}, {harvest_season} harvest, rich in {nutritional_value}"),
            PlantKind::Flowering { color, blooming } => {
                format!("{base}, {color} flowers ({})", bloom_status(*blooming))
            }
            PlantKind::Prize {
                color,
                blooming,
                points,
            } => format!(
                "{base}, {color} flowers ({}), Prize points: {points}",
                bloom_status(*blooming)
            ),
        }
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_regular() {
        let oak = Plant::new("Oak Tree", 100, 365);
        assert_eq!(oak.describe(), "Oak Tree: 100cm");
    }

    #[test]
    fn test_describe_flowering_shows_bloom_state() {
        let mut rose = Plant::flowering("Rose", 25, 30, "red");
        assert_eq!(rose.describe(), "Rose: 25cm, red flowers (not blooming)");
        rose.bloom();
        assert_eq!(rose.describe(), "Rose: 25cm, red flowers (blooming)");
    }

    #[test]
    fn test_describe_prize_flower_includes_points() {
        let mut sunflower = Plant::prize_flower("Sunflower", 50, 60, "yellow", 10);
        sunflower.bloom();
        assert_eq!(
            sunflower.describe(),
            "Sunflower: 50cm, yellow flowers (blooming), Prize points: 10"
        );
        assert_eq!(sunflower.to_string(), sunflower.describe());
    }

    #[test]
    fn test_class_is_most_specific_variant() {
        assert_eq!(Plant::new("a", 1, 1).class(), PlantClass::Regular);
        assert_eq!(Plant::flowering("b", 1, 1, "red").class(), PlantClass::Flowering);
        assert_eq!(
            Plant::prize_flower("c", 1, 1, "red", 0).class(),
            PlantClass::Prize
        );
    }

    #[test]
    fn test_describe_tree_and_vegetable() {
        let oak = Plant::tree("Oak", 500, 1825, 50);
        let tomato = Plant::vegetable("Tomato", 80, 90, "summer", "vitamin C");
        assert_eq!(oak.describe(), "Oak: 500cm, 50cm trunk diameter");
        assert_eq!(
            tomato.describe(),
            "Tomato: 80cm, summer harvest, rich in vitamin C"
        );
    }

    #[test]
    fn test_set_height_out_of_range_keeps_value() {
        let mut plant = Plant::new("Rose", 25, 30);
        let result = plant.set_height(i64::from(u32::MAX) + 1);
        assert!(matches!(
            result,
            Err(DomainError::ValueOutOfRange { field: "height", .. })
        ));
        assert_eq!(plant.height(), 25);
    }
}
