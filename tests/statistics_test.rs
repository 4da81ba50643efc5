//! Tests for the stateless statistics helpers

use approx::assert_relative_eq;
use rstest::{fixture, rstest};

use gardenkit::domain::statistics::{
    average_garden_height, average_height, count_blooming, tallest_plant, total_plants,
    total_prize_points,
};
use gardenkit::domain::{Garden, Plant, PlantTraits};

#[fixture]
fn mixed_plants() -> Vec<Plant> {
    let mut rose = Plant::flowering("Rose", 25, 30, "red");
    rose.bloom();
    let mut sunflower = Plant::prize_flower("Sunflower", 50, 60, "yellow", 10);
    sunflower.bloom();
    vec![Plant::new("Oak Tree", 100, 365), rose, sunflower]
}

#[test]
fn given_empty_sequence_then_defined_results() {
    let plants: Vec<Plant> = Vec::new();

    assert_eq!(average_height(&plants), 0.0);
    assert!(tallest_plant(&plants).is_none());
    assert_eq!(count_blooming(&plants), 0);
    assert_eq!(total_prize_points(&plants), 0);
}

#[rstest]
fn given_mixed_plants_then_average_height_is_mean(mixed_plants: Vec<Plant>) {
    assert_relative_eq!(average_height(&mixed_plants), 175.0 / 3.0);
}

#[rstest]
fn given_mixed_plants_then_tallest_is_oak(mixed_plants: Vec<Plant>) {
    let tallest = tallest_plant(&mixed_plants).unwrap();
    assert_eq!(tallest.name(), "Oak Tree");
}

#[test]
fn given_tie_when_finding_tallest_then_first_occurrence_wins() {
    let plants = vec![
        Plant::new("First", 80, 1),
        Plant::new("Short", 10, 1),
        Plant::new("Second", 80, 1),
    ];

    let tallest = tallest_plant(&plants).unwrap();

    assert_eq!(tallest.name(), "First");
}

#[rstest]
fn given_mixed_plants_then_counts_blooming_flowers_only(mixed_plants: Vec<Plant>) {
    assert_eq!(count_blooming(&mixed_plants), 2);
}

#[test]
fn given_unbloomed_flowers_then_blooming_count_zero() {
    let plants = vec![
        Plant::flowering("Tulip", 12, 15, "purple"),
        Plant::prize_flower("Dahlia", 40, 50, "orange", 3),
    ];

    assert_eq!(count_blooming(&plants), 0);
}

#[rstest]
fn given_mixed_plants_then_prize_points_from_prize_flowers(mixed_plants: Vec<Plant>) {
    assert_eq!(total_prize_points(&mixed_plants), 10);
}

#[test]
fn given_no_prize_flowers_then_zero_prize_points() {
    let plants = vec![Plant::new("Maple", 80, 200), Plant::flowering("Tulip", 12, 15, "purple")];
    assert_eq!(total_prize_points(&plants), 0);
}

#[rstest]
fn given_borrowed_references_then_statistics_still_apply(mixed_plants: Vec<Plant>) {
    // Statistics accept any iterator of references, e.g. a filtered view
    let flowers = mixed_plants.iter().filter(|p| p.is_blooming().is_some());

    assert_relative_eq!(average_height(flowers), 37.5);
}

#[test]
fn given_gardens_then_total_plants_and_average_garden_height() {
    // Arrange
    let mut alice = Garden::new("Alice");
    alice.add_plant(Plant::new("Oak Tree", 100, 365));
    alice.add_plant(Plant::flowering("Rose", 25, 30, "red"));
    let mut bob = Garden::new("Bob");
    bob.add_plant(Plant::new("Maple", 80, 200));
    let empty = Garden::new("Carol");
    let gardens = vec![alice, bob, empty];

    // Act / Assert
    assert_eq!(total_plants(&gardens), 3);
    // (125 + 80) / 2, the empty garden is ignored
    assert_relative_eq!(average_garden_height(&gardens), 102.5);
}

#[test]
fn given_only_empty_gardens_then_average_garden_height_zero() {
    let gardens = vec![Garden::new("Alice")];
    assert_eq!(average_garden_height(&gardens), 0.0);
}
