//! Tests for Garden

use rstest::{fixture, rstest};

use gardenkit::domain::{Garden, GrowthEvent, Plant, PlantCensus, PlantTraits};

#[fixture]
fn alice_garden() -> Garden {
    let mut garden = Garden::new("Alice");
    garden.add_plant(Plant::new("Oak Tree", 100, 365));
    garden.add_plant(Plant::flowering("Rose", 25, 30, "red"));
    garden.add_plant(Plant::prize_flower("Sunflower", 50, 60, "yellow", 10));
    garden
}

#[rstest]
fn given_garden_when_adding_plants_then_order_and_count_kept(alice_garden: Garden) {
    let names: Vec<&str> = alice_garden.plants().iter().map(|p| p.name()).collect();

    assert_eq!(names, vec!["Oak Tree", "Rose", "Sunflower"]);
    assert_eq!(alice_garden.added_count(), 3);
    assert_eq!(alice_garden.owner_name(), "Alice");
}

#[test]
fn given_garden_when_adding_duplicate_names_then_both_kept() {
    let mut garden = Garden::new("Bob");

    garden.add_plant(Plant::new("Fern", 15, 120));
    garden.add_plant(Plant::new("Fern", 20, 100));

    assert_eq!(garden.len(), 2);
    assert_eq!(garden.added_count(), 2);
}

#[rstest]
fn given_garden_when_growing_all_then_events_in_insertion_order(mut alice_garden: Garden) {
    // Act
    let events = alice_garden.grow_all_plants();

    // Assert
    assert_eq!(
        events,
        vec![
            GrowthEvent { plant: "Oak Tree".into(), delta: 1 },
            GrowthEvent { plant: "Rose".into(), delta: 1 },
            GrowthEvent { plant: "Sunflower".into(), delta: 1 },
        ]
    );
    assert_eq!(alice_garden.total_growth(), 3);
    assert_eq!(alice_garden.plants()[0].height(), 101);
}

#[rstest]
fn given_garden_when_growing_twice_then_total_growth_accumulates(mut alice_garden: Garden) {
    alice_garden.grow_all_plants();
    alice_garden.grow_all_plants();

    assert_eq!(alice_garden.total_growth(), 6);
}

#[rstest]
fn given_mixed_garden_when_classifying_then_no_double_counting(alice_garden: Garden) {
    let census = alice_garden.classify_plants();

    assert_eq!(
        census,
        PlantCensus {
            regular: 1,
            flowering: 1,
            prize: 1
        }
    );
    assert_eq!(census.total(), alice_garden.len());
}

#[rstest]
fn given_mixed_garden_when_scoring_then_sum_of_contributions(alice_garden: Garden) {
    // 100 + 25 + (50 + 10)
    assert_eq!(alice_garden.calculate_score(), 185);
}

#[test]
fn given_zero_height_plant_when_validating_then_false() {
    let mut garden = Garden::new("Carol");
    garden.add_plant(Plant::new("Seed", 0, 1));

    assert!(!garden.validate_heights());
}

#[rstest]
fn given_garden_when_reporting_then_reflects_current_state(mut alice_garden: Garden) {
    // Arrange
    let before = alice_garden.generate_report();

    // Act
    alice_garden.grow_all_plants();
    alice_garden.find_plant_mut("Rose").unwrap().bloom();
    let after = alice_garden.generate_report();

    // Assert
    assert_eq!(before.total_growth, 0);
    assert_eq!(after.owner, "Alice");
    assert_eq!(after.added_count, 3);
    assert_eq!(after.total_growth, 3);
    assert!(after.heights_valid);
    assert_eq!(after.census.total(), 3);
    assert_eq!(after.plants[0], "Oak Tree: 101cm");
    assert_eq!(after.plants[1], "Rose: 26cm, red flowers (blooming)");
    assert_eq!(
        after.plants[2],
        "Sunflower: 51cm, yellow flowers (not blooming), Prize points: 10"
    );
}

#[test]
fn given_unknown_name_when_finding_plant_then_none() {
    let mut garden = Garden::new("Dave");
    assert!(garden.find_plant_mut("Orchid").is_none());
}

#[test]
fn given_plant_at_height_ceiling_when_growing_all_then_no_growth_counted() {
    // Arrange
    let mut garden = Garden::new("Alice");
    garden.add_plant(Plant::new("Giant", u32::MAX, 0));
    garden.add_plant(Plant::new("Fern", 15, 120));

    // Act
    let events = garden.grow_all_plants();

    // Assert
    assert_eq!(events[0].delta, 0);
    assert_eq!(events[1].delta, 1);
    assert_eq!(garden.plants()[0].height(), u32::MAX);
    assert_eq!(garden.total_growth(), 1);
}

#[test]
fn given_trees_and_vegetables_when_classifying_then_counted_as_regular_once() {
    // Arrange
    let mut garden = Garden::new("Bob");
    garden.add_plant(Plant::new("Maple", 80, 200));
    garden.add_plant(Plant::tree("Oak", 500, 1825, 50));
    garden.add_plant(Plant::vegetable("Tomato", 80, 90, "summer", "vitamin C"));
    garden.add_plant(Plant::flowering("Tulip", 12, 15, "purple"));
    garden.add_plant(Plant::prize_flower("Sunflower", 50, 60, "yellow", 10));

    // Act
    let census = garden.classify_plants();

    // Assert
    assert_eq!(
        census,
        PlantCensus {
            regular: 3,
            flowering: 1,
            prize: 1
        }
    );
    assert_eq!(census.total(), garden.len());
    // 80 + 500 + 80 + 12 + (50 + 10)
    assert_eq!(garden.calculate_score(), 732);
}
