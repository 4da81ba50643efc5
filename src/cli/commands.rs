//! Command handlers: thin glue over the garden core

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::GardenManager;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{Plant, PlantTraits};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    if !settings.color {
        colored::control::set_override(false);
    }
    debug!("settings: {:?}", settings);

    match &cli.command {
        Some(Commands::Demo) => demo(&settings),
        Some(Commands::Network { names }) => network(&settings, names),
        Some(Commands::Factory) => factory(),
        Some(Commands::Types) => types(),
        Some(Commands::Week { days }) => week(*days),
        Some(Commands::Security { height }) => security(*height),
        Some(Commands::Tip) => {
            output::info(&settings.tip);
            Ok(())
        }
        Some(Commands::Config { command }) => config(&settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip(settings))]
fn demo(settings: &Settings) -> CliResult<()> {
    output::header("=== Garden Management System Demo ===");
    let mut manager = GardenManager::create_network(["Alice", "Bob"]);

    let mut rose = Plant::flowering("Rose", 25, 30, "red");
    rose.bloom();
    let mut sunflower = Plant::prize_flower("Sunflower", 50, 60, "yellow", 10);
    sunflower.bloom();
    for plant in [Plant::new("Oak Tree", 100, 365), rose, sunflower] {
        let name = plant.name().to_string();
        if manager.add_plant_to_garden("Alice", plant) {
            output::action("Added", &format!("{name} to Alice's garden"));
        }
    }

    let mut tulip = Plant::flowering("Tulip", 12, 15, "purple");
    tulip.bloom();
    manager.add_plant_to_garden("Bob", Plant::new("Maple", 80, 200));
    manager.add_plant_to_garden("Bob", tulip);

    let alice = manager.require_garden_mut("Alice")?;
    output::info("");
    output::info("Alice is helping all plants grow...");
    for _ in 0..settings.growth_days {
        for event in alice.grow_all_plants() {
            output::detail(&format!("{} grew {}cm", event.plant, event.delta));
        }
    }
    output::info("");
    output::info(&alice.generate_report());
    output::info("");

    let scores = manager
        .calculate_all_scores()
        .iter()
        .map(|(owner, score)| format!("{owner}: {score}"))
        .join(", ");
    output::info(&format!("Garden scores - {scores}"));
    output::info(&format!("Total gardens managed: {}", manager.total_gardens()));
    output::info("");
    output::header("=== Network Analytics ===");
    output::info(&manager.comprehensive_analytics());
    Ok(())
}

#[instrument(skip(settings))]
fn network(settings: &Settings, names: &[String]) -> CliResult<()> {
    let names = if names.is_empty() {
        settings.network.as_slice()
    } else {
        names
    };
    if names.is_empty() {
        return Err(CliError::InvalidArgs("no owner names given".into()));
    }

    let manager = GardenManager::create_network(names.iter().cloned());
    output::header(&format!(
        "=== Garden network: {} gardens ===",
        manager.total_gardens()
    ));
    for owner in manager.owners() {
        output::detail(owner);
    }
    output::info(&format!(
        "Managers created: {}",
        manager.total_managers_created()
    ));
    Ok(())
}

#[instrument]
fn factory() -> CliResult<()> {
    output::header("=== Plant Factory Output ===");
    let plants = Plant::batch([
        ("Rose", 25, 30),
        ("Oak", 200, 365),
        ("Cactus", 5, 90),
        ("Sunflower", 80, 45),
        ("Fern", 15, 120),
    ]);
    for plant in &plants {
        output::action(
            "Created",
            &format!("{} ({}cm, {} days)", plant.name(), plant.height(), plant.age()),
        );
    }
    output::info("");
    output::info(&format!("Total plants created: {}", plants.len()));
    Ok(())
}

#[instrument]
fn types() -> CliResult<()> {
    output::header("=== Garden Plant Types ===");
    let mut plants = vec![
        Plant::flowering("Rose", 25, 30, "red"),
        Plant::tree("Oak", 500, 1825, 50),
        Plant::vegetable("Tomato", 80, 90, "summer", "vitamin C"),
    ];
    for plant in &mut plants {
        output::info(&*plant);
        if plant.bloom() {
            output::detail(&format!("{} is blooming beautifully!", plant.name()));
        }
        if let Some(shade) = plant.produce_shade() {
            output::detail(&format!(
                "{} provides {} square meters of shade",
                plant.name(),
                shade
            ));
        }
        if let Some(nutrients) = plant.harvest() {
            output::detail(&format!("{} is rich in {}", plant.name(), nutrients));
        }
    }
    Ok(())
}

#[instrument]
fn week(days: u32) -> CliResult<()> {
    let mut rose = Plant::new("Rose", 25, 30);

    output::header("=== Day 1 ===");
    output::info(&format!("{}, {} days old", rose, rose.age()));

    rose.simulate_days(days);

    output::header(&format!("=== Day {} ===", u64::from(days) + 1));
    output::info(&format!("{}, {} days old", rose, rose.age()));
    output::info(&format!(
        "Growth this week: +{}cm",
        rose.growth_since_planting()
    ));
    Ok(())
}

#[instrument]
fn security(height: i64) -> CliResult<()> {
    output::header("=== Garden Security System ===");
    let mut plant = Plant::new("Rose", 25, 30);
    output::action("Plant created", plant.name());

    match plant.set_height(height) {
        Ok(()) => output::success(&format!("Height updated: {}cm", plant.height())),
        Err(e) => output::failure(&format!("Invalid operation attempted: {e}")),
    }
    output::info(&format!(
        "Current plant: {} ({}cm, {} days)",
        plant.name(),
        plant.height(),
        plant.age()
    ));
    Ok(())
}

fn config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::error("cannot determine config directory"),
        },
    }
    Ok(())
}
