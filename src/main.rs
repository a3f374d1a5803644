//! Orrery - Procedural Star System Simulator
//!
//! Headless runner: generates a system, logs it, and reports each new
//! simulated year. Runs until interrupted.

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use std::time::Duration;

use orrery::plugin::{Simulation, SystemGenerated, YearChanged};
use orrery::OrreryPlugin;

fn main() {
    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 30.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(OrreryPlugin::default())
        .add_systems(Update, (log_generated_system, log_year))
        .run();
}

fn log_generated_system(mut generated: MessageReader<SystemGenerated>, sim: Res<Simulation>) {
    for message in generated.read() {
        info!(
            "System {} ready: {} planets, {} moons",
            message.designation, message.planets, message.moons
        );
        let Some(system) = sim.system() else {
            continue;
        };
        for id in system.all_bodies() {
            let Some(info) = system.describe(id) else {
                continue;
            };
            let class = info
                .planet_class
                .map(|c| c.name())
                .or(info.star_class.map(|c| c.name()))
                .unwrap_or("Moon");
            info!(
                "  {:<12} {:<8} {:<14} period {:>8.1} d  {}",
                info.name,
                info.kind.name(),
                class,
                info.orbital_period / 86400.0,
                info.life_status
            );
        }
    }
}

fn log_year(mut years: MessageReader<YearChanged>, sim: Res<Simulation>) {
    for message in years.read() {
        info!("Year {} ({})", message.year, sim.time().speed_label());
    }
}
