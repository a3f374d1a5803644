//! Headless Bevy integration tests.
//!
//! These tests verify the plugin's resources and systems work without a GPU.

mod common;

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use orrery::plugin::{FocusedBody, Simulation, SimulationCommand, SystemGenerated};
use orrery::{ClockConfig, OrreryPlugin, SimulationClock, SystemGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn orrery_app(seed: u64) -> App {
    let mut app = common::create_minimal_app();
    app.insert_resource(Simulation(SimulationClock::new(
        SystemGenerator::new(StdRng::seed_from_u64(seed)),
        ClockConfig::default(),
    )));
    app.add_plugins(OrreryPlugin::default());
    app
}

#[test]
fn test_plugin_generates_on_startup() {
    let mut app = orrery_app(1);
    app.update();

    let sim = app.world().resource::<Simulation>();
    assert!(sim.system().is_some());
    assert!(app.world().resource::<FocusedBody>().0.is_none());

    let messages = app.world().resource::<Messages<SystemGenerated>>();
    assert_eq!(messages.len(), 1);
}

#[test]
fn test_plugin_without_preinserted_clock() {
    let mut app = common::create_minimal_app();
    app.add_plugins(OrreryPlugin::default());
    app.update();

    let sim = app.world().resource::<Simulation>();
    assert!(sim.system().is_some());
    assert_eq!(sim.config(), &ClockConfig::year_per_minute());
}

#[test]
fn test_focus_command_sets_focused_body() {
    let mut app = orrery_app(2);
    app.update();

    let star = app.world().resource::<Simulation>().system().unwrap().star_id();
    app.world_mut()
        .resource_mut::<Messages<SimulationCommand>>()
        .write(SimulationCommand::Focus(star));
    app.update();

    let focused = app.world().resource::<FocusedBody>();
    let focus = focused.0.as_ref().unwrap();
    assert_eq!(focus.info.id, star);
    assert_eq!(focus.scene_position, Vec3::ZERO);
}

#[test]
fn test_paused_simulation_does_not_advance() {
    let mut app = orrery_app(3);
    app.update();
    app.world_mut()
        .resource_mut::<Messages<SimulationCommand>>()
        .write(SimulationCommand::SetPaused(true));
    app.update();

    let before: Vec<_> = app
        .world()
        .resource::<Simulation>()
        .system()
        .unwrap()
        .bodies()
        .iter()
        .map(|b| b.angle())
        .collect();

    for _ in 0..5 {
        app.update();
    }

    let sim = app.world().resource::<Simulation>();
    let after: Vec<_> = sim.system().unwrap().bodies().iter().map(|b| b.angle()).collect();
    assert_eq!(before, after);
}

#[test]
fn test_reset_command_restores_speed() {
    let mut app = orrery_app(4);
    app.update();
    {
        let mut commands = app.world_mut().resource_mut::<Messages<SimulationCommand>>();
        commands.write(SimulationCommand::SpeedUp);
        commands.write(SimulationCommand::SpeedUp);
        commands.write(SimulationCommand::Reset);
    }
    app.update();

    let sim = app.world().resource::<Simulation>();
    assert_eq!(sim.time().scale(), 1.0);
    assert!(!sim.time().is_paused());
}
