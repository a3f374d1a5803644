//! Bevy integration: drives the simulation once per frame and applies commands.
//!
//! Presentation layers talk to the simulation only through
//! [`SimulationCommand`] messages and read it back through the
//! [`Simulation`] resource, [`FocusedBody`], and the outbound
//! [`SystemGenerated`] / [`YearChanged`] messages.

use bevy::prelude::*;

use crate::body::BodyId;
use crate::clock::{ClockConfig, Focus, SimulationClock};
use crate::system::StarSystem;

/// The running simulation.
#[derive(Resource, Deref, DerefMut, Debug)]
pub struct Simulation(pub SimulationClock);

/// Last successful focus request; cleared when the system is replaced.
#[derive(Resource, Default, Debug)]
pub struct FocusedBody(pub Option<Focus>);

/// Inbound commands from UI or input handlers.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum SimulationCommand {
    /// Build a system if none is running.
    Generate,
    /// Discard the running system and build a new one.
    Regenerate,
    /// Reset time and regenerate.
    Reset,
    /// Replace the running system with the Sol-like preset.
    LoadSolarSystem,
    SetPaused(bool),
    TogglePause,
    SpeedUp,
    SlowDown,
    Focus(BodyId),
}

/// Sent after a new system replaces the running one.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct SystemGenerated {
    pub designation: String,
    pub stamp: u32,
    pub planets: usize,
    pub moons: usize,
}

impl SystemGenerated {
    fn from_system(system: &StarSystem) -> Self {
        Self {
            designation: system.designation().to_owned(),
            stamp: system.stamp(),
            planets: system.planet_ids().len(),
            moons: system.moons().count(),
        }
    }
}

/// Sent when the one-based year counter moves.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearChanged {
    pub year: u64,
}

/// Plugin providing the simulation resource, its per-frame driver, and keyboard shortcuts.
///
/// A [`Simulation`] inserted before the plugin is kept, so tests and tools
/// can supply a seeded generator.
pub struct OrreryPlugin {
    pub clock: ClockConfig,
}

impl Default for OrreryPlugin {
    fn default() -> Self {
        Self {
            clock: ClockConfig::year_per_minute(),
        }
    }
}

impl Plugin for OrreryPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<Simulation>() {
            app.insert_resource(Simulation(SimulationClock::from_entropy(self.clock)));
        }

        app.init_resource::<FocusedBody>()
            .add_message::<SimulationCommand>()
            .add_message::<SystemGenerated>()
            .add_message::<YearChanged>()
            .add_systems(Startup, generate_initial_system)
            .add_systems(
                Update,
                (keyboard_shortcuts, apply_commands, advance_simulation).chain(),
            );
    }
}

fn generate_initial_system(
    mut sim: ResMut<Simulation>,
    mut generated: MessageWriter<SystemGenerated>,
) {
    if sim.system().is_some() {
        return;
    }
    match sim.generate() {
        Ok(system) => {
            generated.write(SystemGenerated::from_system(system));
        }
        Err(err) => error!("Failed to generate initial system: {err}"),
    }
}

/// Translate key presses into commands.
///
/// Space pauses, `[` and `]` change speed, R regenerates, L loads the
/// preset system, Backspace resets.
fn keyboard_shortcuts(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut commands: MessageWriter<SimulationCommand>,
) {
    let Some(keys) = keys else {
        return;
    };

    let bindings = [
        (KeyCode::Space, SimulationCommand::TogglePause),
        (KeyCode::BracketLeft, SimulationCommand::SlowDown),
        (KeyCode::BracketRight, SimulationCommand::SpeedUp),
        (KeyCode::KeyR, SimulationCommand::Regenerate),
        (KeyCode::KeyL, SimulationCommand::LoadSolarSystem),
        (KeyCode::Backspace, SimulationCommand::Reset),
    ];
    for (key, command) in bindings {
        if keys.just_pressed(key) {
            commands.write(command);
        }
    }
}

fn apply_commands(
    mut commands: MessageReader<SimulationCommand>,
    mut sim: ResMut<Simulation>,
    mut focused: ResMut<FocusedBody>,
    mut generated: MessageWriter<SystemGenerated>,
) {
    for command in commands.read() {
        let replaced = match *command {
            SimulationCommand::Generate if sim.system().is_some() => continue,
            SimulationCommand::Generate => sim.generate().map(SystemGenerated::from_system),
            SimulationCommand::Regenerate => sim.regenerate().map(SystemGenerated::from_system),
            SimulationCommand::Reset => sim.reset().map(SystemGenerated::from_system),
            SimulationCommand::LoadSolarSystem => {
                sim.load_solar_system().map(SystemGenerated::from_system)
            }
            SimulationCommand::SetPaused(paused) => {
                sim.set_paused(paused);
                continue;
            }
            SimulationCommand::TogglePause => {
                sim.toggle_pause();
                continue;
            }
            SimulationCommand::SpeedUp => {
                sim.speed_up();
                continue;
            }
            SimulationCommand::SlowDown => {
                sim.slow_down();
                continue;
            }
            SimulationCommand::Focus(id) => {
                match sim.focus(id) {
                    Some(focus) => {
                        info!("Focus on {} {}", focus.info.kind, focus.info.name);
                        focused.0 = Some(focus);
                    }
                    None => warn!("Focus request for unknown body {id}"),
                }
                continue;
            }
        };

        match replaced {
            Ok(message) => {
                focused.0 = None;
                generated.write(message);
            }
            Err(err) => error!("Failed to build system: {err}"),
        }
    }
}

/// Tick the clock and report the year whenever it differs from the last one reported,
/// including a fall back to year 1 after the system is replaced.
fn advance_simulation(
    time: Res<Time>,
    mut sim: ResMut<Simulation>,
    mut reported: Local<Option<u64>>,
    mut years: MessageWriter<YearChanged>,
) {
    sim.tick(time.delta_secs_f64());
    let year = sim.time().current_year();
    match *reported {
        Some(last) if last == year => {}
        Some(_) => {
            years.write(YearChanged { year });
            *reported = Some(year);
        }
        None => *reported = Some(year),
    }
}
