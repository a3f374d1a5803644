//! Generate one system and print every body's description.
//!
//! Usage: `cargo run --example print_system [seed]`

use rand::SeedableRng;
use rand::rngs::StdRng;

use orrery::SystemGenerator;
use orrery::types::{METERS_TO_AU, SECONDS_PER_DAY};

fn main() {
    let mut generator = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => SystemGenerator::new(StdRng::seed_from_u64(seed)),
        None => SystemGenerator::from_entropy(),
    };

    let system = match generator.generate_star_system() {
        Ok(system) => system,
        Err(err) => {
            eprintln!("generation failed: {err}");
            std::process::exit(1);
        }
    };

    println!("{}", system.designation());
    for id in system.all_bodies() {
        let Some(info) = system.describe(id) else {
            continue;
        };
        let distance = info
            .orbit
            .map(|o| format!("{:.3} AU", o.semi_major_axis * METERS_TO_AU))
            .unwrap_or_else(|| "-".to_owned());
        let class = info
            .planet_class
            .map(|c| c.name())
            .or(info.star_class.map(|c| c.name()))
            .unwrap_or("");
        println!(
            "{:<12} {:<7} {:<18} a={:<10} T={:>9.1} d  v={:>8.0} m/s  {}{}",
            info.name,
            info.kind.name(),
            class,
            distance,
            info.orbital_period / SECONDS_PER_DAY,
            info.orbital_velocity,
            info.life_status.name(),
            if info.has_rings { ", ringed" } else { "" }
        );
        if !info.satellites.is_empty() {
            println!("{:<12} moons: {}", "", info.satellites.join(", "));
        }
    }
}
