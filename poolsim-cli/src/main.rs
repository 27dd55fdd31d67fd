use clap::{Parser, Subcommand};
use glam::Vec2;
use poolsim_core::{Body, CollisionSound, SimConfig, Simulation, CUE_BALL};
use std::fs;
use std::path::PathBuf;

mod table_app;

#[derive(Parser)]
#[command(name = "poolsim")]
#[command(about = "Pool table rigid-body simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive table
    Play {
        /// JSON configuration file, watched for live edits
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run one scripted shot headless and print diagnostics
    Shoot {
        /// Drag direction x component
        #[arg(long, default_value_t = 1.0)]
        dx: f32,
        /// Drag direction y component
        #[arg(long, default_value_t = 0.0)]
        dy: f32,
        /// Drag length in table units (clamped like a real drag)
        #[arg(long, default_value_t = 80.0)]
        power: f32,
        /// Frame cap for the run
        #[arg(long, default_value_t = 3600)]
        frames: u32,
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { config } => table_app::run(config),
        Commands::Shoot {
            dx,
            dy,
            power,
            frames,
            config,
        } => run_shot(dx, dy, power, frames, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load a configuration file, or fall back to the built-in table
fn load_config(path: Option<&PathBuf>) -> Result<SimConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(SimConfig::default()),
    }
}

/// Counts contact events the physics emits during a headless run
#[derive(Default)]
struct ContactCounter {
    contacts: u32,
    peak_volume: f32,
}

impl CollisionSound for ContactCounter {
    fn play(&mut self, volume: f32) {
        self.contacts += 1;
        if volume > self.peak_volume {
            self.peak_volume = volume;
        }
    }
}

fn run_shot(
    dx: f32,
    dy: f32,
    power: f32,
    frames: u32,
    config: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config.as_ref())?;
    let mut sim = Simulation::new(config)?;

    let direction = Vec2::new(dx, dy);
    if direction.length() == 0.0 {
        return Err("shot direction must be non-zero".into());
    }
    if !sim.queue_strike(direction.normalize() * power) {
        return Err("strike rejected by turn gating".into());
    }

    let mut sound = ContactCounter::default();
    let mut peak_energy = 0.0f32;
    let mut steps = 0u32;
    while steps < frames {
        sim.step(&mut sound);
        steps += 1;
        let energy = total_kinetic_energy(sim.bodies());
        if energy > peak_energy {
            peak_energy = energy;
        }
        if sim.all_at_rest() {
            break;
        }
    }

    println!("frames simulated:     {}", steps);
    println!(
        "contacts heard:       {} (peak volume {:.2})",
        sound.contacts, sound.peak_volume
    );
    println!("peak kinetic energy:  {:.3}", peak_energy);
    println!(
        "final kinetic energy: {:.3}",
        total_kinetic_energy(sim.bodies())
    );
    for (i, body) in sim.bodies().iter().enumerate() {
        let name = if i == CUE_BALL {
            "cue ball".to_string()
        } else {
            format!("ball {}", i)
        };
        if body.pocketed {
            println!("{}: pocketed", name);
        } else {
            println!(
                "{}: pos ({:.1}, {:.1}), speed {:.3}",
                name, body.position.x, body.position.y, body.speed
            );
        }
    }
    if sim.game_over() {
        println!("game over");
    }
    Ok(())
}

fn total_kinetic_energy(bodies: &[Body]) -> f32 {
    bodies.iter().map(|b| b.kinetic_energy()).sum()
}
