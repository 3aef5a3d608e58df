#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line driver that runs sieges and reports telemetry.

use anyhow::Result;
use clap::Parser;
use hexhold_core::{Command, Event};
use hexhold_system_analytics::Telemetry;
use hexhold_world::{query, scaffold, World};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "hexhold", about = "Headless Hexhold siege simulator")]
struct Args {
    /// Seed for terrain generation and spawns; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of waves to simulate.
    #[arg(long, default_value_t = 5)]
    waves: u32,
    /// Skip terrain generation and fight on fully open ground.
    #[arg(long)]
    flat: bool,
    /// Safety cap on ticks per wave before the run aborts.
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut world = if args.flat {
        scaffold::open_arena(seed)
    } else {
        World::with_seed(seed)
    };
    info!(seed, flat = args.flat, waves = args.waves, "session start");

    let mut telemetry = Telemetry::new();
    let mut events = Vec::new();

    'waves: for _ in 0..args.waves {
        events.clear();
        world.apply(Command::StartWave, &mut events);
        telemetry.handle(&events, &query::enemies(&world));
        for event in &events {
            if let Event::WaveStarted { wave, spawned } = event {
                info!(wave, spawned, "wave started");
            }
        }

        let mut ended = false;
        for _ in 0..args.max_ticks {
            events.clear();
            world.apply(Command::Tick, &mut events);
            telemetry.handle(&events, &query::enemies(&world));
            for event in &events {
                match event {
                    Event::CastleFell => {
                        warn!("castle fell");
                        break 'waves;
                    }
                    Event::WaveEnded {
                        wave,
                        kills,
                        elite_kills,
                        rewards,
                    } => {
                        info!(
                            wave,
                            kills,
                            elite_kills,
                            stone = rewards.stone,
                            wood = rewards.wood,
                            gold = rewards.gold,
                            essence = rewards.essence,
                            "wave ended"
                        );
                        ended = true;
                    }
                    _ => {}
                }
            }
            if ended {
                break;
            }
        }
        if !ended {
            anyhow::bail!("wave stalled after {} ticks", args.max_ticks);
        }

        if let Some(report) = telemetry.last_report() {
            match report.hotspot {
                Some(cell) => info!(
                    wave = report.wave,
                    column = cell.column(),
                    row = cell.row(),
                    "traffic hotspot"
                ),
                None => info!(wave = report.wave, "no dominant chokepoint"),
            }
        }
    }

    let resources = query::resources(&world);
    info!(
        castle = query::castle_hit_points(&world),
        stone = resources.stone(),
        wood = resources.wood(),
        gold = resources.gold(),
        essence = resources.essence(),
        "session complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::CommandFactory;

    #[test]
    fn argument_definitions_are_consistent() {
        Args::command().debug_assert();
    }
}
