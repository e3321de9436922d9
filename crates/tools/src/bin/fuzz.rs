use std::io;
use std::ops::Range;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use dungeon::{
    Bestiary, DEFAULT_GENERATION_ATTEMPTS, GenerationConfig, Interactive, InteractiveRef, LevelMap,
    Monster, PixelPoint, audit,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive run seeds to check
    #[arg(short, long, default_value_t = 100)]
    runs: u64,
    /// Levels descended per run
    #[arg(short, long, default_value_t = 5)]
    depth: u32,
    #[arg(short, long, default_value_t = 200)]
    ticks: u32,
    #[arg(long, default_value_t = 80)]
    width: u32,
    #[arg(long, default_value_t = 60)]
    height: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> Option<T> {
    if slice.is_empty() {
        return None;
    }
    let p = rng.next_u64() as usize % slice.len();
    Some(slice[p])
}

fn play_level(map: &mut LevelMap, rng: &mut ChaCha8Rng, ticks: u32) -> Result<()> {
    let mut player = map.player_spawn();
    for tick in 0..ticks {
        // Bias the walk towards the stairs so later rooms get visited.
        let stairs = map.stairs().pos;
        let mut jitter = || (rng.next_u32() % 17) as f32 - 8.0;
        let towards = PixelPoint::new((stairs.x - player.x).signum() * 4.0, (stairs.y - player.y).signum() * 4.0);
        player = player + towards + PixelPoint::new(jitter(), jitter());

        map.move_monsters(player, &mut |monster: &mut Monster, target: PixelPoint| {
            if monster.pos.distance(target) < 64.0 {
                monster.hp -= 1;
            }
        });
        let wounded: Vec<_> = map.monsters().filter(|m| !m.is_dead() && m.hp <= 0).map(|m| m.id()).collect();
        for id in &wounded {
            ensure!(map.mark_dead(*id), "tick {tick}: monster could not be killed");
        }

        match map.update_interactive(player) {
            InteractiveRef::Chest(id) if map.chest(id).is_some_and(|c| c.interact_state().can_interact) => {
                ensure!(map.open_chest(id).is_some(), "tick {tick}: selected chest already open");
            }
            InteractiveRef::Weapon(id) if choose(rng, &[true, false]).unwrap_or(false) => {
                ensure!(map.request_pickup(id).is_some(), "tick {tick}: selected weapon already taken");
            }
            _ => {}
        }

        let queued = map.pending_drops().len();
        let report = map.sweep_transient_entities();
        ensure!(report.monsters_removed == wounded.len(), "tick {tick}: sweep missed a dead monster");
        ensure!(report.weapons_added == queued, "tick {tick}: sweep dropped queued weapons");
        ensure!(!map.monsters().any(Monster::is_dead), "tick {tick}: dead monster survived sweep");
    }
    Ok(())
}

/// `runs` consecutive seeds from `start`, cut short at `u64::MAX`.
fn seed_range(start: u64, runs: u64) -> Range<u64> {
    start..start.saturating_add(runs)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    let config = GenerationConfig::default();
    let seeds = seed_range(args.seed, args.runs);
    let last_seed = seeds.end;

    println!(
        "Starting fuzz harness on seeds {}..{} ({} levels each, {} ticks per level)...",
        args.seed,
        last_seed,
        args.depth,
        args.ticks
    );

    let mut checked = 0_u64;
    for run_seed in seeds {
        let mut rng = ChaCha8Rng::seed_from_u64(run_seed);
        for level in 1..=args.depth {
            let mut map = LevelMap::generate_retrying(
                config.clone(),
                args.width,
                args.height,
                level,
                run_seed,
                DEFAULT_GENERATION_ATTEMPTS,
            )
            .with_context(|| format!("generation failed: seed {run_seed} level {level}"))?;

            let violations = audit(map.layout(), config.room_margin);
            ensure!(violations.is_empty(), "seed {run_seed} level {level}: {violations:?}");
            ensure!(map.stairs().target_level == level.saturating_add(1), "seed {run_seed}: stairs target mismatch");

            map.populate(&mut Bestiary::default());
            play_level(&mut map, &mut rng, args.ticks)
                .with_context(|| format!("simulation failed: seed {run_seed} level {level}"))?;
            debug!(run_seed, level, events = map.events().len(), "level survived");
            checked += 1;
        }
    }

    info!(levels = checked, "fuzz run finished");
    println!("Checked {checked} levels without invariant failures.");
    Ok(())
}
