//! End-to-end scenarios driven purely through commands and queries.

use hexhold_core::{CellCoord, Command, EnemyKind, Event, GateError, StructureKind, TerrainKind};
use hexhold_world::{query, scaffold, World, GATE_COOLDOWN_TICKS};

fn drive(world: &mut World, command: Command) -> Vec<Event> {
    let mut events = Vec::new();
    world.apply(command, &mut events);
    events
}

fn place(world: &mut World, kind: StructureKind, cell: CellCoord) {
    let events = drive(world, Command::PlaceStructure { kind, cell });
    assert_eq!(events, vec![Event::StructurePlaced { kind, cell }]);
}

/// Ticks until the wave ends, returning the tick count and all events seen.
fn run_wave(world: &mut World, max_ticks: u32) -> (u32, Vec<Event>) {
    let mut seen = Vec::new();
    for tick in 0..max_ticks {
        let events = drive(world, Command::Tick);
        let ended = events
            .iter()
            .any(|event| matches!(event, Event::WaveEnded { .. }));
        seen.extend(events);
        if ended {
            return (tick + 1, seen);
        }
    }
    panic!("wave did not end within {max_ticks} ticks");
}

/// Ticks until the wave ends, recording every cell the enemy roster touches.
fn run_wave_tracking_cells(world: &mut World, max_ticks: u32) -> Vec<CellCoord> {
    let mut visited = Vec::new();
    for _ in 0..max_ticks {
        let events = drive(world, Command::Tick);
        for enemy in query::enemies(world).iter() {
            visited.push(enemy.cell);
        }
        if events
            .iter()
            .any(|event| matches!(event, Event::WaveEnded { .. }))
        {
            return visited;
        }
    }
    panic!("wave did not end within {max_ticks} ticks");
}

#[test]
fn enemy_detours_around_a_wall_and_still_arrives() {
    let mut world = scaffold::open_arena(11);
    let wall = CellCoord::new(32, 31);
    place(&mut world, StructureKind::Wall, wall);
    let _ = scaffold::spawn_enemy(&mut world, EnemyKind::Normal, CellCoord::new(32, 28));

    let visited = run_wave_tracking_cells(&mut world, 300);

    assert!(visited.iter().all(|cell| *cell != wall));
    assert_eq!(query::castle_hit_points(&world), 99);
    assert!(!query::is_wave_running(&world));
}

#[test]
fn water_halves_travel_speed() {
    let mut open = scaffold::open_arena(3);
    let _ = scaffold::spawn_enemy(&mut open, EnemyKind::Normal, CellCoord::new(32, 30));
    let (open_ticks, _) = run_wave(&mut open, 200);

    let mut wet = scaffold::open_arena(3);
    scaffold::set_terrain(&mut wet, CellCoord::new(32, 30), TerrainKind::Water);
    scaffold::set_terrain(&mut wet, CellCoord::new(32, 31), TerrainKind::Water);
    let _ = scaffold::spawn_enemy(&mut wet, EnemyKind::Normal, CellCoord::new(32, 30));
    let (wet_ticks, _) = run_wave(&mut wet, 200);

    assert!(open_ticks >= 19 && open_ticks <= 22, "open: {open_ticks}");
    assert!(wet_ticks >= 35, "wet: {wet_ticks}");
}

#[test]
fn traps_slow_enemies_that_cross_them() {
    let mut plain = scaffold::open_arena(5);
    let _ = scaffold::spawn_enemy(&mut plain, EnemyKind::Normal, CellCoord::new(28, 32));
    let (plain_ticks, _) = run_wave(&mut plain, 200);

    let mut trapped = scaffold::open_arena(5);
    place(&mut trapped, StructureKind::Trap, CellCoord::new(30, 32));
    let _ = scaffold::spawn_enemy(&mut trapped, EnemyKind::Normal, CellCoord::new(28, 32));
    let (trapped_ticks, _) = run_wave(&mut trapped, 300);

    assert!(plain_ticks >= 39 && plain_ticks <= 42, "plain: {plain_ticks}");
    assert!(trapped_ticks >= 55, "trapped: {trapped_ticks}");
}

#[test]
fn undefended_waves_cost_exactly_one_hit_point_per_enemy() {
    let mut world = scaffold::open_arena(17);

    let events = drive(&mut world, Command::StartWave);
    assert_eq!(events, vec![Event::WaveStarted { wave: 1, spawned: 1 }]);
    let (_, seen) = run_wave(&mut world, 5_000);
    assert_eq!(query::castle_hit_points(&world), 99);
    assert!(seen
        .iter()
        .all(|event| !matches!(event, Event::EnemyKilled { .. })));

    let events = drive(&mut world, Command::StartWave);
    assert_eq!(events, vec![Event::WaveStarted { wave: 2, spawned: 2 }]);
    let (_, _) = run_wave(&mut world, 5_000);
    assert_eq!(query::castle_hit_points(&world), 97);
}

#[test]
fn empty_defence_wave_still_pays_the_standing_pools() {
    let mut world = scaffold::open_arena(17);
    let _ = drive(&mut world, Command::StartWave);
    let (_, seen) = run_wave(&mut world, 5_000);

    let rewards = seen
        .iter()
        .find_map(|event| match event {
            Event::WaveEnded { rewards, .. } => Some(*rewards),
            _ => None,
        })
        .expect("wave ended");
    assert_eq!(rewards.stone, 100);
    assert_eq!(rewards.wood, 80);
    assert_eq!(rewards.gold, 0);
    assert_eq!(rewards.essence, 0);

    let resources = query::resources(&world);
    assert_eq!(resources.stone(), 200);
    assert_eq!(resources.wood(), 230);
    assert_eq!(resources.gold(), 200);
}

#[test]
fn paired_towers_destroy_a_crossing_enemy() {
    let mut world = scaffold::open_arena(23);
    place(&mut world, StructureKind::Tower, CellCoord::new(28, 31));
    place(&mut world, StructureKind::Tower, CellCoord::new(28, 33));
    let id = scaffold::spawn_enemy(&mut world, EnemyKind::Normal, CellCoord::new(24, 32));

    let (_, seen) = run_wave(&mut world, 300);

    assert!(seen.contains(&Event::EnemyKilled {
        enemy: id,
        kind: EnemyKind::Normal,
    }));
    let gold = seen
        .iter()
        .find_map(|event| match event {
            Event::WaveEnded { kills, rewards, .. } => {
                assert_eq!(*kills, 1);
                Some(rewards.gold)
            }
            _ => None,
        })
        .expect("wave ended");
    assert_eq!(gold, 10);
    assert_eq!(query::castle_hit_points(&world), 100);
}

#[test]
fn walled_in_castle_leaves_the_enemy_stalled() {
    let mut world = scaffold::open_arena(29);
    for column in 31..=33u32 {
        for row in 31..=33u32 {
            let cell = CellCoord::new(column, row);
            if cell == query::castle_cell(&world) {
                continue;
            }
            place(&mut world, StructureKind::Wall, cell);
        }
    }
    let spawn = CellCoord::new(32, 28);
    let _ = scaffold::spawn_enemy(&mut world, EnemyKind::Normal, spawn);

    for _ in 0..50 {
        let _ = drive(&mut world, Command::Tick);
    }

    let enemies = query::enemies(&world);
    assert_eq!(enemies.len(), 1);
    let stalled = enemies.iter().next().expect("stalled enemy");
    assert_eq!(stalled.cell, spawn);
    assert_eq!(query::castle_hit_points(&world), 100);
    assert!(query::is_wave_running(&world));
}

#[test]
fn closed_gates_block_and_open_gates_admit() {
    let gate = CellCoord::new(32, 31);
    let build = |world: &mut World| {
        place(world, StructureKind::Wall, CellCoord::new(31, 31));
        place(world, StructureKind::Wall, CellCoord::new(33, 31));
        place(world, StructureKind::Gate, gate);
    };

    let mut closed = scaffold::open_arena(31);
    build(&mut closed);
    let _ = scaffold::spawn_enemy(&mut closed, EnemyKind::Normal, CellCoord::new(32, 28));
    let closed_path = run_wave_tracking_cells(&mut closed, 400);
    assert!(closed_path.iter().all(|cell| *cell != gate));

    let mut opened = scaffold::open_arena(31);
    build(&mut opened);
    let events = drive(&mut opened, Command::ToggleGates { open: true });
    assert_eq!(events, vec![Event::GatesToggled { open: true }]);
    let _ = scaffold::spawn_enemy(&mut opened, EnemyKind::Normal, CellCoord::new(32, 28));
    let opened_path = run_wave_tracking_cells(&mut opened, 400);
    assert!(opened_path.iter().any(|cell| *cell == gate));
    assert_eq!(query::castle_hit_points(&opened), 99);
}

#[test]
fn gate_cooldown_expires_on_the_exact_tick() {
    let mut world = scaffold::open_arena(37);
    place(&mut world, StructureKind::Gate, CellCoord::new(30, 30));

    let events = drive(&mut world, Command::ToggleGates { open: true });
    assert_eq!(events, vec![Event::GatesToggled { open: true }]);

    for _ in 0..GATE_COOLDOWN_TICKS - 1 {
        let _ = drive(&mut world, Command::Tick);
    }
    let events = drive(&mut world, Command::ToggleGates { open: false });
    assert_eq!(
        events,
        vec![Event::GateToggleRejected {
            reason: GateError::CoolingDown,
        }]
    );

    let _ = drive(&mut world, Command::Tick);
    let events = drive(&mut world, Command::ToggleGates { open: false });
    assert_eq!(events, vec![Event::GatesToggled { open: false }]);
}

#[test]
fn demolishing_and_rebuilding_nets_a_loss() {
    let mut world = scaffold::open_arena(41);
    let cell = CellCoord::new(30, 30);

    place(&mut world, StructureKind::Wall, cell);
    assert_eq!(query::resources(&world).stone(), 90);

    let events = drive(&mut world, Command::RemoveStructure { cell });
    assert_eq!(
        events,
        vec![Event::StructureRemoved {
            kind: StructureKind::Wall,
            cell
        }]
    );
    assert_eq!(query::resources(&world).stone(), 95);

    place(&mut world, StructureKind::Wall, cell);
    assert_eq!(query::resources(&world).stone(), 85);
}
