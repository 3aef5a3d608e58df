#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative simulation state and the tick pipeline.
//!
//! The world owns every mutable piece of the battlefield: terrain, the build
//! zone, placed structures, the castle, the resource ledger, and the live
//! enemy and projectile rosters. Adapters drive it exclusively through
//! [`World::apply`] with [`Command`] values and observe the results through
//! the emitted [`Event`] batch plus the read-only [`query`] module. All
//! randomness flows through one seedable generator, so identical seeds and
//! command sequences replay identically.

use hexhold_core::{
    CellCoord, CellPoint, Command, EnemyId, EnemyKind, EnemySnapshot, EnemyView, Event,
    PlacementError, ProjectileSnapshot, ProjectileView, RemovalError, ResourceLedger,
    StructureKind, TerrainKind, WaveError, GRID_SIZE,
};
use hexhold_system_combat::{
    acquire_targets, resolve_flight, AttackerProfile, FlightOutcome, Heading,
};
use hexhold_system_economy::{compute_rewards, WaveStats};
use hexhold_system_pathfinding::StepPlanner;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

mod structures;
mod terrain;

pub use structures::StructureSnapshot;
pub use structures::GATE_COOLDOWN_TICKS;
pub use terrain::BuildZone;

/// Cell the castle permanently occupies.
pub const CASTLE_CELL: CellCoord = CellCoord::new(32, 32);
/// Hit points the castle starts with.
pub const CASTLE_HIT_POINTS: u32 = 100;
/// Ticks an enemy stays slowed after stepping onto a trap.
pub const TRAP_SLOW_TICKS: u32 = 120;

const CASTLE_RANGE: f32 = 6.0;
const CASTLE_RATE: u32 = 72;
const CASTLE_DAMAGE: u32 = 5;

const WATER_SPEED_FACTOR: f32 = 0.5;
const TRAP_SPEED_FACTOR: f32 = 0.5;
const ARRIVAL_EPSILON: f32 = 1e-3;

const WAVES_PER_ELITE: u32 = 5;
const WAVES_PER_EXPANSION: u32 = 5;

#[derive(Clone, Copy, Debug)]
struct Castle {
    cell: CellCoord,
    hit_points: u32,
    cooldown: u32,
}

#[derive(Clone, Copy, Debug)]
struct Enemy {
    id: EnemyId,
    kind: EnemyKind,
    position: CellPoint,
    health: u32,
    alive: bool,
    slow_remaining: u32,
}

impl Enemy {
    fn snapshot(&self) -> EnemySnapshot {
        EnemySnapshot {
            id: self.id,
            kind: self.kind,
            position: self.position,
            cell: self.position.containing_cell(),
            health: self.health,
            max_health: self.kind.max_health(),
            slow_remaining: self.slow_remaining,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Projectile {
    position: CellPoint,
    heading: Heading,
    target: EnemyId,
    damage: u32,
}

/// Authoritative simulation state driven exclusively by commands.
#[derive(Clone, Debug)]
pub struct World {
    terrain: terrain::TerrainGrid,
    build_zone: BuildZone,
    structures: structures::StructureRegistry,
    castle: Castle,
    resources: ResourceLedger,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    wave: u32,
    running: bool,
    kills: u32,
    elite_kills: u32,
    next_enemy_id: u32,
    rng: ChaCha8Rng,
    planner: StepPlanner,
}

impl World {
    /// Creates a world with freshly generated terrain from an OS-seeded
    /// generator.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_entropy())
    }

    /// Creates a world whose terrain and spawns replay exactly per seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: ChaCha8Rng) -> Self {
        let build_zone = BuildZone::initial();
        let terrain = terrain::TerrainGrid::generate(&mut rng, &build_zone);
        Self {
            terrain,
            build_zone,
            structures: structures::StructureRegistry::new(),
            castle: Castle {
                cell: CASTLE_CELL,
                hit_points: CASTLE_HIT_POINTS,
                cooldown: 0,
            },
            resources: ResourceLedger::starting(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            wave: 0,
            running: false,
            kills: 0,
            elite_kills: 0,
            next_enemy_id: 0,
            rng,
            planner: StepPlanner::new(GRID_SIZE, GRID_SIZE),
        }
    }

    /// Executes one command, appending the resulting events to `out_events`.
    pub fn apply(&mut self, command: Command, out_events: &mut Vec<Event>) {
        match command {
            Command::GenerateTerrain => {
                self.terrain = terrain::TerrainGrid::generate(&mut self.rng, &self.build_zone);
                out_events.push(Event::TerrainGenerated);
            }
            Command::PlaceStructure { kind, cell } => {
                if self.running {
                    out_events.push(Event::StructurePlacementRejected {
                        kind,
                        cell,
                        reason: PlacementError::WaveRunning,
                    });
                    return;
                }
                match self.structures.place(
                    kind,
                    cell,
                    self.wave,
                    &self.build_zone,
                    self.castle.cell,
                    &mut self.terrain,
                    &mut self.resources,
                ) {
                    Ok(()) => out_events.push(Event::StructurePlaced { kind, cell }),
                    Err(reason) => {
                        out_events.push(Event::StructurePlacementRejected { kind, cell, reason });
                    }
                }
            }
            Command::RemoveStructure { cell } => {
                if self.running {
                    out_events.push(Event::StructureRemovalRejected {
                        cell,
                        reason: RemovalError::WaveRunning,
                    });
                    return;
                }
                match self.structures.remove(cell, &mut self.resources) {
                    Ok(kind) => out_events.push(Event::StructureRemoved { kind, cell }),
                    Err(reason) => {
                        out_events.push(Event::StructureRemovalRejected { cell, reason });
                    }
                }
            }
            Command::ToggleGates { open } => match self.structures.set_gates(open) {
                Ok(()) => out_events.push(Event::GatesToggled { open }),
                Err(reason) => out_events.push(Event::GateToggleRejected { reason }),
            },
            Command::StartWave => self.start_wave(out_events),
            Command::Tick => self.tick(out_events),
        }
    }

    fn start_wave(&mut self, out_events: &mut Vec<Event>) {
        if self.running {
            out_events.push(Event::WaveStartRejected {
                reason: WaveError::AlreadyRunning,
            });
            return;
        }

        self.wave += 1;
        if self.wave % WAVES_PER_EXPANSION == 0 {
            self.build_zone.expand();
        }
        self.kills = 0;
        self.elite_kills = 0;

        let mut spawned = 0;
        for _ in 0..self.wave {
            self.spawn_edge_enemy(EnemyKind::Normal);
            spawned += 1;
        }
        if self.wave % WAVES_PER_ELITE == 0 {
            self.spawn_edge_enemy(EnemyKind::Elite);
            spawned += 1;
        }

        self.running = true;
        out_events.push(Event::WaveStarted {
            wave: self.wave,
            spawned,
        });
    }

    fn spawn_edge_enemy(&mut self, kind: EnemyKind) {
        let offset = self.rng.gen_range(0..GRID_SIZE);
        let cell = match self.rng.gen_range(0..4u8) {
            0 => CellCoord::new(offset, 0),
            1 => CellCoord::new(offset, GRID_SIZE - 1),
            2 => CellCoord::new(0, offset),
            _ => CellCoord::new(GRID_SIZE - 1, offset),
        };
        let _ = self.push_enemy(kind, cell);
    }

    fn push_enemy(&mut self, kind: EnemyKind, cell: CellCoord) -> EnemyId {
        let id = EnemyId::new(self.next_enemy_id);
        self.next_enemy_id += 1;
        self.enemies.push(Enemy {
            id,
            kind,
            position: cell.center(),
            health: kind.max_health(),
            alive: true,
            slow_remaining: 0,
        });
        id
    }

    /// One simulation tick: movement, hazards, targeting, projectile flight,
    /// cooldown decay, roster compaction, and the wave-end check, in that
    /// fixed order.
    fn tick(&mut self, out_events: &mut Vec<Event>) {
        self.advance_enemies(out_events);
        self.apply_trap_slows();
        self.resolve_attacks();
        self.advance_projectiles(out_events);
        self.decay_cooldowns();
        self.enemies.retain(|enemy| enemy.alive);
        self.finish_wave_if_clear(out_events);
    }

    fn advance_enemies(&mut self, out_events: &mut Vec<Event>) {
        let World {
            planner,
            enemies,
            structures,
            terrain,
            castle,
            ..
        } = self;
        let castle_cell = castle.cell;
        let castle_center = castle_cell.center();

        for enemy in enemies.iter_mut() {
            if !enemy.alive {
                continue;
            }
            if enemy.slow_remaining > 0 {
                enemy.slow_remaining -= 1;
            }

            let cell = enemy.position.containing_cell();
            let plan = planner.plan_step(cell, castle_cell, |probe| {
                terrain.kind(probe) == TerrainKind::Rock || structures.blocks(probe)
            });
            // Unreachable castle stalls the enemy; it replans next tick.
            let Some(plan) = plan else { continue };

            let mut speed = enemy.kind.base_speed();
            if terrain.kind(cell) == TerrainKind::Water {
                speed *= WATER_SPEED_FACTOR;
            }
            if enemy.slow_remaining > 0 {
                speed *= TRAP_SPEED_FACTOR;
            }

            let target = plan.next_cell.center();
            let distance = enemy.position.distance_to(target);
            if distance <= speed {
                enemy.position = target;
            } else {
                let step = speed / distance;
                enemy.position = CellPoint::new(
                    enemy.position.x() + (target.x() - enemy.position.x()) * step,
                    enemy.position.y() + (target.y() - enemy.position.y()) * step,
                );
            }

            if plan.next_cell == castle_cell
                && enemy.position.distance_to(castle_center) <= ARRIVAL_EPSILON
            {
                enemy.alive = false;
                if castle.hit_points > 0 {
                    castle.hit_points -= 1;
                    out_events.push(Event::CastleDamaged {
                        remaining: castle.hit_points,
                    });
                    if castle.hit_points == 0 {
                        out_events.push(Event::CastleFell);
                    }
                }
            }
        }
    }

    fn apply_trap_slows(&mut self) {
        for enemy in self.enemies.iter_mut() {
            if !enemy.alive {
                continue;
            }
            if self.structures.trap_at(enemy.position.containing_cell()) {
                enemy.slow_remaining = TRAP_SLOW_TICKS;
            }
        }
    }

    fn resolve_attacks(&mut self) {
        let roster: Vec<EnemySnapshot> = self
            .enemies
            .iter()
            .filter(|enemy| enemy.alive)
            .map(Enemy::snapshot)
            .collect();
        if roster.is_empty() {
            return;
        }

        let mut profiles = Vec::new();
        let mut origins = Vec::new();
        profiles.push(AttackerProfile {
            center: self.castle.cell.center(),
            range: CASTLE_RANGE,
            damage: CASTLE_DAMAGE,
            ready: self.castle.cooldown == 0,
        });
        origins.push(None);
        for (cell, tower) in self.structures.towers() {
            profiles.push(AttackerProfile {
                center: cell.center(),
                range: tower.range,
                damage: tower.damage,
                ready: tower.cooldown == 0,
            });
            origins.push(Some(cell));
        }

        let mut shots = Vec::new();
        acquire_targets(&profiles, &roster, &mut shots);

        for shot in shots {
            match origins[shot.attacker] {
                None => self.castle.cooldown = CASTLE_RATE,
                Some(cell) => {
                    if let Some(tower) = self.structures.tower_mut(cell) {
                        tower.cooldown = tower.rate;
                    }
                }
            }
            self.projectiles.push(Projectile {
                position: shot.origin,
                heading: shot.heading,
                target: shot.target,
                damage: shot.damage,
            });
        }
    }

    fn advance_projectiles(&mut self, out_events: &mut Vec<Event>) {
        let World {
            projectiles,
            enemies,
            kills,
            elite_kills,
            ..
        } = self;

        projectiles.retain_mut(|projectile| {
            projectile.position = projectile.heading.advance(projectile.position);

            let target = enemies
                .iter_mut()
                .find(|enemy| enemy.id == projectile.target && enemy.alive);
            let Some(enemy) = target else {
                return false;
            };

            match resolve_flight(projectile.position, Some(&enemy.snapshot())) {
                FlightOutcome::InFlight => true,
                FlightOutcome::TargetGone => false,
                FlightOutcome::Impact => {
                    enemy.health = enemy.health.saturating_sub(projectile.damage);
                    if enemy.health == 0 {
                        enemy.alive = false;
                        *kills += 1;
                        if enemy.kind == EnemyKind::Elite {
                            *elite_kills += 1;
                        }
                        out_events.push(Event::EnemyKilled {
                            enemy: enemy.id,
                            kind: enemy.kind,
                        });
                    }
                    false
                }
            }
        });
    }

    fn decay_cooldowns(&mut self) {
        self.castle.cooldown = self.castle.cooldown.saturating_sub(1);
        for (_, tower) in self.structures.towers_mut() {
            tower.cooldown = tower.cooldown.saturating_sub(1);
        }
        self.structures.tick_gate_cooldown();
    }

    fn finish_wave_if_clear(&mut self, out_events: &mut Vec<Event>) {
        if !self.running || !self.enemies.is_empty() {
            return;
        }
        self.running = false;

        let walls = self.structures.count(StructureKind::Wall);
        let rewards = compute_rewards(&WaveStats {
            kills: self.kills,
            elite_kills: self.elite_kills,
            walls_intact: walls,
            walls_total: walls,
            wall_damage_percent: 0.0,
        });
        self.resources.apply_grant(&rewards);

        out_events.push(Event::WaveEnded {
            wave: self.wave,
            kills: self.kills,
            elite_kills: self.elite_kills,
            rewards,
        });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only views over world state for adapters and systems.
pub mod query {
    use super::{
        structures::StructureSnapshot, BuildZone, CellCoord, EnemySnapshot, EnemyView,
        ProjectileSnapshot, ProjectileView, ResourceLedger, StructureKind, TerrainKind, World,
    };

    /// Read-only description of one tower's firing state.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct TowerSnapshot {
        /// Cell the tower occupies.
        pub cell: CellCoord,
        /// Upgrade level of the tower.
        pub level: u32,
        /// Targeting radius in cell units, including any hill bonus.
        pub range: f32,
        /// Ticks between consecutive shots.
        pub rate: u32,
        /// Ticks until the tower may fire again.
        pub cooldown: u32,
        /// Damage carried by each projectile.
        pub damage: u32,
    }

    /// Hit points the castle currently retains.
    #[must_use]
    pub fn castle_hit_points(world: &World) -> u32 {
        world.castle.hit_points
    }

    /// Cell the castle occupies.
    #[must_use]
    pub fn castle_cell(world: &World) -> CellCoord {
        world.castle.cell
    }

    /// Current balances of the player's resource ledger.
    #[must_use]
    pub fn resources(world: &World) -> ResourceLedger {
        world.resources
    }

    /// Number of the most recently started wave; zero before the first.
    #[must_use]
    pub fn wave(world: &World) -> u32 {
        world.wave
    }

    /// Reports whether a wave is currently running.
    #[must_use]
    pub fn is_wave_running(world: &World) -> bool {
        world.running
    }

    /// Snapshot of every living enemy, ordered by identifier.
    #[must_use]
    pub fn enemies(world: &World) -> EnemyView {
        let snapshots: Vec<EnemySnapshot> = world
            .enemies
            .iter()
            .filter(|enemy| enemy.alive)
            .map(super::Enemy::snapshot)
            .collect();
        EnemyView::from_snapshots(snapshots)
    }

    /// Snapshot of every projectile in flight, in spawn order.
    #[must_use]
    pub fn projectiles(world: &World) -> ProjectileView {
        let snapshots: Vec<ProjectileSnapshot> = world
            .projectiles
            .iter()
            .map(|projectile| ProjectileSnapshot {
                position: projectile.position,
                target: projectile.target,
                damage: projectile.damage,
            })
            .collect();
        ProjectileView::from_snapshots(snapshots)
    }

    /// Terrain classification of the cell; out-of-bounds reads as rock.
    #[must_use]
    pub fn terrain_kind(world: &World, cell: CellCoord) -> TerrainKind {
        world.terrain.kind(cell)
    }

    /// Current extent of the buildable zone.
    #[must_use]
    pub fn build_zone(world: &World) -> BuildZone {
        world.build_zone
    }

    /// Reports whether the cell blocks enemy pathfinding.
    #[must_use]
    pub fn is_blocking(world: &World, cell: CellCoord) -> bool {
        world.terrain.kind(cell) == TerrainKind::Rock || world.structures.blocks(cell)
    }

    /// Reports whether a structure occupies the cell.
    #[must_use]
    pub fn is_occupied(world: &World, cell: CellCoord) -> bool {
        world.structures.is_occupied(cell)
    }

    /// Kind of the structure on the cell, if any.
    #[must_use]
    pub fn structure_at(world: &World, cell: CellCoord) -> Option<StructureKind> {
        world.structures.kind_at(cell)
    }

    /// Snapshots of every placed structure in cell order.
    #[must_use]
    pub fn structures(world: &World) -> Vec<StructureSnapshot> {
        world.structures.snapshots().collect()
    }

    /// Number of placed structures of the given kind.
    #[must_use]
    pub fn structure_count(world: &World, kind: StructureKind) -> u32 {
        world.structures.count(kind)
    }

    /// Ticks remaining on the shared gate cooldown.
    #[must_use]
    pub fn gate_cooldown(world: &World) -> u32 {
        world.structures.gate_cooldown()
    }

    /// Snapshots of every tower in cell order.
    #[must_use]
    pub fn towers(world: &World) -> Vec<TowerSnapshot> {
        world
            .structures
            .towers()
            .map(|(cell, tower)| TowerSnapshot {
                cell,
                level: tower.level,
                range: tower.range,
                rate: tower.rate,
                cooldown: tower.cooldown,
                damage: tower.damage,
            })
            .collect()
    }
}

/// Deterministic scenario construction for tests and headless drivers.
///
/// Generated terrain is random by design, which makes path-sensitive
/// scenarios awkward to stage. These helpers bypass generation with a fully
/// open arena and let callers sculpt exact terrain and rosters.
pub mod scaffold {
    use super::{terrain, CellCoord, EnemyId, EnemyKind, TerrainKind, World};

    /// Creates a seeded world whose terrain is entirely open ground.
    #[must_use]
    pub fn open_arena(seed: u64) -> World {
        let mut world = World::with_seed(seed);
        world.terrain = terrain::TerrainGrid::flat();
        world
    }

    /// Overwrites the terrain kind of a single cell.
    pub fn set_terrain(world: &mut World, cell: CellCoord, kind: TerrainKind) {
        world.terrain.set_kind(cell, kind);
    }

    /// Injects a living enemy at the centre of `cell` and marks the wave as
    /// running so wave-end bookkeeping fires once the roster clears.
    pub fn spawn_enemy(world: &mut World, kind: EnemyKind, cell: CellCoord) -> EnemyId {
        world.running = true;
        world.push_enemy(kind, cell)
    }
}
