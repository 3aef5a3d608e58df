#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Hexhold engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems and
//! presentation layers to react to deterministically. Systems consume event
//! streams, query immutable snapshots, and never touch world state directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of cells along each axis of the square battlefield.
pub const GRID_SIZE: u32 = 64;

/// Commands that express all permissible world mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Replaces the entire terrain classification with a fresh generation.
    GenerateTerrain,
    /// Requests placement of a structure on the provided cell.
    PlaceStructure {
        /// Kind of structure to construct.
        kind: StructureKind,
        /// Cell that would anchor the structure.
        cell: CellCoord,
    },
    /// Requests removal of whatever structure occupies the provided cell.
    RemoveStructure {
        /// Cell targeted for demolition.
        cell: CellCoord,
    },
    /// Requests that every gate switch to the provided open state.
    ToggleGates {
        /// Desired open state for all gates.
        open: bool,
    },
    /// Requests that the next wave begin spawning.
    StartWave,
    /// Advances the simulation by exactly one tick.
    Tick,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// Confirms that the terrain was regenerated from scratch.
    TerrainGenerated,
    /// Confirms that a structure was placed into the world.
    StructurePlaced {
        /// Kind of structure that was constructed.
        kind: StructureKind,
        /// Cell now occupied by the structure.
        cell: CellCoord,
    },
    /// Reports that a structure placement request was rejected.
    StructurePlacementRejected {
        /// Kind of structure requested for placement.
        kind: StructureKind,
        /// Cell provided in the placement request.
        cell: CellCoord,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Confirms that a structure was demolished and half its cost refunded.
    StructureRemoved {
        /// Kind of structure that was removed.
        kind: StructureKind,
        /// Cell the structure previously occupied.
        cell: CellCoord,
    },
    /// Reports that a structure removal request was rejected.
    StructureRemovalRejected {
        /// Cell provided in the removal request.
        cell: CellCoord,
        /// Specific reason the removal failed.
        reason: RemovalError,
    },
    /// Confirms that every gate now shares the provided open state.
    GatesToggled {
        /// Open state applied to all gates.
        open: bool,
    },
    /// Reports that a gate toggle request was rejected.
    GateToggleRejected {
        /// Specific reason the toggle failed.
        reason: GateError,
    },
    /// Announces that a new wave began and enemies were spawned.
    WaveStarted {
        /// Wave number that just started.
        wave: u32,
        /// Number of enemies spawned for the wave.
        spawned: u32,
    },
    /// Reports that a wave start request was rejected.
    WaveStartRejected {
        /// Specific reason the wave could not start.
        reason: WaveError,
    },
    /// Reports that an enemy reached the castle and dealt one hit.
    CastleDamaged {
        /// Hit points the castle retains after the hit.
        remaining: u32,
    },
    /// Announces that the castle ran out of hit points.
    CastleFell,
    /// Confirms that an enemy was destroyed by projectile damage.
    EnemyKilled {
        /// Identifier of the destroyed enemy.
        enemy: EnemyId,
        /// Kind of the destroyed enemy.
        kind: EnemyKind,
    },
    /// Announces that the live roster emptied and rewards were credited.
    WaveEnded {
        /// Wave number that just completed.
        wave: u32,
        /// Enemies destroyed by projectiles during the wave.
        kills: u32,
        /// Elite enemies destroyed during the wave.
        elite_kills: u32,
        /// Resources credited to the player for the wave.
        rewards: ResourceGrant,
    },
}

/// Reasons a structure placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The requested cell lies beyond the battlefield bounds.
    #[error("cell lies outside the battlefield")]
    OutOfBounds,
    /// The requested cell lies outside the current build zone.
    #[error("cell lies outside the build zone")]
    OutsideBuildZone,
    /// The requested cell is the castle's own cell.
    #[error("the castle occupies that cell")]
    CastleCell,
    /// The requested cell holds water or rock terrain.
    #[error("water and rock cannot be built on")]
    BlockedTerrain,
    /// The requested cell already holds a structure.
    #[error("another structure occupies that cell")]
    Occupied,
    /// The per-kind structure cap for the current wave is exhausted.
    #[error("the structure cap for this wave is exhausted")]
    CapReached,
    /// The player cannot afford the structure's cost.
    #[error("insufficient resources")]
    InsufficientFunds,
    /// Building is disabled while a wave is running.
    #[error("building is locked while a wave runs")]
    WaveRunning,
}

/// Reasons a structure removal request may be rejected by the world.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalError {
    /// The requested cell lies beyond the battlefield bounds.
    #[error("cell lies outside the battlefield")]
    OutOfBounds,
    /// No structure occupies the requested cell.
    #[error("no structure occupies that cell")]
    Vacant,
    /// Demolition is disabled while a wave is running.
    #[error("demolition is locked while a wave runs")]
    WaveRunning,
}

/// Reasons a gate toggle request may be rejected by the world.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateError {
    /// The shared gate cooldown has not yet expired.
    #[error("the gate mechanism is still cooling down")]
    CoolingDown,
}

/// Reasons a wave start request may be rejected by the world.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaveError {
    /// A wave is already running.
    #[error("a wave is already running")]
    AlreadyRunning,
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Returns the continuous point at the centre of the cell.
    #[must_use]
    pub fn center(&self) -> CellPoint {
        CellPoint::new(self.column as f32 + 0.5, self.row as f32 + 0.5)
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row)
    }

    /// Reports whether the cell lies inside the battlefield bounds.
    #[must_use]
    pub const fn in_bounds(&self) -> bool {
        self.column < GRID_SIZE && self.row < GRID_SIZE
    }
}

/// Continuous position measured in cell units.
///
/// A cell's centre sits at `cell + 0.5` on both axes, so positions freely
/// interpolate between neighbouring cells while enemies and projectiles move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPoint {
    x: f32,
    y: f32,
}

impl CellPoint {
    /// Creates a new continuous position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate in cell units.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical coordinate in cell units.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(&self, other: CellPoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Grid cell containing the position.
    ///
    /// Negative coordinates clamp to the first column or row so transient
    /// float error at the battlefield edge never produces wild indices.
    #[must_use]
    pub fn containing_cell(&self) -> CellCoord {
        let column = self.x.max(0.0) as u32;
        let row = self.y.max(0.0) as u32;
        CellCoord::new(column.min(GRID_SIZE - 1), row.min(GRID_SIZE - 1))
    }
}

/// Unique identifier assigned to an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnemyId(u32);

impl EnemyId {
    /// Creates a new enemy identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Enemy variants with distinct durability and pace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Baseline enemy spawned every wave.
    Normal,
    /// Tougher, slower variant spawned on every fifth wave.
    Elite,
}

impl EnemyKind {
    /// Hit points a freshly spawned enemy of this kind carries.
    #[must_use]
    pub const fn max_health(self) -> u32 {
        match self {
            Self::Normal => 10,
            Self::Elite => 40,
        }
    }

    /// Base movement speed in cells per tick, before slow effects.
    #[must_use]
    pub const fn base_speed(self) -> f32 {
        match self {
            Self::Normal => 0.10,
            Self::Elite => 0.06,
        }
    }

    /// Diameter of the enemy's hitbox in cell units.
    #[must_use]
    pub const fn hitbox(self) -> f32 {
        match self {
            Self::Normal => 0.6,
            Self::Elite => 0.9,
        }
    }
}

/// Structure variants the player may construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    /// Pure obstacle that blocks enemy pathfinding.
    Wall,
    /// Obstacle that blocks only while closed; toggled globally.
    Gate,
    /// Ranged attacker that fires projectiles at enemies.
    Tower,
    /// Passive hazard that slows enemies entering its cell.
    Trap,
}

impl StructureKind {
    /// Full resource cost charged when placing the structure.
    #[must_use]
    pub const fn cost(self) -> Cost {
        match self {
            Self::Wall => Cost::new(10, 0, 0),
            Self::Gate => Cost::new(10, 10, 0),
            Self::Tower => Cost::new(25, 0, 50),
            Self::Trap => Cost::new(0, 15, 5),
        }
    }

    /// Hit points carried by the structure, if it has any.
    ///
    /// Towers and traps are never attacked in the current ruleset and carry
    /// no durability.
    #[must_use]
    pub const fn hit_points(self) -> Option<u32> {
        match self {
            Self::Wall => Some(150),
            Self::Gate => Some(100),
            Self::Tower | Self::Trap => None,
        }
    }
}

/// Terrain classification assigned to every cell at map generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Plain buildable and walkable ground.
    Open,
    /// Walkable at half speed; never buildable.
    Water,
    /// Impassable and never buildable.
    Rock,
    /// Buildable after clearing; clearing refunds wood.
    Tree,
    /// Walkable and buildable; towers placed here gain extra range.
    Hill,
}

/// Resource price expressed in stone, wood, and gold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    stone: u32,
    wood: u32,
    gold: u32,
}

impl Cost {
    /// Creates a new cost with explicit per-resource amounts.
    #[must_use]
    pub const fn new(stone: u32, wood: u32, gold: u32) -> Self {
        Self { stone, wood, gold }
    }

    /// Stone component of the cost.
    #[must_use]
    pub const fn stone(&self) -> u32 {
        self.stone
    }

    /// Wood component of the cost.
    #[must_use]
    pub const fn wood(&self) -> u32 {
        self.wood
    }

    /// Gold component of the cost.
    #[must_use]
    pub const fn gold(&self) -> u32 {
        self.gold
    }

    /// Amount returned on demolition: half of each component, floored.
    #[must_use]
    pub const fn refund(&self) -> Cost {
        Cost::new(self.stone / 2, self.wood / 2, self.gold / 2)
    }
}

/// Maximum stored amount for stone, wood, and gold; essence is uncapped.
pub const STORAGE_CAP: u32 = 500;

/// Player-owned resource pool with per-resource storage caps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    stone: u32,
    wood: u32,
    gold: u32,
    essence: u32,
}

impl ResourceLedger {
    /// Creates a ledger with explicit balances.
    #[must_use]
    pub const fn new(stone: u32, wood: u32, gold: u32, essence: u32) -> Self {
        Self {
            stone,
            wood,
            gold,
            essence,
        }
    }

    /// Ledger a fresh session starts with.
    #[must_use]
    pub const fn starting() -> Self {
        Self::new(100, 150, 200, 0)
    }

    /// Current stone balance.
    #[must_use]
    pub const fn stone(&self) -> u32 {
        self.stone
    }

    /// Current wood balance.
    #[must_use]
    pub const fn wood(&self) -> u32 {
        self.wood
    }

    /// Current gold balance.
    #[must_use]
    pub const fn gold(&self) -> u32 {
        self.gold
    }

    /// Current essence balance.
    #[must_use]
    pub const fn essence(&self) -> u32 {
        self.essence
    }

    /// Reports whether the ledger covers the provided cost in full.
    #[must_use]
    pub const fn can_afford(&self, cost: &Cost) -> bool {
        self.stone >= cost.stone() && self.wood >= cost.wood() && self.gold >= cost.gold()
    }

    /// Deducts the provided cost, failing without mutation if unaffordable.
    pub fn debit(&mut self, cost: &Cost) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.stone -= cost.stone();
        self.wood -= cost.wood();
        self.gold -= cost.gold();
        true
    }

    /// Credits a cost back into the ledger, saturating at the storage caps.
    pub fn credit(&mut self, amount: &Cost) {
        self.stone = (self.stone + amount.stone()).min(STORAGE_CAP);
        self.wood = (self.wood + amount.wood()).min(STORAGE_CAP);
        self.gold = (self.gold + amount.gold()).min(STORAGE_CAP);
    }

    /// Applies a wave reward, capping stone/wood/gold but never essence.
    pub fn apply_grant(&mut self, grant: &ResourceGrant) {
        self.stone = (self.stone + grant.stone).min(STORAGE_CAP);
        self.wood = (self.wood + grant.wood).min(STORAGE_CAP);
        self.gold = (self.gold + grant.gold).min(STORAGE_CAP);
        self.essence = self.essence.saturating_add(grant.essence);
    }
}

/// Resource amounts granted to the player when a wave completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGrant {
    /// Stone awarded for the wave.
    pub stone: u32,
    /// Wood awarded for the wave.
    pub wood: u32,
    /// Gold awarded for the wave.
    pub gold: u32,
    /// Essence awarded for the wave.
    pub essence: u32,
}

/// Immutable representation of a single enemy's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemySnapshot {
    /// Unique identifier assigned to the enemy.
    pub id: EnemyId,
    /// Variant of the enemy.
    pub kind: EnemyKind,
    /// Continuous position of the enemy's centre in cell units.
    pub position: CellPoint,
    /// Grid cell currently containing the enemy.
    pub cell: CellCoord,
    /// Remaining hit points.
    pub health: u32,
    /// Hit points the enemy spawned with.
    pub max_health: u32,
    /// Ticks remaining on the trap-induced slow, zero when unaffected.
    pub slow_remaining: u32,
}

impl EnemySnapshot {
    /// Fraction of the enemy's health remaining, in `[0, 1]`.
    #[must_use]
    pub fn health_ratio(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }
}

/// Read-only snapshot describing all living enemies.
#[derive(Clone, Debug, Default)]
pub struct EnemyView {
    snapshots: Vec<EnemySnapshot>,
}

impl EnemyView {
    /// Creates a new enemy view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<EnemySnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured enemy snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &EnemySnapshot> {
        self.snapshots.iter()
    }

    /// Number of living enemies captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the live roster was empty at capture time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<EnemySnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single projectile in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileSnapshot {
    /// Continuous position of the projectile in cell units.
    pub position: CellPoint,
    /// Enemy the projectile is homing toward.
    pub target: EnemyId,
    /// Damage the projectile will deal on impact.
    pub damage: u32,
}

/// Read-only snapshot describing all projectiles in flight, in spawn order.
#[derive(Clone, Debug, Default)]
pub struct ProjectileView {
    snapshots: Vec<ProjectileSnapshot>,
}

impl ProjectileView {
    /// Creates a new projectile view preserving spawn order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<ProjectileSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the captured projectile snapshots.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectileSnapshot> {
        self.snapshots.iter()
    }

    /// Number of projectiles captured by the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether no projectiles were in flight at capture time.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Post-wave summary published by the analytics system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveReport {
    /// Wave number the report covers.
    pub wave: u32,
    /// Enemies destroyed by projectiles during the wave.
    pub kills: u32,
    /// Elite enemies destroyed during the wave.
    pub elite_kills: u32,
    /// Cell that absorbed more than 60% of enemy traffic, if any did.
    pub hotspot: Option<CellCoord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn manhattan_distance_matches_expectation() {
        let origin = CellCoord::new(1, 1);
        let destination = CellCoord::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn cell_center_offsets_by_half() {
        let center = CellCoord::new(3, 7).center();
        assert_eq!(center.x(), 3.5);
        assert_eq!(center.y(), 7.5);
    }

    #[test]
    fn containing_cell_floors_and_clamps() {
        assert_eq!(
            CellPoint::new(3.9, 7.1).containing_cell(),
            CellCoord::new(3, 7)
        );
        assert_eq!(
            CellPoint::new(-0.2, 99.0).containing_cell(),
            CellCoord::new(0, GRID_SIZE - 1)
        );
    }

    #[test]
    fn wall_refund_is_floored_half() {
        let refund = StructureKind::Wall.cost().refund();
        assert_eq!(refund, Cost::new(5, 0, 0));
    }

    #[test]
    fn trap_refund_floors_each_component_independently() {
        let refund = StructureKind::Trap.cost().refund();
        assert_eq!(refund, Cost::new(0, 7, 2));
    }

    #[test]
    fn debit_fails_without_mutation_when_unaffordable() {
        let mut ledger = ResourceLedger::new(5, 0, 0, 0);
        let before = ledger;
        assert!(!ledger.debit(&StructureKind::Wall.cost()));
        assert_eq!(ledger, before);
    }

    #[test]
    fn credit_saturates_at_storage_cap() {
        let mut ledger = ResourceLedger::new(STORAGE_CAP - 3, 0, 0, 0);
        ledger.credit(&Cost::new(10, 0, 0));
        assert_eq!(ledger.stone(), STORAGE_CAP);
    }

    #[test]
    fn grant_caps_materials_but_not_essence() {
        let mut ledger = ResourceLedger::new(STORAGE_CAP, STORAGE_CAP, STORAGE_CAP, 10);
        ledger.apply_grant(&ResourceGrant {
            stone: 100,
            wood: 80,
            gold: 50,
            essence: 7,
        });
        assert_eq!(ledger.stone(), STORAGE_CAP);
        assert_eq!(ledger.wood(), STORAGE_CAP);
        assert_eq!(ledger.gold(), STORAGE_CAP);
        assert_eq!(ledger.essence(), 17);
    }

    #[test]
    fn enemy_view_sorts_by_identifier() {
        let early = EnemySnapshot {
            id: EnemyId::new(1),
            kind: EnemyKind::Normal,
            position: CellPoint::new(0.0, 0.0),
            cell: CellCoord::new(0, 0),
            health: 10,
            max_health: 10,
            slow_remaining: 0,
        };
        let late = EnemySnapshot {
            id: EnemyId::new(4),
            kind: EnemyKind::Elite,
            position: CellPoint::new(1.0, 1.0),
            cell: CellCoord::new(1, 1),
            health: 40,
            max_health: 40,
            slow_remaining: 0,
        };
        let view = EnemyView::from_snapshots(vec![late, early]);
        let ids: Vec<u32> = view.iter().map(|snapshot| snapshot.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn health_ratio_spans_unit_interval() {
        let mut snapshot = EnemySnapshot {
            id: EnemyId::new(0),
            kind: EnemyKind::Elite,
            position: CellPoint::new(0.0, 0.0),
            cell: CellCoord::new(0, 0),
            health: 40,
            max_health: 40,
            slow_remaining: 0,
        };
        assert_eq!(snapshot.health_ratio(), 1.0);
        snapshot.health = 10;
        assert_eq!(snapshot.health_ratio(), 0.25);
    }

    #[test]
    fn cell_coord_round_trips_through_bincode() {
        assert_round_trip(&CellCoord::new(31, 62));
    }

    #[test]
    fn placement_error_round_trips_through_bincode() {
        assert_round_trip(&PlacementError::Occupied);
    }

    #[test]
    fn removal_error_round_trips_through_bincode() {
        assert_round_trip(&RemovalError::Vacant);
    }

    #[test]
    fn wave_report_round_trips_through_bincode() {
        assert_round_trip(&WaveReport {
            wave: 6,
            kills: 11,
            elite_kills: 1,
            hotspot: Some(CellCoord::new(32, 30)),
        });
    }
}
