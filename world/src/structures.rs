//! Structure registry: placement legality, demolition refunds, and gates.

use std::collections::BTreeMap;

use hexhold_core::{
    CellCoord, Cost, GateError, PlacementError, RemovalError, ResourceLedger, StructureKind,
    TerrainKind,
};

use crate::terrain::{BuildZone, TerrainGrid};

/// Ticks all gates stay locked after a toggle.
pub const GATE_COOLDOWN_TICKS: u32 = 600;

/// Base targeting radius of a tower, in cell units.
pub(crate) const TOWER_RANGE: f32 = 4.0;
/// Extra targeting radius granted to towers standing on a hill.
pub(crate) const TOWER_HILL_BONUS: f32 = 1.0;
/// Ticks between consecutive tower shots.
pub(crate) const TOWER_RATE: u32 = 72;
/// Damage carried by each tower projectile.
pub(crate) const TOWER_DAMAGE: u32 = 5;

const WALL_CAP_BASE: u32 = 40;
const WALL_CAP_PER_WAVE: u32 = 10;
const TOWER_CAP_BASE: u32 = 5;
const TOWER_CAP_PER_WAVE: u32 = 1;

const TREE_CLEAR_WOOD: Cost = Cost::new(0, 5, 0);

/// Read-only description of one placed structure, for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StructureSnapshot {
    /// Cell the structure occupies.
    pub cell: CellCoord,
    /// Kind of the structure.
    pub kind: StructureKind,
    /// Remaining durability, present for walls and gates.
    pub hit_points: Option<u32>,
    /// Open state, present for gates.
    pub open: Option<bool>,
}

/// Mutable firing state of a single tower.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TowerState {
    pub(crate) level: u32,
    pub(crate) range: f32,
    pub(crate) rate: u32,
    pub(crate) cooldown: u32,
    pub(crate) damage: u32,
}

/// Per-kind state stored for each placed structure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum StructureState {
    Wall { hit_points: u32 },
    Gate { hit_points: u32, open: bool },
    Tower(TowerState),
    Trap,
}

impl StructureState {
    pub(crate) fn kind(&self) -> StructureKind {
        match self {
            Self::Wall { .. } => StructureKind::Wall,
            Self::Gate { .. } => StructureKind::Gate,
            Self::Tower(_) => StructureKind::Tower,
            Self::Trap => StructureKind::Trap,
        }
    }
}

/// All player-built structures, keyed by the cell each one occupies.
///
/// The backing map is ordered, so every iteration (tower firing order
/// included) is deterministic across runs.
#[derive(Clone, Debug, Default)]
pub(crate) struct StructureRegistry {
    entries: BTreeMap<CellCoord, StructureState>,
    gate_cooldown: u32,
}

impl StructureRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Validates and executes a placement request.
    ///
    /// Checks run in a fixed order so the reported rejection reason is
    /// stable: bounds, build zone, castle cell, terrain, occupancy, the
    /// per-kind cap, then affordability. A tree on the cell is felled as
    /// part of construction and its wood credited before the cost is
    /// debited.
    pub(crate) fn place(
        &mut self,
        kind: StructureKind,
        cell: CellCoord,
        wave: u32,
        zone: &BuildZone,
        castle: CellCoord,
        terrain: &mut TerrainGrid,
        ledger: &mut ResourceLedger,
    ) -> Result<(), PlacementError> {
        if !cell.in_bounds() {
            return Err(PlacementError::OutOfBounds);
        }
        if !zone.contains(cell) {
            return Err(PlacementError::OutsideBuildZone);
        }
        if cell == castle {
            return Err(PlacementError::CastleCell);
        }
        if matches!(terrain.kind(cell), TerrainKind::Water | TerrainKind::Rock) {
            return Err(PlacementError::BlockedTerrain);
        }
        if self.entries.contains_key(&cell) {
            return Err(PlacementError::Occupied);
        }
        if let Some(cap) = cap_for(kind, wave) {
            if self.count(kind) >= cap {
                return Err(PlacementError::CapReached);
            }
        }
        if !ledger.can_afford(&kind.cost()) {
            return Err(PlacementError::InsufficientFunds);
        }

        if terrain.clear_tree(cell) {
            ledger.credit(&TREE_CLEAR_WOOD);
        }
        let _ = ledger.debit(&kind.cost());

        let on_hill = terrain.kind(cell) == TerrainKind::Hill;
        let _ = self.entries.insert(cell, initial_state(kind, on_hill));
        Ok(())
    }

    /// Demolishes the structure on the cell, crediting half its cost back.
    pub(crate) fn remove(
        &mut self,
        cell: CellCoord,
        ledger: &mut ResourceLedger,
    ) -> Result<StructureKind, RemovalError> {
        if !cell.in_bounds() {
            return Err(RemovalError::OutOfBounds);
        }
        let Some(state) = self.entries.remove(&cell) else {
            return Err(RemovalError::Vacant);
        };
        let kind = state.kind();
        ledger.credit(&kind.cost().refund());
        Ok(kind)
    }

    /// Switches every gate to the provided open state and arms the shared
    /// cooldown.
    pub(crate) fn set_gates(&mut self, open: bool) -> Result<(), GateError> {
        if self.gate_cooldown > 0 {
            return Err(GateError::CoolingDown);
        }
        for state in self.entries.values_mut() {
            if let StructureState::Gate { open: gate_open, .. } = state {
                *gate_open = open;
            }
        }
        self.gate_cooldown = GATE_COOLDOWN_TICKS;
        Ok(())
    }

    pub(crate) fn tick_gate_cooldown(&mut self) {
        self.gate_cooldown = self.gate_cooldown.saturating_sub(1);
    }

    pub(crate) fn gate_cooldown(&self) -> u32 {
        self.gate_cooldown
    }

    /// Reports whether the cell blocks enemy pathfinding.
    ///
    /// Walls always block; gates block only while closed; towers and traps
    /// never block.
    pub(crate) fn blocks(&self, cell: CellCoord) -> bool {
        match self.entries.get(&cell) {
            Some(StructureState::Wall { .. }) => true,
            Some(StructureState::Gate { open, .. }) => !open,
            _ => false,
        }
    }

    pub(crate) fn is_occupied(&self, cell: CellCoord) -> bool {
        self.entries.contains_key(&cell)
    }

    pub(crate) fn kind_at(&self, cell: CellCoord) -> Option<StructureKind> {
        self.entries.get(&cell).map(StructureState::kind)
    }

    pub(crate) fn trap_at(&self, cell: CellCoord) -> bool {
        matches!(self.entries.get(&cell), Some(StructureState::Trap))
    }

    pub(crate) fn count(&self, kind: StructureKind) -> u32 {
        self.entries
            .values()
            .filter(|state| state.kind() == kind)
            .count() as u32
    }

    /// Towers in cell order, read-only.
    pub(crate) fn towers(&self) -> impl Iterator<Item = (CellCoord, &'_ TowerState)> + '_ {
        self.entries.iter().filter_map(|(cell, state)| match state {
            StructureState::Tower(tower) => Some((*cell, tower)),
            _ => None,
        })
    }

    /// Towers in cell order, mutable.
    pub(crate) fn towers_mut(
        &mut self,
    ) -> impl Iterator<Item = (CellCoord, &'_ mut TowerState)> + '_ {
        self.entries.iter_mut().filter_map(|(cell, state)| match state {
            StructureState::Tower(tower) => Some((*cell, tower)),
            _ => None,
        })
    }

    /// Snapshots of every placed structure in cell order.
    pub(crate) fn snapshots(&self) -> impl Iterator<Item = StructureSnapshot> + '_ {
        self.entries.iter().map(|(cell, state)| {
            let (hit_points, open) = match state {
                StructureState::Wall { hit_points } => (Some(*hit_points), None),
                StructureState::Gate { hit_points, open } => (Some(*hit_points), Some(*open)),
                StructureState::Tower(_) | StructureState::Trap => (None, None),
            };
            StructureSnapshot {
                cell: *cell,
                kind: state.kind(),
                hit_points,
                open,
            }
        })
    }

    pub(crate) fn tower_mut(&mut self, cell: CellCoord) -> Option<&mut TowerState> {
        match self.entries.get_mut(&cell) {
            Some(StructureState::Tower(tower)) => Some(tower),
            _ => None,
        }
    }
}

fn cap_for(kind: StructureKind, wave: u32) -> Option<u32> {
    match kind {
        StructureKind::Wall => Some(WALL_CAP_BASE + WALL_CAP_PER_WAVE * wave),
        StructureKind::Tower => Some(TOWER_CAP_BASE + TOWER_CAP_PER_WAVE * wave),
        StructureKind::Gate | StructureKind::Trap => None,
    }
}

fn initial_state(kind: StructureKind, on_hill: bool) -> StructureState {
    match kind {
        StructureKind::Wall => StructureState::Wall {
            hit_points: StructureKind::Wall.hit_points().unwrap_or(0),
        },
        // New gates start closed regardless of the last toggle.
        StructureKind::Gate => StructureState::Gate {
            hit_points: StructureKind::Gate.hit_points().unwrap_or(0),
            open: false,
        },
        StructureKind::Tower => {
            let range = if on_hill {
                TOWER_RANGE + TOWER_HILL_BONUS
            } else {
                TOWER_RANGE
            };
            StructureState::Tower(TowerState {
                level: 1,
                range,
                rate: TOWER_RATE,
                cooldown: 0,
                damage: TOWER_DAMAGE,
            })
        }
        StructureKind::Trap => StructureState::Trap,
    }
}
