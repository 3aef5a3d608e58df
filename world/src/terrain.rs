//! Terrain generation and the expanding build zone.

use hexhold_core::{CellCoord, TerrainKind, GRID_SIZE};
use rand::Rng;

const WATER_THRESHOLD: f32 = 0.38;
const ROCK_THRESHOLD: f32 = 0.42;
const TREE_THRESHOLD: f32 = 0.46;
const HILL_THRESHOLD: f32 = 0.50;

const ZONE_INITIAL_START: u32 = 22;
const ZONE_INITIAL_END: u32 = 42;
const ZONE_EXPANSION_STEP: u32 = 2;
const ZONE_MIN_START: u32 = 2;
const ZONE_MAX_END: u32 = GRID_SIZE - 2;

/// Square region of cells the player may currently build in.
///
/// The zone covers `start..end` on both axes. It starts as the 20×20 block
/// around the castle and grows outward by two cells per expansion until it
/// reaches the two-cell border margin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildZone {
    start: u32,
    end: u32,
}

impl BuildZone {
    pub(crate) const fn initial() -> Self {
        Self {
            start: ZONE_INITIAL_START,
            end: ZONE_INITIAL_END,
        }
    }

    /// First column and row inside the zone.
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// One past the last column and row inside the zone.
    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Reports whether the cell lies inside the zone.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() >= self.start
            && cell.column() < self.end
            && cell.row() >= self.start
            && cell.row() < self.end
    }

    pub(crate) fn expand(&mut self) {
        self.start = self.start.saturating_sub(ZONE_EXPANSION_STEP).max(ZONE_MIN_START);
        self.end = (self.end + ZONE_EXPANSION_STEP).min(ZONE_MAX_END);
    }
}

/// Dense per-cell terrain classification for the whole battlefield.
#[derive(Clone, Debug)]
pub(crate) struct TerrainGrid {
    cells: Vec<TerrainKind>,
}

impl TerrainGrid {
    /// Generates a fresh map from per-cell noise.
    ///
    /// Each cell draws a uniform sample, a 3×3 box blur smooths the interior
    /// (border cells keep their raw sample), and fixed thresholds classify
    /// the blurred value. Water and rock rolled inside the initial build zone
    /// are downgraded to open ground so the player always starts with room
    /// to build.
    pub(crate) fn generate<R: Rng>(rng: &mut R, zone: &BuildZone) -> Self {
        let side = GRID_SIZE as usize;
        let mut field = vec![0.0f32; side * side];
        for sample in field.iter_mut() {
            *sample = rng.gen::<f32>();
        }

        let mut blurred = field.clone();
        for row in 1..side - 1 {
            for column in 1..side - 1 {
                let mut sum = 0.0;
                for neighbor_row in row - 1..=row + 1 {
                    for neighbor_column in column - 1..=column + 1 {
                        sum += field[neighbor_row * side + neighbor_column];
                    }
                }
                blurred[row * side + column] = sum / 9.0;
            }
        }

        let mut cells = Vec::with_capacity(side * side);
        for (index, value) in blurred.iter().enumerate() {
            let cell = CellCoord::new((index % side) as u32, (index / side) as u32);
            let mut kind = classify(*value);
            if zone.contains(cell) && matches!(kind, TerrainKind::Water | TerrainKind::Rock) {
                kind = TerrainKind::Open;
            }
            cells.push(kind);
        }

        Self { cells }
    }

    /// All-open map used by deterministic scenario drivers.
    pub(crate) fn flat() -> Self {
        Self {
            cells: vec![TerrainKind::Open; (GRID_SIZE * GRID_SIZE) as usize],
        }
    }

    /// Terrain kind of the cell; out-of-bounds probes read as rock.
    pub(crate) fn kind(&self, cell: CellCoord) -> TerrainKind {
        if !cell.in_bounds() {
            return TerrainKind::Rock;
        }
        self.cells[index_of(cell)]
    }

    pub(crate) fn set_kind(&mut self, cell: CellCoord, kind: TerrainKind) {
        if cell.in_bounds() {
            self.cells[index_of(cell)] = kind;
        }
    }

    /// Replaces a tree with open ground, reporting whether one stood there.
    pub(crate) fn clear_tree(&mut self, cell: CellCoord) -> bool {
        if self.kind(cell) != TerrainKind::Tree {
            return false;
        }
        self.cells[index_of(cell)] = TerrainKind::Open;
        true
    }
}

fn index_of(cell: CellCoord) -> usize {
    (cell.row() * GRID_SIZE + cell.column()) as usize
}

fn classify(value: f32) -> TerrainKind {
    if value < WATER_THRESHOLD {
        TerrainKind::Water
    } else if value < ROCK_THRESHOLD {
        TerrainKind::Rock
    } else if value < TREE_THRESHOLD {
        TerrainKind::Tree
    } else if value < HILL_THRESHOLD {
        TerrainKind::Hill
    } else {
        TerrainKind::Open
    }
}
