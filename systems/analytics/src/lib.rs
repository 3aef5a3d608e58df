#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic telemetry system that tracks enemy traffic per wave.
//!
//! Once per tick the driver hands the system the world's event batch and the
//! current enemy view; the system accumulates one sample per living enemy
//! into a dense cell-count grid. When the wave ends it publishes a
//! [`WaveReport`] naming the hotspot, the single cell that absorbed more
//! than 60% of all recorded samples, if any cell did. Gameplay never reads
//! the heatmap; it exists purely for post-wave reporting.

use hexhold_core::{CellCoord, EnemyView, Event, WaveReport, GRID_SIZE};

/// Share of total samples a single cell must exceed to count as a hotspot,
/// expressed in percent.
const HOTSPOT_SHARE_PERCENT: u64 = 60;

/// Pure telemetry system holding the per-wave traffic grid.
#[derive(Clone, Debug)]
pub struct Telemetry {
    counts: Vec<u32>,
    samples: u64,
    recording: bool,
    last_report: Option<WaveReport>,
}

impl Telemetry {
    /// Creates a telemetry system with an empty traffic grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: vec![0; (GRID_SIZE * GRID_SIZE) as usize],
            samples: 0,
            recording: false,
            last_report: None,
        }
    }

    /// Returns the report for the most recently completed wave, if any.
    #[must_use]
    pub fn last_report(&self) -> Option<&WaveReport> {
        self.last_report.as_ref()
    }

    /// Dense per-cell sample counts in row-major order, for rendering.
    #[must_use]
    pub fn heatmap(&self) -> &[u32] {
        &self.counts
    }

    /// Consumes one tick's events and enemy view.
    ///
    /// A `WaveStarted` event resets the grid and begins recording; while
    /// recording, every living enemy contributes one sample at its current
    /// cell; a `WaveEnded` event folds the grid into a published report and
    /// stops recording.
    pub fn handle(&mut self, events: &[Event], enemies: &EnemyView) {
        for event in events {
            if matches!(event, Event::WaveStarted { .. }) {
                self.reset();
                self.recording = true;
            }
        }

        if self.recording {
            for enemy in enemies.iter() {
                self.record(enemy.cell);
            }
        }

        for event in events {
            if let Event::WaveEnded {
                wave,
                kills,
                elite_kills,
                ..
            } = event
            {
                self.last_report = Some(WaveReport {
                    wave: *wave,
                    kills: *kills,
                    elite_kills: *elite_kills,
                    hotspot: self.hotspot(),
                });
                self.recording = false;
            }
        }
    }

    fn record(&mut self, cell: CellCoord) {
        if !cell.in_bounds() {
            return;
        }
        let index = (cell.row() * GRID_SIZE + cell.column()) as usize;
        self.counts[index] = self.counts[index].saturating_add(1);
        self.samples = self.samples.saturating_add(1);
    }

    fn hotspot(&self) -> Option<CellCoord> {
        if self.samples == 0 {
            return None;
        }

        let (index, &count) = self
            .counts
            .iter()
            .enumerate()
            .max_by_key(|(_, &count)| count)?;

        if u64::from(count) * 100 > HOTSPOT_SHARE_PERCENT * self.samples {
            let index = index as u32;
            Some(CellCoord::new(index % GRID_SIZE, index / GRID_SIZE))
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.counts.fill(0);
        self.samples = 0;
    }
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new()
    }
}
