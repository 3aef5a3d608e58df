#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure breadth-first next-step planner used by enemy movement.
//!
//! The planner answers one question per enemy per tick: given the enemy's
//! current cell and the castle cell, which neighbouring cell is the first hop
//! of a minimum-hop path under the current blocking set? The search is
//! unweighted breadth-first over the 4-connected grid, so returned paths are
//! always shortest in hop count. Ties between equal-length paths are broken
//! by the fixed neighbour enumeration order North, East, South, West, which
//! keeps replays and tests deterministic.
//!
//! Scratch buffers are index-addressed dense arrays stamped with a search
//! generation, so repeated searches reuse the same allocations without
//! clearing them between calls.

use std::collections::VecDeque;

use hexhold_core::CellCoord;

/// Outcome of a successful step search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepPlan {
    /// First cell of a minimum-hop path toward the goal.
    pub next_cell: CellCoord,
    /// Total hops of the path the step belongs to.
    pub hops: u32,
}

/// Breadth-first planner with reusable dense scratch buffers.
#[derive(Clone, Debug)]
pub struct StepPlanner {
    width: u32,
    height: u32,
    visited: Vec<u32>,
    parent: Vec<u32>,
    frontier: VecDeque<u32>,
    generation: u32,
}

impl StepPlanner {
    /// Creates a planner sized for a `width × height` grid.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let cell_count = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            visited: vec![0; cell_count],
            parent: vec![0; cell_count],
            frontier: VecDeque::new(),
            generation: 0,
        }
    }

    /// Plans the first step of a minimum-hop path from `from` to `goal`.
    ///
    /// Cells for which `is_blocked` returns true are excluded from expansion;
    /// the start cell is always expandable so an enemy standing on hazardous
    /// ground can still leave it. Returns `None` when the goal is unreachable,
    /// in which case the caller stalls in place and retries next tick. When
    /// the enemy already occupies the goal cell the plan points at the goal
    /// itself with zero hops, letting movement finish steering to its centre.
    pub fn plan_step<F>(&mut self, from: CellCoord, goal: CellCoord, is_blocked: F) -> Option<StepPlan>
    where
        F: Fn(CellCoord) -> bool,
    {
        if !self.contains(from) || !self.contains(goal) {
            return None;
        }

        if from == goal {
            return Some(StepPlan {
                next_cell: goal,
                hops: 0,
            });
        }

        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamp wrapped around; invalidate every stale mark at once.
            self.visited.fill(0);
            self.generation = 1;
        }

        self.frontier.clear();
        let start = self.index(from);
        self.visited[start] = self.generation;
        self.frontier.push_back(start as u32);

        let goal_index = self.index(goal);
        let mut found = false;

        while let Some(current) = self.frontier.pop_front() {
            let current = current as usize;
            if current == goal_index {
                found = true;
                break;
            }

            let cell = self.cell_at(current);
            for neighbor in self.neighbors(cell) {
                let neighbor_index = self.index(neighbor);
                if self.visited[neighbor_index] == self.generation {
                    continue;
                }
                if is_blocked(neighbor) {
                    continue;
                }
                self.visited[neighbor_index] = self.generation;
                self.parent[neighbor_index] = current as u32;
                self.frontier.push_back(neighbor_index as u32);
            }
        }

        if !found {
            return None;
        }

        let mut hops = 1;
        let mut cursor = goal_index;
        while self.parent[cursor] as usize != start {
            cursor = self.parent[cursor] as usize;
            hops += 1;
        }

        Some(StepPlan {
            next_cell: self.cell_at(cursor),
            hops,
        })
    }

    fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.width && cell.row() < self.height
    }

    fn index(&self, cell: CellCoord) -> usize {
        cell.row() as usize * self.width as usize + cell.column() as usize
    }

    fn cell_at(&self, index: usize) -> CellCoord {
        let width = self.width as usize;
        CellCoord::new((index % width) as u32, (index / width) as u32)
    }

    // Neighbour order fixes shortest-path tie-breaks: North, East, South, West.
    fn neighbors(&self, cell: CellCoord) -> impl Iterator<Item = CellCoord> {
        let mut candidates = [None; 4];
        let mut count = 0;

        if let Some(row) = cell.row().checked_sub(1) {
            candidates[count] = Some(CellCoord::new(cell.column(), row));
            count += 1;
        }
        if cell.column() + 1 < self.width {
            candidates[count] = Some(CellCoord::new(cell.column() + 1, cell.row()));
            count += 1;
        }
        if cell.row() + 1 < self.height {
            candidates[count] = Some(CellCoord::new(cell.column(), cell.row() + 1));
            count += 1;
        }
        if let Some(column) = cell.column().checked_sub(1) {
            candidates[count] = Some(CellCoord::new(column, cell.row()));
            count += 1;
        }

        candidates.into_iter().take(count).flatten()
    }
}
