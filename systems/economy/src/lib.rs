#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure wave-reward computation.
//!
//! The world hands over the statistics gathered during a wave and receives a
//! [`ResourceGrant`] back; crediting the grant (and saturating at storage
//! caps) stays with the ledger so this crate holds nothing but arithmetic.

use hexhold_core::ResourceGrant;

const GOLD_PER_KILL: u32 = 10;
const WOOD_POOL: f32 = 80.0;
const STONE_POOL: f32 = 100.0;

/// Statistics gathered over a single wave, consumed by reward computation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WaveStats {
    /// Enemies destroyed by projectiles during the wave.
    pub kills: u32,
    /// Elite enemies destroyed during the wave.
    pub elite_kills: u32,
    /// Walls still standing when the wave ended.
    pub walls_intact: u32,
    /// Walls that existed when the wave ended.
    pub walls_total: u32,
    /// Fraction of total wall damage taken, in `[0, 1]`.
    ///
    /// Wall hit points are never depleted in the current ruleset, so callers
    /// always pass zero; the formula keeps the term so real wall-damage
    /// tracking can be wired in without touching the payout shape.
    pub wall_damage_percent: f32,
}

/// Computes the resource payout for a completed wave.
///
/// Gold scales with kills, wood with the fraction of walls left standing
/// (a wall-less defence counts as fully intact rather than dividing by
/// zero), stone with the inverse of wall damage, and essence matches elite
/// kills one for one. Storage caps are the ledger's concern, not this one's.
#[must_use]
pub fn compute_rewards(stats: &WaveStats) -> ResourceGrant {
    let intact_ratio = if stats.walls_total == 0 {
        1.0
    } else {
        stats.walls_intact as f32 / stats.walls_total as f32
    };

    let damage = stats.wall_damage_percent.clamp(0.0, 1.0);

    ResourceGrant {
        stone: ((1.0 - damage) * STONE_POOL).floor() as u32,
        wood: (intact_ratio * WOOD_POOL).floor() as u32,
        gold: GOLD_PER_KILL * stats.kills,
        essence: stats.elite_kills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kills_pay_ten_gold_each() {
        let grant = compute_rewards(&WaveStats {
            kills: 7,
            ..WaveStats::default()
        });
        assert_eq!(grant.gold, 70);
    }

    #[test]
    fn intact_walls_pay_the_full_wood_pool() {
        let grant = compute_rewards(&WaveStats {
            walls_intact: 12,
            walls_total: 12,
            ..WaveStats::default()
        });
        assert_eq!(grant.wood, 80);
    }

    #[test]
    fn wall_less_defence_still_pays_full_wood() {
        let grant = compute_rewards(&WaveStats::default());
        assert_eq!(grant.wood, 80);
    }

    #[test]
    fn partial_wall_survival_floors_the_wood_share() {
        let grant = compute_rewards(&WaveStats {
            walls_intact: 2,
            walls_total: 3,
            ..WaveStats::default()
        });
        assert_eq!(grant.wood, 53);
    }

    #[test]
    fn undamaged_walls_pay_the_full_stone_pool() {
        let grant = compute_rewards(&WaveStats::default());
        assert_eq!(grant.stone, 100);
    }

    #[test]
    fn wall_damage_scales_stone_down() {
        let grant = compute_rewards(&WaveStats {
            wall_damage_percent: 0.25,
            ..WaveStats::default()
        });
        assert_eq!(grant.stone, 75);
    }

    #[test]
    fn essence_matches_elite_kills() {
        let grant = compute_rewards(&WaveStats {
            kills: 9,
            elite_kills: 2,
            ..WaveStats::default()
        });
        assert_eq!(grant.essence, 2);
    }
}
