#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure combat resolution shared by towers and the castle.
//!
//! Both kinds of defender are modelled as plain [`AttackerProfile`] values,
//! so target acquisition treats them uniformly. The functions here never
//! touch world state; the world feeds in snapshots and applies the returned
//! decisions itself, which keeps firing order deterministic and testable in
//! isolation.

use hexhold_core::{CellPoint, EnemyId, EnemySnapshot};

/// Distance a projectile covers per tick, in cell units.
pub const PROJECTILE_SPEED: f32 = 1.0;

/// Extra impact slack added to the target's hitbox radius.
pub const IMPACT_MARGIN: f32 = 0.1;

/// Firing-relevant state of one attacker for a single tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackerProfile {
    /// Centre of the attacker in cell units.
    pub center: CellPoint,
    /// Targeting radius in cell units.
    pub range: f32,
    /// Damage carried by each projectile the attacker fires.
    pub damage: u32,
    /// Whether the attacker's cooldown has fully elapsed.
    pub ready: bool,
}

/// Firing decision produced by target acquisition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    /// Index of the firing attacker within the profile slice.
    pub attacker: usize,
    /// Enemy the projectile will home toward.
    pub target: EnemyId,
    /// Spawn position of the projectile.
    pub origin: CellPoint,
    /// Fixed flight direction captured at spawn time.
    pub heading: Heading,
    /// Damage the projectile will deal on impact.
    pub damage: u32,
}

/// Unit direction vector frozen when a projectile spawns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    dx: f32,
    dy: f32,
}

impl Heading {
    /// Computes the unit vector pointing from `origin` toward `target`.
    ///
    /// A degenerate zero-length aim falls back to a null heading so the
    /// projectile simply waits in place for the impact check.
    #[must_use]
    pub fn toward(origin: CellPoint, target: CellPoint) -> Self {
        let dx = target.x() - origin.x();
        let dy = target.y() - origin.y();
        let length = (dx * dx + dy * dy).sqrt();
        if length <= f32::EPSILON {
            return Self { dx: 0.0, dy: 0.0 };
        }
        Self {
            dx: dx / length,
            dy: dy / length,
        }
    }

    /// Advances a position one tick along the heading.
    #[must_use]
    pub fn advance(&self, position: CellPoint) -> CellPoint {
        CellPoint::new(
            position.x() + self.dx * PROJECTILE_SPEED,
            position.y() + self.dy * PROJECTILE_SPEED,
        )
    }
}

/// Result of checking one projectile against its target after moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightOutcome {
    /// The projectile keeps flying toward a still-living target.
    InFlight,
    /// The target died first; the projectile is discarded without damage.
    TargetGone,
    /// The projectile reached the target's hitbox and deals its damage.
    Impact,
}

/// Emits one [`Shot`] per ready attacker with a living enemy in range.
///
/// Enemies are scanned in roster order and the first one inside the
/// attacker's Euclidean range wins; attackers acquire targets independently,
/// so several may pick the same enemy in the same tick.
pub fn acquire_targets(
    attackers: &[AttackerProfile],
    enemies: &[EnemySnapshot],
    out: &mut Vec<Shot>,
) {
    for (index, attacker) in attackers.iter().enumerate() {
        if !attacker.ready {
            continue;
        }

        let in_range = enemies
            .iter()
            .find(|enemy| attacker.center.distance_to(enemy.position) <= attacker.range);

        if let Some(enemy) = in_range {
            out.push(Shot {
                attacker: index,
                target: enemy.id,
                origin: attacker.center,
                heading: Heading::toward(attacker.center, enemy.position),
                damage: attacker.damage,
            });
        }
    }
}

/// Classifies a projectile's state against its target's current position.
///
/// `target` is `None` when the target already died this tick or earlier; the
/// projectile is then discarded before any damage is applied.
#[must_use]
pub fn resolve_flight(position: CellPoint, target: Option<&EnemySnapshot>) -> FlightOutcome {
    let Some(enemy) = target else {
        return FlightOutcome::TargetGone;
    };

    let impact_radius = enemy.kind.hitbox() / 2.0 + IMPACT_MARGIN;
    if position.distance_to(enemy.position) < impact_radius {
        FlightOutcome::Impact
    } else {
        FlightOutcome::InFlight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexhold_core::EnemyKind;

    fn enemy(id: u32, x: f32, y: f32) -> EnemySnapshot {
        EnemySnapshot {
            id: EnemyId::new(id),
            kind: EnemyKind::Normal,
            position: CellPoint::new(x, y),
            cell: CellPoint::new(x, y).containing_cell(),
            health: 10,
            max_health: 10,
            slow_remaining: 0,
        }
    }

    fn attacker(x: f32, y: f32, range: f32, ready: bool) -> AttackerProfile {
        AttackerProfile {
            center: CellPoint::new(x, y),
            range,
            damage: 5,
            ready,
        }
    }

    #[test]
    fn first_enemy_in_roster_order_wins() {
        let attackers = [attacker(5.0, 5.0, 4.0, true)];
        let enemies = [enemy(3, 6.0, 5.0), enemy(7, 5.5, 5.0)];
        let mut shots = Vec::new();

        acquire_targets(&attackers, &enemies, &mut shots);

        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].target, EnemyId::new(3));
    }

    #[test]
    fn cooling_attackers_stay_silent() {
        let attackers = [attacker(5.0, 5.0, 4.0, false)];
        let enemies = [enemy(0, 5.5, 5.0)];
        let mut shots = Vec::new();

        acquire_targets(&attackers, &enemies, &mut shots);

        assert!(shots.is_empty());
    }

    #[test]
    fn out_of_range_enemies_are_ignored() {
        let attackers = [attacker(0.5, 0.5, 2.0, true)];
        let enemies = [enemy(0, 9.0, 9.0)];
        let mut shots = Vec::new();

        acquire_targets(&attackers, &enemies, &mut shots);

        assert!(shots.is_empty());
    }

    #[test]
    fn attackers_may_share_a_target() {
        let attackers = [attacker(4.0, 5.0, 4.0, true), attacker(6.0, 5.0, 4.0, true)];
        let enemies = [enemy(1, 5.0, 5.0)];
        let mut shots = Vec::new();

        acquire_targets(&attackers, &enemies, &mut shots);

        assert_eq!(shots.len(), 2);
        assert!(shots.iter().all(|shot| shot.target == EnemyId::new(1)));
    }

    #[test]
    fn heading_normalises_to_unit_length() {
        let heading = Heading::toward(CellPoint::new(0.0, 0.0), CellPoint::new(3.0, 4.0));
        let moved = heading.advance(CellPoint::new(0.0, 0.0));
        assert!((moved.x() - 0.6).abs() < 1e-6);
        assert!((moved.y() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn dead_target_discards_before_damage() {
        assert_eq!(
            resolve_flight(CellPoint::new(1.0, 1.0), None),
            FlightOutcome::TargetGone
        );
    }

    #[test]
    fn impact_requires_hitbox_contact() {
        let target = enemy(0, 5.0, 5.0);
        let near = CellPoint::new(5.3, 5.0);
        let far = CellPoint::new(5.9, 5.0);
        assert_eq!(resolve_flight(near, Some(&target)), FlightOutcome::Impact);
        assert_eq!(resolve_flight(far, Some(&target)), FlightOutcome::InFlight);
    }
}
