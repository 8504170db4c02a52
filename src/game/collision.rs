//! Platform collision resolution
//!
//! Minimum-penetration-axis resolution between a moving actor rectangle
//! and one static platform. The penetration depth is computed on all four
//! axes and the smallest one wins, with ties broken in the order top,
//! bottom, left, right. Vertical corrections are gated on the velocity
//! sign: landing requires downward motion, head bumps require upward
//! motion. Side corrections apply regardless of velocity.
//!
//! When the minimum axis is vertical but the velocity gate fails, the
//! call applies no correction at all, even if a larger horizontal axis
//! would have qualified. Movers re-test on later frames.

use super::rect::Rect;

/// Which axis a collision was resolved along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Actor landed on top of the platform
    Top,
    /// Actor hit the underside of the platform
    Bottom,
    /// Actor pushed out to the left of the platform
    Left,
    /// Actor pushed out to the right of the platform
    Right,
}

/// Result of resolving an actor rectangle against one platform
#[derive(Debug, Clone, Copy)]
pub struct Resolution {
    /// Corrected position
    pub x: f32,
    pub y: f32,
    /// Corrected velocity
    pub vx: f32,
    pub vy: f32,
    /// Did this resolution land the actor on the platform?
    pub grounded: bool,
    /// The corrected axis, or None when the velocity gate rejected it
    pub axis: Option<Axis>,
}

/// Resolve a penetrating actor rectangle against one platform.
///
/// The caller is expected to have already confirmed the overlap; on a
/// non-overlapping pair the depths go negative and the result is
/// meaningless.
pub fn resolve_penetration(actor: Rect, platform: Rect, vx: f32, vy: f32) -> Resolution {
    let overlap_left = actor.right() - platform.x;
    let overlap_right = platform.right() - actor.x;
    let overlap_top = actor.bottom() - platform.y;
    let overlap_bottom = platform.bottom() - actor.y;

    let min_overlap = overlap_left
        .min(overlap_right)
        .min(overlap_top)
        .min(overlap_bottom);

    let mut resolution = Resolution {
        x: actor.x,
        y: actor.y,
        vx,
        vy,
        grounded: false,
        axis: None,
    };

    if min_overlap == overlap_top && vy > 0.0 {
        // Falling onto the platform: snap the feet to its top
        resolution.y = platform.y - actor.h;
        resolution.vy = 0.0;
        resolution.grounded = true;
        resolution.axis = Some(Axis::Top);
    } else if min_overlap == overlap_bottom && vy < 0.0 {
        // Rising into the underside: snap the head below it
        resolution.y = platform.bottom();
        resolution.vy = 0.0;
        resolution.axis = Some(Axis::Bottom);
    } else if min_overlap == overlap_left {
        resolution.x = platform.x - actor.w;
        resolution.vx = 0.0;
        resolution.axis = Some(Axis::Left);
    } else if min_overlap == overlap_right {
        resolution.x = platform.right();
        resolution.vx = 0.0;
        resolution.axis = Some(Axis::Right);
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACTOR: f32 = 50.0;

    #[test]
    fn test_landing_snaps_to_platform_top() {
        // Actor feet 10 units into the platform, moving down
        let actor = Rect::new(100.0, 540.0, ACTOR, ACTOR);
        let platform = Rect::new(0.0, 580.0, 800.0, 20.0);
        let res = resolve_penetration(actor, platform, 0.0, 300.0);

        assert_eq!(res.axis, Some(Axis::Top));
        assert_eq!(res.y, 530.0);
        assert_eq!(res.vy, 0.0);
        assert!(res.grounded);

        // Idempotence: the corrected rectangle no longer overlaps
        let corrected = Rect::new(res.x, res.y, ACTOR, ACTOR);
        assert!(!corrected.overlaps(&platform));
    }

    #[test]
    fn test_head_bump_snaps_below() {
        let actor = Rect::new(100.0, 190.0, ACTOR, ACTOR);
        let platform = Rect::new(50.0, 150.0, 200.0, 50.0);
        let res = resolve_penetration(actor, platform, 0.0, -400.0);

        assert_eq!(res.axis, Some(Axis::Bottom));
        assert_eq!(res.y, 200.0);
        assert_eq!(res.vy, 0.0);
        assert!(!res.grounded);

        let corrected = Rect::new(res.x, res.y, ACTOR, ACTOR);
        assert!(!corrected.overlaps(&platform));
    }

    #[test]
    fn test_side_push_ignores_velocity_sign() {
        // Shallow horizontal penetration from the left, while falling
        let actor = Rect::new(155.0, 300.0, ACTOR, ACTOR);
        let platform = Rect::new(200.0, 280.0, 100.0, 300.0);
        let res = resolve_penetration(actor, platform, 250.0, 80.0);

        assert_eq!(res.axis, Some(Axis::Left));
        assert_eq!(res.x, 150.0);
        assert_eq!(res.vx, 0.0);
        // Vertical state untouched
        assert_eq!(res.y, 300.0);
        assert_eq!(res.vy, 80.0);
    }

    #[test]
    fn test_push_out_right() {
        let actor = Rect::new(295.0, 300.0, ACTOR, ACTOR);
        let platform = Rect::new(200.0, 280.0, 100.0, 300.0);
        let res = resolve_penetration(actor, platform, -250.0, 0.0);

        assert_eq!(res.axis, Some(Axis::Right));
        assert_eq!(res.x, 300.0);
        assert_eq!(res.vx, 0.0);
    }

    #[test]
    fn test_vertical_minimum_with_wrong_velocity_applies_nothing() {
        // Minimum axis is top but the actor is moving up: the gate fails
        // and the frame ends uncorrected
        let actor = Rect::new(100.0, 545.0, ACTOR, ACTOR);
        let platform = Rect::new(0.0, 580.0, 800.0, 20.0);
        let res = resolve_penetration(actor, platform, 0.0, -50.0);

        assert_eq!(res.axis, None);
        assert_eq!(res.x, actor.x);
        assert_eq!(res.y, actor.y);
        assert_eq!(res.vy, -50.0);
        assert!(!res.grounded);
    }

    #[test]
    fn test_tie_prefers_top_over_side() {
        // Equal top and left penetration while falling: top wins
        let actor = Rect::new(90.0, 90.0, ACTOR, ACTOR);
        let platform = Rect::new(130.0, 130.0, 100.0, 100.0);
        let res = resolve_penetration(actor, platform, 100.0, 100.0);

        assert_eq!(res.axis, Some(Axis::Top));
        assert!(res.grounded);
    }
}
