use ggez::glam::Vec2;

/// Remainders this small after a friction step are treated as settled.
const SETTLE_EPSILON: f32 = 1e-3;

/// One friction step for a single velocity component.
///
/// The magnitude shrinks by `step` every call. A step that reaches or
/// crosses zero snaps to exactly `0.0`, so any speed settles after at most
/// `ceil(|speed| / step)` calls.
pub fn decay(speed: f32, step: f32) -> f32 {
    let was_positive = speed > 0.0;
    let next = if was_positive { speed - step } else { speed + step };

    if (next > 0.0) != was_positive || next.abs() <= SETTLE_EPSILON {
        0.0
    } else {
        next
    }
}

pub fn decay_velocity(vel: Vec2, step: f32) -> Vec2 {
    Vec2::new(decay(vel.x, step), decay(vel.y, step))
}

/// Reflects one velocity component off the `[low, high]` band.
///
/// Only motion that carries the body further out is flipped, so a body
/// sitting on an edge bounces once instead of flipping every tick.
pub fn bounce(pos: f32, speed: f32, low: f32, high: f32) -> f32 {
    if (pos <= low && speed < 0.0) || (pos >= high && speed > 0.0) {
        -speed
    } else {
        speed
    }
}

pub fn bounce_velocity(pos: Vec2, vel: Vec2, size: Vec2, extent: Vec2) -> Vec2 {
    Vec2::new(
        bounce(pos.x, vel.x, size.x, extent.x),
        bounce(pos.y, vel.y, size.y, extent.y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.05;

    fn steps_to_rest(mut speed: f32) -> usize {
        let mut steps = 0;
        while speed != 0.0 {
            let next = decay(speed, STEP);
            assert!(next.abs() < speed.abs(), "magnitude must shrink");
            speed = next;
            steps += 1;
            assert!(steps < 10_000, "decay did not settle");
        }
        steps
    }

    #[test]
    fn three_settles_after_sixty_steps() {
        let mut speed = 3.0;
        for _ in 0..59 {
            speed = decay(speed, STEP);
        }
        assert!(speed > 0.0);
        assert_eq!(decay(speed, STEP), 0.0);
    }

    #[test]
    fn settles_within_ceiling_bound() {
        for speed in [0.01_f32, 0.05, 0.07, 1.0, 2.345, -0.2, -3.0, -7.77, 9.5] {
            let bound = speed.abs() / STEP;
            let steps = steps_to_rest(speed);
            assert!(
                steps as f32 <= bound.ceil(),
                "{speed} took {steps} steps, bound {bound}"
            );
        }
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(decay(0.0, STEP), 0.0);
        assert_eq!(decay_velocity(Vec2::ZERO, STEP), Vec2::ZERO);
    }

    #[test]
    fn small_negative_snaps_instead_of_flipping() {
        assert_eq!(decay(-0.03, STEP), 0.0);
        assert_eq!(decay(0.03, STEP), 0.0);
    }

    #[test]
    fn bounce_flips_once_per_crossing() {
        let (low, high) = (50.0, 800.0);
        let mut speed = -4.0;
        let mut flips = 0;
        // sits on the edge for a few ticks
        for pos in [49.0, 47.0, 45.0] {
            let next = bounce(pos, speed, low, high);
            if next.signum() != speed.signum() {
                flips += 1;
            }
            speed = next;
        }
        assert_eq!(flips, 1);
        assert_eq!(speed, 4.0);
    }

    #[test]
    fn bounce_far_edge() {
        assert_eq!(bounce(800.0, 2.0, 50.0, 800.0), -2.0);
        assert_eq!(bounce(800.0, -2.0, 50.0, 800.0), -2.0);
        assert_eq!(bounce(400.0, 2.0, 50.0, 800.0), 2.0);
    }

    #[test]
    fn bounce_velocity_is_per_axis() {
        let vel = bounce_velocity(
            Vec2::new(20.0, 300.0),
            Vec2::new(-1.0, 1.0),
            Vec2::new(50.0, 50.0),
            Vec2::new(800.0, 600.0),
        );
        assert_eq!(vel, Vec2::new(1.0, 1.0));
    }
}
