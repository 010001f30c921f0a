// Virtual joystick geometry and drag state
use crate::model::Direction;

/// The circular touch area, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JoystickRegion {
    pub center_x: f64,
    pub center_y: f64,
    /// Knob travel limit: half the region width minus the inset.
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct JoystickReading {
    /// Knob offset from the center, in pixels, already limited to `radius`.
    pub knob_x: f64,
    pub knob_y: f64,
    pub direction: Direction,
}

impl JoystickRegion {
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64, inset: f64) -> Self {
        Self {
            center_x: left + width / 2.0,
            center_y: top + height / 2.0,
            radius: width / 2.0 - inset,
        }
    }

    fn is_usable(&self) -> bool {
        self.radius.is_finite() && self.radius > 0.0 && self.center_x.is_finite() && self.center_y.is_finite()
    }

    pub fn read(&self, pointer_x: f64, pointer_y: f64) -> JoystickReading {
        if !self.is_usable() {
            return JoystickReading::default();
        }
        let mut dx = pointer_x - self.center_x;
        let mut dy = pointer_y - self.center_y;
        let distance = dx.hypot(dy);
        if !distance.is_finite() || distance == 0.0 {
            return JoystickReading::default();
        }
        if distance > self.radius {
            let scale = self.radius / distance;
            dx *= scale;
            dy *= scale;
        }
        JoystickReading {
            knob_x: dx,
            knob_y: dy,
            direction: Direction::new(dx / self.radius, dy / self.radius),
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq)]
pub struct JoystickState {
    pub dragging: bool,
    pub knob_x: f64,
    pub knob_y: f64,
}

impl JoystickState {
    pub fn begin(&mut self) {
        self.dragging = true;
    }

    /// Applies a reading while dragging; returns the direction to emit.
    pub fn update(&mut self, reading: JoystickReading) -> Option<Direction> {
        if !self.dragging {
            return None;
        }
        self.knob_x = reading.knob_x;
        self.knob_y = reading.knob_y;
        Some(reading.direction)
    }

    /// Ends the drag and recenters the knob. Returns whether a drag was active.
    pub fn release(&mut self) -> bool {
        let was = self.dragging;
        *self = Self::default();
        was
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> JoystickRegion {
        // 80px wide control at (16, 500), 10px inset -> radius 30.
        JoystickRegion::from_rect(16.0, 500.0, 80.0, 80.0, 10.0)
    }

    #[test]
    fn center_and_radius_from_rect() {
        let r = region();
        assert_eq!(r.center_x, 56.0);
        assert_eq!(r.center_y, 540.0);
        assert_eq!(r.radius, 30.0);
    }

    #[test]
    fn inside_radius_is_proportional() {
        let r = region();
        let reading = r.read(56.0 + 15.0, 540.0);
        assert_eq!(reading.direction, Direction { x: 0.5, y: 0.0 });
        assert_eq!(reading.knob_x, 15.0);
    }

    #[test]
    fn beyond_radius_is_clamped_preserving_angle() {
        let r = region();
        let (dx, dy): (f64, f64) = (90.0, -120.0);
        let reading = r.read(r.center_x + dx, r.center_y + dy);
        let d = reading.direction;
        assert!((d.magnitude() - 1.0).abs() < 1e-9);
        assert!((d.y.atan2(d.x) - dy.atan2(dx)).abs() < 1e-9);
        assert!((reading.knob_x.hypot(reading.knob_y) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn pointer_at_center_is_zero() {
        let r = region();
        assert_eq!(r.read(56.0, 540.0).direction, Direction::ZERO);
    }

    #[test]
    fn degenerate_region_is_a_no_op() {
        let tiny = JoystickRegion::from_rect(0.0, 0.0, 20.0, 20.0, 10.0);
        assert_eq!(tiny.read(100.0, 100.0), JoystickReading::default());
        let zero = JoystickRegion::from_rect(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(zero.read(5.0, -5.0).direction, Direction::ZERO);
    }

    #[test]
    fn updates_only_while_dragging() {
        let mut js = JoystickState::default();
        let reading = region().read(86.0, 540.0);
        assert_eq!(js.update(reading), None);
        js.begin();
        assert_eq!(js.update(reading), Some(Direction { x: 1.0, y: 0.0 }));
        assert_eq!(js.knob_x, 30.0);
        assert!(js.release());
        assert_eq!(js, JoystickState::default());
        assert!(!js.release());
    }
}
