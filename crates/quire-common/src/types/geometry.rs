use serde::{Deserialize, Serialize};

/// Screen-space rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// All components finite and the size strictly positive.
    pub fn is_usable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// Whether `self` lies entirely inside `area`.
    pub fn is_within(&self, area: &Rect) -> bool {
        self.x >= area.x
            && self.y >= area.y
            && self.x + self.width <= area.x + area.width
            && self.y + self.height <= area.y + area.height
    }

    /// Fit this rectangle into `area`.
    ///
    /// The size is raised to the minimum and capped at the area size, then
    /// the origin is moved just far enough to bring the whole rectangle on
    /// screen. Non-finite components fall back to the area's origin.
    pub fn clamp_within(&self, area: &Rect, min_width: f64, min_height: f64) -> Rect {
        let width = finite_or(self.width, min_width)
            .max(min_width)
            .min(area.width.max(1.0));
        let height = finite_or(self.height, min_height)
            .max(min_height)
            .min(area.height.max(1.0));
        let x = finite_or(self.x, area.x)
            .max(area.x)
            .min(area.x + area.width - width);
        let y = finite_or(self.y, area.y)
            .max(area.y)
            .min(area.y + area.height - height);
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0.0, 25.0, 1440.0, 875.0)
    }

    #[test]
    fn on_screen_rect_is_unchanged() {
        let r = Rect::new(100.0, 100.0, 640.0, 420.0);
        assert_eq!(r.clamp_within(&screen(), 360.0, 240.0), r);
    }

    #[test]
    fn far_off_screen_rect_is_pulled_back() {
        let r = Rect::new(-5000.0, -4000.0, 640.0, 420.0);
        let clamped = r.clamp_within(&screen(), 360.0, 240.0);
        assert!(clamped.is_within(&screen()));
        assert_eq!(clamped.x, 0.0);
        assert_eq!(clamped.y, 25.0);
        assert_eq!(clamped.width, 640.0);
    }

    #[test]
    fn rect_past_bottom_right_keeps_size() {
        let r = Rect::new(5000.0, 5000.0, 640.0, 420.0);
        let clamped = r.clamp_within(&screen(), 360.0, 240.0);
        assert!(clamped.is_within(&screen()));
        assert_eq!(clamped.x, 1440.0 - 640.0);
        assert_eq!(clamped.y, 25.0 + 875.0 - 420.0);
    }

    #[test]
    fn oversized_rect_shrinks_to_area() {
        let r = Rect::new(0.0, 0.0, 4000.0, 3000.0);
        let clamped = r.clamp_within(&screen(), 360.0, 240.0);
        assert_eq!(clamped.width, 1440.0);
        assert_eq!(clamped.height, 875.0);
        assert!(clamped.is_within(&screen()));
    }

    #[test]
    fn tiny_rect_grows_to_minimum() {
        let r = Rect::new(10.0, 40.0, 20.0, 10.0);
        let clamped = r.clamp_within(&screen(), 360.0, 240.0);
        assert_eq!(clamped.width, 360.0);
        assert_eq!(clamped.height, 240.0);
    }

    #[test]
    fn non_finite_components_fall_back() {
        let r = Rect::new(f64::NAN, f64::INFINITY, f64::NAN, 300.0);
        let clamped = r.clamp_within(&screen(), 360.0, 240.0);
        assert!(clamped.is_usable());
        assert!(clamped.is_within(&screen()));
    }

    #[test]
    fn usable_requires_positive_size() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_usable());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_usable());
        assert!(!Rect::new(f64::NAN, 0.0, 1.0, 1.0).is_usable());
    }
}
