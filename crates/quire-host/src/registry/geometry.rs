use quire_common::Rect;
use quire_config::FloatingConfig;

/// Size rules for new floating windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingGeometry {
    pub default_width: f64,
    pub default_height: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl Default for FloatingGeometry {
    fn default() -> Self {
        Self::from(&FloatingConfig::default())
    }
}

impl From<&FloatingConfig> for FloatingGeometry {
    fn from(config: &FloatingConfig) -> Self {
        Self {
            default_width: f64::from(config.default_width),
            default_height: f64::from(config.default_height),
            min_width: f64::from(config.min_width),
            min_height: f64::from(config.min_height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Placement {
    pub bounds: Rect,
    /// Set when the requested bounds had to be changed.
    pub clamped: Option<Rect>,
}

impl FloatingGeometry {
    /// Final bounds for a new window.
    ///
    /// Usable requested bounds are kept, grown to the minimum size. Without
    /// them the default size is centered in the work area. When the work
    /// area is known the result is clamped into it.
    pub(crate) fn place(&self, requested: Option<Rect>, work_area: Option<Rect>) -> Placement {
        let requested = requested.filter(Rect::is_usable);
        let work_area = work_area.filter(Rect::is_usable);

        let candidate = match (requested, work_area) {
            (Some(r), _) => Rect::new(
                r.x,
                r.y,
                r.width.max(self.min_width),
                r.height.max(self.min_height),
            ),
            (None, Some(area)) => Rect::new(
                area.x + (area.width - self.default_width).max(0.0) / 2.0,
                area.y + (area.height - self.default_height).max(0.0) / 2.0,
                self.default_width,
                self.default_height,
            ),
            (None, None) => Rect::new(0.0, 0.0, self.default_width, self.default_height),
        };

        let bounds = match work_area {
            Some(area) => candidate.clamp_within(&area, self.min_width, self.min_height),
            None => candidate,
        };
        let reference = requested.unwrap_or(candidate);
        Placement {
            bounds,
            clamped: (bounds != reference).then_some(bounds),
        }
    }
}
