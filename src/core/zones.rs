use serde::{Deserialize, Serialize};

/// Vertical band of the screen a pointer sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScreenZone {
    Top,
    #[default]
    Middle,
    Bottom,
}

impl ScreenZone {
    #[must_use]
    pub fn edge(self) -> Option<EdgeZone> {
        match self {
            Self::Top => Some(EdgeZone::Top),
            Self::Middle => None,
            Self::Bottom => Some(EdgeZone::Bottom),
        }
    }

    #[must_use]
    pub fn is_edge(self) -> bool {
        self != Self::Middle
    }
}

/// One of the two scroll-triggering edge bands. Doubles as scroll direction:
/// `Top` scrolls content up (negative delta), `Bottom` scrolls it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeZone {
    Top,
    Bottom,
}

impl EdgeZone {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Top => -1.0,
            Self::Bottom => 1.0,
        }
    }
}

/// Normalized y thresholds separating the edge bands from the middle band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBounds {
    pub top_edge: f64,
    pub bottom_edge: f64,
}

impl Default for ZoneBounds {
    fn default() -> Self {
        Self {
            top_edge: 0.15,
            bottom_edge: 0.85,
        }
    }
}

impl ZoneBounds {
    /// Classifies a normalized y coordinate. Thresholds themselves belong to
    /// the middle band.
    #[must_use]
    pub fn classify(self, y: f64) -> ScreenZone {
        if y < self.top_edge {
            ScreenZone::Top
        } else if y > self.bottom_edge {
            ScreenZone::Bottom
        } else {
            ScreenZone::Middle
        }
    }

    /// Depth past the edge threshold in `[0, 1]`, where `1` is the screen edge.
    #[must_use]
    pub fn penetration(self, y: f64) -> f64 {
        let depth = match self.classify(y) {
            ScreenZone::Top if self.top_edge > 0.0 => (self.top_edge - y) / self.top_edge,
            ScreenZone::Bottom if self.bottom_edge < 1.0 => {
                (y - self.bottom_edge) / (1.0 - self.bottom_edge)
            }
            _ => 0.0,
        };
        depth.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScreenZone, ZoneBounds};

    #[test]
    fn thresholds_belong_to_middle_band() {
        let bounds = ZoneBounds::default();
        assert_eq!(bounds.classify(0.15), ScreenZone::Middle);
        assert_eq!(bounds.classify(0.85), ScreenZone::Middle);
        assert_eq!(bounds.classify(0.1499), ScreenZone::Top);
        assert_eq!(bounds.classify(0.8501), ScreenZone::Bottom);
    }

    #[test]
    fn penetration_grows_towards_screen_edge() {
        let bounds = ZoneBounds::default();
        assert!(bounds.penetration(0.5).abs() <= 1e-12);
        assert!((bounds.penetration(0.0) - 1.0).abs() <= 1e-12);
        assert!((bounds.penetration(1.0) - 1.0).abs() <= 1e-12);
        assert!((bounds.penetration(0.075) - 0.5).abs() <= 1e-9);
    }
}
