use crate::geo::{self, LatLng};

/// Movement executor: walks the avatar along the routed waypoints, a bounded
/// number of meters per tick.
pub struct Walker {
    step_m: f64,
}

impl Walker {
    pub fn new(step_m: f64) -> Self {
        Walker { step_m }
    }

    /// Advance up to `step_m` meters along the waypoint list, consuming
    /// reached waypoints from the front. Returns the new avatar position,
    /// or None when there is nothing left to walk.
    pub fn advance(&self, pos: &LatLng, waypoints: &mut Vec<LatLng>) -> Option<LatLng> {
        if waypoints.is_empty() {
            return None;
        }
        let mut here = *pos;
        let mut budget = self.step_m;
        while let Some(next) = waypoints.first().copied() {
            let dist = geo::distance_m(&here, &next) as f64;
            if dist <= budget {
                here = next;
                budget -= dist;
                waypoints.remove(0);
            } else {
                here = geo::lerp(&here, &next, budget / dist);
                break;
            }
        }
        Some(here)
    }
}
