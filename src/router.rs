use itertools::Itertools;
use log::debug;

use crate::game_interface::{BuildingKind, MapSnapshot};
use crate::geo::{self, LatLng};

/// Stops within this range are pathed to directly; anything farther first
/// gets an intermediate approach waypoint.
const DIRECT_RADIUS_M: u32 = 10;

// Fraction of the way to the target where the approach waypoint sits.
const APPROACH_FRACTION: f64 = 0.5;

/// The stop currently being pursued. Replaced whole on re-selection, never
/// mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: String,
    pub pos: LatLng,
}

/// Outcome of a routing tick.
#[derive(Debug, Clone, PartialEq)]
pub enum PathUpdate {
    /// The active path still has waypoints left; keep following it.
    Unchanged,
    /// A new target was picked; follow this path instead.
    NewPath(Vec<LatLng>),
    /// No eligible stop right now. Nothing to follow.
    Idle,
}

#[derive(Debug, Default)]
struct NavigationState {
    // Stop ids already reached, in arrival order. Never pruned in a session.
    visited: Vec<String>,
    target: Option<Target>,
    waypoints: Vec<LatLng>,
}

impl NavigationState {
    fn record_visit(&mut self, id: String) {
        // A double-reported arrival must not show up twice.
        if !self.visited.contains(&id) {
            self.visited.push(id);
        }
    }
}

/// Greedy routing policy: always head for the nearest farmable stop that
/// hasn't been visited this session.
///
/// Driven once per tick by the caller, which supplies the avatar position
/// and the latest map snapshot. The router owns its navigation state; the
/// snapshot is only ever read.
#[derive(Debug, Default)]
pub struct StopRouter {
    state: NavigationState,
}

impl StopRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<&Target> {
        self.state.target.as_ref()
    }

    pub fn visited(&self) -> &[String] {
        &self.state.visited
    }

    pub fn waypoints(&self) -> &[LatLng] {
        &self.state.waypoints
    }

    /// The active path. The movement executor pops waypoints off the front
    /// as it reaches them; the router only ever replaces the list whole.
    pub fn waypoints_mut(&mut self) -> &mut Vec<LatLng> {
        &mut self.state.waypoints
    }

    /// Per-tick entry point. An empty waypoint list with a target still set
    /// means the executor drained the path, i.e. we arrived; the caller is
    /// trusted on that signal, proximity is not re-checked.
    pub fn check_path(&mut self, pos: &LatLng, map: Option<&MapSnapshot>) -> PathUpdate {
        if !self.state.waypoints.is_empty() {
            return PathUpdate::Unchanged;
        }
        if let Some(target) = self.state.target.take() {
            self.state.record_visit(target.id);
        }
        match self.generate_path(pos, map) {
            Some(waypoints) => PathUpdate::NewPath(waypoints),
            None => PathUpdate::Idle,
        }
    }

    /// Pick a new target and materialize the path to it. Overwrites the
    /// previous target even when nothing is eligible, so a None here always
    /// leaves the router idle (no target, no waypoints).
    pub fn generate_path(&mut self, pos: &LatLng, map: Option<&MapSnapshot>) -> Option<Vec<LatLng>> {
        debug!("Get new path.");

        self.state.target = self.find_next_target(pos, map);
        match &self.state.target {
            Some(target) => {
                if geo::distance_m(pos, &target.pos) > DIRECT_RADIUS_M {
                    let approach = geo::lerp(pos, &target.pos, APPROACH_FRACTION);
                    self.state.waypoints = vec![approach, target.pos];
                } else {
                    self.state.waypoints = vec![target.pos];
                }
                Some(self.state.waypoints.clone())
            }
            None => {
                self.state.waypoints.clear();
                None
            }
        }
    }

    /// Nearest stop that is farmable right now: available, has a pitstop
    /// that is off cooldown, and hasn't been visited this session.
    pub fn find_next_target(&self, pos: &LatLng, map: Option<&MapSnapshot>) -> Option<Target> {
        let map = map?;
        map.buildings
            .iter()
            .filter(|b| {
                b.kind == BuildingKind::Stop
                    && b.available
                    && b.pitstop.as_ref().map_or(false, |p| !p.cooldown)
                    && !self.state.visited.contains(&b.id)
            })
            // sorted_by_key is stable: equally distant stops keep map order.
            .sorted_by_key(|b| geo::distance_m(pos, &b.coords))
            .next()
            .map(|b| Target { id: b.id.clone(), pos: b.coords })
    }
}
