use log::info;
use std::time::Instant;
use thiserror::Error;

use crate::game_interface::{Action, GameUpdate};
use crate::router::{PathUpdate, StopRouter};
use crate::walker::Walker;

#[derive(Error, Debug)]
pub enum Error {
    /// The caller resolves the avatar position before asking us to move.
    #[error("Game update carried no player position")]
    MissingPosition,
}

pub struct Bot {
    router: StopRouter,
    walker: Walker,
}

impl Bot {
    pub fn new(walker: Walker) -> Self {
        info!("Initializing bot");
        Bot {
            router: StopRouter::new(),
            walker,
        }
    }

    /// Decide the action for the current game update.
    pub fn get_next_move(&mut self, update: &GameUpdate) -> Result<Action, Error> {
        let start = Instant::now();
        let pos = update.player.position.ok_or(Error::MissingPosition)?;
        info!("Tick {tick}, pos: {pos:?}", tick = update.tick);

        // An empty path with a target still set means we reached that stop
        // last tick; answer with the pitstop interaction before moving on.
        let arrived = if self.router.waypoints().is_empty() {
            self.router.target().map(|t| t.id.clone())
        } else {
            None
        };

        match self.router.check_path(&pos, update.map.as_ref()) {
            PathUpdate::NewPath(waypoints) => {
                if let Some(target) = self.router.target() {
                    info!("[ROUTER] Heading to stop {id} through {n} waypoint(s)",
                          id = target.id, n = waypoints.len());
                }
            }
            PathUpdate::Idle => {
                info!("[ROUTER] No farmable stop right now. Holding position.");
            }
            PathUpdate::Unchanged => {}
        }

        let action = if let Some(id) = arrived {
            info!("[ROUTER] Arrived at stop {id} ({seen} visited this session)",
                  seen = self.router.visited().len());
            Action::UsePitstop { id }
        } else {
            match self.walker.advance(&pos, self.router.waypoints_mut()) {
                Some(position) => Action::Move { position },
                None => Action::Idle,
            }
        };

        info!("Tick overall time: {:?}", start.elapsed());
        Ok(action)
    }
}
