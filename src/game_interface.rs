use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

#[derive(Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildingKind {
    Stop,
    Arena,
    Portal,
    Obelisk,
    /// Kinds the server added after this client was written.
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pitstop {
    pub cooldown: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: BuildingKind,
    pub available: bool,
    pub coords: LatLng,
    /// Only present on buildings the avatar can farm.
    pub pitstop: Option<Pitstop>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MapSnapshot {
    pub buildings: Vec<Building>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// None until the avatar has spawned.
    pub position: Option<LatLng>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdate {
    pub tick: u32,
    pub player: Player,
    /// The server omits the map until the first chunk is streamed in.
    pub map: Option<MapSnapshot>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    Move { position: LatLng },
    UsePitstop { id: String },
    Idle,
}
