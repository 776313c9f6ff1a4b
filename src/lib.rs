pub mod bot;
pub mod client;
pub mod game_interface;
pub mod geo;
pub mod router;
pub mod walker;
