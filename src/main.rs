use clap::Parser;
use env_logger::Env;
use log::error;

use pitstop_bot::bot::Bot;
use pitstop_bot::client::WebSocketGameClient;
use pitstop_bot::walker::Walker;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Websocket URI of the game server.
    #[arg(long, default_value = "ws://127.0.0.1:8765")]
    uri: String,

    /// How many meters the avatar walks per server tick.
    #[arg(long, default_value_t = 8.0)]
    step_meters: f64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    // Init logger with default value of info
    // This can be overriden with RUST_LOG env var
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let bot = Bot::new(Walker::new(cli.step_meters));
    let token = dotenvy::var("TOKEN");

    if let Err(err) = WebSocketGameClient::new(bot, cli.uri, token.ok()).run().await {
        error!("Error while running bot with underlying error:");
        error!("  {}", err);
    }
}
