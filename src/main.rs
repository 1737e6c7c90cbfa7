use checker::check_all;
use config::Config;

use logger::init_default_logger;

mod balance;
mod checker;
mod config;
mod constants;
mod logger;
mod utils;
mod xp;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let _guard = init_default_logger();

    let config = Config::read_default().await;

    check_all(config).await
}
