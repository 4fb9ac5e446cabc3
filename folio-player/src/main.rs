use folio_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio_player", LevelFilter::Debug)
        .filter_module("folio_core", LevelFilter::Info)
        .filter_module("folio_config", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::warn!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::init();
    }

    let config = match AppConfig::from_environment() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err:#}");
            log::warn!("Falling back to built-in configuration");
            AppConfig::fallback()
        }
    };

    app::application(config).run()
}
