use std::sync::Arc;

use iced::{Application, Program as IcedProgram, Settings, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the Folio application using the provided configuration.
pub fn application(
    config: AppConfig,
) -> Application<impl IcedProgram<State = State, Message = Message, Theme = Theme>>
{
    let window_size = config.window_size();
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title(app_title)
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: window_size,
        min_size: Some(iced::Size::new(360.0, 480.0)),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("folio-player".to_string());
    settings.antialiasing = true;
    settings
}

fn app_title(state: &State) -> String {
    let name = state.catalog.profile.name.trim();
    if name.is_empty() {
        "Folio".to_string()
    } else {
        format!("{name} | Portfolio")
    }
}

fn app_theme(state: &State) -> Theme {
    crate::theme::FolioTheme::for_mood(state.mood())
}
