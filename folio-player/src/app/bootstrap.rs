use std::sync::Arc;

use anyhow::Context;
use folio_config::{ConfigSource, FileMoodStore, FolioConfig, loader};
use folio_core::motion::LOADING_SCREEN;
use folio_core::{
    CarouselController, Catalog, ContactSubmitter, MemoryMoodStore,
    MoodPreference, MoodStore, ViewportClassifier, Web3FormsClient,
};
use iced::{Size, Task};
use url::Url;

use crate::messages::Message;
use crate::state::{PortfolioState, State};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub config: FolioConfig,
    pub source: ConfigSource,
    pub catalog: Arc<Catalog>,
    pub mood_store: Arc<dyn MoodStore>,
    pub submitter: Option<Arc<dyn ContactSubmitter>>,
}

impl AppConfig {
    /// Configuration with an explicit catalog, an in-memory mood store and no
    /// contact delivery.
    pub fn new(config: FolioConfig, catalog: Catalog) -> Self {
        Self {
            config,
            source: ConfigSource::Default,
            catalog: Arc::new(catalog),
            mood_store: Arc::new(MemoryMoodStore::new()),
            submitter: None,
        }
    }

    /// Load configuration, content and stores from the environment.
    pub fn from_environment() -> anyhow::Result<Self> {
        let load = loader::load_from_env()?;
        let config = load.config;

        let catalog = match &config.content_path {
            Some(path) => Catalog::load(path).with_context(|| {
                format!("failed to load content from {}", path.display())
            })?,
            None => Catalog::bundled().context("bundled content is invalid")?,
        };

        let submitter = build_submitter(&config)?;

        Ok(Self {
            source: load.source,
            catalog: Arc::new(catalog),
            mood_store: platform_mood_store(),
            submitter,
            config,
        })
    }

    /// Built-in defaults, used when the environment cannot be loaded.
    pub fn fallback() -> Self {
        let config = FolioConfig::default();
        let catalog = Catalog::bundled().unwrap_or_else(|err| {
            log::error!("Bundled content failed to load: {}", err);
            Catalog::default()
        });
        let submitter = build_submitter(&config).unwrap_or_else(|err| {
            log::error!("Contact form disabled: {:#}", err);
            None
        });

        Self {
            mood_store: platform_mood_store(),
            submitter,
            ..Self::new(config, catalog)
        }
    }

    pub fn with_mood_store(mut self, store: Arc<dyn MoodStore>) -> Self {
        self.mood_store = store;
        self
    }

    pub fn with_submitter(mut self, submitter: Arc<dyn ContactSubmitter>) -> Self {
        self.submitter = Some(submitter);
        self
    }

    pub fn window_size(&self) -> Size {
        Size::new(self.config.window.width, self.config.window.height)
    }
}

fn build_submitter(
    config: &FolioConfig,
) -> anyhow::Result<Option<Arc<dyn ContactSubmitter>>> {
    let endpoint = Url::parse(&config.contact.endpoint)
        .with_context(|| format!("invalid contact endpoint {}", config.contact.endpoint))?;
    let access_key = config.contact.access_key().unwrap_or_default();
    if access_key.is_empty() {
        log::warn!(
            "No contact access key configured; set FOLIO_CONTACT_ACCESS_KEY to enable the contact form"
        );
    }

    let client =
        Web3FormsClient::new(endpoint, access_key, config.contact.timeout())
            .context("failed to build contact client")?;
    Ok(Some(Arc::new(client)))
}

fn platform_mood_store() -> Arc<dyn MoodStore> {
    match FileMoodStore::new() {
        Ok(store) => {
            log::debug!("Mood preference stored at {}", store.path().display());
            Arc::new(store)
        }
        Err(err) => {
            log::warn!("{}; mood preference will not persist", err);
            Arc::new(MemoryMoodStore::new())
        }
    }
}

/// Boot logic shared by the runtime and the tests.
pub fn base_state(config: &AppConfig) -> State {
    let window_size = config.window_size();

    let mut viewport = ViewportClassifier::new(config.config.viewport);
    let items_per_page = viewport.observe(window_size.width).unwrap_or_default();

    let controller = CarouselController::new(
        config.catalog.projects.len(),
        items_per_page,
        config.config.carousel.timings(),
    );
    let portfolio = PortfolioState::new(controller, window_size.width);
    let mood = MoodPreference::load(Arc::clone(&config.mood_store));

    State::new(
        Arc::clone(&config.catalog),
        mood,
        portfolio,
        viewport,
        config.submitter.clone(),
        window_size,
    )
}

/// Boot logic for the running application, returning the initial state and
/// the loading-screen timer.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    log::info!("Starting Folio with configuration from {}", config.source);
    let state = base_state(config);

    let loading = Task::perform(tokio::time::sleep(LOADING_SCREEN), |_| {
        Message::LoadingFinished
    });

    (state, loading)
}
