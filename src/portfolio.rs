//! Composition root.
//!
//! [`Portfolio`] builds the gateway and the preference store exactly once
//! and hands them to every consumer. Nothing in the crate reaches for a
//! global client or a global theme.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::adapters::{EnvHostPreference, FileStore, ReqwestHttpClient, StoredCredentials};
use crate::config::ClientConfig;
use crate::content::about::{extract_about, ABOUT_ENDPOINT};
use crate::content::home::{extract_home, HOME_ENDPOINT};
use crate::content::projects::{extract_projects, PROJECTS_ENDPOINT};
use crate::content::skills::{extract_skills, SKILLS_ENDPOINT};
use crate::content::{
    AboutContent, ContactForm, ContactSubmission, HeroContent, Project, Skill, SubmissionStatus,
};
use crate::error::{ConfigError, FolioResult};
use crate::gateway::GatewayClient;
use crate::hydrate::{hydrate, Hydrated, HydrationTask};
use crate::preferences::PreferenceStore;
use crate::traits::{CredentialsProvider, HostPreference, HttpClient, KeyValueStore};
use crate::view_state::{Carousel, CarouselState};

/// Every fetched section after hydration.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSnapshot {
    pub home: Hydrated<HeroContent>,
    pub about: Hydrated<AboutContent>,
    pub skills: Hydrated<Vec<Skill>>,
    pub projects: Hydrated<Vec<Project>>,
}

impl PortfolioSnapshot {
    /// Whether any section is still waiting on its fetch.
    pub fn is_loading(&self) -> bool {
        self.home.is_loading
            || self.about.is_loading
            || self.skills.is_loading
            || self.projects.is_loading
    }
}

/// Hero subtitles rotating while the home section hydrates.
///
/// The carousel starts on the default subtitles. When the hydration
/// resolves, its subtitles replace the list and the index restarts at 0.
pub struct HeroCarousel {
    carousel: Carousel,
    hydration: HydrationTask<HeroContent>,
    forward: JoinHandle<()>,
}

impl HeroCarousel {
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Current hero state; `is_loading` until the fetch resolves.
    pub fn hero(&self) -> Hydrated<HeroContent> {
        self.hydration.current()
    }

    /// Wait for the home section to resolve.
    pub async fn hydrated(&self) -> Hydrated<HeroContent> {
        self.hydration.finished().await
    }

    /// Stop the ticker and drop any pending hydration.
    pub fn stop(&self) {
        self.forward.abort();
        self.hydration.cancel();
        self.carousel.stop();
    }
}

impl Drop for HeroCarousel {
    fn drop(&mut self) {
        self.forward.abort();
    }
}

pub struct Portfolio {
    config: ClientConfig,
    gateway: GatewayClient,
    credentials: Arc<dyn CredentialsProvider>,
    preferences: PreferenceStore,
}

impl Portfolio {
    /// Wire the client from explicit collaborators.
    pub fn new(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        store: Arc<dyn KeyValueStore>,
        host: &dyn HostPreference,
    ) -> Self {
        let credentials: Arc<dyn CredentialsProvider> =
            Arc::new(StoredCredentials::new(store.clone()));
        let gateway = GatewayClient::new(http, credentials.clone(), config.base_url.as_str());
        let preferences = PreferenceStore::initialize(store, host);

        Self {
            config,
            gateway,
            credentials,
            preferences,
        }
    }

    /// Wire the production adapters: reqwest, `storage.json`, environment
    /// colour scheme.
    pub fn from_config(config: ClientConfig) -> FolioResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout).map_err(|e| {
            ConfigError::Transport {
                message: e.to_string(),
            }
        })?;
        let store = match &config.storage_dir {
            Some(dir) => FileStore::in_dir(dir),
            None => FileStore::new()?,
        };
        info!(
            base_url = %config.base_url,
            storage = %store.path().display(),
            "Portfolio client configured"
        );

        Ok(Self::new(
            config,
            Arc::new(http),
            Arc::new(store),
            &EnvHostPreference::new(),
        ))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn gateway(&self) -> &GatewayClient {
        &self.gateway
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    /// Hydrate every fetched section concurrently.
    pub async fn hydrate_all(&self) -> PortfolioSnapshot {
        let (home, about, skills, projects) = futures::join!(
            hydrate(&self.gateway, HOME_ENDPOINT, HeroContent::default(), extract_home),
            hydrate(&self.gateway, ABOUT_ENDPOINT, AboutContent::default(), extract_about),
            hydrate(&self.gateway, SKILLS_ENDPOINT, Vec::new(), extract_skills),
            hydrate(&self.gateway, PROJECTS_ENDPOINT, Vec::new(), extract_projects),
        );

        PortfolioSnapshot {
            home,
            about,
            skills,
            projects,
        }
    }

    /// Hydrate the hero section on its own task.
    pub fn spawn_home(&self) -> HydrationTask<HeroContent> {
        HydrationTask::spawn(
            self.gateway.clone(),
            HOME_ENDPOINT,
            HeroContent::default(),
            extract_home,
        )
    }

    /// Start rotating the hero subtitles at the configured period.
    pub fn start_carousel(&self, hero: &HeroContent) -> Option<Carousel> {
        CarouselState::new(hero.subtitles.clone())
            .map(|state| Carousel::start(state, self.config.carousel_period))
    }

    /// Start the hero carousel on the default subtitles and hydrate the
    /// home section behind it.
    pub fn start_hero(&self) -> Option<HeroCarousel> {
        let carousel = self.start_carousel(&HeroContent::default())?;
        let hydration = self.spawn_home();

        let mut hero_rx = hydration.subscribe();
        let replacer = carousel.replacer();
        let forward = tokio::spawn(async move {
            loop {
                let resolved = {
                    let hero = hero_rx.borrow_and_update();
                    (!hero.is_loading).then(|| hero.value.subtitles.clone())
                };
                if let Some(subtitles) = resolved {
                    replacer.replace(subtitles);
                    break;
                }
                if hero_rx.changed().await.is_err() {
                    debug!("Home hydration dropped before resolving");
                    break;
                }
            }
        });

        Some(HeroCarousel {
            carousel,
            hydration,
            forward,
        })
    }

    /// Validate and send a contact message.
    pub async fn send_contact(&self, form: ContactForm) -> SubmissionStatus {
        let mut submission = ContactSubmission::new(form);
        submission.submit(&self.gateway).await.clone()
    }

    /// Delete the stored credential.
    pub async fn logout(&self) -> FolioResult<()> {
        self.credentials.clear().await?;
        info!("Stored credential cleared");
        Ok(())
    }

    /// Whether a credential is stored.
    pub async fn is_signed_in(&self) -> FolioResult<bool> {
        Ok(self.credentials.load().await?.is_some())
    }
}

impl std::fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portfolio")
            .field("config", &self.config)
            .field("gateway", &self.gateway)
            .field("theme", &self.preferences.current())
            .finish_non_exhaustive()
    }
}
