use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use estate_core::CarouselConfig;
use estate_core::catalogue::{load_slides, parse_slides};
use estate_core::config::ConfigSource;
use estate_model::SlideSet;
use iced::{Size, Task};

use crate::constants::layout;
use crate::messages::Message;
use crate::state::State;

/// Environment variable naming a project catalogue to show instead of the
/// bundled one.
pub const CATALOGUE_PATH_ENV: &str = "ESTATE_SITE_CATALOGUE";

const BUNDLED_CATALOGUE: &str = include_str!("../../assets/projects.toml");

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub carousel: CarouselConfig,
    pub config_source: ConfigSource,
    pub slides: SlideSet,
    /// Directory relative image paths in the catalogue resolve against.
    pub asset_root: Arc<Path>,
}

impl AppConfig {
    pub fn new(carousel: CarouselConfig, slides: SlideSet) -> Self {
        Self {
            carousel,
            config_source: ConfigSource::Default,
            slides,
            asset_root: Arc::from(bundled_asset_root()),
        }
    }

    /// Load optional overrides from the environment. Files that fail to load
    /// are logged and replaced by the bundled defaults.
    pub fn from_environment() -> Self {
        let (carousel, config_source) = match CarouselConfig::load_from_env() {
            Ok(loaded) => loaded,
            Err(err) => {
                log::warn!(
                    "Failed to load carousel config, using defaults: {err}"
                );
                (CarouselConfig::default(), ConfigSource::Default)
            }
        };

        let catalogue_path = std::env::var(CATALOGUE_PATH_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let (slides, asset_root) = match catalogue_path {
            Some(path) => match load_catalogue(&path) {
                Ok(slides) => {
                    let root = path
                        .parent()
                        .map(Path::to_path_buf)
                        .unwrap_or_default();
                    (slides, root)
                }
                Err(err) => {
                    log::warn!("{err:#}; falling back to the bundled catalogue");
                    (bundled_catalogue(), bundled_asset_root())
                }
            },
            None => (bundled_catalogue(), bundled_asset_root()),
        };

        Self {
            carousel,
            config_source,
            slides,
            asset_root: Arc::from(asset_root),
        }
    }
}

fn load_catalogue(path: &Path) -> anyhow::Result<SlideSet> {
    load_slides(path).with_context(|| {
        format!("Failed to load project catalogue {}", path.display())
    })
}

fn bundled_catalogue() -> SlideSet {
    match parse_slides(BUNDLED_CATALOGUE) {
        Ok(slides) => slides,
        Err(err) => {
            log::warn!("Bundled catalogue is invalid, showing no projects: {err}");
            SlideSet::empty()
        }
    }
}

fn bundled_asset_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Initial state for the runtime application.
pub fn runtime_boot(config: &AppConfig) -> (State, Task<Message>) {
    log::info!(
        "Booting with {} projects (config: {:?})",
        config.slides.len(),
        config.config_source
    );
    let state = State::new(
        config.slides.clone(),
        config.carousel.clone(),
        Size::new(layout::WINDOW_WIDTH, layout::WINDOW_HEIGHT),
        config.asset_root.to_path_buf(),
    );
    (state, Task::none())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalogue_parses() {
        let slides = parse_slides(BUNDLED_CATALOGUE).expect("bundled catalogue");
        assert_eq!(slides.len(), 6);
        let root = bundled_asset_root();
        for slide in &slides {
            let path = root.join(slide.image.as_str());
            assert!(path.is_file(), "missing bundled image {}", path.display());
        }
        assert_eq!(
            slides.get(0).map(|slide| slide.title.as_str()),
            Some("Skyline Haven")
        );
    }

    #[test]
    fn boot_mounts_the_carousel_at_the_first_project() {
        let config =
            AppConfig::new(CarouselConfig::default(), bundled_catalogue());
        let (state, _) = runtime_boot(&config);
        assert_eq!(state.carousel.current_index(), 0);
        assert_eq!(state.carousel.visible_count(), 4);
        assert_eq!(state.carousel.max_index(), 2);
    }

    #[test]
    fn unreadable_catalogue_names_the_file() {
        let err = load_catalogue(Path::new("/missing/projects.toml"))
            .expect_err("missing catalogue");
        assert!(format!("{err:#}").contains("/missing/projects.toml"));
    }
}
