use std::path::{Path, PathBuf};

use estate_core::{CarouselConfig, CarouselController};
use estate_model::{Slide, SlideSet};
use iced::Size;
use iced::widget::{Id as ScrollableId, scrollable::AbsoluteOffset};

use crate::constants;

#[derive(Debug)]
pub struct State {
    pub slides: SlideSet,
    pub carousel: CarouselController,
    pub window_size: Size,
    /// Last cursor x over the strip, relative to the strip's bounds.
    pub cursor_x: Option<f32>,
    pub strip_id: ScrollableId,
    /// Directory image references are resolved against.
    pub asset_root: PathBuf,
}

impl State {
    pub fn new(
        slides: SlideSet,
        config: CarouselConfig,
        window_size: Size,
        asset_root: PathBuf,
    ) -> Self {
        let carousel =
            CarouselController::new(slides.len(), config, window_size.width);
        Self {
            slides,
            carousel,
            window_size,
            cursor_x: None,
            strip_id: ScrollableId::unique(),
            asset_root,
        }
    }

    /// Width of the strip the translation percentage refers to.
    pub fn track_width(&self) -> f32 {
        constants::track_width(self.window_size.width)
    }

    /// Width of one slide slot.
    pub fn slot_width(&self) -> f32 {
        self.track_width() / self.carousel.visible_count() as f32
    }

    /// Horizontal scroll matching the translation currently applied to the
    /// strip. Translations past the first slide clamp to 0.
    pub fn strip_offset(&self) -> AbsoluteOffset {
        let applied = self.carousel.surface().applied();
        AbsoluteOffset {
            x: (-applied / 100.0 * self.track_width()).max(0.0),
            y: 0.0,
        }
    }

    /// Whether a reported scroll offset has moved away from the carousel's
    /// translation by more than half a pixel.
    pub fn strip_drifted(&self, offset_x: f32) -> bool {
        (offset_x - self.strip_offset().x).abs() > 0.5
    }

    pub fn image_path(&self, slide: &Slide) -> PathBuf {
        resolve_asset(&self.asset_root, slide.image.as_str())
    }
}

fn resolve_asset(root: &Path, reference: &str) -> PathBuf {
    let path = Path::new(reference);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
