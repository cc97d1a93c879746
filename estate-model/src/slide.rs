//! Project slides shown by the carousel.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Reference to an image asset, usually a path relative to the asset root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// One carousel item: a completed project.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slide {
    pub image: ImageRef,
    pub title: String,
    pub price: String,
    pub location: String,
}

impl Slide {
    pub const UNTITLED: &'static str = "Estate du Oud project";

    pub fn new(
        image: impl Into<ImageRef>,
        title: impl Into<String>,
        price: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            price: price.into(),
            location: location.into(),
        }
    }

    /// Title shown on the card. Untitled projects get a generic label.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            Slide::UNTITLED
        } else {
            title
        }
    }

    /// Secondary card line, e.g. `"$250,000 | Cape Town"`.
    pub fn caption(&self) -> String {
        format!("{} | {}", self.price, self.location)
    }
}

/// Immutable ordered sequence of slides. Cloning shares the backing storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideSet {
    slides: Arc<[Slide]>,
}

impl SlideSet {
    /// Build a set, rejecting slides without an image.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if let Some(index) = slides.iter().position(|slide| slide.image.is_empty())
        {
            return Err(ModelError::EmptyField {
                index,
                field: "image",
            });
        }
        Ok(Self {
            slides: slides.into(),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    pub fn as_slice(&self) -> &[Slide] {
        &self.slides
    }

    /// Index range of `count` slides starting at `start`, clamped to the set.
    pub fn window_range(&self, start: usize, count: usize) -> Range<usize> {
        let start = start.min(self.len());
        let end = start.saturating_add(count).min(self.len());
        start..end
    }

    /// Slides inside the window starting at `start`. Never panics.
    pub fn window(&self, start: usize, count: usize) -> &[Slide] {
        &self.slides[self.window_range(start, count)]
    }
}

impl<'a> IntoIterator for &'a SlideSet {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
