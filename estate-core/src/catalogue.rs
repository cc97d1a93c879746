//! Project catalogue loading.
//!
//! A catalogue is a TOML document with one `[[project]]` table per slide:
//!
//! ```toml
//! [[project]]
//! title = "Skyline"
//! price = "$250,000"
//! location = "Cape Town"
//! image = "assets/project_img_1.jpg"
//! ```

use std::{fs, path::Path};

use estate_model::{Slide, SlideSet};
use serde::Deserialize;

use crate::error::{CoreError, Result};

#[derive(Debug, Default, Deserialize)]
struct CatalogueDocument {
    #[serde(default, rename = "project")]
    projects: Vec<Slide>,
}

/// Parse a catalogue document. An empty document is a valid empty set.
pub fn parse_slides(contents: &str) -> Result<SlideSet> {
    let document: CatalogueDocument = toml::from_str(contents)?;
    let slides = SlideSet::new(document.projects)?;
    log::debug!("Parsed catalogue with {} projects", slides.len());
    Ok(slides)
}

pub fn load_slides(path: &Path) -> Result<SlideSet> {
    let contents =
        fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_slides(&contents)
}
