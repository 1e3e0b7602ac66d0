//! Injected cache of image aspect ratios.
//!
//! Character images are drawn at the pixel height the grid assigns them; the
//! width follows from the image's aspect ratio. Ratios are looked up by image
//! URL. The cache is an ordinary value owned by the caller, so tests and
//! independent charts never share state.

use parking_lot::RwLock;
use std::collections::HashMap;

use crate::error::{HeightError, HeightResult};

/// Width / height used when an image has not been measured yet.
pub const DEFAULT_ASPECT_RATIO: f64 = 0.5;

/// Thread-safe map from image URL to width / height ratio.
#[derive(Debug, Default)]
pub struct AspectRatioCache {
    entries: RwLock<HashMap<String, f64>>,
}

impl AspectRatioCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<f64> {
        self.entries.read().get(url).copied()
    }

    /// Record the aspect ratio for `url`.
    ///
    /// # Errors
    /// * `InvalidMagnitude` if `ratio` is not a positive finite number
    pub fn set(&self, url: impl Into<String>, ratio: f64) -> HeightResult<()> {
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(HeightError::invalid("AspectRatioCache::set", ratio));
        }
        self.entries.write().insert(url.into(), ratio);
        Ok(())
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drawn width for an image of `url` that is `pixel_height` tall.
    pub fn width_for_height(&self, url: &str, pixel_height: f64) -> f64 {
        let ratio = self.get(url).unwrap_or_else(|| {
            log::debug!("No aspect ratio cached for {}, using default", url);
            DEFAULT_ASPECT_RATIO
        });
        pixel_height * ratio
    }
}
