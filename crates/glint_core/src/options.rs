//! Render options.

use glint_math::Color;
use serde::{Deserialize, Serialize};

/// Primary rays per pixel on the fixed antialiasing grid.
pub const GRID_RAYS_PER_PIXEL: u32 = 4;

/// Settings that stay fixed for a whole render.
///
/// Every field has a default, so a scene file may give any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// World-space size of one pixel on the image plane
    pub pixel_size: f64,
    /// Bounces before recursion stops and the background is returned
    pub max_depth: u32,
    /// Primary rays per pixel when jittered antialiasing is on
    pub samples_per_pixel: u32,
    /// Random light-disk samples per shading point (the center ray is always added)
    pub shadow_samples: u32,
    /// Random sub-pixel offsets instead of the fixed 2x2 grid
    pub jitter_antialiasing: bool,
    /// Sky color returned for rays that escape the scene
    pub background: Color,
    /// Base seed for the per-row random generators
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            pixel_size: 0.004,
            max_depth: 4,
            samples_per_pixel: 4,
            shadow_samples: 1,
            jitter_antialiasing: false,
            background: Color::new(0.7, 0.8, 1.0),
            seed: 0,
        }
    }
}

impl RenderOptions {
    /// Number of primary rays traced for every pixel.
    pub fn rays_per_pixel(&self) -> u32 {
        if self.jitter_antialiasing {
            self.samples_per_pixel
        } else {
            GRID_RAYS_PER_PIXEL
        }
    }
}
