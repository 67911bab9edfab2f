//! 2-D rendering module
//!
//! Drawing goes through [`RasterSurface`] so the starfield can be drawn onto
//! a browser canvas or recorded in tests.

#[cfg(target_arch = "wasm32")]
mod canvas;
pub mod starfield;

use glam::Vec2;

use crate::error::Result;

pub use starfield::{STAR_RGB, draw_starfield, render_frame};

/// Minimal raster target for the backdrop
pub trait RasterSurface {
    /// Erase the whole surface
    fn clear(&mut self, width: f64, height: f64) -> Result<()>;

    /// Fill the surface with a top-to-bottom gradient; stops are (offset, css color)
    fn fill_vertical_gradient(&mut self, width: f64, height: f64, stops: &[(f64, &str)]) -> Result<()>;

    /// Fill a circle with a solid color at the given opacity
    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) -> Result<()>;
}

/// CSS color string for an rgb triple and opacity
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", rgb[0], rgb[1], rgb[2], alpha)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// One recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Clear { width: f64, height: f64 },
        Gradient { height: f64, stops: Vec<(f64, String)> },
        Circle { center: Vec2, radius: f32, alpha: f32 },
    }

    /// Surface that remembers what was drawn
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<DrawOp>,
    }

    impl RasterSurface for RecordingSurface {
        fn clear(&mut self, width: f64, height: f64) -> Result<()> {
            self.ops.push(DrawOp::Clear { width, height });
            Ok(())
        }

        fn fill_vertical_gradient(&mut self, _width: f64, height: f64, stops: &[(f64, &str)]) -> Result<()> {
            self.ops.push(DrawOp::Gradient {
                height,
                stops: stops.iter().map(|(o, c)| (*o, c.to_string())).collect(),
            });
            Ok(())
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, _rgb: [u8; 3], alpha: f32) -> Result<()> {
            self.ops.push(DrawOp::Circle { center, radius, alpha });
            Ok(())
        }
    }
}
