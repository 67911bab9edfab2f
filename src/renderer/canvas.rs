//! `RasterSurface` for the browser's 2-D canvas context

use glam::Vec2;
use std::f64::consts::TAU;
use web_sys::CanvasRenderingContext2d;

use super::{RasterSurface, rgba};
use crate::error::Result;

impl RasterSurface for CanvasRenderingContext2d {
    fn clear(&mut self, width: f64, height: f64) -> Result<()> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_vertical_gradient(&mut self, width: f64, height: f64, stops: &[(f64, &str)]) -> Result<()> {
        let gradient = self.create_linear_gradient(0.0, 0.0, 0.0, height);
        for (offset, color) in stops {
            gradient.add_color_stop(*offset as f32, color)?;
        }
        self.set_fill_style_canvas_gradient(&gradient);
        self.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, rgb: [u8; 3], alpha: f32) -> Result<()> {
        self.begin_path();
        self.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        self.set_fill_style_str(&rgba(rgb, alpha));
        self.fill();
        Ok(())
    }
}
