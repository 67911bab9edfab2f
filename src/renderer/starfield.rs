//! Starfield drawing

use super::RasterSurface;
use crate::consts::SKY_GRADIENT;
use crate::error::Result;
use crate::sim::Starfield;

/// Stars are plain white; only their opacity changes
pub const STAR_RGB: [u8; 3] = [255, 255, 255];

/// Paint the sky and every star at its current position and opacity
pub fn draw_starfield<S: RasterSurface>(surface: &mut S, field: &Starfield) -> Result<()> {
    let (w, h) = field.size();
    let (w, h) = (w as f64, h as f64);

    surface.clear(w, h)?;
    surface.fill_vertical_gradient(w, h, &SKY_GRADIENT)?;

    for star in field.stars() {
        surface.fill_circle(star.pos, star.size, STAR_RGB, star.opacity())?;
    }
    Ok(())
}

/// One animation frame: advance the stars, then draw them
pub fn render_frame<S: RasterSurface>(surface: &mut S, field: &mut Starfield) -> Result<()> {
    field.step();
    draw_starfield(surface, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::STAR_COUNT;
    use crate::renderer::testing::{DrawOp, RecordingSurface};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_draw_order() {
        let mut rng = Pcg32::seed_from_u64(11);
        let field = Starfield::new(400.0, 300.0, &mut rng);
        let mut surface = RecordingSurface::default();

        draw_starfield(&mut surface, &field).unwrap();

        assert_eq!(surface.ops.len(), 2 + STAR_COUNT);
        assert_eq!(surface.ops[0], DrawOp::Clear { width: 400.0, height: 300.0 });
        match &surface.ops[1] {
            DrawOp::Gradient { height, stops } => {
                assert_eq!(*height, 300.0);
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[0], (0.0, "#0b0e1a".to_string()));
                assert_eq!(stops[2], (1.0, "#14092b".to_string()));
            }
            other => panic!("expected gradient, got {other:?}"),
        }
        assert!(surface.ops[2..].iter().all(|op| matches!(op, DrawOp::Circle { .. })));
    }

    #[test]
    fn test_frame_steps_before_drawing() {
        let mut rng = Pcg32::seed_from_u64(12);
        let mut field = Starfield::new(400.0, 300.0, &mut rng);
        let mut surface = RecordingSurface::default();

        render_frame(&mut surface, &mut field).unwrap();

        for (op, star) in surface.ops[2..].iter().zip(field.stars()) {
            match op {
                DrawOp::Circle { center, radius, alpha } => {
                    assert_eq!(*center, star.pos);
                    assert_eq!(*radius, star.size);
                    assert_eq!(*alpha, star.opacity());
                    assert!(*alpha >= 0.0 && *alpha <= star.base_opacity);
                }
                other => panic!("expected circle, got {other:?}"),
            }
        }
    }
}
