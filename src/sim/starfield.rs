//! Twinkling starfield behind every phase
//!
//! Stars drift a fraction of a pixel per frame and wrap around the edges of
//! the surface. The whole set is regenerated on resize.

use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

use crate::consts::*;

/// A single star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Screen-space position (pixels)
    pub pos: Vec2,
    /// Radius (pixels)
    pub size: f32,
    /// Opacity at the peak of the twinkle
    pub base_opacity: f32,
    /// Twinkle angular speed (radians per frame)
    pub twinkle_speed: f32,
    /// Twinkle phase (radians, kept in `[0, TAU)`)
    pub twinkle_phase: f32,
    /// Drift per frame (pixels)
    pub drift: Vec2,
}

impl Star {
    /// Random star somewhere on a `width` x `height` surface
    pub fn random<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(unit(rng) * width, unit(rng) * height),
            size: rng.random_range(STAR_SIZE_MIN..STAR_SIZE_MAX),
            base_opacity: rng.random_range(STAR_OPACITY_MIN..STAR_OPACITY_MAX),
            twinkle_speed: rng.random_range(TWINKLE_SPEED_MIN..TWINKLE_SPEED_MAX),
            twinkle_phase: unit(rng) * TAU,
            drift: Vec2::new(
                rng.random_range(-DRIFT_X_MAX..DRIFT_X_MAX),
                rng.random_range(-DRIFT_Y_MAX..DRIFT_Y_MAX),
            ),
        }
    }

    /// Opacity to draw with right now, in `[0, base_opacity]`
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.base_opacity * (0.5 + 0.5 * self.twinkle_phase.sin())
    }

    /// Advance one frame: drift, wrap, twinkle
    pub fn step(&mut self, width: f32, height: f32) {
        self.pos += self.drift;
        self.pos.x = wrap(self.pos.x, width);
        self.pos.y = wrap(self.pos.y, height);
        // Wrapped so f32 precision holds up over long sessions
        self.twinkle_phase = (self.twinkle_phase + self.twinkle_speed).rem_euclid(TAU);
    }
}

/// Uniform sample in `[0, 1)`; also valid when the surface has zero extent
#[inline]
fn unit<R: Rng>(rng: &mut R) -> f32 {
    rng.random::<f32>()
}

/// Toroidal wrap with a margin beyond each edge
#[inline]
fn wrap(v: f32, extent: f32) -> f32 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if v > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}

/// The full set of stars for one surface size
#[derive(Debug, Clone)]
pub struct Starfield {
    width: f32,
    height: f32,
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng>(width: f32, height: f32, rng: &mut R) -> Self {
        let mut field = Self {
            width,
            height,
            stars: Vec::new(),
        };
        field.resize(width, height, rng);
        field
    }

    /// Adopt a new surface size and regenerate every star.
    ///
    /// The new set is built off to the side and swapped in whole.
    pub fn resize<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        let stars = (0..STAR_COUNT)
            .map(|_| Star::random(rng, width, height))
            .collect();
        self.width = width;
        self.height = height;
        self.stars = stars;
        log::debug!("Starfield reset to {}x{} ({} stars)", width, height, STAR_COUNT);
    }

    /// Advance every star by one frame
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for star in &mut self.stars {
            star.step(w, h);
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// True if every star lies within the wrap margin of the surface
    pub fn in_bounds(&self) -> bool {
        self.stars.iter().all(|s| {
            (-WRAP_MARGIN..=self.width + WRAP_MARGIN).contains(&s.pos.x)
                && (-WRAP_MARGIN..=self.height + WRAP_MARGIN).contains(&s.pos.y)
        })
    }

    #[cfg(test)]
    pub(crate) fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }
}
