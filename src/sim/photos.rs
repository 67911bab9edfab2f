//! Photo wall shown behind the reveal
//!
//! Photos are laid out in columns that scroll past each other. A photo that
//! fails to load is hidden for good; the wall works with any number of
//! missing files.

use crate::consts::{PHOTO_COLUMNS, PHOTO_COUNT};

/// Load status of one photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhotoStatus {
    #[default]
    Pending,
    Hidden,
}

/// Scroll direction of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scroll {
    /// 0% -> -50%
    Up,
    /// -50% -> 0%
    Down,
}

impl Scroll {
    /// (from, to) translateY percentages
    pub fn keyframes(self) -> (f32, f32) {
        match self {
            Scroll::Up => (0.0, -50.0),
            Scroll::Down => (-50.0, 0.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PhotoSlot {
    pub src: String,
    pub status: PhotoStatus,
}

#[derive(Debug, Clone)]
pub struct PhotoWall {
    slots: Vec<PhotoSlot>,
}

impl PhotoWall {
    /// Wall of `{base}/1.jpg` through `{base}/25.jpg`
    pub fn new(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        let slots = (1..=PHOTO_COUNT)
            .map(|n| PhotoSlot {
                src: format!("{base}/{n}.jpg"),
                status: PhotoStatus::Pending,
            })
            .collect();
        Self { slots }
    }

    pub fn slots(&self) -> &[PhotoSlot] {
        &self.slots
    }

    /// Indices of the photos in `column`
    pub fn column(&self, column: usize) -> std::ops::Range<usize> {
        let per_column = PHOTO_COUNT / PHOTO_COLUMNS;
        let start = (column * per_column).min(self.slots.len());
        let end = (start + per_column).min(self.slots.len());
        start..end
    }

    /// Each column lists its photos twice so the loop has no seam
    pub fn marquee(&self, column: usize) -> impl Iterator<Item = usize> + '_ {
        self.column(column).chain(self.column(column))
    }

    pub fn scroll(column: usize) -> Scroll {
        if column % 2 == 0 { Scroll::Up } else { Scroll::Down }
    }

    /// Seconds for one full scroll cycle of `column`
    pub fn scroll_secs(column: usize) -> f32 {
        20.0 + column as f32 * 2.0
    }

    /// Hide a photo that failed to load. Returns true on the first failure.
    pub fn mark_failed(&mut self, index: usize) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) if slot.status != PhotoStatus::Hidden => {
                slot.status = PhotoStatus::Hidden;
                log::info!("Hiding photo {} ({})", index + 1, slot.src);
                true
            }
            _ => false,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.status != PhotoStatus::Hidden)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_paths() {
        let wall = PhotoWall::new("/photos/");
        assert_eq!(wall.slots().len(), PHOTO_COUNT);
        assert_eq!(wall.slots()[0].src, "/photos/1.jpg");
        assert_eq!(wall.slots()[24].src, "/photos/25.jpg");
    }

    #[test]
    fn test_columns_partition_photos() {
        let wall = PhotoWall::new("/photos");
        let mut seen = Vec::new();
        for c in 0..PHOTO_COLUMNS {
            assert_eq!(wall.column(c).len(), 5);
            seen.extend(wall.column(c));
        }
        assert_eq!(seen, (0..PHOTO_COUNT).collect::<Vec<_>>());

        let marquee: Vec<_> = wall.marquee(1).collect();
        assert_eq!(marquee, vec![5, 6, 7, 8, 9, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_columns_alternate() {
        assert_eq!(PhotoWall::scroll(0), Scroll::Up);
        assert_eq!(PhotoWall::scroll(1), Scroll::Down);
        assert_eq!(PhotoWall::scroll(4), Scroll::Up);
        assert_eq!(PhotoWall::scroll_secs(0), 20.0);
        assert_eq!(PhotoWall::scroll_secs(4), 28.0);
    }

    #[test]
    fn test_failed_photo_stays_hidden() {
        let mut wall = PhotoWall::new("/photos");
        assert!(wall.mark_failed(3));
        assert!(!wall.mark_failed(3));
        assert_eq!(wall.slots()[3].status, PhotoStatus::Hidden);
        assert_eq!(wall.visible_count(), PHOTO_COUNT - 1);
    }

    #[test]
    fn test_wall_survives_every_photo_missing() {
        let mut wall = PhotoWall::new("/photos");
        for i in 0..PHOTO_COUNT {
            wall.mark_failed(i);
        }
        assert_eq!(wall.visible_count(), 0);
        assert!(!wall.mark_failed(PHOTO_COUNT));
    }
}
