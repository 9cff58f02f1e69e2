//! Gallery carousel state.
//!
//! The carousel holds a fixed, ordered list of images and an index into it.
//! Every transition keeps the index inside `0..len`: previous/next wrap
//! around, direct jumps are bounds-checked. Images that fail to load are
//! remembered for the lifetime of the carousel so the view can swap in a
//! placeholder wherever the image appears.
//!
//! # Example
//!
//! ```rust
//! use loadmovers_core::carousel::{Carousel, GalleryImage};
//!
//! let images = (1..=3)
//!     .map(|id| GalleryImage::new(id, format!("/images/{id}.jpeg"), "truck"))
//!     .collect();
//! let mut carousel = Carousel::new(images).unwrap();
//!
//! carousel.go_to_previous();
//! assert_eq!(carousel.current_index(), 2);
//! assert_eq!(carousel.counter_label(), "3 / 3");
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Thumbnail classes for the slide currently on the main stage.
const THUMB_ACTIVE: &str = "border-blue-600 ring-2 ring-blue-300 scale-105";
/// Thumbnail classes for every other slide.
const THUMB_IDLE: &str = "border-gray-300 hover:border-gray-400 opacity-70 hover:opacity-100";

/// One photo in the gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Stable identifier, unique within the gallery
    pub id: u32,
    /// Path the browser loads the image from
    pub src: String,
    /// Description, used as `alt` text and in the placeholder
    pub alt: String,
}

impl GalleryImage {
    /// Build an image entry.
    pub fn new(id: u32, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            id,
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Placeholder caption shown on the main stage when the image is broken.
    pub fn missing_caption(&self) -> String {
        format!("Image not found: {}", self.src)
    }
}

/// Navigation intent coming from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// Left arrow
    Previous,
    /// Right arrow
    Next,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value to a navigation intent.
    ///
    /// Returns `None` for keys the carousel does not react to.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Carousel position plus the set of images that failed to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    images: Vec<GalleryImage>,
    current: usize,
    failed: BTreeSet<u32>,
}

impl Carousel {
    /// Create a carousel showing the first image.
    pub fn new(images: Vec<GalleryImage>) -> Result<Self> {
        if images.is_empty() {
            return Err(SiteError::EmptyGallery);
        }
        Ok(Self {
            images,
            current: 0,
            failed: BTreeSet::new(),
        })
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always `false`: construction rejects empty galleries.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Index of the image on the main stage.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Image on the main stage.
    pub fn current_image(&self) -> &GalleryImage {
        &self.images[self.current]
    }

    /// All images in display order.
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Step back one image, wrapping from the first to the last.
    pub fn go_to_previous(&mut self) {
        self.current = if self.current == 0 {
            self.len() - 1
        } else {
            self.current - 1
        };
        tracing::debug!(index = self.current, "carousel previous");
    }

    /// Step forward one image, wrapping from the last to the first.
    pub fn go_to_next(&mut self) {
        self.current = if self.current == self.len() - 1 {
            0
        } else {
            self.current + 1
        };
        tracing::debug!(index = self.current, "carousel next");
    }

    /// Jump straight to `index`.
    ///
    /// Thumbnails only ever offer valid positions; anything else leaves the
    /// carousel where it was.
    pub fn go_to_slide(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(SiteError::SlideOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.current = index;
        tracing::debug!(index, "carousel jump");
        Ok(())
    }

    /// Apply a keyboard intent through the same path the buttons use.
    pub fn apply_key(&mut self, key: NavKey) {
        match key {
            NavKey::Previous => self.go_to_previous(),
            NavKey::Next => self.go_to_next(),
        }
    }

    /// Remember that `id` failed to load. Returns `true` the first time.
    pub fn mark_failed(&mut self, id: u32) -> bool {
        let inserted = self.failed.insert(id);
        if inserted {
            if let Some(image) = self.images.iter().find(|img| img.id == id) {
                tracing::warn!(id, src = %image.src, "gallery image failed to load");
            }
        }
        inserted
    }

    /// Whether `id` has been marked as failed.
    pub fn is_failed(&self, id: u32) -> bool {
        self.failed.contains(&id)
    }

    /// Failed image ids in ascending order.
    pub fn failed_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.failed.iter().copied()
    }

    /// Position counter for the main stage, e.g. `"3 / 8"`.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.len())
    }

    /// Border/opacity classes for the thumbnail at `index`.
    pub fn thumbnail_class(&self, index: usize) -> &'static str {
        if index == self.current {
            THUMB_ACTIVE
        } else {
            THUMB_IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gallery(n: u32) -> Carousel {
        let images = (1..=n)
            .map(|id| {
                GalleryImage::new(id, format!("/images/gallery-{id}.jpeg"), format!("photo {id}"))
            })
            .collect();
        Carousel::new(images).unwrap()
    }

    #[test]
    fn rejects_empty_gallery() {
        assert!(matches!(Carousel::new(vec![]), Err(SiteError::EmptyGallery)));
    }

    #[test]
    fn starts_on_first_image() {
        let c = gallery(8);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.current_image().id, 1);
        assert_eq!(c.counter_label(), "1 / 8");
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut c = gallery(8);
        c.go_to_previous();
        assert_eq!(c.current_index(), 7);
        assert_eq!(c.counter_label(), "8 / 8");
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut c = gallery(8);
        c.go_to_slide(7).unwrap();
        c.go_to_next();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn index_stays_in_range_for_any_walk() {
        let mut c = gallery(8);
        // Deterministic pseudo-random walk covering both directions
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..1_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            if seed % 3 == 0 {
                c.go_to_previous();
            } else {
                c.go_to_next();
            }
            assert!(c.current_index() < c.len());
        }
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut c = gallery(8);
        c.go_to_slide(3).unwrap();
        for _ in 0..8 {
            c.go_to_next();
        }
        assert_eq!(c.current_index(), 3);
        for _ in 0..8 {
            c.go_to_previous();
        }
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn single_image_gallery_stays_put() {
        let mut c = gallery(1);
        c.go_to_next();
        assert_eq!(c.current_index(), 0);
        c.go_to_previous();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn go_to_slide_rejects_out_of_range() {
        let mut c = gallery(8);
        c.go_to_slide(4).unwrap();
        let err = c.go_to_slide(8).unwrap_err();
        assert!(matches!(err, SiteError::SlideOutOfRange { index: 8, len: 8 }));
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn keyboard_matches_buttons() {
        for start in 0..8 {
            let mut by_key = gallery(8);
            let mut by_button = gallery(8);
            by_key.go_to_slide(start).unwrap();
            by_button.go_to_slide(start).unwrap();

            by_key.apply_key(NavKey::Previous);
            by_button.go_to_previous();
            assert_eq!(by_key, by_button);

            by_key.apply_key(NavKey::Next);
            by_key.apply_key(NavKey::Next);
            by_button.go_to_next();
            by_button.go_to_next();
            assert_eq!(by_key, by_button);
        }
    }

    #[test]
    fn each_key_press_is_one_step() {
        let mut c = gallery(8);
        for _ in 0..5 {
            c.apply_key(NavKey::Next);
        }
        assert_eq!(c.current_index(), 5);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::Previous));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::Next));
        assert_eq!(NavKey::from_key("ArrowUp"), None);
        assert_eq!(NavKey::from_key("a"), None);
    }

    #[test]
    fn mark_failed_is_idempotent() {
        let mut c = gallery(8);
        assert!(c.mark_failed(3));
        assert!(!c.mark_failed(3));
        assert_eq!(c.failed_ids().collect::<Vec<_>>(), vec![3]);
        assert!(c.is_failed(3));
        assert!(!c.is_failed(4));
    }

    #[test]
    fn failures_survive_navigation() {
        let mut c = gallery(8);
        c.mark_failed(2);
        c.mark_failed(1);
        c.go_to_next();
        c.go_to_previous();
        assert_eq!(c.failed_ids().collect::<Vec<_>>(), vec![1, 2]);
        assert!(c.is_failed(c.current_image().id));
    }

    #[test]
    fn only_current_thumbnail_is_highlighted() {
        let mut c = gallery(4);
        c.go_to_slide(2).unwrap();
        let classes: Vec<_> = (0..4).map(|i| c.thumbnail_class(i)).collect();
        assert_eq!(classes, vec![THUMB_IDLE, THUMB_IDLE, THUMB_ACTIVE, THUMB_IDLE]);
    }

    #[test]
    fn missing_caption_names_path() {
        let img = GalleryImage::new(1, "/images/gallery-1.jpeg", "truck");
        assert_eq!(img.missing_caption(), "Image not found: /images/gallery-1.jpeg");
    }
}
