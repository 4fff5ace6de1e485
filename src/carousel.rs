//! Wrap-around cursor over the gallery carousel.
//!
//! The cursor is not reset when the gallery overlay closes; reopening resumes
//! at the last viewed photo.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one image")]
    Empty,
}

/// Index into a fixed list of `len` images. Always in `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty carousel cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Step forward, wrapping from the last image to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    /// Step back, wrapping from the first image to the last.
    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Jump straight to `target`. Out-of-range targets leave the cursor
    /// untouched and return `false`.
    pub fn jump_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            return false;
        }
        self.index = target;
        true
    }

    /// Indices reached by one `previous` and one `next` from here.
    pub fn neighbours(&self) -> (usize, usize) {
        (
            (self.index + self.len - 1) % self.len,
            (self.index + 1) % self.len,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(Carousel::new(0), Err(CarouselError::Empty));
    }

    #[test]
    fn starts_at_zero() {
        let c = Carousel::new(15).unwrap();
        assert_eq!(c.index(), 0);
        assert_eq!(c.len(), 15);
    }

    #[test]
    fn next_wraps_to_first() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn previous_wraps_to_last() {
        let mut c = Carousel::new(15).unwrap();
        assert_eq!(c.previous(), 14);
        assert_eq!(c.previous(), 13);
    }

    #[test]
    fn single_image_always_zero() {
        let mut c = Carousel::new(1).unwrap();
        assert_eq!(c.next(), 0);
        assert_eq!(c.previous(), 0);
        assert_eq!(c.neighbours(), (0, 0));
    }

    #[test]
    fn jump_to_in_range() {
        let mut c = Carousel::new(15).unwrap();
        assert!(c.jump_to(7));
        assert_eq!(c.index(), 7);
        assert!(c.jump_to(14));
        assert_eq!(c.index(), 14);
    }

    #[test]
    fn jump_to_out_of_range_is_noop() {
        let mut c = Carousel::new(15).unwrap();
        c.jump_to(4);
        assert!(!c.jump_to(15));
        assert!(!c.jump_to(usize::MAX));
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn neighbours_wrap_at_edges() {
        let mut c = Carousel::new(5).unwrap();
        assert_eq!(c.neighbours(), (4, 1));
        c.jump_to(4);
        assert_eq!(c.neighbours(), (3, 0));
    }
}
