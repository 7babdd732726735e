//! Wrap-around navigation state for the product-detail image gallery.
//! The carousel rendering and its autoplay timer live in the UI layer.

/// Current position within a product's ordered image list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    index: usize,
}

impl GalleryState {
    /// Start at the first image.
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    /// URL of the image currently shown, if any.
    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Advance one image, wrapping past the end. No-op with fewer than
    /// two images.
    pub fn next(&mut self) {
        if self.images.len() > 1 {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    /// Step back one image, wrapping before the start. No-op with fewer
    /// than two images.
    pub fn prev(&mut self) {
        if self.images.len() > 1 {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> GalleryState {
        GalleryState::new((1..=n).map(|i| format!("img{i}.jpg")).collect())
    }

    #[test]
    fn test_wraps_in_both_directions() {
        let mut state = gallery(3);
        assert_eq!(state.current(), Some("img1.jpg"));

        state.prev();
        assert_eq!(state.current(), Some("img3.jpg"));

        state.next();
        state.next();
        state.next();
        state.next();
        assert_eq!(state.current(), Some("img1.jpg"));
    }

    #[test]
    fn test_single_image_does_not_navigate() {
        let mut state = gallery(1);
        state.next();
        state.prev();
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_empty_gallery() {
        let mut state = GalleryState::new(Vec::new());
        state.next();
        assert!(state.current().is_none());
        assert!(state.is_empty());
    }
}
