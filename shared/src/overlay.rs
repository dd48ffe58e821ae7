use std::sync::Arc;

use crate::error::OverlayError;
use crate::model::ImageRef;

/// Full-screen image viewer shared by every listing on screen.
///
/// `Open` holds a shared handle to a listing's images, never a copy, and an
/// index that is always in bounds. `Closed` carries nothing, so stale images
/// or indices cannot leak into a render.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ImageViewer {
    #[default]
    Closed,
    Open {
        images: Arc<[ImageRef]>,
        index: usize,
    },
}

impl ImageViewer {
    /// Opens on `start`. Rejected calls leave the viewer as it was.
    pub fn open(&mut self, images: &Arc<[ImageRef]>, start: usize) -> Result<(), OverlayError> {
        if images.is_empty() {
            return Err(OverlayError::EmptySequence);
        }
        if start >= images.len() {
            return Err(OverlayError::IndexOutOfRange {
                index: start,
                len: images.len(),
            });
        }

        *self = Self::Open {
            images: Arc::clone(images),
            index: start,
        };
        Ok(())
    }

    /// Moves one image forward. No-op on the last image or when closed.
    pub fn next(&mut self) -> bool {
        match self {
            Self::Open { images, index } if *index + 1 < images.len() => {
                *index += 1;
                true
            }
            _ => false,
        }
    }

    /// Moves one image back. No-op on the first image or when closed.
    pub fn previous(&mut self) -> bool {
        match self {
            Self::Open { index, .. } if *index > 0 => {
                *index -= 1;
                true
            }
            _ => false,
        }
    }

    /// Returns whether the viewer was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Open { index, .. } => Some(*index),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageRef> {
        match self {
            Self::Open { images, index } => images.get(*index),
            Self::Closed => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Open { images, .. } => images.len(),
            Self::Closed => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        matches!(self, Self::Open { images, index } if *index + 1 < images.len())
    }

    #[must_use]
    pub fn can_previous(&self) -> bool {
        matches!(self, Self::Open { index, .. } if *index > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn images(n: usize) -> Arc<[ImageRef]> {
        (0..n)
            .map(|i| ImageRef::new(format!("img-{i}.jpg")).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_open_shares_images() {
        let set = images(3);
        let mut viewer = ImageViewer::default();
        viewer.open(&set, 1).unwrap();

        match &viewer {
            ImageViewer::Open { images, index } => {
                assert!(Arc::ptr_eq(images, &set));
                assert_eq!(*index, 1);
            }
            ImageViewer::Closed => panic!("viewer should be open"),
        }
        assert_eq!(viewer.current().unwrap().as_str(), "img-1.jpg");
    }

    #[test]
    fn test_open_empty_rejected() {
        let mut viewer = ImageViewer::default();
        assert_eq!(viewer.open(&images(0), 0), Err(OverlayError::EmptySequence));
        assert_eq!(viewer, ImageViewer::Closed);
    }

    #[test]
    fn test_open_out_of_range_rejected() {
        let mut viewer = ImageViewer::default();
        assert_eq!(
            viewer.open(&images(2), 2),
            Err(OverlayError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(!viewer.is_open());
    }

    #[test]
    fn test_rejected_open_keeps_current_image() {
        let mut viewer = ImageViewer::default();
        viewer.open(&images(2), 1).unwrap();
        assert!(viewer.open(&images(0), 0).is_err());
        assert_eq!(viewer.index(), Some(1));
    }

    #[test]
    fn test_reopen_resets_index() {
        let set = images(4);
        let mut viewer = ImageViewer::default();
        viewer.open(&set, 3).unwrap();
        viewer.open(&set, 0).unwrap();
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn test_navigation_when_closed_is_noop() {
        let mut viewer = ImageViewer::default();
        assert!(!viewer.next());
        assert!(!viewer.previous());
        assert_eq!(viewer, ImageViewer::Closed);
        assert!(viewer.current().is_none());
    }

    #[test]
    fn test_next_then_close_stays_closed() {
        let mut viewer = ImageViewer::default();
        viewer.open(&images(3), 0).unwrap();
        viewer.next();
        assert!(viewer.close());
        assert_eq!(viewer, ImageViewer::Closed);
        assert!(!viewer.close());
        assert_eq!(viewer, ImageViewer::Closed);
    }

    #[test]
    fn test_boundary_controls() {
        let mut viewer = ImageViewer::default();
        viewer.open(&images(2), 0).unwrap();
        assert!(!viewer.can_previous());
        assert!(viewer.can_next());
        viewer.next();
        assert!(viewer.can_previous());
        assert!(!viewer.can_next());
    }

    proptest! {
        #[test]
        fn open_reports_requested_state(len in 1usize..32, seed in any::<usize>()) {
            let set = images(len);
            let start = seed % len;
            let mut viewer = ImageViewer::default();

            prop_assert!(viewer.open(&set, start).is_ok());
            prop_assert_eq!(viewer.index(), Some(start));
            prop_assert_eq!(viewer.len(), len);
            prop_assert_eq!(viewer, ImageViewer::Open { images: set, index: start });
        }

        #[test]
        fn next_saturates_at_last(len in 1usize..32, seed in any::<usize>()) {
            let mut viewer = ImageViewer::default();
            viewer.open(&images(len), seed % len).unwrap();

            for _ in 0..len {
                viewer.next();
                prop_assert!(viewer.index().unwrap() < len);
            }
            prop_assert_eq!(viewer.index(), Some(len - 1));
            prop_assert!(!viewer.next());
            prop_assert_eq!(viewer.index(), Some(len - 1));
        }

        #[test]
        fn previous_at_first_is_noop(len in 1usize..32) {
            let mut viewer = ImageViewer::default();
            viewer.open(&images(len), 0).unwrap();
            let before = viewer.clone();

            prop_assert!(!viewer.previous());
            prop_assert_eq!(viewer, before);
        }

        #[test]
        fn invalid_open_stays_closed(len in 0usize..16, extra in 0usize..64) {
            let mut viewer = ImageViewer::default();
            prop_assert!(viewer.open(&images(len), len + extra).is_err());
            prop_assert_eq!(viewer, ImageViewer::Closed);
        }

        #[test]
        fn close_always_closes(len in 1usize..16, seed in any::<usize>(), open in any::<bool>()) {
            let mut viewer = ImageViewer::default();
            if open {
                viewer.open(&images(len), seed % len).unwrap();
            }
            viewer.close();
            prop_assert_eq!(&viewer, &ImageViewer::Closed);
            viewer.close();
            prop_assert_eq!(viewer, ImageViewer::Closed);
        }
    }
}
