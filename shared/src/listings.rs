use tracing::debug;

use crate::capabilities::NavigationIntent;
use crate::error::TapRejected;
use crate::gallery::GalleryViewState;
use crate::model::{PropertyId, PropertyRecord};
use crate::overlay::ImageViewer;

pub const EMPTY_LISTINGS_MESSAGE: &str = "No properties available.";

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub record: PropertyRecord,
    pub gallery: GalleryViewState,
}

/// The listings screen: the loaded records, one gallery each, and the single
/// image viewer they all share.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListingsView {
    listings: Vec<Listing>,
    viewer: ImageViewer,
}

impl ListingsView {
    /// Replaces the list wholesale. Any open viewer belongs to the old list
    /// and is closed.
    pub fn load(&mut self, records: Vec<PropertyRecord>) {
        self.listings = records
            .into_iter()
            .map(|record| Listing {
                gallery: GalleryViewState::for_record(&record),
                record,
            })
            .collect();
        self.viewer.close();
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[must_use]
    pub fn find(&self, id: &PropertyId) -> Option<&Listing> {
        self.listings.iter().find(|l| &l.record.id == id)
    }

    #[must_use]
    pub const fn viewer(&self) -> &ImageViewer {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ImageViewer {
        &mut self.viewer
    }

    /// Opens the viewer on one listing's images. Stale ids (the list was
    /// reloaded under a pending tap) and bad indices leave everything as is.
    pub fn on_thumbnail_tap(&mut self, id: &PropertyId, image_index: usize) -> Result<(), TapRejected> {
        let listing = self
            .listings
            .iter()
            .find(|l| &l.record.id == id)
            .ok_or_else(|| TapRejected::UnknownRecord(id.clone()))?;

        self.viewer.open(&listing.record.images, image_index)?;
        debug!(%id, image_index, "image viewer opened");
        Ok(())
    }

    /// Returns whether the gallery focus moved.
    pub fn on_gallery_scrolled(&mut self, id: &PropertyId, image_index: usize) -> bool {
        self.listings
            .iter_mut()
            .find(|l| &l.record.id == id)
            .is_some_and(|l| l.gallery.focus(image_index))
    }

    #[must_use]
    pub const fn on_back(&self) -> NavigationIntent {
        NavigationIntent::GoBack
    }

    /// No confirmation and no local teardown; the session belongs to the
    /// auth service.
    #[must_use]
    pub const fn on_logout(&self) -> NavigationIntent {
        NavigationIntent::ResetToLogin
    }
}
