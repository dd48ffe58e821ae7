use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::capabilities::LaunchResult;
use crate::config::AppConfig;
use crate::contact::ContactChoice;
use crate::error::FetchError;
use crate::model::PropertyId;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Event {
    Configure(AppConfig),

    // --- Property lookup ---
    PropertyIdChanged(String),
    LookupSubmitted,
    /// Already-fetched raw listings handed over by the shell.
    ListingsLoaded(Vec<Value>),

    // --- Listings screen ---
    ThumbnailTapped { record_id: PropertyId, image_index: usize },
    GalleryScrolled { record_id: PropertyId, image_index: usize },
    ViewerNext,
    ViewerPrevious,
    ViewerClosed,
    /// The number is looked up from the listing, never taken from the shell.
    ContactRequested { record_id: PropertyId },
    ContactChosen(ContactChoice),
    DirectionsRequested { record_id: PropertyId },
    NoticeDismissed,
    BackPressed,
    LogoutPressed,

    // --- Capability callbacks ---
    #[serde(skip)]
    ListingsFetched {
        property_id: String,
        result: Result<Value, FetchError>,
    },
    #[serde(skip)]
    UriOpened { uri: String, result: LaunchResult },
}

impl Event {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Configure(_) => "configure",
            Self::PropertyIdChanged(_) => "property_id_changed",
            Self::LookupSubmitted => "lookup_submitted",
            Self::ListingsLoaded(_) => "listings_loaded",
            Self::ThumbnailTapped { .. } => "thumbnail_tapped",
            Self::GalleryScrolled { .. } => "gallery_scrolled",
            Self::ViewerNext => "viewer_next",
            Self::ViewerPrevious => "viewer_previous",
            Self::ViewerClosed => "viewer_closed",
            Self::ContactRequested { .. } => "contact_requested",
            Self::ContactChosen(_) => "contact_chosen",
            Self::DirectionsRequested { .. } => "directions_requested",
            Self::NoticeDismissed => "notice_dismissed",
            Self::BackPressed => "back_pressed",
            Self::LogoutPressed => "logout_pressed",
            Self::ListingsFetched { .. } => "listings_fetched",
            Self::UriOpened { .. } => "uri_opened",
        }
    }
}
