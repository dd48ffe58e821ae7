use serde_json::Value;
use tracing::{debug, info, warn};

use crate::capabilities::{Capabilities, Layer, LaunchResult, NavigationIntent};
use crate::config::AppConfig;
use crate::contact::ContactPrompt;
use crate::error::{FetchError, LookupError};
use crate::event::Event;
use crate::lookup::{listing_sequence, NO_PROPERTY_FOUND_MESSAGE};
use crate::model::{parse_records, PropertyId};
use crate::view::ViewModel;
use crate::{Model, Notice};

pub const FETCH_FAILED_MESSAGE: &str = "Could not load properties. Please try again.";
pub const DIRECTIONS_UNAVAILABLE_MESSAGE: &str = "Directions unavailable for this property";
pub const LAUNCH_FAILED_MESSAGE: &str = "Unable to open this link on your device.";

#[derive(Default)]
pub struct App;

impl App {
    fn show_notice(model: &mut Model, caps: &Capabilities, notice: Notice) {
        model.notice = Some(notice);
        caps.repaint.layer(Layer::Dialog);
    }

    fn submit_lookup(model: &mut Model, caps: &Capabilities) {
        let request = model.lookup.validated_id().and_then(|property_id| {
            let url = model.config.listing_url(&property_id).map_err(LookupError::from)?;
            Ok((property_id, url))
        });

        let (property_id, url) = match request {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "lookup rejected");
                Self::show_notice(model, caps, Notice::error(e.user_facing_message()));
                return;
            }
        };

        info!(%property_id, "fetching listings");
        model.lookup.begin(property_id.clone());

        caps.http
            .get(url.as_str())
            .expect_json::<Value>()
            .send(move |result| Event::ListingsFetched {
                property_id,
                result: fetch_body(result),
            });

        caps.render.render();
    }

    fn listings_fetched(
        model: &mut Model,
        caps: &Capabilities,
        property_id: &str,
        result: Result<Value, FetchError>,
    ) {
        if !model.lookup.finish(property_id) {
            debug!(property_id, "ignoring superseded listing response");
            return;
        }

        let parsed = result.and_then(|body| {
            listing_sequence(&body).map(|raw| (raw.len(), parse_records(raw)))
        });

        match parsed {
            Err(e) => {
                warn!(property_id, error = %e, "listing fetch failed");
                model.notice = Some(Notice::error(FETCH_FAILED_MESSAGE));
                caps.render.render();
            }
            Ok((0, _)) => {
                info!(property_id, "no listings for property id");
                model.notice = Some(Notice::info(NO_PROPERTY_FOUND_MESSAGE));
                caps.render.render();
            }
            Ok((raw_count, records)) => {
                info!(property_id, raw_count, loaded = records.len(), "listings loaded");
                model.listings.load(records);
                caps.render.render();
                caps.navigator.navigate(NavigationIntent::ShowListings);
            }
        }
    }

    fn thumbnail_tapped(model: &mut Model, caps: &Capabilities, record_id: &PropertyId, image_index: usize) {
        match model.listings.on_thumbnail_tap(record_id, image_index) {
            Ok(()) => caps.repaint.layer(Layer::Overlay),
            Err(e) => debug!(%record_id, image_index, error = %e, "ignoring thumbnail tap"),
        }
    }

    fn contact_requested(model: &mut Model, caps: &Capabilities, record_id: &PropertyId) {
        let Some(listing) = model.listings.find(record_id) else {
            debug!(%record_id, "ignoring contact request for unknown listing");
            return;
        };
        let Some(phone_number) = listing.record.contact.phone_number.known() else {
            debug!(%record_id, "listing has no phone number");
            return;
        };

        match ContactPrompt::request(phone_number) {
            Ok(prompt) => {
                model.contact_prompt = Some(prompt);
                caps.repaint.layer(Layer::Dialog);
            }
            Err(e) => debug!(%record_id, error = %e, "ignoring contact request"),
        }
    }

    fn directions_requested(model: &mut Model, caps: &Capabilities, record_id: &PropertyId) {
        let Some(listing) = model.listings.find(record_id) else {
            debug!(%record_id, "ignoring directions request for unknown listing");
            return;
        };

        let url = listing
            .record
            .location
            .known()
            .map(|&destination| model.config.directions_url(destination));

        match url {
            Some(Ok(url)) => Self::launch(caps, url.into()),
            Some(Err(e)) => {
                warn!(%record_id, error = %e, "could not build directions url");
                Self::show_notice(model, caps, Notice::info(DIRECTIONS_UNAVAILABLE_MESSAGE));
            }
            None => Self::show_notice(model, caps, Notice::info(DIRECTIONS_UNAVAILABLE_MESSAGE)),
        }
    }

    fn launch(caps: &Capabilities, uri: String) {
        let callback_uri = uri.clone();
        caps.launcher
            .open_uri(uri, move |result| Event::UriOpened { uri: callback_uri, result });
    }

    fn uri_opened(model: &mut Model, caps: &Capabilities, uri: &str, result: LaunchResult) {
        // The scheme is enough to diagnose; the rest may be a phone number.
        let scheme = uri.split(':').next().unwrap_or_default();
        match result {
            Ok(()) => debug!(scheme, "uri opened"),
            Err(e) => {
                warn!(scheme, error = %e, "platform failed to open uri");
                Self::show_notice(model, caps, Notice::error(LAUNCH_FAILED_MESSAGE));
            }
        }
    }

    fn configure(model: &mut Model, config: AppConfig) {
        match config.validate() {
            Ok(()) => {
                info!(listing_endpoint = %config.listing_endpoint, "config applied");
                model.config = config;
            }
            Err(e) => warn!(error = %e, "ignoring invalid config"),
        }
    }
}

fn fetch_body(result: crux_http::Result<crux_http::Response<Value>>) -> Result<Value, FetchError> {
    match result {
        Ok(mut response) => response.take_body().ok_or(FetchError::EmptyBody),
        Err(e) => Err(FetchError::Transport(e.to_string())),
    }
}

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Capabilities = Capabilities;

    fn update(&self, event: Event, model: &mut Model, caps: &Capabilities) {
        debug!(event = event.name(), "update");

        match event {
            Event::Configure(config) => Self::configure(model, config),

            Event::PropertyIdChanged(raw) => {
                model.lookup.set_input(raw);
                caps.render.render();
            }

            Event::LookupSubmitted => Self::submit_lookup(model, caps),

            Event::ListingsFetched { property_id, result } => {
                Self::listings_fetched(model, caps, &property_id, result);
            }

            Event::ListingsLoaded(raw) => {
                let records = parse_records(&raw);
                info!(raw_count = raw.len(), loaded = records.len(), "listings loaded");
                model.listings.load(records);
                caps.render.render();
            }

            Event::ThumbnailTapped { record_id, image_index } => {
                Self::thumbnail_tapped(model, caps, &record_id, image_index);
            }

            // The strip already shows its own scroll position; only the
            // model needs to know.
            Event::GalleryScrolled { record_id, image_index } => {
                model.listings.on_gallery_scrolled(&record_id, image_index);
            }

            Event::ViewerNext => {
                if model.listings.viewer_mut().next() {
                    caps.repaint.layer(Layer::Overlay);
                }
            }

            Event::ViewerPrevious => {
                if model.listings.viewer_mut().previous() {
                    caps.repaint.layer(Layer::Overlay);
                }
            }

            Event::ViewerClosed => {
                if model.listings.viewer_mut().close() {
                    caps.repaint.layer(Layer::Overlay);
                }
            }

            Event::ContactRequested { record_id } => {
                Self::contact_requested(model, caps, &record_id);
            }

            Event::ContactChosen(choice) => {
                let Some(prompt) = model.contact_prompt.take() else {
                    debug!(?choice, "no contact prompt showing");
                    return;
                };
                if let Some(uri) = prompt.resolve(choice) {
                    Self::launch(caps, uri);
                }
                caps.repaint.layer(Layer::Dialog);
            }

            Event::DirectionsRequested { record_id } => {
                Self::directions_requested(model, caps, &record_id);
            }

            Event::UriOpened { uri, result } => Self::uri_opened(model, caps, &uri, result),

            Event::NoticeDismissed => {
                if model.notice.take().is_some() {
                    caps.repaint.layer(Layer::Dialog);
                }
            }

            Event::BackPressed => caps.navigator.navigate(model.listings.on_back()),

            Event::LogoutPressed => caps.navigator.navigate(model.listings.on_logout()),
        }
    }

    fn view(&self, model: &Model) -> ViewModel {
        ViewModel::from(model)
    }
}
