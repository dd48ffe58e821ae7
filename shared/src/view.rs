use serde::{Deserialize, Serialize};

use crate::contact::{ContactChoice, ContactPrompt, CONTACT_PROMPT_MESSAGE, CONTACT_PROMPT_TITLE};
use crate::listings::{Listing, ListingsView, EMPTY_LISTINGS_MESSAGE};
use crate::overlay::ImageViewer;
use crate::{Model, Notice, NoticeKind};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupView {
    pub property_id: String,
    pub is_loading: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ListingsBody {
    Empty { message: String },
    Items { cards: Vec<ListingCard> },
}

/// Every field is display-ready; absent values already read "Unknown".
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub rent: String,
    pub phone_number: String,
    pub can_call: bool,
    pub user_type: String,
    pub bedrooms: String,
    pub washrooms: String,
    pub furnished: String,
    pub parking: String,
    pub floor: String,
    pub brokerage: String,
    pub brokerage_fee_type: String,
    pub food_availability: String,
    pub address: String,
    pub full_address: String,
    pub has_directions: bool,
    pub images: Vec<String>,
    pub focused_image: usize,
    pub can_open_viewer: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverlayView {
    Hidden,
    Visible {
        image_url: String,
        index: usize,
        count: usize,
        can_previous: bool,
        can_next: bool,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceView {
    pub choice: ContactChoice,
    pub label: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPromptView {
    pub title: String,
    pub message: String,
    pub phone_number: String,
    pub options: Vec<ChoiceView>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoticeView {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub lookup: LookupView,
    pub listings: ListingsBody,
    pub overlay: OverlayView,
    pub contact_prompt: Option<ContactPromptView>,
    pub notice: Option<NoticeView>,
}

impl From<&Model> for ViewModel {
    fn from(model: &Model) -> Self {
        Self {
            lookup: LookupView {
                property_id: model.lookup.input().to_owned(),
                is_loading: model.lookup.is_loading(),
            },
            listings: ListingsBody::from(&model.listings),
            overlay: OverlayView::from(model.listings.viewer()),
            contact_prompt: model.contact_prompt.as_ref().map(ContactPromptView::from),
            notice: model.notice.as_ref().map(NoticeView::from),
        }
    }
}

impl From<&ListingsView> for ListingsBody {
    fn from(view: &ListingsView) -> Self {
        if view.is_empty() {
            return Self::Empty {
                message: EMPTY_LISTINGS_MESSAGE.into(),
            };
        }
        Self::Items {
            cards: view.listings().iter().map(ListingCard::from).collect(),
        }
    }
}

impl From<&Listing> for ListingCard {
    fn from(listing: &Listing) -> Self {
        let record = &listing.record;
        Self {
            id: record.id.to_string(),
            title: record.description.to_string(),
            rent: record.rent.to_string(),
            phone_number: record.contact.phone_number.to_string(),
            can_call: record.contact.phone_number.is_known(),
            user_type: record.contact.user_type.to_string(),
            bedrooms: record.bedrooms.to_string(),
            washrooms: record.washrooms.to_string(),
            furnished: yes_no(record.furnished),
            parking: yes_no(record.parking),
            floor: record.floor.to_string(),
            brokerage: record.brokerage.to_string(),
            brokerage_fee_type: record.brokerage_fee_type.to_string(),
            food_availability: record.food_availability.to_string(),
            address: record.address.to_string(),
            full_address: record.full_address.to_string(),
            has_directions: record.location.is_known(),
            images: record.images.iter().map(|i| i.uri.clone()).collect(),
            focused_image: listing.gallery.focused(),
            can_open_viewer: listing.gallery.is_openable(),
        }
    }
}

impl From<&ImageViewer> for OverlayView {
    fn from(viewer: &ImageViewer) -> Self {
        match (viewer.current(), viewer.index()) {
            (Some(image), Some(index)) => Self::Visible {
                image_url: image.as_str().to_owned(),
                index,
                count: viewer.len(),
                can_previous: viewer.can_previous(),
                can_next: viewer.can_next(),
            },
            _ => Self::Hidden,
        }
    }
}

impl From<&ContactPrompt> for ContactPromptView {
    fn from(prompt: &ContactPrompt) -> Self {
        Self {
            title: CONTACT_PROMPT_TITLE.into(),
            message: CONTACT_PROMPT_MESSAGE.into(),
            phone_number: prompt.phone_number().to_owned(),
            options: ContactChoice::ALL
                .iter()
                .map(|&choice| ChoiceView {
                    choice,
                    label: choice.label().into(),
                })
                .collect(),
        }
    }
}

impl From<&Notice> for NoticeView {
    fn from(notice: &Notice) -> Self {
        Self {
            kind: notice.kind,
            message: notice.message.clone(),
        }
    }
}

fn yes_no(flag: bool) -> String {
    String::from(if flag { "Yes" } else { "No" })
}
