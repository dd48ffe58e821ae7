// lib.rs - shared core for the rental listings app

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
pub mod capabilities;
pub mod config;
pub mod contact;
pub mod error;
pub mod event;
pub mod gallery;
pub mod listings;
pub mod lookup;
pub mod model;
pub mod overlay;
pub mod view;

use serde::{Deserialize, Serialize};

pub use app::App;
pub use capabilities::{Capabilities, Effect};
pub use config::AppConfig;
pub use contact::{ContactChoice, ContactPrompt};
pub use crux_core::{render::Render, App as CruxApp};
pub use event::Event;
pub use listings::ListingsView;
pub use lookup::PropertyLookup;
pub use model::{ImageRef, PropertyId, PropertyRecord};
pub use overlay::ImageViewer;
pub use view::ViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    #[default]
    Info,
    Error,
}

/// Non-blocking message shown over whatever screen is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Model {
    pub config: AppConfig,
    pub lookup: PropertyLookup,
    /// Owns the single image viewer shared by all listings.
    pub listings: ListingsView,
    pub contact_prompt: Option<ContactPrompt>,
    pub notice: Option<Notice>,
}
