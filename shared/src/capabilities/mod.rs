mod launcher;
mod navigator;
mod repaint;

pub use self::launcher::{LaunchError, LaunchOperation, LaunchOutput, LaunchResult, Launcher};
pub use self::navigator::{NavigateOperation, NavigationIntent, Navigator};
pub use self::repaint::{Layer, Repaint, RepaintOperation};

// Full-view renders use Crux's built-in Render; layer-scoped ones go
// through Repaint.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::app::App;
use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub repaint: Repaint<Event>,
    pub navigator: Navigator<Event>,
    pub launcher: Launcher<Event>,
    pub http: Http<Event>,
}
