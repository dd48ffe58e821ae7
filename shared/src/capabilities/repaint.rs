use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Independently drawn surfaces. Repainting one must not redraw the listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Full-screen image viewer.
    Overlay,
    /// Contact prompt and notices.
    Dialog,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepaintOperation {
    pub layer: Layer,
}

impl Operation for RepaintOperation {
    type Output = ();
}

/// Like `Render`, but scoped to one [`Layer`]. The shell re-reads the view
/// model and redraws only that layer.
pub struct Repaint<E> {
    context: CapabilityContext<RepaintOperation, E>,
}

impl<Ev> Capability<Ev> for Repaint<Ev> {
    type Operation = RepaintOperation;
    type MappedSelf<MappedEv> = Repaint<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Repaint::new(self.context.map_event(f))
    }
}

impl<E> Repaint<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<RepaintOperation, E>) -> Self {
        Self { context }
    }

    pub fn layer(&self, layer: Layer) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(RepaintOperation { layer }).await;
        });
    }
}
