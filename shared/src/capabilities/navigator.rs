use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};

/// Where the shell's navigator should take the user. Carries no parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationIntent {
    GoBack,
    /// Unconditional reset of the route stack to the login screen.
    ResetToLogin,
    ShowListings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavigateOperation {
    pub intent: NavigationIntent,
}

impl Operation for NavigateOperation {
    type Output = ();
}

pub struct Navigator<E> {
    context: CapabilityContext<NavigateOperation, E>,
}

impl<Ev> Capability<Ev> for Navigator<Ev> {
    type Operation = NavigateOperation;
    type MappedSelf<MappedEv> = Navigator<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Navigator::new(self.context.map_event(f))
    }
}

impl<E> Navigator<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<NavigateOperation, E>) -> Self {
        Self { context }
    }

    /// Fire-and-forget.
    pub fn navigate(&self, intent: NavigationIntent) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(NavigateOperation { intent }).await;
        });
    }
}
