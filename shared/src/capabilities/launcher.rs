use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ask the platform to open a URI (`tel:`, maps links).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "op", content = "data")]
pub enum LaunchOperation {
    OpenUri { uri: String },
}

impl LaunchOperation {
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::OpenUri { uri } => uri,
        }
    }
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum LaunchError {
    #[error("no application can handle {scheme} links")]
    NoHandler { scheme: String },

    #[error("platform refused to open uri: {reason}")]
    Refused { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum LaunchOutput {
    Opened,
    Failed(LaunchError),
}

impl Operation for LaunchOperation {
    type Output = LaunchOutput;
}

pub type LaunchResult = Result<(), LaunchError>;

impl From<LaunchOutput> for LaunchResult {
    fn from(output: LaunchOutput) -> Self {
        match output {
            LaunchOutput::Opened => Ok(()),
            LaunchOutput::Failed(e) => Err(e),
        }
    }
}

pub struct Launcher<E> {
    context: CapabilityContext<LaunchOperation, E>,
}

impl<Ev> Capability<Ev> for Launcher<Ev> {
    type Operation = LaunchOperation;
    type MappedSelf<MappedEv> = Launcher<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Launcher::new(self.context.map_event(f))
    }
}

impl<E> Launcher<E>
where
    E: 'static,
{
    pub fn new(context: CapabilityContext<LaunchOperation, E>) -> Self {
        Self { context }
    }

    pub fn open_uri<F>(&self, uri: impl Into<String>, callback: F)
    where
        F: FnOnce(LaunchResult) -> E + Send + 'static,
    {
        let ctx = self.context.clone();
        let operation = LaunchOperation::OpenUri { uri: uri.into() };
        self.context.spawn(async move {
            let output = ctx.request_from_shell(operation).await;
            ctx.update_app(callback(output.into()));
        });
    }
}
