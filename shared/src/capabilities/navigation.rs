use crux_core::capability::{CapabilityContext, Capability, Operation};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct Navigation<Ev> {
    context: CapabilityContext<NavigationOperation, Ev>,
}

impl<Ev> Capability<Ev> for Navigation<Ev> {
    type Operation = NavigationOperation;
    type MappedSelf<MappedEv> = Navigation<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Navigation::new(self.context.map_event(f))
    }
}

impl<Ev> Navigation<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<NavigationOperation, Ev>) -> Self {
        Self { context }
    }

    /// Asks the shell to leave this screen. Nothing comes back to the core.
    pub fn navigate_to(&self, destination: Destination) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(NavigationOperation::NavigateTo { destination })
                .await;
        });
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Destination {
    Home,
}

impl Destination {
    /// Route name registered in the shell's navigator.
    #[must_use]
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::Home => "Home",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum NavigationOperation {
    NavigateTo { destination: Destination },
}

impl Operation for NavigationOperation {
    type Output = ();
}
