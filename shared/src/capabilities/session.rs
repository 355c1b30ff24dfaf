use crux_core::capability::{CapabilityContext, Capability, Operation};
use serde::{Deserialize, Serialize};

/// Resolves the identity of the signed-in user from the shell's auth provider.
#[derive(Clone)]
pub struct Session<Ev> {
    context: CapabilityContext<SessionOperation, Ev>,
}

impl<Ev> Capability<Ev> for Session<Ev> {
    type Operation = SessionOperation;
    type MappedSelf<MappedEv> = Session<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Session::new(self.context.map_event(f))
    }
}

impl<Ev> Session<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<SessionOperation, Ev>) -> Self {
        Self { context }
    }

    pub fn current_user<F>(&self, make_event: F)
    where
        F: FnOnce(SessionOutput) -> Ev + Send + Sync + 'static,
    {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            let output = ctx.request_from_shell(SessionOperation::CurrentUser).await;
            ctx.update_app(make_event(output));
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionOperation {
    CurrentUser,
}

impl Operation for SessionOperation {
    type Output = SessionOutput;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionOutput {
    SignedIn { user_id: String },
    SignedOut,
}

impl SessionOutput {
    /// The signed-in user's identifier. A blank identifier counts as no session.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Self::SignedIn { user_id } if !user_id.is_empty() => Some(user_id),
            _ => None,
        }
    }
}
