mod document_store;
mod navigation;
mod session;

pub use self::document_store::{
    DocumentFields, DocumentOperation, DocumentPath, DocumentPathError, DocumentStore, StoreError,
};
pub use self::navigation::{Destination, Navigation, NavigationOperation};
pub use self::session::{Session, SessionOperation, SessionOutput};

pub use crux_core::render::Render;

use crate::event::Event;
use crate::App;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub render: Render<Event>,
    pub session: Session<Event>,
    pub document_store: DocumentStore<Event>,
    pub navigation: Navigation<Event>,
}
