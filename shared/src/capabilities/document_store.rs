use crux_core::capability::{CapabilityContext, Capability, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{AppError, ErrorKind};

/// Flat, string-keyed document body as the remote store receives it.
pub type DocumentFields = Map<String, Value>;

pub const MAX_SEGMENT_LENGTH: usize = 1500;

/// Writes whole documents to the remote document database.
#[derive(Clone)]
pub struct DocumentStore<Ev> {
    context: CapabilityContext<DocumentOperation, Ev>,
}

impl<Ev> Capability<Ev> for DocumentStore<Ev> {
    type Operation = DocumentOperation;
    type MappedSelf<MappedEv> = DocumentStore<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        DocumentStore::new(self.context.map_event(f))
    }
}

impl<Ev> DocumentStore<Ev>
where
    Ev: 'static,
{
    pub fn new(context: CapabilityContext<DocumentOperation, Ev>) -> Self {
        Self { context }
    }

    /// Replaces the document at `path` with `fields`. Fields absent from
    /// `fields` are removed from the stored document.
    pub fn set<F>(&self, path: &DocumentPath, fields: DocumentFields, make_event: F)
    where
        F: FnOnce(Result<(), StoreError>) -> Ev + Send + Sync + 'static,
    {
        let ctx = self.context.clone();
        let operation = DocumentOperation::Set {
            path: path.raw(),
            fields,
        };
        self.context.spawn(async move {
            let output = ctx.request_from_shell(operation).await;
            ctx.update_app(make_event(output));
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DocumentOperation {
    Set { path: String, fields: DocumentFields },
}

impl Operation for DocumentOperation {
    type Output = Result<(), StoreError>;
}

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum StoreError {
    #[error("network unreachable: {message}")]
    Network { message: String },

    #[error("permission denied for {path}")]
    PermissionDenied { path: String },

    #[error("store unavailable")]
    Unavailable,

    #[error("store fault: {message}")]
    Unknown { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        let kind = match &e {
            StoreError::Network { .. } => ErrorKind::Network,
            StoreError::PermissionDenied { .. } => ErrorKind::Authorization,
            StoreError::Unavailable => ErrorKind::Unavailable,
            StoreError::Unknown { .. } => ErrorKind::Unknown,
        };
        AppError::new(kind, "Profile write failed").with_internal(e.to_string())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DocumentPathError {
    #[error("invalid path segment {segment:?}: {reason}")]
    InvalidSegment { segment: String, reason: String },
}

impl From<DocumentPathError> for AppError {
    fn from(e: DocumentPathError) -> Self {
        AppError::new(ErrorKind::Validation, "Profile path rejected").with_internal(e.to_string())
    }
}

/// `<collection>/<document id>` address of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentPath {
    collection: String,
    id: String,
}

impl DocumentPath {
    pub fn new(
        collection: impl Into<String>,
        id: impl Into<String>,
    ) -> Result<Self, DocumentPathError> {
        let collection = collection.into();
        let id = id.into();
        Self::validate_segment(&collection)?;
        Self::validate_segment(&id)?;
        Ok(Self { collection, id })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn raw(&self) -> String {
        self.to_string()
    }

    fn validate_segment(segment: &str) -> Result<(), DocumentPathError> {
        let invalid = |reason: &str| DocumentPathError::InvalidSegment {
            segment: segment.to_string(),
            reason: reason.to_string(),
        };

        if segment.is_empty() {
            return Err(invalid("segment cannot be empty"));
        }

        if segment.len() > MAX_SEGMENT_LENGTH {
            return Err(DocumentPathError::InvalidSegment {
                segment: segment.chars().take(50).collect::<String>() + "...",
                reason: format!("segment exceeds maximum length of {MAX_SEGMENT_LENGTH} bytes"),
            });
        }

        if segment == "." || segment == ".." {
            return Err(invalid("segment cannot be a relative path"));
        }

        if segment.contains('/') {
            return Err(invalid("segment cannot contain a path separator"));
        }

        if segment.chars().any(char::is_control) {
            return Err(invalid("segment contains control characters"));
        }

        Ok(())
    }
}

impl std::fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.collection, self.id)
    }
}
