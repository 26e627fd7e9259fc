//! gojson-core - Schema model, options, and diagnostics
//!
//! This crate provides the inputs consumed by the protojson code generator:
//! - [`File`] and [`Message`], the read-only schema tree
//! - [`Options`], the six encoding-policy flags baked into generated code
//! - [`Diagnostics`] for low-verbosity progress and skip notes
//! - [`GenError`] for error handling
//!
//! Descriptor input (the JSON form of a protobuf `FileDescriptorSet`) lives in
//! [`descriptor`]; the Go naming rules used to resolve it live in [`naming`].

pub mod descriptor;
mod diagnostics;
mod error;
mod model;
pub mod naming;
mod options;

pub use diagnostics::{Diagnostics, LogLevel, NullDiagnostics, TracingDiagnostics};
pub use error::{GenError, GenResult};
pub use model::{File, Message};
pub use options::Options;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::descriptor::FileDescriptorSet;
    pub use crate::{
        Diagnostics, File, GenError, GenResult, LogLevel, Message, NullDiagnostics, Options,
        TracingDiagnostics,
    };
}
