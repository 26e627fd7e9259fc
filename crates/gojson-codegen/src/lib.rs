//! gojson-codegen - protojson marshalers for Go protobuf messages
//!
//! Given a resolved schema [`File`](gojson_core::File) and a set of
//! [`Options`](gojson_core::Options), emits a Go source file declaring, for every
//! message, `MarshalJSON` and `UnmarshalJSON` methods that delegate to
//! `google.golang.org/protobuf/encoding/protojson` with the options baked in.
//!
//! # Pipeline
//!
//! ```text
//! FileDescriptorSet (JSON)
//!     ↓
//!  [File::from_descriptor]
//!     ↓
//!   File / Message tree
//!     ↓
//!  [Generator::apply_template]
//!     ├─→ header block (once)
//!     └─→ message block per non-map-entry message, depth-first
//! ```
//!
//! Synthetic map-entry messages and everything nested under them are skipped.

pub mod driver;
pub mod generator;
pub mod templates;

pub use driver::{GENERATED_SUFFIX, GeneratedFile, output_file_name};
pub use generator::{Generator, apply_template};
