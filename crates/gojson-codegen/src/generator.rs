//! Generation entry point and message tree walker

use crate::templates;
use gojson_core::prelude::*;
use std::io::Write;

static TRACING_DIAGNOSTICS: TracingDiagnostics = TracingDiagnostics;

/// Renders files into an output sink, reporting through a [`Diagnostics`] sink.
///
/// A `Generator` holds no per-run state, so one value can drive any number of
/// runs, including concurrent runs over different files and sinks.
#[derive(Clone, Copy)]
pub struct Generator<'d> {
    diagnostics: &'d dyn Diagnostics,
}

impl Generator<'static> {
    /// Create a generator that reports through `tracing`
    pub fn new() -> Self {
        Self {
            diagnostics: &TRACING_DIAGNOSTICS,
        }
    }
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'d> Generator<'d> {
    /// Create a generator that reports through `diagnostics`
    pub fn with_diagnostics(diagnostics: &'d dyn Diagnostics) -> Self {
        Self { diagnostics }
    }

    pub(crate) fn diagnostics(&self) -> &'d dyn Diagnostics {
        self.diagnostics
    }

    /// Render `file` into `w`: the header, then every message depth-first.
    ///
    /// Stops at the first failure. Whatever was written before it stays in
    /// `w`; discarding a partial artifact is the caller's job.
    pub fn apply_template<W: Write + ?Sized>(
        &self,
        w: &mut W,
        file: &File,
        opts: Options,
    ) -> GenResult<()> {
        templates::render_header(w, file)
            .map_err(|source| GenError::render(format!("header for {}", file.name), source))?;

        self.apply_messages(w, &file.messages, opts)
    }

    // Pre-order: a message is emitted before its nested messages, siblings in
    // declaration order. A map entry is skipped together with its subtree.
    fn apply_messages<W: Write + ?Sized>(
        &self,
        w: &mut W,
        messages: &[Message],
        opts: Options,
    ) -> GenResult<()> {
        for message in messages {
            if message.is_map_entry() {
                self.diagnostics.note(
                    LogLevel::Debug,
                    &format!("Skipping {}, mapentry message", message.go_name),
                );
                continue;
            }

            self.diagnostics
                .note(LogLevel::Trace, &format!("Processing {}", message.go_name));
            templates::render_message(w, message, opts).map_err(|source| {
                GenError::render(format!("message {}", message.go_name), source)
            })?;

            self.apply_messages(w, &message.messages, opts)?;
        }

        Ok(())
    }
}

/// Render `file` into `w`, reporting through `tracing`.
///
/// # Examples
///
/// ```
/// use gojson_codegen::apply_template;
/// use gojson_core::{File, Message, Options};
///
/// let file = File::new("user.proto", "userspb")
///     .with_message(Message::new("User"))
///     .with_message(Message::map_entry("LabelsEntry"));
///
/// let mut out = Vec::new();
/// apply_template(&mut out, &file, Options::default()).unwrap();
///
/// let code = String::from_utf8(out).unwrap();
/// assert!(code.contains("func (msg *User) MarshalJSON()"));
/// assert!(!code.contains("LabelsEntry"));
/// ```
pub fn apply_template<W: Write + ?Sized>(w: &mut W, file: &File, opts: Options) -> GenResult<()> {
    Generator::new().apply_template(w, file, opts)
}
