//! Encoding-policy options baked into generated code

use crate::error::{GenError, GenResult};
use serde::{Deserialize, Serialize};

/// Six independent flags controlling the emitted marshalers.
///
/// Every flag is written into the generated Go code as a boolean literal.
///
/// | Flag | Emitted as |
/// |------|------------|
/// | `enums_as_ints` | `UseEnumNumbers` |
/// | `emit_defaults` | `EmitUnpopulated` |
/// | `orig_name` | `UseProtoNames` |
/// | `partial` | `AllowPartial` |
/// | `multiline` | `Multiline` + `Indent` (only when set) |
/// | `allow_unknown_fields` | `DiscardUnknown` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Allow messages with unset required fields to marshal
    pub partial: bool,

    /// Indent marshaled output with tabs
    pub multiline: bool,

    /// Emit enum values as numbers instead of names
    pub enums_as_ints: bool,

    /// Emit fields that hold their zero value
    pub emit_defaults: bool,

    /// Use proto field names instead of lowerCamelCase JSON names
    pub orig_name: bool,

    /// Drop unknown JSON fields when unmarshaling
    #[serde(alias = "allow_unknown")]
    pub allow_unknown_fields: bool,
}

// Parameter keys consumed by protoc-gen-go's own option handling
const RESERVED_KEYS: &[&str] = &["paths", "module", "annotate_code"];

impl Options {
    /// Create options with every flag unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a protoc plugin parameter string.
    ///
    /// The string is a comma-separated list of `key` or `key=value` items. A
    /// bare key turns the option on. Keys reserved by protoc-gen-go (`paths`,
    /// `module`, `annotate_code`, `M<file>=<pkg>`) are accepted and ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use gojson_core::Options;
    ///
    /// let opts = Options::from_parameter("emit_defaults,orig_name=true,multiline=false").unwrap();
    /// assert!(opts.emit_defaults);
    /// assert!(opts.orig_name);
    /// assert!(!opts.multiline);
    /// ```
    pub fn from_parameter(parameter: &str) -> GenResult<Self> {
        let mut options = Self::default();
        options.apply_parameter(parameter)?;
        Ok(options)
    }

    /// Apply a plugin parameter string on top of the current flags.
    ///
    /// Only keys named in `parameter` change; see [`Options::from_parameter`]
    /// for the syntax.
    pub fn apply_parameter(&mut self, parameter: &str) -> GenResult<()> {
        for item in parameter.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let (key, value) = match item.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (item, None),
            };

            if key.is_empty() {
                return Err(GenError::InvalidParameter(item.to_string()));
            }
            if RESERVED_KEYS.contains(&key) || key.starts_with('M') {
                continue;
            }

            let enabled = match value {
                Some(value) => parse_bool(key, value)?,
                None => true,
            };
            self.set(key, enabled)?;
        }

        Ok(())
    }

    /// Set a flag by its parameter key
    pub fn set(&mut self, key: &str, enabled: bool) -> GenResult<()> {
        let flag = match key {
            "partial" => &mut self.partial,
            "multiline" => &mut self.multiline,
            "enums_as_ints" => &mut self.enums_as_ints,
            "emit_defaults" => &mut self.emit_defaults,
            "orig_name" => &mut self.orig_name,
            "allow_unknown" | "allow_unknown_fields" => &mut self.allow_unknown_fields,
            _ => return Err(GenError::UnknownOption(key.to_string())),
        };
        *flag = enabled;
        Ok(())
    }

    /// Combine two option sets; a flag is on if it is on in either
    pub fn union(self, other: Options) -> Options {
        Options {
            partial: self.partial || other.partial,
            multiline: self.multiline || other.multiline,
            enums_as_ints: self.enums_as_ints || other.enums_as_ints,
            emit_defaults: self.emit_defaults || other.emit_defaults,
            orig_name: self.orig_name || other.orig_name,
            allow_unknown_fields: self.allow_unknown_fields || other.allow_unknown_fields,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> GenResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(GenError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "options/options_tests.rs"]
mod options_tests;

#[cfg(test)]
#[path = "options/options_parameterized_tests.rs"]
mod options_parameterized_tests;
