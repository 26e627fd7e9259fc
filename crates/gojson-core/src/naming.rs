//! Go naming rules for generated identifiers.
//!
//! These follow protobuf-go so the receiver types named in generated methods
//! match the types `protoc-gen-go` emits for the same schema.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `foo_bar` | [`go_camel_case`] | `FooBar` |
//! | `Outer.Inner` | [`go_camel_case`] | `Outer_Inner` |
//! | `my-pkg` | [`go_sanitized`] | `my_pkg` |
//! | `type` | [`go_sanitized`] | `_type` |

use crate::descriptor::FileDescriptorProto;

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Convert a dotted protobuf name to a Go identifier.
///
/// # Examples
///
/// ```
/// use gojson_core::naming::go_camel_case;
///
/// assert_eq!(go_camel_case("user_profile"), "UserProfile");
/// assert_eq!(go_camel_case("Outer.Inner"), "Outer_Inner");
/// assert_eq!(go_camel_case("_hidden"), "XHidden");
/// ```
pub fn go_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 1);
    let next_is_lower = |i: usize| chars.get(i + 1).is_some_and(char::is_ascii_lowercase);

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            // ".x" joins words
            '.' if next_is_lower(i) => {}
            '.' => result.push('_'),
            '_' if i == 0 || chars[i - 1] == '.' => result.push('X'),
            // "_x" joins words
            '_' if next_is_lower(i) => {}
            c if c.is_ascii_digit() => result.push(c),
            c => {
                result.push(c.to_ascii_uppercase());
                while next_is_lower(i) {
                    i += 1;
                    result.push(chars[i]);
                }
            }
        }
        i += 1;
    }

    result
}

/// Coerce an arbitrary string into a valid Go identifier.
///
/// Letters and decimal digits are kept; everything else becomes `_`. A leading
/// non-letter or a Go keyword gets a `_` prefix.
pub fn go_sanitized(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if is_go_letter(c) || c.is_ascii_digit() { c } else { '_' })
        .collect();

    let starts_with_letter = sanitized.chars().next().is_some_and(is_go_letter);
    if !starts_with_letter || GO_KEYWORDS.contains(&sanitized.as_str()) {
        format!("_{sanitized}")
    } else {
        sanitized
    }
}

// Letter numbers such as `Ⅻ` are alphabetic to Rust but not letters in Go.
fn is_go_letter(c: char) -> bool {
    c.is_alphabetic() && !c.is_numeric()
}

/// Resolve the Go package name for a file.
///
/// In order of preference: the explicit name after `;` in `go_package`, the
/// last path element of `go_package`, the proto package with dots replaced,
/// then the file's base name.
pub fn go_package_name(file: &FileDescriptorProto) -> String {
    let raw = if let Some(go_package) = file.go_package() {
        match go_package.rsplit_once(';') {
            Some((_, name)) => name.to_string(),
            None => base_name(go_package).to_string(),
        }
    } else if let Some(package) = file.proto_package() {
        package.replace('.', "_")
    } else {
        base_name(file.name_prefix()).to_string()
    };

    go_sanitized(&raw)
}

/// Last `/`-separated element of a path
pub fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
