//! Go source templates.
//!
//! Each template is a pure function from its inputs to one text block. The
//! `render_*` wrappers write a whole block to the sink in a single
//! `write_all`, so a block is either handed to the sink complete or not at all.

use gojson_core::{File, Message, Options};
use std::io::{self, Write};

/// Import path of the JSON-mapping runtime called by the generated code
pub const PROTOJSON_IMPORT: &str = "google.golang.org/protobuf/encoding/protojson";

/// Extra marshal parameters emitted only when `multiline` is set
const MULTILINE_PARAMS: &str = "\t\tMultiline: true,\n\t\tIndent: \"\\t\",\n";

/// Banner, package clause, and runtime import for one generated file.
pub fn header_block(file: &File) -> String {
    let mut code = String::new();

    code.push_str("// Code generated by protoc-gen-go-json. DO NOT EDIT.\n");
    code.push_str(&format!("// source: {}\n\n", file.name));
    code.push_str(&format!("package {}\n\n", file.go_package_name));
    code.push_str("import (\n");
    code.push_str(&format!("\t\"{PROTOJSON_IMPORT}\"\n"));
    code.push_str(")\n");

    code
}

/// `MarshalJSON` and `UnmarshalJSON` methods for one message.
///
/// Every flag in `opts` is written out as a Go boolean literal.
pub fn message_block(message: &Message, opts: Options) -> String {
    let name = &message.go_name;
    let mut code = String::new();

    // Marshal
    code.push_str("\n// MarshalJSON implements json.Marshaler\n");
    code.push_str(&format!(
        "func (msg *{name}) MarshalJSON() ([]byte, error) {{\n"
    ));
    code.push_str("\treturn protojson.MarshalOptions{\n");
    code.push_str(&format!("\t\tUseEnumNumbers: {},\n", opts.enums_as_ints));
    code.push_str(&format!("\t\tEmitUnpopulated: {},\n", opts.emit_defaults));
    code.push_str(&format!("\t\tUseProtoNames: {},\n", opts.orig_name));
    code.push_str(&format!("\t\tAllowPartial: {},\n", opts.partial));
    if opts.multiline {
        code.push_str(MULTILINE_PARAMS);
    }
    code.push_str("\t}.Marshal(msg)\n");
    code.push_str("}\n");

    // Unmarshal
    code.push_str("\n// UnmarshalJSON implements json.Unmarshaler\n");
    code.push_str(&format!(
        "func (msg *{name}) UnmarshalJSON(b []byte) error {{\n"
    ));
    code.push_str("\treturn protojson.UnmarshalOptions{\n");
    code.push_str(&format!(
        "\t\tDiscardUnknown: {},\n",
        opts.allow_unknown_fields
    ));
    code.push_str("\t}.Unmarshal(b, msg)\n");
    code.push_str("}\n");

    code
}

/// Write the header block for `file`
pub fn render_header<W: Write + ?Sized>(w: &mut W, file: &File) -> io::Result<()> {
    w.write_all(header_block(file).as_bytes())
}

/// Write the method block for `message`
pub fn render_message<W: Write + ?Sized>(
    w: &mut W,
    message: &Message,
    opts: Options,
) -> io::Result<()> {
    w.write_all(message_block(message, opts).as_bytes())
}
