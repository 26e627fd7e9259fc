//! Drives generation over a descriptor set, one output file per input file

use crate::generator::Generator;
use gojson_core::descriptor::FileDescriptorProto;
use gojson_core::prelude::*;

/// Suffix appended to a file's name prefix to form its output name
pub const GENERATED_SUFFIX: &str = ".pb.json.go";

/// Rendered output for one schema file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Output path relative to the output root, e.g. `acme/user.pb.json.go`
    pub name: String,

    pub content: Vec<u8>,
}

/// Output path for a schema file: `acme/user.proto` -> `acme/user.pb.json.go`
pub fn output_file_name(file: &FileDescriptorProto) -> String {
    format!("{}{GENERATED_SUFFIX}", file.name_prefix())
}

impl Generator<'_> {
    /// Render every requested file of `set` into its own buffer.
    ///
    /// An empty `files_to_generate` selects every file in the set. Files
    /// without top-level messages produce no output. The first failure aborts
    /// the run and no later file is rendered.
    pub fn generate_files(
        &self,
        set: &FileDescriptorSet,
        files_to_generate: &[String],
        opts: Options,
    ) -> GenResult<Vec<GeneratedFile>> {
        let selected: Vec<&FileDescriptorProto> = if files_to_generate.is_empty() {
            set.file.iter().collect()
        } else {
            files_to_generate
                .iter()
                .map(|name| {
                    set.file_by_name(name)
                        .ok_or_else(|| GenError::MissingFile(name.clone()))
                })
                .collect::<GenResult<_>>()?
        };

        let mut generated = Vec::new();
        for descriptor in selected {
            if descriptor.message_type.is_empty() {
                self.diagnostics().note(
                    LogLevel::Info,
                    &format!("Skipping {}, no messages", descriptor.name),
                );
                continue;
            }

            let name = output_file_name(descriptor);
            self.diagnostics()
                .note(LogLevel::Debug, &format!("Generating {name}"));

            let file = File::from_descriptor(descriptor);
            let mut content = Vec::new();
            self.apply_template(&mut content, &file, opts)?;

            generated.push(GeneratedFile { name, content });
        }

        Ok(generated)
    }
}
