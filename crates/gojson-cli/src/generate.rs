//! Code generation command

use anyhow::{Context, Result};
use clap::Args;
use gojson_codegen::{GeneratedFile, Generator};
use gojson_core::Options;
use gojson_core::descriptor::FileDescriptorSet;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// FileDescriptorSet in JSON form ("-" reads stdin)
    #[arg(short, long)]
    pub descriptor_set: String,

    /// Schema file to generate for; repeatable (default: every file in the set)
    #[arg(short, long = "file")]
    pub files: Vec<String>,

    /// Plugin parameter string, e.g. "emit_defaults,orig_name=true"
    #[arg(short, long)]
    pub param: Option<String>,

    /// TOML file with option values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub flags: OptionFlags,

    /// Output directory (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Per-option switches; each one can only turn its option on
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct OptionFlags {
    /// Marshal enum values as numbers
    #[arg(long)]
    pub enums_as_ints: bool,

    /// Marshal fields holding their zero value
    #[arg(long)]
    pub emit_defaults: bool,

    /// Marshal with proto field names
    #[arg(long)]
    pub orig_name: bool,

    /// Discard unknown fields when unmarshaling
    #[arg(long)]
    pub allow_unknown: bool,

    /// Allow marshaling with missing required fields
    #[arg(long)]
    pub partial: bool,

    /// Indent marshaled JSON
    #[arg(long)]
    pub multiline: bool,
}

impl OptionFlags {
    fn to_options(self) -> Options {
        Options {
            partial: self.partial,
            multiline: self.multiline,
            enums_as_ints: self.enums_as_ints,
            emit_defaults: self.emit_defaults,
            orig_name: self.orig_name,
            allow_unknown_fields: self.allow_unknown,
        }
    }
}

/// Build options from the config file, then the parameter string, then flags
pub fn resolve_options(
    config: Option<&Path>,
    param: Option<&str>,
    flags: OptionFlags,
) -> Result<Options> {
    let mut options = match config {
        Some(path) => load_config(path)?,
        None => Options::default(),
    };

    if let Some(param) = param {
        options
            .apply_parameter(param)
            .with_context(|| format!("Invalid parameter: {param:?}"))?;
    }

    Ok(options.union(flags.to_options()))
}

fn load_config(path: &Path) -> Result<Options> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
}

fn read_descriptor_set(source: &str) -> Result<FileDescriptorSet> {
    let bytes = if source == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read descriptor set from stdin")?;
        buf
    } else {
        fs::read(source).with_context(|| format!("Failed to read descriptor set: {source}"))?
    };

    tracing::debug!("Read descriptor set ({} bytes)", bytes.len());

    FileDescriptorSet::from_json(&bytes)
        .with_context(|| format!("Failed to decode descriptor set: {source}"))
}

/// Write each generated file under `dir`, creating directories as needed.
///
/// Every file is staged in a temporary file next to its target first. Targets
/// are only replaced once all files were staged, so a failure while creating
/// directories or writing content leaves no generated file behind.
pub fn write_files(dir: &Path, generated: &[GeneratedFile]) -> Result<()> {
    let targets: Vec<PathBuf> = generated.iter().map(|file| dir.join(&file.name)).collect();

    for path in &targets {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let mut staged = Vec::with_capacity(targets.len());
    for (file, path) in generated.iter().zip(&targets) {
        let parent = path.parent().unwrap_or(dir);
        let mut temp = NamedTempFile::new_in(parent)
            .with_context(|| format!("Failed to stage {}", path.display()))?;
        temp.write_all(&file.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        staged.push((temp, path));
    }

    for (temp, path) in staged {
        temp.persist(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Generated {}", path.display());
    }

    Ok(())
}

/// Run code generation.
///
/// Every file is rendered in memory first; nothing is written unless the whole
/// run succeeds, and [`write_files`] replaces targets only after staging all
/// of them.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let set = read_descriptor_set(&args.descriptor_set)?;
    let options = resolve_options(args.config.as_deref(), args.param.as_deref(), args.flags)?;
    tracing::debug!(?options, "Resolved options");

    let generated = Generator::new()
        .generate_files(&set, &args.files, options)
        .context("Code generation failed")?;

    if generated.is_empty() {
        tracing::warn!("No messages found in the selected files; nothing generated");
    }

    match &args.output {
        Some(dir) => write_files(dir, &generated)?,
        None => {
            let mut stdout = io::stdout().lock();
            for file in &generated {
                stdout.write_all(&file.content)?;
            }
            stdout.flush()?;
        }
    }

    Ok(())
}
