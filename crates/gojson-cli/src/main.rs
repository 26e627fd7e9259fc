//! protoc-gen-go-json - protojson marshalers for Go protobuf messages
//!
//! Reads a `FileDescriptorSet` in JSON form and writes one `<file>.pb.json.go`
//! per selected schema file, declaring `MarshalJSON`/`UnmarshalJSON` for
//! every message.

use clap::Parser;

mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "protoc-gen-go-json")]
#[command(author, version, about = "Generate protojson marshalers for Go protobuf messages", long_about = None)]
struct Cli {
    #[command(flatten)]
    generate: generate::GenerateArgs,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose);
    generate::run(&cli.generate)?;

    Ok(())
}
