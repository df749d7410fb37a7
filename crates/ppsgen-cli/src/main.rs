use clap::Parser;
use ppsgen::{generate, logger};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ppsgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Plugin stub generator",
    long_about = "ppsgen compiles a plugin manifest (.pplugin) into a typed Python .pyi stub\nwith embedded documentation, for consumption by host tooling."
)]
struct Cli {
    /// Path to the plugin manifest file
    manifest: PathBuf,

    /// Output directory for the generated stub (written under pps/)
    output: PathBuf,

    /// Override existing files
    #[arg(long)]
    r#override: bool,

    #[arg(short, long, help = "Decrease verbosity")]
    quiet: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase verbosity (-v for debug)")]
    verbose: u8,
}

impl Cli {
    fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    match generate::handle_generate(&cli.manifest, &cli.output, cli.r#override) {
        Ok(path) => {
            println!("Stub generated at: {}", path.display());
        }
        Err(e) => {
            logger::error(&e.to_string());
            println!("{}", e);
            std::process::exit(1);
        }
    }
}
