mod util;

use clap::Parser;

use crate::util::{display_path, read_input};

#[derive(Parser)]
#[command(name = "hoist", about = "Convert TOML configuration to Hoist format")]
struct Cli {
    /// Path to TOML file to convert (use - for stdin)
    #[arg(short, long)]
    input: String,
}

fn main() {
    let cli = Cli::parse();

    let contents = match read_input(&cli.input) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match hoist_toml::toml_to_hoist(&contents) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error converting {}: {e}", display_path(&cli.input));
            std::process::exit(1);
        }
    }
}
