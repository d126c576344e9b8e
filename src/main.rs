use std::path::PathBuf;

use clap::Parser;

use bodhi_release::module_runtime;

/// Ansible module that creates a Bodhi release when it does not exist yet.
#[derive(Parser)]
#[command(name = "bodhi_release")]
#[command(about = "Create a Bodhi release if it does not exist", long_about = None)]
struct Cli {
    /// JSON file holding the module arguments (written by Ansible)
    args_file: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let response = module_runtime::execute(&cli.args_file);
    println!("{}", response.to_json());
    if response.is_failed() {
        std::process::exit(1);
    }
}
