pub mod commands;
mod manifest;

pub use manifest::ModelManifest;

use tracing_subscriber::EnvFilter;

pub fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    if args.is_empty() {
        print_usage();
        return Err("No command provided".into());
    }

    match args[0].as_str() {
        "generate" => commands::generate::execute(&args[1..]),
        "check" => commands::check::execute(&args[1..]),
        "info" => commands::info::execute(&args[1..]),
        "help" => {
            print_usage();
            Ok(())
        }
        "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        "-v" | "--version" => {
            print_version();
            Ok(())
        }
        _ => {
            eprintln!("Error: Unknown command '{}'", args[0]);
            print_usage();
            Err(format!("Unknown command: {}", args[0]).into())
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

fn print_usage() {
    println!("Gesture Edge - embedded model data tooling for on-device gesture recognition");
    println!();
    println!("USAGE:");
    println!("    gesture-edge <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    generate  Render a crate's model defining unit from a trained artifact");
    println!("    check     Verify a generated crate's model data is consistent");
    println!("    info      Print length and file identifier of a model artifact");
    println!("    help      Print this help message");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version information");
}

fn print_version() {
    println!("gesture-edge {}", env!("CARGO_PKG_VERSION"));
}
