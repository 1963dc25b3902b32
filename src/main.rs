use std::path::Path;

use fontpack::config::Config;
use fontpack::pipeline;

/// Minimal stderr sink behind the `log` facade.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!(
            "{}: {}",
            record.level().to_string().to_lowercase(),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--print-config") {
        let config = Config::default();
        match toml::to_string_pretty(&config) {
            Ok(s) => print!("{s}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("fontpack {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let Some(config_path) = args.iter().skip(1).find(|a| !a.starts_with('-')) else {
        print_usage();
        std::process::exit(2);
    };

    init_logger(args.iter().any(|a| a == "--verbose"));

    let config = match Config::load(Path::new(config_path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    match pipeline::run(&config) {
        Ok(report) => {
            println!(
                "rendered {} glyphs ({} missing, {} dropped) -> {}",
                report.rendered,
                report.missed,
                report.dropped,
                report.artifact.display()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn print_usage() {
    println!("fontpack {}", env!("CARGO_PKG_VERSION"));
    println!("Bitmap font store builder for embedded displays\n");
    println!("USAGE:");
    println!("    fontpack [OPTIONS] <config.toml>\n");
    println!("OPTIONS:");
    println!("    --print-config    Print the default configuration to stdout");
    println!("    --verbose         Enable per-glyph debug logging");
    println!("    --version, -V     Print version information");
    println!("    --help, -h        Print this help message");
}
