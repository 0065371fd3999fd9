use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use globstress::config::{self, Destination, GenConfig};
use globstress::generate::Summary;

#[derive(Parser)]
#[command(
    name = "globstress",
    about = "Generate a global-variable stress test for a Lox-style interpreter",
    version
)]
struct Cli {
    /// Output path; `-` writes the program to stdout
    #[arg(short = 'o', long, default_value = config::DEFAULT_OUTPUT)]
    output: String,

    /// Number of `let` declarations
    #[arg(short = 'g', long, default_value_t = config::DEFAULT_GLOBALS)]
    globals: usize,

    /// Number of `print` statements
    #[arg(short = 'p', long, default_value_t = config::DEFAULT_PRINTS)]
    prints: usize,

    /// Length of the random lowercase part of each name
    #[arg(long = "name-len", default_value_t = config::DEFAULT_NAME_LEN)]
    name_len: usize,

    /// Seed the RNG for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print timing breakdown to stderr (for profiling)
    #[arg(long = "debug-timing", hide = true)]
    debug_timing: bool,
}

impl Cli {
    fn to_config(&self) -> GenConfig {
        GenConfig {
            destination: Destination::from_arg(&self.output),
            globals: self.globals,
            prints: self.prints,
            name_len: self.name_len,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let summary = globstress::generate_file(&config, &mut rng)?;

    // Keep stdout clean when it carries the program itself.
    if config.destination == Destination::Stdout {
        eprintln!("{summary}");
    } else {
        println!("{summary}");
    }

    if cli.debug_timing {
        print_timing(&summary);
    }

    Ok(())
}

fn print_timing(summary: &Summary) {
    let t = &summary.timings;
    let total = t.total();
    let total_secs = total.as_secs_f64().max(f64::EPSILON);
    let mb = summary.bytes as f64 / (1024.0 * 1024.0);

    eprintln!(
        "--- debug-timing: {} ({} globals, {} prints, {mb:.2} MB) ---",
        summary.destination, summary.globals, summary.prints
    );
    eprintln!(
        "  names:  {:>8.2}ms  ({:.0}%)",
        t.names.as_secs_f64() * 1000.0,
        t.names.as_secs_f64() / total_secs * 100.0
    );
    eprintln!(
        "  let:    {:>8.2}ms  ({:.0}%)",
        t.declarations.as_secs_f64() * 1000.0,
        t.declarations.as_secs_f64() / total_secs * 100.0
    );
    eprintln!(
        "  print:  {:>8.2}ms  ({:.0}%)",
        t.prints.as_secs_f64() * 1000.0,
        t.prints.as_secs_f64() / total_secs * 100.0
    );
    eprintln!(
        "  total:  {:>8.2}ms  ({:.0} MB/s)",
        total.as_secs_f64() * 1000.0,
        mb / total_secs
    );
}
