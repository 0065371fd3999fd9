/// Stress-test generation: build the global list, then emit every declaration
/// in order followed by randomly sampled prints.
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use rand::Rng;

use crate::config::{Destination, GenConfig};
use crate::names::GlobalList;
use crate::output::{self, Statement};

const WRITE_BUFFER: usize = 128 * 1024;

/// Per-phase wall-clock times, reported by `--debug-timing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timings {
    pub names: Duration,
    pub declarations: Duration,
    pub prints: Duration,
}

impl Timings {
    pub fn total(&self) -> Duration {
        self.names + self.declarations + self.prints
    }
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct Summary {
    pub destination: String,
    pub globals: usize,
    pub prints: usize,
    pub bytes: u64,
    pub timings: Timings,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stress test '{}' generated with {} globals and {} prints.",
            self.destination, self.globals, self.prints
        )
    }
}

/// Write `let <name> = <index>;` for every global, in list order.
pub fn emit_declarations<W: Write>(out: &mut W, globals: &GlobalList) -> io::Result<usize> {
    for (index, name) in globals.iter() {
        output::write_statement(out, Statement::Declare { name, value: index })?;
    }
    Ok(globals.len())
}

/// Write `count` print statements, each naming a global drawn uniformly with
/// replacement.
pub fn emit_prints<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    globals: &GlobalList,
    rng: &mut R,
    count: usize,
) -> Result<usize> {
    if count == 0 {
        return Ok(0);
    }
    if globals.is_empty() {
        bail!("no globals declared; cannot emit {count} print statement(s)");
    }
    for _ in 0..count {
        if let Some(name) = globals.choose(rng) {
            output::write_statement(out, Statement::Print { name })?;
        }
    }
    Ok(count)
}

/// Generate a complete program into `out`.
///
/// Does not flush; the caller owns the sink.
pub fn generate<W: Write, R: Rng + ?Sized>(
    config: &GenConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<Summary> {
    config.validate()?;

    let mut out = Counted::new(out);
    let mut timings = Timings::default();

    let t0 = Instant::now();
    let globals = GlobalList::generate(rng, config.globals, config.name_len);
    timings.names = t0.elapsed();

    let t1 = Instant::now();
    let declared =
        emit_declarations(&mut out, &globals).context("failed to write declarations")?;
    timings.declarations = t1.elapsed();

    let t2 = Instant::now();
    let printed = emit_prints(&mut out, &globals, rng, config.prints)
        .context("failed to write print statements")?;
    timings.prints = t2.elapsed();

    Ok(Summary {
        destination: config.destination.label(),
        globals: declared,
        prints: printed,
        bytes: out.bytes,
        timings,
    })
}

/// Generate into the configured destination, truncating any existing file.
///
/// Nothing is created when the config is invalid. On a write error the file
/// is left as-is.
pub fn generate_file<R: Rng + ?Sized>(config: &GenConfig, rng: &mut R) -> Result<Summary> {
    config.validate()?;

    match &config.destination {
        Destination::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::with_capacity(WRITE_BUFFER, file);
            let summary = generate(config, rng, &mut out)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            out.flush()
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
            Ok(summary)
        }
        Destination::Stdout => {
            let stdout = io::stdout().lock();
            let mut out = BufWriter::with_capacity(WRITE_BUFFER, stdout);
            let summary = generate(config, rng, &mut out)?;
            out.flush().context("failed to write to stdout")?;
            Ok(summary)
        }
    }
}

/// Byte-counting passthrough writer.
struct Counted<'a, W: Write> {
    inner: &'a mut W,
    bytes: u64,
}

impl<'a, W: Write> Counted<'a, W> {
    fn new(inner: &'a mut W) -> Self {
        Self { inner, bytes: 0 }
    }
}

impl<W: Write> Write for Counted<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
