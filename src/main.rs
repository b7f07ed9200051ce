// SPDX-License-Identifier: MIT
//
// brandforge — deterministic brand-to-design-token synthesis.
//
// The binary is a thin shell over forge-tokens:
//
//   args / env → BrandRequest → synthesize → TokenSnapshot → stdout
//
// stdout only ever carries the rendered tokens (JSON, CSS or a flat
// key=value list) so it can be piped into generators. Diagnostics go to
// stderr through tracing, filtered by RUST_LOG (default `warn`, `--verbose`
// raises it to `debug`).
//
// `--verify FILE` takes the other direction: it loads a stored snapshot and
// checks that its palettes and its recorded inputs still reproduce it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, ValueEnum};
use forge_tokens::export::{css_variables, flat_record};
use forge_tokens::{BrandRequest, TokenSnapshot, synthesize};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Output rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Full snapshot as pretty JSON.
    Json,
    /// CSS custom properties for light and dark.
    Css,
    /// One `key=value` line per token.
    Flat,
}

#[derive(Parser, Debug)]
#[command(name = "brandforge", version)]
#[command(about = "Derive a deterministic design-token set from brand signals")]
struct Cli {
    /// What the product should do, e.g. "legal case tracker"
    #[arg(long, short, env = "BRANDFORGE_DIRECTIVE", default_value = "")]
    directive: String,

    /// Product name
    #[arg(long, short, env = "BRANDFORGE_NAME", default_value = "")]
    name: String,

    /// Tone, positioning and values, already joined
    #[arg(long, short, env = "BRANDFORGE_STATEMENT", default_value = "")]
    statement: String,

    /// One-line pitch
    #[arg(long, short, env = "BRANDFORGE_PITCH", default_value = "")]
    pitch: String,

    /// Output format
    #[arg(long, short, value_enum, env = "BRANDFORGE_FORMAT", default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Verify a stored snapshot instead of synthesizing
    #[arg(long, value_name = "FILE", conflicts_with_all = ["directive", "name", "statement", "pitch"])]
    verify: Option<PathBuf>,

    /// Log pipeline decisions to stderr
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn request(&self) -> BrandRequest {
        BrandRequest::new(self.directive.as_str(), self.name.as_str())
            .with_statement(self.statement.as_str())
            .with_pitch(self.pitch.as_str())
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("installing log subscriber: {err}"))
}

fn render(snapshot: &TokenSnapshot, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => {
            let mut json = snapshot.to_json().context("encoding snapshot")?;
            json.push('\n');
            json
        }
        OutputFormat::Css => css_variables(snapshot),
        OutputFormat::Flat => flat_record(snapshot)
            .into_iter()
            .map(|(key, value)| format!("{key}={value}\n"))
            .collect(),
    })
}

fn verify(path: &Path) -> Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let snapshot = TokenSnapshot::from_json(&json)
        .with_context(|| format!("decoding snapshot {}", path.display()))?;

    if !snapshot.scales_consistent() {
        bail!("{}: stored scales do not match the stored hues and chromas", path.display());
    }
    if !snapshot.is_reproducible() {
        bail!("{}: recorded inputs no longer reproduce this snapshot", path.display());
    }
    info!(path = %path.display(), seed = snapshot.fingerprint.seed, "snapshot verified");
    Ok(format!("ok: {} (seed {})\n", path.display(), snapshot.fingerprint.seed))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let output = match &cli.verify {
        Some(path) => verify(path)?,
        None => {
            let request = cli.request();
            debug!(?request, format = ?cli.format, "synthesizing");
            render(&synthesize(&request), cli.format)?
        }
    };

    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("writing output")?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("brandforge").chain(args.iter().copied())).unwrap()
    }

    // ── Arguments ─────────────────────────────────────────────────────────

    #[test]
    fn defaults_to_json() {
        let cli = parse(&["--directive", "Build a CRM", "--name", "Acme"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.request(), BrandRequest::new("Build a CRM", "Acme"));
    }

    #[test]
    fn format_values() {
        assert_eq!(parse(&["--format", "css"]).format, OutputFormat::Css);
        assert_eq!(parse(&["-f", "flat"]).format, OutputFormat::Flat);
    }

    #[test]
    fn verify_conflicts_with_inputs() {
        let err = Cli::try_parse_from(["brandforge", "--verify", "x.json", "--name", "Acme"]);
        assert!(err.is_err());
    }

    #[test]
    fn logging_installs_once() {
        assert!(init_logging(false).is_ok());
        let err = init_logging(true).unwrap_err();
        assert!(err.to_string().starts_with("installing log subscriber"));
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    #[test]
    fn flat_output_is_key_value_lines() {
        let snap = synthesize(&BrandRequest::new("Build a CRM", "Acme"));
        let out = render(&snap, OutputFormat::Flat).unwrap();
        assert!(out.starts_with("meta.version=1\n"));
        assert!(out.lines().all(|l| l.contains('=')));
        assert!(out.contains("meta.seed=1503305566\n"));
    }

    #[test]
    fn json_output_decodes() {
        let snap = synthesize(&BrandRequest::new("legal case tracker", "Casewell"));
        let out = render(&snap, OutputFormat::Json).unwrap();
        assert_eq!(TokenSnapshot::from_json(&out).unwrap(), snap);
    }

    #[test]
    fn verify_accepts_fresh_snapshot() {
        let snap = synthesize(&BrandRequest::new("a recipe app", "Forkful"));
        let path = std::env::temp_dir().join(format!("brandforge-verify-{}.json", std::process::id()));
        fs::write(&path, snap.to_json().unwrap()).unwrap();
        let result = verify(&path);
        let _ = fs::remove_file(&path);
        assert!(result.unwrap().starts_with("ok: "));
    }

    #[test]
    fn verify_rejects_missing_file() {
        assert!(verify(Path::new("/nonexistent/brandforge.json")).is_err());
    }
}
