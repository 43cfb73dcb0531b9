//! Command-line inspector for resolved asset URLs.
//!
//! Resolves references exactly as the view helpers would, which makes it
//! easy to verify shard assignments and debug-mode behavior before
//! uploading assets to a distribution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;

use cdn_asset_urls::{AssetKind, AssetResolver, RequestContext, ResolverConfig, TimestampPolicy};

/// Resolve asset references against a CDN configuration.
#[derive(Debug, Parser)]
#[command(name = "cdn_url", version, about)]
struct Cli {
    /// Path to a JSON configuration file. When omitted, a discoverable
    /// `cdn_assets.config.json` in the current directory is used, falling
    /// back to defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Asset category to resolve: img, js or css.
    #[arg(long, default_value = "img")]
    kind: String,

    /// Treat the request as served over TLS.
    #[arg(long)]
    tls: bool,

    /// Current request host, used by the debug-mode override.
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Pretend the client sent `Accept-Encoding: gzip`.
    #[arg(long)]
    gzip: bool,

    /// Run in local-debug mode; asset hosts collapse to --host.
    #[arg(long)]
    debug: bool,

    /// Timestamp policy: off, enabled or force.
    #[arg(long, default_value = "off")]
    timestamp: String,

    /// Asset references to resolve.
    #[arg(required = true)]
    refs: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ResolverConfig::from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ResolverConfig::discover(Path::new(".")),
    };

    let kind = match cli.kind.as_str() {
        "img" | "image" => AssetKind::Image,
        "js" | "script" => AssetKind::Script,
        "css" | "style" => AssetKind::Style,
        other => bail!("unknown asset kind `{other}` (expected img, js or css)"),
    };

    let timestamp_policy = match cli.timestamp.as_str() {
        "off" => TimestampPolicy::Off,
        "enabled" => TimestampPolicy::Enabled,
        "force" => TimestampPolicy::Force,
        other => bail!("unknown timestamp policy `{other}` (expected off, enabled or force)"),
    };

    let context = RequestContext {
        tls: cli.tls,
        host: cli.host.clone(),
        accepts_gzip: cli.gzip,
        debug: cli.debug,
        timestamp_policy,
    };

    let resolver = AssetResolver::new(&config, &context);
    for reference in &cli.refs {
        println!("{}", resolver.resolve(reference, kind));
    }

    Ok(())
}
