use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "nowplaying",
    about = "Serve the desktop player's now-playing state as JSON on GET /query",
    long_about = None,
    version,
)]
pub struct Args {
    /// Where to read the raw player state: an http(s):// bridge URL or a JSON snapshot file
    #[arg(short, long, value_name = "URL|FILE")]
    pub source: Option<String>,

    /// HTTP port to listen on [default: 9863]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML config file (overrides default search: ./nowplaying.toml, ~/.config/nowplaying/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Listen on all interfaces (0.0.0.0 + :::) instead of 127.0.0.1 only
    #[arg(long)]
    pub public: bool,

    /// Give up on a host round-trip after this many milliseconds [default: 2000]
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}
