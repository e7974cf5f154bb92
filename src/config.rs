use crate::panel::OverlapPolicy;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Greeting shown as the first bot message of every panel.
pub const DEFAULT_GREETING: &str = "Hello! How can I assist you today?";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the responder
    #[arg(long, env = "RESPONDER_URL")]
    pub responder_url: Option<String>,

    /// Refuse new submissions while a reply is outstanding
    #[arg(long, env = "SERIALIZE_SUBMISSIONS")]
    pub serialize_submissions: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub responder: ResponderConfig,
    pub panel: PanelConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResponderConfig {
    pub base_url: String,
    /// Appended below any path on `base_url`.
    pub path: String,
    /// No timeout unless set.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PanelConfig {
    /// Empty disables the greeting.
    pub greeting: String,
    pub overlap_policy: OverlapPolicy,
    pub idle_timeout_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.static_dir", "static")?
            .set_default("responder.base_url", "http://localhost:5000")?
            .set_default("responder.path", "/process")?
            .set_default("panel.greeting", DEFAULT_GREETING)?
            .set_default("panel.overlap_policy", "allow")?
            .set_default("panel.idle_timeout_secs", 30 * 60)?;

        // Explicit file must exist; the cwd fallback is optional.
        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        // E.g. CHAT_PANEL_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("CHAT_PANEL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Priority: CLI flag > CLI env var > CHAT_PANEL_* > config file > defaults.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.responder_url {
            builder = builder.set_override("responder.base_url", url)?;
        }
        if let Some(serialize) = cli.serialize_submissions {
            let policy = if serialize { "serialize" } else { "allow" };
            builder = builder.set_override("panel.overlap_policy", policy)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    /// Address the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
