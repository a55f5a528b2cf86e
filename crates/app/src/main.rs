use config::{Config, Environment, File};
use courier_core::config::AppConfig;
use courier_core::notify::entity::NotifierKind;
use courier_notify::factory::NotifierFactory;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// Path of the optional TOML file layered over the defaults
const CONFIG_FILE_ENV: &str = "COURIER_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "courier.toml";
// COURIER__DEMO__MESSAGE -> demo.message
const ENV_PREFIX: &str = "COURIER";
const ENV_SEPARATOR: &str = "__";
const DEFAULT_LOG_DIRECTIVE: &str = "courier_app=info";

/// # Summary
/// Demonstration entry point: one factory per configured channel, one dispatch each.
///
/// # Logic
/// 1. Initializes logging on stderr so stdout only carries the results.
/// 2. Loads the layered configuration.
/// 3. For every sample, builds a `NotifierFactory` and prints the outcome.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    info!("Courier demo starting...");

    let config = load_config()?;
    debug!(?config, "Configuration loaded");

    let message = &config.demo.message;
    for (i, sample) in config.demo.channels.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", heading(sample.kind));

        let factory = NotifierFactory::new(sample.kind);
        println!("{}", deliver(&factory, &sample.recipient, message));
    }

    info!(channels = config.demo.channels.len(), "Courier demo finished");
    Ok(())
}

/// # Summary
/// Builds the configuration from defaults, an optional file and the environment.
///
/// # Logic
/// 1. Serializes `AppConfig::default()` as the lowest layer.
/// 2. Adds `$COURIER_CONFIG` (or `courier.toml`) if the file exists.
/// 3. Adds `COURIER__*` environment variables on top.
fn load_config() -> Result<AppConfig, config::ConfigError> {
    let path =
        std::env::var(CONFIG_FILE_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(File::with_name(&path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        )
        .build()?
        .try_deserialize()
}

fn heading(kind: NotifierKind) -> &'static str {
    match kind {
        NotifierKind::Email => "Email notification:",
        NotifierKind::Sms => "SMS notification:",
        NotifierKind::Push => "Push notification:",
        NotifierKind::SocialMedia => "Social media notification:",
    }
}

/// Renders a dispatch outcome the way the caller presents it: the confirmation, or `Error: {reason}`.
fn deliver(factory: &NotifierFactory, recipient: &str, message: &str) -> String {
    match factory.dispatch(recipient, message) {
        Ok(confirmation) => confirmation,
        Err(e) => {
            warn!(channel = %factory.kind(), recipient, error = %e, "Notification rejected");
            format!("Error: {}", e.reason())
        }
    }
}
