use anyhow::Context;
use bech32_conversion::convert;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(version)]
pub struct Cli {
    /// human-readable prefix of the produced token, e.g. "erd"
    #[clap(long, value_parser)]
    hrp: String,

    /// hex payload to encode, with or without a 0x prefix
    #[clap(value_parser)]
    payload: String,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout stays a single token line.
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let Cli { hrp, payload } = Cli::parse();

    let payload = convert::parse_hex_payload(&payload).context("Payload is not valid hex")?;

    let token = convert::encode(&hrp, &payload).with_context(|| {
        format!(
            "Cannot encode {} payload bytes under prefix {hrp}",
            payload.len()
        )
    })?;

    tracing::debug!(token_length = token.len(), "token encoded");

    println!("{token}");

    Ok(())
}
