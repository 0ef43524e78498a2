use anyhow::Context;
use bech32_conversion::convert;
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(version)]
pub struct Cli {
    /// bech32 token to decode, e.g. an erd1... wallet address
    #[clap(value_parser)]
    token: String,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout stays a single hex line.
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let Cli { token } = Cli::parse();

    let decoded =
        convert::decode(&token).with_context(|| format!("Cannot decode token {token}"))?;

    tracing::debug!(
        hrp = decoded.hrp(),
        payload_bytes = decoded.payload().len(),
        "token decoded"
    );

    println!("{}", decoded.payload_hex());

    Ok(())
}
