//! Command execution: resolve configuration, build the client, run one
//! walker operation, print JSON to stdout.

use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use secrecy::SecretString;
use std::time::Duration;
use tracing::warn;

use piwalk_client::{AttributeUpdate, NewValue, PiWebClient};
use piwalk_config::{ConfigLoader, WalkerConfig};

use crate::args::{AttributeCoords, Cli, Commands, ValueCommand};

/// Resolve configuration: CLI flags win, then environment, then defaults.
pub fn resolve_config(cli: &Cli) -> Result<WalkerConfig> {
    let mut loader = ConfigLoader::new();
    loader.set_base_url(cli.base_url.clone());
    loader.set_username(cli.username.clone());
    loader.set_password(
        cli.password
            .clone()
            .map(|p| SecretString::new(p.into())),
    );
    loader.set_timeout(cli.timeout.map(Duration::from_secs));
    if cli.insecure {
        loader.set_verify_tls(Some(false));
    }
    loader.apply_env()?;
    loader.build().context("Failed to resolve configuration")
}

fn build_client(config: &WalkerConfig) -> Result<PiWebClient> {
    if !config.verify_tls {
        warn!("TLS certificate verification is disabled");
    }

    let mut builder = PiWebClient::builder()
        .base_url(config.base_url.clone())
        .timeout(config.timeout)
        .danger_accept_invalid_certs(!config.verify_tls);

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        builder = builder.basic_auth(username.clone(), password.clone());
    }

    builder.build().context("Failed to build client")
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Interpret a `--value` argument: bare JSON scalars (numbers, booleans)
/// are sent as-is, everything else as a string. The server coerces to the
/// attribute's point type either way.
fn parse_value_arg(raw: &str) -> serde_json::Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(v) if v.is_number() || v.is_boolean() => v,
        _ => serde_json::Value::String(raw.to_string()),
    }
}

async fn resolve_attribute(
    client: &PiWebClient,
    coords: &AttributeCoords,
) -> Result<piwalk_client::Attribute> {
    client
        .walk(
            &coords.server,
            &coords.database,
            &coords.element,
            &coords.attribute,
        )
        .await
        .with_context(|| {
            format!(
                "Failed to resolve attribute '{}' under \\\\{}\\{}\\{}",
                coords.attribute, coords.server, coords.database, coords.element
            )
        })
}

/// Execute the parsed command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let client = build_client(&config)?;

    match &cli.command {
        Commands::Root => {
            let root = client.api_root().await?;
            print_json(&root.links)
        }

        Commands::Walk { coords } => {
            let attribute = resolve_attribute(&client, coords).await?;
            print_json(&attribute)
        }

        Commands::Attribute { path } => {
            let root = client.api_root().await?;
            let attribute = client.attribute_by_path(&root, path).await?;
            print_json(&attribute)
        }

        Commands::Value { command } => match command {
            ValueCommand::Read { coords, time } => {
                let attribute = resolve_attribute(&client, coords).await?;
                let value = match time {
                    Some(t) => client.recorded_value(&attribute, t).await?,
                    None => client.current_value(&attribute).await?,
                };
                print_json(&value)
            }
            ValueCommand::Write {
                coords,
                value,
                timestamp,
            } => {
                let attribute = resolve_attribute(&client, coords).await?;
                let timestamp = timestamp.clone().unwrap_or_else(|| {
                    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
                });
                let new_value = NewValue::new(timestamp, parse_value_arg(value));
                let status = client.write_value(&attribute, &new_value).await?;
                print_json(&serde_json::json!({
                    "status": status.as_u16(),
                    "accepted": status.as_u16() == 202,
                    "timestamp": new_value.timestamp,
                }))
            }
        },

        Commands::Describe {
            coords,
            description,
        } => {
            let attribute = resolve_attribute(&client, coords).await?;
            let status = client
                .update_attribute(&attribute, &AttributeUpdate::description(description.clone()))
                .await?;
            print_json(&serde_json::json!({ "status": status.as_u16() }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_arg_number() {
        assert_eq!(parse_value_arg("25.0"), serde_json::json!(25.0));
        assert_eq!(parse_value_arg("3"), serde_json::json!(3));
    }

    #[test]
    fn test_parse_value_arg_boolean() {
        assert_eq!(parse_value_arg("true"), serde_json::json!(true));
    }

    #[test]
    fn test_parse_value_arg_free_text() {
        assert_eq!(parse_value_arg("ON"), serde_json::json!("ON"));
        // Quoted JSON strings stay strings of their raw form, not unwrapped.
        assert_eq!(parse_value_arg("[1,2]"), serde_json::json!("[1,2]"));
    }
}
