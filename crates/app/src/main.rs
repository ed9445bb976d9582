//! Courier - Main Entry Point
//!
//! Converts pair lists between their stored JSON form, the bulk text
//! projection, and an urlencoded form body. Input is read from stdin and
//! the result written to stdout.

use std::process::ExitCode;

use courier_domain::{from_bulk_text, from_domain, to_bulk_text, to_domain};
use courier_infrastructure::{SettingsRepository, encode_form, logging, to_json_stable};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

const USAGE: &str = "usage: courier <to-bulk|to-json|encode-form>";

#[derive(Debug, Clone, Copy)]
enum Conversion {
    /// Stored JSON to bulk text.
    ToBulk,
    /// Bulk text to stored JSON.
    ToJson,
    /// Stored JSON to a form body.
    EncodeForm,
}

impl Conversion {
    fn parse(arg: &str) -> Option<Self> {
        match arg {
            "to-bulk" => Some(Self::ToBulk),
            "to-json" => Some(Self::ToJson),
            "encode-form" => Some(Self::EncodeForm),
            _ => None,
        }
    }

    fn apply(self, input: &str) -> Result<String, Box<dyn std::error::Error>> {
        let output = match self {
            Self::ToBulk => to_bulk_text(&from_domain(&parse_json(input)?)),
            Self::ToJson => to_json_stable(&to_domain(&from_bulk_text(input)))?,
            Self::EncodeForm => encode_form(&from_domain(&parse_json(input)?))?,
        };
        Ok(output)
    }
}

fn parse_json(input: &str) -> Result<Value, serde_json::Error> {
    if input.trim().is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    serde_json::from_str(input)
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let settings = SettingsRepository::new().load().await?;
    logging::init(&settings.log_filter)?;

    let Some(conversion) = std::env::args().nth(1).as_deref().and_then(Conversion::parse) else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(2));
    };

    let mut input = String::new();
    tokio::io::stdin().read_to_string(&mut input).await?;
    tracing::debug!(?conversion, bytes = input.len(), "converting");

    let mut output = conversion.apply(&input)?;
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;
    Ok(ExitCode::SUCCESS)
}
