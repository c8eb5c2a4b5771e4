use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;

use semver_order::config::ColumnConfig;
use semver_order::logging::setup_logging;
use semver_order::version::sql::{create_table_sql, select_ordered_sql};
use semver_order::{EncodedVersion, encode, sort_versions};

#[derive(Parser)]
#[command(name = "semver-order")]
#[command(version, about = "Encode semantic versions into SQL-sortable columns")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the encoded columns of each version
    Encode {
        #[arg(required = true)]
        versions: Vec<String>,
        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },
    /// Print the versions in precedence order
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print the table definition and ordered query
    Schema {
        /// Table and column names as JSON, e.g. '{"table":"tf_module_version"}'
        #[arg(long)]
        columns: Option<String>,
    },
}

#[derive(Serialize)]
struct EncodedRow<'a> {
    version: &'a str,
    #[serde(flatten)]
    encoded: EncodedVersion,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let json_logs = matches!(cli.command, Command::Encode { json: true, .. });
    setup_logging(cli.verbose, json_logs)?;

    match cli.command {
        Command::Encode { versions, json } => {
            for version in &versions {
                let encoded = encode(version)?;
                if json {
                    let row = EncodedRow { version, encoded };
                    println!("{}", serde_json::to_string(&row)?);
                } else {
                    let (prefix, word, number, build) = encoded.columns();
                    println!("{version}\t{prefix}\t{word}\t{number}\t{build}");
                }
            }
        }
        Command::Sort { versions } => {
            for version in sort_versions(&versions)? {
                println!("{version}");
            }
        }
        Command::Schema { columns } => {
            let columns = match columns {
                Some(raw) => serde_json::from_str::<ColumnConfig>(&raw)
                    .context("Failed to parse --columns")?,
                None => ColumnConfig::default(),
            };
            println!("{};", create_table_sql(&columns));
            println!("{};", select_ordered_sql(&columns));
        }
    }

    Ok(())
}
