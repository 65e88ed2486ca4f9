//! `mmdb-dump` — open an MMDB file, run one lookup, print the requested
//! paths as JSON. A manual-inspection convenience, not part of the
//! library's core (§0).

use clap::Parser;
use mmdb_query::Reader;
use std::net::IpAddr;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mmdb-dump", about = "Inspect an MMDB database for one IP address")]
struct Args {
    /// Path to the .mmdb file
    database: String,

    /// IP address to look up
    ip: IpAddr,

    /// Dotted paths to extract from the matched record (e.g. country.iso_code).
    /// If none are given, only the match/prefix-length summary is printed.
    #[arg(long = "path")]
    paths: Vec<String>,
}

fn run(args: Args) -> mmdb_query::Result<()> {
    let reader = Reader::open(&args.database)?;

    let path_refs: Vec<&str> = args.paths.iter().map(String::as_str).collect();
    let mut values = serde_json::Map::new();

    let outcome = reader.lookup(args.ip, &path_refs, |path, value| {
        values.insert(path.to_string(), value_to_json(&value));
    })?;

    if !outcome.found {
        println!("{{\"found\": false}}");
        return Ok(());
    }

    let mut out = serde_json::Map::new();
    out.insert("found".to_string(), serde_json::Value::Bool(true));
    out.insert(
        "prefix_len".to_string(),
        serde_json::Value::Number(outcome.prefix_len.unwrap_or(0).into()),
    );
    out.insert("values".to_string(), serde_json::Value::Object(values));

    if !outcome.path_errors.is_empty() {
        let errors: Vec<serde_json::Value> = outcome
            .path_errors
            .iter()
            .map(|(path, err)| {
                serde_json::json!({ "path": path, "error": err.to_string() })
            })
            .collect();
        out.insert("path_errors".to_string(), serde_json::Value::Array(errors));
    }

    println!("{}", serde_json::to_string_pretty(&serde_json::Value::Object(out)).unwrap());
    Ok(())
}

fn value_to_json(value: &mmdb_query::Value) -> serde_json::Value {
    // Round-trips through serde_json::to_value rather than matching on
    // mmdb_query::Value's variants directly, since Value already knows
    // how to serialize itself (§3.4).
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mmdb-dump: {e}");
            ExitCode::FAILURE
        }
    }
}
