use partial_response::{PartialJsonOptions, PartialJsonWriter, PartialRequest, PartialResponseError};
use serde_json::json;
use std::env;
use std::io;

/// Prints the demo game list filtered by a query string, e.g.
/// `cargo run --example games -- "fields=Name,Developer(Name)"`.
fn main() -> Result<(), PartialResponseError> {
    if env::var("RUST_LOG").is_err() {
        unsafe { env::set_var("RUST_LOG", "partial_response=info"); }
    }
    env_logger::init();

    let query = env::args()
        .nth(1)
        .unwrap_or_else(|| "fields=Id,Name,Developer(Name),Characters/*".to_string());

    let games = json!([
        {
            "Id": 1,
            "Name": "Star Fox",
            "Console": { "Id": 1, "Name": "SNES" },
            "Developer": { "Id": 1, "Name": "Nintendo EAD" },
            "Characters": [
                { "Id": 1, "Name": "Fox McCloud" },
                { "Id": 2, "Name": "Falco Lombardi" }
            ]
        },
        {
            "Id": 2,
            "Name": "F-Zero",
            "Console": { "Id": 1, "Name": "SNES" },
            "Developer": { "Id": 1, "Name": "Nintendo EAD" },
            "Characters": [
                { "Id": 3, "Name": "Captain Falcon" }
            ]
        }
    ]);

    let options = PartialJsonOptions::new().with_pretty(true);
    let request = PartialRequest::from_query(&query, &options);
    let writer = PartialJsonWriter::new(options);

    match writer.write(io::stdout().lock(), &games, &request) {
        Ok(()) => {
            println!();
            Ok(())
        }
        Err(e) if e.is_client_error() => {
            eprintln!("400 Bad Request: {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}
