#![allow(dead_code)]

use click_counter::config::Config;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const ENCODES_HEADER: &str = "long_url,short_domain,hash";

/// Input files for one run, removed when dropped.
pub struct Fixture {
    pub dir: TempDir,
    pub encodes: PathBuf,
    pub decodes: PathBuf,
}

impl Fixture {
    /// Writes both datasets into a fresh temporary directory.
    pub fn new(encodes: &str, decodes: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let encodes_path = dir.path().join("encodes.csv");
        let decodes_path = dir.path().join("decodes.json");

        fs::write(&encodes_path, encodes).unwrap();
        fs::write(&decodes_path, decodes).unwrap();

        Self {
            dir,
            encodes: encodes_path,
            decodes: decodes_path,
        }
    }

    pub fn config(&self, target_year: i32) -> Config {
        Config {
            encodes_path: self.encodes.clone(),
            decodes_path: self.decodes.clone(),
            target_year,
            ..Config::default()
        }
    }

    pub fn missing(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// Builds an encodes CSV body from `(long_url, hash)` pairs.
pub fn encodes_csv(rows: &[(&str, &str)]) -> String {
    let mut out = format!("{ENCODES_HEADER}\n");
    for (url, hash) in rows {
        out.push_str(&format!("{url},bit.ly,{hash}\n"));
    }
    out
}

/// Builds a single decodes event.
pub fn decode_event(hash: &str, timestamp: &str) -> Value {
    json!({
        "bitlink": format!("http://bit.ly/{hash}"),
        "user_agent": "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)",
        "timestamp": timestamp,
        "referrer": "t.co",
        "remote_ip": "4.14.247.63"
    })
}

/// Builds a decodes JSON body from `(hash, timestamp)` pairs.
pub fn decodes_json(events: &[(&str, &str)]) -> String {
    let events: Vec<Value> = events
        .iter()
        .map(|(hash, ts)| decode_event(hash, ts))
        .collect();
    Value::Array(events).to_string()
}

/// The two-link, four-click dataset used across tests.
pub fn reference_fixture() -> Fixture {
    Fixture::new(
        &encodes_csv(&[
            ("https://google.com", "a1b2c3"),
            ("https://twitter.com", "d4e5f6"),
        ]),
        &decodes_json(&[
            ("a1b2c3", "2021-03-15T10:30:00+00:00"),
            ("a1b2c3", "2021-04-15T10:30:00Z"),
            ("d4e5f6", "2021-05-15T10:30:00+00:00"),
            ("a1b2c3", "2020-12-31T10:30:00+00:00"),
        ]),
    )
}
