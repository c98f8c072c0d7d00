//! JSON output utilities for CLI commands.
//!
//! Every command emits NDJSON: one JSON object per line, each with an
//! `event` field (`start`, `file`, `list`, `issue`, `complete`).

use std::io::{self, Write};

use serde::Serialize;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Tag a serializable payload with an event name and write it.
///
/// Object payloads are flattened into the event; anything else is placed
/// under `data`.
pub fn write_tagged<T: Serialize>(out: &mut impl Write, event: &str, payload: &T) -> io::Result<()> {
    let value = serde_json::to_value(payload)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    let tagged = match value {
        serde_json::Value::Object(mut map) => {
            map.insert("event".to_string(), serde_json::Value::from(event));
            serde_json::Value::Object(map)
        }
        other => serde_json::json!({ "event": event, "data": other }),
    };
    write_event(out, &tagged)
}
