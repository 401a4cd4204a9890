//! JSON-lines trace output.

use std::io::Write;

use chase_tools::TraceEvent;

use crate::Result;

/// Writes one JSON object per event, each on its own line.
pub fn write_jsonl<'a, W, I>(mut out: W, events: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a TraceEvent>,
{
    for event in events {
        serde_json::to_writer(&mut out, event)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
