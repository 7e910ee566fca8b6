use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use dobutsu::InputEvent;

/// Reads input events, one JSON object per line. Blank lines are skipped.
pub fn read_events(reader: impl BufRead) -> anyhow::Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Could not read line {}", line_idx + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event = serde_json::from_str::<InputEvent>(line)
            .with_context(|| format!("Invalid event in line {}", line_idx + 1))?;
        events.push(event);
    }
    Ok(events)
}

pub fn load_events(path: &Path) -> anyhow::Result<Vec<InputEvent>> {
    let file = File::open(path)
        .with_context(|| format!("Could not open event file '{}'", path.display()))?;
    read_events(BufReader::new(file))
}
