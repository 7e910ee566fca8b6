use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use dobutsu::{GameView, InputEvent, InputOutcome};
use serde::{Deserialize, Serialize};

/// Collects every frame of a replay and writes them out as a JSON array.
pub struct Recorder {
    path: PathBuf,
    frames: Vec<Frame>,
}

/// The state after one input.
///
/// The first frame of a recording is the initial position and has no
/// event or outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub event: Option<InputEvent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub outcome: Option<InputOutcome>,
    pub view: GameView,
}

impl Recorder {
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if !dir.is_dir() {
                anyhow::bail!("Directory '{}' does not exist", dir.display());
            }
        }
        Ok(Self {
            path,
            frames: Vec::new(),
        })
    }

    pub fn store_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn write_recording(&mut self) -> anyhow::Result<()> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &std::mem::take(&mut self.frames))?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
