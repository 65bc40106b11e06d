//! Line protocol between the shell and the rendering surface

use grid_engine::{EngineError, EventOutcome, GridController, GridEvent, RenderItem};
use grid_model::GridModel;
use serde::Serialize;
use std::fmt::Display;
use std::io::{BufRead, Write};

/// One output line: the full grid after an event
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<&'a EventOutcome>,
    #[serde(flatten)]
    pub grid: GridModel,
    pub row_height: u32,
    pub render: Vec<RenderItem>,
}

#[derive(Debug, Serialize)]
struct ErrorLine {
    error: String,
}

/// Parse one event line and apply it
pub fn handle_line(controller: &mut GridController, line: &str) -> Result<EventOutcome, EngineError> {
    let event: GridEvent = serde_json::from_str(line)?;
    controller.dispatch(event)
}

pub fn write_frame(
    out: &mut impl Write,
    controller: &GridController,
    outcome: Option<&EventOutcome>,
) -> anyhow::Result<()> {
    let frame = Frame {
        outcome,
        grid: controller.snapshot(),
        row_height: controller.row_height(),
        render: controller.render(),
    };
    serde_json::to_writer(&mut *out, &frame)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_error(out: &mut impl Write, error: &impl Display) -> anyhow::Result<()> {
    serde_json::to_writer(
        &mut *out,
        &ErrorLine {
            error: error.to_string(),
        },
    )?;
    writeln!(out)?;
    Ok(())
}

/// Apply every event line from `input`, writing one frame or error line per
/// event. Lines that are blank are skipped; lines that are not UTF-8 or not a
/// valid event get an error line and the loop moves on. Returns the number of
/// events applied.
pub fn run(
    controller: &mut GridController,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut applied = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(e) => {
                tracing::warn!("Rejected event: not valid UTF-8: {}", e);
                write_error(out, &format!("event is not valid UTF-8: {e}"))?;
                out.flush()?;
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match handle_line(controller, line) {
            Ok(outcome) => {
                applied += 1;
                write_frame(out, controller, Some(&outcome))?;
            }
            Err(e) => {
                tracing::warn!("Rejected event: {}", e);
                write_error(out, &e)?;
            }
        }
        out.flush()?;
    }

    Ok(applied)
}
