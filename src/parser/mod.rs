//! Script line parsers
//!
//! Two tiers for action lines plus a tokenizer for command lines:
//! - `strict`: delimiter-separated tokens, the round-trip partner of the serializer
//! - `state`: a character state machine that recovers sloppy input like `15rjx`
//! - `command`: splits a directive into command name and arguments
//!
//! All entry points are pure functions; nothing is cached between calls.

mod command;
mod error;
mod state;
mod strict;

pub use command::parse_command;
pub use error::{FeatherField, ParseError};
pub use state::parse_loose;
pub use strict::parse_strict;

use tracing::trace;

use crate::core::ActionLine;

/// Parse an action line, trying the strict parser first and the lenient one second
pub fn parse(line: &str, ignore_invalid_floats: bool) -> Option<ActionLine> {
    match parse_strict(line, ignore_invalid_floats) {
        Ok(action_line) => Some(action_line),
        Err(strict_err) => {
            trace!(%strict_err, line, "strict parse failed, retrying leniently");
            parse_loose(line, ignore_invalid_floats)
                .map_err(|err| trace!(%err, line, "not an action line"))
                .ok()
        }
    }
}

/// Render an action line in canonical form
pub fn serialize(action_line: &ActionLine) -> String {
    action_line.to_string()
}

/// Range a feather field is clamped into
#[derive(Debug, Clone, Copy)]
pub(crate) struct FloatRange {
    pub field: FeatherField,
    min: f32,
    max: f32,
    min_text: &'static str,
    max_text: &'static str,
}

pub(crate) const ANGLE_RANGE: FloatRange = FloatRange {
    field: FeatherField::Angle,
    min: 0.0,
    max: 360.0,
    min_text: "0",
    max_text: "360",
};

pub(crate) const MAGNITUDE_RANGE: FloatRange = FloatRange {
    field: FeatherField::Magnitude,
    min: 0.0,
    max: 1.0,
    min_text: "0",
    max_text: "1",
};

impl FloatRange {
    /// Keep `text` when `value` is in range, otherwise the bound it crossed
    pub(crate) fn clamp_text(&self, text: &str, value: f32) -> String {
        if value > self.max {
            self.max_text.to_string()
        } else if value < self.min {
            self.min_text.to_string()
        } else {
            text.to_string()
        }
    }

    /// Clamp and re-render the value
    pub(crate) fn clamp_value(&self, value: f32) -> String {
        value.clamp(self.min, self.max).to_string()
    }
}

pub(crate) fn parse_float(text: &str) -> Option<f32> {
    text.parse().ok()
}

pub(crate) fn parse_frames(text: &str) -> Result<u32, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidFrameCount(text.to_string()))
}
