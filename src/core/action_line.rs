//! Action Line
//!
//! A frame count plus the inputs held for that many frames, and its
//! canonical text form.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::actions::Actions;
use crate::parser::{self, ParseError};

/// A parsed action line, e.g. `  15,R,J` or `   3,A,LU,F,45,0.5`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLine {
    /// Number of frames the inputs are held for
    pub frames: u32,
    /// Held inputs, including dash-only/move-only restricted directions
    pub actions: Actions,
    /// Feather angle in degrees, kept as written when in range
    pub feather_angle: Option<String>,
    /// Feather magnitude. `Some("")` keeps an explicit trailing delimiter
    pub feather_magnitude: Option<String>,
    /// Uppercase key bindings listed after `P`
    pub custom_bindings: BTreeSet<char>,
}

impl ActionLine {
    pub const DELIMITER: char = ',';
    pub const MAX_FRAMES: u32 = 9999;
    pub const MAX_FRAMES_DIGITS: usize = 4;

    /// Create an action line holding `actions` for `frames` frames
    pub fn new(frames: u32, actions: Actions) -> Self {
        Self {
            frames,
            actions,
            ..Default::default()
        }
    }

    /// Parse with the strict parser, falling back to the lenient one
    pub fn parse(line: &str, ignore_invalid_floats: bool) -> Option<Self> {
        parser::parse(line, ignore_invalid_floats)
    }

    /// Parse a line that follows the delimiter format
    pub fn parse_strict(line: &str, ignore_invalid_floats: bool) -> Result<Self, ParseError> {
        parser::parse_strict(line, ignore_invalid_floats)
    }

    /// Parse a sloppily typed line such as `15rj`
    pub fn parse_loose(line: &str, ignore_invalid_floats: bool) -> Result<Self, ParseError> {
        parser::parse_loose(line, ignore_invalid_floats)
    }

    /// Check if the line holds no inputs at all
    pub fn is_idle(&self) -> bool {
        self.actions.is_empty()
    }

    /// Check if the frame count fits the padded display width
    pub fn frames_in_range(&self) -> bool {
        self.frames <= Self::MAX_FRAMES
    }
}

impl fmt::Display for ActionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>width$}", self.frames, width = Self::MAX_FRAMES_DIGITS)?;

        for (action, ch) in self.actions.sorted_chars() {
            write!(f, "{}{}", Self::DELIMITER, ch)?;
            if action == Actions::DASH_ONLY {
                for direction in self.actions.dash_only_chars() {
                    write!(f, "{}", direction)?;
                }
            } else if action == Actions::MOVE_ONLY {
                for direction in self.actions.move_only_chars() {
                    write!(f, "{}", direction)?;
                }
            } else if action == Actions::PRESSED_KEY {
                for key in &self.custom_bindings {
                    write!(f, "{}", key)?;
                }
            }
        }

        if self.actions.contains(Actions::FEATHER) {
            let angle = self.feather_angle.as_deref().unwrap_or_default();
            write!(f, "{}{}", Self::DELIMITER, angle)?;
            if let Some(magnitude) = &self.feather_magnitude {
                write!(f, "{}{}", Self::DELIMITER, magnitude)?;
            }
        }

        Ok(())
    }
}
