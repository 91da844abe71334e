//! Strict action line parser
//!
//! Handles lines that mostly follow the delimiter format, e.g. `  15,R,Z`.
//! Whatever the serializer writes, this parser reads back unchanged.

use tracing::debug;

use super::{parse_float, parse_frames, FloatRange, ParseError, ANGLE_RANGE, MAGNITUDE_RANGE};
use crate::core::{ActionLine, Actions};

/// Parse a delimiter-separated action line.
///
/// With `ignore_invalid_floats` set, feather fields that are not numbers are
/// skipped instead of failing the line.
pub fn parse_strict(line: &str, ignore_invalid_floats: bool) -> Result<ActionLine, ParseError> {
    let tokens: Vec<&str> = line
        .trim()
        .split(ActionLine::DELIMITER)
        .map(str::trim)
        .collect();

    let frame_token = tokens.first().copied().unwrap_or_default();
    let mut action_line = ActionLine::new(parse_frames(frame_token)?, Actions::empty());

    let mut i = 1;
    while i < tokens.len() {
        let token = tokens[i];
        let Some(first) = token.chars().next() else {
            // Vacant slot between two delimiters
            i += 1;
            continue;
        };

        let action = Actions::action_for_char(first);
        action_line.actions |= action;
        let rest = &token[first.len_utf8()..];

        if action == Actions::DASH_ONLY {
            for c in rest.chars() {
                action_line.actions |= Actions::action_for_char(c).to_dash_only_actions();
            }
        } else if action == Actions::MOVE_ONLY {
            for c in rest.chars() {
                action_line.actions |= Actions::action_for_char(c).to_move_only_actions();
            }
        } else if action == Actions::PRESSED_KEY {
            action_line.custom_bindings = rest.chars().map(|c| c.to_ascii_uppercase()).collect();
        } else if action == Actions::FEATHER {
            i += parse_feather_fields(&tokens[i + 1..], &mut action_line, ignore_invalid_floats)?;
        }

        i += 1;
    }

    Ok(action_line)
}

/// Read the angle and magnitude following a feather token.
///
/// Returns how many of `following` were consumed.
fn parse_feather_fields(
    following: &[&str],
    action_line: &mut ActionLine,
    ignore_invalid_floats: bool,
) -> Result<usize, ParseError> {
    let Some(&angle_token) = following.first() else {
        return Ok(0);
    };

    if let Some(angle) = parse_float(angle_token) {
        action_line.feather_angle = Some(ANGLE_RANGE.clamp_text(angle_token, angle));

        let Some(&magnitude_token) = following.get(1) else {
            return Ok(1);
        };
        // An empty magnitude keeps its delimiter
        if magnitude_token.is_empty() {
            action_line.feather_magnitude = Some(String::new());
            return Ok(2);
        }
        return match parse_float(magnitude_token) {
            Some(magnitude) => {
                action_line.feather_magnitude =
                    Some(MAGNITUDE_RANGE.clamp_text(magnitude_token, magnitude));
                Ok(2)
            }
            None => invalid_float(MAGNITUDE_RANGE, magnitude_token, ignore_invalid_floats).map(|_| 1),
        };
    }

    // Angle slot left empty with the value one token further, e.g. `F,,45`
    if angle_token.is_empty() {
        if let Some(&shifted_token) = following.get(1) {
            if let Some(angle) = parse_float(shifted_token) {
                debug!(angle = shifted_token, "reading feather angle from magnitude slot");
                action_line.feather_angle = Some(ANGLE_RANGE.clamp_text(shifted_token, angle));
                return Ok(2);
            }
        }
    }

    invalid_float(ANGLE_RANGE, angle_token, ignore_invalid_floats).map(|_| 0)
}

fn invalid_float(
    range: FloatRange,
    text: &str,
    ignore_invalid_floats: bool,
) -> Result<(), ParseError> {
    if ignore_invalid_floats {
        debug!(field = %range.field, text, "ignoring invalid feather value");
        Ok(())
    } else {
        Err(ParseError::InvalidFloat {
            field: range.field,
            value: text.to_string(),
        })
    }
}
