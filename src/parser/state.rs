//! Lenient Parser State Machine
//!
//! Recovers action lines that are mostly right but sloppily typed, such as
//! `15rjx` or `1 0,ALU f90`. The line is scanned one character at a time.
//!
//! # State Machine
//!
//! States:
//! - Frame: collecting frame digits, delimiters ignored
//! - Action: each character selects an action
//! - DashOnly / MoveOnly: directions following `A` / `M`
//! - PressedKey: key bindings following `P`
//! - FeatherAngle / FeatherMagnitude: numbers following `F`
//!
//! A transition either consumes the current character or hands the same
//! character to another state. The input only advances on consumption.

use tracing::{debug, trace};

use super::{parse_float, parse_frames, FloatRange, ParseError, ANGLE_RANGE, MAGNITUDE_RANGE};
use crate::core::{ActionLine, Actions};

/// Parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Frame,
    Action,
    DashOnly,
    MoveOnly,
    PressedKey,
    FeatherAngle,
    FeatherMagnitude,
}

/// Outcome of feeding one character to a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Character used up; continue with the next one in this state
    Consume(State),
    /// Character not used; process it again in this state
    Redispatch(State),
}

/// Parse a loosely formatted action line.
///
/// With `ignore_invalid_floats` set, unparsable feather numbers are kept as
/// typed instead of failing the line.
pub fn parse_loose(line: &str, ignore_invalid_floats: bool) -> Result<ActionLine, ParseError> {
    let mut parser = LooseParser::new();
    for c in line.chars() {
        if c.is_whitespace() {
            continue;
        }
        parser.feed(c)?;
    }
    parser.finish(ignore_invalid_floats)
}

#[derive(Debug)]
struct LooseParser {
    state: State,
    /// Frame digits collected so far
    frame_digits: String,
    line: ActionLine,
}

impl LooseParser {
    fn new() -> Self {
        Self {
            state: State::Frame,
            frame_digits: String::new(),
            line: ActionLine::default(),
        }
    }

    /// Process a single character
    fn feed(&mut self, c: char) -> Result<(), ParseError> {
        let mut state = self.state;
        loop {
            match self.process(state, c)? {
                Transition::Consume(next) => {
                    self.state = next;
                    return Ok(());
                }
                Transition::Redispatch(next) => {
                    trace!(?state, ?next, %c, "redispatching");
                    state = next;
                }
            }
        }
    }

    fn process(&mut self, state: State, c: char) -> Result<Transition, ParseError> {
        let transition = match state {
            State::Frame => return self.process_frame(c),
            State::Action => self.process_action(c),
            State::DashOnly => self.process_restricted(c, State::DashOnly),
            State::MoveOnly => self.process_restricted(c, State::MoveOnly),
            State::PressedKey => self.process_pressed_key(c),
            State::FeatherAngle => self.process_feather(c, State::FeatherAngle),
            State::FeatherMagnitude => self.process_feather(c, State::FeatherMagnitude),
        };
        Ok(transition)
    }

    /// Collect digits until the first action character
    fn process_frame(&mut self, c: char) -> Result<Transition, ParseError> {
        if c == ActionLine::DELIMITER {
            return Ok(Transition::Consume(State::Frame));
        }
        if c.is_ascii_digit() {
            self.frame_digits.push(c);
            return Ok(Transition::Consume(State::Frame));
        }

        self.line.frames = parse_frames(&self.frame_digits)?;
        Ok(Transition::Redispatch(State::Action))
    }

    fn process_action(&mut self, c: char) -> Transition {
        if c == ActionLine::DELIMITER {
            return Transition::Consume(State::Action);
        }

        let action = Actions::action_for_char(c);
        if action.is_empty() {
            trace!(%c, "ignoring unknown action");
        }
        self.line.actions |= action;

        let next = if action == Actions::DASH_ONLY {
            State::DashOnly
        } else if action == Actions::MOVE_ONLY {
            State::MoveOnly
        } else if action == Actions::PRESSED_KEY {
            State::PressedKey
        } else if action == Actions::FEATHER {
            State::FeatherAngle
        } else {
            State::Action
        };
        Transition::Consume(next)
    }

    /// Directions after a dash-only or move-only opener
    fn process_restricted(&mut self, c: char, state: State) -> Transition {
        if c == ActionLine::DELIMITER {
            return Transition::Consume(State::Action);
        }

        let action = Actions::action_for_char(c);
        if !action.is_direction() {
            return Transition::Redispatch(State::Action);
        }

        self.line.actions |= if state == State::DashOnly {
            action.to_dash_only_actions()
        } else {
            action.to_move_only_actions()
        };
        Transition::Consume(state)
    }

    fn process_pressed_key(&mut self, c: char) -> Transition {
        if c == ActionLine::DELIMITER {
            return Transition::Consume(State::Action);
        }

        self.line.custom_bindings.insert(c.to_ascii_uppercase());
        Transition::Consume(State::PressedKey)
    }

    /// Digits of the feather angle or magnitude
    fn process_feather(&mut self, c: char, state: State) -> Transition {
        let angle = state == State::FeatherAngle;

        if c == ActionLine::DELIMITER {
            let next = if angle {
                State::FeatherMagnitude
            } else {
                State::Action
            };
            return Transition::Consume(next);
        }
        if !c.is_ascii_digit() && c != '.' {
            return Transition::Redispatch(State::Action);
        }

        let field = if angle {
            &mut self.line.feather_angle
        } else {
            &mut self.line.feather_magnitude
        };
        field.get_or_insert_with(String::new).push(c);
        Transition::Consume(state)
    }

    /// Clamp the feather fields and check the line got past its frame count
    fn finish(mut self, ignore_invalid_floats: bool) -> Result<ActionLine, ParseError> {
        if self.state == State::Frame {
            return Err(ParseError::MissingActions);
        }

        self.line.feather_angle = clamp_field(
            self.line.feather_angle.take(),
            ANGLE_RANGE,
            ignore_invalid_floats,
        )?;
        self.line.feather_magnitude = clamp_field(
            self.line.feather_magnitude.take(),
            MAGNITUDE_RANGE,
            ignore_invalid_floats,
        )?;

        Ok(self.line)
    }
}

fn clamp_field(
    text: Option<String>,
    range: FloatRange,
    ignore_invalid_floats: bool,
) -> Result<Option<String>, ParseError> {
    let Some(text) = text else {
        return Ok(None);
    };

    match parse_float(&text) {
        Some(value) => Ok(Some(range.clamp_value(value))),
        None if ignore_invalid_floats => {
            debug!(field = %range.field, %text, "keeping invalid feather value as typed");
            Ok(Some(text))
        }
        None => Err(ParseError::InvalidFloat {
            field: range.field,
            value: text,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_strict, FeatherField};

    #[test]
    fn test_loose_no_delimiters() {
        let loose = parse_loose("15RJX", true).unwrap();
        let strict = parse_strict("15,R,J,X", true).unwrap();
        assert_eq!(loose, strict);
    }

    #[test]
    fn test_loose_lowercase_and_spaces() {
        let line = parse_loose(" 1 5 r j", true).unwrap();
        assert_eq!(line.frames, 15);
        assert_eq!(line.actions, Actions::RIGHT | Actions::JUMP);
    }

    #[test]
    fn test_loose_ignores_delimiters_in_frames() {
        let line = parse_loose(",1,2,,R", true).unwrap();
        assert_eq!(line.frames, 12);
        assert_eq!(line.actions, Actions::RIGHT);
    }

    #[test]
    fn test_loose_rejects_missing_frames() {
        assert_eq!(
            parse_loose(",R,Z", true),
            Err(ParseError::InvalidFrameCount(String::new()))
        );
    }

    #[test]
    fn test_loose_rejects_frame_only_line() {
        assert_eq!(parse_loose("15", true), Err(ParseError::MissingActions));
        assert_eq!(parse_loose("", true), Err(ParseError::MissingActions));
    }

    #[test]
    fn test_loose_frame_overflow() {
        assert!(matches!(
            parse_loose("99999999999R", true),
            Err(ParseError::InvalidFrameCount(_))
        ));
    }

    #[test]
    fn test_loose_unknown_chars() {
        let line = parse_loose("3R?J", true).unwrap();
        assert_eq!(line.actions, Actions::RIGHT | Actions::JUMP);
    }

    #[test]
    fn test_loose_dash_only() {
        let line = parse_loose("12ALUX", true).unwrap();
        assert_eq!(
            line.actions,
            Actions::DASH_ONLY | Actions::LEFT_DASH_ONLY | Actions::UP_DASH_ONLY | Actions::DASH
        );
        assert!(!line.actions.contains(Actions::LEFT));
    }

    #[test]
    fn test_loose_dash_only_delimiter_ends_list() {
        let line = parse_loose("12AL,R", true).unwrap();
        assert_eq!(
            line.actions,
            Actions::DASH_ONLY | Actions::LEFT_DASH_ONLY | Actions::RIGHT
        );
    }

    #[test]
    fn test_loose_move_only_then_opener() {
        // The second opener is handed back to the action state
        let line = parse_loose("2MRAD", true).unwrap();
        assert_eq!(
            line.actions,
            Actions::MOVE_ONLY
                | Actions::RIGHT_MOVE_ONLY
                | Actions::DASH_ONLY
                | Actions::DOWN_DASH_ONLY
        );
    }

    #[test]
    fn test_loose_pressed_key() {
        let line = parse_loose("10pab,j", true).unwrap();
        assert_eq!(line.actions, Actions::PRESSED_KEY | Actions::JUMP);
        assert_eq!(line.custom_bindings.iter().collect::<String>(), "AB");
    }

    #[test]
    fn test_loose_feather() {
        let line = parse_loose("1F90,0.5", true).unwrap();
        assert_eq!(line.actions, Actions::FEATHER);
        assert_eq!(line.feather_angle.as_deref(), Some("90"));
        assert_eq!(line.feather_magnitude.as_deref(), Some("0.5"));
    }

    #[test]
    fn test_loose_feather_rerenders_numbers() {
        let line = parse_loose("1F090.50,.25", true).unwrap();
        assert_eq!(line.feather_angle.as_deref(), Some("90.5"));
        assert_eq!(line.feather_magnitude.as_deref(), Some("0.25"));
    }

    #[test]
    fn test_loose_feather_clamping() {
        let line = parse_loose("1F400,3", true).unwrap();
        assert_eq!(line.feather_angle.as_deref(), Some("360"));
        assert_eq!(line.feather_magnitude.as_deref(), Some("1"));
    }

    #[test]
    fn test_loose_feather_without_digits() {
        let line = parse_loose("1FJ", true).unwrap();
        assert_eq!(line.actions, Actions::FEATHER | Actions::JUMP);
        assert_eq!(line.feather_angle, None);
        assert_eq!(line.feather_magnitude, None);
    }

    #[test]
    fn test_loose_feather_followed_by_action() {
        let line = parse_loose("1F45J", true).unwrap();
        assert_eq!(line.actions, Actions::FEATHER | Actions::JUMP);
        assert_eq!(line.feather_angle.as_deref(), Some("45"));
    }

    #[test]
    fn test_loose_invalid_float() {
        let line = parse_loose("1F1.2.3", true).unwrap();
        assert_eq!(line.feather_angle.as_deref(), Some("1.2.3"));

        assert_eq!(
            parse_loose("1F1.2.3", false),
            Err(ParseError::InvalidFloat {
                field: FeatherField::Angle,
                value: "1.2.3".to_string(),
            })
        );
    }

    #[test]
    fn test_loose_trailing_opener() {
        let line = parse_loose("4A", true).unwrap();
        assert_eq!(line.actions, Actions::DASH_ONLY);
    }

    #[test]
    fn test_redispatch_does_not_consume_twice() {
        let mut parser = LooseParser::new();
        for c in "1AJ".chars() {
            parser.feed(c).unwrap();
        }
        assert_eq!(parser.state, State::Action);
        let line = parser.finish(true).unwrap();
        assert_eq!(line.actions, Actions::DASH_ONLY | Actions::JUMP);
    }
}
