//! Action Vocabulary
//!
//! The closed set of inputs an action line can hold, and the character
//! each one is written as. Directional inputs additionally exist in a
//! dash-only and a move-only flavour, stored as their own bits so that
//! "dash-only left" never implies "hold left".

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// A set of simultaneous inputs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Actions: u32 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const JUMP = 1 << 4;
        const JUMP2 = 1 << 5;
        const DASH = 1 << 6;
        const DASH2 = 1 << 7;
        const DEMO_DASH = 1 << 8;
        const DEMO_DASH2 = 1 << 9;
        const GRAB = 1 << 10;
        const GRAB2 = 1 << 11;
        const START = 1 << 12;
        const RESTART = 1 << 13;
        const JOURNAL = 1 << 14;
        const CONFIRM = 1 << 15;
        /// Analog aim; carries an angle and magnitude on the action line
        const FEATHER = 1 << 16;

        /// Opens a list of directions that only affect dashes
        const DASH_ONLY = 1 << 17;
        /// Opens a list of directions that only affect movement
        const MOVE_ONLY = 1 << 18;
        /// Opens a list of custom key bindings
        const PRESSED_KEY = 1 << 19;

        const LEFT_DASH_ONLY = 1 << 20;
        const RIGHT_DASH_ONLY = 1 << 21;
        const UP_DASH_ONLY = 1 << 22;
        const DOWN_DASH_ONLY = 1 << 23;

        const LEFT_MOVE_ONLY = 1 << 24;
        const RIGHT_MOVE_ONLY = 1 << 25;
        const UP_MOVE_ONLY = 1 << 26;
        const DOWN_MOVE_ONLY = 1 << 27;
    }
}

/// Character table in canonical serialization order.
///
/// `FEATHER` must stay last: its angle and magnitude fields trail the line.
const CHARS: [(Actions, char); 20] = [
    (Actions::LEFT, 'L'),
    (Actions::RIGHT, 'R'),
    (Actions::UP, 'U'),
    (Actions::DOWN, 'D'),
    (Actions::JUMP, 'J'),
    (Actions::JUMP2, 'K'),
    (Actions::DASH, 'X'),
    (Actions::DASH2, 'C'),
    (Actions::DEMO_DASH, 'Z'),
    (Actions::DEMO_DASH2, 'V'),
    (Actions::GRAB, 'G'),
    (Actions::GRAB2, 'H'),
    (Actions::START, 'S'),
    (Actions::RESTART, 'Q'),
    (Actions::JOURNAL, 'N'),
    (Actions::CONFIRM, 'O'),
    (Actions::DASH_ONLY, 'A'),
    (Actions::MOVE_ONLY, 'M'),
    (Actions::PRESSED_KEY, 'P'),
    (Actions::FEATHER, 'F'),
];

/// (plain, dash-only, move-only, char) for each direction
const DIRECTIONS: [(Actions, Actions, Actions, char); 4] = [
    (Actions::LEFT, Actions::LEFT_DASH_ONLY, Actions::LEFT_MOVE_ONLY, 'L'),
    (Actions::RIGHT, Actions::RIGHT_DASH_ONLY, Actions::RIGHT_MOVE_ONLY, 'R'),
    (Actions::UP, Actions::UP_DASH_ONLY, Actions::UP_MOVE_ONLY, 'U'),
    (Actions::DOWN, Actions::DOWN_DASH_ONLY, Actions::DOWN_MOVE_ONLY, 'D'),
];

impl Default for Actions {
    fn default() -> Self {
        Self::empty()
    }
}

impl Actions {
    /// Look up the action written as `c` (case-insensitive).
    ///
    /// Unknown characters map to the empty set, so callers can union the
    /// result unconditionally.
    pub fn action_for_char(c: char) -> Self {
        let upper = c.to_ascii_uppercase();
        CHARS
            .iter()
            .find(|&&(_, ch)| ch == upper)
            .map(|&(action, _)| action)
            .unwrap_or_else(Self::empty)
    }

    /// Character for a single primary action, `None` for restricted
    /// directions and combined sets
    pub fn char_for_action(self) -> Option<char> {
        CHARS
            .iter()
            .find(|&&(action, _)| action == self)
            .map(|&(_, ch)| ch)
    }

    /// Check if this is exactly one of the four plain directions
    pub fn is_direction(self) -> bool {
        DIRECTIONS.iter().any(|&(plain, ..)| plain == self)
    }

    /// Check if this is one of the list-opening pseudo-actions
    pub fn is_list_opener(self) -> bool {
        self == Self::DASH_ONLY || self == Self::MOVE_ONLY || self == Self::PRESSED_KEY
    }

    /// Map a plain direction to its dash-only flag
    pub fn to_dash_only_actions(self) -> Self {
        DIRECTIONS
            .iter()
            .find(|&&(plain, ..)| plain == self)
            .map(|&(_, dash_only, ..)| dash_only)
            .unwrap_or_else(Self::empty)
    }

    /// Map a plain direction to its move-only flag
    pub fn to_move_only_actions(self) -> Self {
        DIRECTIONS
            .iter()
            .find(|&&(plain, ..)| plain == self)
            .map(|&(_, _, move_only, _)| move_only)
            .unwrap_or_else(Self::empty)
    }

    /// Plain directions whose dash-only flag is set, in canonical order
    pub fn dash_only_directions(self) -> impl Iterator<Item = Actions> {
        DIRECTIONS
            .into_iter()
            .filter(move |&(_, dash_only, ..)| self.contains(dash_only))
            .map(|(plain, ..)| plain)
    }

    /// Plain directions whose move-only flag is set, in canonical order
    pub fn move_only_directions(self) -> impl Iterator<Item = Actions> {
        DIRECTIONS
            .into_iter()
            .filter(move |&(_, _, move_only, _)| self.contains(move_only))
            .map(|(plain, ..)| plain)
    }

    /// Primary actions contained in this set, in canonical order
    pub fn sorted(self) -> impl Iterator<Item = Actions> {
        self.sorted_chars().map(|(action, _)| action)
    }

    pub(crate) fn sorted_chars(self) -> impl Iterator<Item = (Actions, char)> {
        CHARS
            .into_iter()
            .filter(move |&(action, _)| self.contains(action))
    }

    pub(crate) fn dash_only_chars(self) -> impl Iterator<Item = char> {
        DIRECTIONS
            .into_iter()
            .filter(move |&(_, dash_only, ..)| self.contains(dash_only))
            .map(|(.., ch)| ch)
    }

    pub(crate) fn move_only_chars(self) -> impl Iterator<Item = char> {
        DIRECTIONS
            .into_iter()
            .filter(move |&(_, _, move_only, _)| self.contains(move_only))
            .map(|(.., ch)| ch)
    }
}

// Serialized as raw bits, unknown bits are dropped on the way back in
impl Serialize for Actions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Actions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Actions::from_bits_truncate(bits))
    }
}
