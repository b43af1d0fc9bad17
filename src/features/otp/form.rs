//! Headless state for the OTP entry form.
//!
//! The route layer decodes keyboard and clipboard events into the types below
//! and feeds them through replace-on-write transitions. Each transition
//! returns the next form plus an [`Outcome`] describing what the DOM layer
//! must do: move focus, swallow a default action, restore a cell's rendered
//! text, or start a submission. No DOM types appear here, so the whole
//! machine runs under plain `cargo test` on the host.

use regex::Regex;

/// Number of digit cells in the code.
pub const CODE_LENGTH: usize = 6;

/// Checks that a joined code is exactly [`CODE_LENGTH`] decimal digits.
fn valid_code(code: &str) -> bool {
    Regex::new(&format!("^[0-9]{{{CODE_LENGTH}}}$")).is_ok_and(|re| re.is_match(code))
}

/// Keyboard input decoded from a DOM `KeyboardEvent::key` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(char),
    Backspace,
    Delete,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Other,
}

impl Key {
    /// Decodes a DOM key name. Anything unrecognized collapses to
    /// [`Key::Other`], which every transition treats as a no-op.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Enter" => Key::Enter,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Key::Digit(c),
                    _ => Key::Other,
                }
            }
        }
    }
}

/// What the DOM layer must do after a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Cell that should receive keyboard focus, always within the cell row.
    pub focus: Option<usize>,
    /// Swallow the browser default for the event (arrow keys would otherwise
    /// move the caret or scroll the page).
    pub prevent_default: bool,
    /// The form asks for a submission (Enter on the last cell).
    pub submit: bool,
    /// The raw change text was discarded; the rendered cell text must be
    /// restored from the form state.
    pub rejected: bool,
}

impl Outcome {
    fn focus_on(index: usize) -> Self {
        Self {
            focus: Some(index),
            ..Self::default()
        }
    }
}

/// Verdict of the local validation pass that gates submission. Nothing is
/// sent to the network unless the verdict is [`Validation::Ready`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// Every cell holds a digit; the joined code is ready to send.
    Ready(String),
    /// At least one cell is still empty.
    Incomplete { focus: usize },
    /// Every cell is filled but at least one holds a non-digit character
    /// (possible after pasting mixed content).
    Invalid { focus: usize },
}

/// The six-cell code entry state: one optional character per cell plus the
/// per-cell invalid flags raised by the last failed validation.
///
/// Cells hold characters, not digits: paste stores clipboard content as-is
/// and validation catches stray characters later, while typed input is
/// digit-gated up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OtpForm {
    cells: [Option<char>; CODE_LENGTH],
    flagged: [bool; CODE_LENGTH],
}

impl OtpForm {
    /// An all-empty form with no flags, also used to reset after a
    /// submission attempt settles.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied().flatten()
    }

    /// Rendered text for one cell, `""` when the cell is empty.
    pub fn cell_text(&self, index: usize) -> String {
        self.cell(index).map(String::from).unwrap_or_default()
    }

    pub fn is_flagged(&self, index: usize) -> bool {
        self.flagged.get(index).copied().unwrap_or(false)
    }

    /// The joined code; empty cells contribute nothing.
    pub fn code(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Raw change text arriving at one cell. Anything but a single decimal
    /// digit is discarded without touching the state; a stored digit clears
    /// the cell's flag and advances focus while a next cell exists.
    pub fn input(&self, index: usize, raw: &str) -> (Self, Outcome) {
        let mut chars = raw.chars();
        let digit = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() => c,
            _ => {
                return (
                    self.clone(),
                    Outcome {
                        rejected: true,
                        ..Outcome::default()
                    },
                );
            }
        };

        let mut next = self.clone();
        next.cells[index] = Some(digit);
        next.flagged[index] = false;

        let focus = (index + 1 < CODE_LENGTH).then_some(index + 1);
        (
            next,
            Outcome {
                focus,
                ..Outcome::default()
            },
        )
    }

    /// Keydown arriving at one cell, before the native input processes it.
    pub fn key(&self, index: usize, key: Key) -> (Self, Outcome) {
        match key {
            Key::Backspace | Key::Delete => {
                let mut next = self.clone();
                next.cells[index] = None;
                let focus = (index > 0).then(|| index - 1);
                (
                    next,
                    Outcome {
                        focus,
                        ..Outcome::default()
                    },
                )
            }
            // Type-ahead: a full cell swallows the keystroke at the DOM level
            // (maxlength), so move focus and blank the next cell; the browser
            // then inserts the digit there and the change event stores it.
            Key::Digit(_) if self.cells[index].is_some() => {
                if index + 1 < CODE_LENGTH {
                    let mut next = self.clone();
                    next.cells[index + 1] = None;
                    (next, Outcome::focus_on(index + 1))
                } else {
                    (self.clone(), Outcome::default())
                }
            }
            Key::ArrowRight | Key::ArrowUp => {
                let target = (index + 1).min(CODE_LENGTH - 1);
                (
                    self.clone(),
                    Outcome {
                        focus: Some(target),
                        prevent_default: true,
                        ..Outcome::default()
                    },
                )
            }
            Key::ArrowLeft | Key::ArrowDown => {
                let target = index.saturating_sub(1);
                (
                    self.clone(),
                    Outcome {
                        focus: Some(target),
                        prevent_default: true,
                        ..Outcome::default()
                    },
                )
            }
            Key::Enter if index == CODE_LENGTH - 1 => (
                self.clone(),
                Outcome {
                    submit: true,
                    ..Outcome::default()
                },
            ),
            // Digits into an empty cell fall through to the native input,
            // which reports them back through `input`.
            _ => (self.clone(), Outcome::default()),
        }
    }

    /// Clipboard text pasted anywhere in the row: the first [`CODE_LENGTH`]
    /// characters are stored one per cell left to right without validation,
    /// cells beyond the pasted length keep their previous values, and focus
    /// lands on the last cell.
    pub fn paste(&self, text: &str) -> (Self, Outcome) {
        let mut next = self.clone();
        for (cell, value) in next.cells.iter_mut().zip(text.chars().take(CODE_LENGTH)) {
            *cell = Some(value);
        }
        (next, Outcome::focus_on(CODE_LENGTH - 1))
    }

    /// Local validation before submission. On failure, every cell not holding
    /// a digit is flagged and focus is directed at the highest flagged index;
    /// on success all flags are cleared and the joined code is returned.
    pub fn validated(&self) -> (Self, Validation) {
        let code = self.code();
        let mut next = self.clone();

        if valid_code(&code) {
            next.flagged = [false; CODE_LENGTH];
            return (next, Validation::Ready(code));
        }

        next.flagged = std::array::from_fn(|index| {
            !self.cells[index].is_some_and(|c| c.is_ascii_digit())
        });
        let focus = next
            .flagged
            .iter()
            .rposition(|&flag| flag)
            .unwrap_or(CODE_LENGTH - 1);

        let verdict = if self.cells.iter().any(Option::is_none) {
            Validation::Incomplete { focus }
        } else {
            Validation::Invalid { focus }
        };
        (next, verdict)
    }
}
