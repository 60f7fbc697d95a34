//! Keyboard navigation: stateless key + modifier translation.

use crate::event::{Key, Modifiers};

/// Inputs the translation needs from the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavContext {
    /// Visible row count (drives the default paging size).
    pub rows: usize,
    /// Total item count (drives ctrl jump-to-edge deltas).
    pub item_count: usize,
    /// Explicit paging size, overriding the `rows / 2` default.
    pub paging_size: Option<usize>,
    /// Whether shift-carry reordering is enabled.
    pub shifting_enabled: bool,
}

impl NavContext {
    /// Effective paging size: the configured value or half the window,
    /// never less than 2.
    pub fn paging(&self) -> usize {
        self.paging_size.unwrap_or(self.rows / 2).max(2)
    }
}

/// What a key press asks the control to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Not a navigation key; the host applies its default handling.
    NotHandled,
    /// Move the selection by `delta`; with `carry`, move the selected item
    /// along with the cursor (reorder applied before the selection move).
    Move {
        /// Signed selection delta.
        delta: isize,
        /// Move the item together with the cursor.
        carry: bool,
    },
    /// Select an index, then invoke it in the same event (digit keys).
    SelectInvoke {
        /// Digit value, clamped downstream.
        index: usize,
    },
    /// Invoke the current selection.
    Invoke,
}

/// Translate a key press into a navigation action.
///
/// Arrow and paging keys are consumed regardless of modifiers: ctrl turns
/// the delta into a jump to the first/last item, shift (with reordering
/// enabled) carries the selected item along. Alt has no navigation meaning.
pub fn translate(key: Key, modifiers: Modifiers, ctx: &NavContext) -> NavAction {
    match key {
        Key::Up | Key::Down | Key::PageUp | Key::PageDown => {
            let magnitude = if modifiers.ctrl {
                ctx.item_count as isize
            } else if matches!(key, Key::PageUp | Key::PageDown) {
                ctx.paging() as isize
            } else {
                1
            };
            let delta = match key {
                Key::Up | Key::PageUp => -magnitude,
                _ => magnitude,
            };
            NavAction::Move {
                delta,
                carry: ctx.shifting_enabled && modifiers.shift,
            }
        }
        Key::Char(c) => c.to_digit(10).map_or(NavAction::NotHandled, |digit| {
            NavAction::SelectInvoke {
                index: digit as usize,
            }
        }),
        Key::Enter => NavAction::Invoke,
        _ => NavAction::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTX: NavContext = NavContext {
        rows: 6,
        item_count: 10,
        paging_size: None,
        shifting_enabled: false,
    };

    #[test]
    fn test_arrow_single_step() {
        assert_eq!(
            translate(Key::Up, Modifiers::NONE, &CTX),
            NavAction::Move {
                delta: -1,
                carry: false
            }
        );
        assert_eq!(
            translate(Key::Down, Modifiers::NONE, &CTX),
            NavAction::Move {
                delta: 1,
                carry: false
            }
        );
    }

    #[test]
    fn test_paging_defaults_to_half_window() {
        assert_eq!(
            translate(Key::PageDown, Modifiers::NONE, &CTX),
            NavAction::Move {
                delta: 3,
                carry: false
            }
        );
        assert_eq!(
            translate(Key::PageUp, Modifiers::NONE, &CTX),
            NavAction::Move {
                delta: -3,
                carry: false
            }
        );
    }

    #[test]
    fn test_paging_never_below_two() {
        let ctx = NavContext { rows: 2, ..CTX };
        assert_eq!(ctx.paging(), 2);
        let ctx = NavContext {
            paging_size: Some(1),
            ..CTX
        };
        assert_eq!(ctx.paging(), 2);
    }

    #[test]
    fn test_paging_configured() {
        let ctx = NavContext {
            paging_size: Some(4),
            ..CTX
        };
        assert_eq!(
            translate(Key::PageDown, Modifiers::NONE, &ctx),
            NavAction::Move {
                delta: 4,
                carry: false
            }
        );
    }

    #[test]
    fn test_ctrl_jumps_to_edges() {
        assert_eq!(
            translate(Key::Down, Modifiers::CTRL, &CTX),
            NavAction::Move {
                delta: 10,
                carry: false
            }
        );
        assert_eq!(
            translate(Key::PageUp, Modifiers::CTRL, &CTX),
            NavAction::Move {
                delta: -10,
                carry: false
            }
        );
    }

    #[test]
    fn test_shift_carries_only_when_enabled() {
        assert_eq!(
            translate(Key::Down, Modifiers::SHIFT, &CTX),
            NavAction::Move {
                delta: 1,
                carry: false
            }
        );
        let ctx = NavContext {
            shifting_enabled: true,
            ..CTX
        };
        assert_eq!(
            translate(Key::Down, Modifiers::SHIFT, &ctx),
            NavAction::Move {
                delta: 1,
                carry: true
            }
        );
        assert_eq!(
            translate(Key::Up, Modifiers::CTRL_SHIFT, &ctx),
            NavAction::Move {
                delta: -10,
                carry: true
            }
        );
    }

    #[test]
    fn test_alt_has_no_effect() {
        assert_eq!(
            translate(Key::Down, Modifiers::ALT, &CTX),
            NavAction::Move {
                delta: 1,
                carry: false
            }
        );
    }

    #[test]
    fn test_digits_select_and_invoke() {
        assert_eq!(
            translate(Key::Char('0'), Modifiers::NONE, &CTX),
            NavAction::SelectInvoke { index: 0 }
        );
        assert_eq!(
            translate(Key::Char('9'), Modifiers::NONE, &CTX),
            NavAction::SelectInvoke { index: 9 }
        );
    }

    #[test]
    fn test_enter_invokes() {
        assert_eq!(translate(Key::Enter, Modifiers::NONE, &CTX), NavAction::Invoke);
        assert_eq!(translate(Key::Enter, Modifiers::CTRL, &CTX), NavAction::Invoke);
    }

    #[test]
    fn test_other_keys_not_handled() {
        for key in [
            Key::Escape,
            Key::Tab,
            Key::Backspace,
            Key::Delete,
            Key::Home,
            Key::End,
            Key::Char('x'),
        ] {
            assert_eq!(translate(key, Modifiers::NONE, &CTX), NavAction::NotHandled);
        }
    }
}
