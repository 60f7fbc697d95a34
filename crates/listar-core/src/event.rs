//! Input symbols and typed events for the list control.

use serde::{Deserialize, Serialize};

/// Keyboard key identifiers consumed by list navigation.
///
/// Hosts translate their native key symbols into this enum before calling
/// into the control. Keys the control does not handle are reported back as
/// not consumed so the host can apply its default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Enter / return (numpad enter maps here too)
    Enter,
    /// Escape
    Escape,
    /// Tab
    Tab,
    /// Backspace
    Backspace,
    /// Delete
    Delete,
    /// Home
    Home,
    /// End
    End,
    /// A printable character; digits `'0'`..=`'9'` drive select-and-invoke
    Char(char),
}

/// Modifier keys relevant to list navigation.
///
/// Fixed set over ctrl/alt/shift: numeric-keypad and lock modifiers have no
/// navigation meaning and are excluded by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    /// Control key (Cmd on Mac).
    pub ctrl: bool,
    /// Alt key (Option on Mac).
    pub alt: bool,
    /// Shift key.
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Ctrl only.
    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        ctrl: false,
        alt: true,
        shift: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        ctrl: false,
        alt: false,
        shift: true,
    };

    /// Ctrl+Shift.
    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        alt: false,
        shift: true,
    };

    /// Create custom modifiers.
    pub const fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        Self { ctrl, alt, shift }
    }

    /// Check if any modifier is pressed.
    pub const fn any(&self) -> bool {
        self.ctrl || self.alt || self.shift
    }

    /// Check if no modifier is pressed.
    pub const fn none(&self) -> bool {
        !self.any()
    }

    /// Get a display string for the modifiers.
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.join("+")
    }
}

/// Events emitted by the list control.
///
/// Delivered through a single-threaded queue the host drains each frame;
/// delivery is in-order and at-least-once on the calling thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListEvent {
    /// The selection cursor moved to a new index.
    SelectionChanged {
        /// New selection index.
        index: usize,
    },
    /// The scroll offset (index of the first rendered row) changed.
    Scrolled {
        /// New scroll offset.
        offset: usize,
    },
    /// An item was invoked (activated).
    Invoked {
        /// Index of the invoked item.
        index: usize,
        /// Label of the invoked item.
        label: String,
    },
    /// An item was moved within the sequence.
    ItemsReordered {
        /// Index the item was removed from.
        from: usize,
        /// Index the item was reinserted at.
        to: usize,
    },
}
