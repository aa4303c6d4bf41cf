// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events, one type per gesture phase.
//!
//! Each event carries only what its phase needs: enter/exit and drag steps
//! a screen position, taps a position plus modifier state.

use kurbo::Point;

/// Modifier key state at the time of a tap
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// Pointer entered or left the plot canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEvent {
    pub pos: Point,
}

impl MoveEvent {
    pub fn new(sx: f64, sy: f64) -> Self {
        Self {
            pos: Point::new(sx, sy),
        }
    }
}

/// Start of a drag, or one pointer-move step of an active drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    pub pos: Point,
}

impl DragEvent {
    pub fn new(sx: f64, sy: f64) -> Self {
        Self {
            pos: Point::new(sx, sy),
        }
    }
}

/// A tap (click without drag)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    pub pos: Point,
    pub modifiers: Modifiers,
}

impl TapEvent {
    pub fn new(sx: f64, sy: f64) -> Self {
        Self {
            pos: Point::new(sx, sy),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Shift-tap adds to the selection instead of replacing it
    pub fn wants_append(&self) -> bool {
        self.modifiers.shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_tap_appends() {
        assert!(!TapEvent::new(1.0, 2.0).wants_append());
        assert!(TapEvent::new(1.0, 2.0).with_modifiers(Modifiers::shift()).wants_append());
    }
}
