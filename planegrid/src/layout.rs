// Copyright 2025 the Planegrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The cross-linked pair of resolved axis states.
//!
//! Each axis needs the other's resolved state to know where its own axis line
//! crosses, so both states live in one fixed table and "opposite" is just the
//! other slot.

use crate::axis::Orientation;
use crate::resolve::LayoutState;

/// The two [`LayoutState`]s of one update cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    states: [LayoutState; 2],
}

impl GridLayout {
    /// Links two resolved states.
    ///
    /// The states are stored by their own orientation, so argument order does
    /// not matter as long as one of each is given.
    pub fn new(a: LayoutState, b: LayoutState) -> Option<Self> {
        if a.orientation == b.orientation {
            return None;
        }
        let states = match a.orientation {
            Orientation::X => [a, b],
            Orientation::Y => [b, a],
        };
        Some(Self { states })
    }

    /// Links states already known to be horizontal and vertical.
    pub(crate) fn linked(x: LayoutState, y: LayoutState) -> Self {
        debug_assert_eq!(x.orientation, Orientation::X, "horizontal state expected");
        debug_assert_eq!(y.orientation, Orientation::Y, "vertical state expected");
        Self { states: [x, y] }
    }

    /// The state of the given axis.
    pub fn state(&self, axis: Orientation) -> &LayoutState {
        &self.states[axis.index()]
    }

    /// The state of the axis orthogonal to `axis`.
    pub fn opposite(&self, axis: Orientation) -> &LayoutState {
        &self.states[axis.opposite().index()]
    }

    /// The horizontal axis state.
    pub fn x(&self) -> &LayoutState {
        self.state(Orientation::X)
    }

    /// The vertical axis state.
    pub fn y(&self) -> &LayoutState {
        self.state(Orientation::Y)
    }
}
