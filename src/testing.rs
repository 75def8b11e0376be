// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Stand-ins for a GL context, for tests.
//!
//! Available under `cfg(test)` and with the `testing` feature.

use crate::binder::Bind;
use crate::constants;
use crate::diagnostics::ErrorQuery;
use std::cell::RefCell;
use std::collections::VecDeque;

/// An [`ErrorQuery`] backed by a queue of error codes instead of a context.
#[derive(Debug, Default)]
pub struct FakeErrorQueue {
    pending: RefCell<VecDeque<u32>>,
    stuck: Option<u32>,
}

impl FakeErrorQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A queue that reports `code` forever, like a context that has been lost.
    pub fn stuck(code: u32) -> Self {
        FakeErrorQueue {
            pending: RefCell::default(),
            stuck: Some(code),
        }
    }

    /// Raises an error flag.
    pub fn push(&self, code: u32) {
        self.pending.borrow_mut().push_back(code);
    }

    /// Codes not yet read.
    pub fn pending(&self) -> Vec<u32> {
        self.pending.borrow().iter().copied().collect()
    }
}

impl ErrorQuery for FakeErrorQueue {
    fn get_error(&self) -> u32 {
        if let Some(code) = self.stuck {
            return code;
        }
        self.pending
            .borrow_mut()
            .pop_front()
            .unwrap_or(constants::NO_ERROR)
    }
}

/// A [`Bind`] resource that remembers every call to `bind`.
#[derive(Debug, Default)]
pub struct RecordingBindable {
    transitions: RefCell<Vec<bool>>,
}

impl RecordingBindable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The argument of the last `bind` call; `false` before the first.
    pub fn is_bound(&self) -> bool {
        self.transitions.borrow().last().copied().unwrap_or(false)
    }

    /// Every `bind` argument, oldest first.
    pub fn transitions(&self) -> Vec<bool> {
        self.transitions.borrow().clone()
    }
}

impl Bind for RecordingBindable {
    fn bind(&self, bound: bool) {
        self.transitions.borrow_mut().push(bound);
    }
}
