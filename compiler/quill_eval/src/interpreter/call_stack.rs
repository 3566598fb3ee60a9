//! Live call frames, bounded by the configured call depth.

use quill_ir::{Name, Span};

use crate::errors::{recursion_limit_exceeded, EvalError};

/// One active call of a user-defined function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    pub name: Name,
    /// The call expression, not the declaration.
    pub call_span: Span,
}

/// Frames of the calls currently executing, innermost last.
///
/// The depth check happens in [`push`](CallStack::push), so a frame is
/// never recorded past the limit.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: usize,
}

impl CallStack {
    pub fn new(max_depth: usize) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        if self.frames.len() >= self.max_depth {
            return Err(recursion_limit_exceeded(self.max_depth));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "pop on an empty call stack");
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[cfg(test)]
    fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }

    /// Drop every frame; used when an error aborts evaluation.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
