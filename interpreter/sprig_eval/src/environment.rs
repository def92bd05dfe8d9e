//! Lexical environments: an ordered chain of shared, mutable frames.

use crate::value::Value;
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Rc;

/// One mapping layer within the scope chain.
type Frame = FxHashMap<Rc<str>, Value>;

/// Frame chain, outermost first.
///
/// Cloning an environment clones the frame *list*, not the frames:
/// clones and children alias the same underlying frames. This is what
/// gives closures their capture-by-reference behavior, so two closures
/// sharing an ancestor frame observe each other's later mutations.
///
/// Single-threaded by design; frames are `Rc<RefCell>` and every borrow
/// is released before evaluation recurses.
#[derive(Clone, Debug)]
pub struct Environment {
    frames: Vec<Rc<RefCell<Frame>>>,
}

impl Environment {
    /// Root environment with a single empty global frame.
    pub fn new() -> Self {
        Environment {
            frames: vec![Rc::new(RefCell::new(Frame::default()))],
        }
    }

    /// New environment sharing this one's frames plus one fresh empty
    /// frame on top. Used for `if`/`for`/call scopes and for the
    /// snapshot a function captures at definition.
    #[must_use]
    pub fn extend(&self) -> Self {
        let mut frames = self.frames.clone();
        frames.push(Rc::new(RefCell::new(Frame::default())));
        Environment { frames }
    }

    /// Value bound to `name` in the nearest frame that has it.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.borrow().get(name).cloned())
    }

    /// Overwrite `name` in the nearest frame already containing it, or
    /// bind it in the innermost frame if no frame does.
    pub fn set(&self, name: impl Into<Rc<str>>, value: Value) {
        let name = name.into();
        for frame in self.frames.iter().rev() {
            let mut map = frame.borrow_mut();
            if map.contains_key(&*name) {
                map.insert(name, value);
                return;
            }
        }
        self.define(name, value);
    }

    /// Bind `name` in the innermost frame, shadowing any outer binding.
    pub fn define(&self, name: impl Into<Rc<str>>, value: Value) {
        debug_assert!(!self.frames.is_empty(), "environment always has a frame");
        if let Some(frame) = self.frames.last() {
            frame.borrow_mut().insert(name.into(), value);
        }
    }

    /// Whether any frame binds `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.frames
            .iter()
            .any(|frame| frame.borrow().contains_key(name))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
