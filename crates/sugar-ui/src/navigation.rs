// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Navigation Stack
//!
//! A stack of screens with a fixed root, in the style of a navigation
//! controller. Every mutation takes a completion callback which runs after
//! the stack has changed and receives the new top. The root can never be
//! popped, so the stack is never empty.
//!
//! ```rust
//! use sugar_ui::navigation::NavigationStack;
//!
//! let mut nav = NavigationStack::new("inbox");
//! nav.push("thread", |top| assert_eq!(*top, "thread"));
//! nav.push("message", |_| {});
//!
//! let popped = nav.pop_to_root(|top| assert_eq!(*top, "inbox"));
//! assert_eq!(popped, vec!["thread", "message"]);
//! assert_eq!(nav.depth(), 1);
//! ```

/// A non-empty stack of screens.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationStack<T> {
    // Invariant: never empty; index 0 is the root.
    screens: Vec<T>,
}

impl<T> NavigationStack<T> {
    pub fn new(root: T) -> Self {
        Self {
            screens: vec![root],
        }
    }

    #[inline]
    pub fn root(&self) -> &T {
        &self.screens[0]
    }

    #[inline]
    pub fn top(&self) -> &T {
        &self.screens[self.screens.len() - 1]
    }

    /// Number of screens, including the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    #[inline]
    pub fn is_at_root(&self) -> bool {
        self.screens.len() == 1
    }

    /// Screens from root to top.
    #[inline]
    pub fn screens(&self) -> &[T] {
        &self.screens
    }

    /// Pushes `screen`, then runs `completion` with the new top.
    pub fn push<F>(&mut self, screen: T, completion: F)
    where
        F: FnOnce(&T),
    {
        self.screens.push(screen);
        tracing::debug!(depth = self.screens.len(), "push");
        completion(self.top());
    }

    /// Pops the top screen unless it is the root, then runs `completion` with
    /// the new top. The completion runs even when nothing was popped.
    pub fn pop<F>(&mut self, completion: F) -> Option<T>
    where
        F: FnOnce(&T),
    {
        let popped = if self.is_at_root() {
            tracing::trace!("pop ignored at root");
            None
        } else {
            self.screens.pop()
        };
        if popped.is_some() {
            tracing::debug!(depth = self.screens.len(), "pop");
        }
        completion(self.top());
        popped
    }

    /// Pops every screen above the root, returned bottom to top, then runs
    /// `completion` with the root.
    pub fn pop_to_root<F>(&mut self, completion: F) -> Vec<T>
    where
        F: FnOnce(&T),
    {
        let popped: Vec<T> = self.screens.drain(1..).collect();
        tracing::debug!(count = popped.len(), "pop to root");
        completion(self.top());
        popped
    }

    /// Pops screens above the first one matching `predicate`, searching from
    /// the top. Returns `None` and changes nothing if no screen matches; the
    /// completion only runs on a match.
    pub fn pop_to<P, F>(&mut self, predicate: P, completion: F) -> Option<Vec<T>>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&T),
    {
        let index = self.screens.iter().rposition(predicate)?;
        let popped: Vec<T> = self.screens.drain(index + 1..).collect();
        tracing::debug!(count = popped.len(), depth = self.screens.len(), "pop to screen");
        completion(self.top());
        Some(popped)
    }
}
