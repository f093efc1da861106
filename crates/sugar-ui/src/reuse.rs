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

//! # Cell Reuse
//!
//! List and grid views keep only a handful of row views alive and recycle
//! them as rows scroll in and out. `ReuseQueue` is that recycling pool.
//!
//! A cell type names its pool through the associated constant
//! [`Reusable::REUSE_IDENTIFIER`], which is fixed at compile time. A type is
//! registered once with a factory; `dequeue` then hands back a recycled cell
//! when one is pooled and builds a fresh one otherwise.
//!
//! ```rust
//! use sugar_ui::reuse::{ReuseQueue, Reusable};
//!
//! #[derive(Default)]
//! struct TitleCell {
//!     title: String,
//! }
//!
//! impl Reusable for TitleCell {
//!     const REUSE_IDENTIFIER: &'static str = "TitleCell";
//!
//!     fn prepare_for_reuse(&mut self) {
//!         self.title.clear();
//!     }
//! }
//!
//! let mut queue = ReuseQueue::new();
//! queue.register::<TitleCell>();
//!
//! let mut cell: TitleCell = queue.dequeue().unwrap();
//! cell.title.push_str("Inbox");
//! queue.enqueue(cell).unwrap();
//!
//! let recycled: TitleCell = queue.dequeue().unwrap();
//! assert!(recycled.title.is_empty());
//! ```

use crate::error::UiError;
use rustc_hash::FxHashMap;
use std::any::{Any, TypeId};

/// A view that can be recycled through a [`ReuseQueue`].
pub trait Reusable: Any {
    /// Name of the pool this type is recycled through.
    const REUSE_IDENTIFIER: &'static str;

    /// Clears per-row state before the cell goes back into the pool.
    fn prepare_for_reuse(&mut self) {}
}

type Factory = Box<dyn Fn() -> Box<dyn Any>>;

struct Registration {
    type_id: TypeId,
    factory: Factory,
    pool: Vec<Box<dyn Any>>,
}

/// Pool of recycled cells keyed by reuse identifier.
#[derive(Default)]
pub struct ReuseQueue {
    registrations: FxHashMap<&'static str, Registration>,
}

impl ReuseQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `C`, building fresh cells with `C::default()`.
    pub fn register<C>(&mut self)
    where
        C: Reusable + Default,
    {
        self.register_with(C::default);
    }

    /// Registers `C` with a custom factory.
    ///
    /// Registering a type under an identifier already in use replaces the
    /// previous registration and drops its pooled cells.
    pub fn register_with<C, F>(&mut self, factory: F)
    where
        C: Reusable,
        F: Fn() -> C + 'static,
    {
        let registration = Registration {
            type_id: TypeId::of::<C>(),
            factory: Box::new(move || Box::new(factory()) as Box<dyn Any>),
            pool: Vec::new(),
        };
        if self
            .registrations
            .insert(C::REUSE_IDENTIFIER, registration)
            .is_some()
        {
            tracing::debug!(
                identifier = C::REUSE_IDENTIFIER,
                "replaced reuse registration"
            );
        }
    }

    /// Returns `true` if some type is registered under `C`'s identifier.
    #[inline]
    pub fn is_registered<C>(&self) -> bool
    where
        C: Reusable,
    {
        self.registrations.contains_key(C::REUSE_IDENTIFIER)
    }

    /// Returns how many cells are waiting in `C`'s pool.
    pub fn pooled_count<C>(&self) -> usize
    where
        C: Reusable,
    {
        self.registrations
            .get(C::REUSE_IDENTIFIER)
            .map_or(0, |r| r.pool.len())
    }

    fn registration_mut<C>(&mut self) -> Result<&mut Registration, UiError>
    where
        C: Reusable,
    {
        let identifier = C::REUSE_IDENTIFIER;
        let registration = self
            .registrations
            .get_mut(identifier)
            .ok_or(UiError::UnregisteredReuseIdentifier(identifier))?;
        if registration.type_id != TypeId::of::<C>() {
            return Err(UiError::ReuseTypeMismatch { identifier });
        }
        Ok(registration)
    }

    /// Returns a recycled `C` if one is pooled, otherwise a freshly built one.
    ///
    /// # Errors
    ///
    /// - [`UiError::UnregisteredReuseIdentifier`] if nothing is registered
    ///   under `C::REUSE_IDENTIFIER`.
    /// - [`UiError::ReuseTypeMismatch`] if a different type is registered
    ///   under that identifier.
    pub fn dequeue<C>(&mut self) -> Result<C, UiError>
    where
        C: Reusable,
    {
        let identifier = C::REUSE_IDENTIFIER;
        let registration = self.registration_mut::<C>()?;

        let (cell, recycled) = match registration.pool.pop() {
            Some(cell) => (cell, true),
            None => ((registration.factory)(), false),
        };
        tracing::trace!(identifier, recycled, "dequeued cell");

        cell.downcast::<C>()
            .map(|boxed| *boxed)
            .map_err(|_| UiError::ReuseTypeMismatch { identifier })
    }

    /// Prepares `cell` for reuse and returns it to its pool.
    ///
    /// # Errors
    ///
    /// Fails like [`ReuseQueue::dequeue`] when `C` is not the registered type.
    /// The cell is dropped in that case.
    pub fn enqueue<C>(&mut self, mut cell: C) -> Result<(), UiError>
    where
        C: Reusable,
    {
        let registration = self.registration_mut::<C>()?;
        cell.prepare_for_reuse();
        registration.pool.push(Box::new(cell));
        Ok(())
    }

    /// Drops every pooled cell. Registrations are kept.
    pub fn drain_pools(&mut self) {
        for registration in self.registrations.values_mut() {
            registration.pool.clear();
        }
    }
}

impl std::fmt::Debug for ReuseQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (identifier, registration) in &self.registrations {
            map.entry(identifier, &registration.pool.len());
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Debug, Default, PartialEq)]
    struct TextCell {
        text: String,
        serial: u32,
    }

    impl Reusable for TextCell {
        const REUSE_IDENTIFIER: &'static str = "TextCell";

        fn prepare_for_reuse(&mut self) {
            self.text.clear();
        }
    }

    #[derive(Debug, Default)]
    struct ImposterCell;

    impl Reusable for ImposterCell {
        const REUSE_IDENTIFIER: &'static str = "TextCell";
    }

    #[derive(Debug, Default)]
    struct UnregisteredCell;

    impl Reusable for UnregisteredCell {
        const REUSE_IDENTIFIER: &'static str = "Unregistered";
    }

    #[test]
    fn test_dequeue_builds_then_recycles() {
        let built = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&built);

        let mut queue = ReuseQueue::new();
        queue.register_with(move || {
            counter.set(counter.get() + 1);
            TextCell {
                text: String::new(),
                serial: counter.get(),
            }
        });

        let mut first: TextCell = queue.dequeue().unwrap();
        assert_eq!(first.serial, 1);
        first.text.push_str("row 0");
        queue.enqueue(first).unwrap();
        assert_eq!(queue.pooled_count::<TextCell>(), 1);

        let again: TextCell = queue.dequeue().unwrap();
        assert_eq!(again.serial, 1);
        assert!(again.text.is_empty());
        assert_eq!(built.get(), 1);

        let second: TextCell = queue.dequeue().unwrap();
        assert_eq!(second.serial, 2);
    }

    #[test]
    fn test_unregistered_identifier() {
        let mut queue = ReuseQueue::new();
        assert!(!queue.is_registered::<UnregisteredCell>());
        assert_eq!(
            queue.dequeue::<UnregisteredCell>().unwrap_err(),
            UiError::UnregisteredReuseIdentifier("Unregistered")
        );
        assert!(queue.enqueue(UnregisteredCell).is_err());
    }

    #[test]
    fn test_type_mismatch_on_shared_identifier() {
        let mut queue = ReuseQueue::new();
        queue.register::<TextCell>();

        assert_eq!(
            queue.dequeue::<ImposterCell>().unwrap_err(),
            UiError::ReuseTypeMismatch {
                identifier: "TextCell"
            }
        );
        assert!(queue.enqueue(ImposterCell).is_err());
        assert_eq!(queue.pooled_count::<TextCell>(), 0);
    }

    #[test]
    fn test_reregistering_replaces_pool() {
        let mut queue = ReuseQueue::new();
        queue.register::<TextCell>();
        queue.enqueue(TextCell::default()).unwrap();

        queue.register::<ImposterCell>();
        assert_eq!(queue.pooled_count::<ImposterCell>(), 0);
        assert!(queue.dequeue::<ImposterCell>().is_ok());
        assert!(queue.dequeue::<TextCell>().is_err());
    }

    #[test]
    fn test_drain_pools_keeps_registrations() {
        let mut queue = ReuseQueue::new();
        queue.register::<TextCell>();
        queue.enqueue(TextCell::default()).unwrap();
        queue.drain_pools();
        assert_eq!(queue.pooled_count::<TextCell>(), 0);
        assert!(queue.is_registered::<TextCell>());
    }
}
