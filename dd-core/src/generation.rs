//! Per-key request generations.
//!
//! Every request takes a [`Ticket`] carrying the next generation for its key.
//! When the response arrives it is applied only if no newer request for the
//! same key has started since, so the last *request* wins regardless of the
//! order responses come back in.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket<K> {
    pub key: K,
    pub generation: u64,
}

#[derive(Debug)]
pub struct Generations<K> {
    latest: RefCell<HashMap<K, u64>>,
}

impl<K> Default for Generations<K> {
    fn default() -> Self {
        Self {
            latest: RefCell::new(HashMap::new()),
        }
    }
}

impl<K: Copy + Eq + Hash> Generations<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request for `key`, superseding any in flight.
    pub fn begin(&self, key: K) -> Ticket<K> {
        let mut latest = self.latest.borrow_mut();
        let generation = latest.entry(key).or_insert(0);
        *generation += 1;
        Ticket {
            key,
            generation: *generation,
        }
    }

    /// Whether `ticket` still belongs to the newest request for its key.
    pub fn is_current(&self, ticket: &Ticket<K>) -> bool {
        self.latest.borrow().get(&ticket.key).copied() == Some(ticket.generation)
    }

    pub fn latest(&self, key: K) -> u64 {
        self.latest.borrow().get(&key).copied().unwrap_or(0)
    }
}
