//! Observable in-memory stores for the three apps.
//!
//! # Responsibility
//! - Own the canonical in-memory collections and filter state.
//! - Mediate all mutation: mutate, enqueue persistence, notify subscribers.
//!
//! # Invariants
//! - After any mutating call returns, the in-memory state reflects the
//!   change and a persistence write has been issued (fire-and-forget).
//! - Persistence failures never propagate to callers; they are logged and
//!   dropped, leaving in-memory state authoritative for the session.
//! - Stores are single-writer by construction (`&mut self` mutation); the
//!   background writer thread never touches in-memory collections.

pub mod collection;
pub mod context;
pub mod hobbies;
pub mod petcare;
pub mod recipes;
pub mod subscribers;
pub mod value;
pub mod write_behind;
