//! Read-only queries against the resolved hierarchy.
//!
//! Everything here borrows [`Hierarchy`](crate::graph::Hierarchy)
//! immutably. Ordering is part of the API: subclass/implementer/user sets
//! come back in registry order, chains in nearest-first order.

mod ancestry;
mod descendants;
mod filter;
mod members;

pub use filter::{MemberFilter, display_order};
pub use members::{EffectiveMember, InheritedMembers};

#[cfg(test)]
mod tests;
