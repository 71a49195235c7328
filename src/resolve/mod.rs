//! Name resolution: raw reference tokens to classified references.

mod name_resolver;
mod platform;

pub use name_resolver::{Classification, NameResolver, ResolvedRef};
pub use platform::PlatformIndex;
