//! Cursor handling at both ends of a page fetch: resolving an incoming
//! cursor into an anchor key, and emitting outgoing cursors from a page.

mod emit;
mod resolve;

pub use emit::{NavLink, Navigation, PageCursors, emit, navigation};
pub use resolve::{Anchor, CursorResolveError, resolve};
