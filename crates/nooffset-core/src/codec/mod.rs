//! Wire codecs for values that cross the request boundary.
//!
//! Only cursor tokens live here today; link rendering consumes them as
//! opaque strings.

pub mod cursor;
