//! ## Crate layout
//! - `core`: the keyset pagination engine, predicate AST, SQL rendering, and
//!   the in-memory table.
//! - `params`: request parameters into typed pagination options.
//! - `links`: navigation links back into request parameters.
//!
//! The `prelude` module mirrors what a host needs to paginate one query.

pub use nooffset_core as core;

pub mod links;
pub mod params;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::Error;

use crate::core::{config::PaginationConfig, paginate::KeysetPaginator};

/// Load a TOML configuration document and build a paginator over it.
pub fn paginator_from_toml(source: &str) -> Result<KeysetPaginator, Error> {
    let config = PaginationConfig::from_toml_str(source)?;

    Ok(KeysetPaginator::new(config))
}

///
/// Host Prelude
///

pub mod prelude {
    pub use crate::{
        core::{prelude::*, store::MemoryTable},
        links::href,
        params::extract,
    };
}

///
/// TESTS
///
