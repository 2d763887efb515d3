//! Helpers shared by the catalog crates: logging setup, common response types
//! and record identifier generation.

pub mod types;
pub mod ids;

pub mod utils {
    pub mod logging;
}
