//! Static extraction of documentation metadata from Angular-style
//! TypeScript declarations. The engine classifies class, interface,
//! function and constant declarations into normalized entity tables,
//! resolving inheritance chains, generic substitution and reactive signal
//! shapes, and rendering each entity's type as a display string with an
//! optional structural breakdown of the named types it reaches.
//!
//! Input is an arena-backed project model from the `ts` crate; output is a
//! keyed table of plain serializable payloads for a documentation viewer.

pub mod error;
pub mod grouping;
pub mod pass;
pub mod registry;
pub mod type_extraction;
pub mod types;
pub mod utils;

pub use error::ExtractionError;
pub use grouping::group_export_information;
pub use pass::ExtractionPass;
pub use registry::ClassIdRegistry;
pub use type_extraction::{generate_type_information, ExtractorOptions};
pub use types::*;
