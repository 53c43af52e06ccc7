//! TypeScript-compatible project model for the Angular types extractor.
//! This crate serves as the type-resolution layer: an arena-backed view of a
//! resolved TypeScript project (source files, declarations, members, JSDoc
//! blocks and the resolved-type graph) that the extraction engine consumes.

pub mod declaration;
pub mod jsdoc;
pub mod project;
pub mod types;

pub use declaration::*;
pub use jsdoc::*;
pub use project::*;
pub use types::*;

/// Index of a type in the project's type arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeId(pub u32);

/// Index of a symbol in the project's symbol arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub u32);

/// Index of a class declaration in the project's class arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

/// Index of an interface declaration in the project's interface arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceId(pub u32);
