// Type Graph
//
// Resolved types and symbols, stored in arenas on the `Project`.

use crate::{SymbolId, TypeId};
use bitflags::bitflags;

bitflags! {
    /// Classification word for a resolved type, mirroring the flag word the
    /// TypeScript checker exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypeFlags: u32 {
        const ANY = 1;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const VOID = 1 << 5;
        const UNDEFINED = 1 << 6;
        const NULL = 1 << 7;
        const NEVER = 1 << 8;
        const STRING_LITERAL = 1 << 9;
        const NUMBER_LITERAL = 1 << 10;
        const BOOLEAN_LITERAL = 1 << 11;
        const TYPE_PARAMETER = 1 << 12;
        const OBJECT = 1 << 13;
        const UNION = 1 << 14;
        const INTERSECTION = 1 << 15;
        const CLASS = 1 << 16;
    }
}

/// A named member slot on an object-like type.
#[derive(Debug, Clone)]
pub struct PropertyMember {
    pub name: String,
    pub ty: TypeId,
}

/// Structural payload shared by interface, class and anonymous object types.
#[derive(Debug, Clone, Default)]
pub struct ObjectShape {
    pub properties: Vec<PropertyMember>,
    pub string_index_type: Option<TypeId>,
    pub number_index_type: Option<TypeId>,
}

#[derive(Debug, Clone)]
pub struct ParameterInfo {
    pub name: String,
    pub ty: TypeId,
}

#[derive(Debug, Clone)]
pub struct CallSignature {
    pub parameters: Vec<ParameterInfo>,
    pub return_type: TypeId,
}

/// Structural shape of a resolved type. `Reference` covers named types the
/// engine never expands structurally (primitive wrappers, third-party
/// generics, arrays).
#[derive(Debug, Clone)]
pub enum TypeShape {
    Primitive,
    Literal,
    TypeParameter,
    Union(Vec<TypeId>),
    Intersection(Vec<TypeId>),
    Tuple(Vec<TypeId>),
    Interface(ObjectShape),
    Object(ObjectShape),
    Function(Vec<CallSignature>),
    Reference,
}

/// A resolved type. `text` is the source-facing rendering the checker would
/// produce for the type reference itself (e.g. `"string[]"`, `"\"hi\""`).
#[derive(Debug, Clone)]
pub struct Type {
    pub shape: TypeShape,
    pub flags: TypeFlags,
    pub symbol: Option<SymbolId>,
    pub alias_symbol: Option<SymbolId>,
    pub type_arguments: Vec<TypeId>,
    pub alias_type_arguments: Vec<TypeId>,
    pub text: String,
}

impl Type {
    pub fn is_union(&self) -> bool {
        matches!(self.shape, TypeShape::Union(_))
    }

    pub fn is_intersection(&self) -> bool {
        matches!(self.shape, TypeShape::Intersection(_))
    }

    pub fn is_union_or_intersection(&self) -> bool {
        self.is_union() || self.is_intersection()
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self.shape, TypeShape::Tuple(_))
    }

    pub fn is_undefined(&self) -> bool {
        self.flags.contains(TypeFlags::UNDEFINED)
    }

    pub fn is_null(&self) -> bool {
        self.flags.contains(TypeFlags::NULL)
    }

    pub fn is_literal(&self) -> bool {
        self.flags.intersects(
            TypeFlags::STRING_LITERAL | TypeFlags::NUMBER_LITERAL | TypeFlags::BOOLEAN_LITERAL,
        )
    }

    /// Union or intersection constituents, if any.
    pub fn constituents(&self) -> Option<&[TypeId]> {
        match &self.shape {
            TypeShape::Union(parts) | TypeShape::Intersection(parts) => Some(parts),
            _ => None,
        }
    }

    pub fn call_signatures(&self) -> &[CallSignature] {
        match &self.shape {
            TypeShape::Function(signatures) => signatures,
            _ => &[],
        }
    }

    pub fn object_shape(&self) -> Option<&ObjectShape> {
        match &self.shape {
            TypeShape::Interface(shape) | TypeShape::Object(shape) => Some(shape),
            _ => None,
        }
    }
}

/// A symbol: the named declaration side of a type. `declared_type` is the
/// generic declared form (its `type_arguments` are the declaration's own type
/// parameters).
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub declared_type: Option<TypeId>,
    pub in_node_modules: bool,
}
