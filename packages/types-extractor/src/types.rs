// Extraction Data Model
//
// The normalized metadata records the engine produces. Everything here
// serializes to the plain keyed-table payload the documentation viewer
// reads, so field names follow the documented camelCase wire shape.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;
use ts::{SymbolId, TypeId};

/// Semantic category of an extracted member or export. `model` never
/// survives mapping: it expands into one input and one output entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Input,
    Output,
    Property,
    Method,
    Constant,
    Function,
}

/// Accessor origin tag for getter/setter-derived entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityModifier {
    Getter,
    Setter,
}

/// One structured `@param` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsDocParam {
    pub name: String,
    pub description: String,
}

/// The unit of extracted metadata for one member or top-level declaration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub kind: EntityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub js_doc_params: Vec<JsDocParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_doc_return: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_details: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<EntityModifier>,
}

impl Entity {
    /// Display name used for sorting and table rendering: the alias when one
    /// is set, otherwise the member name.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Entities of one documented declaration, grouped by category. Within each
/// category entities are ordered alphabetically by alias-or-name.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitiesByCategory {
    pub inputs: Vec<Entity>,
    pub outputs: Vec<Entity>,
    pub properties: Vec<Entity>,
    pub methods: Vec<Entity>,
    pub functions: Vec<Entity>,
    pub constants: Vec<Entity>,
}

impl EntitiesByCategory {
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut categories = Self::default();
        for entity in entities {
            categories.category_mut(entity.kind).push(entity);
        }
        categories.sort();
        categories
    }

    fn category_mut(&mut self, kind: EntityKind) -> &mut Vec<Entity> {
        match kind {
            EntityKind::Input => &mut self.inputs,
            EntityKind::Output => &mut self.outputs,
            EntityKind::Property => &mut self.properties,
            EntityKind::Method => &mut self.methods,
            EntityKind::Function => &mut self.functions,
            EntityKind::Constant => &mut self.constants,
        }
    }

    fn sort(&mut self) {
        for category in [
            &mut self.inputs,
            &mut self.outputs,
            &mut self.properties,
            &mut self.methods,
            &mut self.functions,
            &mut self.constants,
        ] {
            category.sort_by(|a, b| a.display_name().cmp(b.display_name()));
        }
    }
}

/// Metadata for one documented class.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInformation {
    pub name: String,
    pub module_path: String,
    pub entities_by_category: EntitiesByCategory,
}

/// Metadata for one documented interface. `aliases` lists the display names
/// the interface is reachable under (its own name plus inclusion-tag
/// aliases).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceInformation {
    pub name: String,
    pub module_path: String,
    pub aliases: Vec<String>,
    pub entities_by_category: EntitiesByCategory,
}

/// Metadata for one documented standalone function export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInformation {
    pub name: String,
    pub module_path: String,
    pub entity: Entity,
    pub group_by: Vec<String>,
}

/// Metadata for one documented exported constant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstantInformation {
    pub name: String,
    pub module_path: String,
    pub entity: Entity,
    pub group_by: Vec<String>,
}

/// Everything extracted from one source file.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInformationByCategory {
    pub classes: Vec<ClassInformation>,
    pub interfaces: Vec<InterfaceInformation>,
    pub functions: Vec<FunctionInformation>,
    pub constants: Vec<ConstantInformation>,
}

/// Functions and constants combined under one group alias.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedExportInformation {
    pub name: String,
    pub functions: Vec<FunctionInformation>,
    pub constants: Vec<ConstantInformation>,
}

/// Substitution map binding a type parameter's symbol to the type supplied
/// for it along the current inheritance chain. Built fresh per analyzed
/// declaration, never shared across chains.
pub type GenericTypeMapping = HashMap<SymbolId, TypeId>;

/// Kind tag of a collected named type definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Interface,
    Type,
    Class,
    Function,
}

impl TypeKind {
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Interface => "interface",
            TypeKind::Type => "type",
            TypeKind::Class => "class",
            TypeKind::Function => "function",
        }
    }
}

/// One named type definition reachable from an entity's type.
#[derive(Debug, Clone)]
pub struct TypeDetail {
    pub kind: TypeKind,
    pub type_name: String,
    pub detail_string: String,
}

/// Deduplicated table of named type definitions, keyed by defining symbol.
/// Doubles as the visited set that guarantees termination on cyclic types.
pub type TypeDetailCollection = IndexMap<SymbolId, TypeDetail>;
