// Project
//
// Owns the arenas for source files, declarations, symbols and types, and
// exposes the construction and query API the extraction engine programs
// against. This is the stand-in for the TypeScript program + checker pair:
// a frontend populates it, the extractor only reads from it.

use crate::declaration::{ClassDeclaration, FunctionDeclaration, InterfaceDeclaration, VariableStatement};
use crate::types::{CallSignature, ObjectShape, PropertyMember, Symbol, Type, TypeFlags, TypeShape};
use crate::{ClassId, InterfaceId, SymbolId, TypeId};
use indexmap::IndexMap;

/// One parsed source file and the ids of its top-level declarations.
#[derive(Debug, Default)]
pub struct SourceFile {
    pub path: String,
    pub classes: Vec<ClassId>,
    pub interfaces: Vec<InterfaceId>,
    pub functions: Vec<FunctionDeclaration>,
    pub variable_statements: Vec<VariableStatement>,
}

#[derive(Debug)]
pub struct Project {
    files: IndexMap<String, SourceFile>,
    types: Vec<Type>,
    symbols: Vec<Symbol>,
    classes: Vec<ClassDeclaration>,
    interfaces: Vec<InterfaceDeclaration>,
    // interned primitive singletons
    string: TypeId,
    number: TypeId,
    boolean: TypeId,
    void: TypeId,
    undefined: TypeId,
    null: TypeId,
}

impl Project {
    pub fn new() -> Self {
        let mut project = Self {
            files: IndexMap::new(),
            types: Vec::new(),
            symbols: Vec::new(),
            classes: Vec::new(),
            interfaces: Vec::new(),
            string: TypeId(0),
            number: TypeId(0),
            boolean: TypeId(0),
            void: TypeId(0),
            undefined: TypeId(0),
            null: TypeId(0),
        };
        project.string = project.primitive("string", TypeFlags::STRING);
        project.number = project.primitive("number", TypeFlags::NUMBER);
        project.boolean = project.primitive("boolean", TypeFlags::BOOLEAN);
        project.void = project.primitive("void", TypeFlags::VOID);
        project.undefined = project.primitive("undefined", TypeFlags::UNDEFINED);
        project.null = project.primitive("null", TypeFlags::NULL);
        project
    }

    // --- Source files and declarations ---

    pub fn create_source_file(&mut self, path: impl Into<String>) -> &mut SourceFile {
        let path = path.into();
        self.files.entry(path.clone()).or_insert_with(|| SourceFile {
            path,
            ..SourceFile::default()
        })
    }

    /// Looks up a file in the project view. Files outside the configured
    /// project legitimately resolve to `None`.
    pub fn get_source_file(&self, path: &str) -> Option<&SourceFile> {
        self.files.get(path)
    }

    pub fn add_class(&mut self, path: &str, declaration: ClassDeclaration) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(declaration);
        self.create_source_file(path).classes.push(id);
        id
    }

    pub fn add_interface(&mut self, path: &str, declaration: InterfaceDeclaration) -> InterfaceId {
        let id = InterfaceId(self.interfaces.len() as u32);
        self.interfaces.push(declaration);
        self.create_source_file(path).interfaces.push(id);
        id
    }

    pub fn add_function(&mut self, path: &str, declaration: FunctionDeclaration) {
        self.create_source_file(path).functions.push(declaration);
    }

    pub fn add_variable_statement(&mut self, path: &str, statement: VariableStatement) {
        self.create_source_file(path)
            .variable_statements
            .push(statement);
    }

    pub fn class(&self, id: ClassId) -> &ClassDeclaration {
        &self.classes[id.0 as usize]
    }

    pub fn interface(&self, id: InterfaceId) -> &InterfaceDeclaration {
        &self.interfaces[id.0 as usize]
    }

    // --- Type and symbol queries ---

    pub fn type_of(&self, id: TypeId) -> &Type {
        &self.types[id.0 as usize]
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0 as usize]
    }

    pub fn text(&self, id: TypeId) -> &str {
        &self.type_of(id).text
    }

    pub fn symbol_name(&self, ty: TypeId) -> Option<&str> {
        self.type_of(ty)
            .symbol
            .map(|symbol| self.symbol(symbol).name.as_str())
    }

    pub fn is_array_type(&self, ty: TypeId) -> bool {
        self.symbol_name(ty) == Some("Array")
    }

    pub fn is_readonly_array_type(&self, ty: TypeId) -> bool {
        !self.type_of(ty).is_union_or_intersection()
            && self.symbol_name(ty) == Some("ReadonlyArray")
    }

    /// Whether the type's defining symbol lives in an external library.
    pub fn is_symbol_from_node_modules(&self, symbol: Option<SymbolId>) -> bool {
        symbol.is_some_and(|id| self.symbol(id).in_node_modules)
    }

    // --- Type construction ---

    pub fn add_type(&mut self, ty: Type) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(ty);
        id
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    fn primitive(&mut self, text: &str, flags: TypeFlags) -> TypeId {
        self.add_type(Type {
            shape: TypeShape::Primitive,
            flags,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text: text.to_string(),
        })
    }

    pub fn string_type(&self) -> TypeId {
        self.string
    }

    pub fn number_type(&self) -> TypeId {
        self.number
    }

    pub fn boolean_type(&self) -> TypeId {
        self.boolean
    }

    pub fn void_type(&self) -> TypeId {
        self.void
    }

    pub fn undefined_type(&self) -> TypeId {
        self.undefined
    }

    pub fn null_type(&self) -> TypeId {
        self.null
    }

    /// A literal type; `text` is the literal's source text, quotes included
    /// for strings.
    pub fn literal(&mut self, text: impl Into<String>) -> TypeId {
        let text = text.into();
        let flags = if text.starts_with('"') || text.starts_with('\'') {
            TypeFlags::STRING_LITERAL
        } else if text == "true" || text == "false" {
            TypeFlags::BOOLEAN_LITERAL
        } else {
            TypeFlags::NUMBER_LITERAL
        };
        self.add_type(Type {
            shape: TypeShape::Literal,
            flags,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text,
        })
    }

    /// A generic type parameter. The parameter's symbol is what substitution
    /// maps are keyed by.
    pub fn type_parameter(&mut self, name: impl Into<String>) -> TypeId {
        let name = name.into();
        let id = self.add_type(Type {
            shape: TypeShape::TypeParameter,
            flags: TypeFlags::TYPE_PARAMETER,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text: name.clone(),
        });
        let symbol = self.add_symbol(Symbol {
            name,
            declared_type: Some(id),
            in_node_modules: false,
        });
        self.types[id.0 as usize].symbol = Some(symbol);
        id
    }

    pub fn union_of(&mut self, parts: Vec<TypeId>) -> TypeId {
        let text = self.join_texts(&parts, " | ");
        self.add_type(Type {
            shape: TypeShape::Union(parts),
            flags: TypeFlags::UNION,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text,
        })
    }

    pub fn intersection_of(&mut self, parts: Vec<TypeId>) -> TypeId {
        let text = self.join_texts(&parts, " & ");
        self.add_type(Type {
            shape: TypeShape::Intersection(parts),
            flags: TypeFlags::INTERSECTION,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text,
        })
    }

    pub fn tuple_of(&mut self, elements: Vec<TypeId>) -> TypeId {
        let text = format!("[{}]", self.join_texts(&elements, ", "));
        self.add_type(Type {
            shape: TypeShape::Tuple(elements),
            flags: TypeFlags::OBJECT,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text,
        })
    }

    /// A named interface type. The interface's symbol declares the type
    /// itself.
    pub fn interface_type(
        &mut self,
        name: impl Into<String>,
        properties: Vec<(&str, TypeId)>,
        in_node_modules: bool,
    ) -> TypeId {
        self.named_object_like(name, properties, in_node_modules, TypeFlags::OBJECT, Vec::new())
    }

    /// A generic interface declaration; `type_parameters` become the declared
    /// type's type arguments, and members may reference them.
    pub fn generic_interface_type(
        &mut self,
        name: impl Into<String>,
        type_parameters: Vec<TypeId>,
        properties: Vec<(&str, TypeId)>,
        in_node_modules: bool,
    ) -> TypeId {
        self.named_object_like(name, properties, in_node_modules, TypeFlags::OBJECT, type_parameters)
    }

    /// A named class type. Classes are object-like but are never expanded
    /// structurally by the extractor.
    pub fn class_type(
        &mut self,
        name: impl Into<String>,
        properties: Vec<(&str, TypeId)>,
        in_node_modules: bool,
    ) -> TypeId {
        self.named_object_like(
            name,
            properties,
            in_node_modules,
            TypeFlags::OBJECT | TypeFlags::CLASS,
            Vec::new(),
        )
    }

    fn named_object_like(
        &mut self,
        name: impl Into<String>,
        properties: Vec<(&str, TypeId)>,
        in_node_modules: bool,
        flags: TypeFlags,
        type_parameters: Vec<TypeId>,
    ) -> TypeId {
        let name = name.into();
        let text = if type_parameters.is_empty() {
            name.clone()
        } else {
            format!("{}<{}>", name, self.join_texts(&type_parameters, ", "))
        };
        let shape = ObjectShape {
            properties: properties
                .into_iter()
                .map(|(property_name, ty)| PropertyMember {
                    name: property_name.to_string(),
                    ty,
                })
                .collect(),
            string_index_type: None,
            number_index_type: None,
        };
        let id = self.add_type(Type {
            shape: TypeShape::Interface(shape),
            flags,
            symbol: None,
            alias_symbol: None,
            type_arguments: type_parameters,
            alias_type_arguments: Vec::new(),
            text,
        });
        let symbol = self.add_symbol(Symbol {
            name,
            declared_type: Some(id),
            in_node_modules,
        });
        self.types[id.0 as usize].symbol = Some(symbol);
        id
    }

    /// An instantiation of a generic named type: same symbol and structure,
    /// concrete type arguments. Members keep referencing the declaration's
    /// type parameters; the extractor resolves them through its substitution
    /// map.
    pub fn instantiate(&mut self, generic: TypeId, type_arguments: Vec<TypeId>) -> TypeId {
        let mut ty = self.type_of(generic).clone();
        let base_name = self
            .symbol_name(generic)
            .map(str::to_string)
            .unwrap_or_else(|| ty.text.clone());
        ty.text = format!("{}<{}>", base_name, self.join_texts(&type_arguments, ", "));
        ty.type_arguments = type_arguments;
        self.add_type(ty)
    }

    /// Appends a member to an object-like type after construction, which is
    /// how self-referential types are built.
    pub fn add_property(&mut self, ty: TypeId, name: impl Into<String>, property_ty: TypeId) {
        if let TypeShape::Interface(shape) | TypeShape::Object(shape) =
            &mut self.types[ty.0 as usize].shape
        {
            shape.properties.push(PropertyMember {
                name: name.into(),
                ty: property_ty,
            });
        }
    }

    /// Adds a string or number index signature to an object-like type.
    pub fn set_index_type(&mut self, ty: TypeId, string_index: Option<TypeId>, number_index: Option<TypeId>) {
        if let TypeShape::Interface(shape) | TypeShape::Object(shape) =
            &mut self.types[ty.0 as usize].shape
        {
            shape.string_index_type = string_index;
            shape.number_index_type = number_index;
        }
    }

    /// An anonymous object literal type.
    pub fn object_type(&mut self, properties: Vec<(&str, TypeId)>) -> TypeId {
        let body = properties
            .iter()
            .map(|(property_name, ty)| format!("{}: {}", property_name, self.text(*ty)))
            .collect::<Vec<_>>()
            .join("; ");
        let shape = ObjectShape {
            properties: properties
                .into_iter()
                .map(|(property_name, ty)| PropertyMember {
                    name: property_name.to_string(),
                    ty,
                })
                .collect(),
            string_index_type: None,
            number_index_type: None,
        };
        self.add_type(Type {
            shape: TypeShape::Object(shape),
            flags: TypeFlags::OBJECT,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text: format!("{{ {} }}", body),
        })
    }

    pub fn function_type(&mut self, signatures: Vec<CallSignature>) -> TypeId {
        let text = signatures
            .first()
            .map(|signature| {
                let params = signature
                    .parameters
                    .iter()
                    .map(|parameter| format!("{}: {}", parameter.name, self.text(parameter.ty)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("({}) => {}", params, self.text(signature.return_type))
            })
            .unwrap_or_else(|| "() => void".to_string());
        self.add_type(Type {
            shape: TypeShape::Function(signatures),
            flags: TypeFlags::OBJECT,
            symbol: None,
            alias_symbol: None,
            type_arguments: Vec::new(),
            alias_type_arguments: Vec::new(),
            text,
        })
    }

    /// A named type reference the extractor treats opaquely (third-party
    /// generics, wrapper types, enums).
    pub fn reference(
        &mut self,
        name: impl Into<String>,
        type_arguments: Vec<TypeId>,
        in_node_modules: bool,
    ) -> TypeId {
        let name = name.into();
        let text = if type_arguments.is_empty() {
            name.clone()
        } else {
            format!("{}<{}>", name, self.join_texts(&type_arguments, ", "))
        };
        let id = self.add_type(Type {
            shape: TypeShape::Reference,
            flags: TypeFlags::OBJECT,
            symbol: None,
            alias_symbol: None,
            type_arguments,
            alias_type_arguments: Vec::new(),
            text,
        });
        let symbol = self.add_symbol(Symbol {
            name,
            declared_type: None,
            in_node_modules,
        });
        self.types[id.0 as usize].symbol = Some(symbol);
        id
    }

    pub fn array_of(&mut self, element: TypeId) -> TypeId {
        let text = format!("{}[]", self.text(element));
        let id = self.reference("Array", vec![element], true);
        self.types[id.0 as usize].text = text;
        id
    }

    pub fn readonly_array_of(&mut self, element: TypeId) -> TypeId {
        let text = format!("readonly {}[]", self.text(element));
        let id = self.reference("ReadonlyArray", vec![element], true);
        self.types[id.0 as usize].text = text;
        id
    }

    /// Attaches an alias symbol to a type (a `type X = …` declaration whose
    /// declared form is the aliased type itself).
    pub fn attach_alias(&mut self, ty: TypeId, name: impl Into<String>, in_node_modules: bool) -> TypeId {
        let name = name.into();
        let symbol = self.add_symbol(Symbol {
            name: name.clone(),
            declared_type: Some(ty),
            in_node_modules,
        });
        let entry = &mut self.types[ty.0 as usize];
        entry.alias_symbol = Some(symbol);
        entry.text = name;
        ty
    }

    /// Creates the symbol for a generic alias declaration. The declared form's
    /// `alias_type_arguments` are expected to hold the alias's own type
    /// parameters.
    pub fn alias_symbol_of(
        &mut self,
        name: impl Into<String>,
        declared: TypeId,
        in_node_modules: bool,
    ) -> SymbolId {
        let name = name.into();
        let symbol = self.add_symbol(Symbol {
            name: name.clone(),
            declared_type: Some(declared),
            in_node_modules,
        });
        let entry = &mut self.types[declared.0 as usize];
        entry.alias_symbol = Some(symbol);
        entry.text = name;
        symbol
    }

    /// Marks `ty` as an instantiation of the aliased declaration behind
    /// `alias`, with the supplied alias type arguments.
    pub fn attach_alias_instantiation(
        &mut self,
        ty: TypeId,
        alias: SymbolId,
        alias_type_arguments: Vec<TypeId>,
    ) -> TypeId {
        let name = self.symbol(alias).name.clone();
        let text = if alias_type_arguments.is_empty() {
            name
        } else {
            format!("{}<{}>", name, self.join_texts(&alias_type_arguments, ", "))
        };
        let entry = &mut self.types[ty.0 as usize];
        entry.alias_symbol = Some(alias);
        entry.alias_type_arguments = alias_type_arguments;
        entry.text = text;
        ty
    }

    /// Sets the alias declaration's own type parameters on its declared form.
    pub fn set_alias_type_arguments(&mut self, ty: TypeId, alias_type_arguments: Vec<TypeId>) {
        self.types[ty.0 as usize].alias_type_arguments = alias_type_arguments;
    }

    fn join_texts(&self, ids: &[TypeId], separator: &str) -> String {
        ids.iter()
            .map(|id| self.text(*id).to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interns_primitive_singletons_once() {
        let project = Project::new();
        assert_eq!(project.text(project.string_type()), "string");
        assert_eq!(project.text(project.undefined_type()), "undefined");
        assert!(project.type_of(project.undefined_type()).is_undefined());
    }

    #[test]
    fn builds_union_text_from_parts() {
        let mut project = Project::new();
        let union = project.union_of(vec![project.string_type(), project.null_type()]);
        assert_eq!(project.text(union), "string | null");
        assert_eq!(project.type_of(union).constituents().unwrap().len(), 2);
    }

    #[test]
    fn array_types_carry_the_array_symbol() {
        let mut project = Project::new();
        let array = project.array_of(project.string_type());
        assert_eq!(project.text(array), "string[]");
        assert!(project.is_array_type(array));
        assert!(!project.is_readonly_array_type(array));
    }

    #[test]
    fn missing_files_resolve_to_none() {
        let project = Project::new();
        assert!(project.get_source_file("not/in/project.ts").is_none());
    }
}
