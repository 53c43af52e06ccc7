// Type Extraction
//
// The per-file extraction pipeline: declaration filtering, member mapping,
// generic substitution, type printing and detail collection, inheritance
// merging.

pub mod angular_utils;
pub mod ast_utils;
pub mod class_type_extraction;
pub mod constant_type_extraction;
pub mod declaration_mappers;
pub mod function_type_extraction;
pub mod generics;
pub mod interface_type_extraction;
pub mod merge;
pub mod signature_mappers;
pub mod type_details;
pub mod type_printing;

use crate::error::ExtractionError;
use crate::type_extraction::ast_utils::{is_class_eligible, is_excluded, is_included};
use crate::type_extraction::class_type_extraction::generate_class_information;
use crate::type_extraction::constant_type_extraction::generate_constant_information;
use crate::type_extraction::function_type_extraction::generate_function_information;
use crate::type_extraction::interface_type_extraction::generate_interface_information;
use crate::types::TypeInformationByCategory;
use regex::Regex;
use ts::{ClassId, FunctionDeclaration, InterfaceId, Project, SourceFile, VariableStatement};

/// Externally supplied extraction options.
#[derive(Debug, Default)]
pub struct ExtractorOptions {
    /// Member names matching this pattern are dropped from every
    /// declaration.
    pub exclude_properties: Option<Regex>,
}

impl ExtractorOptions {
    pub fn is_property_excluded(&self, name: &str) -> bool {
        self.exclude_properties
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(name))
    }
}

/// The declarations of one source file that are eligible for documentation.
pub struct DeclarationsByCategory<'a> {
    pub classes: Vec<ClassId>,
    pub interfaces: Vec<InterfaceId>,
    pub functions: Vec<&'a FunctionDeclaration>,
    pub constants: Vec<&'a VariableStatement>,
}

/// Applies the eligibility rules: component-role or included classes,
/// explicitly included interfaces/functions, exported included variable
/// statements. Exclusion always wins.
pub fn get_declarations_by_category<'a>(
    project: &'a Project,
    file: &'a SourceFile,
) -> DeclarationsByCategory<'a> {
    DeclarationsByCategory {
        classes: file
            .classes
            .iter()
            .copied()
            .filter(|class| is_class_eligible(project.class(*class)))
            .collect(),
        interfaces: file
            .interfaces
            .iter()
            .copied()
            .filter(|interface| {
                let js_doc = project.interface(*interface).js_doc.as_ref();
                is_included(js_doc) && !is_excluded(js_doc)
            })
            .collect(),
        functions: file
            .functions
            .iter()
            .filter(|function| {
                is_included(function.js_doc.as_ref()) && !is_excluded(function.js_doc.as_ref())
            })
            .collect(),
        constants: file
            .variable_statements
            .iter()
            .filter(|statement| {
                statement.is_exported
                    && is_included(statement.js_doc.as_ref())
                    && !is_excluded(statement.js_doc.as_ref())
            })
            .collect(),
    }
}

/// Per-file entry point. A path outside the project view documents nothing.
pub fn generate_type_information(
    project: &Project,
    path: &str,
    options: &ExtractorOptions,
) -> Result<TypeInformationByCategory, ExtractionError> {
    let Some(file) = project.get_source_file(path) else {
        return Ok(TypeInformationByCategory::default());
    };
    let declarations = get_declarations_by_category(project, file);
    let mut result = TypeInformationByCategory::default();

    for class in declarations.classes {
        if let Some(information) = generate_class_information(project, class, path, options)? {
            result.classes.push(information);
        }
    }
    for interface in declarations.interfaces {
        result
            .interfaces
            .push(generate_interface_information(project, interface, path, options));
    }
    for function in declarations.functions {
        if let Some(information) = generate_function_information(project, function, path) {
            result.functions.push(information);
        }
    }
    for statement in declarations.constants {
        if let Some(information) = generate_constant_information(project, statement, path) {
            result.constants.push(information);
        }
    }
    Ok(result)
}
