// Function Extraction
//
// Maps a documented top-level function into a standalone entity with its
// grouping aliases.

use crate::type_extraction::ast_utils::{
    get_js_doc_params, get_js_doc_return, get_js_docs_description, get_js_docs_group_aliases,
};
use crate::type_extraction::type_details::generate_type_details;
use crate::type_extraction::type_printing::print_call_signatures;
use crate::types::{Entity, EntityKind, FunctionInformation, GenericTypeMapping};
use ts::{FunctionDeclaration, Project};

/// Extracts one function. Anonymous function expressions are skipped
/// silently.
pub fn generate_function_information(
    project: &Project,
    function: &FunctionDeclaration,
    module_path: &str,
) -> Option<FunctionInformation> {
    let name = function.name.clone()?;
    let generic_map = GenericTypeMapping::new();
    let signature = print_call_signatures(project, function.ty, &generic_map);

    let entity = Entity {
        name: name.clone(),
        kind: EntityKind::Function,
        alias: None,
        default_value: None,
        description: get_js_docs_description(function.js_doc.as_ref()),
        js_doc_params: get_js_doc_params(function.js_doc.as_ref()),
        js_doc_return: get_js_doc_return(function.js_doc.as_ref()),
        ty: format!("{}{}", name, signature),
        type_details: generate_type_details(project, function.ty, &generic_map),
        required: false,
        modifier: None,
    };

    Some(FunctionInformation {
        name,
        module_path: module_path.to_string(),
        entity,
        group_by: get_js_docs_group_aliases(function.js_doc.as_ref()),
    })
}
