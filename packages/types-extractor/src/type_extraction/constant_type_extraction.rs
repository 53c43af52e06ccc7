// Constant Extraction
//
// Maps a documented exported variable statement into a constant entity.
// Only the statement's first declaration is documented; multi-declaration
// statements are not written in the projects this targets.

use crate::type_extraction::ast_utils::{
    get_js_docs_default_value, get_js_docs_description, get_js_docs_group_aliases,
    is_type_required, literal_initializer_text,
};
use crate::type_extraction::type_details::generate_type_details;
use crate::type_extraction::type_printing::print_type;
use crate::types::{ConstantInformation, Entity, EntityKind, GenericTypeMapping};
use ts::{Project, VariableStatement};

pub fn generate_constant_information(
    project: &Project,
    statement: &VariableStatement,
    module_path: &str,
) -> Option<ConstantInformation> {
    let declaration = statement.declarations.first()?;
    let generic_map = GenericTypeMapping::new();

    let entity = Entity {
        name: declaration.name.clone(),
        kind: EntityKind::Constant,
        alias: None,
        default_value: get_js_docs_default_value(statement.js_doc.as_ref())
            .or_else(|| literal_initializer_text(declaration.initializer.as_ref())),
        description: get_js_docs_description(statement.js_doc.as_ref()),
        js_doc_params: Vec::new(),
        js_doc_return: None,
        ty: print_type(project, declaration.ty, false, 0, &generic_map),
        type_details: generate_type_details(project, declaration.ty, &generic_map),
        required: is_type_required(project, declaration.ty),
        modifier: None,
    };

    Some(ConstantInformation {
        name: declaration.name.clone(),
        module_path: module_path.to_string(),
        entity,
        group_by: get_js_docs_group_aliases(statement.js_doc.as_ref()),
    })
}
