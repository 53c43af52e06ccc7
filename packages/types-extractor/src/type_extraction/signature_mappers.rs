// Interface Member Mapping
//
// Converts interface property and method signatures into entities. The
// same substitution map used for classes threads through here, so generic
// interface hierarchies resolve their members.

use crate::type_extraction::ast_utils::{
    get_js_doc_params, get_js_doc_return, get_js_docs_default_value, get_js_docs_description,
    is_excluded, is_type_required,
};
use crate::type_extraction::generics::try_to_replace_type_by_generic;
use crate::type_extraction::merge::insert_entity;
use crate::type_extraction::type_details::generate_type_details;
use crate::type_extraction::type_printing::{print_call_signatures, print_type};
use crate::type_extraction::ExtractorOptions;
use crate::types::{Entity, EntityKind, GenericTypeMapping};
use indexmap::IndexMap;
use ts::{InterfaceId, MethodSignature, Project, PropertySignature};

pub fn map_interface_declaration_to_entities(
    project: &Project,
    interface_id: InterfaceId,
    generic_map: &GenericTypeMapping,
    options: &ExtractorOptions,
) -> IndexMap<String, Entity> {
    let interface = project.interface(interface_id);
    let mut entities = IndexMap::new();

    for property in &interface.properties {
        if is_excluded(property.js_doc.as_ref()) || options.is_property_excluded(&property.name) {
            continue;
        }
        insert_entity(&mut entities, map_property_signature(project, property, generic_map));
    }
    for method in &interface.methods {
        if is_excluded(method.js_doc.as_ref()) || options.is_property_excluded(&method.name) {
            continue;
        }
        insert_entity(&mut entities, map_method_signature(project, method, generic_map));
    }
    entities
}

fn map_property_signature(
    project: &Project,
    property: &PropertySignature,
    generic_map: &GenericTypeMapping,
) -> Entity {
    let resolved = try_to_replace_type_by_generic(project, property.ty, generic_map);
    Entity {
        name: property.name.clone(),
        kind: EntityKind::Property,
        alias: None,
        default_value: get_js_docs_default_value(property.js_doc.as_ref()),
        description: get_js_docs_description(property.js_doc.as_ref()),
        js_doc_params: Vec::new(),
        js_doc_return: None,
        ty: print_type(project, property.ty, false, 0, generic_map),
        type_details: generate_type_details(project, property.ty, generic_map),
        required: !property.has_question_token && is_type_required(project, resolved),
        modifier: None,
    }
}

fn map_method_signature(
    project: &Project,
    method: &MethodSignature,
    generic_map: &GenericTypeMapping,
) -> Entity {
    let signature = print_call_signatures(project, method.ty, generic_map);
    Entity {
        name: method.name.clone(),
        kind: EntityKind::Method,
        alias: None,
        default_value: None,
        description: get_js_docs_description(method.js_doc.as_ref()),
        js_doc_params: get_js_doc_params(method.js_doc.as_ref()),
        js_doc_return: get_js_doc_return(method.js_doc.as_ref()),
        ty: format!("{}{}", method.name, signature),
        type_details: generate_type_details(project, method.ty, generic_map),
        required: false,
        modifier: None,
    }
}
