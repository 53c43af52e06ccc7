// Class Member Mapping
//
// Converts each documentable class member into normalized entities:
// properties (decorator and signal inputs/outputs included), accessor
// pairs and methods. Model signals expand into an input plus a `…Change`
// output here.

use crate::error::ExtractionError;
use crate::type_extraction::angular_utils::{
    detect_signal_shape, is_builtin_angular_method, is_required_signal_initializer, SignalShape,
};
use crate::type_extraction::ast_utils::{
    get_decorator_alias, get_js_doc_params, get_js_doc_return, get_js_docs_default_value,
    get_js_docs_description, get_signal_alias, is_excluded, is_type_required,
    literal_initializer_text, signal_initializer_default,
};
use crate::type_extraction::generics::try_to_replace_type_by_generic;
use crate::type_extraction::merge::insert_entity;
use crate::type_extraction::type_details::generate_type_details;
use crate::type_extraction::type_printing::{
    print_call_signatures, print_input_type, print_output_type, print_type,
};
use crate::type_extraction::ExtractorOptions;
use crate::types::{Entity, EntityKind, EntityModifier, GenericTypeMapping};
use indexmap::IndexMap;
use ts::{
    ClassId, Decorator, GetAccessorDeclaration, MethodDeclaration, Project, PropertyDeclaration,
    SetAccessorDeclaration,
};

/// Maps one class declaration's own members into a name-keyed entity map.
pub fn map_class_declaration_to_entities(
    project: &Project,
    class_id: ClassId,
    generic_map: &GenericTypeMapping,
    options: &ExtractorOptions,
) -> Result<IndexMap<String, Entity>, ExtractionError> {
    let class = project.class(class_id);
    let mut entities = IndexMap::new();

    for property in &class.properties {
        if property.is_private
            || property.is_protected
            || is_excluded(property.js_doc.as_ref())
            || options.is_property_excluded(&property.name)
        {
            continue;
        }
        for entity in map_property(project, property, generic_map) {
            insert_entity(&mut entities, entity);
        }
    }
    for getter in &class.getters {
        if getter.is_private
            || getter.is_protected
            || is_excluded(getter.js_doc.as_ref())
            || options.is_property_excluded(&getter.name)
        {
            continue;
        }
        insert_entity(&mut entities, map_getter(project, getter, generic_map));
    }
    for setter in &class.setters {
        if setter.is_private
            || setter.is_protected
            || is_excluded(setter.js_doc.as_ref())
            || options.is_property_excluded(&setter.name)
        {
            continue;
        }
        insert_entity(&mut entities, map_setter(project, setter, generic_map)?);
    }
    for method in &class.methods {
        if method.is_private
            || method.is_protected
            || is_excluded(method.js_doc.as_ref())
            || is_builtin_angular_method(class, &method.name)
            || options.is_property_excluded(&method.name)
        {
            continue;
        }
        insert_entity(&mut entities, map_method(project, method, generic_map));
    }

    Ok(entities)
}

fn map_property(
    project: &Project,
    property: &PropertyDeclaration,
    generic_map: &GenericTypeMapping,
) -> Vec<Entity> {
    let signal_shape = detect_signal_shape(project, property.ty);
    let kind = match signal_shape {
        Some(SignalShape::Input) => EntityKind::Input,
        Some(SignalShape::Output) => EntityKind::Output,
        Some(SignalShape::Model) => EntityKind::Input, // expanded below
        None => {
            if property.decorators.iter().any(|d| d.name == "Input") {
                EntityKind::Input
            } else if property.decorators.iter().any(|d| d.name == "Output") {
                EntityKind::Output
            } else {
                EntityKind::Property
            }
        }
    };

    // decorator alias wins over the signal initializer's alias option
    let alias = property
        .decorators
        .iter()
        .filter(|d| d.name == "Input" || d.name == "Output")
        .find_map(get_decorator_alias)
        .or_else(|| {
            signal_shape
                .and_then(|_| property.initializer.as_ref())
                .and_then(get_signal_alias)
        });

    let required = if property
        .initializer
        .as_ref()
        .is_some_and(is_required_signal_initializer)
    {
        true
    } else {
        !property.has_question_token
            && is_type_required(
                project,
                try_to_replace_type_by_generic(project, property.ty, generic_map),
            )
    };

    let default_value = get_js_docs_default_value(property.js_doc.as_ref())
        .or_else(|| literal_initializer_text(property.initializer.as_ref()))
        .or_else(|| {
            signal_shape
                .is_some()
                .then(|| signal_initializer_default(property.initializer.as_ref()))
                .flatten()
        });

    let printed = print_type(project, property.ty, false, 0, generic_map);
    let description = get_js_docs_description(property.js_doc.as_ref());
    let type_details = generate_type_details(project, property.ty, generic_map);

    let base = Entity {
        name: property.name.clone(),
        kind,
        alias,
        default_value,
        description,
        js_doc_params: Vec::new(),
        js_doc_return: None,
        ty: printed.clone(),
        type_details,
        required,
        modifier: None,
    };

    match (signal_shape, kind) {
        (Some(SignalShape::Model), _) => {
            let input = Entity {
                ty: print_input_type(&printed),
                ..base.clone()
            };
            // the output half keeps the alias as declared; only the member
            // name gains the Change suffix
            let output = Entity {
                name: format!("{}Change", base.name),
                kind: EntityKind::Output,
                default_value: None,
                ty: print_output_type(&printed),
                ..base
            };
            vec![input, output]
        }
        (_, EntityKind::Input) => vec![Entity {
            ty: print_input_type(&printed),
            ..base
        }],
        (_, EntityKind::Output) => vec![Entity {
            ty: print_output_type(&printed),
            ..base
        }],
        _ => vec![base],
    }
}

fn map_getter(
    project: &Project,
    getter: &GetAccessorDeclaration,
    generic_map: &GenericTypeMapping,
) -> Entity {
    let kind = accessor_kind(&getter.decorators);
    let alias = getter.decorators.iter().find_map(get_decorator_alias);
    Entity {
        name: getter.name.clone(),
        kind,
        alias,
        default_value: get_js_docs_default_value(getter.js_doc.as_ref()),
        description: get_js_docs_description(getter.js_doc.as_ref()),
        js_doc_params: Vec::new(),
        js_doc_return: None,
        ty: print_type(project, getter.ty, false, 0, generic_map),
        type_details: generate_type_details(project, getter.ty, generic_map),
        required: false,
        modifier: Some(EntityModifier::Getter),
    }
}

fn map_setter(
    project: &Project,
    setter: &SetAccessorDeclaration,
    generic_map: &GenericTypeMapping,
) -> Result<Entity, ExtractionError> {
    let [parameter] = setter.parameters.as_slice() else {
        return Err(ExtractionError::InvalidSetAccessor {
            name: setter.name.clone(),
        });
    };
    let kind = accessor_kind(&setter.decorators);
    let alias = setter.decorators.iter().find_map(get_decorator_alias);
    let resolved = try_to_replace_type_by_generic(project, parameter.ty, generic_map);
    Ok(Entity {
        name: setter.name.clone(),
        kind,
        alias,
        default_value: get_js_docs_default_value(setter.js_doc.as_ref()),
        description: get_js_docs_description(setter.js_doc.as_ref()),
        js_doc_params: Vec::new(),
        js_doc_return: None,
        ty: print_type(project, parameter.ty, false, 0, generic_map),
        type_details: generate_type_details(project, parameter.ty, generic_map),
        required: is_type_required(project, resolved),
        modifier: Some(EntityModifier::Setter),
    })
}

fn accessor_kind(decorators: &[Decorator]) -> EntityKind {
    if decorators.iter().any(|d| d.name == "Input") {
        EntityKind::Input
    } else if decorators.iter().any(|d| d.name == "Output") {
        EntityKind::Output
    } else {
        EntityKind::Property
    }
}

fn map_method(
    project: &Project,
    method: &MethodDeclaration,
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
