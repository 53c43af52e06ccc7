// Type Printing
//
// Serializes a resolved type into its display string. `expand` selects the
// structural rendering at the root; recursion into members always prints
// references. Every recursive call resolves generic substitution first, so
// type parameters print as their bound concrete types.

use crate::type_extraction::generics::try_to_replace_type_by_generic;
use crate::types::{GenericTypeMapping, TypeDetailCollection, TypeKind};
use ts::{ObjectShape, Project, TypeFlags, TypeId, TypeShape};

const BLOCK_INDENT: &str = "   ";

pub fn print_type(
    project: &Project,
    ty: TypeId,
    expand: bool,
    level: usize,
    generic_map: &GenericTypeMapping,
) -> String {
    let ty = try_to_replace_type_by_generic(project, ty, generic_map);
    let resolved = project.type_of(ty);

    if resolved.is_union_or_intersection() {
        if !expand && resolved.alias_symbol.is_some() {
            return print_reference(project, ty, generic_map);
        }
        return print_union_or_intersection(project, ty, level, generic_map);
    }

    if resolved.is_tuple() {
        if !expand && resolved.alias_symbol.is_some() {
            return print_reference(project, ty, generic_map);
        }
        let TypeShape::Tuple(elements) = &resolved.shape else {
            unreachable!()
        };
        let printed = elements
            .iter()
            .map(|element| print_type(project, *element, false, level + 1, generic_map))
            .collect::<Vec<_>>()
            .join(", ");
        return format!("[{}]", printed);
    }

    if is_interface_type(project, ty) {
        if !expand {
            return print_reference(project, ty, generic_map);
        }
        let shape = resolved.object_shape().cloned().unwrap_or_default();
        return print_members_block(project, &shape, level, generic_map);
    }

    if matches!(resolved.shape, TypeShape::Object(_)) {
        if !expand && resolved.alias_symbol.is_some() {
            return print_reference(project, ty, generic_map);
        }
        let shape = resolved.object_shape().cloned().unwrap_or_default();
        // nested occurrences always print inline
        if !expand || level > 0 {
            return print_members_inline(project, &shape, level, generic_map);
        }
        return print_members_block(project, &shape, level, generic_map);
    }

    if matches!(resolved.shape, TypeShape::Function(_)) {
        if !expand && resolved.alias_symbol.is_some() {
            return print_reference(project, ty, generic_map);
        }
        return print_call_signatures(project, ty, generic_map);
    }

    print_fallback(project, ty, generic_map)
}

fn print_union_or_intersection(
    project: &Project,
    ty: TypeId,
    level: usize,
    generic_map: &GenericTypeMapping,
) -> String {
    let resolved = project.type_of(ty);
    let separator = if resolved.is_intersection() { " & " } else { " | " };
    let constituents = resolved.constituents().unwrap_or(&[]);
    let mut printed: Vec<String> = constituents
        .iter()
        .map(|part| print_type(project, *part, false, level + 1, generic_map))
        .collect();

    // the checker splits boolean into its literal pair
    if printed.iter().any(|part| part == "true") && printed.iter().any(|part| part == "false") {
        printed.retain(|part| part != "true" && part != "false");
        printed.push("boolean".to_string());
    }
    for nullish in ["null", "undefined"] {
        if let Some(position) = printed.iter().position(|part| part == nullish) {
            let part = printed.remove(position);
            printed.push(part);
        }
    }

    let joined = printed.join(separator);
    if level > 0 {
        format!("({})", joined)
    } else {
        joined
    }
}

/// Whether a type is a declared interface (object-like with a defining
/// symbol, not a class).
pub fn is_interface_type(project: &Project, ty: TypeId) -> bool {
    let resolved = project.type_of(ty);
    matches!(resolved.shape, TypeShape::Interface(_)) && !resolved.flags.contains(TypeFlags::CLASS)
}

pub(crate) fn print_members_block(
    project: &Project,
    shape: &ObjectShape,
    level: usize,
    generic_map: &GenericTypeMapping,
) -> String {
    let members = collect_members(project, shape, level, generic_map);
    let body = members
        .iter()
        .map(|member| format!("{}{};", BLOCK_INDENT, member))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{{\n{}\n}}", body)
}

pub(crate) fn print_members_inline(
    project: &Project,
    shape: &ObjectShape,
    level: usize,
    generic_map: &GenericTypeMapping,
) -> String {
    let members = collect_members(project, shape, level, generic_map);
    format!("{{ {} }}", members.join(", "))
}

fn collect_members(
    project: &Project,
    shape: &ObjectShape,
    level: usize,
    generic_map: &GenericTypeMapping,
) -> Vec<String> {
    let mut members: Vec<String> = shape
        .properties
        .iter()
        .map(|property| {
            format!(
                "{}: {}",
                property.name,
                print_type(project, property.ty, false, level + 1, generic_map)
            )
        })
        .collect();
    if let Some(index) = shape.string_index_type {
        members.push(format!(
            "[key: string]: {}",
            print_type(project, index, false, level + 1, generic_map)
        ));
    }
    if let Some(index) = shape.number_index_type {
        members.push(format!(
            "[index: number]: {}",
            print_type(project, index, false, level + 1, generic_map)
        ));
    }
    members
}

/// Call signatures in member style: `(param: type, ...): returnType;`.
pub fn print_call_signatures(project: &Project, ty: TypeId, generic_map: &GenericTypeMapping) -> String {
    project
        .type_of(ty)
        .call_signatures()
        .iter()
        .map(|signature| {
            let parameters = signature
                .parameters
                .iter()
                .map(|parameter| {
                    format!(
                        "{}: {}",
                        parameter.name,
                        print_type(project, parameter.ty, false, 0, generic_map)
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "({}): {};",
                parameters,
                print_type(project, signature.return_type, false, 0, generic_map)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reference rendering: the alias or defining symbol's name with its
/// resolved type arguments.
fn print_reference(project: &Project, ty: TypeId, generic_map: &GenericTypeMapping) -> String {
    let resolved = project.type_of(ty);
    let (name, type_arguments) = if let Some(alias) = resolved.alias_symbol {
        (project.symbol(alias).name.clone(), &resolved.alias_type_arguments)
    } else if let Some(symbol) = resolved.symbol {
        (project.symbol(symbol).name.clone(), &resolved.type_arguments)
    } else {
        return resolved.text.clone();
    };
    format_named_reference(project, &name, type_arguments, generic_map)
}

fn print_fallback(project: &Project, ty: TypeId, generic_map: &GenericTypeMapping) -> String {
    let resolved = project.type_of(ty);
    if resolved.type_arguments.is_empty() {
        return resolved.text.clone();
    }
    // arrays always render in generic form, whatever the source wrote
    let name = if project.is_readonly_array_type(ty) {
        "ReadonlyArray".to_string()
    } else if project.is_array_type(ty) {
        "Array".to_string()
    } else if let Some(symbol) = resolved.symbol {
        project.symbol(symbol).name.clone()
    } else {
        return resolved.text.clone();
    };
    format_named_reference(project, &name, &resolved.type_arguments, generic_map)
}

fn format_named_reference(
    project: &Project,
    name: &str,
    type_arguments: &[TypeId],
    generic_map: &GenericTypeMapping,
) -> String {
    if type_arguments.is_empty() {
        return name.to_string();
    }
    let printed = type_arguments
        .iter()
        .map(|argument| print_type(project, *argument, false, 0, generic_map))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}<{}>", name, printed)
}

/// Input members print the payload of their reactive wrapper; decorator
/// inputs pass through unchanged.
pub fn print_input_type(type_text: &str) -> String {
    strip_wrapper(type_text, &["InputSignal<", "ModelSignal<"])
}

/// Output members drop the emitter-reference wrapper. `EventEmitter` is the
/// declared type of decorator outputs and stays as written.
pub fn print_output_type(type_text: &str) -> String {
    strip_wrapper(type_text, &["OutputEmitterRef<", "OutputRef<", "ModelSignal<"])
}

fn strip_wrapper(type_text: &str, wrappers: &[&str]) -> String {
    for wrapper in wrappers {
        if let Some(inner) = type_text
            .strip_prefix(wrapper)
            .and_then(|rest| rest.strip_suffix('>'))
        {
            return inner.to_string();
        }
    }
    type_text.to_string()
}

/// Renders a collected detail table: one definition per entry, blank-line
/// separated. An empty collection yields no string at all.
pub fn stringify_type_detail_collection(collection: &TypeDetailCollection) -> Option<String> {
    if collection.is_empty() {
        return None;
    }
    let rendered = collection
        .values()
        .map(|detail| match detail.kind {
            TypeKind::Type => format!("type {} = {};", detail.type_name, detail.detail_string),
            kind => format!("{} {} {}", kind.keyword(), detail.type_name, detail.detail_string),
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    Some(rendered)
}
