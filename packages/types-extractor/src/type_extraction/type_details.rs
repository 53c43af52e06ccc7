// Type-Detail Collection
//
// Walks a type's structure once per distinct named type and records a
// definition entry for every interface, alias, class and function type
// reachable from it. The collection doubles as the visited set, which is
// what guarantees termination on self-referential type graphs; the level
// cap bounds how deep nested generics are expanded.

use crate::type_extraction::generics::{add_generic_type_mappings, try_to_replace_type_by_generic};
use crate::type_extraction::type_printing::{
    print_call_signatures, print_members_block, print_members_inline, print_type,
    stringify_type_detail_collection,
};
use crate::types::{GenericTypeMapping, TypeDetail, TypeDetailCollection, TypeKind};
use ts::{Project, TypeFlags, TypeId, TypeShape};

/// Collects and stringifies every named type definition reachable from an
/// entity's type. Empty reachable set yields `None`.
pub fn generate_type_details(
    project: &Project,
    ty: TypeId,
    generic_map: &GenericTypeMapping,
) -> Option<String> {
    let collection =
        generate_type_detail_collection(project, ty, TypeDetailCollection::new(), 0, generic_map);
    stringify_type_detail_collection(&collection)
}

pub fn generate_type_detail_collection(
    project: &Project,
    ty: TypeId,
    mut collection: TypeDetailCollection,
    level: usize,
    generic_map: &GenericTypeMapping,
) -> TypeDetailCollection {
    let original = ty;
    let ty = try_to_replace_type_by_generic(project, ty, generic_map);
    if level > 1 {
        return collection;
    }
    let resolved = project.type_of(ty);
    let visit_key = resolved.symbol.or(resolved.alias_symbol);
    if visit_key.is_some_and(|key| collection.contains_key(&key)) {
        return collection;
    }

    // bind this reference's own generic arguments before descending
    let mut local_map = generic_map.clone();
    if let Some(alias) = resolved.alias_symbol {
        if let Some(declared) = project.symbol(alias).declared_type {
            let parameters = project.type_of(declared).alias_type_arguments.clone();
            add_generic_type_mappings(
                project,
                &mut local_map,
                &parameters,
                &resolved.alias_type_arguments,
            );
        }
        for argument in resolved.alias_type_arguments.clone() {
            collection =
                generate_type_detail_collection(project, argument, collection, level + 1, &local_map);
        }
    }
    if let Some(symbol) = resolved.symbol {
        if let Some(declared) = project.symbol(symbol).declared_type {
            let parameters = project.type_of(declared).type_arguments.clone();
            add_generic_type_mappings(
                project,
                &mut local_map,
                &parameters,
                &resolved.type_arguments,
            );
        }
        for argument in resolved.type_arguments.clone() {
            collection =
                generate_type_detail_collection(project, argument, collection, level + 1, &local_map);
        }
    }

    // library types are referenced by name only; the boundary is judged on
    // the declaration as written, before substitution, for both the type's
    // own symbol and its alias
    let written = project.type_of(original);
    if project.is_symbol_from_node_modules(written.symbol)
        || project.is_symbol_from_node_modules(written.alias_symbol)
    {
        return collection;
    }
    if project.is_array_type(ty) || project.is_readonly_array_type(ty) {
        return collection;
    }

    let resolved = project.type_of(ty);
    match &resolved.shape {
        TypeShape::Interface(shape) => {
            let kind = if resolved.flags.contains(TypeFlags::CLASS) {
                TypeKind::Class
            } else {
                TypeKind::Interface
            };
            if let Some(symbol) = resolved.symbol {
                let detail = TypeDetail {
                    kind,
                    type_name: project.symbol(symbol).name.clone(),
                    detail_string: print_members_block(project, shape, 0, &local_map),
                };
                collection.insert(symbol, detail);
            }
            let shape = shape.clone();
            for property in &shape.properties {
                collection = generate_type_detail_collection(
                    project,
                    property.ty,
                    collection,
                    level + 1,
                    &local_map,
                );
            }
            for index in [shape.string_index_type, shape.number_index_type].into_iter().flatten() {
                collection =
                    generate_type_detail_collection(project, index, collection, level + 1, &local_map);
            }
        }
        TypeShape::Object(shape) => {
            if let Some(alias) = resolved.alias_symbol {
                let detail = TypeDetail {
                    kind: TypeKind::Type,
                    type_name: project.symbol(alias).name.clone(),
                    detail_string: print_members_inline(project, shape, 0, &local_map),
                };
                collection.insert(alias, detail);
            }
            let shape = shape.clone();
            for property in &shape.properties {
                collection = generate_type_detail_collection(
                    project,
                    property.ty,
                    collection,
                    level + 1,
                    &local_map,
                );
            }
            for index in [shape.string_index_type, shape.number_index_type].into_iter().flatten() {
                collection =
                    generate_type_detail_collection(project, index, collection, level + 1, &local_map);
            }
        }
        TypeShape::Function(signatures) => {
            if let Some(alias) = resolved.alias_symbol {
                let detail = TypeDetail {
                    kind: TypeKind::Function,
                    type_name: project.symbol(alias).name.clone(),
                    detail_string: print_call_signatures(project, ty, &local_map),
                };
                collection.insert(alias, detail);
            }
            let signatures = signatures.clone();
            for signature in &signatures {
                collection = generate_type_detail_collection(
                    project,
                    signature.return_type,
                    collection,
                    level + 1,
                    &local_map,
                );
                for parameter in &signature.parameters {
                    collection = generate_type_detail_collection(
                        project,
                        parameter.ty,
                        collection,
                        level + 1,
                        &local_map,
                    );
                }
            }
        }
        TypeShape::Union(_) | TypeShape::Intersection(_) => {
            if let Some(alias) = resolved.alias_symbol {
                let detail = TypeDetail {
                    kind: TypeKind::Type,
                    type_name: project.symbol(alias).name.clone(),
                    detail_string: print_type(project, ty, true, 0, &local_map),
                };
                collection.insert(alias, detail);
            }
            let constituents = resolved.constituents().unwrap_or(&[]).to_vec();
            for part in constituents {
                collection =
                    generate_type_detail_collection(project, part, collection, level + 1, &local_map);
            }
        }
        _ => {}
    }
    collection
}
