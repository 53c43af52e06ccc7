// Entity Merging
//
// Combines entity maps across an inheritance chain. Maps arrive nearest
// declaration first and are folded in reverse, so nearer declarations
// override farther ones. Overriding is field-by-field: the overriding
// entity wins wherever it has a value, the base fills the gaps. An entry
// already classified as input is sticky and only another input may merge
// over it.

use crate::types::{Entity, EntityKind};
use indexmap::IndexMap;

pub fn merge_entity_fields(overriding: Entity, base: &Entity) -> Entity {
    Entity {
        name: overriding.name,
        kind: overriding.kind,
        alias: overriding.alias.or_else(|| base.alias.clone()),
        default_value: overriding.default_value.or_else(|| base.default_value.clone()),
        description: if overriding.description.is_empty() {
            base.description.clone()
        } else {
            overriding.description
        },
        js_doc_params: if overriding.js_doc_params.is_empty() {
            base.js_doc_params.clone()
        } else {
            overriding.js_doc_params
        },
        js_doc_return: overriding.js_doc_return.or_else(|| base.js_doc_return.clone()),
        ty: if overriding.ty.is_empty() {
            base.ty.clone()
        } else {
            overriding.ty
        },
        type_details: overriding.type_details.or_else(|| base.type_details.clone()),
        required: overriding.required,
        modifier: overriding.modifier.or(base.modifier),
    }
}

/// Inserts an entity into a name-keyed map under the override rules.
pub fn insert_entity(map: &mut IndexMap<String, Entity>, entity: Entity) {
    match map.get(&entity.name) {
        Some(existing)
            if existing.kind == EntityKind::Input && entity.kind != EntityKind::Input =>
        {
            // input classification is sticky
        }
        Some(existing) => {
            let merged = merge_entity_fields(entity, existing);
            map.insert(merged.name.clone(), merged);
        }
        None => {
            map.insert(entity.name.clone(), entity);
        }
    }
}

/// Folds per-declaration entity maps, nearest first, into one map.
pub fn merge_entities(maps: Vec<IndexMap<String, Entity>>) -> IndexMap<String, Entity> {
    let mut result = IndexMap::new();
    for map in maps.into_iter().rev() {
        for (_, entity) in map {
            insert_entity(&mut result, entity);
        }
    }
    result
}
