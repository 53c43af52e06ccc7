// Class Extraction
//
// Drives one class declaration through member mapping, walks its base
// chain, and merges the per-declaration entity maps into the final
// category table.

use crate::error::ExtractionError;
use crate::type_extraction::ast_utils::collect_base_classes;
use crate::type_extraction::declaration_mappers::map_class_declaration_to_entities;
use crate::type_extraction::generics::build_class_generic_map;
use crate::type_extraction::merge::merge_entities;
use crate::type_extraction::ExtractorOptions;
use crate::types::{ClassInformation, EntitiesByCategory};
use ts::{ClassId, Project};

/// Extracts one class. Anonymous class expressions are skipped silently.
pub fn generate_class_information(
    project: &Project,
    class_id: ClassId,
    module_path: &str,
    options: &ExtractorOptions,
) -> Result<Option<ClassInformation>, ExtractionError> {
    let Some(name) = project.class(class_id).name.clone() else {
        return Ok(None);
    };
    let generic_map = build_class_generic_map(project, class_id);

    let mut entity_maps = vec![map_class_declaration_to_entities(
        project,
        class_id,
        &generic_map,
        options,
    )?];
    for base in collect_base_classes(project, class_id) {
        entity_maps.push(map_class_declaration_to_entities(
            project,
            base,
            &generic_map,
            options,
        )?);
    }

    let merged = merge_entities(entity_maps);
    Ok(Some(ClassInformation {
        name,
        module_path: module_path.to_string(),
        entities_by_category: EntitiesByCategory::from_entities(merged.into_values()),
    }))
}
