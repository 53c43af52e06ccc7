// Interface Extraction
//
// Same pipeline as class extraction, over signature members and a
// multi-parent heritage graph. Interfaces additionally record the display
// aliases their inclusion tag declares.

use crate::type_extraction::ast_utils::{collect_base_interfaces, get_js_docs_group_aliases};
use crate::type_extraction::generics::build_interface_generic_map;
use crate::type_extraction::merge::merge_entities;
use crate::type_extraction::signature_mappers::map_interface_declaration_to_entities;
use crate::type_extraction::ExtractorOptions;
use crate::types::{EntitiesByCategory, InterfaceInformation};
use ts::{InterfaceId, Project};

pub fn generate_interface_information(
    project: &Project,
    interface_id: InterfaceId,
    module_path: &str,
    options: &ExtractorOptions,
) -> InterfaceInformation {
    let interface = project.interface(interface_id);
    let name = interface.name.clone();
    let mut aliases = vec![name.clone()];
    for alias in get_js_docs_group_aliases(interface.js_doc.as_ref()) {
        if !aliases.contains(&alias) {
            aliases.push(alias);
        }
    }

    let generic_map = build_interface_generic_map(project, interface_id);
    let mut entity_maps = vec![map_interface_declaration_to_entities(
        project,
        interface_id,
        &generic_map,
        options,
    )];
    for base in collect_base_interfaces(project, interface_id) {
        entity_maps.push(map_interface_declaration_to_entities(
            project,
            base,
            &generic_map,
            options,
        ));
    }

    let merged = merge_entities(entity_maps);
    InterfaceInformation {
        name,
        module_path: module_path.to_string(),
        aliases,
        entities_by_category: EntitiesByCategory::from_entities(merged.into_values()),
    }
}
