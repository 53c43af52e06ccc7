// Extraction Pass
//
// Drives a set of files through the engine within one build pass: assigns
// registry keys, aggregates standalone exports across files, and renders
// the keyed table the generated artifacts write into the process-global
// documentation registry.

use crate::error::ExtractionError;
use crate::grouping::group_export_information;
use crate::registry::ClassIdRegistry;
use crate::type_extraction::{generate_type_information, ExtractorOptions};
use crate::types::{
    ClassInformation, ConstantInformation, EntitiesByCategory, FunctionInformation,
    GroupedExportInformation, InterfaceInformation,
};
use indexmap::IndexMap;
use ts::Project;

#[derive(Debug, Default)]
pub struct ExtractionPass {
    options: ExtractorOptions,
    registry: ClassIdRegistry,
    classes: Vec<ClassInformation>,
    interfaces: Vec<InterfaceInformation>,
    functions: Vec<FunctionInformation>,
    constants: Vec<ConstantInformation>,
}

impl ExtractionPass {
    pub fn new(options: ExtractorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Extracts one file into the pass. Files outside the project view
    /// contribute nothing.
    pub fn run_file(&mut self, project: &Project, path: &str) -> Result<(), ExtractionError> {
        let information = generate_type_information(project, path, &self.options)?;
        self.classes.extend(information.classes);
        self.interfaces.extend(information.interfaces);
        self.functions.extend(information.functions);
        self.constants.extend(information.constants);
        Ok(())
    }

    pub fn classes(&self) -> &[ClassInformation] {
        &self.classes
    }

    pub fn interfaces(&self) -> &[InterfaceInformation] {
        &self.interfaces
    }

    /// Standalone exports combined across every file seen so far.
    pub fn grouped_exports(&self) -> Vec<GroupedExportInformation> {
        group_export_information(&self.functions, &self.constants)
    }

    /// The lookup-key to payload table. Class and interface payloads are
    /// their category tables (interfaces once per display alias); grouped
    /// exports merge the group's function and constant entities.
    pub fn keyed_table(&mut self) -> serde_json::Result<IndexMap<String, serde_json::Value>> {
        let mut table = IndexMap::new();

        for class in &self.classes {
            let id = self.registry.global_unique_id(&class.module_path, &class.name);
            let key = ClassIdRegistry::class_with_id_string(&class.name, id);
            table.insert(key, serde_json::to_value(&class.entities_by_category)?);
        }
        for interface in &self.interfaces {
            let id = self
                .registry
                .global_unique_id(&interface.module_path, &interface.name);
            for alias in &interface.aliases {
                let key = ClassIdRegistry::class_with_id_string(alias, id);
                table.insert(key, serde_json::to_value(&interface.entities_by_category)?);
            }
        }
        for group in self.grouped_exports() {
            let entities = group
                .functions
                .iter()
                .map(|function| function.entity.clone())
                .chain(group.constants.iter().map(|constant| constant.entity.clone()));
            let payload = EntitiesByCategory::from_entities(entities);
            table.insert(group.name.clone(), serde_json::to_value(payload)?);
        }
        Ok(table)
    }
}
