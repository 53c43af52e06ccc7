// Export Grouping
//
// Combines standalone function and constant exports into tables: every
// export appears under its own name, and additionally under each group
// alias its documentation declares. Aliased tables hold the union of all
// matching exports across the pass, not just one module's.

use crate::types::{ConstantInformation, FunctionInformation, GroupedExportInformation};
use indexmap::IndexMap;

pub fn group_export_information(
    functions: &[FunctionInformation],
    constants: &[ConstantInformation],
) -> Vec<GroupedExportInformation> {
    let mut groups: IndexMap<String, GroupedExportInformation> = IndexMap::new();

    for function in functions {
        for key in keys_for(&function.name, &function.group_by) {
            group_entry(&mut groups, key).functions.push(function.clone());
        }
    }
    for constant in constants {
        for key in keys_for(&constant.name, &constant.group_by) {
            group_entry(&mut groups, key).constants.push(constant.clone());
        }
    }

    groups.into_values().collect()
}

fn keys_for(name: &str, group_by: &[String]) -> Vec<String> {
    let mut keys = vec![name.to_string()];
    for alias in group_by {
        if !keys.contains(alias) {
            keys.push(alias.clone());
        }
    }
    keys
}

fn group_entry(
    groups: &mut IndexMap<String, GroupedExportInformation>,
    key: String,
) -> &mut GroupedExportInformation {
    groups.entry(key.clone()).or_insert_with(|| GroupedExportInformation {
        name: key,
        functions: Vec::new(),
        constants: Vec::new(),
    })
}
