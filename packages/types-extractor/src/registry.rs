// Class Id Registry
//
// Per-build-pass assignment of numeric ids to documented declarations.
// An id is stable for a given module + name pair within one pass; a new
// pass starts from a fresh registry, so nothing leaks across builds.

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct ClassIdRegistry {
    ids: IndexMap<(String, String), u32>,
}

impl ClassIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id assigned to this module + name pair, minting the next free id
    /// on first sight.
    pub fn global_unique_id(&mut self, module_id: &str, name: &str) -> u32 {
        let next = self.ids.len() as u32;
        *self
            .ids
            .entry((module_id.to_string(), name.to_string()))
            .or_insert(next)
    }

    /// The lookup key the generated artifact attaches at runtime.
    pub fn class_with_id_string(name: &str, id: u32) -> String {
        format!("{}-{}", name, id)
    }
}
