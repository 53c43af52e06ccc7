// Declaration Queries
//
// Eligibility predicates, documentation-tag resolution, alias lookup,
// default-value resolution and inheritance-chain walking. Everything here
// is a pure read over the project model.

use crate::type_extraction::angular_utils::has_component_decorator;
use crate::types::JsDocParam;
use crate::utils::{
    remove_line_break_artifacts, split_group_aliases, strip_quotes, truncate_line_break_artifact,
};
use smallvec::SmallVec;
use ts::{
    ClassDeclaration, ClassId, Decorator, Expression, Initializer, InterfaceId, JsDoc, Project,
    TypeId,
};

pub const INCLUDE_DOCS_TAG: &str = "include-docs";
pub const EXCLUDE_DOCS_TAG: &str = "exclude-docs";
pub const GROUP_DOCS_TAG: &str = "group-docs";

pub fn is_included(js_doc: Option<&JsDoc>) -> bool {
    js_doc.is_some_and(|docs| docs.has_tag(INCLUDE_DOCS_TAG))
}

pub fn is_excluded(js_doc: Option<&JsDoc>) -> bool {
    js_doc.is_some_and(|docs| docs.has_tag(EXCLUDE_DOCS_TAG))
}

/// A class is documentable when it is concrete, carries a component-role
/// decorator or the inclusion tag, and is not explicitly excluded.
/// Exclusion wins over inclusion.
pub fn is_class_eligible(class: &ClassDeclaration) -> bool {
    !class.is_abstract
        && (has_component_decorator(class) || is_included(class.js_doc.as_ref()))
        && !is_excluded(class.js_doc.as_ref())
}

// --- Documentation tags ---

pub fn get_js_docs_description(js_doc: Option<&JsDoc>) -> String {
    js_doc
        .map(|docs| remove_line_break_artifacts(&docs.description))
        .unwrap_or_default()
}

/// `@param` records: the first whitespace-separated token is the parameter
/// name, the remainder its description. Tag text ends at the first line
/// break; what follows belongs to the comment frame.
pub fn get_js_doc_params(js_doc: Option<&JsDoc>) -> Vec<JsDocParam> {
    let Some(docs) = js_doc else {
        return Vec::new();
    };
    docs.tags
        .iter()
        .filter(|tag| tag.tag_name == "param")
        .map(|tag| {
            let text = truncate_line_break_artifact(&tag.text);
            match text.split_once(char::is_whitespace) {
                Some((name, description)) => JsDocParam {
                    name: name.to_string(),
                    description: description.trim().to_string(),
                },
                None => JsDocParam {
                    name: text,
                    description: String::new(),
                },
            }
        })
        .collect()
}

pub fn get_js_doc_return(js_doc: Option<&JsDoc>) -> Option<String> {
    js_doc?
        .tag("return")
        .map(|tag| truncate_line_break_artifact(&tag.text))
}

/// Explicit `@default` override for the rendered default value.
pub fn get_js_docs_default_value(js_doc: Option<&JsDoc>) -> Option<String> {
    js_doc?.tag("default").map(|tag| tag.text.trim().to_string())
}

/// Group aliases declared on the inclusion or grouping tag.
pub fn get_js_docs_group_aliases(js_doc: Option<&JsDoc>) -> Vec<String> {
    let Some(docs) = js_doc else {
        return Vec::new();
    };
    docs.tags
        .iter()
        .filter(|tag| tag.tag_name == INCLUDE_DOCS_TAG || tag.tag_name == GROUP_DOCS_TAG)
        .flat_map(|tag| split_group_aliases(&tag.text))
        .collect()
}

// --- Alias resolution ---

/// Alias from a decorator argument: either a bare string literal or the
/// `alias` field of an options object.
pub fn get_decorator_alias(decorator: &Decorator) -> Option<String> {
    match decorator.arguments.first()? {
        Expression::StringLiteral(value) => Some(value.clone()),
        argument @ Expression::ObjectLiteral(_) => argument
            .object_entry("alias")
            .map(|value| strip_quotes(value).to_string()),
        _ => None,
    }
}

/// Alias from a signal initializer: the `alias` field of the call's final
/// options argument.
pub fn get_signal_alias(initializer: &Initializer) -> Option<String> {
    initializer
        .as_call()?
        .arguments
        .last()?
        .object_entry("alias")
        .map(|value| strip_quotes(value).to_string())
}

// --- Required and default values ---

/// A type is required unless it is `undefined` itself or carries an
/// `undefined` constituent at the top level of a union.
pub fn is_type_required(project: &Project, ty: TypeId) -> bool {
    let resolved = project.type_of(ty);
    if resolved.is_undefined() {
        return false;
    }
    match resolved.constituents() {
        Some(parts) => !parts.iter().any(|part| project.type_of(*part).is_undefined()),
        None => true,
    }
}

/// Source text of a literal initializer, quotes included.
pub fn literal_initializer_text(initializer: Option<&Initializer>) -> Option<String> {
    let initializer = initializer?;
    match initializer.kind {
        ts::InitializerKind::Literal => Some(initializer.text.clone()),
        _ => None,
    }
}

/// Default carried by a signal initializer call: the first call argument,
/// when it is itself a literal.
pub fn signal_initializer_default(initializer: Option<&Initializer>) -> Option<String> {
    initializer?
        .as_call()?
        .arguments
        .first()
        .filter(|argument| argument.is_literal())
        .map(|argument| argument.text())
}

// --- Inheritance chains ---

/// Ancestor classes, closest first.
pub fn collect_base_classes(project: &Project, class: ClassId) -> SmallVec<[ClassId; 4]> {
    let mut chain = SmallVec::new();
    let mut current = project.class(class).extends.as_ref().map(|clause| clause.base);
    while let Some(base) = current {
        chain.push(base);
        current = project.class(base).extends.as_ref().map(|clause| clause.base);
    }
    chain
}

/// Ancestor interfaces, closest first, breadth-first across multiple
/// heritage clauses. Deduplicated so diamond inheritance visits each base
/// once.
pub fn collect_base_interfaces(project: &Project, interface: InterfaceId) -> SmallVec<[InterfaceId; 4]> {
    let mut chain: SmallVec<[InterfaceId; 4]> = SmallVec::new();
    let mut queue: SmallVec<[InterfaceId; 4]> = project
        .interface(interface)
        .extends
        .iter()
        .map(|clause| clause.base)
        .collect();
    while !queue.is_empty() {
        let base = queue.remove(0);
        if chain.contains(&base) {
            continue;
        }
        chain.push(base);
        queue.extend(
            project
                .interface(base)
                .extends
                .iter()
                .map(|clause| clause.base),
        );
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts::JsDoc;

    #[test]
    fn exclusion_wins_over_inclusion() {
        let class = ClassDeclaration::new("Widget").with_js_doc(
            JsDoc::new("")
                .with_tag(INCLUDE_DOCS_TAG, "")
                .with_tag(EXCLUDE_DOCS_TAG, ""),
        );
        assert!(!is_class_eligible(&class));
    }

    #[test]
    fn splits_param_tags_into_name_and_description() {
        let docs = JsDoc::new("").with_tag("param", "label the visible text\n     * ");
        let params = get_js_doc_params(Some(&docs));
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "label");
        assert_eq!(params[0].description, "the visible text");
    }

    #[test]
    fn required_considers_top_level_undefined_only() {
        let mut project = Project::new();
        let plain = project.string_type();
        let optional = project.union_of(vec![project.string_type(), project.undefined_type()]);
        assert!(is_type_required(&project, plain));
        assert!(!is_type_required(&project, optional));
    }
}
