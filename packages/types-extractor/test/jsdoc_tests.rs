//! Documentation Tag Resolution Tests
//!
//! Description text, `@param`/`@return` records, default overrides and
//! grouping aliases.

use angular_types_extractor::type_extraction::ast_utils::{
    get_js_doc_params, get_js_doc_return, get_js_docs_default_value, get_js_docs_description,
    get_js_docs_group_aliases,
};
use ts::JsDoc;

#[test]
fn description_is_joined_into_one_line() {
    let docs = JsDoc::new("The visible label\n     of the widget.");
    assert_eq!(
        get_js_docs_description(Some(&docs)),
        "The visible label of the widget."
    );
    assert_eq!(get_js_docs_description(None), "");
}

#[test]
fn param_tags_split_into_name_and_description() {
    let docs = JsDoc::new("")
        .with_tag("param", "label the visible text")
        .with_tag("param", "count")
        .with_tag("return", "nothing");
    let params = get_js_doc_params(Some(&docs));
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name, "label");
    assert_eq!(params[0].description, "the visible text");
    assert_eq!(params[1].name, "count");
    assert_eq!(params[1].description, "");
}

#[test]
fn param_descriptions_end_at_the_comment_frame() {
    let docs = JsDoc::new("").with_tag("param", "label the visible text\n     * ");
    let params = get_js_doc_params(Some(&docs));
    assert_eq!(params[0].name, "label");
    assert_eq!(params[0].description, "the visible text");

    let return_docs = JsDoc::new("").with_tag("return", "the merged value\n     */");
    assert_eq!(
        get_js_doc_return(Some(&return_docs)).as_deref(),
        Some("the merged value")
    );
}

#[test]
fn return_tag_is_matched_exactly() {
    let with_return = JsDoc::new("").with_tag("return", "the merged value");
    let with_returns = JsDoc::new("").with_tag("returns", "the merged value");
    assert_eq!(
        get_js_doc_return(Some(&with_return)).as_deref(),
        Some("the merged value")
    );
    assert_eq!(get_js_doc_return(Some(&with_returns)), None);
}

#[test]
fn default_tag_overrides_are_read_verbatim() {
    let docs = JsDoc::new("").with_tag("default", "'auto'");
    assert_eq!(get_js_docs_default_value(Some(&docs)).as_deref(), Some("'auto'"));
    assert_eq!(get_js_docs_default_value(None), None);
}

#[test]
fn group_aliases_come_from_both_tag_spellings() {
    let docs = JsDoc::new("")
        .with_tag("include-docs", "Env, color-utils")
        .with_tag("group-docs", "Layout");
    assert_eq!(
        get_js_docs_group_aliases(Some(&docs)),
        vec!["Env", "colorutils", "Layout"]
    );
}
