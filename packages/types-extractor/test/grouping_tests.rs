//! Grouping and Pass Tests
//!
//! Standalone function/constant extraction, cross-file group aliases, and
//! the keyed payload table a pass produces.

use angular_types_extractor::{EntityKind, ExtractionPass, ExtractorOptions};
use ts::{
    CallSignature, FunctionDeclaration, Initializer, JsDoc, Project, VariableDeclaration,
    VariableStatement,
};

fn grouped(description: &str, aliases: &str) -> JsDoc {
    JsDoc::new(description).with_tag("include-docs", aliases)
}

fn constant_statement(project: &mut Project, name: &str, group: &str, value: &str) -> VariableStatement {
    let string = project.string_type();
    VariableStatement::new(
        VariableDeclaration::new(name, string).with_initializer(Initializer::literal(value)),
    )
    .exported()
    .with_js_doc(grouped("", group))
}

#[test]
fn group_aliases_union_exports_across_files() {
    let mut project = Project::new();
    let first = constant_statement(&mut project, "API_URL", "Env", "\"https://api\"");
    let second = constant_statement(&mut project, "API_KEY", "Env", "\"secret\"");
    project.add_variable_statement("url.ts", first);
    project.add_variable_statement("key.ts", second);

    let mut pass = ExtractionPass::new(ExtractorOptions::default());
    pass.run_file(&project, "url.ts").unwrap();
    pass.run_file(&project, "key.ts").unwrap();

    let groups = pass.grouped_exports();
    let env = groups.iter().find(|group| group.name == "Env").unwrap();
    let names: Vec<&str> = env
        .constants
        .iter()
        .map(|constant| constant.name.as_str())
        .collect();
    assert_eq!(names, vec!["API_URL", "API_KEY"]);

    // each export also appears under its own name
    assert!(groups.iter().any(|group| group.name == "API_URL"));
    assert!(groups.iter().any(|group| group.name == "API_KEY"));
}

#[test]
fn unexported_or_untagged_constants_are_skipped() {
    let mut project = Project::new();
    let string = project.string_type();
    let unexported = VariableStatement::new(VariableDeclaration::new("internal", string))
        .with_js_doc(grouped("", "Env"));
    let untagged =
        VariableStatement::new(VariableDeclaration::new("plain", string)).exported();
    project.add_variable_statement("skip.ts", unexported);
    project.add_variable_statement("skip.ts", untagged);

    let mut pass = ExtractionPass::new(ExtractorOptions::default());
    pass.run_file(&project, "skip.ts").unwrap();
    assert!(pass.grouped_exports().is_empty());
}

#[test]
fn constants_carry_literal_defaults_and_types() {
    let mut project = Project::new();
    let statement = constant_statement(&mut project, "RETRIES", "Env", "3");
    project.add_variable_statement("env.ts", statement);

    let mut pass = ExtractionPass::new(ExtractorOptions::default());
    pass.run_file(&project, "env.ts").unwrap();

    let groups = pass.grouped_exports();
    let entry = groups.iter().find(|group| group.name == "RETRIES").unwrap();
    let entity = &entry.constants[0].entity;
    assert_eq!(entity.kind, EntityKind::Constant);
    assert_eq!(entity.ty, "string");
    assert_eq!(entity.default_value.as_deref(), Some("3"));
}

#[test]
fn functions_extract_signatures_and_groups() {
    let mut project = Project::new();
    let string = project.string_type();
    let boolean = project.boolean_type();
    let function_type = project.function_type(vec![CallSignature {
        parameters: vec![ts::ParameterInfo {
            name: "value".to_string(),
            ty: string,
        }],
        return_type: boolean,
    }]);
    project.add_function(
        "validators.ts",
        FunctionDeclaration::new("isHex", function_type).with_js_doc(
            grouped("Checks hex strings.", "Validators")
                .with_tag("param", "value the candidate")
                .with_tag("return", "whether value is hexadecimal"),
        ),
    );

    let mut pass = ExtractionPass::new(ExtractorOptions::default());
    pass.run_file(&project, "validators.ts").unwrap();

    let groups = pass.grouped_exports();
    let validators = groups.iter().find(|group| group.name == "Validators").unwrap();
    let entity = &validators.functions[0].entity;
    assert_eq!(entity.kind, EntityKind::Function);
    assert_eq!(entity.ty, "isHex(value: string): boolean;");
    assert_eq!(entity.js_doc_params[0].name, "value");
    assert_eq!(
        entity.js_doc_return.as_deref(),
        Some("whether value is hexadecimal")
    );
}

#[test]
fn keyed_table_covers_groups_and_self_entries() {
    let mut project = Project::new();
    let statement = constant_statement(&mut project, "API_URL", "Env", "\"https://api\"");
    project.add_variable_statement("env.ts", statement);

    let mut pass = ExtractionPass::new(ExtractorOptions::default());
    pass.run_file(&project, "env.ts").unwrap();

    let table = pass.keyed_table().unwrap();
    assert!(table.contains_key("Env"));
    assert!(table.contains_key("API_URL"));
    let payload = &table["Env"];
    assert_eq!(payload["constants"][0]["name"], "API_URL");
    assert_eq!(payload["constants"][0]["type"], "string");
}
