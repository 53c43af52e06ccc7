//! Class Extraction Tests
//!
//! End-to-end extraction of documented classes: decorator and signal
//! members, inheritance merging, generic chains, lifecycle suppression,
//! exclusion filters, accessor pairs and idempotence.

use angular_types_extractor::{
    generate_type_information, EntityKind, EntityModifier, ExtractionError, ExtractorOptions,
};
use regex::Regex;
use ts::{
    CallSignature, ClassDeclaration, Decorator, Expression, GetAccessorDeclaration,
    HeritageClause, Initializer, JsDoc, MethodDeclaration, Parameter, Project,
    PropertyDeclaration, SetAccessorDeclaration,
};

fn component() -> Decorator {
    Decorator::new("Component")
}

fn input() -> Decorator {
    Decorator::new("Input")
}

#[test]
fn extracts_inputs_across_an_inheritance_chain() {
    let mut project = Project::new();
    let string = project.string_type();
    let number = project.number_type();

    let base = project.add_class(
        "widget.ts",
        ClassDeclaration::new("Base")
            .with_property(PropertyDeclaration::new("id", number).with_decorator(input())),
    );
    project.add_class(
        "widget.ts",
        ClassDeclaration::new("Widget")
            .with_decorator(component())
            .with_extends(HeritageClause::new(base))
            .with_property(
                PropertyDeclaration::new("label", string)
                    .with_decorator(input())
                    .with_initializer(Initializer::literal("\"hi\"")),
            ),
    );

    let result = generate_type_information(&project, "widget.ts", &ExtractorOptions::default()).unwrap();
    assert_eq!(result.classes.len(), 1);
    let widget = &result.classes[0];
    assert_eq!(widget.name, "Widget");
    assert_eq!(widget.module_path, "widget.ts");

    let inputs = &widget.entities_by_category.inputs;
    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0].name, "id");
    assert_eq!(inputs[0].ty, "number");
    assert!(inputs[0].required);
    assert_eq!(inputs[1].name, "label");
    assert_eq!(inputs[1].ty, "string");
    assert_eq!(inputs[1].default_value.as_deref(), Some("\"hi\""));
    assert!(inputs[1].required);
}

#[test]
fn derived_members_override_field_by_field() {
    let mut project = Project::new();
    let string = project.string_type();

    let base = project.add_class(
        "override.ts",
        ClassDeclaration::new("Base").with_property(
            PropertyDeclaration::new("x", string)
                .with_decorator(input())
                .with_js_doc(JsDoc::new("base docs"))
                .with_initializer(Initializer::literal("\"b\"")),
        ),
    );
    project.add_class(
        "override.ts",
        ClassDeclaration::new("Derived")
            .with_decorator(component())
            .with_extends(HeritageClause::new(base))
            .with_property(PropertyDeclaration::new("x", string).with_decorator(input())),
    );

    let result =
        generate_type_information(&project, "override.ts", &ExtractorOptions::default()).unwrap();
    let inputs = &result.classes[0].entities_by_category.inputs;
    assert_eq!(inputs.len(), 1);
    assert_eq!(inputs[0].kind, EntityKind::Input);
    assert_eq!(inputs[0].description, "base docs");
    assert_eq!(inputs[0].default_value.as_deref(), Some("\"b\""));
}

#[test]
fn inherited_inputs_are_not_demoted_by_plain_redeclarations() {
    let mut project = Project::new();
    let string = project.string_type();

    let base = project.add_class(
        "sticky.ts",
        ClassDeclaration::new("Base").with_property(
            PropertyDeclaration::new("x", string)
                .with_decorator(input())
                .with_js_doc(JsDoc::new("input docs")),
        ),
    );
    project.add_class(
        "sticky.ts",
        ClassDeclaration::new("Derived")
            .with_decorator(component())
            .with_extends(HeritageClause::new(base))
            .with_property(PropertyDeclaration::new("x", string)),
    );

    let result =
        generate_type_information(&project, "sticky.ts", &ExtractorOptions::default()).unwrap();
    let categories = &result.classes[0].entities_by_category;
    assert_eq!(categories.inputs.len(), 1);
    assert!(categories.properties.is_empty());
    assert_eq!(categories.inputs[0].description, "input docs");
}

#[test]
fn model_signals_expand_into_input_and_change_output() {
    let mut project = Project::new();
    let string = project.string_type();
    let model = project.reference("ModelSignal", vec![string], true);

    project.add_class(
        "model.ts",
        ClassDeclaration::new("Field")
            .with_decorator(component())
            .with_property(
                PropertyDeclaration::new("value", model).with_initializer(Initializer::call(
                    "model",
                    vec![Expression::StringLiteral("init".to_string())],
                )),
            ),
    );

    let result =
        generate_type_information(&project, "model.ts", &ExtractorOptions::default()).unwrap();
    let categories = &result.classes[0].entities_by_category;

    assert_eq!(categories.inputs.len(), 1);
    assert_eq!(categories.inputs[0].name, "value");
    assert_eq!(categories.inputs[0].kind, EntityKind::Input);
    assert_eq!(categories.inputs[0].ty, "string");
    assert_eq!(categories.inputs[0].default_value.as_deref(), Some("\"init\""));

    assert_eq!(categories.outputs.len(), 1);
    assert_eq!(categories.outputs[0].name, "valueChange");
    assert_eq!(categories.outputs[0].kind, EntityKind::Output);
    assert_eq!(categories.outputs[0].ty, "string");
    assert_eq!(categories.outputs[0].default_value, None);
}

#[test]
fn model_outputs_keep_the_declared_alias() {
    let mut project = Project::new();
    let string = project.string_type();
    let model = project.reference("ModelSignal", vec![string], true);

    project.add_class(
        "model.ts",
        ClassDeclaration::new("Field")
            .with_decorator(component())
            .with_property(
                PropertyDeclaration::new("value", model).with_initializer(Initializer::call(
                    "model",
                    vec![Expression::object(vec![("alias", "'selected'")])],
                )),
            ),
    );

    let result =
        generate_type_information(&project, "model.ts", &ExtractorOptions::default()).unwrap();
    let categories = &result.classes[0].entities_by_category;
    assert_eq!(categories.inputs[0].alias.as_deref(), Some("selected"));
    assert_eq!(categories.outputs[0].name, "valueChange");
    assert_eq!(categories.outputs[0].alias.as_deref(), Some("selected"));
}

#[test]
fn signal_inputs_detect_required_initializers() {
    let mut project = Project::new();
    let string = project.string_type();
    let optional_payload = project.union_of(vec![string, project.undefined_type()]);
    let signal = project.reference("InputSignal", vec![optional_payload], true);

    project.add_class(
        "signals.ts",
        ClassDeclaration::new("Card")
            .with_decorator(component())
            .with_property(
                PropertyDeclaration::new("title", signal)
                    .with_initializer(Initializer::call("input.required", vec![])),
            ),
    );

    let result =
        generate_type_information(&project, "signals.ts", &ExtractorOptions::default()).unwrap();
    let inputs = &result.classes[0].entities_by_category.inputs;
    assert_eq!(inputs[0].kind, EntityKind::Input);
    assert!(inputs[0].required);
}

#[test]
fn signal_aliases_come_from_the_initializer_options() {
    let mut project = Project::new();
    let string = project.string_type();
    let signal = project.reference("InputSignal", vec![string], true);

    project.add_class(
        "alias.ts",
        ClassDeclaration::new("Card")
            .with_decorator(component())
            .with_property(
                PropertyDeclaration::new("title", signal).with_initializer(Initializer::call(
                    "input",
                    vec![
                        Expression::StringLiteral("default".to_string()),
                        Expression::object(vec![("alias", "'heading'")]),
                    ],
                )),
            ),
    );

    let result =
        generate_type_information(&project, "alias.ts", &ExtractorOptions::default()).unwrap();
    let inputs = &result.classes[0].entities_by_category.inputs;
    assert_eq!(inputs[0].alias.as_deref(), Some("heading"));
}

#[test]
fn decorator_aliases_win_over_signal_aliases() {
    let mut project = Project::new();
    let string = project.string_type();
    let signal = project.reference("InputSignal", vec![string], true);

    project.add_class(
        "alias.ts",
        ClassDeclaration::new("Card")
            .with_decorator(component())
            .with_property(
                PropertyDeclaration::new("title", signal)
                    .with_decorator(input().with_argument(Expression::StringLiteral(
                        "decorated".to_string(),
                    )))
                    .with_initializer(Initializer::call(
                        "input",
                        vec![Expression::object(vec![("alias", "'fromSignal'")])],
                    )),
            ),
    );

    let result =
        generate_type_information(&project, "alias.ts", &ExtractorOptions::default()).unwrap();
    let inputs = &result.classes[0].entities_by_category.inputs;
    assert_eq!(inputs[0].alias.as_deref(), Some("decorated"));
}

#[test]
fn lifecycle_hooks_are_suppressed_only_with_declared_capability() {
    let mut project = Project::new();
    let void = project.void_type();
    let hook_type = project.function_type(vec![CallSignature {
        parameters: vec![],
        return_type: void,
    }]);

    project.add_class(
        "hooks.ts",
        ClassDeclaration::new("WithHook")
            .with_decorator(component())
            .implements("OnInit")
            .with_method(MethodDeclaration::new("ngOnInit", hook_type)),
    );
    project.add_class(
        "hooks.ts",
        ClassDeclaration::new("WithoutCapability")
            .with_decorator(component())
            .with_method(MethodDeclaration::new("ngOnInit", hook_type)),
    );

    let result =
        generate_type_information(&project, "hooks.ts", &ExtractorOptions::default()).unwrap();
    assert!(result.classes[0].entities_by_category.methods.is_empty());
    assert_eq!(result.classes[1].entities_by_category.methods.len(), 1);
}

#[test]
fn private_protected_and_filtered_members_are_dropped() {
    let mut project = Project::new();
    let string = project.string_type();

    project.add_class(
        "filter.ts",
        ClassDeclaration::new("Widget")
            .with_decorator(component())
            .with_property(PropertyDeclaration::new("visible", string))
            .with_property(PropertyDeclaration::new("hidden", string).private())
            .with_property(PropertyDeclaration::new("guarded", string).protected())
            .with_property(PropertyDeclaration::new("_internal", string))
            .with_property(
                PropertyDeclaration::new("untracked", string)
                    .with_js_doc(JsDoc::new("").with_tag("exclude-docs", "")),
            ),
    );

    let options = ExtractorOptions {
        exclude_properties: Some(Regex::new("^_").unwrap()),
    };
    let result = generate_type_information(&project, "filter.ts", &options).unwrap();
    let properties = &result.classes[0].entities_by_category.properties;
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "visible");
}

#[test]
fn abstract_and_untagged_classes_are_not_documented() {
    let mut project = Project::new();
    project.add_class("skip.ts", ClassDeclaration::new("Plain"));
    project.add_class(
        "skip.ts",
        ClassDeclaration::new("Abstract").with_decorator(component()).abstract_(),
    );
    project.add_class(
        "skip.ts",
        ClassDeclaration::new("Tagged").with_js_doc(JsDoc::new("").with_tag("include-docs", "")),
    );

    let result =
        generate_type_information(&project, "skip.ts", &ExtractorOptions::default()).unwrap();
    let names: Vec<&str> = result.classes.iter().map(|class| class.name.as_str()).collect();
    assert_eq!(names, vec!["Tagged"]);
}

#[test]
fn accessor_pairs_merge_into_one_entity() {
    let mut project = Project::new();
    let number = project.number_type();

    project.add_class(
        "accessors.ts",
        ClassDeclaration::new("Widget")
            .with_decorator(component())
            .with_getter(
                GetAccessorDeclaration::new("size", number).with_js_doc(JsDoc::new("getter docs")),
            )
            .with_setter(SetAccessorDeclaration::new(
                "size",
                Parameter::new("value", number),
            )),
    );

    let result =
        generate_type_information(&project, "accessors.ts", &ExtractorOptions::default()).unwrap();
    let properties = &result.classes[0].entities_by_category.properties;
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].modifier, Some(EntityModifier::Setter));
    assert_eq!(properties[0].description, "getter docs");
    assert_eq!(properties[0].ty, "number");
}

#[test]
fn malformed_setters_abort_extraction() {
    let mut project = Project::new();
    project.add_class(
        "broken.ts",
        ClassDeclaration::new("Broken")
            .with_decorator(component())
            .with_setter(SetAccessorDeclaration::with_parameters("size", vec![])),
    );

    let error =
        generate_type_information(&project, "broken.ts", &ExtractorOptions::default()).unwrap_err();
    assert_eq!(
        error,
        ExtractionError::InvalidSetAccessor {
            name: "size".to_string()
        }
    );
}

#[test]
fn generic_base_members_resolve_to_the_supplied_type() {
    let mut project = Project::new();
    let t = project.type_parameter("T");
    let string = project.string_type();

    let base = project.add_class(
        "generic.ts",
        ClassDeclaration::new("Base")
            .with_type_parameters(vec![t])
            .with_property(PropertyDeclaration::new("data", t)),
    );
    project.add_class(
        "generic.ts",
        ClassDeclaration::new("Derived")
            .with_decorator(component())
            .with_extends(HeritageClause::new(base).with_type_arguments(vec![string])),
    );

    let result =
        generate_type_information(&project, "generic.ts", &ExtractorOptions::default()).unwrap();
    let derived = result
        .classes
        .iter()
        .find(|class| class.name == "Derived")
        .unwrap();
    let properties = &derived.entities_by_category.properties;
    assert_eq!(properties.len(), 1);
    assert_eq!(properties[0].name, "data");
    assert_eq!(properties[0].ty, "string");
}

#[test]
fn methods_render_named_signatures_with_docs() {
    let mut project = Project::new();
    let string = project.string_type();
    let boolean = project.boolean_type();
    let method_type = project.function_type(vec![CallSignature {
        parameters: vec![ts::ParameterInfo {
            name: "name".to_string(),
            ty: string,
        }],
        return_type: boolean,
    }]);

    project.add_class(
        "methods.ts",
        ClassDeclaration::new("Widget")
            .with_decorator(component())
            .with_method(
                MethodDeclaration::new("matches", method_type).with_js_doc(
                    JsDoc::new("Checks a name.")
                        .with_tag("param", "name the candidate")
                        .with_tag("return", "whether it matches"),
                ),
            ),
    );

    let result =
        generate_type_information(&project, "methods.ts", &ExtractorOptions::default()).unwrap();
    let methods = &result.classes[0].entities_by_category.methods;
    assert_eq!(methods[0].ty, "matches(name: string): boolean;");
    assert_eq!(methods[0].js_doc_params.len(), 1);
    assert_eq!(methods[0].js_doc_params[0].name, "name");
    assert_eq!(methods[0].js_doc_return.as_deref(), Some("whether it matches"));
}

#[test]
fn optional_and_undefined_typed_members_are_not_required() {
    let mut project = Project::new();
    let string = project.string_type();
    let with_undefined = project.union_of(vec![string, project.undefined_type()]);

    project.add_class(
        "required.ts",
        ClassDeclaration::new("Widget")
            .with_decorator(component())
            .with_property(PropertyDeclaration::new("plain", string))
            .with_property(PropertyDeclaration::new("maybe", with_undefined))
            .with_property(PropertyDeclaration::new("optional", string).optional()),
    );

    let result =
        generate_type_information(&project, "required.ts", &ExtractorOptions::default()).unwrap();
    let properties = &result.classes[0].entities_by_category.properties;
    let required: Vec<(&str, bool)> = properties
        .iter()
        .map(|entity| (entity.name.as_str(), entity.required))
        .collect();
    assert_eq!(
        required,
        vec![("maybe", false), ("optional", false), ("plain", true)]
    );
}

#[test]
fn extraction_is_idempotent() -> anyhow::Result<()> {
    let mut project = Project::new();
    let string = project.string_type();
    project.add_class(
        "idempotent.ts",
        ClassDeclaration::new("Widget")
            .with_decorator(component())
            .with_property(PropertyDeclaration::new("label", string).with_decorator(input())),
    );

    let options = ExtractorOptions::default();
    let first = generate_type_information(&project, "idempotent.ts", &options)?;
    let second = generate_type_information(&project, "idempotent.ts", &options)?;
    assert_eq!(serde_json::to_string(&first)?, serde_json::to_string(&second)?);
    Ok(())
}

#[test]
fn absent_files_document_nothing() {
    let project = Project::new();
    let result =
        generate_type_information(&project, "missing.ts", &ExtractorOptions::default()).unwrap();
    assert!(result.classes.is_empty());
    assert!(result.interfaces.is_empty());
    assert!(result.functions.is_empty());
    assert!(result.constants.is_empty());
}
