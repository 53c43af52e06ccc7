//! Interface Extraction Tests
//!
//! Inclusion tagging, display aliases, heritage merging and generic
//! resolution for interface declarations.

use angular_types_extractor::{generate_type_information, ExtractorOptions};
use ts::{
    InterfaceDeclaration, InterfaceHeritageClause, JsDoc, Project, PropertySignature,
};

fn included(description: &str) -> JsDoc {
    JsDoc::new(description).with_tag("include-docs", "")
}

#[test]
fn only_tagged_interfaces_are_documented() {
    let mut project = Project::new();
    let string = project.string_type();
    project.add_interface(
        "shapes.ts",
        InterfaceDeclaration::new("Untagged")
            .with_property(PropertySignature::new("a", string)),
    );
    project.add_interface(
        "shapes.ts",
        InterfaceDeclaration::new("Tagged")
            .with_js_doc(included(""))
            .with_property(PropertySignature::new("a", string)),
    );

    let result =
        generate_type_information(&project, "shapes.ts", &ExtractorOptions::default()).unwrap();
    let names: Vec<&str> = result
        .interfaces
        .iter()
        .map(|interface| interface.name.as_str())
        .collect();
    assert_eq!(names, vec!["Tagged"]);
}

#[test]
fn aliases_combine_the_name_with_grouping_tags() {
    let mut project = Project::new();
    project.add_interface(
        "dimensions.ts",
        InterfaceDeclaration::new("Dimensions")
            .with_js_doc(JsDoc::new("").with_tag("include-docs", "Sizes, Layout")),
    );

    let result =
        generate_type_information(&project, "dimensions.ts", &ExtractorOptions::default()).unwrap();
    assert_eq!(result.interfaces[0].aliases, vec!["Dimensions", "Sizes", "Layout"]);
}

#[test]
fn heritage_members_merge_into_the_derived_interface() {
    let mut project = Project::new();
    let string = project.string_type();
    let number = project.number_type();

    let base = project.add_interface(
        "heritage.ts",
        InterfaceDeclaration::new("Named")
            .with_property(PropertySignature::new("name", string).with_js_doc(JsDoc::new("base docs"))),
    );
    project.add_interface(
        "heritage.ts",
        InterfaceDeclaration::new("Person")
            .with_js_doc(included(""))
            .with_extends(InterfaceHeritageClause::new(base))
            .with_property(PropertySignature::new("age", number)),
    );

    let result =
        generate_type_information(&project, "heritage.ts", &ExtractorOptions::default()).unwrap();
    let person = result
        .interfaces
        .iter()
        .find(|interface| interface.name == "Person")
        .unwrap();
    let properties = &person.entities_by_category.properties;
    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].name, "age");
    assert_eq!(properties[1].name, "name");
    assert_eq!(properties[1].description, "base docs");
}

#[test]
fn optional_signature_members_are_not_required() {
    let mut project = Project::new();
    let string = project.string_type();
    project.add_interface(
        "optional.ts",
        InterfaceDeclaration::new("Options")
            .with_js_doc(included(""))
            .with_property(PropertySignature::new("label", string).optional())
            .with_property(PropertySignature::new("title", string)),
    );

    let result =
        generate_type_information(&project, "optional.ts", &ExtractorOptions::default()).unwrap();
    let properties = &result.interfaces[0].entities_by_category.properties;
    assert!(!properties[0].required);
    assert!(properties[1].required);
}

#[test]
fn generic_heritage_resolves_member_types() {
    let mut project = Project::new();
    let t = project.type_parameter("T");
    let number = project.number_type();

    let base = project.add_interface(
        "generic.ts",
        InterfaceDeclaration::new("Box")
            .with_type_parameters(vec![t])
            .with_property(PropertySignature::new("item", t)),
    );
    project.add_interface(
        "generic.ts",
        InterfaceDeclaration::new("NumberBox")
            .with_js_doc(included(""))
            .with_extends(InterfaceHeritageClause::new(base).with_type_arguments(vec![number])),
    );

    let result =
        generate_type_information(&project, "generic.ts", &ExtractorOptions::default()).unwrap();
    let number_box = result
        .interfaces
        .iter()
        .find(|interface| interface.name == "NumberBox")
        .unwrap();
    let properties = &number_box.entities_by_category.properties;
    assert_eq!(properties[0].name, "item");
    assert_eq!(properties[0].ty, "number");
}
