// Angular Vocabulary
//
// The closed sets of framework names the engine recognizes: component-role
// decorators, lifecycle hooks, and the reactive signal wrapper types.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use ts::{ClassDeclaration, Initializer, Project, TypeId};

/// Decorators that mark a class as a documentable component role.
pub const COMPONENT_DECORATORS: [&str; 4] = ["Component", "Directive", "Pipe", "Injectable"];

/// Lifecycle-hook method name mapped to the capability interface a class
/// must implement for the hook to count as framework plumbing.
static BUILT_IN_ANGULAR_METHODS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("ngOnInit", "OnInit"),
        ("ngOnChanges", "OnChanges"),
        ("ngDoCheck", "DoCheck"),
        ("ngAfterContentInit", "AfterContentInit"),
        ("ngAfterContentChecked", "AfterContentChecked"),
        ("ngAfterViewInit", "AfterViewInit"),
        ("ngAfterViewChecked", "AfterViewChecked"),
        ("ngOnDestroy", "OnDestroy"),
        ("writeValue", "ControlValueAccessor"),
        ("registerOnChange", "ControlValueAccessor"),
        ("registerOnTouched", "ControlValueAccessor"),
        ("setDisabledState", "ControlValueAccessor"),
        ("validate", "Validator"),
        ("registerOnValidatorChange", "Validator"),
    ])
});

/// Whether a class carries one of the component-role decorators.
pub fn has_component_decorator(class: &ClassDeclaration) -> bool {
    COMPONENT_DECORATORS
        .iter()
        .any(|name| class.decorator(name).is_some())
}

/// A method is suppressed as a lifecycle hook only when the declaring class
/// actually lists the corresponding capability in its implements clause.
pub fn is_builtin_angular_method(class: &ClassDeclaration, method_name: &str) -> bool {
    BUILT_IN_ANGULAR_METHODS
        .get(method_name)
        .is_some_and(|capability| class.implements.iter().any(|name| name == capability))
}

/// Reactive wrapper shapes, detected structurally by wrapper symbol name.
/// `Model` is transient and expands into an input plus a `…Change` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalShape {
    Input,
    Output,
    Model,
}

/// Classifies a property's resolved type as a signal wrapper, if it is one.
pub fn detect_signal_shape(project: &Project, ty: TypeId) -> Option<SignalShape> {
    match project.symbol_name(ty)? {
        "InputSignal" => Some(SignalShape::Input),
        "ModelSignal" => Some(SignalShape::Model),
        "OutputEmitterRef" | "OutputRef" => Some(SignalShape::Output),
        _ => None,
    }
}

/// `input.required(...)` and `model.required(...)` initializers mark the
/// member required regardless of the declared wrapper type.
pub fn is_required_signal_initializer(initializer: &Initializer) -> bool {
    initializer
        .as_call()
        .is_some_and(|call| call.callee == "input.required" || call.callee == "model.required")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts::ClassDeclaration;

    #[test]
    fn lifecycle_suppression_requires_declared_capability() {
        let with_capability = ClassDeclaration::new("A").implements("OnInit");
        let without_capability = ClassDeclaration::new("B");
        assert!(is_builtin_angular_method(&with_capability, "ngOnInit"));
        assert!(!is_builtin_angular_method(&without_capability, "ngOnInit"));
        assert!(!is_builtin_angular_method(&with_capability, "ngOnDestroy"));
    }

    #[test]
    fn detects_signal_wrappers_by_symbol_name() {
        let mut project = Project::new();
        let value = project.string_type();
        let input = project.reference("InputSignal", vec![value], true);
        let model = project.reference("ModelSignal", vec![value], true);
        let output = project.reference("OutputEmitterRef", vec![value], true);
        let emitter = project.reference("EventEmitter", vec![value], true);
        assert_eq!(detect_signal_shape(&project, input), Some(SignalShape::Input));
        assert_eq!(detect_signal_shape(&project, model), Some(SignalShape::Model));
        assert_eq!(detect_signal_shape(&project, output), Some(SignalShape::Output));
        assert_eq!(detect_signal_shape(&project, emitter), None);
    }
}
