// Declarations
//
// Syntactic view of the declarations the extraction engine reads: classes,
// interfaces, functions and exported variable statements, together with
// their members, decorators and initializer expressions.

use crate::jsdoc::JsDoc;
use crate::{ClassId, InterfaceId, TypeId};
use indexmap::IndexMap;

/// A constant-foldable expression, as it appears in decorator arguments,
/// call arguments and initializers.
#[derive(Debug, Clone)]
pub enum Expression {
    /// Unquoted string value; `text()` restores the quoted source form.
    StringLiteral(String),
    NumberLiteral(String),
    BooleanLiteral(bool),
    /// Ordered key to raw value text.
    ObjectLiteral(IndexMap<String, String>),
    Raw(String),
}

impl Expression {
    pub fn object(entries: Vec<(&str, &str)>) -> Self {
        Expression::ObjectLiteral(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        )
    }

    /// Source text of the expression.
    pub fn text(&self) -> String {
        match self {
            Expression::StringLiteral(value) => format!("\"{}\"", value),
            Expression::NumberLiteral(value) => value.clone(),
            Expression::BooleanLiteral(value) => value.to_string(),
            Expression::ObjectLiteral(entries) => {
                let body = entries
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{{ {} }}", body)
            }
            Expression::Raw(text) => text.clone(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::StringLiteral(_)
                | Expression::NumberLiteral(_)
                | Expression::BooleanLiteral(_)
        )
    }

    /// Raw value text of an object-literal entry, if this expression is an
    /// object literal containing the key.
    pub fn object_entry(&self, key: &str) -> Option<&str> {
        match self {
            Expression::ObjectLiteral(entries) => entries.get(key).map(String::as_str),
            _ => None,
        }
    }
}

/// A decorator application, e.g. `@Input('alias')`.
#[derive(Debug, Clone)]
pub struct Decorator {
    pub name: String,
    pub arguments: Vec<Expression>,
}

impl Decorator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_argument(mut self, argument: Expression) -> Self {
        self.arguments.push(argument);
        self
    }
}

#[derive(Debug, Clone)]
pub struct CallExpression {
    pub callee: String,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone)]
pub enum InitializerKind {
    Literal,
    Call(CallExpression),
    Other,
}

/// A member or variable initializer. `text` is the initializer's source text.
#[derive(Debug, Clone)]
pub struct Initializer {
    pub text: String,
    pub kind: InitializerKind,
}

impl Initializer {
    /// A literal initializer; `text` is the literal's source text, quotes
    /// included for strings.
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: InitializerKind::Literal,
        }
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expression>) -> Self {
        let callee = callee.into();
        let text = format!(
            "{}({})",
            callee,
            arguments
                .iter()
                .map(Expression::text)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self {
            text,
            kind: InitializerKind::Call(CallExpression { callee, arguments }),
        }
    }

    pub fn other(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: InitializerKind::Other,
        }
    }

    pub fn as_call(&self) -> Option<&CallExpression> {
        match &self.kind {
            InitializerKind::Call(call) => Some(call),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeId,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PropertyDeclaration {
    pub name: String,
    pub ty: TypeId,
    pub is_private: bool,
    pub is_protected: bool,
    pub has_question_token: bool,
    pub decorators: Vec<Decorator>,
    pub js_doc: Option<JsDoc>,
    pub initializer: Option<Initializer>,
}

impl PropertyDeclaration {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            is_private: false,
            is_protected: false,
            has_question_token: false,
            decorators: Vec::new(),
            js_doc: None,
            initializer: None,
        }
    }

    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }

    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = Some(initializer);
        self
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn protected(mut self) -> Self {
        self.is_protected = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.has_question_token = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct GetAccessorDeclaration {
    pub name: String,
    pub ty: TypeId,
    pub is_private: bool,
    pub is_protected: bool,
    pub decorators: Vec<Decorator>,
    pub js_doc: Option<JsDoc>,
}

impl GetAccessorDeclaration {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            is_private: false,
            is_protected: false,
            decorators: Vec::new(),
            js_doc: None,
        }
    }

    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }
}

#[derive(Debug, Clone)]
pub struct SetAccessorDeclaration {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub is_private: bool,
    pub is_protected: bool,
    pub decorators: Vec<Decorator>,
    pub js_doc: Option<JsDoc>,
}

impl SetAccessorDeclaration {
    pub fn new(name: impl Into<String>, parameter: Parameter) -> Self {
        Self {
            name: name.into(),
            parameters: vec![parameter],
            is_private: false,
            is_protected: false,
            decorators: Vec::new(),
            js_doc: None,
        }
    }

    /// A setter with an arbitrary parameter list; anything but exactly one
    /// parameter is malformed and rejected by the extraction engine.
    pub fn with_parameters(name: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            parameters,
            is_private: false,
            is_protected: false,
            decorators: Vec::new(),
            js_doc: None,
        }
    }

    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }
}

#[derive(Debug, Clone)]
pub struct MethodDeclaration {
    pub name: String,
    /// The method's function type (call signatures plus return type).
    pub ty: TypeId,
    pub is_private: bool,
    pub is_protected: bool,
    pub decorators: Vec<Decorator>,
    pub js_doc: Option<JsDoc>,
}

impl MethodDeclaration {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            is_private: false,
            is_protected: false,
            decorators: Vec::new(),
            js_doc: None,
        }
    }

    pub fn private(mut self) -> Self {
        self.is_private = true;
        self
    }

    pub fn protected(mut self) -> Self {
        self.is_protected = true;
        self
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }
}

/// `extends` clause of a class: the resolved base class plus the type
/// arguments supplied at the extension point.
#[derive(Debug, Clone)]
pub struct HeritageClause {
    pub base: ClassId,
    pub type_arguments: Vec<TypeId>,
}

impl HeritageClause {
    pub fn new(base: ClassId) -> Self {
        Self {
            base,
            type_arguments: Vec::new(),
        }
    }

    pub fn with_type_arguments(mut self, type_arguments: Vec<TypeId>) -> Self {
        self.type_arguments = type_arguments;
        self
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceHeritageClause {
    pub base: InterfaceId,
    pub type_arguments: Vec<TypeId>,
}

impl InterfaceHeritageClause {
    pub fn new(base: InterfaceId) -> Self {
        Self {
            base,
            type_arguments: Vec::new(),
        }
    }

    pub fn with_type_arguments(mut self, type_arguments: Vec<TypeId>) -> Self {
        self.type_arguments = type_arguments;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ClassDeclaration {
    pub name: Option<String>,
    pub is_abstract: bool,
    pub decorators: Vec<Decorator>,
    pub js_doc: Option<JsDoc>,
    /// Names of implemented interfaces, as written in the `implements` clause.
    pub implements: Vec<String>,
    pub extends: Option<HeritageClause>,
    /// The class's own generic type parameters.
    pub type_parameters: Vec<TypeId>,
    pub properties: Vec<PropertyDeclaration>,
    pub getters: Vec<GetAccessorDeclaration>,
    pub setters: Vec<SetAccessorDeclaration>,
    pub methods: Vec<MethodDeclaration>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::anonymous()
        }
    }

    pub fn anonymous() -> Self {
        Self {
            name: None,
            is_abstract: false,
            decorators: Vec::new(),
            js_doc: None,
            implements: Vec::new(),
            extends: None,
            type_parameters: Vec::new(),
            properties: Vec::new(),
            getters: Vec::new(),
            setters: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn with_decorator(mut self, decorator: Decorator) -> Self {
        self.decorators.push(decorator);
        self
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }

    pub fn implements(mut self, interface_name: impl Into<String>) -> Self {
        self.implements.push(interface_name.into());
        self
    }

    pub fn with_extends(mut self, heritage: HeritageClause) -> Self {
        self.extends = Some(heritage);
        self
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeId>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn with_property(mut self, property: PropertyDeclaration) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_getter(mut self, getter: GetAccessorDeclaration) -> Self {
        self.getters.push(getter);
        self
    }

    pub fn with_setter(mut self, setter: SetAccessorDeclaration) -> Self {
        self.setters.push(setter);
        self
    }

    pub fn with_method(mut self, method: MethodDeclaration) -> Self {
        self.methods.push(method);
        self
    }

    pub fn decorator(&self, name: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|decorator| decorator.name == name)
    }
}

#[derive(Debug, Clone)]
pub struct PropertySignature {
    pub name: String,
    pub ty: TypeId,
    pub has_question_token: bool,
    pub js_doc: Option<JsDoc>,
}

impl PropertySignature {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            has_question_token: false,
            js_doc: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.has_question_token = true;
        self
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }
}

#[derive(Debug, Clone)]
pub struct MethodSignature {
    pub name: String,
    /// The signature's function type.
    pub ty: TypeId,
    pub js_doc: Option<JsDoc>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            js_doc: None,
        }
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub js_doc: Option<JsDoc>,
    pub extends: Vec<InterfaceHeritageClause>,
    pub type_parameters: Vec<TypeId>,
    pub properties: Vec<PropertySignature>,
    pub methods: Vec<MethodSignature>,
}

impl InterfaceDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            js_doc: None,
            extends: Vec::new(),
            type_parameters: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }

    pub fn with_extends(mut self, heritage: InterfaceHeritageClause) -> Self {
        self.extends.push(heritage);
        self
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeId>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn with_property(mut self, property: PropertySignature) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }
}

#[derive(Debug, Clone)]
pub struct FunctionDeclaration {
    pub name: Option<String>,
    /// The function's type (call signature plus return type).
    pub ty: TypeId,
    pub js_doc: Option<JsDoc>,
}

impl FunctionDeclaration {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: Some(name.into()),
            ty,
            js_doc: None,
        }
    }

    pub fn anonymous(ty: TypeId) -> Self {
        Self {
            name: None,
            ty,
            js_doc: None,
        }
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }
}

#[derive(Debug, Clone)]
pub struct VariableDeclaration {
    pub name: String,
    pub ty: TypeId,
    pub initializer: Option<Initializer>,
}

impl VariableDeclaration {
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
            initializer: None,
        }
    }

    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

#[derive(Debug, Clone)]
pub struct VariableStatement {
    pub is_exported: bool,
    pub js_doc: Option<JsDoc>,
    pub declarations: Vec<VariableDeclaration>,
}

impl VariableStatement {
    pub fn new(declaration: VariableDeclaration) -> Self {
        Self {
            is_exported: false,
            js_doc: None,
            declarations: vec![declaration],
        }
    }

    pub fn exported(mut self) -> Self {
        self.is_exported = true;
        self
    }

    pub fn with_js_doc(mut self, js_doc: JsDoc) -> Self {
        self.js_doc = Some(js_doc);
        self
    }
}
