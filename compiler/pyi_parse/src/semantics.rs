//! The callback surface between the parser and the semantic layer.
//!
//! The parser owns no document model. Every reduction that creates a type,
//! a declaration or a conditional guard calls into a [`Semantics`]
//! implementation and keeps the returned handle on its stack until a later
//! reduction passes it back. Handles are moved, never shared: each one is
//! either consumed by a later callback, returned from [`Semantics::finish`],
//! or dropped when the parse fails.

use pyi_ir::syntax::{
    AliasOrConstant, Branch, Condition, ConstantValue, FunctionSig, ImportItem, ImportSource,
    Parent, TypeArg, TypeVarArgs,
};

/// A semantic layer rejected a construct.
///
/// The parser attaches the span of the rule being reduced and reports it
/// as a parse error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SemanticError {
    message: String,
}

impl SemanticError {
    pub fn new(message: impl Into<String>) -> Self {
        SemanticError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type SemanticResult<T> = Result<T, SemanticError>;

/// Builds document nodes for the parser.
pub trait Semantics {
    /// Handle for a type expression.
    type Type;
    /// Handle for a class member or top-level declaration.
    type Decl;
    /// What an `if`/`elif`/`else` arm opened with.
    type Guard;
    /// The finished document.
    type Output;

    /// A name reference, optionally parameterized: `name` or `name[args]`.
    fn new_type(
        &mut self,
        name: &str,
        args: Option<Vec<TypeArg<Self::Type>>>,
    ) -> SemanticResult<Self::Type>;

    fn anything(&mut self) -> Self::Type;

    fn nothing(&mut self) -> Self::Type;

    fn new_union_type(&mut self, types: Vec<Self::Type>) -> SemanticResult<Self::Type>;

    fn new_intersection_type(&mut self, types: Vec<Self::Type>) -> SemanticResult<Self::Type>;

    fn new_named_tuple(
        &mut self,
        name: String,
        fields: Vec<(String, Self::Type)>,
    ) -> SemanticResult<Self::Type>;

    /// `TypedDict("name", {"key": Name, ...}, total=...)`. Field values are
    /// bare names.
    fn new_typed_dict(
        &mut self,
        name: String,
        fields: Vec<(String, String)>,
        total: Option<(String, Self::Type)>,
    ) -> SemanticResult<Self::Type>;

    fn new_new_type(&mut self, name: String, base: Self::Type) -> SemanticResult<Self::Type>;

    /// Called when a class name is read, before its parents and body, so
    /// references inside the body can resolve to the class.
    fn register_class_name(&mut self, name: &str) -> SemanticResult<()>;

    fn new_class(
        &mut self,
        decorators: Vec<String>,
        name: String,
        parents: Vec<Parent<Self::Type>>,
        body: Vec<Self::Decl>,
    ) -> SemanticResult<Self::Decl>;

    fn new_function(&mut self, sig: FunctionSig<Self::Type>) -> SemanticResult<Self::Decl>;

    fn new_constant(
        &mut self,
        name: String,
        value: ConstantValue<Self::Type>,
    ) -> SemanticResult<Self::Decl>;

    /// Record an import. `from` is `None` for `import a.b`.
    fn add_import(
        &mut self,
        from: Option<ImportSource>,
        items: Vec<ImportItem>,
    ) -> SemanticResult<()>;

    /// Record `name = TypeVar("param_name", ...)`.
    fn add_type_var(
        &mut self,
        name: String,
        param_name: String,
        args: TypeVarArgs<Self::Type>,
    ) -> SemanticResult<()>;

    /// Record a top-level `NAME = value` binding.
    fn add_alias_or_constant(&mut self, item: AliasOrConstant<Self::Type>) -> SemanticResult<()>;

    /// Turn a class-level `NAME = value` binding into a member.
    fn new_alias_or_constant(
        &mut self,
        item: AliasOrConstant<Self::Type>,
    ) -> SemanticResult<Self::Decl>;

    fn if_begin(&mut self, condition: Condition) -> SemanticResult<Self::Guard>;

    fn if_elif(&mut self, condition: Condition) -> SemanticResult<Self::Guard>;

    fn if_else(&mut self) -> SemanticResult<Self::Guard>;

    /// Close an `if` block and return the declarations to keep.
    fn if_end(
        &mut self,
        branches: Vec<Branch<Self::Guard, Self::Decl>>,
    ) -> SemanticResult<Vec<Self::Decl>>;

    /// Error recovery discarded an `if` block that `if_begin` opened and
    /// `if_end` will never close.
    fn abandon_if(&mut self) {}

    /// Build the document from the top-level declarations.
    fn finish(&mut self, decls: Vec<Self::Decl>) -> SemanticResult<Self::Output>;
}
