//! The interface document built from a stub.
//!
//! Declarations are grouped by kind rather than kept in source order;
//! functions with the same name form one overload set.

use crate::syntax::{ImportItem, ImportSource, Param, Parent, TypeArg, TypeVarKwarg};

/// A type expression.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeExpr {
    /// `?`, an unannotated return, `...` as a constant value.
    Anything,
    /// `nothing`
    Nothing,
    /// A dotted name not defined as a class in this document.
    Named(String),
    /// A class defined (or being defined) in this document.
    Class(String),
    /// `base[args]`
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeArg<TypeExpr>>,
    },
    Union(Vec<TypeExpr>),
    Intersection(Vec<TypeExpr>),
    NamedTuple {
        name: String,
        fields: Vec<(String, TypeExpr)>,
    },
    TypedDict {
        name: String,
        fields: Vec<(String, TypeExpr)>,
        total: Option<Box<TypeExpr>>,
    },
    NewType {
        name: String,
        base: Box<TypeExpr>,
    },
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named(name.into())
    }

    pub fn generic(base: TypeExpr, args: Vec<TypeArg<TypeExpr>>) -> Self {
        TypeExpr::Generic {
            base: Box::new(base),
            args,
        }
    }

    /// The dotted name for name-like types.
    pub fn name(&self) -> Option<&str> {
        match self {
            TypeExpr::Named(name) | TypeExpr::Class(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constant {
    pub name: String,
    pub ty: TypeExpr,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alias {
    pub name: String,
    pub ty: TypeExpr,
}

/// `name = type` inside a function body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutator {
    pub name: String,
    pub ty: TypeExpr,
}

/// One signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Function {
    pub name: String,
    pub decorators: Vec<String>,
    pub is_async: bool,
    pub params: Vec<Param<TypeExpr>>,
    pub return_type: TypeExpr,
    pub raises: Vec<TypeExpr>,
    pub mutators: Vec<Mutator>,
}

/// All signatures sharing a name, in source order.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overloads {
    pub name: String,
    pub signatures: Vec<Function>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Class {
    pub name: String,
    pub decorators: Vec<String>,
    pub parents: Vec<Parent<TypeExpr>>,
    pub classes: Vec<Class>,
    pub constants: Vec<Constant>,
    pub aliases: Vec<Alias>,
    pub methods: Vec<Overloads>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeVarDecl {
    pub name: String,
    pub constraints: Vec<TypeExpr>,
    pub kwargs: Vec<TypeVarKwarg<TypeExpr>>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Import {
    /// `None` for plain `import a.b`.
    pub source: Option<ImportSource>,
    pub items: Vec<ImportItem>,
}

/// A declaration produced while parsing, before grouping.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Decl {
    Constant(Constant),
    Alias(Alias),
    Function(Function),
    Class(Class),
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Constant(c) => &c.name,
            Decl::Alias(a) => &a.name,
            Decl::Function(f) => &f.name,
            Decl::Class(c) => &c.name,
        }
    }
}

/// A parsed stub.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub imports: Vec<Import>,
    /// The `__all__` list, when present.
    pub exports: Option<Vec<String>>,
    pub classes: Vec<Class>,
    pub type_vars: Vec<TypeVarDecl>,
    pub aliases: Vec<Alias>,
    pub constants: Vec<Constant>,
    pub functions: Vec<Overloads>,
}

/// Group signatures into overload sets, keeping first-appearance order.
pub fn group_overloads(functions: Vec<Function>) -> Vec<Overloads> {
    let mut groups: Vec<Overloads> = Vec::new();
    for function in functions {
        if let Some(group) = groups.iter_mut().find(|g| g.name == function.name) {
            group.signatures.push(function);
        } else {
            groups.push(Overloads {
                name: function.name.clone(),
                signatures: vec![function],
            });
        }
    }
    groups
}
