//! Payloads handed from the parser to the semantic layer.
//!
//! These are generic over the semantic layer's type handle `T`, so the same
//! shapes serve the parser's callback surface and the built document.

use crate::Number;
use std::fmt;

/// One argument inside `Name[...]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeArg<T> {
    Type(T),
    /// `...`
    Ellipsis,
    Number(Number),
    Str(String),
}

/// One entry of a class's parent list.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parent<T> {
    Base(T),
    /// `metaclass=Meta` and friends.
    Keyword { name: String, value: T },
    /// The bare `NamedTuple` keyword used as a base.
    NamedTuple,
}

/// A function parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Param<T> {
    Named {
        name: String,
        ty: Option<T>,
        default: Option<ParamDefault>,
    },
    /// Bare `*` separating keyword-only parameters.
    KeywordOnlyMarker,
    /// `*args`
    Star { name: String, ty: Option<T> },
    /// `**kwargs`
    DoubleStar { name: String, ty: Option<T> },
    /// `...` standing for any further parameters.
    Ellipsis,
}

impl<T> Param<T> {
    pub fn name(&self) -> Option<&str> {
        match self {
            Param::Named { name, .. } | Param::Star { name, .. } | Param::DoubleStar { name, .. } => {
                Some(name)
            }
            Param::KeywordOnlyMarker | Param::Ellipsis => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamDefault {
    Name(String),
    Number(Number),
    Ellipsis,
}

/// A statement in a function body.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyStmt<T> {
    /// `self = List[int]`: the parameter's type after the call.
    Mutate { name: String, ty: T },
    Raise(T),
}

/// Everything the parser knows about one `def`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionSig<T> {
    pub decorators: Vec<String>,
    pub is_async: bool,
    pub name: String,
    pub params: Vec<Param<T>>,
    pub return_type: T,
    pub body: Vec<BodyStmt<T>>,
}

/// Right-hand side of a top-level `NAME = ...` binding.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum AliasValue<T> {
    Type(T),
    /// `NAME = ["a", "b"]`
    Strings(Vec<String>),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AliasOrConstant<T> {
    pub name: String,
    pub value: AliasValue<T>,
}

/// Value of a constant definition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ConstantValue<T> {
    Number(Number),
    Str(String),
    Type(T),
}

/// Where a `from ... import` pulls from.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImportSource {
    /// A module path; leading dots mark a relative import.
    Module(String),
    /// `from . import ...`
    Package,
    /// `from .. import ...`
    ParentPackage,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportItem {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportItem {
    pub fn new(name: impl Into<String>) -> Self {
        ImportItem {
            name: name.into(),
            alias: None,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Arguments after the name in `TypeVar("T", ...)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeVarArgs<T> {
    pub constraints: Option<Vec<T>>,
    pub kwargs: Option<Vec<TypeVarKwarg<T>>>,
}

impl<T> Default for TypeVarArgs<T> {
    fn default() -> Self {
        TypeVarArgs {
            constraints: None,
            kwargs: None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeVarKwarg<T> {
    pub name: String,
    pub value: KwargValue<T>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KwargValue<T> {
    Type(T),
    Str(String),
}

/// One arm of an `if`/`elif`/`else` block: the guard the semantic layer
/// returned when the arm opened, and the arm's declarations.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Branch<G, D> {
    pub guard: G,
    pub decls: Vec<D>,
}

/// Comparison operator in a condition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CompareOp {
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
}

impl CompareOp {
    pub const fn as_str(self) -> &'static str {
        match self {
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "<" => CompareOp::Lt,
            ">" => CompareOp::Gt,
            "<=" => CompareOp::Le,
            ">=" => CompareOp::Ge,
            "==" => CompareOp::Eq,
            "!=" => CompareOp::Ne,
            _ => return None,
        })
    }

    /// Apply the operator to an ordering of `lhs` against `rhs`.
    pub fn holds(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::{Equal, Greater, Less};
        match self {
            CompareOp::Lt => ordering == Less,
            CompareOp::Gt => ordering == Greater,
            CompareOp::Le => ordering != Greater,
            CompareOp::Ge => ordering != Less,
            CompareOp::Eq => ordering == Equal,
            CompareOp::Ne => ordering != Equal,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subscript on a condition target: `sys.version_info[0]` or `[:2]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ItemKey {
    Index(Number),
    Slice {
        start: Option<Number>,
        stop: Option<Number>,
        step: Option<Number>,
    },
}

/// Left-hand side of a comparison.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CondTarget {
    /// Dotted name, e.g. `sys.version_info`.
    pub name: String,
    pub key: Option<ItemKey>,
}

/// Right-hand side of a comparison.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum CondValue {
    Str(String),
    Number(Number),
    Version(Vec<Number>),
}

/// An unevaluated `if` condition.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Condition {
    Compare {
        target: CondTarget,
        op: CompareOp,
        value: CondValue,
    },
    And(Box<Condition>, Box<Condition>),
    Or(Box<Condition>, Box<Condition>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_compare_op_symbols() {
        for op in [
            CompareOp::Lt,
            CompareOp::Gt,
            CompareOp::Le,
            CompareOp::Ge,
            CompareOp::Eq,
            CompareOp::Ne,
        ] {
            assert_eq!(CompareOp::from_symbol(op.as_str()), Some(op));
        }
        assert_eq!(CompareOp::from_symbol("<>"), None);
    }

    #[test]
    fn test_compare_op_holds() {
        assert!(CompareOp::Le.holds(Ordering::Equal));
        assert!(CompareOp::Le.holds(Ordering::Less));
        assert!(!CompareOp::Le.holds(Ordering::Greater));
        assert!(CompareOp::Ne.holds(Ordering::Greater));
        assert!(!CompareOp::Eq.holds(Ordering::Less));
    }

    #[test]
    fn test_param_name() {
        let p: Param<()> = Param::Star {
            name: "args".into(),
            ty: None,
        };
        assert_eq!(p.name(), Some("args"));
        assert_eq!(Param::<()>::KeywordOnlyMarker.name(), None);
    }
}
