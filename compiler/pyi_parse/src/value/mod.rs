//! Semantic values carried on the parse stack.
//!
//! One closed enum covers every shape a grammar symbol can hold. Reductions
//! move values out with the `into_*` accessors; asking for the wrong shape
//! is an internal error, never a panic.

use pyi_ir::syntax::{
    AliasOrConstant, BodyStmt, Branch, Condition, ImportItem, ItemKey, Param, ParamDefault,
    Parent, TypeArg, TypeVarArgs, TypeVarKwarg,
};
use pyi_ir::Number;

use crate::Semantics;

/// `*name` or `**name` before its annotation is known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StarName {
    pub(crate) name: String,
    pub(crate) double: bool,
}

/// Value of a grammar symbol.
pub(crate) enum Value<S: Semantics> {
    /// Punctuation, keywords and symbols whose value is never read.
    Empty,
    /// A comparison operator.
    Str(&'static str),
    Text(String),
    Number(Number),
    Flag(bool),
    Type(S::Type),
    Types(Vec<S::Type>),
    TypeArg(TypeArg<S::Type>),
    TypeArgs(Vec<TypeArg<S::Type>>),
    Decl(S::Decl),
    Decls(Vec<S::Decl>),
    Guard(S::Guard),
    Branches(Vec<Branch<S::Guard, S::Decl>>),
    Condition(Condition),
    Version(Vec<Number>),
    Key(ItemKey),
    MaybeNumber(Option<Number>),
    Parent(Parent<S::Type>),
    Parents(Vec<Parent<S::Type>>),
    Import(ImportItem),
    Imports(Vec<ImportItem>),
    Strings(Vec<String>),
    Alias(AliasOrConstant<S::Type>),
    TypeVarArgs(TypeVarArgs<S::Type>),
    Kwarg(TypeVarKwarg<S::Type>),
    Kwargs(Vec<TypeVarKwarg<S::Type>>),
    Param(Param<S::Type>),
    Params(Vec<Param<S::Type>>),
    StarName(StarName),
    Default(Option<ParamDefault>),
    OptType(Option<S::Type>),
    BodyStmt(BodyStmt<S::Type>),
    Body(Vec<BodyStmt<S::Type>>),
    Field((String, S::Type)),
    Fields(Vec<(String, S::Type)>),
    DictFields(Vec<(String, String)>),
    DictKwarg(Option<(String, S::Type)>),
    Output(S::Output),
}

/// A value was not of the shape a reduction expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ValueMismatch {
    pub(crate) expected: &'static str,
    pub(crate) found: &'static str,
}

impl<S: Semantics> Value<S> {
    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Value::Empty => "Empty",
            Value::Str(_) => "Str",
            Value::Text(_) => "Text",
            Value::Number(_) => "Number",
            Value::Flag(_) => "Flag",
            Value::Type(_) => "Type",
            Value::Types(_) => "Types",
            Value::TypeArg(_) => "TypeArg",
            Value::TypeArgs(_) => "TypeArgs",
            Value::Decl(_) => "Decl",
            Value::Decls(_) => "Decls",
            Value::Guard(_) => "Guard",
            Value::Branches(_) => "Branches",
            Value::Condition(_) => "Condition",
            Value::Version(_) => "Version",
            Value::Key(_) => "Key",
            Value::MaybeNumber(_) => "MaybeNumber",
            Value::Parent(_) => "Parent",
            Value::Parents(_) => "Parents",
            Value::Import(_) => "Import",
            Value::Imports(_) => "Imports",
            Value::Strings(_) => "Strings",
            Value::Alias(_) => "Alias",
            Value::TypeVarArgs(_) => "TypeVarArgs",
            Value::Kwarg(_) => "Kwarg",
            Value::Kwargs(_) => "Kwargs",
            Value::Param(_) => "Param",
            Value::Params(_) => "Params",
            Value::StarName(_) => "StarName",
            Value::Default(_) => "Default",
            Value::OptType(_) => "OptType",
            Value::BodyStmt(_) => "BodyStmt",
            Value::Body(_) => "Body",
            Value::Field(_) => "Field",
            Value::Fields(_) => "Fields",
            Value::DictFields(_) => "DictFields",
            Value::DictKwarg(_) => "DictKwarg",
            Value::Output(_) => "Output",
        }
    }
}

macro_rules! accessors {
    ($($method:ident => $variant:ident: $ty:ty,)*) => {
        impl<S: Semantics> Value<S> {
            $(
                pub(crate) fn $method(self) -> Result<$ty, ValueMismatch> {
                    match self {
                        Value::$variant(v) => Ok(v),
                        other => Err(ValueMismatch {
                            expected: stringify!($variant),
                            found: other.kind_name(),
                        }),
                    }
                }
            )*
        }
    };
}

accessors! {
    into_str => Str: &'static str,
    into_text => Text: String,
    into_number => Number: Number,
    into_flag => Flag: bool,
    into_type => Type: S::Type,
    into_types => Types: Vec<S::Type>,
    into_type_arg => TypeArg: TypeArg<S::Type>,
    into_type_args => TypeArgs: Vec<TypeArg<S::Type>>,
    into_decl => Decl: S::Decl,
    into_decls => Decls: Vec<S::Decl>,
    into_guard => Guard: S::Guard,
    into_branches => Branches: Vec<Branch<S::Guard, S::Decl>>,
    into_condition => Condition: Condition,
    into_version => Version: Vec<Number>,
    into_key => Key: ItemKey,
    into_maybe_number => MaybeNumber: Option<Number>,
    into_parent => Parent: Parent<S::Type>,
    into_parents => Parents: Vec<Parent<S::Type>>,
    into_import => Import: ImportItem,
    into_imports => Imports: Vec<ImportItem>,
    into_strings => Strings: Vec<String>,
    into_alias => Alias: AliasOrConstant<S::Type>,
    into_type_var_args => TypeVarArgs: TypeVarArgs<S::Type>,
    into_kwarg => Kwarg: TypeVarKwarg<S::Type>,
    into_kwargs => Kwargs: Vec<TypeVarKwarg<S::Type>>,
    into_param => Param: Param<S::Type>,
    into_params => Params: Vec<Param<S::Type>>,
    into_star_name => StarName: StarName,
    into_default => Default: Option<ParamDefault>,
    into_opt_type => OptType: Option<S::Type>,
    into_body_stmt => BodyStmt: BodyStmt<S::Type>,
    into_body => Body: Vec<BodyStmt<S::Type>>,
    into_field => Field: (String, S::Type),
    into_fields => Fields: Vec<(String, S::Type)>,
    into_dict_fields => DictFields: Vec<(String, String)>,
    into_dict_kwarg => DictKwarg: Option<(String, S::Type)>,
    into_output => Output: S::Output,
}

#[cfg(test)]
mod tests;
