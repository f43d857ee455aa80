//! Reduction actions, one per grammar rule.
//!
//! Each action consumes the values of the rule's right-hand side, calls
//! into the semantic layer where the rule builds a document node, and
//! returns the value of the left-hand side. Values are moved out of the
//! right-hand side exactly once; whatever an action does not use is dropped
//! with it.

use pyi_ir::syntax::{
    AliasOrConstant, AliasValue, BodyStmt, Branch, CompareOp, CondTarget, CondValue, Condition,
    ConstantValue, FunctionSig, ImportItem, ImportSource, ItemKey, KwargValue, Param,
    ParamDefault, Parent, TypeArg, TypeVarArgs, TypeVarKwarg,
};
use pyi_ir::Span;
use smallvec::SmallVec;

use crate::semantics::SemanticError;
use crate::stack::{Rhs, MAX_RHS};
use crate::value::{StarName, Value, ValueMismatch};
use crate::Semantics;

/// Separator appended between dotted-name segments.
const DOT: &str = ".";

/// Why a reduction produced no value.
#[derive(Debug)]
pub(crate) enum ReduceError {
    /// The semantic layer rejected the construct at `span`.
    Semantic { error: SemanticError, span: Span },
    /// A right-hand side value had the wrong shape.
    Mismatch(ValueMismatch),
    /// No action exists for the rule.
    UnknownRule(u8),
}

impl From<ValueMismatch> for ReduceError {
    fn from(mismatch: ValueMismatch) -> Self {
        ReduceError::Mismatch(mismatch)
    }
}

/// Right-hand side values and spans, taken by position.
struct Args<S: Semantics> {
    values: SmallVec<[Value<S>; MAX_RHS]>,
    spans: SmallVec<[Span; MAX_RHS]>,
}

impl<S: Semantics> Args<S> {
    fn new(rhs: Rhs<S>) -> Self {
        let mut values = SmallVec::new();
        let mut spans = SmallVec::new();
        for symbol in rhs {
            values.push(symbol.value);
            spans.push(symbol.span);
        }
        Args { values, spans }
    }

    /// Move the value at `index` out, leaving `Empty` behind.
    fn take(&mut self, index: usize) -> Value<S> {
        self.values
            .get_mut(index)
            .map_or(Value::Empty, |slot| std::mem::replace(slot, Value::Empty))
    }

    fn span(&self, index: usize) -> Span {
        self.spans.get(index).copied().unwrap_or(Span::DUMMY)
    }
}

fn start_list<T>(item: T) -> Vec<T> {
    vec![item]
}

fn append_list<T>(mut list: Vec<T>, item: T) -> Vec<T> {
    list.push(item);
    list
}

fn extend_list<T>(mut list: Vec<T>, items: Vec<T>) -> Vec<T> {
    list.extend(items);
    list
}

fn compare_op<S: Semantics>(value: Value<S>) -> Result<CompareOp, ReduceError> {
    let symbol = value.into_str()?;
    CompareOp::from_symbol(symbol).ok_or(ReduceError::Mismatch(ValueMismatch {
        expected: "comparison operator",
        found: "Str",
    }))
}

/// Run the action of `rule` on its right-hand side.
///
/// `span` arrives as the default location of the left-hand side; rules that
/// re-base their start update it before calling the semantic layer, so a
/// reported failure points at the adjusted location.
pub(crate) fn reduce<S: Semantics>(
    rule: u8,
    rhs: Rhs<S>,
    span: &mut Span,
    sem: &mut S,
) -> Result<Value<S>, ReduceError> {
    let mut a = Args::new(rhs);

    macro_rules! check {
        ($result:expr) => {
            check!($result, *span)
        };
        ($result:expr, $at:expr) => {{
            let at = $at;
            $result.map_err(|error| ReduceError::Semantic { error, span: at })?
        }};
    }

    let value = match rule {
        // start
        2 => {
            let decls = a.take(0).into_decls()?;
            Value::Output(check!(sem.finish(decls)))
        }
        3 => {
            let decls = a.take(1).into_decls()?;
            Value::Output(check!(sem.finish(decls)))
        }
        // unit
        4 => a.take(0),

        // alldefs
        5 | 6 | 9 => {
            let list = a.take(0).into_decls()?;
            Value::Decls(append_list(list, a.take(1).into_decl()?))
        }
        7 | 10 => Value::Decls(a.take(0).into_decls()?),
        8 => {
            let list = a.take(0).into_decls()?;
            let item = a.take(1).into_alias()?;
            check!(sem.add_alias_or_constant(item));
            Value::Decls(list)
        }
        11 => {
            let list = a.take(0).into_decls()?;
            let branches = a.take(1).into_branches()?;
            let kept = check!(sem.if_end(branches), a.span(1));
            Value::Decls(extend_list(list, kept))
        }
        12 => Value::Decls(Vec::new()),

        // maybe_type_ignore
        13 | 14 => Value::Empty,

        // classdef
        15 => {
            *span = span.with_start(a.span(1).start);
            let decorators = a.take(0).into_strings()?;
            let name = a.take(2).into_text()?;
            let parents = a.take(3).into_parents()?;
            let body = a.take(6).into_decls()?;
            Value::Decl(check!(sem.new_class(decorators, name, parents, body)))
        }
        16 => {
            let name = a.take(0).into_text()?;
            check!(sem.register_class_name(&name));
            Value::Text(name)
        }

        // parents
        17 => a.take(1),
        18 | 19 => Value::Parents(Vec::new()),
        20 => {
            let list = a.take(0).into_parents()?;
            Value::Parents(append_list(list, a.take(2).into_parent()?))
        }
        21 => Value::Parents(start_list(a.take(0).into_parent()?)),
        22 => Value::Parent(Parent::Base(a.take(0).into_type()?)),
        23 => {
            let name = a.take(0).into_text()?;
            let value = a.take(2).into_type()?;
            Value::Parent(Parent::Keyword { name, value })
        }
        24 => Value::Parent(Parent::NamedTuple),
        25 => Value::Parent(Parent::Base(check!(sem.new_type("TypedDict", None)))),

        // class bodies
        26 => Value::Decls(Vec::new()),
        27 => a.take(1),
        28 => a.take(2),
        29 => Value::Decls(Vec::new()),
        30 => a.take(0),
        31 | 33 | 35 => {
            let list = a.take(0).into_decls()?;
            Value::Decls(append_list(list, a.take(1).into_decl()?))
        }
        32 => {
            let list = a.take(0).into_decls()?;
            let item = a.take(1).into_alias()?;
            let decl = check!(sem.new_alias_or_constant(item));
            Value::Decls(append_list(list, decl))
        }
        34 => {
            let list = a.take(0).into_decls()?;
            let branches = a.take(1).into_branches()?;
            let kept = check!(sem.if_end(branches), a.span(1));
            Value::Decls(extend_list(list, kept))
        }
        36 => Value::Decls(Vec::new()),

        // if statements, top level and in class bodies
        37 | 40 | 41 | 44 => {
            let list = a.take(0).into_branches()?;
            let guard = a.take(1).into_guard()?;
            let decls = a.take(4).into_decls()?;
            Value::Branches(append_list(list, Branch { guard, decls }))
        }
        38 | 42 => a.take(0),
        39 | 43 => {
            let guard = a.take(0).into_guard()?;
            let decls = a.take(3).into_decls()?;
            Value::Branches(start_list(Branch { guard, decls }))
        }
        45 => {
            let condition = a.take(1).into_condition()?;
            Value::Guard(check!(sem.if_begin(condition)))
        }
        46 => {
            let condition = a.take(1).into_condition()?;
            Value::Guard(check!(sem.if_elif(condition)))
        }
        47 => Value::Guard(check!(sem.if_else())),

        // condition
        48 | 49 => {
            let name = a.take(0).into_text()?;
            let op = compare_op(a.take(1))?;
            let value = if rule == 48 {
                CondValue::Str(a.take(2).into_text()?)
            } else {
                CondValue::Version(a.take(2).into_version()?)
            };
            Value::Condition(Condition::Compare {
                target: CondTarget { name, key: None },
                op,
                value,
            })
        }
        50 | 51 => {
            let name = a.take(0).into_text()?;
            let key = a.take(2).into_key()?;
            let op = compare_op(a.take(4))?;
            let value = if rule == 50 {
                CondValue::Number(a.take(5).into_number()?)
            } else {
                CondValue::Version(a.take(5).into_version()?)
            };
            Value::Condition(Condition::Compare {
                target: CondTarget {
                    name,
                    key: Some(key),
                },
                op,
                value,
            })
        }
        52 | 53 => {
            let left = Box::new(a.take(0).into_condition()?);
            let right = Box::new(a.take(2).into_condition()?);
            Value::Condition(if rule == 52 {
                Condition::And(left, right)
            } else {
                Condition::Or(left, right)
            })
        }
        54 => a.take(1),

        // version_tuple
        55 => Value::Version(vec![a.take(1).into_number()?]),
        56 => Value::Version(vec![a.take(1).into_number()?, a.take(3).into_number()?]),
        57 => Value::Version(vec![
            a.take(1).into_number()?,
            a.take(3).into_number()?,
            a.take(5).into_number()?,
        ]),

        // condition_op
        58 => Value::Str("<"),
        59 => Value::Str(">"),
        60 => Value::Str("<="),
        61 => Value::Str(">="),
        62 => Value::Str("=="),
        63 => Value::Str("!="),

        // constantdef
        64..=72 => {
            let (name, value) = match rule {
                64 => (
                    a.take(0).into_text()?,
                    ConstantValue::Number(a.take(2).into_number()?),
                ),
                65 => (
                    a.take(0).into_text()?,
                    ConstantValue::Str(a.take(2).into_text()?),
                ),
                66 | 69 | 70 => (
                    a.take(0).into_text()?,
                    ConstantValue::Type(a.take(2).into_type()?),
                ),
                67 => (a.take(0).into_text()?, ConstantValue::Type(sem.anything())),
                68 => (
                    a.take(0).into_text()?,
                    ConstantValue::Type(a.take(4).into_type()?),
                ),
                _ => (
                    "TypedDict".to_string(),
                    ConstantValue::Type(a.take(2).into_type()?),
                ),
            };
            Value::Decl(check!(sem.new_constant(name, value)))
        }

        // importdef
        73..=76 => {
            let (from, items) = match rule {
                73 => (None, a.take(1).into_imports()?),
                74 => {
                    let module = a.take(1).into_text()?;
                    (Some(ImportSource::Module(module)), a.take(3).into_imports()?)
                }
                75 => (Some(ImportSource::Package), a.take(3).into_imports()?),
                _ => (Some(ImportSource::ParentPackage), a.take(4).into_imports()?),
            };
            check!(sem.add_import(from, items));
            Value::Empty
        }
        77 | 86 => {
            let list = a.take(0).into_imports()?;
            Value::Imports(append_list(list, a.take(2).into_import()?))
        }
        78 | 87 => Value::Imports(start_list(a.take(0).into_import()?)),
        79 | 88 => Value::Import(ImportItem::new(a.take(0).into_text()?)),
        80 | 95 => {
            let name = a.take(0).into_text()?;
            let alias = a.take(2).into_text()?;
            Value::Import(ImportItem::new(name).with_alias(alias))
        }
        81 | 83 => a.take(0),
        82 => {
            let name = a.take(1).into_text()?;
            Value::Text(format!("{DOT}{name}"))
        }
        84 | 85 => a.take(1),
        89 => Value::Import(ImportItem::new("NamedTuple")),
        90 => Value::Import(ImportItem::new("namedtuple")),
        91 | 96 => Value::Import(ImportItem::new("NewType")),
        92 => Value::Import(ImportItem::new("TypedDict")),
        93 => Value::Import(ImportItem::new("TypeVar")),
        94 => Value::Import(ImportItem::new("*")),

        // alias_or_constant
        97 => {
            let name = a.take(0).into_text()?;
            let value = AliasValue::Type(a.take(2).into_type()?);
            Value::Alias(AliasOrConstant { name, value })
        }
        98 => {
            let name = a.take(0).into_text()?;
            let value = AliasValue::Strings(a.take(3).into_strings()?);
            Value::Alias(AliasOrConstant { name, value })
        }
        99 => a.take(0),
        100 => Value::Strings(Vec::new()),
        101 => {
            let list = a.take(0).into_strings()?;
            Value::Strings(append_list(list, a.take(2).into_text()?))
        }
        102 => Value::Strings(start_list(a.take(0).into_text()?)),

        // typevardef
        103 => {
            let name = a.take(0).into_text()?;
            let param_name = a.take(4).into_text()?;
            let args = a.take(5).into_type_var_args()?;
            check!(sem.add_type_var(name, param_name, args));
            Value::Empty
        }
        104 => Value::TypeVarArgs(TypeVarArgs::default()),
        105 => Value::TypeVarArgs(TypeVarArgs {
            constraints: Some(a.take(1).into_types()?),
            kwargs: None,
        }),
        106 => Value::TypeVarArgs(TypeVarArgs {
            constraints: None,
            kwargs: Some(a.take(1).into_kwargs()?),
        }),
        107 => Value::TypeVarArgs(TypeVarArgs {
            constraints: Some(a.take(1).into_types()?),
            kwargs: Some(a.take(3).into_kwargs()?),
        }),
        108 => {
            let list = a.take(0).into_kwargs()?;
            Value::Kwargs(append_list(list, a.take(2).into_kwarg()?))
        }
        109 => Value::Kwargs(start_list(a.take(0).into_kwarg()?)),
        110 | 111 => {
            let name = a.take(0).into_text()?;
            let value = if rule == 110 {
                KwargValue::Type(a.take(2).into_type()?)
            } else {
                KwargValue::Str(a.take(2).into_text()?)
            };
            Value::Kwarg(TypeVarKwarg { name, value })
        }

        // funcdef
        112 => {
            *span = span.with_start(a.span(2).start);
            let sig = FunctionSig {
                decorators: a.take(0).into_strings()?,
                is_async: a.take(1).into_flag()?,
                name: a.take(3).into_text()?,
                params: a.take(6).into_params()?,
                return_type: a.take(8).into_type()?,
                body: a.take(9).into_body()?,
            };
            Value::Decl(check!(sem.new_function(sig)))
        }
        113 => a.take(0),
        114 => Value::Text("namedtuple".to_string()),
        115 => Value::Text("NewType".to_string()),
        116 => Value::Text("TypedDict".to_string()),
        117 => {
            let list = a.take(0).into_strings()?;
            Value::Strings(append_list(list, a.take(1).into_text()?))
        }
        118 => Value::Strings(Vec::new()),
        119 => a.take(1),
        120 => Value::Flag(true),
        121 => Value::Flag(false),

        // params
        122 => a.take(0),
        123 => Value::Params(Vec::new()),
        124 => {
            let list = a.take(0).into_params()?;
            Value::Params(append_list(list, a.take(3).into_param()?))
        }
        125 => Value::Params(start_list(a.take(0).into_param()?)),
        126 => Value::Param(Param::Named {
            name: a.take(0).into_text()?,
            ty: a.take(1).into_opt_type()?,
            default: a.take(2).into_default()?,
        }),
        127 => Value::Param(Param::KeywordOnlyMarker),
        128 => {
            let StarName { name, double } = a.take(0).into_star_name()?;
            let ty = a.take(1).into_opt_type()?;
            Value::Param(if double {
                Param::DoubleStar { name, ty }
            } else {
                Param::Star { name, ty }
            })
        }
        129 => Value::Param(Param::Ellipsis),
        130 => Value::OptType(Some(a.take(1).into_type()?)),
        131 => Value::OptType(None),
        132 => Value::Default(Some(ParamDefault::Name(a.take(1).into_text()?))),
        133 => Value::Default(Some(ParamDefault::Number(a.take(1).into_number()?))),
        134 => Value::Default(Some(ParamDefault::Ellipsis)),
        135 => Value::Default(None),
        136 => Value::StarName(StarName {
            name: a.take(1).into_text()?,
            double: false,
        }),
        137 => Value::StarName(StarName {
            name: a.take(2).into_text()?,
            double: true,
        }),

        // return
        138 => a.take(1),
        139 => Value::Type(sem.anything()),

        // typeignore
        140 | 141 => Value::Empty,

        // maybe_body
        142 => a.take(3),
        143 => a.take(2),
        144 => Value::Body(Vec::new()),
        // empty_body
        145..=151 => Value::Empty,
        152 => {
            let list = a.take(0).into_body()?;
            Value::Body(append_list(list, a.take(1).into_body_stmt()?))
        }
        153 => Value::Body(start_list(a.take(0).into_body_stmt()?)),
        154 => Value::BodyStmt(BodyStmt::Mutate {
            name: a.take(0).into_text()?,
            ty: a.take(2).into_type()?,
        }),
        155 | 156 => Value::BodyStmt(BodyStmt::Raise(a.take(1).into_type()?)),

        // type_parameters
        157 => {
            let list = a.take(0).into_type_args()?;
            Value::TypeArgs(append_list(list, a.take(2).into_type_arg()?))
        }
        158 => Value::TypeArgs(start_list(a.take(0).into_type_arg()?)),
        159 => Value::TypeArg(TypeArg::Type(a.take(0).into_type()?)),
        160 => Value::TypeArg(TypeArg::Ellipsis),
        161 => Value::TypeArg(TypeArg::Number(a.take(0).into_number()?)),
        162 => Value::TypeArg(TypeArg::Str(a.take(0).into_text()?)),
        163 => {
            let types = a.take(1).into_types()?;
            let args = types.into_iter().map(TypeArg::Type).collect();
            Value::TypeArg(TypeArg::Type(check!(sem.new_type("tuple", Some(args)))))
        }
        164 => a.take(0),
        165 => Value::Types(Vec::new()),
        166 | 199 => {
            let list = a.take(0).into_types()?;
            Value::Types(append_list(list, a.take(2).into_type()?))
        }
        167 => Value::Types(start_list(a.take(0).into_type()?)),

        // type
        168 => {
            let name = a.take(0).into_text()?;
            Value::Type(check!(sem.new_type(&name, None)))
        }
        169 => {
            let name = a.take(0).into_text()?;
            Value::Type(check!(sem.new_type(&name, Some(Vec::new()))))
        }
        170 => {
            let name = a.take(0).into_text()?;
            let args = a.take(2).into_type_args()?;
            Value::Type(check!(sem.new_type(&name, Some(args))))
        }
        171 | 172 => {
            let name = a.take(2).into_text()?;
            let fields = a.take(4).into_fields()?;
            Value::Type(check!(sem.new_named_tuple(name, fields)))
        }
        173 => {
            let name = a.take(2).into_text()?;
            let base = a.take(4).into_type()?;
            Value::Type(check!(sem.new_new_type(name, base)))
        }
        174 => {
            let name = a.take(2).into_text()?;
            let fields = a.take(4).into_dict_fields()?;
            let total = a.take(5).into_dict_kwarg()?;
            Value::Type(check!(sem.new_typed_dict(name, fields, total)))
        }
        175 => a.take(1),
        176 | 177 => {
            let types = vec![a.take(0).into_type()?, a.take(2).into_type()?];
            Value::Type(if rule == 176 {
                check!(sem.new_intersection_type(types))
            } else {
                check!(sem.new_union_type(types))
            })
        }
        178 => Value::Type(sem.anything()),
        179 => Value::Type(sem.nothing()),

        // named tuple fields
        180 | 187 => a.take(1),
        181 | 188 => Value::Fields(Vec::new()),
        182 | 189 => {
            let list = a.take(0).into_fields()?;
            Value::Fields(append_list(list, a.take(2).into_field()?))
        }
        183 | 190 => Value::Fields(start_list(a.take(0).into_field()?)),
        184 => Value::Field((a.take(1).into_text()?, a.take(3).into_type()?)),
        191 => Value::Field((a.take(0).into_text()?, sem.anything())),

        // maybe_comma
        185 | 186 => Value::Empty,

        // typed dict fields
        192 => a.take(1),
        193 => Value::DictFields(Vec::new()),
        194 => {
            let mut fields = a.take(0).into_dict_fields()?;
            for (key, value) in a.take(2).into_dict_fields()? {
                match fields.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(slot) => slot.1 = value,
                    None => fields.push((key, value)),
                }
            }
            Value::DictFields(fields)
        }
        195 => a.take(0),
        196 => Value::DictFields(vec![(a.take(0).into_text()?, a.take(2).into_text()?)]),
        197 => Value::DictKwarg(Some((a.take(1).into_text()?, a.take(3).into_type()?))),
        198 => Value::DictKwarg(None),

        // tuple literals
        200 => Value::Types(vec![a.take(0).into_type()?, a.take(2).into_type()?]),
        201..=203 => {
            let types = match rule {
                201 => a.take(1).into_types()?,
                202 => vec![a.take(1).into_type()?],
                _ => vec![a.take(0).into_type()?],
            };
            let args = types.into_iter().map(TypeArg::Type).collect();
            Value::Type(check!(sem.new_type("tuple", Some(args))))
        }

        // dotted_name
        204 => a.take(0),
        205 => {
            let mut name = a.take(0).into_text()?;
            name.push_str(DOT);
            name.push_str(&a.take(2).into_text()?);
            Value::Text(name)
        }

        // getitem_key
        206 => Value::Key(ItemKey::Index(a.take(0).into_number()?)),
        207 => Value::Key(ItemKey::Slice {
            start: a.take(0).into_maybe_number()?,
            stop: a.take(2).into_maybe_number()?,
            step: None,
        }),
        208 => Value::Key(ItemKey::Slice {
            start: a.take(0).into_maybe_number()?,
            stop: a.take(2).into_maybe_number()?,
            step: a.take(4).into_maybe_number()?,
        }),
        209 => Value::MaybeNumber(Some(a.take(0).into_number()?)),
        210 => Value::MaybeNumber(None),

        // pass_or_ellipsis
        211 | 212 => Value::Empty,

        _ => return Err(ReduceError::UnknownRule(rule)),
    };
    Ok(value)
}

#[cfg(test)]
mod tests;
