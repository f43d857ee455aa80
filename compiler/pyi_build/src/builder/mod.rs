//! The reference semantic layer.
//!
//! [`DocumentBuilder`] receives the parser's callbacks and assembles a
//! [`Document`]. Type handles are plain [`TypeExpr`] values, declarations
//! are [`Decl`]s, and a guard is whether its `if` arm is the one taken.
//!
//! Declarations inside arms that are not taken are still built (the parser
//! hands them back through `if_end`) but dropped there; imports, type
//! variables and top-level bindings reach the builder directly and are
//! ignored while an untaken arm is open.

use pyi_ir::ast::{
    group_overloads, Alias, Class, Constant, Decl, Document, Function, Import, Mutator,
    TypeExpr, TypeVarDecl,
};
use pyi_ir::syntax::{
    AliasOrConstant, AliasValue, BodyStmt, Branch, Condition, ConstantValue, FunctionSig,
    ImportItem, ImportSource, KwargValue, Param, Parent, TypeArg, TypeVarArgs,
};
use pyi_parse::{SemanticError, SemanticResult, Semantics};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::conditions;
use crate::BuildOptions;

/// Name bound by `__all__ = [...]`.
const EXPORTS: &str = "__all__";
/// Keyword accepted after the fields of a `TypedDict` call.
const TOTAL: &str = "total";

/// One open `if` block.
#[derive(Copy, Clone, Debug)]
struct Frame {
    /// The block itself sits in a taken arm.
    parent_active: bool,
    /// Some arm of this block has been taken.
    taken: bool,
    /// The arm being parsed is taken.
    current: bool,
}

/// Builds a [`Document`] from parser callbacks.
pub struct DocumentBuilder {
    options: BuildOptions,
    class_names: FxHashSet<String>,
    frames: Vec<Frame>,
    imports: Vec<Import>,
    type_vars: Vec<TypeVarDecl>,
    aliases: Vec<Alias>,
    constants: Vec<Constant>,
    exports: Option<Vec<String>>,
}

impl DocumentBuilder {
    pub fn new(options: BuildOptions) -> Self {
        DocumentBuilder {
            options,
            class_names: FxHashSet::default(),
            frames: Vec::new(),
            imports: Vec::new(),
            type_vars: Vec::new(),
            aliases: Vec::new(),
            constants: Vec::new(),
            exports: None,
        }
    }

    /// True unless an untaken `if` arm is open.
    fn active(&self) -> bool {
        self.frames.last().map_or(true, |frame| frame.current)
    }

    fn resolve(&self, name: &str) -> TypeExpr {
        if self.class_names.contains(name) {
            TypeExpr::Class(name.to_string())
        } else {
            TypeExpr::Named(name.to_string())
        }
    }

    fn evaluate(&self, condition: &Condition) -> SemanticResult<bool> {
        conditions::evaluate(condition, &self.options).map_err(|e| SemanticError::new(e.to_string()))
    }

    fn innermost(&mut self) -> SemanticResult<&mut Frame> {
        self.frames
            .last_mut()
            .ok_or_else(|| SemanticError::new("branch outside of an if block"))
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        DocumentBuilder::new(BuildOptions::default())
    }
}

/// Declarations sorted by kind, source order kept within each kind.
#[derive(Default)]
struct Members {
    classes: Vec<Class>,
    constants: Vec<Constant>,
    aliases: Vec<Alias>,
    functions: Vec<Function>,
}

impl Members {
    fn split(decls: Vec<Decl>) -> Self {
        let mut members = Members::default();
        for decl in decls {
            match decl {
                Decl::Class(c) => members.classes.push(c),
                Decl::Constant(c) => members.constants.push(c),
                Decl::Alias(a) => members.aliases.push(a),
                Decl::Function(f) => members.functions.push(f),
            }
        }
        members
    }
}

/// A `NAME = value` binding after classification.
enum Binding {
    Constant(Constant),
    Alias(Alias),
}

fn classify(item: AliasOrConstant<TypeExpr>) -> Binding {
    let AliasOrConstant { name, value } = item;
    match value {
        AliasValue::Strings(_) => Binding::Constant(Constant {
            name,
            ty: TypeExpr::generic(
                TypeExpr::named("list"),
                vec![TypeArg::Type(TypeExpr::named("str"))],
            ),
        }),
        AliasValue::Type(TypeExpr::Named(value)) if value == "True" || value == "False" => {
            Binding::Constant(Constant {
                name,
                ty: TypeExpr::named("bool"),
            })
        }
        AliasValue::Type(ty) => Binding::Alias(Alias { name, ty }),
    }
}

fn first_duplicate<'a>(names: impl IntoIterator<Item = &'a String>) -> Option<String> {
    let mut seen = FxHashSet::default();
    names.into_iter().find(|name| !seen.insert(*name)).cloned()
}

fn flatten(types: Vec<TypeExpr>, union: bool) -> Vec<TypeExpr> {
    let mut flat = Vec::with_capacity(types.len());
    for ty in types {
        match ty {
            TypeExpr::Union(inner) if union => flat.extend(inner),
            TypeExpr::Intersection(inner) if !union => flat.extend(inner),
            other => flat.push(other),
        }
    }
    flat
}

impl Semantics for DocumentBuilder {
    type Type = TypeExpr;
    type Decl = Decl;
    type Guard = bool;
    type Output = Document;

    fn new_type(&mut self, name: &str, args: Option<Vec<TypeArg<TypeExpr>>>) -> SemanticResult<TypeExpr> {
        let base = self.resolve(name);
        Ok(match args {
            None => base,
            Some(args) => TypeExpr::generic(base, args),
        })
    }

    fn anything(&mut self) -> TypeExpr {
        TypeExpr::Anything
    }

    fn nothing(&mut self) -> TypeExpr {
        TypeExpr::Nothing
    }

    fn new_union_type(&mut self, types: Vec<TypeExpr>) -> SemanticResult<TypeExpr> {
        let mut types = flatten(types, true);
        match types.len() {
            0 => Err(SemanticError::new("empty union")),
            1 => Ok(types.remove(0)),
            _ => Ok(TypeExpr::Union(types)),
        }
    }

    fn new_intersection_type(&mut self, types: Vec<TypeExpr>) -> SemanticResult<TypeExpr> {
        let mut types = flatten(types, false);
        match types.len() {
            0 => Err(SemanticError::new("empty intersection")),
            1 => Ok(types.remove(0)),
            _ => Ok(TypeExpr::Intersection(types)),
        }
    }

    fn new_named_tuple(&mut self, name: String, fields: Vec<(String, TypeExpr)>) -> SemanticResult<TypeExpr> {
        if let Some(field) = first_duplicate(fields.iter().map(|(field, _)| field)) {
            return Err(SemanticError::new(format!(
                "duplicate field name {field} in NamedTuple {name}"
            )));
        }
        Ok(TypeExpr::NamedTuple { name, fields })
    }

    fn new_typed_dict(
        &mut self,
        name: String,
        fields: Vec<(String, String)>,
        total: Option<(String, TypeExpr)>,
    ) -> SemanticResult<TypeExpr> {
        let total = match total {
            Some((keyword, _)) if keyword != TOTAL => {
                return Err(SemanticError::new(format!(
                    "unexpected keyword {keyword} in TypedDict {name}"
                )));
            }
            Some((_, value)) => Some(Box::new(value)),
            None => None,
        };
        let fields = fields
            .into_iter()
            .map(|(key, value)| {
                let ty = self.resolve(&value);
                (key, ty)
            })
            .collect();
        Ok(TypeExpr::TypedDict { name, fields, total })
    }

    fn new_new_type(&mut self, name: String, base: TypeExpr) -> SemanticResult<TypeExpr> {
        Ok(TypeExpr::NewType {
            name,
            base: Box::new(base),
        })
    }

    fn register_class_name(&mut self, name: &str) -> SemanticResult<()> {
        trace!(name, "register class name");
        self.class_names.insert(name.to_string());
        Ok(())
    }

    fn new_class(
        &mut self,
        decorators: Vec<String>,
        name: String,
        parents: Vec<Parent<TypeExpr>>,
        body: Vec<Decl>,
    ) -> SemanticResult<Decl> {
        debug!(%name, members = body.len(), "class");
        let members = Members::split(body);
        Ok(Decl::Class(Class {
            name,
            decorators,
            parents,
            classes: members.classes,
            constants: members.constants,
            aliases: members.aliases,
            methods: group_overloads(members.functions),
        }))
    }

    fn new_function(&mut self, sig: FunctionSig<TypeExpr>) -> SemanticResult<Decl> {
        let FunctionSig {
            decorators,
            is_async,
            name,
            params,
            return_type,
            body,
        } = sig;
        let mut raises = Vec::new();
        let mut mutators = Vec::new();
        for stmt in body {
            match stmt {
                BodyStmt::Raise(ty) => raises.push(ty),
                BodyStmt::Mutate { name: target, ty } => {
                    if !params.iter().any(|p| p.name() == Some(target.as_str())) {
                        return Err(SemanticError::new(format!(
                            "no parameter named {target} in {name}"
                        )));
                    }
                    mutators.push(Mutator { name: target, ty });
                }
            }
        }
        trace!(%name, params = params.len(), "function");
        Ok(Decl::Function(Function {
            name,
            decorators,
            is_async,
            params,
            return_type,
            raises,
            mutators,
        }))
    }

    fn new_constant(&mut self, name: String, value: ConstantValue<TypeExpr>) -> SemanticResult<Decl> {
        let ty = match value {
            ConstantValue::Number(n) if n.is_int() => TypeExpr::named("int"),
            ConstantValue::Number(_) => TypeExpr::named("float"),
            ConstantValue::Str(_) => TypeExpr::named("str"),
            ConstantValue::Type(ty) => ty,
        };
        Ok(Decl::Constant(Constant { name, ty }))
    }

    fn add_import(&mut self, from: Option<ImportSource>, items: Vec<ImportItem>) -> SemanticResult<()> {
        if self.active() {
            self.imports.push(Import {
                source: from,
                items,
            });
        }
        Ok(())
    }

    fn add_type_var(
        &mut self,
        name: String,
        param_name: String,
        args: TypeVarArgs<TypeExpr>,
    ) -> SemanticResult<()> {
        if name != param_name {
            return Err(SemanticError::new(format!(
                "TypeVar name needs to be {name:?} (not {param_name:?})"
            )));
        }
        if self.active() {
            self.type_vars.push(TypeVarDecl {
                name,
                constraints: args.constraints.unwrap_or_default(),
                kwargs: args.kwargs.unwrap_or_default(),
            });
        }
        Ok(())
    }

    fn add_alias_or_constant(&mut self, item: AliasOrConstant<TypeExpr>) -> SemanticResult<()> {
        if !self.active() {
            return Ok(());
        }
        if item.name == EXPORTS {
            if let AliasValue::Strings(names) = item.value {
                self.exports = Some(names);
                return Ok(());
            }
        }
        match classify(item) {
            Binding::Constant(c) => self.constants.push(c),
            Binding::Alias(a) => self.aliases.push(a),
        }
        Ok(())
    }

    fn new_alias_or_constant(&mut self, item: AliasOrConstant<TypeExpr>) -> SemanticResult<Decl> {
        Ok(match classify(item) {
            Binding::Constant(c) => Decl::Constant(c),
            Binding::Alias(a) => Decl::Alias(a),
        })
    }

    fn if_begin(&mut self, condition: Condition) -> SemanticResult<bool> {
        let parent_active = self.active();
        let holds = self.evaluate(&condition)?;
        let current = parent_active && holds;
        debug!(holds, taken = current, "if");
        self.frames.push(Frame {
            parent_active,
            taken: current,
            current,
        });
        Ok(current)
    }

    fn if_elif(&mut self, condition: Condition) -> SemanticResult<bool> {
        let holds = self.evaluate(&condition)?;
        let frame = self.innermost()?;
        let current = frame.parent_active && !frame.taken && holds;
        frame.taken |= current;
        frame.current = current;
        debug!(holds, taken = current, "elif");
        Ok(current)
    }

    fn if_else(&mut self) -> SemanticResult<bool> {
        let frame = self.innermost()?;
        let current = frame.parent_active && !frame.taken;
        frame.taken |= current;
        frame.current = current;
        debug!(taken = current, "else");
        Ok(current)
    }

    fn if_end(&mut self, branches: Vec<Branch<bool, Decl>>) -> SemanticResult<Vec<Decl>> {
        if self.frames.pop().is_none() {
            return Err(SemanticError::new("end of an if block that was never opened"));
        }
        Ok(branches
            .into_iter()
            .filter(|branch| branch.guard)
            .flat_map(|branch| branch.decls)
            .collect())
    }

    fn abandon_if(&mut self) {
        if self.frames.pop().is_some() {
            debug!(open = self.frames.len(), "if block abandoned");
        }
    }

    fn finish(&mut self, decls: Vec<Decl>) -> SemanticResult<Document> {
        let mut members = Members::split(decls);
        members.constants.append(&mut self.constants);
        members.aliases.append(&mut self.aliases);
        let functions = group_overloads(members.functions);

        let top_level = members
            .classes
            .iter()
            .map(|c| &c.name)
            .chain(members.constants.iter().map(|c| &c.name))
            .chain(members.aliases.iter().map(|a| &a.name))
            .chain(functions.iter().map(|f| &f.name));
        if let Some(name) = first_duplicate(top_level) {
            return Err(SemanticError::new(format!("duplicate top-level identifier {name}")));
        }

        let mut document = Document {
            imports: std::mem::take(&mut self.imports),
            exports: self.exports.take(),
            classes: members.classes,
            type_vars: std::mem::take(&mut self.type_vars),
            aliases: members.aliases,
            constants: members.constants,
            functions,
        };
        resolve_classes(&mut document);
        debug!(
            classes = document.classes.len(),
            functions = document.functions.len(),
            "document"
        );
        Ok(document)
    }
}

/// Rewrite every name reference to `Class` when a class of that name is in
/// the document and to `Named` otherwise, so forward references and classes
/// dropped with an untaken arm resolve the same way regardless of order.
fn resolve_classes(document: &mut Document) {
    let mut classes = FxHashSet::default();
    collect_class_names(&document.classes, &mut classes);
    let mut fix = |ty: &mut TypeExpr| resolve_type(ty, &classes);

    for class in &mut document.classes {
        visit_class(class, &mut fix);
    }
    for type_var in &mut document.type_vars {
        type_var.constraints.iter_mut().for_each(&mut fix);
        for kwarg in &mut type_var.kwargs {
            if let KwargValue::Type(ty) = &mut kwarg.value {
                fix(ty);
            }
        }
    }
    document.aliases.iter_mut().for_each(|a| fix(&mut a.ty));
    document.constants.iter_mut().for_each(|c| fix(&mut c.ty));
    for group in &mut document.functions {
        for function in &mut group.signatures {
            visit_function(function, &mut fix);
        }
    }
}

fn collect_class_names(classes: &[Class], names: &mut FxHashSet<String>) {
    for class in classes {
        names.insert(class.name.clone());
        collect_class_names(&class.classes, names);
    }
}

fn visit_class(class: &mut Class, fix: &mut impl FnMut(&mut TypeExpr)) {
    for parent in &mut class.parents {
        match parent {
            Parent::Base(ty) | Parent::Keyword { value: ty, .. } => fix(ty),
            Parent::NamedTuple => {}
        }
    }
    for nested in &mut class.classes {
        visit_class(nested, fix);
    }
    class.constants.iter_mut().for_each(|c| fix(&mut c.ty));
    class.aliases.iter_mut().for_each(|a| fix(&mut a.ty));
    for group in &mut class.methods {
        for function in &mut group.signatures {
            visit_function(function, fix);
        }
    }
}

fn visit_function(function: &mut Function, fix: &mut impl FnMut(&mut TypeExpr)) {
    for param in &mut function.params {
        match param {
            Param::Named { ty: Some(ty), .. }
            | Param::Star { ty: Some(ty), .. }
            | Param::DoubleStar { ty: Some(ty), .. } => fix(ty),
            _ => {}
        }
    }
    fix(&mut function.return_type);
    function.raises.iter_mut().for_each(&mut *fix);
    function.mutators.iter_mut().for_each(|m| fix(&mut m.ty));
}

fn resolve_type(ty: &mut TypeExpr, classes: &FxHashSet<String>) {
    match ty {
        TypeExpr::Named(name) | TypeExpr::Class(name) => {
            let name = std::mem::take(name);
            *ty = if classes.contains(&name) {
                TypeExpr::Class(name)
            } else {
                TypeExpr::Named(name)
            };
        }
        TypeExpr::Generic { base, args } => {
            resolve_type(base, classes);
            for arg in args {
                if let TypeArg::Type(inner) = arg {
                    resolve_type(inner, classes);
                }
            }
        }
        TypeExpr::Union(types) | TypeExpr::Intersection(types) => {
            types.iter_mut().for_each(|t| resolve_type(t, classes));
        }
        TypeExpr::NamedTuple { fields, .. } => {
            fields.iter_mut().for_each(|(_, t)| resolve_type(t, classes));
        }
        TypeExpr::TypedDict { fields, total, .. } => {
            fields.iter_mut().for_each(|(_, t)| resolve_type(t, classes));
            if let Some(total) = total {
                resolve_type(total, classes);
            }
        }
        TypeExpr::NewType { base, .. } => resolve_type(base, classes),
        TypeExpr::Anything | TypeExpr::Nothing => {}
    }
}
