//! Document printer.
//!
//! [`print_document`] turns a [`Document`] back into the token stream of a
//! stub that builds the same document. Declarations come out grouped by
//! kind, in the order the document stores them; conditional blocks are gone
//! because the document only holds the arms that were taken.

use pyi_ir::ast::{Alias, Class, Constant, Document, Function, Import, TypeExpr, TypeVarDecl};
use pyi_ir::syntax::{ImportSource, KwargValue, Param, ParamDefault, Parent, TypeArg};
use pyi_ir::{Number, Token, TokenKind, TokenList};

/// Print `document` as tokens. Spans are dummies.
pub fn print_document(document: &Document) -> TokenList {
    let mut p = Printer::default();
    for import in &document.imports {
        p.import(import);
    }
    if let Some(exports) = &document.exports {
        p.name("__all__");
        p.push(TokenKind::Eq);
        p.push(TokenKind::LBracket);
        p.comma_separated(exports, |p, name| p.string(name));
        p.push(TokenKind::RBracket);
    }
    for type_var in &document.type_vars {
        p.type_var(type_var);
    }
    for alias in &document.aliases {
        p.alias(alias);
    }
    for constant in &document.constants {
        p.constant(constant);
    }
    for class in &document.classes {
        p.class(class);
    }
    for group in &document.functions {
        for function in &group.signatures {
            p.function(function);
        }
    }
    p.tokens
}

/// Token for a name imported with `from ... import`.
fn import_item_kind(name: &str) -> TokenKind {
    match name {
        "NamedTuple" => TokenKind::NamedTuple,
        "namedtuple" => TokenKind::CollNamedTuple,
        "NewType" => TokenKind::NewType,
        "TypedDict" => TokenKind::TypedDict,
        "TypeVar" => TokenKind::TypeVar,
        "*" => TokenKind::Star,
        _ => TokenKind::Name(name.to_string()),
    }
}

#[derive(Default)]
struct Printer {
    tokens: TokenList,
}

impl Printer {
    fn push(&mut self, kind: TokenKind) {
        self.tokens.push(Token::dummy(kind));
    }

    fn name(&mut self, name: &str) {
        self.push(TokenKind::Name(name.to_string()));
    }

    fn string(&mut self, text: &str) {
        self.push(TokenKind::String(text.to_string()));
    }

    fn number(&mut self, n: Number) {
        self.push(TokenKind::Number(n));
    }

    fn dotted(&mut self, name: &str) {
        for (i, part) in name.split('.').enumerate() {
            if i > 0 {
                self.push(TokenKind::Dot);
            }
            self.name(part);
        }
    }

    fn comma_separated<T>(&mut self, items: &[T], mut each: impl FnMut(&mut Self, &T)) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.push(TokenKind::Comma);
            }
            each(self, item);
        }
    }

    fn import(&mut self, import: &Import) {
        match &import.source {
            None => {
                self.push(TokenKind::Import);
                self.comma_separated(&import.items, |p, item| {
                    p.dotted(&item.name);
                    if let Some(alias) = &item.alias {
                        p.push(TokenKind::As);
                        p.name(alias);
                    }
                });
                return;
            }
            Some(ImportSource::Module(module)) => {
                self.push(TokenKind::From);
                let path = module.trim_start_matches('.');
                for _ in 0..module.len() - path.len() {
                    self.push(TokenKind::Dot);
                }
                self.dotted(path);
            }
            Some(ImportSource::Package) => {
                self.push(TokenKind::From);
                self.push(TokenKind::Dot);
            }
            Some(ImportSource::ParentPackage) => {
                self.push(TokenKind::From);
                self.push(TokenKind::Dot);
                self.push(TokenKind::Dot);
            }
        }
        self.push(TokenKind::Import);
        self.comma_separated(&import.items, |p, item| {
            p.push(import_item_kind(&item.name));
            if let Some(alias) = &item.alias {
                p.push(TokenKind::As);
                p.name(alias);
            }
        });
    }

    fn type_var(&mut self, type_var: &TypeVarDecl) {
        self.name(&type_var.name);
        self.push(TokenKind::Eq);
        self.push(TokenKind::TypeVar);
        self.push(TokenKind::LParen);
        self.string(&type_var.name);
        for constraint in &type_var.constraints {
            self.push(TokenKind::Comma);
            self.ty(constraint);
        }
        for kwarg in &type_var.kwargs {
            self.push(TokenKind::Comma);
            self.name(&kwarg.name);
            self.push(TokenKind::Eq);
            match &kwarg.value {
                KwargValue::Type(ty) => self.ty(ty),
                KwargValue::Str(s) => self.string(s),
            }
        }
        self.push(TokenKind::RParen);
    }

    fn alias(&mut self, alias: &Alias) {
        self.name(&alias.name);
        self.push(TokenKind::Eq);
        self.ty(&alias.ty);
    }

    fn constant(&mut self, constant: &Constant) {
        self.name(&constant.name);
        self.push(TokenKind::Colon);
        self.ty(&constant.ty);
    }

    fn decorators(&mut self, decorators: &[String]) {
        for decorator in decorators {
            self.push(TokenKind::At);
            self.dotted(decorator);
        }
    }

    fn class(&mut self, class: &Class) {
        self.decorators(&class.decorators);
        self.push(TokenKind::Class);
        self.name(&class.name);
        if !class.parents.is_empty() {
            self.push(TokenKind::LParen);
            self.comma_separated(&class.parents, |p, parent| match parent {
                Parent::Base(ty) => p.ty(ty),
                Parent::Keyword { name, value } => {
                    p.name(name);
                    p.push(TokenKind::Eq);
                    p.ty(value);
                }
                Parent::NamedTuple => p.push(TokenKind::NamedTuple),
            });
            self.push(TokenKind::RParen);
        }
        self.push(TokenKind::Colon);
        let empty = class.constants.is_empty()
            && class.aliases.is_empty()
            && class.classes.is_empty()
            && class.methods.is_empty();
        if empty {
            self.push(TokenKind::Pass);
            return;
        }
        self.push(TokenKind::Indent);
        for constant in &class.constants {
            self.constant(constant);
        }
        for alias in &class.aliases {
            self.alias(alias);
        }
        for nested in &class.classes {
            self.class(nested);
        }
        for group in &class.methods {
            for method in &group.signatures {
                self.function(method);
            }
        }
        self.push(TokenKind::Dedent);
    }

    fn function(&mut self, function: &Function) {
        self.decorators(&function.decorators);
        if function.is_async {
            self.push(TokenKind::Async);
        }
        self.push(TokenKind::Def);
        self.name(&function.name);
        self.push(TokenKind::LParen);
        self.comma_separated(&function.params, Self::param);
        self.push(TokenKind::RParen);
        self.push(TokenKind::Arrow);
        self.ty(&function.return_type);
        self.push(TokenKind::Colon);
        if function.mutators.is_empty() && function.raises.is_empty() {
            self.push(TokenKind::Ellipsis);
            return;
        }
        self.push(TokenKind::Indent);
        for mutator in &function.mutators {
            self.name(&mutator.name);
            self.push(TokenKind::Eq);
            self.ty(&mutator.ty);
        }
        for raised in &function.raises {
            self.push(TokenKind::Raise);
            self.ty(raised);
        }
        self.push(TokenKind::Dedent);
    }

    fn param(&mut self, param: &Param<TypeExpr>) {
        let annotation = |p: &mut Self, ty: &Option<TypeExpr>| {
            if let Some(ty) = ty {
                p.push(TokenKind::Colon);
                p.ty(ty);
            }
        };
        match param {
            Param::Named { name, ty, default } => {
                self.name(name);
                annotation(self, ty);
                if let Some(default) = default {
                    self.push(TokenKind::Eq);
                    match default {
                        ParamDefault::Name(n) => self.name(n),
                        ParamDefault::Number(n) => self.number(*n),
                        ParamDefault::Ellipsis => self.push(TokenKind::Ellipsis),
                    }
                }
            }
            Param::KeywordOnlyMarker => self.push(TokenKind::Star),
            Param::Star { name, ty } => {
                self.push(TokenKind::Star);
                self.name(name);
                annotation(self, ty);
            }
            Param::DoubleStar { name, ty } => {
                self.push(TokenKind::Star);
                self.push(TokenKind::Star);
                self.name(name);
                annotation(self, ty);
            }
            Param::Ellipsis => self.push(TokenKind::Ellipsis),
        }
    }

    fn ty(&mut self, ty: &TypeExpr) {
        match ty {
            TypeExpr::Anything => self.push(TokenKind::Question),
            TypeExpr::Nothing => self.push(TokenKind::Nothing),
            TypeExpr::Named(name) | TypeExpr::Class(name) => self.dotted(name),
            TypeExpr::Generic { base, args } => {
                self.ty(base);
                self.push(TokenKind::LBracket);
                if args.is_empty() {
                    self.push(TokenKind::LParen);
                    self.push(TokenKind::RParen);
                } else {
                    self.comma_separated(args, Self::type_arg);
                }
                self.push(TokenKind::RBracket);
            }
            TypeExpr::Union(types) => {
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        self.push(TokenKind::Or);
                    }
                    self.operand(t);
                }
            }
            TypeExpr::Intersection(types) => {
                for (i, t) in types.iter().enumerate() {
                    if i > 0 {
                        self.push(TokenKind::And);
                    }
                    self.operand(t);
                }
            }
            TypeExpr::NamedTuple { name, fields } => {
                self.push(TokenKind::NamedTuple);
                self.push(TokenKind::LParen);
                self.string(name);
                self.push(TokenKind::Comma);
                self.push(TokenKind::LBracket);
                self.comma_separated(fields, |p, (field, ty)| {
                    p.push(TokenKind::LParen);
                    p.string(field);
                    p.push(TokenKind::Comma);
                    p.ty(ty);
                    p.push(TokenKind::RParen);
                });
                self.push(TokenKind::RBracket);
                self.push(TokenKind::RParen);
            }
            TypeExpr::TypedDict {
                name,
                fields,
                total,
            } => {
                self.push(TokenKind::TypedDict);
                self.push(TokenKind::LParen);
                self.string(name);
                self.push(TokenKind::Comma);
                self.push(TokenKind::LBrace);
                // Field values are bare names in the grammar.
                self.comma_separated(fields, |p, (key, ty)| {
                    p.string(key);
                    p.push(TokenKind::Colon);
                    p.name(ty.name().unwrap_or("object"));
                });
                self.push(TokenKind::RBrace);
                if let Some(total) = total {
                    self.push(TokenKind::Comma);
                    self.name("total");
                    self.push(TokenKind::Eq);
                    self.ty(total);
                }
                self.push(TokenKind::RParen);
            }
            TypeExpr::NewType { name, base } => {
                self.push(TokenKind::NewType);
                self.push(TokenKind::LParen);
                self.string(name);
                self.push(TokenKind::Comma);
                self.ty(base);
                self.push(TokenKind::RParen);
            }
        }
    }

    /// Operand of `or`/`and`; nested connectives are parenthesized.
    fn operand(&mut self, ty: &TypeExpr) {
        if matches!(ty, TypeExpr::Union(_) | TypeExpr::Intersection(_)) {
            self.push(TokenKind::LParen);
            self.ty(ty);
            self.push(TokenKind::RParen);
        } else {
            self.ty(ty);
        }
    }

    fn type_arg(&mut self, arg: &TypeArg<TypeExpr>) {
        match arg {
            TypeArg::Type(ty) => self.ty(ty),
            TypeArg::Ellipsis => self.push(TokenKind::Ellipsis),
            TypeArg::Number(n) => self.number(*n),
            TypeArg::Str(s) => self.string(s),
        }
    }
}
