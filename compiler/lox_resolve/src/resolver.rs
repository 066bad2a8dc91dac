//! The resolver pass.

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{
    ExprArena, ExprId, ExprKind, FunctionId, FunctionRange, Ident, Name, StmtId, StmtKind,
    StringInterner,
};
use lox_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;

use crate::{Resolution, ResolutionTable};

/// What kind of function body is being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FunctionKind {
    None,
    Function,
    Initializer,
    Method,
}

/// What kind of class body is being resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClassKind {
    None,
    Class,
    Subclass,
}

/// A name declared in a local scope.
#[derive(Clone, Copy, Debug)]
struct Local {
    /// `false` while the declaration's own initializer is being resolved.
    defined: bool,
    used: bool,
    /// The declaring identifier, for `var` locals only. Those are the ones
    /// warned about when never used.
    var: Option<Ident>,
}

impl Local {
    const IMPLICIT: Local = Local {
        defined: false,
        used: false,
        var: None,
    };
}

/// Walks a parsed tree computing scope-hop distances.
///
/// Each frame on `scopes` holds the locals declared in one scope. Global
/// declarations are not tracked.
pub struct Resolver<'a> {
    arena: &'a ExprArena,
    interner: &'a StringInterner,
    scopes: Vec<FxHashMap<Name, Local>>,
    function: FunctionKind,
    class: ClassKind,
    table: ResolutionTable,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Resolver<'a> {
    pub fn new(arena: &'a ExprArena, interner: &'a StringInterner) -> Self {
        Resolver {
            arena,
            interner,
            scopes: Vec::new(),
            function: FunctionKind::None,
            class: ClassKind::None,
            table: ResolutionTable::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Consume the resolver, returning the table and any diagnostics.
    pub fn finish(self) -> Resolution {
        Resolution {
            table: self.table,
            diagnostics: self.diagnostics,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn resolve_statements(&mut self, stmts: &[StmtId]) {
        for &stmt in stmts {
            self.resolve_stmt(stmt);
        }
    }

    pub(crate) fn begin_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// Pop the innermost scope, warning about `var` locals nothing read or
    /// assigned.
    pub(crate) fn end_scope(&mut self) {
        let Some(scope) = self.scopes.pop() else {
            return;
        };
        let mut unused: Vec<Ident> = scope
            .into_values()
            .filter(|local| !local.used)
            .filter_map(|local| local.var)
            .collect();
        unused.sort_by_key(|ident| (ident.line, self.interner.lookup(ident.name)));
        for ident in unused {
            let lexeme = self.interner.lookup(ident.name);
            self.diagnostics.push(
                Diagnostic::warning(ErrorCode::E2009)
                    .with_message(format!("Local variable '{lexeme}' is never used."))
                    .with_line(ident.line)
                    .at_token(lexeme),
            );
        }
    }

    fn error(&mut self, line: u32, lexeme: &str, code: ErrorCode, message: &str) {
        self.diagnostics.push(
            Diagnostic::error(code)
                .with_message(message)
                .with_line(line)
                .at_token(lexeme),
        );
    }

    fn error_at_ident(&mut self, ident: Ident, code: ErrorCode, message: &str) {
        let lexeme = self.interner.lookup(ident.name);
        self.error(ident.line, lexeme, code, message);
    }

    fn declare(&mut self, ident: Ident) {
        self.declare_local(ident, Local::IMPLICIT);
    }

    /// Declare a `var` local, which is warned about if never used.
    fn declare_var(&mut self, ident: Ident) {
        self.declare_local(
            ident,
            Local {
                var: Some(ident),
                ..Local::IMPLICIT
            },
        );
    }

    fn declare_local(&mut self, ident: Ident, local: Local) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };
        if scope.insert(ident.name, local).is_some() {
            self.error_at_ident(
                ident,
                ErrorCode::E2002,
                "Already a variable with this name in this scope.",
            );
        }
    }

    fn define(&mut self, name: Name) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.entry(name).or_insert(Local::IMPLICIT).defined = true;
        }
    }

    /// Record the hop count for `expr` if `name` is declared in a local
    /// scope, and mark that local used.
    fn resolve_local(&mut self, expr: ExprId, name: Name) {
        for (depth, scope) in self.scopes.iter_mut().rev().enumerate() {
            if let Some(local) = scope.get_mut(&name) {
                local.used = true;
                self.table.insert(expr, depth);
                return;
            }
        }
    }

    fn resolve_stmt(&mut self, id: StmtId) {
        ensure_sufficient_stack(|| self.resolve_stmt_inner(id));
    }

    fn resolve_stmt_inner(&mut self, id: StmtId) {
        let stmt = *self.arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Block(body) => {
                let body = self.arena.get_stmt_list(body);
                self.with_scope(|scoped| scoped.resolve_statements(body));
            }
            StmtKind::Class {
                name,
                superclass,
                methods,
            } => self.resolve_class(name, superclass, methods),
            StmtKind::Expression(expr) | StmtKind::Print(expr) => self.resolve_expr(expr),
            StmtKind::For {
                init,
                condition,
                increment,
                body,
            } => {
                // The initializer's variable lives in a scope around the loop.
                self.with_scope(|scoped| {
                    if let Some(init) = init {
                        scoped.resolve_stmt(init);
                    }
                    if let Some(condition) = condition {
                        scoped.resolve_expr(condition);
                    }
                    if let Some(increment) = increment {
                        scoped.resolve_expr(increment);
                    }
                    scoped.resolve_stmt(body);
                });
            }
            StmtKind::Function(function) => {
                let name = self.arena.get_function(function).name;
                self.declare(name);
                self.define(name.name);
                self.resolve_function(function, FunctionKind::Function);
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            StmtKind::Return(value) => {
                if self.function == FunctionKind::None {
                    self.error(
                        stmt.line,
                        "return",
                        ErrorCode::E2003,
                        "Can't return from top-level code.",
                    );
                }
                if let Some(value) = value {
                    if self.function == FunctionKind::Initializer {
                        self.diagnostics.push(
                            Diagnostic::error(ErrorCode::E2004)
                                .with_message("Can't return a value from an initializer.")
                                .with_line(stmt.line)
                                .at_token("return")
                                .with_note("`init` always returns `this`; use a bare `return;`"),
                        );
                    }
                    self.resolve_expr(value);
                }
            }
            StmtKind::Var { name, init } => {
                self.declare_var(name);
                if let Some(init) = init {
                    self.resolve_expr(init);
                }
                self.define(name.name);
            }
            StmtKind::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
        }
    }

    fn resolve_class(&mut self, name: Ident, superclass: Option<ExprId>, methods: FunctionRange) {
        let enclosing = std::mem::replace(&mut self.class, ClassKind::Class);

        self.declare(name);
        self.define(name.name);

        if let Some(superclass) = superclass {
            if let ExprKind::Variable(super_name) = self.arena.get_expr(superclass).kind {
                if super_name.name == name.name {
                    self.error_at_ident(
                        super_name,
                        ErrorCode::E2008,
                        "A class can't inherit from itself.",
                    );
                }
            }
            self.class = ClassKind::Subclass;
            self.resolve_expr(superclass);

            self.with_scope(|scoped| {
                scoped.define(Name::SUPER);
                scoped.resolve_methods(methods);
            });
        } else {
            self.resolve_methods(methods);
        }

        self.class = enclosing;
    }

    /// Method bodies, inside a scope that binds `this`.
    fn resolve_methods(&mut self, methods: FunctionRange) {
        let arena = self.arena;
        self.with_scope(|scoped| {
            scoped.define(Name::THIS);
            for &method in arena.get_function_list(methods) {
                let kind = if arena.get_function(method).name.name == Name::INIT {
                    FunctionKind::Initializer
                } else {
                    FunctionKind::Method
                };
                scoped.resolve_function(method, kind);
            }
        });
    }

    fn resolve_function(&mut self, function: FunctionId, kind: FunctionKind) {
        let enclosing = std::mem::replace(&mut self.function, kind);
        let arena = self.arena;
        let decl = arena.get_function(function);

        self.with_scope(|scoped| {
            for &param in arena.get_params(decl.params) {
                scoped.declare(param);
                scoped.define(param.name);
            }
            scoped.resolve_statements(arena.get_stmt_list(decl.body));
        });

        self.function = enclosing;
    }

    fn resolve_expr(&mut self, id: ExprId) {
        ensure_sufficient_stack(|| self.resolve_expr_inner(id));
    }

    fn resolve_expr_inner(&mut self, id: ExprId) {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Assign { target, value } => {
                self.resolve_expr(value);
                self.resolve_local(id, target.name);
            }
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            ExprKind::Call { callee, args } => {
                self.resolve_expr(callee);
                for &arg in self.arena.get_expr_list(args) {
                    self.resolve_expr(arg);
                }
            }
            ExprKind::Get { object, .. } => self.resolve_expr(object),
            ExprKind::Grouping(inner) => self.resolve_expr(inner),
            ExprKind::Literal(_) => {}
            ExprKind::Set { object, value, .. } => {
                self.resolve_expr(value);
                self.resolve_expr(object);
            }
            ExprKind::Super { .. } => {
                match self.class {
                    ClassKind::None => self.error(
                        expr.line,
                        "super",
                        ErrorCode::E2006,
                        "Can't use 'super' outside of a class.",
                    ),
                    ClassKind::Class => self.error(
                        expr.line,
                        "super",
                        ErrorCode::E2007,
                        "Can't use 'super' in a class with no superclass.",
                    ),
                    ClassKind::Subclass => {}
                }
                self.resolve_local(id, Name::SUPER);
            }
            ExprKind::This => {
                if self.class == ClassKind::None {
                    self.error(
                        expr.line,
                        "this",
                        ErrorCode::E2005,
                        "Can't use 'this' outside of a class.",
                    );
                    return;
                }
                self.resolve_local(id, Name::THIS);
            }
            ExprKind::Unary { operand, .. } => self.resolve_expr(operand),
            ExprKind::Variable(name) => {
                let in_own_initializer = self
                    .scopes
                    .last()
                    .and_then(|scope| scope.get(&name.name))
                    .is_some_and(|local| !local.defined);
                if in_own_initializer {
                    self.error_at_ident(
                        name,
                        ErrorCode::E2001,
                        "Can't read local variable in its own initializer.",
                    );
                }
                self.resolve_local(id, name.name);
            }
        }
    }
}
