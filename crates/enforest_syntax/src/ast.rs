//! Abstract Syntax Tree definitions produced by the enforester.
//!
//! Each recognized construct maps to exactly one node kind. Nodes carry source spans through
//! [`Spanned`] so diagnostics and tooling can point back into the original text.
//!
//! ## Notes
//! - Parentheses never produce a node of their own: `(1 + 2) * 3` is a `*` node whose left operand is the `+` node.
//! - Operators are stored as registry ids ([`OperatorId`]); their spelling comes from `enforest_core::lang::operators`.
//! - `Display` renders a compact S-expression (`(+ 1 (* 2 3))`). It is stable and used by snapshot tests.

use std::fmt;

use enforest_core::lang::operators::{self, OperatorId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier spelling.
pub type Ident = String;

/// A program is a sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    Empty,
    Expression(Spanned<Expr>),
    While(WhileStatement),
    If(IfStatement),
    For(ForStatement),
    FunctionDeclaration(FunctionDeclaration),
    VariableDeclaration(VariableDeclaration),
}

/// The statements of a `{ ... }` group.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub test: Spanned<Expr>,
    pub body: Box<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: Spanned<Expr>,
    pub consequent: Box<Spanned<Statement>>,
    pub alternate: Option<Box<Spanned<Statement>>>,
}

/// Classic three-clause `for (init; test; update) body`. Every clause is optional.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Spanned<Expr>>,
    pub update: Option<Spanned<Expr>>,
    pub body: Box<Spanned<Statement>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VariableDeclaration(Spanned<VariableDeclaration>),
    Expression(Spanned<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: Spanned<BindingIdentifier>,
    pub params: FormalParameters,
    pub body: Block,
}

// ============================================================================
// Bindings
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingIdentifier {
    pub name: Ident,
}

/// One entry of a formal-parameter list.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingElement {
    Identifier(BindingIdentifier),
    /// `target = default`
    WithDefault {
        binding: Spanned<BindingIdentifier>,
        init: Spanned<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormalParameters {
    pub items: Vec<Spanned<BindingElement>>,
    /// Trailing `...name` parameter.
    pub rest: Option<Spanned<BindingIdentifier>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarators: Vec<Spanned<VariableDeclarator>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub binding: Spanned<BindingIdentifier>,
    pub init: Option<Spanned<Expr>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(Ident),
    Template(Vec<TemplateElement>),
    Unary {
        operator: OperatorId,
        operand: Box<Spanned<Expr>>,
    },
    Binary {
        left: Box<Spanned<Expr>>,
        operator: OperatorId,
        right: Box<Spanned<Expr>>,
    },
    Assignment {
        target: Box<Spanned<Expr>>,
        operator: OperatorId,
        value: Box<Spanned<Expr>>,
    },
    /// `left, right` (left-associated).
    Sequence {
        left: Box<Spanned<Expr>>,
        right: Box<Spanned<Expr>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(String),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplateElement {
    Fragment(String),
    Interpolation(Spanned<Expr>),
}

impl Expr {
    /// Return `true` if this expression may appear on the left of an assignment operator.
    pub fn is_assignment_target(&self) -> bool {
        matches!(self, Expr::Identifier(_))
    }
}

// ============================================================================
// S-expression rendering
// ============================================================================

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", stmt.node)?;
        }
        Ok(())
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(block")?;
        for stmt in &self.statements {
            write!(f, " {}", stmt.node)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Block(block) => write!(f, "{}", block),
            Statement::Empty => write!(f, "(empty)"),
            Statement::Expression(expr) => write!(f, "(expr {})", expr.node),
            Statement::While(w) => write!(f, "(while {} {})", w.test.node, w.body.node),
            Statement::If(i) => {
                write!(f, "(if {} {}", i.test.node, i.consequent.node)?;
                if let Some(alt) = &i.alternate {
                    write!(f, " {}", alt.node)?;
                }
                write!(f, ")")
            }
            Statement::For(s) => {
                write!(f, "(for ")?;
                match &s.init {
                    Some(ForInit::VariableDeclaration(decl)) => write!(f, "{}", decl.node)?,
                    Some(ForInit::Expression(expr)) => write!(f, "{}", expr.node)?,
                    None => write!(f, "_")?,
                }
                match &s.test {
                    Some(test) => write!(f, " {}", test.node)?,
                    None => write!(f, " _")?,
                }
                match &s.update {
                    Some(update) => write!(f, " {}", update.node)?,
                    None => write!(f, " _")?,
                }
                write!(f, " {})", s.body.node)
            }
            Statement::FunctionDeclaration(func) => {
                write!(f, "(function {} {} {})", func.name.node.name, func.params, func.body)
            }
            Statement::VariableDeclaration(decl) => write!(f, "{}", decl),
        }
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.kind)?;
        for declarator in &self.declarators {
            let d = &declarator.node;
            match &d.init {
                Some(init) => write!(f, " ({} {})", d.binding.node.name, init.node)?,
                None => write!(f, " ({})", d.binding.node.name)?,
            }
        }
        write!(f, ")")
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Var => write!(f, "var"),
            VariableKind::Let => write!(f, "let"),
            VariableKind::Const => write!(f, "const"),
        }
    }
}

impl fmt::Display for FormalParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        for item in &self.items {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            match &item.node {
                BindingElement::Identifier(binding) => write!(f, "{}", binding.name)?,
                BindingElement::WithDefault { binding, init } => {
                    write!(f, "(= {} {})", binding.node.name, init.node)?
                }
            }
        }
        if let Some(rest) = &self.rest {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "...{}", rest.node.name)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{}", lit),
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::Template(elements) => {
                write!(f, "(template")?;
                for element in elements {
                    match element {
                        TemplateElement::Fragment(text) => write!(f, " {:?}", text)?,
                        TemplateElement::Interpolation(expr) => write!(f, " {}", expr.node)?,
                    }
                }
                write!(f, ")")
            }
            Expr::Unary { operator, operand } => {
                write!(f, "({} {})", operators::as_str(*operator), operand.node)
            }
            Expr::Binary { left, operator, right } => {
                write!(f, "({} {} {})", operators::as_str(*operator), left.node, right.node)
            }
            Expr::Assignment {
                target,
                operator,
                value,
            } => write!(f, "({} {} {})", operators::as_str(*operator), target.node, value.node),
            Expr::Sequence { left, right } => write!(f, "(, {} {})", left.node, right.node),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Boolean(b) => write!(f, "{}", b),
            Literal::Null => write!(f, "null"),
        }
    }
}
