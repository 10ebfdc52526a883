//! The abstract syntax tree.
//!
//! spec.md §9 flags the original's single tagged-variant node (a `kind`
//! field plus up to three generic children and a sibling link) as a design
//! smell and recommends a discriminated union instead — `Program`, `Block`,
//! `If`, `While`, `Decl`, `Assign`, `Exit`, `Write`, `Binary`, `IntLit`,
//! `Ident`, `StringLit` each become their own `Stmt`/`Expr` variant here,
//! carrying exactly the fields that shape needs. `Vec<Stmt>` replaces the
//! `next` sibling-link chain for statement lists.

/// The root of a parsed program: its top-level statements in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// A statement. `Block` and the bodies of `If`/`While` hold `Vec<Stmt>`
/// rather than a hand-rolled linked list — see the module doc comment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    /// `int IDENT = expression ;`
    Decl { name: String, init: Expr, line: u32 },
    /// `IDENT = expression ;`
    Assign { name: String, value: Expr, line: u32 },
    /// `if ( expression ) then_body [ else_body ]`. `else_body` is always
    /// `None` unless the grammar is extended with `else` — spec.md §4.2's
    /// "Dangling else" note.
    If {
        cond: Expr,
        then_body: Vec<Stmt>,
        else_body: Option<Vec<Stmt>>,
        line: u32,
    },
    /// `while ( expression ) body`
    While {
        cond: Expr,
        body: Vec<Stmt>,
        line: u32,
    },
    /// `exit ( expression ) ;`
    Exit { value: Expr, line: u32 },
    /// `write ( expression , expression ) ;`. `ignored` is the first
    /// argument, accepted by the grammar and never consulted by code
    /// generation (spec.md §3, §9).
    Write {
        ignored: Expr,
        value: Expr,
        line: u32,
    },
    /// A bare `{ statement* }`, standing on its own without being the
    /// body of an `if`/`while`.
    Block(Vec<Stmt>),
}

/// An expression. Per spec.md §9, precedence is intentionally absent: a
/// `Binary` node has exactly one operator and two `Factor` operands, never
/// a nested `Binary` produced by precedence climbing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    IntLit(i64),
    Ident(String),
    StringLit(String),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// The operator of a `Binary` expression: the five arithmetic operators
/// from the token grammar, the four keyword comparators, plus `LessEq`/
/// `GreaterEq`. The grammar's comparator keywords (`eq`/`neq`/`less`/
/// `greater`) never produce the last two — spec.md §4.3's immediate-form
/// lowering table specifies encodings for all six comparisons, so
/// `rvcc-gen` implements `LessEq`/`GreaterEq` too and exercises them with
/// hand-built ASTs even though no parser production reaches them today.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Eq,
    Neq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
}

impl BinOp {
    /// Maps a token lexeme (operator symbol or canonical comparator
    /// spelling) to its `BinOp`, or `None` if it isn't a binary operator.
    /// `LessEq`/`GreaterEq` have no surface syntax and so no lexeme here —
    /// they are only reachable by constructing `Expr::Binary` directly.
    pub fn from_token_value(value: &str) -> Option<Self> {
        Some(match value {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            "%" => BinOp::Rem,
            "EQ" => BinOp::Eq,
            "NEQ" => BinOp::Neq,
            "LESS" => BinOp::Less,
            "GREATER" => BinOp::Greater,
            _ => return None,
        })
    }
}
