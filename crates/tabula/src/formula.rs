//! Builders for filter formulas.
//!
//! Every function returns an [`Expr`] node; [`compile`] renders a tree to the
//! text the record store expects.
//!
//! ```
//! use tabula::{formula::{and, eq, gt, lower}, compile, number, text};
//!
//! let name = text("Full Name");
//! let age = number("Years Old");
//!
//! let expr = and([gt(&age, 18), eq(lower(&name), "dave")]);
//! assert_eq!(compile(&expr), "AND(({Years Old} > 18), (LOWER({Full Name}) = 'dave'))");
//! ```
//!
//! String literals are inserted between single quotes without escaping. A
//! literal containing `'` produces a broken or different formula; a warning is
//! logged when that happens.

pub use tabula_core::stmt::{Expr, Formula};

/// Renders an expression to formula text.
pub fn compile(expr: &Expr) -> Formula {
    tabula_formula::serialize(expr)
}

pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::eq(lhs, rhs)
}

pub fn neq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::ne(lhs, rhs)
}

pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::gt(lhs, rhs)
}

pub fn gte(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::ge(lhs, rhs)
}

pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::lt(lhs, rhs)
}

pub fn lte(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::le(lhs, rhs)
}

pub fn and<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::and(operands)
}

pub fn or<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::or(operands)
}

pub fn not(expr: impl Into<Expr>) -> Expr {
    Expr::not(expr)
}

pub fn concatenate<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::concatenate(operands)
}

pub fn sum<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::sum(operands)
}

pub fn average<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::average(operands)
}

pub fn min<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::min(operands)
}

pub fn max<I>(operands: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::max(operands)
}

/// `IF(condition, if_true, if_false)`
pub fn ifs(condition: impl Into<Expr>, if_true: impl Into<Expr>, if_false: impl Into<Expr>) -> Expr {
    Expr::if_then_else(condition, if_true, if_false)
}

pub fn blank() -> Expr {
    Expr::blank()
}

pub fn error() -> Expr {
    Expr::error()
}

pub fn lower(text: impl Into<Expr>) -> Expr {
    Expr::lower(text)
}

pub fn upper(text: impl Into<Expr>) -> Expr {
    Expr::upper(text)
}

pub fn trim(text: impl Into<Expr>) -> Expr {
    Expr::trim(text)
}

pub fn len(text: impl Into<Expr>) -> Expr {
    Expr::len(text)
}
