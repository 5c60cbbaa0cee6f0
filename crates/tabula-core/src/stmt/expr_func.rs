use super::{Expr, Func};

/// A function call: `NAME(arg1, arg2, ...)`.
///
/// Arguments keep the order in which they were given.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub func: Func,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn func<I>(func: Func, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        ExprFunc {
            func,
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    fn unary(func: Func, arg: impl Into<Expr>) -> Self {
        ExprFunc {
            func,
            args: vec![arg.into()],
        }
        .into()
    }

    pub fn and<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::func(Func::And, operands)
    }

    pub fn or<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::func(Func::Or, operands)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(expr: impl Into<Expr>) -> Self {
        Expr::unary(Func::Not, expr)
    }

    pub fn concatenate<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::func(Func::Concatenate, operands)
    }

    pub fn sum<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::func(Func::Sum, operands)
    }

    pub fn average<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::func(Func::Average, operands)
    }

    pub fn min<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::func(Func::Min, operands)
    }

    pub fn max<I>(operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Expr::func(Func::Max, operands)
    }

    /// `IF(cond, then, otherwise)`
    pub fn if_then_else(
        cond: impl Into<Expr>,
        then: impl Into<Expr>,
        otherwise: impl Into<Expr>,
    ) -> Self {
        ExprFunc {
            func: Func::If,
            args: vec![cond.into(), then.into(), otherwise.into()],
        }
        .into()
    }

    pub fn lower(text: impl Into<Expr>) -> Self {
        Expr::unary(Func::Lower, text)
    }

    pub fn upper(text: impl Into<Expr>) -> Self {
        Expr::unary(Func::Upper, text)
    }

    pub fn trim(text: impl Into<Expr>) -> Self {
        Expr::unary(Func::Trim, text)
    }

    pub fn len(text: impl Into<Expr>) -> Self {
        Expr::unary(Func::Len, text)
    }

    pub fn blank() -> Self {
        ExprFunc {
            func: Func::Blank,
            args: vec![],
        }
        .into()
    }

    pub fn error() -> Self {
        ExprFunc {
            func: Func::Error,
            args: vec![],
        }
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
