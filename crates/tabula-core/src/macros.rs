/// Converts a heterogeneous list of operands into a `Vec<Expr>`.
///
/// ```
/// # use tabula_core::{exprs, schema::{Field, FieldTy}, stmt::Expr};
/// let name = Field::new(FieldTy::Text, "Full Name");
/// let args: Vec<Expr> = exprs!["Name: ", &name, 42];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! exprs {
    ( $( $operand:expr ),* $(,)? ) => {
        {
            let exprs: ::std::vec::Vec<$crate::stmt::Expr> =
                ::std::vec![ $( $crate::stmt::Expr::from($operand), )* ];
            exprs
        }
    };
}
