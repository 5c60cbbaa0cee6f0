mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_func;
pub use expr_func::ExprFunc;

mod formula;
pub use formula::Formula;

mod func;
pub use func::{Arity, Func};

mod op_binary;
pub use op_binary::BinaryOp;

mod projection;
pub use projection::Projection;

mod sort;
pub use sort::Sort;

mod value;
pub use value::Value;
