//! Binding power levels for the expression parser
//!
//! Binary operators are left-associative: the right operand is parsed with
//! the operator's binding power plus one.

pub const BP_LOWEST: u8 = 0;
/// `+` and `-`
pub const BP_TERM: u8 = 20;
/// `*` and `/`
pub const BP_FACTOR: u8 = 40;

/// Minimum binding power for the right operand of an operator with `bp`
pub const fn right_bp(bp: u8) -> u8 {
    bp + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::core::lexer::BinOp;

    #[test]
    fn test_factor_binds_tighter_than_term() {
        assert!(BP_FACTOR > BP_TERM);
        assert!(BP_TERM > BP_LOWEST);
        assert_eq!(BinOp::Mul.precedence(), BinOp::Div.precedence());
        assert_eq!(BinOp::Add.precedence(), BinOp::Sub.precedence());
        assert!(BinOp::Mul.precedence() > BinOp::Sub.precedence());
    }

    #[test]
    fn test_right_bp_excludes_same_level() {
        assert!(right_bp(BP_TERM) > BP_TERM);
        assert!(right_bp(BP_TERM) < BP_FACTOR);
    }
}
