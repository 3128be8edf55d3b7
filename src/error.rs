#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("line {line_no}: unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic { line_no: usize, mnemonic: String },
    #[error("line {line_no}: register operand `{token}` is not a decimal integer")]
    MalformedOperand { line_no: usize, token: String },
    #[error("line {line_no}: expected immediate #num or $num, got `{token}`")]
    InvalidImmediateSyntax { line_no: usize, token: String },
    #[error("line {line_no}: {mnemonic} takes {expected} operand(s), found {found}")]
    OperandCountMismatch {
        line_no: usize,
        mnemonic: String,
        expected: usize,
        found: usize,
    },
}
