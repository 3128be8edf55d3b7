use crate::error::AsmError;
use crate::parse::parse_line;

/// Assembler configuration. Defaults to the permissive behavior where lines
/// with an unrecognized mnemonic are skipped silently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Assembler {
    pub strict: bool,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat unknown mnemonics as `UnknownMnemonic` errors instead of
    /// skipping the line.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Fold the line parser over `lines` in order, producing the output
    /// image. Any operand-level failure aborts the whole run; there is no
    /// partial output.
    pub fn assemble<I, S>(&self, lines: I) -> Result<Vec<u8>, AsmError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            parse_line(&mut out, line.as_ref(), i + 1, self.strict)?;
        }
        Ok(out)
    }

    pub fn assemble_str(&self, src: &str) -> Result<Vec<u8>, AsmError> {
        self.assemble(src.lines())
    }
}

/// Assemble with the default (permissive) configuration.
pub fn assemble<I, S>(lines: I) -> Result<Vec<u8>, AsmError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Assembler::new().assemble(lines)
}
