use tracing::debug;

use crate::encode;
use crate::error::AsmError;
use crate::opcode;

/// Translate one source line, appending its bytes to `out`.
///
/// Blank lines and full-line comments (leading `;`) produce nothing. An
/// unrecognized mnemonic produces nothing in permissive mode and is a hard
/// error in strict mode.
pub fn parse_line(
    out: &mut Vec<u8>,
    raw: &str,
    line_no: usize,
    strict: bool,
) -> Result<(), AsmError> {
    let line = raw.trim();
    if line.is_empty() {
        return Ok(());
    }
    if line.starts_with(';') {
        debug!(line_no, comment = line, "comment");
        return Ok(());
    }

    let mut tokens = line.split_whitespace();
    let Some(mnemonic) = tokens.next() else {
        return Ok(());
    };
    let Some(desc) = opcode::lookup(mnemonic) else {
        if strict {
            return Err(AsmError::UnknownMnemonic {
                line_no,
                mnemonic: mnemonic.to_string(),
            });
        }
        debug!(line_no, mnemonic, "skipping unknown mnemonic");
        return Ok(());
    };

    let rest: Vec<&str> = tokens.collect();
    let pieces = encode::split_operands(&rest);
    let operands = encode::encode_operands(desc.mnemonic, desc.shape, &pieces, line_no)?;
    out.push(desc.code);
    out.extend_from_slice(&operands);
    Ok(())
}
