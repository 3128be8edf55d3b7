use crate::error::AsmError;
use crate::opcode::OperandKind;

/// Split the tokens after the mnemonic into one trimmed piece per operand:
/// rejoin with single spaces, then split on commas. An operand may therefore
/// be written as `1,2` or `1 , 2` interchangeably.
pub fn split_operands(tokens: &[&str]) -> Vec<String> {
    tokens
        .join(" ")
        .split(',')
        .map(|p| p.trim().to_string())
        .collect()
}

/// Encode the operand pieces against a shape. The i-th shape entry consumes
/// the i-th piece; extra pieces are ignored, missing ones are fatal.
pub fn encode_operands(
    mnemonic: &str,
    shape: &[OperandKind],
    pieces: &[String],
    line_no: usize,
) -> Result<Vec<u8>, AsmError> {
    let mut out = Vec::with_capacity(shape.iter().map(|k| k.width()).sum());
    for (i, kind) in shape.iter().enumerate() {
        let piece = pieces.get(i).ok_or_else(|| AsmError::OperandCountMismatch {
            line_no,
            mnemonic: mnemonic.to_string(),
            expected: shape.len(),
            found: pieces.len(),
        })?;
        match kind {
            OperandKind::Register => out.push(encode_register(piece, line_no)?),
            OperandKind::Immediate => out.extend_from_slice(&encode_immediate(piece, line_no)?),
        }
    }
    Ok(out)
}

/// Register index: base-10 integer, truncated to the low 8 bits.
fn encode_register(token: &str, line_no: usize) -> Result<u8, AsmError> {
    let v = token
        .parse::<i64>()
        .map_err(|_| AsmError::MalformedOperand {
            line_no,
            token: token.to_string(),
        })?;
    Ok(v as u8)
}

/// Immediate: `#` decimal or `$` hex marker, value truncated mod 2^64 and
/// emitted most-significant byte first.
fn encode_immediate(token: &str, line_no: usize) -> Result<[u8; 8], AsmError> {
    let bad = || AsmError::InvalidImmediateSyntax {
        line_no,
        token: token.to_string(),
    };
    let (radix, body) = match token.as_bytes().first() {
        Some(b'#') => (10, &token[1..]),
        Some(b'$') => (16, &token[1..]),
        _ => return Err(bad()),
    };
    // Parse wide, then truncate: overflow past 64 bits wraps rather than errors.
    let v = u128::from_str_radix(body, radix).map_err(|_| bad())?;
    Ok((v as u64).to_be_bytes())
}
