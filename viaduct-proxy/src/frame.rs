//! The application frame above the reliable stream.
//!
//! ```text
//! 0x4567 | cmd u16 | head_len u16 | body_len u32 | head | body | 0x89AB
//! ```
//! All header fields big-endian; total length is `12 + head_len + body_len`.

use crate::errors::FrameError;

pub(crate) const HEAD_MAGIC: [u8; 2] = [0x45, 0x67];
pub(crate) const TAIL_MAGIC: [u8; 2] = [0x89, 0xAB];

/// Fixed overhead: both magics plus the three header fields.
pub(crate) const FRAME_OVERHEAD: usize = 12;

/// A parsed frame borrowing the payload buffer.
#[derive(Debug)]
pub(crate) struct Frame<'a> {
    pub(crate) cmd: u16,
    pub(crate) head: &'a [u8],
    pub(crate) body: &'a [u8],
}

/// Whether the buffer starts and ends with the frame magics.
pub(crate) fn is_framed(payload: &[u8]) -> bool {
    payload.len() >= 4
        && payload[0..2] == HEAD_MAGIC
        && payload[payload.len() - 2..] == TAIL_MAGIC
}

/// Parse one frame, verifying magics and the length equation.
pub(crate) fn parse(payload: &[u8]) -> Result<Frame<'_>, FrameError> {
    let n = payload.len();
    if n < FRAME_OVERHEAD {
        return Err(FrameError::TooShort);
    }
    if !is_framed(payload) {
        return Err(FrameError::BadMagic);
    }
    let cmd = u16::from_be_bytes(payload[2..4].try_into().unwrap());
    let head_len = u16::from_be_bytes(payload[4..6].try_into().unwrap()) as usize;
    let body_len = u32::from_be_bytes(payload[6..10].try_into().unwrap()) as usize;
    if n != FRAME_OVERHEAD + head_len + body_len {
        return Err(FrameError::LengthMismatch);
    }
    Ok(Frame {
        cmd,
        head: &payload[10..10 + head_len],
        body: &payload[10 + head_len..10 + head_len + body_len],
    })
}

/// Build a frame from its parts.
pub(crate) fn build(cmd: u16, head: &[u8], body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(FRAME_OVERHEAD + head.len() + body.len());
    out.extend_from_slice(&HEAD_MAGIC);
    out.extend_from_slice(&cmd.to_be_bytes());
    out.extend_from_slice(&(head.len() as u16).to_be_bytes());
    out.extend_from_slice(&(body.len() as u32).to_be_bytes());
    out.extend_from_slice(head);
    out.extend_from_slice(body);
    out.extend_from_slice(&TAIL_MAGIC);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_round_trips() {
        let head = [1u8, 2, 3];
        let body = [9u8; 70];
        let wire = build(0x1234, &head, &body);
        assert_eq!(wire.len(), FRAME_OVERHEAD + head.len() + body.len());

        let frame = parse(&wire).unwrap();
        assert_eq!(frame.cmd, 0x1234);
        assert_eq!(frame.head, &head);
        assert_eq!(frame.body, &body);
    }

    #[test]
    fn empty_head_and_body() {
        let wire = build(7, &[], &[]);
        assert_eq!(wire.len(), FRAME_OVERHEAD);
        let frame = parse(&wire).unwrap();
        assert_eq!(frame.cmd, 7);
        assert!(frame.head.is_empty());
        assert!(frame.body.is_empty());
    }

    #[test]
    fn rejects_bad_magic_and_length() {
        let mut wire = build(7, &[1], &[2, 3]);
        assert_eq!(parse(&wire[..5]).unwrap_err(), FrameError::TooShort);

        wire[0] = 0x00;
        assert_eq!(parse(&wire).unwrap_err(), FrameError::BadMagic);
        wire[0] = 0x45;

        // Claim one more body byte than is present.
        wire[9] += 1;
        assert_eq!(parse(&wire).unwrap_err(), FrameError::LengthMismatch);
    }
}
