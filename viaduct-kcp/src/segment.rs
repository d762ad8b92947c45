//! Wire codecs: 28-byte little-endian segment headers and 20-byte
//! big-endian control datagrams.

use crate::pool::XMIT_POOL;
use crate::TransportError;

pub(crate) const CMD_PUSH: u8 = 81;
pub(crate) const CMD_ACK: u8 = 82;
pub(crate) const CMD_WASK: u8 = 83;
pub(crate) const CMD_WINS: u8 = 84;

/// Segment header length.
pub(crate) const OVERHEAD: usize = 28;

pub(crate) const CONTROL_SYN: u32 = 0x0000_00FF;
pub(crate) const CONTROL_ACK: u32 = 0x0000_0145;
pub(crate) const CONTROL_FIN: u32 = 0x0000_0194;

/// `message` value carried by a client SYN.
pub(crate) const CONTROL_MESSAGE_CLIENT_APP: u32 = 1_234_567_890;

/// One ARQ segment, either queued for sending or buffered on receive.
pub(crate) struct Segment {
    pub(crate) conv_id: u32,
    pub(crate) session_id: u32,
    pub(crate) cmd: u8,
    pub(crate) frg: u8,
    pub(crate) wnd: u16,
    pub(crate) ts: u32,
    pub(crate) sn: u32,
    pub(crate) una: u32,
    pub(crate) body: Vec<u8>,

    // Sender-side bookkeeping.
    pub(crate) rto: u32,
    pub(crate) xmit: u32,
    pub(crate) resend_ts: u32,
    pub(crate) fast_ack: u32,
    pub(crate) acked: bool,
}

impl Segment {
    /// A segment with a pooled body of `size` bytes.
    pub(crate) fn with_body(size: usize) -> Self {
        Self {
            conv_id: 0,
            session_id: 0,
            cmd: 0,
            frg: 0,
            wnd: 0,
            ts: 0,
            sn: 0,
            una: 0,
            body: XMIT_POOL.take(size),
            rto: 0,
            xmit: 0,
            resend_ts: 0,
            fast_ack: 0,
            acked: false,
        }
    }

    /// Return the body to the pool.
    pub(crate) fn recycle(&mut self) {
        if !self.body.is_empty() || self.body.capacity() > 0 {
            XMIT_POOL.put(std::mem::take(&mut self.body));
        }
    }

    /// Write the 28-byte header into `out` at `at`, returning the next
    /// write position.
    pub(crate) fn encode_head(&self, out: &mut [u8], at: usize) -> usize {
        let b = &mut out[at..at + OVERHEAD];
        b[0..4].copy_from_slice(&self.conv_id.to_le_bytes());
        b[4..8].copy_from_slice(&self.session_id.to_le_bytes());
        b[8] = self.cmd;
        b[9] = self.frg;
        b[10..12].copy_from_slice(&self.wnd.to_le_bytes());
        b[12..16].copy_from_slice(&self.ts.to_le_bytes());
        b[16..20].copy_from_slice(&self.sn.to_le_bytes());
        b[20..24].copy_from_slice(&self.una.to_le_bytes());
        b[24..28].copy_from_slice(&(self.body.len() as u32).to_le_bytes());
        at + OVERHEAD
    }
}

/// Parsed view of a segment header.
#[derive(Clone, Copy)]
pub(crate) struct SegmentHead {
    pub(crate) conv_id: u32,
    pub(crate) session_id: u32,
    pub(crate) cmd: u8,
    pub(crate) frg: u8,
    pub(crate) wnd: u16,
    pub(crate) ts: u32,
    pub(crate) sn: u32,
    pub(crate) una: u32,
    pub(crate) len: usize,
}

impl SegmentHead {
    pub(crate) fn parse(b: &[u8]) -> Result<Self, TransportError> {
        if b.len() < OVERHEAD {
            return Err(TransportError::Truncated);
        }
        Ok(Self {
            conv_id: u32::from_le_bytes(b[0..4].try_into().unwrap()),
            session_id: u32::from_le_bytes(b[4..8].try_into().unwrap()),
            cmd: b[8],
            frg: b[9],
            wnd: u16::from_le_bytes(b[10..12].try_into().unwrap()),
            ts: u32::from_le_bytes(b[12..16].try_into().unwrap()),
            sn: u32::from_le_bytes(b[16..20].try_into().unwrap()),
            una: u32::from_le_bytes(b[20..24].try_into().unwrap()),
            len: u32::from_le_bytes(b[24..28].try_into().unwrap()) as usize,
        })
    }
}

/// The 20-byte out-of-band control datagram (big-endian).
pub(crate) struct ControlData(pub(crate) [u8; 20]);

impl ControlData {
    pub(crate) fn new(command: u32, conv_id: u32, session_id: u32, message: u32) -> Self {
        let mut b = [0u8; 20];
        b[0..4].copy_from_slice(&command.to_be_bytes());
        b[4..8].copy_from_slice(&conv_id.to_be_bytes());
        b[8..12].copy_from_slice(&session_id.to_be_bytes());
        b[12..16].copy_from_slice(&message.to_be_bytes());
        b[16..20].copy_from_slice(&match command {
            CONTROL_SYN => [0xFF, 0xFF, 0xFF, 0xFF],
            CONTROL_ACK => [0x14, 0x51, 0x45, 0x45],
            CONTROL_FIN => [0x19, 0x41, 0x94, 0x94],
            _ => [0, 0, 0, 0],
        });
        Self(b)
    }

    pub(crate) fn parse(b: &[u8]) -> Result<Self, TransportError> {
        let raw: [u8; 20] = b.try_into().map_err(|_| TransportError::InvalidPacket)?;
        Ok(Self(raw))
    }

    pub(crate) fn command(&self) -> u32 {
        u32::from_be_bytes(self.0[0..4].try_into().unwrap())
    }

    pub(crate) fn conv_id(&self) -> u32 {
        u32::from_be_bytes(self.0[4..8].try_into().unwrap())
    }

    pub(crate) fn session_id(&self) -> u32 {
        u32::from_be_bytes(self.0[8..12].try_into().unwrap())
    }

    pub(crate) fn message(&self) -> u32 {
        u32::from_be_bytes(self.0[12..16].try_into().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_head_round_trips() {
        let mut seg = Segment::with_body(3);
        seg.conv_id = 7;
        seg.session_id = 0xDEAD_BEEF;
        seg.cmd = CMD_PUSH;
        seg.frg = 2;
        seg.wnd = 255;
        seg.ts = 1000;
        seg.sn = 42;
        seg.una = 41;

        let mut buf = [0u8; OVERHEAD];
        assert_eq!(seg.encode_head(&mut buf, 0), OVERHEAD);
        let head = SegmentHead::parse(&buf).unwrap();
        assert_eq!(head.conv_id, 7);
        assert_eq!(head.session_id, 0xDEAD_BEEF);
        assert_eq!(head.cmd, CMD_PUSH);
        assert_eq!(head.frg, 2);
        assert_eq!(head.wnd, 255);
        assert_eq!(head.ts, 1000);
        assert_eq!(head.sn, 42);
        assert_eq!(head.una, 41);
        assert_eq!(head.len, 3);
        seg.recycle();
    }

    #[test]
    fn control_data_magic_suffixes() {
        let syn = ControlData::new(CONTROL_SYN, 0, 0, CONTROL_MESSAGE_CLIENT_APP);
        assert_eq!(&syn.0[16..], &[0xFF, 0xFF, 0xFF, 0xFF]);
        assert_eq!(syn.command(), CONTROL_SYN);
        assert_eq!(syn.message(), 1_234_567_890);

        let ack = ControlData::new(CONTROL_ACK, 1, 2, 3);
        assert_eq!(&ack.0[16..], &[0x14, 0x51, 0x45, 0x45]);
        assert_eq!(ack.conv_id(), 1);
        assert_eq!(ack.session_id(), 2);

        let fin = ControlData::new(CONTROL_FIN, 1, 2, 4);
        assert_eq!(&fin.0[16..], &[0x19, 0x41, 0x94, 0x94]);
    }
}
