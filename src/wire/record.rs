use super::*;
use byteorder::ByteOrder;
use byteorder::BE;
use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

/// Leading four bytes of every record.
pub const MAGIC: u32 = 0xABCDDCBA;
/// Magic constant plus type tag.
pub const HEADER: usize = 5;

/// Type tag, the fifth byte of every record.
///
/// Server payloads and client decisions share [`Kind::Payload`]; which one
/// a peer expects is fixed by the turn order, not by the bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Offer = 0x02,
    Request = 0x03,
    Payload = 0x04,
}

impl From<Kind> for u8 {
    fn from(k: Kind) -> u8 {
        k as u8
    }
}

/// Schema of one fixed-length, big-endian message kind.
///
/// Implementors describe only their body. Header checks happen here, once,
/// and a record either decodes completely or not at all.
pub trait Record: Sized {
    const KIND: Kind;
    /// Total encoded length, header included.
    const SIZE: usize;

    /// Appends exactly `SIZE - HEADER` body bytes.
    fn write(&self, buf: &mut BytesMut);
    /// Parses a body of exactly `SIZE - HEADER` bytes.
    fn read(body: &[u8]) -> Result<Self, WireError>;

    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::SIZE);
        buf.put_u32(MAGIC);
        buf.put_u8(u8::from(Self::KIND));
        self.write(&mut buf);
        debug_assert_eq!(buf.len(), Self::SIZE);
        buf.freeze()
    }

    /// Trailing bytes past `SIZE` are ignored.
    fn decode(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() < Self::SIZE {
            return Err(WireError::Truncated {
                need: Self::SIZE,
                have: bytes.len(),
            });
        }
        match (BE::read_u32(&bytes[..4]), bytes[4]) {
            (magic, _) if magic != MAGIC => Err(WireError::Magic(magic)),
            (_, kind) if kind != u8::from(Self::KIND) => Err(WireError::Kind(kind)),
            _ => Self::read(&bytes[HEADER..Self::SIZE]),
        }
    }
}

/// Quick check for the magic constant without decoding anything else.
pub fn is_magic(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && BE::read_u32(&bytes[..4]) == MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_prefix() {
        assert!(is_magic(&[0xAB, 0xCD, 0xDC, 0xBA, 0x00]));
        assert!(!is_magic(&[0xAB, 0xCD, 0xDC]));
        assert!(!is_magic(&[0xBA, 0xDC, 0xCD, 0xAB]));
    }

    #[test]
    fn kind_tags() {
        assert_eq!(u8::from(Kind::Offer), 0x02);
        assert_eq!(u8::from(Kind::Request), 0x03);
        assert_eq!(u8::from(Kind::Payload), 0x04);
    }
}
