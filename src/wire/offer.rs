use super::*;
use byteorder::ByteOrder;
use byteorder::BE;
use bytes::BufMut;
use bytes::BytesMut;

/// Dealer advertisement broadcast over UDP.
///
/// | magic:4 | type:1 = 0x02 | tcp_port:2 | name:32 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    port: u16,
    name: String,
}

impl Offer {
    pub fn new(port: u16, name: &str) -> Self {
        Self {
            port,
            name: name.to_string(),
        }
    }
    /// TCP port the dealer accepts on.
    pub fn port(&self) -> u16 {
        self.port
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Record for Offer {
    const KIND: Kind = Kind::Offer;
    const SIZE: usize = HEADER + 2 + NAME_LEN;

    fn write(&self, buf: &mut BytesMut) {
        buf.put_u16(self.port);
        buf.put_slice(&pack(&self.name));
    }
    fn read(body: &[u8]) -> Result<Self, WireError> {
        Ok(Self {
            port: BE::read_u16(&body[..2]),
            name: unpack(&body[2..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout() {
        let bytes = Offer::new(0x1234, "dealer").encode();
        assert_eq!(bytes.len(), 39);
        assert_eq!(&bytes[..4], &[0xAB, 0xCD, 0xDC, 0xBA]);
        assert_eq!(bytes[4], 0x02);
        assert_eq!(&bytes[5..7], &[0x12, 0x34]);
        assert_eq!(&bytes[7..13], b"dealer");
        assert!(bytes[13..].iter().all(|b| *b == 0));
    }

    #[test]
    fn round_trip_port_bounds() {
        for port in [0, 1, 13122, u16::MAX] {
            let offer = Offer::new(port, "The Socket Wizards");
            assert_eq!(Offer::decode(&offer.encode()), Ok(offer));
        }
    }

    #[test]
    fn long_name_truncated_to_field() {
        let offer = Offer::new(1, &"x".repeat(40));
        let back = Offer::decode(&offer.encode()).unwrap();
        assert_eq!(back.name(), "x".repeat(32));
    }

    #[test]
    fn rejects_request_tag() {
        let mut bytes = Offer::new(1, "a").encode().to_vec();
        bytes[4] = 0x03;
        assert_eq!(Offer::decode(&bytes), Err(WireError::Kind(0x03)));
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = Offer::new(1, "a").encode().to_vec();
        bytes[0] = 0x00;
        assert_eq!(Offer::decode(&bytes), Err(WireError::Magic(0x00CDDCBA)));
    }

    #[test]
    fn rejects_short_datagram() {
        let bytes = Offer::new(1, "a").encode();
        assert_eq!(
            Offer::decode(&bytes[..38]),
            Err(WireError::Truncated { need: 39, have: 38 })
        );
    }

    #[test]
    fn ignores_trailing_bytes() {
        let offer = Offer::new(7, "a");
        let mut bytes = offer.encode().to_vec();
        bytes.extend_from_slice(&[0xFF; 16]);
        assert_eq!(Offer::decode(&bytes), Ok(offer));
    }
}
