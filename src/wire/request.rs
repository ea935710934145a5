use super::*;
use bytes::BufMut;
use bytes::BytesMut;

/// Player's opening message on a fresh connection.
///
/// | magic:4 | type:1 = 0x03 | num_rounds:1 | name:32 |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    rounds: u8,
    name: String,
}

impl Request {
    /// Rejects round counts outside 1..=255 instead of clamping.
    pub fn new(rounds: u32, name: &str) -> Result<Self, ArgumentError> {
        match u8::try_from(rounds) {
            Ok(n) if n >= 1 => Ok(Self {
                rounds: n,
                name: name.to_string(),
            }),
            _ => Err(ArgumentError::Rounds(rounds)),
        }
    }
    pub fn rounds(&self) -> u8 {
        self.rounds
    }
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Record for Request {
    const KIND: Kind = Kind::Request;
    const SIZE: usize = HEADER + 1 + NAME_LEN;

    fn write(&self, buf: &mut BytesMut) {
        buf.put_u8(self.rounds);
        buf.put_slice(&pack(&self.name));
    }
    fn read(body: &[u8]) -> Result<Self, WireError> {
        match body[0] {
            0 => Err(WireError::Field {
                field: "num_rounds",
                value: 0,
            }),
            rounds => Ok(Self {
                rounds,
                name: unpack(&body[1..]),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_layout() {
        let bytes = Request::new(3, "abc").unwrap().encode();
        assert_eq!(bytes.len(), 38);
        assert_eq!(bytes[4], 0x03);
        assert_eq!(bytes[5], 3);
        assert_eq!(&bytes[6..9], b"abc");
        assert_eq!(bytes[9..].iter().filter(|b| **b == 0).count(), 29);
    }

    #[test]
    fn round_trip_bounds() {
        for rounds in [1, 2, 254, 255] {
            let request = Request::new(rounds, "player").unwrap();
            assert_eq!(Request::decode(&request.encode()), Ok(request));
        }
    }

    #[test]
    fn rejects_zero_and_overflow() {
        assert_eq!(Request::new(0, "p"), Err(ArgumentError::Rounds(0)));
        assert_eq!(Request::new(256, "p"), Err(ArgumentError::Rounds(256)));
    }

    #[test]
    fn decode_rejects_zero_rounds() {
        let mut bytes = Request::new(1, "p").unwrap().encode().to_vec();
        bytes[5] = 0;
        assert!(matches!(
            Request::decode(&bytes),
            Err(WireError::Field { field: "num_rounds", .. })
        ));
    }

    #[test]
    fn decode_rejects_offer() {
        let bytes = Offer::new(1, "p").encode();
        assert_eq!(Request::decode(&bytes), Err(WireError::Kind(0x02)));
    }
}
