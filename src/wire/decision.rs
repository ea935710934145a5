use super::*;
use bytes::BufMut;
use bytes::BytesMut;

/// Player's hit/stand choice during its own turn.
///
/// | magic:4 | type:1 = 0x04 | decision:5 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Hit,
    Stand,
}

impl Decision {
    const HIT: &'static [u8; 5] = b"Hit\0\0";
    const STAND: &'static [u8; 5] = b"Stand";

    fn token(&self) -> &'static [u8; 5] {
        match self {
            Decision::Hit => Self::HIT,
            Decision::Stand => Self::STAND,
        }
    }
}

/// Case-insensitive "hit" or "stand"; everything else is rejected.
impl TryFrom<&str> for Decision {
    type Error = ArgumentError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "hit" => Ok(Decision::Hit),
            "stand" => Ok(Decision::Stand),
            _ => Err(ArgumentError::Decision(s.to_string())),
        }
    }
}

impl Record for Decision {
    const KIND: Kind = Kind::Payload;
    const SIZE: usize = HEADER + 5;

    fn write(&self, buf: &mut BytesMut) {
        buf.put_slice(self.token());
    }
    fn read(body: &[u8]) -> Result<Self, WireError> {
        match body {
            t if t == Self::HIT => Ok(Decision::Hit),
            t if t == Self::STAND => Ok(Decision::Stand),
            _ => Err(WireError::Field {
                field: "decision",
                value: body.iter().fold(0u32, |acc, b| acc << 8 | *b as u32),
            }),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Decision::Hit => write!(f, "Hit"),
            Decision::Stand => write!(f, "Stand"),
        }
    }
}
