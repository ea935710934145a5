/// Why a received record was rejected as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    /// Fewer bytes than the record's fixed size.
    Truncated { need: usize, have: usize },
    /// Leading four bytes are not the magic constant.
    Magic(u32),
    /// Type tag does not match the expected record kind.
    Kind(u8),
    /// A typed sub-field holds a value outside its domain.
    Field { field: &'static str, value: u32 },
}

impl std::fmt::Display for WireError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truncated { need, have } => write!(f, "truncated record: {} of {} bytes", have, need),
            Self::Magic(m) => write!(f, "bad magic constant: {:#010x}", m),
            Self::Kind(k) => write!(f, "unexpected type tag: {:#04x}", k),
            Self::Field { field, value } => write!(f, "invalid {}: {}", field, value),
        }
    }
}

impl std::error::Error for WireError {}

/// An application value that cannot be put on the wire.
/// Raised where messages are constructed, never by decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    Rounds(u32),
    Decision(String),
}

impl std::fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rounds(n) => write!(f, "number of rounds must be 1-255, got {}", n),
            Self::Decision(s) => write!(f, "invalid decision {:?}, must be hit or stand", s),
        }
    }
}

impl std::error::Error for ArgumentError {}
