use super::*;
use crate::cards::*;
use byteorder::ByteOrder;
use byteorder::BE;
use bytes::BufMut;
use bytes::BytesMut;

/// Dealer-to-player message: one dealt card, a round result, or both.
///
/// | magic:4 | type:1 = 0x04 | result:1 | card_rank:2 | card_suit:1 |
///
/// Rank 0 means no card; its suit byte is written as 0 and ignored on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload {
    status: Status,
    card: Option<Card>,
}

impl Payload {
    /// A dealt card, possibly carrying the round's final result too.
    pub fn card(status: Status, card: Card) -> Self {
        Self {
            status,
            card: Some(card),
        }
    }
    /// Result only, no card.
    pub fn verdict(status: Status) -> Self {
        Self { status, card: None }
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn drawn(&self) -> Option<Card> {
        self.card
    }
}

impl Record for Payload {
    const KIND: Kind = Kind::Payload;
    const SIZE: usize = HEADER + 1 + 2 + 1;

    fn write(&self, buf: &mut BytesMut) {
        buf.put_u8(u8::from(self.status));
        match self.card {
            Some(card) => {
                buf.put_u16(u8::from(card.rank()) as u16);
                buf.put_u8(u8::from(card.suit()));
            }
            None => {
                buf.put_u16(0);
                buf.put_u8(0);
            }
        }
    }
    fn read(body: &[u8]) -> Result<Self, WireError> {
        let status = Status::try_from(body[0]).map_err(|n| WireError::Field {
            field: "result",
            value: n as u32,
        })?;
        let card = match (BE::read_u16(&body[1..3]), body[3]) {
            (0, _) => None,
            (rank, suit) => Some(Card::from((
                u8::try_from(rank)
                    .ok()
                    .and_then(|r| Rank::try_from(r).ok())
                    .ok_or(WireError::Field {
                        field: "card_rank",
                        value: rank as u32,
                    })?,
                Suit::try_from(suit).map_err(|_| WireError::Field {
                    field: "card_suit",
                    value: suit as u32,
                })?,
            ))),
        };
        Ok(Self { status, card })
    }
}
