//! Image encoding
//!
//! Converts between a [`SlotTable`] and its on-disk byte image.

use std::borrow::Cow;

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::warn;

use crate::error::{Result, SlotError};
use crate::table::{BoundedText, Slot, SlotTable, CAPACITY, MAX_DATA};

// =============================================================================
// Layout Constants
// =============================================================================

/// Record size: Id (4) + Occupied (4) + Name (512) + Email (512) = 1032 bytes
pub const RECORD_SIZE: usize = 4 + 4 + MAX_DATA + MAX_DATA;

/// Full image size: 100 records = 103,200 bytes
pub const IMAGE_SIZE: usize = CAPACITY * RECORD_SIZE;

// =============================================================================
// Encoding
// =============================================================================

/// Encode the whole table into exactly [`IMAGE_SIZE`] bytes
pub fn encode_image(table: &SlotTable) -> Bytes {
    let mut buf = BytesMut::with_capacity(IMAGE_SIZE);
    for slot in table.slots() {
        encode_record(slot, &mut buf);
    }
    debug_assert_eq!(buf.len(), IMAGE_SIZE);
    buf.freeze()
}

fn encode_record(slot: &Slot, buf: &mut BytesMut) {
    buf.put_u32_le(slot.id() as u32);
    buf.put_u32_le(u32::from(slot.is_occupied()));
    put_text(buf, slot.name_text());
    put_text(buf, slot.email_text());
}

/// Text followed by zero fill; `BoundedText` guarantees at least one NUL
fn put_text(buf: &mut BytesMut, text: &BoundedText) {
    buf.put_slice(text.as_bytes());
    buf.put_bytes(0, MAX_DATA - text.len());
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a table from an image
///
/// Only the first [`IMAGE_SIZE`] bytes are looked at. Fails with
/// `CorruptFile` if the image is short or a record's id does not match its
/// position. Text fields without a terminator are cut to fit, and bytes that
/// are not UTF-8 become U+FFFD; both are logged.
pub fn decode_image(image: &[u8]) -> Result<SlotTable> {
    if image.len() < IMAGE_SIZE {
        return Err(SlotError::CorruptFile(format!(
            "image is {} bytes, expected {}",
            image.len(),
            IMAGE_SIZE
        )));
    }

    let mut slots = Vec::new();
    slots
        .try_reserve_exact(CAPACITY)
        .map_err(|_| SlotError::OutOfMemory)?;

    let mut buf = &image[..IMAGE_SIZE];
    for position in 0..CAPACITY {
        slots.push(decode_record(position, &mut buf)?);
    }

    Ok(SlotTable::from_slots(slots))
}

fn decode_record(position: usize, buf: &mut &[u8]) -> Result<Slot> {
    let id = buf.get_u32_le();
    if id as usize != position {
        return Err(SlotError::CorruptFile(format!(
            "record at position {} carries id {}",
            position, id
        )));
    }

    // Any nonzero flag counts as occupied
    let occupied = buf.get_u32_le() != 0;
    let name = take_text(buf, position, "name")?;
    let email = take_text(buf, position, "email")?;

    Ok(Slot::from_parts(position, occupied, name, email))
}

fn take_text(buf: &mut &[u8], position: usize, field: &str) -> Result<BoundedText> {
    let (raw, rest) = buf.split_at(MAX_DATA);
    *buf = rest;

    // A field filled to capacity with no NUL keeps its first MAX_LEN bytes
    let (len, unterminated) = match raw.iter().position(|&b| b == 0) {
        Some(nul) => (nul, false),
        None => (BoundedText::MAX_LEN, true),
    };

    let decoded = String::from_utf8_lossy(&raw[..len]);
    let lossy = matches!(decoded, Cow::Owned(_));
    let (text, cut) = BoundedText::truncating(&decoded);

    if unterminated || lossy || cut {
        warn!(
            record = position,
            field,
            unterminated,
            lossy,
            "Repaired text field while loading image"
        );
    }

    Ok(text)
}
