//! Subnet mask / CIDR prefix-length conversions.
//!
//! Pure functions over dotted-quad IPv4 masks and prefix lengths.

use std::net::Ipv4Addr;

use thiserror::Error;

/// Conversion input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// Input did not parse as a dotted-quad IPv4 address.
    #[error("not a dotted-quad IPv4 mask: {0:?}")]
    InvalidMask(String),

    /// Prefix length did not parse or is outside 0..=32.
    #[error("invalid prefix length: {0:?}")]
    InvalidPrefixLength(String),
}

/// Count the set bits of a dotted-quad mask.
///
/// Bits are counted across all 32 bits, from the most-significant bit of
/// the first octet to the least-significant bit of the last. The mask is
/// not required to be a contiguous prefix: `255.0.255.0` yields 16 just
/// like `255.255.0.0`.
pub fn mask_to_prefix_len(mask: &str) -> Result<u8, ConversionError> {
    let addr: Ipv4Addr = mask
        .parse()
        .map_err(|_| ConversionError::InvalidMask(mask.to_string()))?;

    Ok(u32::from(addr).count_ones() as u8)
}

/// Build the canonical dotted-quad mask for a prefix length.
///
/// The prefix length is read from everything after the first `/` in the
/// input, or the whole input when there is none, so `24`, `/24`, and
/// `10.0.0.0/24` all yield `255.255.255.0`.
pub fn prefix_len_to_mask(input: &str) -> Result<Ipv4Addr, ConversionError> {
    let digits = match input.find('/') {
        Some(pos) => &input[pos + 1..],
        None => input,
    };

    let len: u32 = digits
        .parse()
        .map_err(|_| ConversionError::InvalidPrefixLength(input.to_string()))?;
    if len > 32 {
        return Err(ConversionError::InvalidPrefixLength(input.to_string()));
    }

    // A shift by 32 would overflow, so /0 is its own case.
    let bits = match len {
        0 => 0,
        n => u32::MAX << (32 - n),
    };

    Ok(Ipv4Addr::from(bits))
}
