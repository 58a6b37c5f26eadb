//! Text literals for `Uint`
//!
//! Parsing accepts decimal text, or hexadecimal text behind a `0x`/`0X`
//! prefix (digits are case-insensitive). The running value is accumulated
//! block by block as `value * base^k + block`, using the same wrapping
//! multiply-add as the arithmetic operators. A literal larger than the
//! width is therefore truncated modulo 2^BITS rather than rejected.
//!
//! The canonical text forms are:
//! - decimal: no leading zeros, `0` for zero
//! - hexadecimal: `0x` followed by uppercase digits without leading zeros
//!
//! `Uint::parse(&x.to_string_radix(r)) == Ok(x)` for every value and radix.

use crate::error::WideIntError;
use crate::primitives::core::Uint;
use crate::primitives::limb::significant_len;

use std::fmt::{self, Debug, Display, Formatter, LowerHex, UpperHex};
use std::str::FromStr;

/// Number of decimal digits in one block; `10^19` is the largest power of
/// ten that fits a limb.
const DECIMAL_BLOCK: usize = 19;

/// Number of hexadecimal digits in one block, keeping `16^15` within a limb.
const HEX_BLOCK: usize = 15;

const fn pow10_table() -> [u64; DECIMAL_BLOCK + 1] {
    let mut table = [1u64; DECIMAL_BLOCK + 1];
    let mut i = 1;
    while i <= DECIMAL_BLOCK {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
}

/// `POW10[k] == 10^k` for `k` in `0..=19`.
pub(crate) const POW10: [u64; DECIMAL_BLOCK + 1] = pow10_table();

/// Text radix supported by parsing and formatting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Base 10.
    Decimal,
    /// Base 16, written with a `0x` prefix.
    Hexadecimal,
}

impl Radix {
    fn block_len(self) -> usize {
        match self {
            Radix::Decimal => DECIMAL_BLOCK,
            Radix::Hexadecimal => HEX_BLOCK,
        }
    }

    /// `base^len` for a block of `len` digits.
    fn block_scale(self, len: usize) -> u64 {
        match self {
            Radix::Decimal => POW10[len],
            Radix::Hexadecimal => 1u64 << (4 * len),
        }
    }

    fn digit(self, byte: u8) -> Option<u64> {
        let value = match (self, byte) {
            (_, b'0'..=b'9') => byte - b'0',
            (Radix::Hexadecimal, b'a'..=b'f') => byte - b'a' + 10,
            (Radix::Hexadecimal, b'A'..=b'F') => byte - b'A' + 10,
            _ => return None,
        };

        Some(value as u64)
    }

    fn base(self) -> u64 {
        match self {
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Parses a decimal literal, or a hexadecimal one prefixed by `0x`/`0X`.
    ///
    /// Values beyond the width wrap modulo 2^BITS.
    ///
    /// # Errors
    /// Returns [`WideIntError::InvalidLiteral`] if the digits are empty or
    /// contain a character outside the selected alphabet.
    pub fn parse(text: &str) -> Result<Self, WideIntError> {
        match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            Some(digits) => Self::parse_digits(text, digits, Radix::Hexadecimal),
            None => Self::parse_digits(text, text, Radix::Decimal),
        }
    }

    /// Parses unprefixed digits in radix 10 or 16.
    ///
    /// # Errors
    /// Returns [`WideIntError::UnsupportedRadix`] for any other radix and
    /// [`WideIntError::InvalidLiteral`] for malformed digits.
    pub fn from_str_radix(digits: &str, radix: u32) -> Result<Self, WideIntError> {
        match radix {
            10 => Self::parse_digits(digits, digits, Radix::Decimal),
            16 => Self::parse_digits(digits, digits, Radix::Hexadecimal),
            other => Err(WideIntError::UnsupportedRadix(other)),
        }
    }

    fn parse_digits(literal: &str, digits: &str, radix: Radix) -> Result<Self, WideIntError> {
        let invalid = || WideIntError::InvalidLiteral(literal.to_owned());

        if digits.is_empty() {
            return Err(invalid());
        }

        let mut value = Self::ZERO;

        for block in digits.as_bytes().chunks(radix.block_len()) {
            let mut block_value = 0u64;

            for &byte in block {
                let digit = radix.digit(byte).ok_or_else(invalid)?;
                block_value = block_value * radix.base() + digit;
            }

            value = value.wrapping_mul_add_limb(radix.block_scale(block.len()), block_value);
        }

        Ok(value)
    }

    /// Formats the value in its canonical text form for `radix`.
    pub fn to_string_radix(&self, radix: Radix) -> String {
        match radix {
            Radix::Decimal => self.to_string(),
            Radix::Hexadecimal => format!("{self:#X}"),
        }
    }

    fn decimal_digits(&self) -> String {
        // Blocks of 19 digits, least significant first.
        let mut blocks = Vec::with_capacity(LIMBS + 1);
        let mut rest = *self;

        while !rest.is_zero() {
            let (quotient, block) = rest.div_rem_limb_nonzero(POW10[DECIMAL_BLOCK]);
            blocks.push(block);
            rest = quotient;
        }

        let mut out = String::with_capacity(blocks.len() * DECIMAL_BLOCK);

        match blocks.split_last() {
            Some((top, lower)) => {
                out.push_str(&top.to_string());
                for block in lower.iter().rev() {
                    out.push_str(&format!("{block:019}"));
                }
            }
            None => out.push('0'),
        }

        out
    }

    fn hex_digits(&self, upper: bool) -> String {
        let len = significant_len(&self.0);

        if len == 0 {
            return "0".to_owned();
        }

        let mut out = String::with_capacity(len * 16);

        for (i, limb) in self.0[..len].iter().rev().enumerate() {
            let text = match (i, upper) {
                (0, true) => format!("{limb:X}"),
                (0, false) => format!("{limb:x}"),
                (_, true) => format!("{limb:016X}"),
                (_, false) => format!("{limb:016x}"),
            };
            out.push_str(&text);
        }

        out
    }
}

impl<const LIMBS: usize> FromStr for Uint<LIMBS> {
    type Err = WideIntError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// Formats the value in decimal.
impl<const LIMBS: usize> Display for Uint<LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.decimal_digits())
    }
}

/// Formats the value in lowercase hexadecimal; `{:#x}` adds the `0x` prefix.
impl<const LIMBS: usize> LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(false))
    }
}

/// Formats the value in uppercase hexadecimal; `{:#X}` adds the `0x` prefix.
impl<const LIMBS: usize> UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.hex_digits(true))
    }
}

impl<const LIMBS: usize> Debug for Uint<LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Uint<{}>({:#X})", Self::BITS, self)
    }
}
