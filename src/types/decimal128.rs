use std::fmt::{self, Write};

use zerocopy::byteorder::{self, LittleEndian};

const EXPONENT_BIAS: i32 = 6176;
const EXPONENT_MASK: u64 = 0x3FFF;
const COMBINATION_MASK: u64 = 0x1F;
const COMBINATION_INFINITY: u64 = 0x1E;
const COMBINATION_NAN: u64 = 0x1F;
const MAX_COEFFICIENT: u128 = 9_999_999_999_999_999_999_999_999_999_999_999;

/// An IEEE 754-2008 128-bit decimal, kept as its two 64-bit halves.
///
/// On the wire the low half comes first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Decimal128 {
    pub high: u64,
    pub low: u64,
}

impl Decimal128 {
    #[inline]
    pub const fn new(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    #[inline]
    pub fn from_le_bytes(bytes: [u8; 16]) -> Self {
        let (mut low, mut high) = ([0u8; 8], [0u8; 8]);
        low.copy_from_slice(&bytes[..8]);
        high.copy_from_slice(&bytes[8..]);
        Self {
            low: byteorder::U64::<LittleEndian>::from_bytes(low).get(),
            high: byteorder::U64::<LittleEndian>::from_bytes(high).get(),
        }
    }

    #[inline]
    pub fn to_le_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.low.to_le_bytes());
        bytes[8..].copy_from_slice(&self.high.to_le_bytes());
        bytes
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.high >> 63 == 1
    }
}

/// Renders the decimal in the canonical string form: plain notation for
/// moderate exponents, scientific notation otherwise.
impl fmt::Display for Decimal128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let combination = (self.high >> 58) & COMBINATION_MASK;

        let (biased_exponent, coefficient) = if combination >> 3 == 3 {
            match combination {
                COMBINATION_INFINITY if self.is_negative() => return f.write_str("-Infinity"),
                COMBINATION_INFINITY => return f.write_str("Infinity"),
                COMBINATION_NAN => return f.write_str("NaN"),
                // the implied leading bits push the coefficient out of range
                _ => ((self.high >> 47) & EXPONENT_MASK, 0u128),
            }
        } else {
            let msb = ((self.high >> 46) & 0x7) as u128;
            let coefficient =
                (msb << 110) | (((self.high & 0x3FFF_FFFF_FFFF) as u128) << 64) | self.low as u128;
            (
                (self.high >> 49) & EXPONENT_MASK,
                if coefficient > MAX_COEFFICIENT {
                    0
                } else {
                    coefficient
                },
            )
        };

        if self.is_negative() {
            f.write_char('-')?;
        }

        let exponent = biased_exponent as i32 - EXPONENT_BIAS;
        let digits = coefficient.to_string();
        let adjusted_exponent = exponent + digits.len() as i32 - 1;

        if exponent > 0 || adjusted_exponent < -6 {
            let (first, rest) = digits.split_at(1);
            f.write_str(first)?;
            if !rest.is_empty() {
                f.write_char('.')?;
                f.write_str(rest)?;
            }
            write!(f, "E{adjusted_exponent:+}")
        } else if exponent == 0 {
            f.write_str(&digits)
        } else {
            let radix_position = digits.len() as i32 + exponent;
            if radix_position > 0 {
                let (integral, fraction) = digits.split_at(radix_position as usize);
                write!(f, "{integral}.{fraction}")
            } else {
                f.write_str("0.")?;
                for _ in 0..-radix_position {
                    f.write_char('0')?;
                }
                f.write_str(&digits)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(high: u64, low: u64) -> String {
        Decimal128::new(high, low).to_string()
    }

    #[test]
    fn special_values() {
        assert_eq!(dec(0x7800_0000_0000_0000, 0), "Infinity");
        assert_eq!(dec(0xF800_0000_0000_0000, 0), "-Infinity");
        assert_eq!(dec(0x7C00_0000_0000_0000, 0), "NaN");
        assert_eq!(dec(0xFC00_0000_0000_0000, 0), "NaN");
    }

    #[test]
    fn plain_notation() {
        // exponent 0
        assert_eq!(dec(0x3040_0000_0000_0000, 0), "0");
        assert_eq!(dec(0x3040_0000_0000_0000, 1), "1");
        assert_eq!(dec(0xB040_0000_0000_0000, 1), "-1");
        // 12345 * 10^-2
        assert_eq!(dec(0x303C_0000_0000_0000, 12345), "123.45");
        // 1 * 10^-3
        assert_eq!(dec(0x303A_0000_0000_0000, 1), "0.001");
    }

    #[test]
    fn scientific_notation() {
        // 1 * 10^1
        assert_eq!(dec(0x3042_0000_0000_0000, 1), "1E+1");
        // 12 * 10^-9
        assert_eq!(dec(0x302E_0000_0000_0000, 12), "1.2E-8");
    }

    #[test]
    fn byte_order() {
        let value = Decimal128::new(0x3040_0000_0000_0000, 42);
        let bytes = value.to_le_bytes();
        assert_eq!(bytes[0], 42);
        assert_eq!(bytes[15], 0x30);
        assert_eq!(Decimal128::from_le_bytes(bytes), value);
    }
}
