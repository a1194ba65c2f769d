//! Reading numbers aloud in Thai.
//!
//! Thai numerals read positionally within groups of six digits, with `ล้าน`
//! (million) joining groups:
//!
//! ```text
//! 21        ยี่สิบเอ็ด           tens digit 2 is ยี่, trailing 1 is เอ็ด
//! 110       หนึ่งร้อยสิบ          tens digit 1 is just สิบ
//! 1000001   หนึ่งล้านเอ็ด
//! ```

use crate::{Error, Result};

const POSITIONS: [&str; 6] = ["แสน", "หมื่น", "พัน", "ร้อย", "สิบ", ""];
const DIGITS: [&str; 10] = [
    "", "หนึ่ง", "สอง", "สาม", "สี่", "ห้า", "หก", "เจ็ด", "แปด", "เก้า",
];
const MILLION: &str = "ล้าน";

/// Thai words for a non-negative integer.
///
/// ```rust
/// use kham::numeral::num_to_thaiword;
///
/// assert_eq!(num_to_thaiword(0), "ศูนย์");
/// assert_eq!(num_to_thaiword(11), "สิบเอ็ด");
/// assert_eq!(num_to_thaiword(2_500_000), "สองล้านห้าแสน");
/// ```
#[must_use]
pub fn num_to_thaiword(number: u64) -> String {
    if number == 0 {
        return "ศูนย์".to_string();
    }
    let mut out = String::new();
    read_into(number, &mut out);
    out
}

fn read_into(mut number: u64, out: &mut String) {
    if number >= 1_000_000 {
        read_into(number / 1_000_000, out);
        out.push_str(MILLION);
        number %= 1_000_000;
    }

    let mut divider = 100_000;
    for position in POSITIONS {
        if number == 0 {
            break;
        }
        // number < 1_000_000 here, so digit < 10
        let digit = (number / divider) as usize;
        match (divider, digit) {
            (10, 2) => out.push_str("ยี่"),
            (10, 1) => {}
            (1, 1) if !out.is_empty() => out.push_str("เอ็ด"),
            _ => out.push_str(DIGITS[digit]),
        }
        if digit != 0 {
            out.push_str(position);
        }
        number %= divider;
        divider /= 10;
    }
}

/// Thai currency text for an amount of baht, like spreadsheet `BAHTTEXT`.
///
/// The amount is rounded to two decimals (satang).
///
/// ```rust
/// use kham::numeral::bahttext;
///
/// assert_eq!(bahttext(21.0)?, "ยี่สิบเอ็ดบาทถ้วน");
/// assert_eq!(bahttext(1.25)?, "หนึ่งบาทยี่สิบห้าสตางค์");
/// # Ok::<(), kham::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidAmount`] for negative, non-finite, or too large
/// amounts.
pub fn bahttext(amount: f64) -> Result<String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount(amount));
    }
    if amount == 0.0 {
        return Ok("ศูนย์บาทถ้วน".to_string());
    }

    let fixed = format!("{amount:.2}");
    let (baht, satang) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
    let baht: u64 = baht.parse().map_err(|_| Error::InvalidAmount(amount))?;
    let satang: u64 = satang.parse().map_err(|_| Error::InvalidAmount(amount))?;

    let mut out = num_to_thaiword(baht);
    out.push_str("บาท");
    if satang == 0 {
        out.push_str("ถ้วน");
    } else {
        out.push_str(&num_to_thaiword(satang));
        out.push_str("สตางค์");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(num_to_thaiword(1), "หนึ่ง");
        assert_eq!(num_to_thaiword(10), "สิบ");
        assert_eq!(num_to_thaiword(11), "สิบเอ็ด");
        assert_eq!(num_to_thaiword(20), "ยี่สิบ");
        assert_eq!(num_to_thaiword(21), "ยี่สิบเอ็ด");
        assert_eq!(num_to_thaiword(101), "หนึ่งร้อยเอ็ด");
        assert_eq!(num_to_thaiword(110), "หนึ่งร้อยสิบ");
    }

    #[test]
    fn test_positions() {
        assert_eq!(num_to_thaiword(1_234), "หนึ่งพันสองร้อยสามสิบสี่");
        assert_eq!(num_to_thaiword(100_000), "หนึ่งแสน");
        assert_eq!(num_to_thaiword(999_999), "เก้าแสนเก้าหมื่นเก้าพันเก้าร้อยเก้าสิบเก้า");
    }

    #[test]
    fn test_millions() {
        assert_eq!(num_to_thaiword(1_000_000), "หนึ่งล้าน");
        assert_eq!(num_to_thaiword(1_000_001), "หนึ่งล้านเอ็ด");
        assert_eq!(num_to_thaiword(11_000_000), "สิบเอ็ดล้าน");
        assert_eq!(num_to_thaiword(1_000_000_000_000), "หนึ่งล้านล้าน");
    }

    #[test]
    fn test_bahttext() {
        assert_eq!(bahttext(0.0).unwrap(), "ศูนย์บาทถ้วน");
        assert_eq!(bahttext(1.0).unwrap(), "หนึ่งบาทถ้วน");
        assert_eq!(bahttext(200.0).unwrap(), "สองร้อยบาทถ้วน");
        assert_eq!(bahttext(0.5).unwrap(), "ศูนย์บาทห้าสิบสตางค์");
        assert_eq!(bahttext(0.001).unwrap(), "ศูนย์บาทถ้วน");
    }

    #[test]
    fn test_bahttext_invalid() {
        assert!(matches!(bahttext(-1.0), Err(Error::InvalidAmount(_))));
        assert!(bahttext(f64::NAN).is_err());
        assert!(bahttext(f64::INFINITY).is_err());
        assert!(bahttext(1e30).is_err());
    }
}
