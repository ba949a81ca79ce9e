//! Ether Unit Conversion
//!
//! Human input is typed in ETH, the contract speaks wei.

use crate::error::UnitError;
use crate::model::Wei;

pub const ETHER_DECIMALS: u32 = 18;

const WEI_PER_ETHER: u128 = 10u128.pow(ETHER_DECIMALS);

/// Parse a decimal ETH string such as `"0.05"` or `"12"` into wei
pub fn parse_ether(input: &str) -> Result<Wei, UnitError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(UnitError::Empty);
    }

    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };

    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !digits_only(whole) || !digits_only(frac) {
        return Err(UnitError::Malformed(s.to_string()));
    }
    if frac.len() > ETHER_DECIMALS as usize {
        return Err(UnitError::TooManyDecimals { max: ETHER_DECIMALS });
    }

    let whole_wei = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u128>()
            .map_err(|_| UnitError::Overflow)?
            .checked_mul(WEI_PER_ETHER)
            .ok_or(UnitError::Overflow)?
    };

    let frac_wei = if frac.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", frac, width = ETHER_DECIMALS as usize);
        padded.parse::<u128>().map_err(|_| UnitError::Malformed(s.to_string()))?
    };

    whole_wei
        .checked_add(frac_wei)
        .map(Wei)
        .ok_or(UnitError::Overflow)
}

/// Full-precision ETH string with trailing zeros removed
pub fn format_ether(wei: Wei) -> String {
    let whole = wei.0 / WEI_PER_ETHER;
    let frac = wei.0 % WEI_PER_ETHER;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{:018}", frac);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// ETH string truncated to a fixed number of decimal places
pub fn format_ether_fixed(wei: Wei, places: usize) -> String {
    let whole = wei.0 / WEI_PER_ETHER;
    if places == 0 {
        return whole.to_string();
    }
    let frac = format!("{:018}", wei.0 % WEI_PER_ETHER);
    let mut shown: String = frac.chars().take(places).collect();
    while shown.len() < places {
        shown.push('0');
    }
    format!("{}.{}", whole, shown)
}
