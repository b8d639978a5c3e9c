use crate::constants::FLOAT_PRINT_PRECISION;

/// Format a float for logs: six fixed decimals, trailing fractional zeros
/// stripped, and the point dropped when nothing is left after it.
///
/// `1.5` → `"1.5"`, `2.0` → `"2"`, `0.125` → `"0.125"`.
/// Not a wire format.
pub fn print_float(value: f64) -> String {
    let mut s = format!("{:.*}", FLOAT_PRINT_PRECISION, value);
    if s.contains('.') {
        let keep = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(keep);
    }
    s
}

/// Round half away from zero to `places` decimal places.
///
/// Values too large to scale are returned unchanged.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(i32::MAX as u32) as i32);
    let scaled = value * factor;
    if !factor.is_finite() || !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Render bytes for debug output: quoted when printable ASCII, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if !b.is_empty() && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}
