//! Quantity extraction and form calculations
//!
//! MASUK/KELUAR cells hold handwriting-style free text that may contain
//! several numbers and embedded units ("20 (400)", "1+1.25 + 19T (59)").
//! Only the first numeric token counts as the authoritative magnitude;
//! parenthetical totals and sub-unit counts are ignored. This is a
//! deliberate, lossy simplification, not an expression evaluator.
//!
//! All functions here are pure and total: malformed input degrades to
//! the blank marker (for SISA) or zero (for the HASIL sums).

use crate::domain::model::{MaterialEntry, TrayRule, WasteEntry};

/// Marker for an empty or not-applicable cell on the paper form
pub const BLANK: &str = "-";

/// Extract the first decimal number from free-form cell text
///
/// Scans left to right for the first substring of the form
/// digits[.digits] and parses it as f64. Returns None for empty text,
/// the blank marker, or text without any digit.
pub fn extract_number(text: &str) -> Option<f64> {
    if text.is_empty() || text == BLANK {
        return None;
    }

    let bytes = text.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;

    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    // Fractional part only counts if a digit follows the dot
    if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    text[start..end].parse().ok()
}

/// Parse a waste amount leniently: a leading signed number wins,
/// anything unparsable counts as zero
///
/// Waste cells are not required to be well-formed; "40.15", " 17 kg"
/// and "" are all acceptable operator input.
pub fn parse_amount(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }

    if !s[digits_start..end].bytes().any(|b| b.is_ascii_digit()) {
        return 0.0;
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Compute the SISA (remainder) cell from MASUK and KELUAR text
///
/// Follows the paper-form convention: an unknown, zero or negative
/// remainder stays blank ("-") instead of showing 0.00 or a negative
/// figure.
pub fn calculate_sisa(masuk: &str, keluar: &str) -> String {
    if masuk.is_empty() || masuk == BLANK || keluar.is_empty() || keluar == BLANK {
        return BLANK.to_string();
    }

    let (masuk_num, keluar_num) = match (extract_number(masuk), extract_number(keluar)) {
        (Some(m), Some(k)) => (m, k),
        _ => return BLANK.to_string(),
    };

    let sisa = masuk_num - keluar_num;
    if sisa > 0.0 {
        format!("{:.2}", sisa)
    } else {
        BLANK.to_string()
    }
}

/// Compute the HASIL line for the whole form
///
/// Total material input minus total waste, converted to whole trays by
/// the machine's tray rule. A negative production yields a negative
/// tray count; nothing is clamped.
pub fn calculate_hasil(
    materials: &[MaterialEntry],
    waste: &[WasteEntry],
    tray: &TrayRule,
) -> String {
    let total_waste: f64 = waste.iter().map(|w| parse_amount(&w.value)).sum();
    let total_input: f64 = materials
        .iter()
        .map(|m| extract_number(&m.masuk).unwrap_or(0.0))
        .sum();

    let production = total_input - total_waste;
    let trays = (production / tray.kg_per_tray).floor() as i64;
    let total_kg = trays as f64 * tray.kg_per_tray;

    format!("{} {} {:.1} ({})", trays, tray.unit, total_kg, tray.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trey_rule(kg_per_tray: f64) -> TrayRule {
        TrayRule {
            unit: "TREY".to_string(),
            kg_per_tray,
            description: format!("1 Trey = {:.2} kg", kg_per_tray),
        }
    }

    fn material(name: &str, masuk: &str) -> MaterialEntry {
        MaterialEntry {
            name: name.to_string(),
            masuk: masuk.to_string(),
            keluar: String::new(),
            sisa: BLANK.to_string(),
        }
    }

    fn waste(name: &str, value: &str) -> WasteEntry {
        WasteEntry {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    // ==========================================
    // extract_number
    // ==========================================

    #[test]
    fn test_extract_simple() {
        assert_eq!(extract_number("20"), Some(20.0));
        assert_eq!(extract_number("40.15"), Some(40.15));
    }

    #[test]
    fn test_extract_first_number_wins() {
        assert_eq!(extract_number("20 (400)"), Some(20.0));
        assert_eq!(extract_number("1+1.25 + 19T (59)"), Some(1.0));
        assert_eq!(extract_number("0.75+29 (11.95)"), Some(0.75));
    }

    #[test]
    fn test_extract_comma_is_not_a_decimal_point() {
        // Handwritten "1,2575 Roll" reads as 1, not 1.2575
        assert_eq!(extract_number("1,2575 Roll (23.75)"), Some(1.0));
    }

    #[test]
    fn test_extract_dot_without_digit_ends_the_number() {
        assert_eq!(extract_number("11.Trey + 3,15 (95,5)"), Some(11.0));
    }

    #[test]
    fn test_extract_leading_text() {
        assert_eq!(extract_number("3R + 1.70 (15.2)"), Some(3.0));
        assert_eq!(extract_number("sak 15"), Some(15.0));
    }

    #[test]
    fn test_extract_none_cases() {
        assert_eq!(extract_number(""), None);
        assert_eq!(extract_number("-"), None);
        assert_eq!(extract_number("no digits here"), None);
        assert_eq!(extract_number("R.kg"), None);
    }

    #[test]
    fn test_extract_ignores_sign() {
        // The magnitude pattern has no sign; "-3" reads as 3
        assert_eq!(extract_number("-3"), Some(3.0));
    }

    // ==========================================
    // parse_amount
    // ==========================================

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("40.15"), 40.15);
        assert_eq!(parse_amount("17"), 17.0);
        assert_eq!(parse_amount("0"), 0.0);
    }

    #[test]
    fn test_parse_amount_trailing_text() {
        assert_eq!(parse_amount("12kg"), 12.0);
        assert_eq!(parse_amount(" 17 kg"), 17.0);
    }

    #[test]
    fn test_parse_amount_signed_and_fractional() {
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount("+2.5"), 2.5);
        assert_eq!(parse_amount(".5"), 0.5);
    }

    #[test]
    fn test_parse_amount_unparsable_is_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("kg 12"), 0.0);
    }

    // ==========================================
    // calculate_sisa
    // ==========================================

    #[test]
    fn test_sisa_positive() {
        assert_eq!(calculate_sisa("10", "4"), "6.00");
        assert_eq!(calculate_sisa("20 (400)", "5"), "15.00");
    }

    #[test]
    fn test_sisa_blank_inputs() {
        assert_eq!(calculate_sisa("-", "5"), "-");
        assert_eq!(calculate_sisa("10", "-"), "-");
        assert_eq!(calculate_sisa("", "5"), "-");
        assert_eq!(calculate_sisa("10", ""), "-");
    }

    #[test]
    fn test_sisa_zero_and_negative_suppressed() {
        assert_eq!(calculate_sisa("4", "4"), "-");
        assert_eq!(calculate_sisa("4", "10"), "-");
    }

    #[test]
    fn test_sisa_unparsable_inputs() {
        assert_eq!(calculate_sisa("no number", "5"), "-");
        assert_eq!(calculate_sisa("10", "no number"), "-");
    }

    #[test]
    fn test_sisa_fractional() {
        assert_eq!(calculate_sisa("1+1.25 + 19T (59)", "0.25"), "0.75");
    }

    // ==========================================
    // calculate_hasil
    // ==========================================

    #[test]
    fn test_hasil_single_material() {
        // input 20, waste 5, production 15, floor(15/7.10)=2, 2*7.10=14.2
        let result = calculate_hasil(
            &[material("TSG", "20 (400)")],
            &[waste("W", "5")],
            &trey_rule(7.10),
        );
        assert_eq!(result, "2 TREY 14.2 (1 Trey = 7.10 kg)");
    }

    #[test]
    fn test_hasil_waste_order_does_not_matter() {
        let materials = [material("TSG", "100")];
        let tray = trey_rule(7.0);
        let forward = [waste("A", "3"), waste("B", "7.5"), waste("C", "1")];
        let backward = [waste("C", "1"), waste("B", "7.5"), waste("A", "3")];
        assert_eq!(
            calculate_hasil(&materials, &forward, &tray),
            calculate_hasil(&materials, &backward, &tray)
        );
    }

    #[test]
    fn test_hasil_unparsable_cells_count_as_zero() {
        let result = calculate_hasil(
            &[material("TSG", "20"), material("TSG REJECT", "-")],
            &[waste("A", "5"), waste("B", ""), waste("C", "junk")],
            &trey_rule(7.10),
        );
        assert_eq!(result, "2 TREY 14.2 (1 Trey = 7.10 kg)");
    }

    #[test]
    fn test_hasil_negative_production_floors_downward() {
        // production = 10 - 25 = -15; floor(-15/7.0) = -3
        let result = calculate_hasil(
            &[material("TSG", "10")],
            &[waste("A", "25")],
            &trey_rule(7.0),
        );
        assert_eq!(result, "-3 TREY -21.0 (1 Trey = 7.00 kg)");
    }

    #[test]
    fn test_hasil_no_waste() {
        let result = calculate_hasil(&[material("TSG", "21")], &[], &trey_rule(7.0));
        assert_eq!(result, "3 TREY 21.0 (1 Trey = 7.00 kg)");
    }

    #[test]
    fn test_hasil_all_inputs_blank() {
        let result = calculate_hasil(&[material("TSG", "-")], &[], &trey_rule(7.0));
        assert_eq!(result, "0 TREY 0.0 (1 Trey = 7.00 kg)");
    }
}
