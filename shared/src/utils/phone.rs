//! Phone number utilities
//!
//! Numbers collected by the lead form are Brazilian. The normalizer is
//! deliberately lenient: it never rejects input, and the provider is the
//! real gate for malformed numbers.

/// Brazilian country calling code
pub const COUNTRY_CODE: &str = "55";

/// Area code assumed when only a 9-digit subscriber number is given (São Paulo)
pub const DEFAULT_AREA_CODE: &str = "11";

/// Keep only ASCII digits
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize an arbitrary user-entered phone string to `+55...` form.
///
/// 1. Strip every non-digit character.
/// 2. Drop one leading national trunk `0`.
/// 3. Insert the country code when missing: 10 or 11 digits get `55`,
///    9 digits get `55` plus the default area code, anything else gets `55`.
/// 4. Prefix with `+`.
pub fn normalize_phone_number(phone: &str) -> String {
    let mut digits = digits_only(phone);

    if digits.starts_with('0') {
        digits.remove(0);
    }

    if !digits.starts_with(COUNTRY_CODE) {
        digits = match digits.len() {
            10 | 11 => format!("{COUNTRY_CODE}{digits}"),
            9 => format!("{COUNTRY_CODE}{DEFAULT_AREA_CODE}{digits}"),
            _ => format!("{COUNTRY_CODE}{digits}"),
        };
    }

    format!("+{digits}")
}

/// Mask a phone number for logs (e.g. +55*******4321)
pub fn mask_phone_number(phone: &str) -> String {
    let digits = digits_only(phone);
    if digits.len() <= 6 {
        return "****".to_string();
    }

    let prefix_len = COUNTRY_CODE.len().min(digits.len() - 4);
    let (head, rest) = digits.split_at(prefix_len);
    let tail = &rest[rest.len() - 4..];
    format!("+{}{}{}", head, "*".repeat(rest.len() - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("(11) 98765-4321"), "11987654321");
        assert_eq!(digits_only("+55 11 98765 4321"), "5511987654321");
        assert_eq!(digits_only("abc"), "");
    }

    #[test]
    fn test_canonical_input_is_unchanged() {
        assert_eq!(normalize_phone_number("+5511987654321"), "+5511987654321");
        assert_eq!(normalize_phone_number("+551134567890"), "+551134567890");

        let once = normalize_phone_number("(21) 99876-5432");
        assert_eq!(normalize_phone_number(&once), once);
    }

    #[test]
    fn test_eleven_digit_local_number() {
        assert_eq!(normalize_phone_number("11987654321"), "+5511987654321");
        assert_eq!(normalize_phone_number("(11) 98765-4321"), "+5511987654321");
        assert_eq!(normalize_phone_number("21 99876 5432"), "+5521998765432");
        assert_eq!(normalize_phone_number("47.99123.4567"), "+5547991234567");
    }

    #[test]
    fn test_ten_digit_landline() {
        assert_eq!(normalize_phone_number("(11) 3456-7890"), "+551134567890");
    }

    #[test]
    fn test_nine_digit_number_assumes_sao_paulo() {
        assert_eq!(normalize_phone_number("987654321"), "+5511987654321");
        assert_eq!(normalize_phone_number("98765-4321"), "+5511987654321");
    }

    #[test]
    fn test_leading_trunk_zero_is_stripped() {
        assert_eq!(
            normalize_phone_number("011987654321"),
            normalize_phone_number("11987654321")
        );
        assert_eq!(normalize_phone_number("(011) 98765-4321"), "+5511987654321");
    }

    #[test]
    fn test_other_lengths_get_country_code() {
        assert_eq!(normalize_phone_number("12345"), "+5512345");
        assert_eq!(normalize_phone_number(""), "+55");
        assert_eq!(normalize_phone_number("no digits"), "+55");
    }

    #[test]
    fn test_number_starting_with_55_keeps_its_digits() {
        // A local number whose area code is 55 (Rio Grande do Sul) is taken as
        // already carrying the country code. Known leniency.
        assert_eq!(normalize_phone_number("55991234567"), "+55991234567");
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+5511987654321"), "+55*******4321");
        assert_eq!(mask_phone_number("(11) 98765-4321"), "+11*****4321");
        assert_eq!(mask_phone_number("1234567"), "+12*4567");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
