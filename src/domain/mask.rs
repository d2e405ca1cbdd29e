//! Masking tokens and digit-preserving masks.

/// Prefix substituted for the hidden part of a digit run.
pub const MASK_TOKEN: &str = "XXXXX";

/// Number of trailing digits a digit-run mask keeps.
pub const VISIBLE_DIGITS: usize = 4;

pub const ACCOUNT_LABEL: &str = "Account Number: XXXXXXXXX";
pub const ROUTING_LABEL: &str = "Routing Number: XXXXXXXXX";
pub const NAME_PLACEHOLDER: &str = "CUSTOMER NAME";
pub const ADDRESS_PLACEHOLDER: &str = "CUSTOMER ADDRESS";
pub const PHONE_MASK: &str = "XXX-XXX-XXXX";
pub const EMAIL_MASK: &str = "XXXXX@XXXXX.com";
pub const SSN_MASK: &str = "XXX-XX-XXXX";

/// Masks a digit run, keeping its last four characters.
///
/// Runs shorter than four characters are replaced by [`MASK_TOKEN`] alone.
///
/// ```
/// use statement_redactor::domain::mask_digit_run;
///
/// assert_eq!(mask_digit_run("000123456789"), "XXXXX6789");
/// assert_eq!(mask_digit_run("12"), "XXXXX");
/// ```
pub fn mask_digit_run(run: &str) -> String {
    let len = run.chars().count();
    if len < VISIBLE_DIGITS {
        return MASK_TOKEN.to_string();
    }

    let tail: String = run.chars().skip(len - VISIBLE_DIGITS).collect();
    format!("{}{}", MASK_TOKEN, tail)
}
