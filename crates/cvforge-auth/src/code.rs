//! Numeric verification code generation for signup and password reset.

use rand::Rng;

/// Number of digits in a verification code.
const CODE_DIGITS: u32 = 6;

/// Generate a zero-padded 6-digit verification code.
pub fn generate_code() -> String {
    let max = 10u32.pow(CODE_DIGITS);
    let value = rand::thread_rng().gen_range(0..max);
    format!("{value:06}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_six_digits() {
        for _ in 0..100 {
            let code = generate_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
