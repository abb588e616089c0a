//! Login Captcha
//!
//! Client-side generated captcha text. Decorative only: the check runs
//! entirely in the browser and provides no real access control.

/// Characters a captcha may contain
pub const CAPTCHA_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Captcha length
pub const CAPTCHA_LEN: usize = 6;

/// Map one random roll in [0, 1) to a captcha character
fn pick_char(roll: f64) -> char {
    let index = (roll * CAPTCHA_CHARS.len() as f64) as usize;
    CAPTCHA_CHARS[index.min(CAPTCHA_CHARS.len() - 1)] as char
}

/// Generate a fresh captcha string from browser randomness
pub fn generate() -> String {
    (0..CAPTCHA_LEN).map(|_| pick_char(js_sys::Math::random())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_is_alphanumeric_only() {
        assert!(CAPTCHA_CHARS.iter().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(CAPTCHA_CHARS.len(), 62);
    }

    #[test]
    fn pick_char_covers_full_range() {
        assert_eq!(pick_char(0.0), 'A');
        assert_eq!(pick_char(0.9999999), '9');
    }

    #[test]
    fn pick_char_never_panics_in_unit_interval() {
        let mut roll = 0.0;
        while roll < 1.0 {
            let c = pick_char(roll);
            assert!(c.is_ascii_alphanumeric());
            roll += 0.001;
        }
    }
}
