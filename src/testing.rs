use rand::Rng;
use rand::distr::Alphanumeric;

const ID_LENGTH: usize = 15;

/// Message suffix for table driven test assertions: `assert!(cond, "{}", test_case_msg(tc.description))`.
pub fn test_case_msg(description: &str) -> String {
    format!("\nTest case:  {description}")
}

/// Draws a random lowercase id starting with a letter.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    // Should follow DNS naming convention https://tools.ietf.org/html/rfc1035
    loop {
        let rand_string: String = (0..ID_LENGTH).map(|_| char::from(rng.sample(Alphanumeric))).collect();
        if rand_string.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return rand_string.to_lowercase();
        }
    }
}
