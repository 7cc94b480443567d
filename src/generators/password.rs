use rand::Rng;
use thiserror::Error;

use crate::models::GenerationMode;

pub const DIGITS: &[u8] = b"0123456789";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid password length {0}, length must not be negative")]
    InvalidLength(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    fn flipped(self) -> Self {
        match self {
            LetterCase::Upper => LetterCase::Lower,
            LetterCase::Lower => LetterCase::Upper,
        }
    }

    fn alphabet(self) -> &'static [u8] {
        match self {
            LetterCase::Upper => UPPERCASE,
            LetterCase::Lower => LOWERCASE,
        }
    }
}

/// Generates passwords made of digits and letters, choosing between the two
/// with a fair coin at every position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordGenerator {
    mode: GenerationMode,
}

impl PasswordGenerator {
    pub fn new(mode: GenerationMode) -> Self {
        PasswordGenerator { mode }
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Generate a password using the calling thread's random generator.
    pub fn generate(&self, length: i64) -> Result<String, GeneratorError> {
        self.generate_with(&mut rand::thread_rng(), length)
    }

    /// Generate a password of exactly `length` characters drawing from `rng`.
    ///
    /// In [`GenerationMode::Alternating`] the case of the first letter is a
    /// coin flip and every following letter takes the opposite case of the
    /// letter before it.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: i64,
    ) -> Result<String, GeneratorError> {
        let length = usize::try_from(length).map_err(|_| GeneratorError::InvalidLength(length))?;

        let mut password = String::with_capacity(length);
        let mut previous_case: Option<LetterCase> = None;

        for _ in 0..length {
            let alphabet = if rng.gen_bool(0.5) {
                DIGITS
            } else {
                match self.mode {
                    GenerationMode::Simple => LETTERS,
                    GenerationMode::Alternating => {
                        let case = match previous_case {
                            Some(case) => case.flipped(),
                            None if rng.gen_bool(0.5) => LetterCase::Upper,
                            None => LetterCase::Lower,
                        };
                        previous_case = Some(case);
                        case.alphabet()
                    }
                }
            };

            password.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
        }

        Ok(password)
    }
}
