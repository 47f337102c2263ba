use import_core::IdGenerator;

pub(crate) const DEFAULT_ID_LENGTH: usize = 32;

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890";

/// Random alphanumeric ids, 32 characters unless configured otherwise.
#[derive(Debug, Clone)]
pub struct NanoIdGenerator {
    length: usize,
    alphabet: Vec<char>,
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        Self::with_length(DEFAULT_ID_LENGTH)
    }
}

impl NanoIdGenerator {
    pub fn with_length(length: usize) -> Self {
        Self {
            length: length.max(1),
            alphabet: ALPHABET.chars().collect(),
        }
    }
}

impl IdGenerator for NanoIdGenerator {
    fn generate(&self) -> String {
        nanoid::format(nanoid::rngs::default, &self.alphabet, self.length)
    }
}
