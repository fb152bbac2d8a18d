//! Per-letter frequency tabulation, the interface handed to the reporting
//! collaborator that renders side-by-side histograms.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::codec::ALPHABET_LEN;

/// Counts each of the 26 letters in `text`, in alphabetical order.
///
/// Characters outside `'A'..='Z'` are ignored rather than rejected so raw
/// (pre-cleaning) source text can be charted too; cipher output never
/// contains any.
pub fn letter_frequencies(text: &str) -> [u64; ALPHABET_LEN] {
    let mut frequencies = [0u64; ALPHABET_LEN];
    for (ch, count) in text.chars().filter(char::is_ascii_uppercase).counts() {
        frequencies[(ch as u8 - b'A') as usize] = count as u64;
    }
    frequencies
}

/// The two equal-alphabet frequency tables of a single encryption run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyReport {
    pub original: [u64; ALPHABET_LEN],
    pub encrypted: [u64; ALPHABET_LEN],
}

impl FrequencyReport {
    pub fn new(original_text: &str, encrypted_text: &str) -> Self {
        Self {
            original: letter_frequencies(original_text),
            encrypted: letter_frequencies(encrypted_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn prop_totals_count_every_letter(seed: Vec<u8>) -> bool {
        let text: String = seed.iter().map(|b| (b'A' + b % 26) as char).collect();
        letter_frequencies(&text).iter().sum::<u64>() == text.len() as u64
    }

    #[test]
    fn test_letter_frequencies() {
        let frequencies = letter_frequencies("HELLO");
        assert_eq!(frequencies[(b'L' - b'A') as usize], 2);
        assert_eq!(frequencies[(b'H' - b'A') as usize], 1);
        assert_eq!(frequencies[(b'E' - b'A') as usize], 1);
        assert_eq!(frequencies[(b'O' - b'A') as usize], 1);
        assert_eq!(frequencies.iter().sum::<u64>(), 5);
    }

    #[test]
    fn test_non_letters_are_ignored() {
        assert_eq!(letter_frequencies("A3 b!A"), letter_frequencies("AA"));
        assert_eq!(letter_frequencies("").iter().sum::<u64>(), 0);
    }

    #[test]
    fn test_report_totals_match() {
        let report = FrequencyReport::new("HELLO", "WWHECJ");
        assert_eq!(report.original.iter().sum::<u64>(), 5);
        assert_eq!(report.encrypted.iter().sum::<u64>(), 6);
    }
}
