//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess, one symbol per letter:
//! - 0 = Gray (letter not in word)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a base-3 code where each position contributes
//! digit × 3^position, together with its length. Fifteen letters need at
//! most 3^15 - 1 = 14,348,906, which fits a `u32`.

use super::word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

/// Error type for unparseable patterns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Pattern must be 3 to 15 symbols, got {0}")]
    InvalidLength(usize),
    #[error("Invalid feedback symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}

impl Pattern {
    /// All greens for a word of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` is outside 3..=15
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self::from_digit_iter(std::iter::repeat_n(2, len))
    }

    fn from_digit_iter(digits: impl IntoIterator<Item = u8>) -> Self {
        let mut code = 0u32;
        let mut multiplier = 1u32;
        let mut len = 0u8;
        for digit in digits {
            debug_assert!(digit < 3, "Pattern digit must be < 3");
            code += u32::from(digit) * multiplier;
            multiplier *= 3;
            len += 1;
        }
        debug_assert!(
            (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&usize::from(len)),
            "Pattern length out of range"
        );
        Self { code, len }
    }

    /// Get the raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of symbols in the pattern
    #[inline]
    #[must_use]
    pub fn length(self) -> usize {
        usize::from(self.len)
    }

    /// Symbol at `position` (0, 1 or 2)
    ///
    /// # Panics
    /// Panics in debug mode if `position >= self.length()`
    #[must_use]
    pub fn digit(self, position: usize) -> u8 {
        debug_assert!(position < self.length());
        let mut val = self.code;
        for _ in 0..position {
            val /= 3;
        }
        (val % 3) as u8
    }

    /// All symbols in position order
    #[must_use]
    pub fn digits(self) -> Vec<u8> {
        let mut result = Vec::with_capacity(self.length());
        let mut val = self.code;
        for _ in 0..self.len {
            result.push((val % 3) as u8);
            val /= 3;
        }
        result
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::perfect(self.length())
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the answer
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters. Both words must have the same length.
    ///
    /// # Algorithm
    /// 1. Count the letters of `target` into 26 buckets
    /// 2. First pass: mark exact matches (greens) and consume their letters
    /// 3. Second pass: mark present-but-wrong-position (yellows) from what is left
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Word, Pattern};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("trace").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// // C(yellow) R(green) A(green) N(gray) E(green)
    /// assert_eq!(pattern.to_string(), "12202");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.length(), target.length());

        let guess_bytes = guess.bytes();
        let target_bytes = target.bytes();
        let mut result = [0u8; MAX_WORD_LENGTH];
        let mut available = target.letter_counts();

        // First pass: greens
        for (i, (&g, &t)) in guess_bytes.iter().zip(target_bytes).enumerate() {
            if g == t {
                result[i] = 2;
                available[usize::from(g - b'a')] -= 1;
            }
        }

        // Second pass: yellows from the remaining pool
        for (i, &g) in guess_bytes.iter().enumerate() {
            if result[i] == 0 {
                let slot = &mut available[usize::from(g - b'a')];
                if *slot > 0 {
                    result[i] = 1;
                    *slot -= 1;
                }
            }
        }

        Self::from_digit_iter(result[..guess_bytes.len()].iter().copied())
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.digits().into_iter().filter(|&d| d == 2).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.digits().into_iter().filter(|&d| d == 1).count()
    }

    /// Parse a pattern from a string like "02212", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - '2'/'G'/'g'/🟩 for green
    /// - '1'/'Y'/'y'/🟨 for yellow
    /// - '0'/'-'/'_'/⬜ for gray
    ///
    /// # Errors
    /// Returns `PatternError` on an unknown symbol or a length outside 3..=15.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::parse("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let digits = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol {
                '2' | 'G' | 'g' | '🟩' => Ok(2),
                '1' | 'Y' | 'y' | '🟨' => Ok(1),
                '0' | '-' | '_' | '⬜' => Ok(0),
                _ => Err(PatternError::InvalidSymbol { symbol, position }),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&digits.len()) {
            return Err(PatternError::InvalidLength(digits.len()));
        }

        Ok(Self::from_digit_iter(digits))
    }

    /// Parse a pattern made only of the digits 0, 1 and 2
    ///
    /// This is the strict form used by history files.
    ///
    /// # Errors
    /// Returns `PatternError` on any other symbol or a length outside 3..=15.
    pub fn from_digits(s: &str) -> Result<Self, PatternError> {
        if let Some((position, symbol)) = s
            .chars()
            .enumerate()
            .find(|(_, c)| !matches!(c, '0' | '1' | '2'))
        {
            return Err(PatternError::InvalidSymbol { symbol, position });
        }
        Self::parse(s)
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.digits()
            .into_iter()
            .map(|digit| match digit {
                2 => '🟩',
                1 => '🟨',
                _ => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
