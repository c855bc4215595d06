//! Reduces caller input to the characters a document number is made of.
//!
//! Only ASCII digits count: other Unicode decimal digits are dropped like any
//! punctuation, so they can never make a candidate reach its expected length.

/// Keeps the ASCII digits of `input`, in order.
pub fn keep_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Keeps the ASCII digits of `input` and every occurrence of `letter` in either
/// case. The letter is always emitted uppercased.
pub fn keep_digits_and(input: &str, letter: char) -> String {
    let letter = letter.to_ascii_uppercase();
    input
        .chars()
        .filter_map(|c| {
            if c.is_ascii_digit() {
                Some(c)
            } else if c.to_ascii_uppercase() == letter {
                Some(letter)
            } else {
                None
            }
        })
        .collect()
}
