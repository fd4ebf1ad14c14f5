//! Fake data providers.
//!
//! The generator only sees the `FakeProvider` trait, so tests can swap in a
//! provider with fixed output.

use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use rand::Rng;

/// Source of pseudo-realistic words, sentences and company names
pub trait FakeProvider {
    /// A single lowercase word
    fn word(&mut self) -> String;

    /// A company name such as "Hilll, Kutch and Hane"
    fn company_name(&mut self) -> String;

    /// A sentence with exactly `word_count` words, ending in a period
    fn sentence(&mut self, word_count: usize) -> String;
}

impl<F: FakeProvider + ?Sized> FakeProvider for &mut F {
    fn word(&mut self) -> String {
        (**self).word()
    }

    fn company_name(&mut self) -> String {
        (**self).company_name()
    }

    fn sentence(&mut self, word_count: usize) -> String {
        (**self).sentence(word_count)
    }
}

/// English fake data from the `fake` crate, drawn from its own RNG
pub struct FakerProvider<R: Rng> {
    rng: R,
}

impl<R: Rng> FakerProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> FakeProvider for FakerProvider<R> {
    fn word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }

    fn company_name(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    fn sentence(&mut self, word_count: usize) -> String {
        Sentence(word_count..word_count + 1).fake_with_rng(&mut self.rng)
    }
}

/// Uppercase the first character, leaving the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
