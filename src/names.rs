/// Variable name generation.
///
/// A name is a random lowercase prefix followed by `_<index>`. The index
/// suffix makes every name in a `GlobalList` unique without rejection
/// sampling, so prefix collisions are harmless.
use rand::Rng;
use rand::seq::IndexedRandom;

/// Random lowercase ASCII string of exactly `len` letters.
pub fn random_name<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// `random_name` plus the `_<index>` disambiguator.
pub fn variable_name<R: Rng + ?Sized>(rng: &mut R, len: usize, index: usize) -> String {
    let mut name = random_name(rng, len);
    name.push('_');
    name.push_str(itoa::Buffer::new().format(index));
    name
}

/// Ordered, read-only list of declared globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalList {
    names: Vec<String>,
}

impl GlobalList {
    /// Generate `count` names; entry `i` carries the suffix `_i`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, name_len: usize) -> Self {
        let names = (0..count)
            .map(|i| variable_name(rng, name_len, i))
            .collect();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Names in declaration order, paired with their index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    /// Uniform pick with replacement. `None` only for an empty list.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.names.choose(rng).map(String::as_str)
    }
}
