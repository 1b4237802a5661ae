//! Keys that can be reduced to a bucket index.

use siphasher::sip::SipHasher;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hasher;

/// A key that can be reduced modulo a bucket count.
///
/// The hash tables in this crate place a key in bucket `key.modulo(bucket_count)`. The result
/// must be smaller than `modulus` and must only depend on the key and the modulus. Borrowed forms
/// of a key must agree with the owned form, e.g. `"a".modulo(m) == String::from("a").modulo(m)`.
pub trait Modulo {
    fn modulo(&self, modulus: usize) -> usize;
}

macro_rules! impl_modulo_for_integers {
    ($($integer:ty),*) => {
        $(
            impl Modulo for $integer {
                fn modulo(&self, modulus: usize) -> usize {
                    // Negative values wrap to their two's complement word first.
                    (*self as u64 % modulus as u64) as usize
                }
            }
        )*
    };
}

impl_modulo_for_integers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

fn hash_str(value: &str) -> u64 {
    let mut hasher = SipHasher::new();
    hasher.write(value.as_bytes());
    hasher.finish()
}

impl Modulo for str {
    fn modulo(&self, modulus: usize) -> usize {
        (hash_str(self) % modulus as u64) as usize
    }
}

impl Modulo for String {
    fn modulo(&self, modulus: usize) -> usize {
        self.as_str().modulo(modulus)
    }
}

impl<'a, T> Modulo for &'a T
where
    T: Modulo + ?Sized,
{
    fn modulo(&self, modulus: usize) -> usize {
        (**self).modulo(modulus)
    }
}

/// A person's name used as a composite key.
///
/// Names are ordered by last name and then by first name, and display as `first last`.
///
/// # Examples
///
/// ```
/// use splay_collections::Name;
///
/// let ada = Name::new("Ada", "Lovelace");
/// let alan = Name::new("Alan", "Turing");
/// assert!(ada < alan);
/// assert!(Name::new("Zed", "Lovelace") < alan);
/// assert_eq!(ada.to_string(), "Ada Lovelace");
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

impl Name {
    pub fn new<F, L>(first: F, last: L) -> Self
    where
        F: Into<String>,
        L: Into<String>,
    {
        Name {
            first: first.into(),
            last: last.into(),
        }
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Name) -> Ordering {
        self.last
            .cmp(&other.last)
            .then_with(|| self.first.cmp(&other.first))
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Name) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Modulo for Name {
    fn modulo(&self, modulus: usize) -> usize {
        let hash = hash_str(&self.first) ^ (hash_str(&self.last) << 1);
        (hash % modulus as u64) as usize
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::{Modulo, Name};

    #[test]
    fn test_integer_modulo() {
        assert_eq!(17u32.modulo(5), 2);
        assert_eq!(0i32.modulo(1), 0);
        assert_eq!(12usize.modulo(4), 0);
    }

    #[test]
    fn test_negative_integer_wraps() {
        // 2^64 - 1 = 3 * 5 * 17 * 257 * 641 * 65537 * 6700417
        assert_eq!((-1i32).modulo(5), 0);
        assert_eq!((-1i64).modulo(2), 1);
        assert_eq!((-2i8).modulo(4), 2);
    }

    #[test]
    fn test_string_modulo_is_stable() {
        let owned = String::from("splay");
        for modulus in 1..32 {
            assert!(owned.modulo(modulus) < modulus);
            assert_eq!(owned.modulo(modulus), "splay".modulo(modulus));
            assert_eq!((&owned).modulo(modulus), owned.modulo(modulus));
        }
    }

    #[test]
    fn test_name_ordering() {
        let mut names = vec![
            Name::new("b", "y"),
            Name::new("a", "z"),
            Name::new("a", "y"),
        ];
        names.sort();
        assert_eq!(
            names,
            vec![
                Name::new("a", "y"),
                Name::new("b", "y"),
                Name::new("a", "z"),
            ],
        );
    }

    #[test]
    fn test_name_modulo() {
        let name = Name::new("Grace", "Hopper");
        let swapped = Name::new("Hopper", "Grace");
        assert!(name.modulo(7) < 7);
        assert_eq!(name.modulo(1), 0);
        assert_eq!(name.modulo(1 << 20), name.clone().modulo(1 << 20));
        assert_ne!(name, swapped);
    }
}
