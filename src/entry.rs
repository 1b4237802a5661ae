/// A key-value pair stored inside one of the containers.
///
/// Entries serialize as a struct with a `key` and a `value` field.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Entry { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::Entry;
    use serde_test::{assert_ser_tokens, Token};

    #[test]
    fn test_serialize() {
        assert_ser_tokens(
            &Entry::new(1u32, 'a'),
            &[
                Token::Struct { name: "Entry", len: 2 },
                Token::Str("key"),
                Token::U32(1),
                Token::Str("value"),
                Token::Char('a'),
                Token::StructEnd,
            ],
        );
    }
}
