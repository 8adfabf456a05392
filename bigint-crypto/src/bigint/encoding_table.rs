use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// A static HashMap mapping a radix-64 digit value (0 to 63) to its
    /// character in the standard Base64 alphabet (A-Z, a-z, 0-9, +, /).
    pub static ref INDEX_TO_BASE64_CHAR_MAP: HashMap<u8, char> = {
        let mut map = HashMap::new();
        let base64_chars: Vec<char> =
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/"
                .chars()
                .collect();

        for (index, &ch) in base64_chars.iter().enumerate() {
            map.insert(index as u8, ch);
        }

        map
    };

    /// A static HashMap mapping a standard Base64 alphabet character back
    /// to its radix-64 digit value (0 to 63).
    pub static ref BASE64_CHAR_TO_INDEX_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (&index, &ch) in INDEX_TO_BASE64_CHAR_MAP.iter() {
            map.insert(ch, index);
        }

        map
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_are_inverse_bijections() {
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP.len(), 64);
        assert_eq!(BASE64_CHAR_TO_INDEX_MAP.len(), 64);
        for index in 0..64u8 {
            let ch = INDEX_TO_BASE64_CHAR_MAP[&index];
            assert_eq!(BASE64_CHAR_TO_INDEX_MAP[&ch], index);
        }
    }

    #[test]
    fn test_alphabet_boundaries() {
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&0], 'A');
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&25], 'Z');
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&26], 'a');
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&51], 'z');
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&52], '0');
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&61], '9');
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&62], '+');
        assert_eq!(INDEX_TO_BASE64_CHAR_MAP[&63], '/');
        assert!(!BASE64_CHAR_TO_INDEX_MAP.contains_key(&'='));
    }
}
