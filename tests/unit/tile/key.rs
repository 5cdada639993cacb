//! Tests for the tile key grammar and ordering

#[cfg(test)]
mod tests {
    use tilerules::RulesError;
    use tilerules::tile::key::{TileKey, encode_key, parse_key};
    use tilerules::tile::orientation::OrientationFlags;

    // Tests unflipped keys render as the bare id and flipped keys carry their flags
    // Verified by always appending the separator
    #[test]
    fn test_key_rendering() {
        assert_eq!(encode_key(17).to_string(), "17");
        assert_eq!(encode_key(0xC000_0000 | 170).to_string(), "170:HV");
        assert_eq!(encode_key(0x6000_0000 | 3).to_string(), "3:VD");
    }

    // Tests the same base with different flags gives distinct keys
    // Verified by ignoring flags in equality
    #[test]
    fn test_flipped_variants_are_distinct() {
        let plain = encode_key(5);
        let flipped = encode_key(0x8000_0000 | 5);
        assert_ne!(plain, flipped);
        assert_eq!(flipped.to_string(), "5:H");
        assert_eq!(plain.base(), flipped.base());
    }

    // Tests parse accepts the canonical forms
    // Verified by parsing flags before the separator
    #[test]
    fn test_parse_key_accepts_canonical_text() {
        assert_eq!(parse_key("17").ok(), Some(TileKey::plain(17)));
        assert_eq!(
            parse_key("170:HVD").ok(),
            Some(TileKey::new(
                170,
                OrientationFlags::H
                    .union(OrientationFlags::V)
                    .union(OrientationFlags::D)
            ))
        );
        assert_eq!(parse_key("0").ok(), Some(TileKey::plain(0)));
        assert_eq!(parse_key("536870911").ok(), Some(TileKey::plain(0x1FFF_FFFF)));
    }

    // Tests every grammar violation surfaces as MalformedKey
    // Verified by accepting an empty flag list
    #[test]
    fn test_parse_key_rejects_malformed_text() {
        for text in [
            "", ":H", "5:", "5:X", "5:DH", "abc", "-5", "+5", "05", "5 ", "5:H:V", "536870912",
            "99999999999",
        ] {
            assert!(
                matches!(parse_key(text), Err(RulesError::MalformedKey { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    // Tests parse and render round-trip across flag subsets
    // Verified by dropping flags on parse
    #[test]
    fn test_round_trip_over_flag_subsets() {
        for flags in OrientationFlags::ALL {
            for base in [0, 1, 9, 10, 123_456, 0x1FFF_FFFF] {
                let key = TileKey::new(base, flags);
                assert_eq!(parse_key(&key.to_string()).ok(), Some(key));
            }
        }
    }

    // Tests keys order by their canonical strings rather than numerically
    // Verified by deriving numeric ordering
    #[test]
    fn test_ordering_follows_canonical_string() {
        let mut keys = vec![
            parse_key("5:H").ok(),
            parse_key("50").ok(),
            parse_key("10").ok(),
            parse_key("5").ok(),
            parse_key("9").ok(),
        ];
        keys.sort();
        let rendered: Vec<String> = keys
            .into_iter()
            .flatten()
            .map(|key| key.to_string())
            .collect();
        assert_eq!(rendered, ["10", "5", "50", "5:H", "9"]);
    }

    // Tests keys serialize as JSON strings and reject malformed strings on load
    // Verified by serializing the base id as a number
    #[test]
    fn test_serde_uses_canonical_string() {
        let key = TileKey::new(170, OrientationFlags::V);
        assert_eq!(serde_json::to_string(&key).ok().as_deref(), Some("\"170:V\""));
        assert_eq!(serde_json::from_str::<TileKey>("\"170:V\"").ok(), Some(key));
        assert!(serde_json::from_str::<TileKey>("\"170:Q\"").is_err());
        assert!(serde_json::from_str::<TileKey>("170").is_err());
    }

    // Tests recordability and packing follow the base identity
    // Verified by checking flags instead of base in is_recordable
    #[test]
    fn test_key_packing_and_recordability() {
        let key = encode_key(0x8000_0001);
        assert!(!key.is_recordable());
        assert_eq!(key.packed(), 0x8000_0001);
        assert!(TileKey::plain(2).is_recordable());
        assert_eq!("42:D".parse::<TileKey>().ok(), Some(TileKey::new(42, OrientationFlags::D)));
    }
}
