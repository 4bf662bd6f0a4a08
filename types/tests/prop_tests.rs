use proptest::prelude::*;

use multiseed_types::{CoinType, DerivationPath, HARDENED_OFFSET};

proptest! {
    /// Any in-range path renders and parses back to itself.
    #[test]
    fn path_display_parse_roundtrip(coin in 0u32..HARDENED_OFFSET, index in 0u32..HARDENED_OFFSET) {
        let path = DerivationPath::new(CoinType::new(coin), index).unwrap();
        let parsed: DerivationPath = path.to_string().parse().unwrap();
        prop_assert_eq!(parsed, path);
    }

    /// Every level of a path carries the hardened bit.
    #[test]
    fn hardened_levels_all_hardened(coin in 0u32..HARDENED_OFFSET, index in 0u32..HARDENED_OFFSET) {
        let path = DerivationPath::new(CoinType::new(coin), index).unwrap();
        for level in path.hardened_levels() {
            prop_assert!(level >= HARDENED_OFFSET);
        }
        prop_assert_eq!(path.hardened_levels()[3] & !HARDENED_OFFSET, index);
    }

    /// Indices with the hardened bit already set are rejected.
    #[test]
    fn reserved_indices_rejected(index in HARDENED_OFFSET..=u32::MAX) {
        prop_assert!(DerivationPath::new(CoinType::SOLANA, index).is_err());
    }

    /// Unregistered coin codes never report a family or a label.
    #[test]
    fn unregistered_codes_unsupported(code in 0u32..100_000) {
        let coin = CoinType::new(code);
        let registered = CoinType::REGISTERED.contains(&coin);
        prop_assert_eq!(coin.is_supported(), registered);
        prop_assert_eq!(coin.label().is_empty(), !registered);
    }
}
