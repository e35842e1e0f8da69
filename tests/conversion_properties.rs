//! End-to-end checks of the public conversion, validation and
//! formatting surface.

use alloy_primitives::U256;
use proptest::prelude::*;
use wallet_wrapped::*;

#[test]
fn test_denomination_examples() {
    assert_eq!(from_wei("1000000000000000000").unwrap(), "1");
    assert_eq!(from_wei("500000000000000000").unwrap(), "0.5");
    assert_eq!(to_wei("1").unwrap(), "1000000000000000000");
    assert_eq!(to_wei("0.5").unwrap(), "500000000000000000");
    assert_eq!(gwei_to_wei("1").unwrap(), "1000000000");
    assert_eq!(wei_to_gwei("1000000000").unwrap(), "1");
}

#[test]
fn test_validation_examples() {
    assert!(is_valid_token_address(&format!("0x{}", "0".repeat(40))));
    assert!(!is_valid_token_address("invalid"));
    assert!(is_valid_amount("100"));
    assert!(!is_valid_amount("-100"));
    assert!(!is_valid_amount("abc"));
}

#[test]
fn test_formatting_examples() {
    assert_eq!(format_number(1000.0), "1,000");
    assert_eq!(format_number(1_000_000.0), "1,000,000");
    assert_eq!(format_currency(1000.0), "$1,000.00");
    assert_eq!(format_percent(0.1234), "12.34%");
}

#[test]
fn test_shorten_address_length() {
    let address = "0x6B175474E89094C44Da98b954EedcdeCB5BE3830";
    assert_eq!(address.len(), 42);
    assert_eq!(shorten_address(address, 6, 4).len(), 13);
    assert_eq!(shorten_address("0xabc", 6, 4), "0xabc");
}

#[test]
fn test_errors_are_typed() {
    assert!(matches!(to_wei("1.0000000000000000001"), Err(UnitsError::InvalidAmount(_))));
    assert!(matches!(from_wei("abc"), Err(UnitsError::InvalidAmount(_))));
    assert_eq!(from_wei(&"9".repeat(80)), Err(UnitsError::Overflow));
}

proptest! {
    #[test]
    fn wei_round_trips_through_ether(limbs in any::<[u64; 4]>()) {
        let wei = U256::from_limbs(limbs).to_string();
        let ether = from_wei(&wei).unwrap();
        prop_assert_eq!(to_wei(&ether).unwrap(), wei);
    }

    #[test]
    fn wei_round_trips_through_gwei(wei in any::<u128>()) {
        let wei = wei.to_string();
        let gwei = wei_to_gwei(&wei).unwrap();
        prop_assert_eq!(gwei_to_wei(&gwei).unwrap(), wei);
    }

    #[test]
    fn ether_output_is_minimal(wei in any::<u128>()) {
        let ether = from_wei(&wei.to_string()).unwrap();
        if let Some((_, fraction)) = ether.split_once('.') {
            prop_assert!(!fraction.is_empty() && !fraction.ends_with('0'));
        }
    }

    #[test]
    fn shorten_never_panics(s in ".*", start in 0usize..50, end in 0usize..50) {
        let out = truncate_middle(&s, start, end, "...");
        if s.chars().count() < start + end {
            prop_assert_eq!(out, s);
        } else {
            prop_assert_eq!(out.chars().count(), start + end + 3);
        }
    }
}
