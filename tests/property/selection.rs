//! Selection resolution over arbitrary list lengths and choices

use contract_tracker::error::LedgerError;
use contract_tracker::selection::{parse_choice, resolve};
use proptest::prelude::*;

proptest! {
    #[test]
    fn in_range_choice_returns_that_position(len in 1usize..64, seed in any::<usize>()) {
        let items: Vec<usize> = (0..len).collect();
        let choice = seed % len + 1;
        prop_assert_eq!(*resolve(&items, choice).unwrap(), choice - 1);
    }

    #[test]
    fn out_of_range_choice_reports_bounds(len in 0usize..64, over in 1usize..1000) {
        let items: Vec<u8> = vec![0; len];
        let choice = len + over;
        match resolve(&items, choice) {
            Err(LedgerError::InvalidSelection { choice: c, available }) => {
                prop_assert_eq!(c, choice);
                prop_assert_eq!(available, len);
            }
            other => prop_assert!(false, "unexpected result: {:?}", other),
        }
    }

    #[test]
    fn zero_never_resolves(len in 0usize..64) {
        let items: Vec<u8> = vec![0; len];
        let is_invalid = matches!(
            resolve(&items, 0),
            Err(LedgerError::InvalidSelection { choice: 0, .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn padded_numbers_parse(n in any::<u32>(), left in 0usize..4, right in 0usize..4) {
        let raw = format!("{}{}{}", " ".repeat(left), n, " ".repeat(right));
        prop_assert_eq!(parse_choice(&raw).unwrap(), n as usize);
    }

    #[test]
    fn non_numeric_input_is_an_input_error(s in "[a-zA-Z]{1,8}") {
        let is_input_error = matches!(parse_choice(&s), Err(LedgerError::InputError(_)));
        prop_assert!(is_input_error);
    }
}
