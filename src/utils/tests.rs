use crate::utils::{UtilsError, repdigit, repdigit_seeds, validate_digit};

#[test]
fn test_repdigit() {
    assert_eq!(repdigit(5, 1), Ok(5));
    assert_eq!(repdigit(5, 4), Ok(5555));
    assert_eq!(repdigit(9, 6), Ok(999_999));
    assert_eq!(repdigit(3, 0), Ok(0));
}

#[test]
fn test_repdigit_overflow() {
    let result = repdigit(9, 25);
    assert_eq!(
        result,
        Err(UtilsError::RepdigitOverflow {
            digit: 9,
            repeats: 25
        })
    );
}

#[test]
fn test_repdigit_seeds() {
    let result = repdigit_seeds(7);
    assert!(result.is_ok());
    if let Ok(seeds) = result {
        let values: Vec<u64> = seeds.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec![7, 77, 777, 7777, 77777, 777_777]);
        for (value, text) in &seeds {
            assert_eq!(&value.to_string(), text);
            assert!(text.chars().all(|c| c == '7'));
        }
    }
}

#[test]
fn test_validate_digit_valid() {
    for digit in 1..=9 {
        assert!(validate_digit(digit).is_ok());
    }
}

#[test]
fn test_validate_digit_invalid() {
    assert_eq!(validate_digit(0), Err(UtilsError::InvalidDigit(0)));
    assert_eq!(validate_digit(10), Err(UtilsError::InvalidDigit(10)));
}
