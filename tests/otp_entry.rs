//! Scenario walks over the code entry rules, driven the way the page drives
//! them: raw events in, outcomes and verdicts out. These run natively; no
//! browser is involved.

use otp_web::features::otp::form::{CODE_LENGTH, Key, OtpForm, Validation};
use otp_web::features::otp::types::ValidateOtpRequest;

#[test]
fn typing_the_full_code_produces_the_joined_digits() {
    let mut form = OtpForm::new();
    let mut focused = 0;

    for digit in ["1", "2", "3", "4", "5", "6"] {
        let (next, outcome) = form.input(focused, digit);
        form = next;
        if let Some(target) = outcome.focus {
            focused = target;
        }
    }

    assert_eq!(focused, CODE_LENGTH - 1, "entry ends on the last cell");

    let (_, outcome) = form.key(focused, Key::Enter);
    assert!(outcome.submit, "Enter on the last cell requests submission");

    let (form, verdict) = form.validated();
    assert_eq!(verdict, Validation::Ready("123456".to_string()));
    assert!(
        (0..CODE_LENGTH).all(|index| !form.is_flagged(index)),
        "a passing validation leaves no cell flagged"
    );

    let Validation::Ready(code) = verdict else {
        unreachable!();
    };
    let request = ValidateOtpRequest { otp: code };
    assert_eq!(request.otp, "123456");
}

#[test]
fn pasting_mixed_content_flags_only_the_stray_cell() {
    let form = OtpForm::new();
    let (form, outcome) = form.paste("12a456");
    assert_eq!(outcome.focus, Some(CODE_LENGTH - 1));

    let (form, verdict) = form.validated();
    assert_eq!(verdict, Validation::Invalid { focus: 2 });
    for index in 0..CODE_LENGTH {
        assert_eq!(form.is_flagged(index), index == 2);
    }
}

#[test]
fn oversized_paste_keeps_the_first_six_characters() {
    let form = OtpForm::new();
    let (form, outcome) = form.paste("12345678");

    assert_eq!(outcome.focus, Some(CODE_LENGTH - 1));
    for (index, expected) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
        assert_eq!(form.cell_text(index), *expected);
    }

    let (_, verdict) = form.validated();
    assert_eq!(verdict, Validation::Ready("123456".to_string()));
}

#[test]
fn incomplete_entry_is_flagged_and_never_ready() {
    let mut form = OtpForm::new();
    let (next, _) = form.input(0, "1");
    form = next;
    let (next, _) = form.input(1, "2");
    form = next;

    let (form, verdict) = form.validated();
    assert_eq!(
        verdict,
        Validation::Incomplete {
            focus: CODE_LENGTH - 1
        },
        "focus lands on the highest unfilled cell"
    );
    for index in 0..CODE_LENGTH {
        assert_eq!(form.is_flagged(index), index >= 2);
    }
}

#[test]
fn backspacing_walks_the_row_back_to_the_first_cell() {
    let mut form = OtpForm::new();
    for (index, digit) in ["1", "2", "3"].iter().enumerate() {
        let (next, _) = form.input(index, digit);
        form = next;
    }

    let mut focused = 2;
    for _ in 0..4 {
        let (next, outcome) = form.key(focused, Key::Backspace);
        form = next;
        assert_eq!(form.cell_text(focused), "");
        if let Some(target) = outcome.focus {
            focused = target;
        }
    }

    assert_eq!(focused, 0, "retreat stops at the first cell");
    assert_eq!(form.code(), "");
}

#[test]
fn type_ahead_routes_the_digit_into_the_next_cell() {
    // Cell 0 already holds a digit; the native input swallows the keystroke,
    // so the keydown pre-clears cell 1 and the digit arrives there as a
    // change event.
    let (form, _) = OtpForm::new().input(0, "1");

    let (form, outcome) = form.key(0, Key::Digit('9'));
    assert_eq!(outcome.focus, Some(1));
    assert_eq!(form.cell_text(1), "");

    let (form, outcome) = form.input(1, "9");
    assert_eq!(form.cell_text(1), "9");
    assert_eq!(outcome.focus, Some(2));
}

#[test]
fn correcting_a_flagged_cell_clears_the_flag_and_validates() {
    let form = OtpForm::new();
    let (form, _) = form.paste("1x3456");

    let (form, verdict) = form.validated();
    assert_eq!(verdict, Validation::Invalid { focus: 1 });
    assert!(form.is_flagged(1));

    let (form, outcome) = form.input(1, "2");
    assert!(!form.is_flagged(1), "a fresh digit clears the flag");
    assert_eq!(outcome.focus, Some(2));

    let (_, verdict) = form.validated();
    assert_eq!(verdict, Validation::Ready("123456".to_string()));
}
