//! Natural-order string comparison
//!
//! Runs of ASCII digits compare by numeric value, everything else compares
//! character by character. `"img2" < "img10"` under natural order, while a
//! plain byte comparison puts `"img10"` first.
//!
//! Rules:
//! - leading whitespace is ignored
//! - leading zeros in a digit run are ignored for its value; between equal
//!   values the shorter run sorts first
//! - the case-insensitive form folds both sides to lowercase

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Case-sensitive natural comparison
pub fn compare(a: &str, b: &str) -> Ordering {
    compare_with(a, b, false)
}

/// Case-insensitive natural comparison
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    compare_with(a, b, true)
}

fn compare_with(a: &str, b: &str, fold_case: bool) -> Ordering {
    let mut left = a.trim_start().chars().peekable();
    let mut right = b.trim_start().chars().peekable();

    loop {
        let (l, r) = match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => (l, r),
        };

        if l.is_ascii_digit() && r.is_ascii_digit() {
            let left_run = take_digits(&mut left);
            let right_run = take_digits(&mut right);
            match compare_digit_runs(&left_run, &right_run) {
                Ordering::Equal => continue,
                other => return other,
            }
        }

        let ordering = if fold_case {
            l.to_lowercase().cmp(r.to_lowercase())
        } else {
            l.cmp(&r)
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
        left.next();
        right.next();
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.peek().copied() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_value = a.trim_start_matches('0');
    let b_value = b.trim_start_matches('0');

    // Without leading zeros a longer run is a larger number
    a_value
        .len()
        .cmp(&b_value.len())
        .then_with(|| a_value.cmp(b_value))
        .then_with(|| a.len().cmp(&b.len()))
}
