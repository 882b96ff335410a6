// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Position};

#[test]
fn test_parse_by_name_is_case_insensitive() {
    assert_eq!("Hooker".parse::<Position>().unwrap(), Position::Hooker);
    assert_eq!("fly half".parse::<Position>().unwrap(), Position::FlyHalf);
    assert_eq!(
        "  NUMBER EIGHT ".parse::<Position>().unwrap(),
        Position::NumberEight
    );
}

#[test]
fn test_parse_by_shirt_number() {
    assert_eq!("1".parse::<Position>().unwrap(), Position::LooseheadProp);
    assert_eq!("15".parse::<Position>().unwrap(), Position::FullBack);
    assert!(matches!(
        "16".parse::<Position>(),
        Err(DomainError::InvalidPosition(_))
    ));
    assert!("0".parse::<Position>().is_err());
}

#[test]
fn test_unknown_position_is_rejected() {
    assert!(!Position::is_valid("Goalkeeper"));
    assert!(!Position::is_valid(""));
    assert!(Position::is_valid("Scrum Half"));
}

#[test]
fn test_numbers_and_forwards() {
    assert_eq!(Position::ALL.len(), 15);
    for (index, position) in Position::ALL.iter().enumerate() {
        assert_eq!(usize::from(position.number()), index + 1);
    }
    assert!(Position::NumberEight.is_forward());
    assert!(!Position::ScrumHalf.is_forward());
}
