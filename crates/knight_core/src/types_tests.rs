use super::*;

#[test]
fn test_index_layout() {
    let a1 = Square::at(0, 0);
    let h8 = Square::at(7, 7);
    assert_eq!(a1.index(), 0);
    assert_eq!(h8.index(), 63);
    assert_eq!(Square::at(4, 3).index(), 28); // e4
    assert_eq!(Square::at(4, 3).file(), 4);
    assert_eq!(Square::at(4, 3).rank(), 3);
}

#[test]
fn test_from_index() {
    assert_eq!(Square::from_index(0), Some(Square::at(0, 0)));
    assert_eq!(Square::from_index(63), Some(Square::at(7, 7)));
    assert_eq!(Square::from_index(64), None);

    let all: Vec<Square> = Square::all().collect();
    assert_eq!(all.len(), 64);
    assert!(all.iter().enumerate().all(|(i, s)| s.index() == i));
}

#[test]
fn test_new_rejects_off_board() {
    assert!(Square::new(-1, 0).is_none());
    assert!(Square::new(0, 8).is_none());
    assert!(Square::new(8, 3).is_none());
    assert_eq!(Square::new(2, 4), Some(Square::at(2, 4)));
}

#[test]
#[should_panic(expected = "out of range")]
fn test_at_panics_out_of_range() {
    let _ = Square::at(8, 0);
}

#[test]
fn test_parse_and_display() {
    let sq: Square = "c5".parse().unwrap();
    assert_eq!(sq, Square::at(2, 4));
    assert_eq!(sq.to_string(), "c5");
    assert_eq!(format!("{:?}", sq), "c5");

    for sq in Square::all() {
        let back: Square = sq.to_string().parse().unwrap();
        assert_eq!(back, sq);
    }
}

#[test]
fn test_parse_rejects_malformed() {
    for bad in ["", "e", "e44", "i1", "a0", "a9", "E4", " e4", "4e"] {
        assert!(bad.parse::<Square>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn test_offset() {
    let b1 = Square::at(1, 0);
    assert_eq!(b1.offset(-1, 2), Some(Square::at(0, 2))); // a3
    assert_eq!(b1.offset(-2, 1), None);
    assert_eq!(b1.offset(1, -1), None);
}

#[test]
fn test_square_colors() {
    assert!(!Square::at(0, 0).is_light()); // a1
    assert!(Square::at(7, 0).is_light()); // h1
    assert!(!Square::at(7, 7).is_light()); // h8
    assert_eq!(Square::all().filter(|s| s.is_light()).count(), 32);
}

#[test]
fn test_serde_uses_algebraic_text() {
    let sq = Square::at(4, 3);
    assert_eq!(serde_json::to_string(&sq).unwrap(), "\"e4\"");
    let back: Square = serde_json::from_str("\"e4\"").unwrap();
    assert_eq!(back, sq);
    assert!(serde_json::from_str::<Square>("\"z9\"").is_err());
}
