//! Integration tests for the bracket text format

use numalg::prelude::*;
use numalg::repr;

#[test]
fn test_parse_shape_and_tokens() {
    let parsed = repr::parse("[[{1,2},{3,4}],[{5,6},{7,8}]]").unwrap();
    assert_eq!(parsed.shape, vec![2, 2]);
    assert_eq!(parsed.elements[3], vec!["7", "8"]);
}

#[test]
fn test_whitespace_is_ignored() {
    let a = Matrix::<Complex128>::from_repr(" [ [ {1, 2} , {0,1} ] ] ").unwrap();
    assert_eq!(a.shape(), &[1, 2]);
    assert_eq!(a.get(0, 0).unwrap(), Complex128::new(1.0, 2.0));
}

#[test]
fn test_bare_numbers_are_real_members() {
    let v = RModule::<Quaternion256>::from_repr("[1,{0,0,1,0}]").unwrap();
    assert_eq!(v.get(0).unwrap(), Quaternion256::unity());
    assert_eq!(v.get(1).unwrap(), Quaternion256::j());
}

#[test]
fn test_malformed_input() {
    assert!(matches!(repr::parse("[[1,2],[3]]"), Err(Error::Parse { .. })));
    assert!(matches!(repr::parse("[1,2"), Err(Error::Parse { .. })));
    assert!(matches!(
        RModule::<Complex128>::from_repr("[{1,2,3}]"),
        Err(Error::Parse { .. })
    ));
    assert!("{1,x}".parse::<Complex128>().is_err());
}

#[test]
fn test_display_formats() {
    let v = RModule::<f64>::from_slice(&[1.5, -2.0]);
    assert_eq!(v.to_string(), "[1.5,-2]");

    let t = Tensor::<Complex128>::scalar(Complex128::new(0.0, 1.0));
    assert_eq!(t.to_string(), "{0,1}");

    let empty = RModule::<f64>::new(0);
    assert_eq!(empty.to_string(), "[]");
}

#[test]
fn test_containers_round_trip() {
    let text = "[[{1,0,0,0,0,0,0,-1},{0,0,0,0,2,0,0,0}],[{0,0,0,0,0,0,0,0},{1,1,1,1,1,1,1,1}]]";
    let m = Matrix::<Octonion512>::from_repr(text).unwrap();
    assert_eq!(m.to_string(), text);
}
