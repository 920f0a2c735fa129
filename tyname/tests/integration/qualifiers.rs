use std::borrow::Cow;

use tyname::{Qualified, TypeName, impl_unqualified, type_name};

#[derive(Debug)]
struct Pixel;

struct Grid<T>(Vec<T>);

impl_unqualified!(Pixel);
impl_unqualified!(impl<T> Grid<T>);

#[tyname_testhelpers::test]
fn nested_arrays_and_references() {
    let name = type_name::<[[[u8; 3]; 2]; 1]>();
    assert_eq!(name.base(), "u8");
    assert_eq!(name.qualifiers(), "[1][2][3]");

    let name = type_name::<&mut [[[u8; 3]; 2]; 1]>();
    assert_eq!(name.base(), "u8");
    assert_eq!(name.qualifiers(), "[1][2][3]&mut");
}

#[tyname_testhelpers::test]
fn user_types() {
    let pixels = type_name::<&[[Pixel; 8]; 8]>();
    insta::assert_snapshot!(pixels, @"integration::qualifiers::Pixel[8][8]&");

    let grid = type_name::<Grid<Pixel>>();
    assert!(!grid.has_qualifiers());
    assert!(matches!(grid.composed(), Cow::Borrowed(_)));
}

#[tyname_testhelpers::test]
fn pointers_to_unsized() {
    insta::assert_snapshot!(type_name::<*const str>(), @"str*const");
    insta::assert_snapshot!(type_name::<&mut [&'static str]>(), @"str[](&)&mut");
}

#[tyname_testhelpers::test]
fn qualifiers_are_known_at_compile_time() {
    const Q: tyname::Qualifiers = <[[&u8; 2]; 5] as Qualified>::QUALIFIERS;
    tyname::static_assertions::const_assert!(Q.len() == "[5][2](&)".len());
    tyname::static_assertions::const_assert!(<&u8 as Qualified>::INDIRECT);
    assert_eq!(Q, "[5][2](&)");
}

fn describe<T: Qualified + ?Sized>(name: TypeName<T>) -> String {
    format!("{} with {:?}", name.base(), name.qualifiers())
}

#[tyname_testhelpers::test]
fn type_names_are_values() {
    let name = type_name::<[bool; 2]>();
    let copy = name;
    assert_eq!(describe(name), describe(copy));
    assert_eq!(describe(name), r#"bool with "[2]""#);
}
