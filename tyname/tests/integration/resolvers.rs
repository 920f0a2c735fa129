use std::collections::HashMap;

use tyname::{FnItemSignature, Signature, TupleSignature, type_name_pt, type_name_rt, type_name_str};

struct Local<'a, T: ?Sized>(&'a T);

fn agree<T: ?Sized>() -> &'static str {
    let rt = type_name_rt::<T>();
    assert_eq!(rt, type_name_str::<T>());
    assert_eq!(rt, type_name_pt::<T>());
    assert_eq!(rt, Signature::<FnItemSignature>::type_name::<T>());
    assert_eq!(rt, Signature::<TupleSignature>::type_name::<T>());
    rt
}

#[tyname_testhelpers::test]
fn primitives() {
    insta::assert_snapshot!(agree::<char>(), @"char");
    insta::assert_snapshot!(agree::<&i32>(), @"&i32");
    insta::assert_snapshot!(agree::<*mut [u8]>(), @"*mut [u8]");
    insta::assert_snapshot!(agree::<(bool, f64)>(), @"(bool, f64)");
    insta::assert_snapshot!(agree::<fn(u8) -> u16>(), @"fn(u8) -> u16");
}

#[tyname_testhelpers::test]
fn library_types() {
    insta::assert_snapshot!(agree::<String>(), @"alloc::string::String");
    insta::assert_snapshot!(agree::<Vec<Option<u8>>>(), @"alloc::vec::Vec<core::option::Option<u8>>");
    assert!(agree::<HashMap<u8, &str>>().starts_with("std::collections::hash::map::HashMap<u8, &str"));
}

#[tyname_testhelpers::test]
fn local_types_carry_their_path() {
    let name = agree::<Local<'static, str>>();
    assert!(name.starts_with("integration::resolvers::Local<"), "{name}");
    assert!(name.ends_with("str>"), "{name}");
}

#[tyname_testhelpers::test]
fn views_are_stable() {
    let first = type_name_rt::<[u64; 3]>();
    let second = type_name_rt::<[u64; 3]>();
    assert_eq!(first, "[u64; 3]");
    assert!(core::ptr::eq(first, second));
}

#[tyname_testhelpers::test]
fn resolver_reports_success_through_try() {
    assert_eq!(tyname::resolver().try_name_copy::<u32>().as_deref(), Ok("u32"));
    assert_eq!(Signature::<TupleSignature>::try_type_name::<u32>(), Ok("u32"));
}
