use tyname::{ConstStr, ConstStrBuf, IntoTuple, concat_const, const_str, decimal_str};

const SEP: ConstStr<2> = const_str!("::");
const EMPTY: ConstStr<0> = const_str!("");
const PATH: ConstStr<18> = concat_const!(const_str!("core"), SEP, const_str!("option"), SEP, const_str!("None"));

tyname::static_assertions::const_assert!(PATH.len() == 18);
tyname::static_assertions::const_assert!(ConstStr::<3>::LEN == 3);

#[tyname_testhelpers::test]
fn concatenation_adds_lengths() {
    assert_eq!(PATH, "core::option::None");
    let with_empty: ConstStr<18> = concat_const!(EMPTY, PATH, EMPTY);
    assert_eq!(with_empty, PATH);
}

#[tyname_testhelpers::test]
fn decimals_match_std() {
    for n in [0usize, 1, 9, 10, 99, 100, 12_345, usize::MAX] {
        assert_eq!(tyname::decimal_digits(n), n.to_string().len(), "{n}");
    }
    assert_eq!(decimal_str!(0), "0");
    assert_eq!(decimal_str!(usize::MAX), usize::MAX.to_string().as_str());
}

#[tyname_testhelpers::test]
fn nul_terminators_are_explicit() {
    const NAME: ConstStr<3> = const_str!("u16");
    const TERMINATED: ConstStr<4> = NAME.with_nul();
    assert!(TERMINATED.is_nul_terminated());
    assert!(!NAME.is_nul_terminated());
    assert_eq!(TERMINATED.strip_nul::<3>(), NAME);
}

#[tyname_testhelpers::test]
fn slicing_and_tuples() {
    const TAIL: ConstStr<4> = PATH.slice(14);
    assert_eq!(TAIL, "None");
    assert_eq!(const_str!("ab").into_tuple(), (b'a', b'b'));
}

#[tyname_testhelpers::test]
fn buffers_build_generic_lengths() {
    const fn extent<const N: usize>() -> ConstStrBuf<24> {
        ConstStrBuf::from_literal("[").push_decimal(N).push_str("]")
    }
    assert_eq!(extent::<0>(), "[0]");
    assert_eq!(extent::<4096>(), "[4096]");
    insta::assert_snapshot!(extent::<65536>().push_const_str(&SEP), @"[65536]::");
}
