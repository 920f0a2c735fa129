use tyname::value::{Char, ConstValue, I64, U8, U128, Usize, ValueKind};
use tyname::{FnItemSignature, NameError, Signature, TupleSignature, value_name, value_name_pt};

#[tyname_testhelpers::test]
fn integers_render_as_decimal() {
    assert_eq!(value_name!(u8, 1), "1");
    assert_eq!(value_name!(i8, 0), "0");
    assert_eq!(value_name!(u64, 0), "0");
    assert_eq!(value_name!(i64, -9_000), "-9000");
    assert_eq!(value_name!(u128, u128::MAX), u128::MAX.to_string().as_str());
    assert_eq!(value_name!(isize, isize::MIN), isize::MIN.to_string().as_str());
}

#[tyname_testhelpers::test]
fn bools_and_chars() {
    assert_eq!(value_name!(bool, true), "true");
    assert_eq!(value_name!(char, 'a'), "'a'");
    assert_eq!(value_name!(char, '\n'), "'\\n'");
    assert_eq!(value_name!(char, 'é'), "'é'");
}

#[tyname_testhelpers::test]
fn constant_expressions() {
    const LIMIT: usize = 1 << 12;
    assert_eq!(value_name!(usize, LIMIT), "4096");
    assert_eq!(value_name!(u8, 200 + 55), "255");
}

#[tyname_testhelpers::test]
fn carriers_expose_their_value() {
    assert_eq!(<U8<42> as ConstValue>::VALUE, 42);
    assert_eq!(<Char<'z'> as ConstValue>::KIND, ValueKind::Char);
    assert_eq!(<Usize<3> as ConstValue>::KIND.index(), ValueKind::Usize.index());
    assert_eq!(value_name_pt::<I64<7>>(), "7");
}

#[tyname_testhelpers::test]
fn formats_agree_on_values() {
    assert_eq!(
        Signature::<FnItemSignature>::try_value_name::<U128<5>>(),
        Signature::<TupleSignature>::try_value_name::<U128<5>>()
    );
    let result: Result<&str, NameError> = Signature::<TupleSignature>::try_value_name::<Char<'q'>>();
    assert_eq!(result, Ok("'q'"));
}
