use tyname::{
    DefaultSignature, EnumeratorStyle, FnItemSignature, Signature, SignatureFormat,
    TupleSignature, enumerator_name, impl_enumerator,
};

#[derive(Debug, Clone, Copy)]
enum Suit {
    Clubs,
    Hearts,
}

#[derive(Debug, Clone, Copy)]
#[repr(i8)]
enum Signed {
    Low = -3,
    High = 3,
}

impl_enumerator!(Suit, Signed);

#[tyname_testhelpers::test]
fn names_from_function_items() {
    assert_eq!(Signature::<FnItemSignature>::enumerator_name(Suit::Clubs), "Clubs");
    assert_eq!(Signature::<FnItemSignature>::enumerator_name(Signed::Low), "Low");
}

#[tyname_testhelpers::test]
fn ordinals_from_tuples() {
    insta::assert_snapshot!(
        Signature::<TupleSignature>::enumerator_name(Suit::Hearts),
        @"(integration::enumerators::Suit)1"
    );
    insta::assert_snapshot!(
        Signature::<TupleSignature>::enumerator_name(Signed::Low),
        @"(integration::enumerators::Signed)-3"
    );
    assert!(Signature::<TupleSignature>::enumerator_name(Signed::High).ends_with(")3"));
}

#[tyname_testhelpers::test]
fn default_format_decides_the_style() {
    let name = enumerator_name(Suit::Hearts);
    match DefaultSignature::TABLE.enumerators {
        EnumeratorStyle::Name => assert_eq!(name, "Hearts"),
        EnumeratorStyle::OrdinalFallback => assert!(name.ends_with("Suit)1"), "{name}"),
    }
}
