use vconv::{
    ByteArray, ByteArrayConverter, Convert, ConvertError, Converter, LittleEndian, Text,
    TextConverter, ValueConvert, Widen, converter,
};

#[test]
fn integer_to_bytes_and_back() {
    let mut to_bytes = converter::<ByteArray, i32>();
    let mut from_bytes = converter::<i32, &[u8]>();

    let bytes = to_bytes.convert(363_i32);
    if cfg!(target_endian = "little") {
        assert_eq!(bytes, [0x6b, 0x01, 0x00, 0x00]);
        assert_eq!(to_bytes.convert(-2_i32), [0xfe, 0xff, 0xff, 0xff]);
    }
    assert_eq!(from_bytes.convert(&bytes[..]), Ok(363));
}

#[test]
fn short_bytes_fail_loudly() {
    let mut from_bytes = converter::<u32, &[u8]>();
    assert_eq!(
        from_bytes.convert(&[0x01, 0x02][..]),
        Err(ConvertError::Length {
            type_name: "u32",
            expected: 4,
            actual: 2,
        })
    );
}

#[test]
fn one_shot_value_conversions() {
    assert_eq!(vconv::convert::<u32, u8>(200), 200_u32);
    let raw = 0x0a0b_u16.to_ne_bytes();
    assert_eq!(vconv::convert::<u16, &[u8]>(&raw[..]), Ok(0x0a0b));
}

#[test]
fn text_converter_reused_in_a_loop() {
    let mut conv: Converter<Text, u16> = converter::<Text, u16>();
    let mut joined = String::new();
    for value in [1_u16, 22, 333, 4444] {
        joined.push_str(conv.convert(value));
        joined.push(',');
    }
    assert_eq!(joined, "1,22,333,4444,");
}

#[test]
fn float_precision_through_dispatch() {
    let mut conv = converter::<Text, f64>();
    assert_eq!(conv.convert_with_precision(2.134_f64, Some(2)), "2.13");
    assert_eq!(conv.convert(2.134_f64), "2.134");
}

#[test]
fn second_call_overwrites_first() {
    let mut conv = TextConverter::new();
    let first = conv.convert(-123_456_789_i64).to_owned();
    let second = conv.convert(7_u8);
    assert_eq!(second, "7");
    assert_eq!(first, "-123456789");
    assert_eq!(conv.as_str(), "7");
}

#[test]
fn value_converters_answer_both_call_styles() {
    let mut widen = Widen::<u8, u64>::default();
    assert_eq!(widen.convert(200_u8), widen.convert_value(200_u8));

    let mut bytes = ByteArrayConverter::<u32, LittleEndian>::new();
    assert_eq!(bytes.convert(0xdead_beef_u32), bytes.convert_value(0xdead_beef_u32));

    let raw = [0x01_u8, 0x00, 0x00, 0x00];
    assert_eq!(bytes.convert(&raw[..]), Ok(1));
    assert_eq!(bytes.convert_value(&raw[..]), Ok(1));
}

/// Works for any `ToText` source type.
fn render_all<T: vconv::ToText>(conv: &mut TextConverter<'_>, values: &[T]) -> Vec<String> {
    values.iter().map(|&v| conv.convert(v).to_owned()).collect()
}

#[test]
fn text_converter_is_generic_over_sources() {
    let mut conv = TextConverter::new();
    assert_eq!(render_all(&mut conv, &[1_u8, 255]), ["1", "255"]);
    assert_eq!(render_all(&mut conv, &[true]), ["true"]);
}
