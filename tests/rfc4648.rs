//! End-to-end checks of the RFC 4648 engines through the public API.

use basen::{Base16, Base32, Base64, BasenError, Codec, Padding, Registry};
use proptest::prelude::*;

const VECTORS: [(&str, &str, &str, &str, &str); 7] = [
    // input, base64, base32, base32hex, base16
    ("", "", "", "", ""),
    ("f", "Zg==", "MY======", "CO======", "66"),
    ("fo", "Zm8=", "MZXQ====", "CPNG====", "666F"),
    ("foo", "Zm9v", "MZXW6===", "CPNMU===", "666F6F"),
    ("foob", "Zm9vYg==", "MZXW6YQ=", "CPNMUOG=", "666F6F62"),
    ("fooba", "Zm9vYmE=", "MZXW6YTB", "CPNMUOJ1", "666F6F6261"),
    ("foobar", "Zm9vYmFy", "MZXW6YTBOI======", "CPNMUOJ1E8======", "666F6F626172"),
];

#[test]
fn rfc4648_section_10_vectors() {
    for (input, b64, b32, b32hex, b16) in VECTORS {
        let cases: [(&dyn Codec, &str); 4] = [
            (&Base64::STANDARD, b64),
            (&Base32::STANDARD, b32),
            (&Base32::HEX, b32hex),
            (&Base16::STANDARD, b16),
        ];
        for (codec, expected) in cases {
            assert_eq!(codec.to_text(input.as_bytes()).unwrap(), expected, "{} of {:?}", codec.name(), input);
            assert_eq!(codec.from_text(expected).unwrap(), input.as_bytes(), "{} of {:?}", codec.name(), expected);
            assert!(codec.is_valid_text(expected));
        }
    }
}

#[test]
fn url_safe_only_swaps_last_two_symbols() {
    let data = [0xfb, 0xff, 0xbf];
    assert_eq!(Base64::STANDARD.to_text(&data).unwrap(), "+/+/");
    assert_eq!(Base64::URL_SAFE.to_text(&data).unwrap(), "-_-_");
    assert!(Base64::URL_SAFE.from_text("+/+/").is_err());
    assert!(Base64::STANDARD.from_text("-_-_").is_err());
}

#[test]
fn ranged_calls_leave_surroundings_untouched() {
    let codecs: [&dyn Codec; 4] = [&Base16::STANDARD, &Base32::STANDARD, &Base32::HEX, &Base64::URL_SAFE];
    let mut source = vec![0x55u8; 40];
    source[7..13].copy_from_slice(b"foobar");

    for codec in codecs {
        let encoded_len = codec.encoded_size(6).unwrap();
        let mut chars = vec![b'#'; encoded_len + 20];
        let written = codec.encode_range(&source, 7, 6, &mut chars, 11).unwrap();
        assert_eq!(written, encoded_len);
        assert!(chars[..11].iter().all(|&c| c == b'#'));
        assert!(chars[11 + written..].iter().all(|&c| c == b'#'));

        let size = codec.decoded_size_range(&chars, 11, written).unwrap();
        assert_eq!(size.bytes, 6);
        let mut bytes = vec![0xEEu8; 30];
        let decoded = codec.decode_range(&chars, 11, written, &mut bytes, 5).unwrap();
        assert_eq!(&bytes[5..5 + decoded], b"foobar");
        assert!(bytes[..5].iter().all(|&b| b == 0xEE));
        assert!(bytes[5 + decoded..].iter().all(|&b| b == 0xEE));
    }
}

#[test]
fn malformed_inputs_are_rejected() {
    let cases: [(&dyn Codec, &str); 10] = [
        (&Base16::STANDARD, "ABC"),
        (&Base16::STANDARD, "ab"),
        (&Base32::STANDARD, "MZXW6YT"),
        (&Base32::STANDARD, "MY====="),
        (&Base32::STANDARD, "MZX====="),
        (&Base32::STANDARD, "M1======"),
        (&Base64::STANDARD, "Zg="),
        (&Base64::STANDARD, "Z==="),
        (&Base64::STANDARD, "Zm9v YmFy"),
        (&Base64::STANDARD_NO_PAD, "Zg=="),
    ];
    for (codec, text) in cases {
        let err = codec.from_text(text).unwrap_err();
        assert!(err.is_invalid_input(), "{} accepted {:?}: {}", codec.name(), text, err);
        assert!(!codec.is_valid_text(text));
        assert_eq!(codec.try_from_text(text), None);
    }
}

#[test]
fn error_variants_carry_position_and_length() {
    match Base64::STANDARD.from_text("SGVs!G8=") {
        Err(BasenError::InvalidCharacter { char, position }) => {
            assert_eq!(char, '!');
            assert_eq!(position, 4);
        }
        other => panic!("unexpected result {:?}", other),
    }
    match Base32::STANDARD.from_text("MZXW6") {
        Err(BasenError::InvalidLength { actual, .. }) => assert_eq!(actual, 5),
        other => panic!("unexpected result {:?}", other),
    }
    assert!(matches!(
        Base32::STANDARD.from_text("MZX====="),
        Err(BasenError::InvalidPadding { .. })
    ));
}

#[test]
fn custom_engines_round_trip() {
    let crypt = Base64::new("./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz", Padding::None)
        .unwrap()
        .with_name("crypt");
    let text = crypt.to_text(b"hello").unwrap();
    assert_eq!(text.len(), 7);
    assert_eq!(crypt.from_text(&text).unwrap(), b"hello");
    assert_eq!(crypt.name(), "crypt");

    let z32 = Base32::new("ybndrfg8ejkmcpqxot1uwisza345h769", Padding::None).unwrap();
    assert_eq!(z32.from_text(&z32.to_text(b"zbase").unwrap()).unwrap(), b"zbase");

    assert!(Base16::new("0123456789ABCDEF0").is_err());
    assert!(Base32::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ23456=", Padding::STANDARD).is_err());
}

#[test]
fn registry_codecs_are_shared_across_threads() {
    let registry = Registry::global();
    let data: Vec<u8> = (0..=255u8).collect();

    std::thread::scope(|scope| {
        for (id, codec) in registry.iter() {
            let data = &data;
            scope.spawn(move || {
                for chunk in 0..data.len() {
                    let text = codec.to_text(&data[..chunk]).unwrap();
                    assert_eq!(codec.from_text(&text).unwrap(), &data[..chunk], "{}", id);
                }
            });
        }
    });
}

#[test]
fn matches_data_encoding() {
    let pairs: [(&dyn Codec, &data_encoding::Encoding); 9] = [
        (&Base16::STANDARD, &data_encoding::HEXUPPER),
        (&Base32::STANDARD, &data_encoding::BASE32),
        (&Base32::STANDARD_NO_PAD, &data_encoding::BASE32_NOPAD),
        (&Base32::HEX, &data_encoding::BASE32HEX),
        (&Base32::HEX_NO_PAD, &data_encoding::BASE32HEX_NOPAD),
        (&Base64::STANDARD, &data_encoding::BASE64),
        (&Base64::STANDARD_NO_PAD, &data_encoding::BASE64_NOPAD),
        (&Base64::URL_SAFE, &data_encoding::BASE64URL),
        (&Base64::URL_SAFE_NO_PAD, &data_encoding::BASE64URL_NOPAD),
    ];
    let data: Vec<u8> = (0..300u32).map(|i| (i * 7 + 3) as u8).collect();

    for (codec, reference) in pairs {
        for len in 0..data.len() {
            let expected = reference.encode(&data[..len]);
            assert_eq!(codec.to_text(&data[..len]).unwrap(), expected, "{}", codec.name());
            assert_eq!(codec.from_text(&expected).unwrap(), &data[..len]);
        }
    }
}

#[test]
fn matches_base64_crate() {
    use base64::engine::general_purpose;
    use base64::Engine as _;

    let data: Vec<u8> = (0..128u8).rev().collect();
    for len in 0..data.len() {
        let slice = &data[..len];
        assert_eq!(Base64::STANDARD.to_text(slice).unwrap(), general_purpose::STANDARD.encode(slice));
        assert_eq!(Base64::URL_SAFE.to_text(slice).unwrap(), general_purpose::URL_SAFE.encode(slice));
        assert_eq!(
            Base64::URL_SAFE_NO_PAD.to_text(slice).unwrap(),
            general_purpose::URL_SAFE_NO_PAD.encode(slice)
        );
    }
}

fn registry_ids() -> impl Strategy<Value = &'static str> {
    let ids: Vec<&'static str> = Registry::global().list().into_iter().map(|info| info.id).collect();
    prop::sample::select(ids)
}

proptest! {
    #[test]
    fn prop_round_trip(id in registry_ids(), data in prop::collection::vec(any::<u8>(), 0..512)) {
        let codec = Registry::global().get(id).unwrap();
        let encoded = codec.encode_to_vec(&data).unwrap();
        prop_assert!(codec.is_valid(&encoded));
        prop_assert_eq!(codec.decode_to_vec(&encoded).unwrap(), data);
    }

    #[test]
    fn prop_size_laws(id in registry_ids(), data in prop::collection::vec(any::<u8>(), 0..512)) {
        let codec = Registry::global().get(id).unwrap();
        let meta = codec.meta();
        let n = data.len();
        let encoded = codec.encode_to_vec(&data).unwrap();
        prop_assert_eq!(encoded.len(), codec.encoded_size(n).unwrap());

        let groups = n.div_ceil(meta.group_bytes);
        if meta.padding.is_some() {
            prop_assert_eq!(encoded.len(), groups * meta.group_symbols);
        } else {
            prop_assert_eq!(encoded.len(), (n * 8).div_ceil(meta.bits_per_symbol as usize));
        }
        prop_assert_eq!(codec.decoded_size(&encoded).unwrap().bytes, n);
    }

    #[test]
    fn prop_garbage_never_panics(id in registry_ids(), text in "\\PC{0,64}") {
        let codec = Registry::global().get(id).unwrap();
        let valid = codec.is_valid_text(&text);
        let decoded = codec.from_text(&text);
        prop_assert_eq!(valid, decoded.is_ok());
    }
}
