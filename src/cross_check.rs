//! Cross-check tests against the published FF3 sample vectors.
//!
//! Round-trip tests cannot detect a mis-indexed tweak half or round number,
//! since any such variant is still a permutation. These vectors can.

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use crate::*;

    const KEY_128: &str = "EF4359D8D580AA4F7F036D6F04FC6A94";
    const KEY_192: &str = "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6";
    const KEY_256: &str = "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6ABF7158809CF4F3C";

    struct Vector {
        radix: u32,
        key: &'static str,
        tweak: &'static str,
        plaintext: &'static str,
        ciphertext: &'static str,
    }

    const VECTORS: &[Vector] = &[
        Vector {
            radix: 10,
            key: KEY_128,
            tweak: "D8E7920AFA330A73",
            plaintext: "890121234567890000",
            ciphertext: "750918814058654607",
        },
        Vector {
            radix: 10,
            key: KEY_128,
            tweak: "9A768A92F60E12D8",
            plaintext: "890121234567890000",
            ciphertext: "018989839189395384",
        },
        Vector {
            radix: 10,
            key: KEY_128,
            tweak: "D8E7920AFA330A73",
            plaintext: "89012123456789000000789000000",
            ciphertext: "48598367162252569629397416226",
        },
        Vector {
            radix: 10,
            key: KEY_128,
            tweak: "0000000000000000",
            plaintext: "89012123456789000000789000000",
            ciphertext: "34695224821734535122613701434",
        },
        Vector {
            radix: 26,
            key: KEY_128,
            tweak: "9A768A92F60E12D8",
            plaintext: "0123456789abcdefghi",
            ciphertext: "g2pk40i992fn20cjakb",
        },
        Vector {
            radix: 10,
            key: KEY_192,
            tweak: "D8E7920AFA330A73",
            plaintext: "890121234567890000",
            ciphertext: "646965393875028755",
        },
        Vector {
            radix: 10,
            key: KEY_192,
            tweak: "9A768A92F60E12D8",
            plaintext: "890121234567890000",
            ciphertext: "961610514491424446",
        },
        Vector {
            radix: 10,
            key: KEY_192,
            tweak: "D8E7920AFA330A73",
            plaintext: "89012123456789000000789000000",
            ciphertext: "53048884065350204541786380807",
        },
        Vector {
            radix: 10,
            key: KEY_192,
            tweak: "0000000000000000",
            plaintext: "89012123456789000000789000000",
            ciphertext: "98083802678820389295041483512",
        },
        Vector {
            radix: 26,
            key: KEY_192,
            tweak: "9A768A92F60E12D8",
            plaintext: "0123456789abcdefghi",
            ciphertext: "i0ihe2jfj7a9opf9p88",
        },
        Vector {
            radix: 10,
            key: KEY_256,
            tweak: "D8E7920AFA330A73",
            plaintext: "890121234567890000",
            ciphertext: "922011205562777495",
        },
        Vector {
            radix: 10,
            key: KEY_256,
            tweak: "9A768A92F60E12D8",
            plaintext: "890121234567890000",
            ciphertext: "504149865578056140",
        },
        Vector {
            radix: 10,
            key: KEY_256,
            tweak: "D8E7920AFA330A73",
            plaintext: "89012123456789000000789000000",
            ciphertext: "04344343235792599165734622699",
        },
        Vector {
            radix: 10,
            key: KEY_256,
            tweak: "0000000000000000",
            plaintext: "89012123456789000000789000000",
            ciphertext: "30859239999374053872365555822",
        },
        Vector {
            radix: 26,
            key: KEY_256,
            tweak: "9A768A92F60E12D8",
            plaintext: "0123456789abcdefghi",
            ciphertext: "p0b2godfja9bhb7bk38",
        },
    ];

    #[test]
    fn cross_check_sample_vectors_encrypt() {
        for (i, v) in VECTORS.iter().enumerate() {
            let key = hex::decode(v.key).unwrap();
            let tweak = hex::decode(v.tweak).unwrap();
            let cipher = Ff3::new(v.radix, &key, &tweak).unwrap();
            assert_eq!(
                cipher.encrypt(v.plaintext).unwrap(),
                v.ciphertext,
                "sample {} encrypt",
                i + 1
            );
        }
    }

    #[test]
    fn cross_check_sample_vectors_decrypt() {
        for (i, v) in VECTORS.iter().enumerate() {
            let key = hex::decode(v.key).unwrap();
            let tweak = hex::decode(v.tweak).unwrap();
            let cipher = Ff3::new(v.radix, &key, &tweak).unwrap();
            assert_eq!(
                cipher.decrypt(v.ciphertext).unwrap(),
                v.plaintext,
                "sample {} decrypt",
                i + 1
            );
        }
    }

    #[test]
    fn cross_check_sample_vectors_override_tweak() {
        let key = hex::decode(KEY_128).unwrap();
        let cipher = Ff3::new(10, &key, &[0xffu8; 8]).unwrap();
        for v in VECTORS.iter().filter(|v| v.key == KEY_128 && v.radix == 10) {
            let tweak = hex::decode(v.tweak).unwrap();
            assert_eq!(
                cipher.encrypt_with_tweak(v.plaintext, &tweak).unwrap(),
                v.ciphertext
            );
            assert_eq!(
                cipher.decrypt_with_tweak(v.ciphertext, &tweak).unwrap(),
                v.plaintext
            );
        }
    }

    /// No published FF3 vector covers radix 36. The expected ciphertext was
    /// computed with an independent FF3 implementation that reproduces the
    /// published radix-10 and radix-26 samples above.
    #[test]
    fn cross_check_radix_36_sample() {
        let key = hex::decode(KEY_128).unwrap();
        let tweak = hex::decode("9A768A92F60E12D8").unwrap();
        let cipher = Ff3::new(36, &key, &tweak).unwrap();

        let plaintext = "0123456789abcdefghi";
        let ciphertext = cipher.encrypt(plaintext).unwrap();

        println!("FF3 radix-36 sample:");
        println!("  Key:        {}", KEY_128);
        println!("  Plaintext:  {}", plaintext);
        println!("  Ciphertext: {}", ciphertext);

        assert_eq!(ciphertext, "wt0hh3ai5pvv6b1onvt");
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
        assert_eq!(
            cipher.decrypt(&ciphertext.to_uppercase()).unwrap(),
            plaintext
        );
    }

    #[test]
    fn cross_check_radix_26_is_prefix_of_base36_alphabet() {
        // Radix-26 vectors use 0-9a-p, the first 26 symbols of the canonical alphabet.
        let key = hex::decode(KEY_128).unwrap();
        let tweak = hex::decode("9A768A92F60E12D8").unwrap();
        let cipher = Ff3::new(26, &key, &tweak).unwrap();
        assert_eq!(cipher.encrypt("0123456789abcdefghq"), Err(Error::InvalidPlaintext));
    }
}
