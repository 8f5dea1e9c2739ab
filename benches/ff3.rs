//! Benchmarks for FF3 construction and encrypt/decrypt throughput.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ff3::{Ff3, Ff3_1};

const KEY: [u8; 16] = [
    0xef, 0x43, 0x59, 0xd8, 0xd5, 0x80, 0xaa, 0x4f, 0x7f, 0x03, 0x6d, 0x6f, 0x04, 0xfc, 0x6a, 0x94,
];
const TWEAK: [u8; 8] = [0xd8, 0xe7, 0x92, 0x0a, 0xfa, 0x33, 0x0a, 0x73];

fn bench_new(c: &mut Criterion) {
    c.bench_function("ff3_new_aes128", |b| {
        b.iter(|| Ff3::new(10, black_box(&KEY), black_box(&TWEAK)).unwrap())
    });
}

/// Encrypts a 16-digit card number, the most common FF3 workload.
fn bench_encrypt_card_number(c: &mut Criterion) {
    let cipher = Ff3::new(10, &KEY, &TWEAK).unwrap();
    c.bench_function("ff3_encrypt_16_digits", |b| {
        b.iter(|| cipher.encrypt(black_box("4111111111111111")).unwrap())
    });

    let ciphertext = cipher.encrypt("4111111111111111").unwrap();
    c.bench_function("ff3_decrypt_16_digits", |b| {
        b.iter(|| cipher.decrypt(black_box(&ciphertext)).unwrap())
    });

    let ff3_1 = Ff3_1::new(10, &KEY, &TWEAK[..7]).unwrap();
    c.bench_function("ff3_1_encrypt_16_digits", |b| {
        b.iter(|| ff3_1.encrypt(black_box("4111111111111111")).unwrap())
    });
}

fn bench_encrypt_digits_by_radix(c: &mut Criterion) {
    let mut group = c.benchmark_group("ff3_encrypt_digits_max_len");
    for radix in [2u32, 10, 16, 36] {
        let cipher = Ff3::new(radix, &KEY, &TWEAK).unwrap();
        let len = cipher.bounds().max_len;
        let plaintext: Vec<u8> = (0..len).map(|i| (i as u32 % radix) as u8).collect();
        let mut ciphertext = vec![0u8; len];

        group.bench_with_input(BenchmarkId::from_parameter(radix), &plaintext, |b, pt| {
            b.iter(|| {
                cipher
                    .encrypt_digits(black_box(pt), None, &mut ciphertext)
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_new,
    bench_encrypt_card_number,
    bench_encrypt_digits_by_radix
);
criterion_main!(benches);
