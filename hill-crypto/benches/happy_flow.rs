use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hill_crypto::cipher::{decrypt, encrypt};
use hill_crypto::preset::key_tables::PROJECT_KEY_PAIR;

fn bench_happy_flow(c: &mut Criterion) {
    // the same cleaned text every iteration
    let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG".repeat(64);

    c.bench_function("happy_flow", |b| {
        b.iter(|| {
            let cipher =
                encrypt(&plaintext, &PROJECT_KEY_PAIR.encryption).expect("encrypt");

            let decoded = decrypt(&cipher, &PROJECT_KEY_PAIR.decryption).expect("decrypt");

            // black_box the result so the optimizer can't drop it
            black_box(decoded);
        })
    });
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
