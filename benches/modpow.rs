use core::hint::black_box;
use criterion::{Criterion, criterion_group, criterion_main};
use monty_modexp::{
    Limb, Odd, U256,
    modular::{DynMontyParams, MontyParams},
};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

/// Fixed 256-bit odd modulus with externally precomputed Montgomery
/// constants (little-endian words).
const N: [u64; 4] = [
    0x910d26fedc41c615,
    0xfe6b3d0200422bf6,
    0x0b1496de8c410ff4,
    0xf07f8a232d5ab49e,
];
const N0: u64 = 0xd2b8ff4de34326c3;
const RR: [u64; 4] = [
    0x52bdd670f039797e,
    0xd75c115453d36c50,
    0xfcafeac2601277e9,
    0xdcd5698493a8ccb6,
];

fn params() -> MontyParams<4> {
    MontyParams::new(
        Odd::new(U256::from_words(N)).expect("modulus is odd"),
        U256::from_words(RR),
        Limb(N0),
    )
}

/// Random exponent of exactly `bits` bits.
fn exponent(rng: &mut ChaCha8Rng, bits: u32) -> U256 {
    let mut words = [0u64; 4];
    for word in &mut words {
        *word = rng.next_u64();
    }

    let top = ((bits - 1) / 64) as usize;
    let top_bit = (bits - 1) % 64;
    for word in words.iter_mut().skip(top + 1) {
        *word = 0;
    }
    words[top] &= (1u64 << top_bit) - 1;
    words[top] |= 1u64 << top_bit;

    U256::from_words(words)
}

fn bench_modpow(c: &mut Criterion) {
    let params = params();
    let mut rng = ChaCha8Rng::seed_from_u64(0xbe4c);

    let base = U256::random(&mut rng);
    let base = if base.cmp_vartime(params.modulus().as_ref()).is_lt() {
        base
    } else {
        base.wrapping_sub(params.modulus().as_ref())
    };

    let mut group = c.benchmark_group("modpow, U256");

    // one exponent per window-size bracket
    for bits in [17u32, 47, 143, 256] {
        let exp = exponent(&mut rng, bits);

        group.bench_function(format!("{bits}-bit exp"), |b| {
            b.iter(|| black_box(params.modpow_vartime(black_box(&base), black_box(&exp))))
        });

        group.bench_function(format!("{bits}-bit exp, binary"), |b| {
            b.iter(|| black_box(params.modpow_binary_vartime(black_box(&base), black_box(&exp))))
        });
    }

    group.finish();
}

fn bench_dyn_modpow(c: &mut Criterion) {
    let n: Vec<Limb> = N.iter().copied().map(Limb).collect();
    let rr: Vec<Limb> = RR.iter().copied().map(Limb).collect();
    let params = DynMontyParams::new(&n, &rr, Limb(N0)).expect("modulus is odd");

    let mut rng = ChaCha8Rng::seed_from_u64(0xd1be4c);
    let mut base: Vec<Limb> = (0..4).map(|_| Limb::random(&mut rng)).collect();
    // clear the top bit so base < n
    base[3] = Limb(base[3].0 >> 1);
    let exp: Vec<Limb> = (0..4).map(|_| Limb::random(&mut rng)).collect();

    c.bench_function("modpow, runtime width 4", |b| {
        b.iter(|| {
            let mut out = [Limb(0); 4];
            params.modpow_vartime(&mut out, black_box(&base), black_box(&exp));
            black_box(out)
        })
    });
}

criterion_group!(benches, bench_modpow, bench_dyn_modpow);
criterion_main!(benches);
