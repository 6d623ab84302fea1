//! Equivalence tests for the runtime-width engine: against `num-bigint`,
//! and against the fixed-width engine at matching widths.

mod common;

use common::{mod_neg_inv, params_for, r2, to_biguint, to_limbs, to_uint};
use monty_modexp::{
    Limb, U1024,
    modular::{DynMontyParams, MAX_LIMBS},
};
use num_bigint::BigUint;
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

fn random_biguint(rng: &mut ChaCha8Rng, nlimbs: usize) -> BigUint {
    let mut limbs = vec![Limb(0); nlimbs];
    for limb in &mut limbs {
        *limb = Limb(rng.next_u64());
    }
    to_biguint(&limbs)
}

fn dyn_params_for(n: &BigUint, nlimbs: usize) -> DynMontyParams {
    DynMontyParams::new(
        &to_limbs(n, nlimbs),
        &to_limbs(&r2(n, nlimbs), nlimbs),
        mod_neg_inv(n),
    )
    .expect("modulus in range and odd")
}

#[test]
fn toy_rsa_single_limb() {
    // 65^17 mod 3233 = 2790 at the narrowest supported width.
    let n = BigUint::from(3233u32);
    let params = dyn_params_for(&n, 1);

    let mut out = [Limb(0); 1];
    params.modpow_vartime(&mut out, &[Limb(65)], &[Limb(17)]);
    assert_eq!(out, [Limb(2790)]);
}

#[test]
fn matches_reference_at_every_width() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xd1_4a11);

    for nlimbs in 1..=MAX_LIMBS {
        for _ in 0..8 {
            let mut n = random_biguint(&mut rng, nlimbs);
            n.set_bit(0, true);
            n.set_bit(64 * nlimbs as u64 - 1, true);

            let base = random_biguint(&mut rng, nlimbs) % &n;
            let exp = random_biguint(&mut rng, nlimbs);
            let expected = base.modpow(&exp, &n);

            let params = dyn_params_for(&n, nlimbs);
            let mut out = vec![Limb(0); nlimbs];
            params.modpow_vartime(&mut out, &to_limbs(&base, nlimbs), &to_limbs(&exp, nlimbs));

            assert_eq!(to_biguint(&out), expected, "width {nlimbs}");
        }
    }
}

#[test]
fn zero_exponent_and_zero_base() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x0b45e);
    let mut n = random_biguint(&mut rng, 3);
    n.set_bit(0, true);

    let params = dyn_params_for(&n, 3);
    let zero = [Limb(0); 3];
    let mut out = [Limb(0); 3];

    params.modpow_vartime(&mut out, &to_limbs(&(random_biguint(&mut rng, 3) % &n), 3), &zero);
    assert_eq!(out, [Limb(1), Limb(0), Limb(0)]);

    params.modpow_vartime(&mut out, &zero, &to_limbs(&BigUint::from(12345u32), 3));
    assert_eq!(out, zero);
}

#[test]
fn agrees_with_fixed_width_engine_at_4_limbs() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x256);

    for _ in 0..16 {
        let mut n = random_biguint(&mut rng, 4);
        n.set_bit(0, true);
        n.set_bit(255, true);

        let base = random_biguint(&mut rng, 4) % &n;
        let exp = random_biguint(&mut rng, 4);

        let fixed = params_for::<4>(&n);
        let expected = fixed.modpow_vartime(&to_uint::<4>(&base), &to_uint::<4>(&exp));

        let dyn_params = dyn_params_for(&n, 4);
        let mut out = [Limb(0); 4];
        dyn_params.modpow_vartime(&mut out, &to_limbs(&base, 4), &to_limbs(&exp, 4));

        assert_eq!(out.as_slice(), expected.as_limbs().as_slice());
    }
}

#[test]
fn max_width_matches_unrolled_equivalent() {
    // 16 limbs, checked three ways: golden vector, num-bigint, and the
    // fixed-width engine instantiated at the same width.
    let n: [u64; 16] = [
        0x9cb9a4ff2feadb65,
        0xacf545c9a4c52f1d,
        0xfa9a1821ccb77534,
        0x81494104364a494f,
        0xe4d64bb5d83a9699,
        0x4e725a16452de5dc,
        0x91346d25829fd909,
        0x88b5a730f9e6fd2c,
        0x18aaf18dea00ec22,
        0x7e6344918f0a9c1c,
        0x88e1eddc22b5b057,
        0x68af8b091eb9d652,
        0x0b06e542b764acd2,
        0x71c19d94b94d1e6f,
        0xb22c83ed1e0ae0e2,
        0xdef82ee1441a024f,
    ];
    let n0 = 0x736fd8a1b6ac2193;
    let rr: [u64; 16] = [
        0x78e66bbddd00638d,
        0x1e34eb207ec61b61,
        0xa423922a23bb1281,
        0xf3d59a9b572df7ba,
        0xf39d8f60846eed16,
        0x4d60ba210ee11a2b,
        0x0b98e6b2e79736d5,
        0x7d2ecc078605ccc7,
        0xaec95d67127657e2,
        0x6c5886b68d2ce5b3,
        0xe76bc30b95c878ec,
        0x6159704e7c2759c7,
        0xee51746074d682e4,
        0x7454ad1c199a5d3d,
        0x858d79c9479b9129,
        0x90fc76c6d4baf41a,
    ];
    let base: [u64; 16] = [
        0x9d9bb7fa3e030f47,
        0x28ba316c698e3da1,
        0xb100f6a1f8c38eb1,
        0x41a9fed56d24cd85,
        0xf26d3580eb49c7bc,
        0xe708f048c8e112c7,
        0xa281153e928b427f,
        0xb8860a17e77c550a,
        0x7de5da0217110695,
        0x0987dd5c63036c4d,
        0x2058c1951326c156,
        0x69a252df5525b79c,
        0x497aaf584ab695aa,
        0xd1eeacfd8536d431,
        0x12e20a9d0db764e5,
        0x1cc41bd0d14f42f8,
    ];
    let exp: [u64; 16] = [
        0x9f756e1dbaab18db,
        0xa82515ba3c598047,
        0xe307c82b0c440645,
        0x3d6e3eee56bf58e9,
        0x39137fb4fe0ce754,
        0xf6ccc67a09e01cd1,
        0x77c6e8fa529bab9a,
        0x3c1cc77813ae5bab,
        0x3060df8aca4a15b6,
        0x31c647fc17a28bd5,
        0x8a7e6ab79d00500d,
        0x8d7b98ff21b2dca9,
        0xa014f9a8f0eb27e6,
        0x02d3cf4475e8b7d0,
        0x227cc62bde7ea1f5,
        0xb666cd0da22ff3c7,
    ];
    let res: [u64; 16] = [
        0x4808bbcc27450ce1,
        0x680f5bd68641ca75,
        0x9c9d1841b89e4313,
        0xf9c705ed9ea896c9,
        0xfd521c9348c13c9d,
        0x8f2b1a112e21b217,
        0xd35b8976e7e5dddb,
        0x54b1ae3b83dd5722,
        0x638dc350a0a4be94,
        0xaf6c2becad34fc9f,
        0x2e54ff90cbb9090d,
        0xf1aea7588cb1bbd9,
        0x1519b7f9ccafa01a,
        0xdfc4c916c2a79a6e,
        0xfc65c5697d3cb457,
        0x41575062f86ef036,
    ];

    let n_limbs: Vec<Limb> = n.iter().copied().map(Limb).collect();
    let rr_limbs: Vec<Limb> = rr.iter().copied().map(Limb).collect();
    let base_limbs: Vec<Limb> = base.iter().copied().map(Limb).collect();
    let exp_limbs: Vec<Limb> = exp.iter().copied().map(Limb).collect();
    let res_limbs: Vec<Limb> = res.iter().copied().map(Limb).collect();

    let params = DynMontyParams::new(&n_limbs, &rr_limbs, Limb(n0)).expect("odd 16-limb modulus");
    let mut out = vec![Limb(0); 16];
    params.modpow_vartime(&mut out, &base_limbs, &exp_limbs);
    assert_eq!(out, res_limbs);

    // num-bigint agrees
    let n_bi = to_biguint(&n_limbs);
    let expected = to_biguint(&base_limbs).modpow(&to_biguint(&exp_limbs), &n_bi);
    assert_eq!(to_biguint(&out), expected);

    // ... and so does the fixed-width engine at 16 limbs, on both paths.
    let fixed = params_for::<16>(&n_bi);
    let base_u = U1024::from_words(base);
    let exp_u = U1024::from_words(exp);
    assert_eq!(
        fixed.modpow_vartime(&base_u, &exp_u).to_limbs().as_slice(),
        res_limbs.as_slice()
    );
    assert_eq!(
        fixed
            .modpow_binary_vartime(&base_u, &exp_u)
            .to_limbs()
            .as_slice(),
        res_limbs.as_slice()
    );
}

#[test]
fn small_exponent_stays_binary_compatible() {
    // The runtime-width engine has no window policy; make sure tiny and
    // large exponents alike agree with the fixed-width policy path.
    let mut rng = ChaCha8Rng::seed_from_u64(0x5a11);
    let mut n = random_biguint(&mut rng, 4);
    n.set_bit(0, true);

    let fixed = params_for::<4>(&n);
    let dyn_params = dyn_params_for(&n, 4);
    let base = random_biguint(&mut rng, 4) % &n;

    for exp in [0u64, 1, 2, 3, 65537, u64::MAX] {
        let exp_bi = BigUint::from(exp);
        let expected = fixed.modpow_vartime(&to_uint::<4>(&base), &to_uint::<4>(&exp_bi));

        let mut out = [Limb(0); 4];
        dyn_params.modpow_vartime(&mut out, &to_limbs(&base, 4), &to_limbs(&exp_bi, 4));
        assert_eq!(out.as_slice(), expected.as_limbs().as_slice(), "exp {exp}");
    }
}
