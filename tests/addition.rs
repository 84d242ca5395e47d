use lanesum::simd::{add_into_with, Backend, SimdAdd};
use lanesum::FloatVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.random_range(-1.0e6f32..1.0e6)).collect()
}

#[test]
fn test_demo_operands_sum_to_nine() {
    let (a, b) = lanesum::inputs::operands();
    let c = a + b;

    assert_eq!(c.to_array(), [9.0; 8]);
    for i in 0..FloatVector::LEN {
        assert_eq!(c[i], a[i] + b[i]);
    }
}

#[test]
fn test_random_float_vectors_match_elementwise_sum() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..1_000 {
        let a: [f32; 8] = std::array::from_fn(|_| rng.random_range(-1.0e6f32..1.0e6));
        let b: [f32; 8] = std::array::from_fn(|_| rng.random::<f32>());

        let c = FloatVector::new(a) + FloatVector::new(b);

        for i in 0..FloatVector::LEN {
            assert_eq!(c[i].to_bits(), (a[i] + b[i]).to_bits(), "lane {i}");
        }
    }
}

#[test]
fn test_swapping_operands_gives_identical_output() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1_000 {
        let a = FloatVector::new(std::array::from_fn(|_| rng.random_range(-1.0e3f32..1.0e3)));
        let b = FloatVector::new(std::array::from_fn(|_| rng.random_range(-1.0e3f32..1.0e3)));

        let ab = (a + b).to_array().map(f32::to_bits);
        let ba = (b + a).to_array().map(f32::to_bits);
        assert_eq!(ab, ba);
    }
}

#[test]
fn test_slice_adders_agree_for_every_length() {
    let mut rng = StdRng::seed_from_u64(1234);

    for len in 0..=70 {
        let a = random_vec(&mut rng, len);
        let b = random_vec(&mut rng, len);

        let expected = a.as_slice().scalar_add(b.as_slice());

        assert_eq!(a.as_slice().simd_add(b.as_slice()), expected, "simd, len {len}");
        assert_eq!(a.as_slice().par_simd_add(b.as_slice()), expected, "par, len {len}");
    }
}

#[test]
fn test_large_parallel_addition() {
    let mut rng = StdRng::seed_from_u64(99);
    let size = 100_003;

    let a = random_vec(&mut rng, size);
    let b = random_vec(&mut rng, size);

    let expected = a.as_slice().scalar_add(b.as_slice());
    let result = a.par_simd_add(b);

    assert_eq!(result.len(), size);
    assert_eq!(result, expected);
}

#[test]
fn test_available_backends_on_unaligned_subslices() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_vec(&mut rng, 64);
    let b = random_vec(&mut rng, 64);

    for backend in Backend::available() {
        for offset in 0..8 {
            let len = 37;
            let a_view = &a[offset..offset + len];
            let b_view = &b[offset + 1..offset + 1 + len];

            let mut out = vec![f32::NAN; len + 2];
            add_into_with(backend, a_view, b_view, &mut out[1..=len]);

            assert!(out[0].is_nan(), "{backend}: wrote before the output");
            assert!(out[len + 1].is_nan(), "{backend}: wrote past the output");
            for k in 0..len {
                assert_eq!(out[1 + k], a_view[k] + b_view[k], "{backend}, offset {offset}");
            }
        }
    }
}

#[test]
fn test_special_values_propagate() {
    let a = vec![f32::NAN, f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY, 1.0];
    let b = vec![1.0, 1.0, -1.0, f32::NEG_INFINITY, f32::MAX];

    let c = a.simd_add(b);

    assert!(c[0].is_nan());
    assert_eq!(c[1], f32::INFINITY);
    assert_eq!(c[2], f32::NEG_INFINITY);
    assert!(c[3].is_nan());
    assert_eq!(c[4], f32::MAX);
}
