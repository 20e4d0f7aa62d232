use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sigmatch::{compare, remap, signature_distance, SampleBuffer};

fn random_buffer(rng: &mut StdRng, width: u32, height: u32) -> SampleBuffer {
    let data: Vec<u8> = (0..width * height).map(|_| rng.random()).collect();
    SampleBuffer::new(data, width, height).unwrap()
}

fn make_gradient(width: u32, height: u32) -> SampleBuffer {
    let mut data = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 13) ^ (y * 7) ^ (x * y)) as u8);
        }
    }
    SampleBuffer::new(data, width, height).unwrap()
}

#[test]
fn identical_buffers_have_zero_distance() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..32 {
        let width = rng.random_range(1..40);
        let height = rng.random_range(1..40);
        let a = random_buffer(&mut rng, width, height);
        let b = a.clone();
        assert_eq!(signature_distance(a.view(), b.view()), 0.0);
    }
}

#[test]
fn divisor_is_primary_area() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..32 {
        let aw = rng.random_range(1..20);
        let ah = rng.random_range(1..20);
        let bw = aw + rng.random_range(0..20);
        let bh = ah + rng.random_range(0..20);
        let a = random_buffer(&mut rng, aw, ah);
        let b = random_buffer(&mut rng, bw, bh);

        let cmp = compare(a.view(), b.view());
        assert_eq!(cmp.samples, (bw * bh) as usize);
        let cmp = compare(b.view(), a.view());
        assert_eq!(cmp.samples, (bw * bh) as usize);
    }
}

#[test]
fn narrower_but_taller_grid_is_secondary() {
    let wide = SampleBuffer::filled(0, 5, 2).unwrap();
    let tall = SampleBuffer::filled(1, 3, 9).unwrap();
    let cmp = compare(tall.view(), wide.view());
    assert_eq!(cmp.samples, 10);
    assert_eq!(cmp.total, 10);
}

#[test]
fn both_orders_are_deterministic() {
    let a = make_gradient(17, 11);
    let b = make_gradient(9, 23);

    let ab = signature_distance(a.view(), b.view());
    let ba = signature_distance(b.view(), a.view());
    assert_eq!(ab, signature_distance(a.view(), b.view()));
    assert_eq!(ba, signature_distance(b.view(), a.view()));
    // a is wider in both orders, so both sample the same grid.
    assert_eq!(ab, ba);
}

#[test]
fn equal_widths_make_the_first_argument_primary() {
    // Heights differ, so swapping arguments changes the sampling grid.
    let a = SampleBuffer::new(vec![0, 0, 0, 0, 0, 0], 2, 3).unwrap();
    let b = SampleBuffer::new(vec![30, 30, 90, 90], 2, 2).unwrap();

    // a primary: rows 0,1,2 of a map to rows 0,0,1 of b.
    let ab = compare(a.view(), b.view());
    assert_eq!(ab.samples, 6);
    assert_eq!(ab.total, 30 * 4 + 90 * 2);

    // b primary: rows 0,1 of b map to rows 0,1 of a.
    let ba = compare(b.view(), a.view());
    assert_eq!(ba.samples, 4);
    assert_eq!(ba.total, -(30 * 2 + 90 * 2));

    assert!((ab.distance() - 50.0).abs() < 1e-6);
    assert!((ba.distance() + 60.0).abs() < 1e-6);
}

#[test]
fn remap_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        let source = rng.random_range(1..5000);
        let target = rng.random_range(1..5000);
        let coord = rng.random_range(0..source);
        let mapped = remap(coord, source, target);
        assert!(mapped < target);
        assert_eq!(remap(coord, source, source), coord);
    }
}

#[test]
fn downscaled_copy_scores_zero_on_block_image() {
    // 2x2 blocks upscaled by 3 remap exactly onto the original blocks.
    let small = SampleBuffer::new(vec![10, 200, 60, 120], 2, 2).unwrap();
    let mut data = Vec::with_capacity(36);
    for y in 0..6u32 {
        for x in 0..6u32 {
            data.push(small.view().get(x / 3, y / 3).unwrap());
        }
    }
    let large = SampleBuffer::new(data, 6, 6).unwrap();
    assert_eq!(signature_distance(small.view(), large.view()), 0.0);
    assert_eq!(signature_distance(large.view(), small.view()), 0.0);
}
