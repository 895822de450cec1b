//! common routines to be included by benches

use decimath::Decimal;


/// Generate `count` random decimal strings with up to `max_digits` digits
///
/// Roughly half are negative; the scale is anywhere from zero to the
/// number of digits.
pub fn random_decimal_strings(seed: u64, count: usize, max_digits: u32) -> Vec<String> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let digit_count = rng.rand_range(1..max_digits + 1) as usize;
            let mut digits: String = (0..digit_count)
                .map(|_| char::from(b'0' + rng.rand_range(0..10) as u8))
                .collect();

            let scale = rng.rand_range(0..digit_count as u32) as usize;
            if scale > 0 {
                digits.insert(digit_count - scale, '.');
            }
            if rng.rand_u32() % 2 == 0 {
                digits.insert(0, '-');
            }
            digits
        })
        .collect()
}

/// Parse strings produced by [`random_decimal_strings`]
pub fn collect_decimals(src: &[String]) -> Vec<Decimal> {
    src.iter()
       .map(|s| s.parse().unwrap())
       .collect()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a [T],
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new_with_seed(v: &'a [T], seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
