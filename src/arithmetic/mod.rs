//! arithmetic routines

use crate::*;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod division;
pub(crate) mod modulo;
pub(crate) mod rounding;

/// Return 10^pow
///
/// Try to calculate this with fewest number of allocations
///
pub(crate) fn ten_to_the(pow: u64) -> BigInt {
    ten_to_the_uint(pow).into()
}

/// Return 10^pow
pub(crate) fn ten_to_the_uint(pow: u64) -> BigUint {
    if pow < 20 {
        return BigUint::from(10u64.pow(pow as u32));
    }

    // linear case of 10^pow = 10^(19 * count + rem)
    if pow < 590 {
        let ten_to_nineteen = 10u64.pow(19);

        // count factors of 19
        let (count, rem) = pow.div_rem(&19);

        let mut res = BigUint::from(ten_to_nineteen);
        for _ in 1..count {
            res *= ten_to_nineteen;
        }
        if rem != 0 {
            res *= 10u64.pow(rem as u32);
        }

        return res;
    }

    // use recursive algorithm where linear case might be too slow
    let (quotient, rem) = pow.div_rem(&16);
    let x = ten_to_the_uint(quotient);

    let x2 = &x * &x;
    let x4 = &x2 * &x2;
    let x8 = &x4 * &x4;
    let res = &x8 * &x8;

    if rem == 0 {
        res
    } else {
        res * 10u64.pow(rem as u32)
    }
}

/// Multiply n by 10^pow in place
pub(crate) fn multiply_by_ten_to_the(n: &mut BigInt, pow: u64) {
    if pow == 0 || n.is_zero() {
        return;
    }
    if pow < 20 {
        *n *= 10u64.pow(pow as u32);
    } else {
        *n *= ten_to_the(pow);
    }
}

/// Return the integer representing `int_val × 10^-from` at scale `to`
///
/// `to` must not be smaller than `from`
pub(crate) fn rescale(int_val: &BigInt, from: u64, to: u64) -> BigInt {
    debug_assert!(from <= to);
    let mut result = int_val.clone();
    multiply_by_ten_to_the(&mut result, to - from);
    result
}


#[cfg(test)]
mod test_ten_to_the {
    use super::*;

    #[test]
    fn matches_repeated_multiplication() {
        let mut expected = BigUint::one();
        for pow in 0..700u64 {
            assert_eq!(ten_to_the_uint(pow), expected, "10^{}", pow);
            expected *= 10u8;
        }
    }

    #[test]
    fn rescale_negative() {
        let n = BigInt::from(-125);
        assert_eq!(rescale(&n, 2, 5), BigInt::from(-125000));
        assert_eq!(rescale(&n, 3, 3), n);
    }

    #[test]
    fn rescale_far() {
        let n = BigInt::from(7);
        let expected: BigInt = BigInt::from(7) * ten_to_the(45);
        assert_eq!(rescale(&n, 0, 45), expected);
    }
}
