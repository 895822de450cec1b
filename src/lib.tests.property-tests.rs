// Property tests to be included by lib.rs

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (any::<i128>(), 0u64..24).prop_map(|(m, s)| Decimal::new(m.into(), s))
}

fn rounding_mode_strategy() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::Ceiling),
        Just(RoundingMode::Floor),
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::HalfEven),
    ]
}

mod arithmetic {
    use super::*;

    proptest! {
        #[test]
        fn add_commutes(a in decimal_strategy(), b in decimal_strategy()) {
            let ab = &a + &b;
            let ba = &b + &a;
            prop_assert_eq!(ab.to_string(), ba.to_string());
            prop_assert_eq!(ab.scale, a.scale.max(b.scale));
        }

        #[test]
        fn add_associates(a in decimal_strategy(), b in decimal_strategy(), c in decimal_strategy()) {
            let lhs = (&a + &b) + &c;
            let rhs = &a + (&b + &c);
            prop_assert_eq!(lhs.to_string(), rhs.to_string());
        }

        #[test]
        fn add_then_subtract(a in decimal_strategy(), b in decimal_strategy()) {
            let sum = &a + &b;
            prop_assert_eq!(sum - &b, a);
        }

        #[test]
        fn mul_commutes(a in decimal_strategy(), b in decimal_strategy()) {
            let ab = &a * &b;
            let ba = &b * &a;
            prop_assert_eq!(ab.to_string(), ba.to_string());
            prop_assert_eq!(ab.scale, a.scale + b.scale);
        }

        #[test]
        fn identities(a in decimal_strategy()) {
            prop_assert_eq!((&a + Decimal::zero()).to_string(), a.to_string());
            prop_assert_eq!((&a * Decimal::one()).to_string(), a.to_string());
            prop_assert!((&a - &a).is_zero());
        }

        #[test]
        fn primitive_operands(a in decimal_strategy(), n: i32) {
            let d = Decimal::from(n);
            prop_assert_eq!(&a + n, &a + &d);
            prop_assert_eq!(n - &a, &d - &a);
            prop_assert_eq!(&a * n, &a * &d);

            let mut b = a.clone();
            b += n;
            b -= n;
            prop_assert_eq!(b, a);
        }

        #[test]
        fn div_to_scale_truncates(a in decimal_strategy(), b in decimal_strategy(), p in 0u64..30) {
            prop_assume!(!b.is_zero());
            let q = a.div_to_scale(&b, p).unwrap();
            prop_assert_eq!(q.scale, p);

            // |a - q·b| < |b|·10^-p and the remainder has the sign of a
            let rem = &a - &q * &b;
            let bound = Decimal::new(BigInt::one(), p) * b.abs();
            prop_assert!(rem.abs() < bound);
            prop_assert!(rem.is_zero() || rem.sign() == a.sign());
        }

        #[test]
        fn mod_floor_reconstructs(a in decimal_strategy(), b in decimal_strategy()) {
            prop_assume!(!b.is_zero());
            let r = a.mod_floor(&b).unwrap();
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.sign() == b.sign());

            let q = (&a - &r).div_to_scale(&b, 0).unwrap();
            prop_assert_eq!(q * &b + &r, a);
        }

        #[test]
        fn rem_matches_sign_of_dividend(a in decimal_strategy(), b in decimal_strategy()) {
            prop_assume!(!b.is_zero());
            let r = &a % &b;
            prop_assert!(r.abs() < b.abs());
            prop_assert!(r.is_zero() || r.sign() == a.sign());
        }
    }
}

mod ordering {
    use super::*;

    proptest! {
        #[test]
        fn compare_antisymmetric(a in decimal_strategy(), b in decimal_strategy()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            prop_assert_eq!(a.cmp(&a), Ordering::Equal);
        }

        #[test]
        fn scale_does_not_change_value(a in decimal_strategy(), extra in 0u64..30) {
            let padded = a.with_scale(a.scale + extra);
            prop_assert_eq!(&padded, &a);
            prop_assert_eq!(padded.normalized().to_string(), a.normalized().to_string());
        }

        #[test]
        fn floor_ceil_bracket(a in decimal_strategy()) {
            let floor = a.floor();
            let ceil = a.ceil();
            prop_assert!(floor <= a);
            prop_assert!(a <= ceil);
            prop_assert!(&ceil - &floor <= Decimal::one());
            prop_assert_eq!(floor == ceil, a.is_integer());
        }
    }
}

mod rounding {
    use super::*;

    proptest! {
        #[test]
        fn round_is_idempotent(a in decimal_strategy(), p in 0u64..30, mode in rounding_mode_strategy()) {
            let once = a.round(p, mode);
            let twice = once.round(p, mode);
            prop_assert_eq!(once.to_string(), twice.to_string());
            prop_assert!(once.scale <= p.max(a.scale));
        }

        #[test]
        fn round_moves_less_than_one_unit(a in decimal_strategy(), p in 0u64..30, mode in rounding_mode_strategy()) {
            let rounded = a.round(p, mode);
            let unit = Decimal::new(BigInt::one(), p);
            prop_assert!((&rounded - &a).abs() < unit);
        }

        #[test]
        fn directed_modes_bracket(a in decimal_strategy(), p in 0u64..30) {
            prop_assert!(a.round(p, RoundingMode::Floor) <= a);
            prop_assert!(a.round(p, RoundingMode::Ceiling) >= a);
            prop_assert!(a.round(p, RoundingMode::Down).abs() <= a.abs());
            prop_assert!(a.round(p, RoundingMode::Up).abs() >= a.abs());
        }
    }
}

mod allocation {
    use super::*;

    proptest! {
        #[test]
        fn parts_sum_to_amount(
            amount in decimal_strategy(),
            ratios in prop::collection::vec(0u32..1000, 1..8),
        ) {
            prop_assume!(ratios.iter().any(|&r| r != 0));
            let ratios: Vec<Decimal> = ratios.into_iter().map(Decimal::from).collect();

            let parts = amount.allocate(&ratios).unwrap();
            prop_assert_eq!(parts.len(), ratios.len());
            for part in parts.iter() {
                prop_assert_eq!(part.scale, amount.scale);
            }

            let total: Decimal = parts.iter().sum();
            prop_assert_eq!(total, amount);
        }

        #[test]
        fn equal_parts_differ_by_one_unit(amount in decimal_strategy(), n in 1usize..12) {
            let parts = amount.allocate_to(n).unwrap();
            let unit = Decimal::new(BigInt::one(), amount.scale);
            let max = parts.iter().max().unwrap();
            let min = parts.iter().min().unwrap();
            prop_assert!(max - min <= unit);
        }
    }
}

mod strings {
    use super::*;

    proptest! {
        #[test]
        fn display_parses_back(a in decimal_strategy()) {
            let s = a.to_string();
            let parsed: Decimal = s.parse().unwrap();
            prop_assert_eq!(&parsed.int_val, &a.int_val);
            prop_assert_eq!(parsed.scale, a.scale);
        }

        #[test]
        fn calculator_agrees_with_operators(a in decimal_strategy(), b in decimal_strategy()) {
            let (sa, sb) = (a.to_string(), b.to_string());
            prop_assert_eq!(calculator::add(&sa, &sb).unwrap(), (&a + &b).to_string());
            prop_assert_eq!(calculator::subtract(&sa, &sb).unwrap(), (&a - &b).to_string());
            prop_assert_eq!(calculator::multiply(&sa, &sb).unwrap(), (&a * &b).to_string());
            prop_assert_eq!(calculator::compare(&sa, &sb).unwrap(), a.cmp(&b) as i32);
        }
    }
}
