mod helpers {
    use kzg10_algebra::toy::ToyField;
    use kzg10_algebra::{ScalarField, dot_product, powers};

    type F = ToyField<2147483647>;

    #[test]
    fn test_powers() {
        let x = F::from_u64(3);
        let got: Vec<_> = powers(x).take(5).collect();
        let expected = vec![
            F::ONE,
            F::from_u64(3),
            F::from_u64(9),
            F::from_u64(27),
            F::from_u64(81),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn test_powers_of_zero() {
        let got: Vec<_> = powers(F::ZERO).take(3).collect();
        assert_eq!(got, vec![F::ONE, F::ZERO, F::ZERO]);
    }

    #[test]
    fn test_dot_product() {
        // [1, 2, 3] . [4, 5, 6] = 32
        let lhs = [F::from_u64(1), F::from_u64(2), F::from_u64(3)];
        let rhs = [F::from_u64(4), F::from_u64(5), F::from_u64(6)];
        assert_eq!(dot_product(&lhs, &rhs), F::from_u64(32));
        assert_eq!(dot_product::<F>(&[], &[]), F::ZERO);
    }

    #[test]
    #[should_panic]
    fn test_dot_product_mismatched() {
        dot_product(&[F::ONE], &[]);
    }

    #[test]
    fn test_pow_matches_repeated_multiplication() {
        let x = F::from_u64(123_456);
        let mut acc = F::ONE;
        for e in 0..20 {
            assert_eq!(x.pow(e), acc);
            acc *= x;
        }
    }

    #[test]
    fn test_large_modulus_arithmetic() {
        // (p - 1)^2 = 1 mod p
        let minus_one = -F::ONE;
        assert_eq!(minus_one.square(), F::ONE);
        assert_eq!(minus_one.double(), -F::from_u64(2));
        assert_eq!(minus_one.inverse(), Some(minus_one));
    }
}
