use crate::*;

const YEAR: u64 = SECONDS_PER_YEAR;

fn percent_ray(percent: u128) -> U256 {
    U256::from(RAY / 100 * percent)
}

mod wad_ray_math {

    use super::*;

    #[test]
    fn ray_mul() {
        let two = U256::from(2 * RAY);
        let three = U256::from(3 * RAY);

        assert_eq!(two.ray_mul(three).unwrap(), U256::from(6 * RAY));
        assert_eq!(U256::zero().ray_mul(three).unwrap(), U256::zero());
    }

    #[test]
    fn ray_mul_rounds_half_up() {
        let one = U256::one();

        assert_eq!(one.ray_mul(U256::from(HALF_RAY)).unwrap(), U256::one());
        assert_eq!(one.ray_mul(U256::from(HALF_RAY - 1)).unwrap(), U256::zero());
    }

    #[test]
    fn ray_div_rounds_half_up() {
        let one_third = U256::one().ray_div(U256::from(3u8)).unwrap();
        let two_thirds = U256::from(2u8).ray_div(U256::from(3u8)).unwrap();

        assert_eq!(one_third, U256::from(333_333_333_333_333_333_333_333_333u128));
        assert_eq!(two_thirds, U256::from(666_666_666_666_666_666_666_666_667u128));
    }

    #[test]
    fn wad_mul_div() {
        let half = U256::from(HALF_WAD);
        let four = U256::from(4 * WAD);

        assert_eq!(half.wad_mul(four).unwrap(), U256::from(2 * WAD));
        assert_eq!(four.wad_div(half).unwrap(), U256::from(8 * WAD));
    }

    #[test]
    fn should_fail_on_overflow() {
        let max = !U256::zero();

        assert_eq!(max.ray_mul(U256::from(2u8)), None);
        assert_eq!(max.wad_mul(U256::from(2u8)), None);
        assert_eq!(max.ray_div(U256::one()), None);
        assert_eq!(max.wad_to_ray(), None);
        assert_eq!(max.ray_to_wad(), None);
    }

    #[test]
    fn should_fail_on_zero_divisor() {
        assert_eq!(U256::from(RAY).ray_div(U256::zero()), None);
        assert_eq!(U256::from(WAD).wad_div(U256::zero()), None);
    }

    #[test]
    fn wad_to_ray() {
        assert_eq!(U256::from(WAD).wad_to_ray().unwrap(), ray());
        assert_eq!(ray().ray_to_wad().unwrap(), wad());
    }

    #[test]
    fn ray_to_wad_rounds_half_up() {
        let half_ratio = U256::from(WAD_RAY_RATIO / 2);

        assert_eq!(half_ratio.ray_to_wad().unwrap(), U256::one());
        assert_eq!(
            (half_ratio - U256::one()).ray_to_wad().unwrap(),
            U256::zero()
        );
    }

    #[test]
    fn ray_wad_round_trip_is_within_one_rounding_unit() {
        let values = [
            0u128,
            1,
            WAD_RAY_RATIO / 2,
            WAD_RAY_RATIO - 1,
            123_456_789 * WAD_RAY_RATIO + 987_654_321,
            RAY + 499_999_999,
            RAY + 500_000_000,
            u128::MAX / 3,
        ];

        for value in values {
            let value = U256::from(value);
            let round_trip = value.ray_to_wad().unwrap().wad_to_ray().unwrap();
            let diff = if round_trip > value {
                round_trip - value
            } else {
                value - round_trip
            };

            assert!(diff <= U256::from(WAD_RAY_RATIO / 2));
        }
    }

    #[test]
    fn to_u128_bound() {
        assert_eq!(to_u128(U256::from(u128::MAX)), Some(u128::MAX));
        assert_eq!(to_u128(U256::from(u128::MAX) + U256::one()), None);
    }
}

mod percentage_math {

    use super::*;

    #[test]
    fn percent_mul() {
        assert_eq!(
            U256::from(10_000u32).percent_mul(500).unwrap(),
            U256::from(500u32)
        );
        assert_eq!(U256::from(1u32).percent_mul(5_000).unwrap(), U256::one());
        assert_eq!(U256::from(1u32).percent_mul(4_999).unwrap(), U256::zero());
        assert_eq!(U256::from(1_000u32).percent_mul(0).unwrap(), U256::zero());
    }

    #[test]
    fn percent_div() {
        assert_eq!(
            U256::from(500u32).percent_div(500).unwrap(),
            U256::from(PERCENTAGE_FACTOR)
        );
        assert_eq!(U256::from(500u32).percent_div(0), None);
    }
}

mod interest {

    use super::*;

    #[test]
    fn linear_interest_for_one_year() {
        let factor = linear_interest(percent_ray(10), YEAR).unwrap();

        assert_eq!(factor, U256::from(RAY + RAY / 10));
    }

    #[test]
    fn zero_elapsed_time_is_identity() {
        for percent in [0, 1, 10, 300] {
            assert_eq!(linear_interest(percent_ray(percent), 0).unwrap(), ray());
            assert_eq!(compounded_interest(percent_ray(percent), 0).unwrap(), ray());
        }
    }

    #[test]
    fn compounded_interest_first_seconds() {
        let rate = percent_ray(10);
        let rate_per_second = rate / U256::from(SECONDS_PER_YEAR);

        assert_eq!(
            compounded_interest(rate, 1).unwrap(),
            ray() + rate_per_second
        );

        let square = rate_per_second.ray_mul(rate_per_second).unwrap();
        assert_eq!(
            compounded_interest(rate, 2).unwrap(),
            ray() + rate_per_second * U256::from(2u8) + square
        );
    }

    #[test]
    fn compounded_interest_for_one_year() {
        // e^0.1 = 1.10517..., third order expansion gives 1.105166...
        let factor = compounded_interest(percent_ray(10), YEAR).unwrap();

        assert!(factor > U256::from(RAY + RAY / 1_000 * 105));
        assert!(factor < U256::from(RAY + RAY / 10_000 * 1_052));
    }

    #[test]
    fn compounded_dominates_linear() {
        let elapsed = [1, 2, 60, 3_600, 86_400, YEAR, 5 * YEAR];

        for percent in [1, 5, 10, 50, 300] {
            for elapsed_time in elapsed {
                let rate = percent_ray(percent);
                let linear = linear_interest(rate, elapsed_time).unwrap();
                let compounded = compounded_interest(rate, elapsed_time).unwrap();

                assert!(compounded >= linear);
            }
        }
    }

    #[test]
    fn interest_grows_with_time() {
        let rate = percent_ray(7);
        let mut prev = ray();

        for elapsed_time in [10, 100, 1_000, 10_000, YEAR] {
            let next = compounded_interest(rate, elapsed_time).unwrap();
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn interest_overflow() {
        assert_eq!(linear_interest(!U256::zero(), 2), None);
        assert_eq!(compounded_interest(!U256::zero(), YEAR), None);
    }
}
