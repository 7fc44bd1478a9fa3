//! Property tests for placement invariants.

use kundali_base::{
    Planet, deg_to_dms, degrees_in_rashi, house_of, house_table, nakshatra_from_longitude,
    navamsa_index, navamsa_sign, normalize_360, place, rashi_index_of,
};
use proptest::prelude::*;

fn any_longitude() -> impl Strategy<Value = f64> {
    -10_000.0f64..10_000.0f64
}

proptest! {
    /// Normalization lands in [0, 360) and is idempotent.
    #[test]
    fn normalize_idempotent(x in any_longitude()) {
        let n = normalize_360(x);
        prop_assert!((0.0..360.0).contains(&n));
        prop_assert_eq!(normalize_360(n), n);
    }

    /// sign * 30 + degree_in_sign reconstructs the normalized longitude.
    #[test]
    fn sign_degree_partition(x in any_longitude()) {
        let sign = rashi_index_of(x);
        let deg = degrees_in_rashi(x);
        prop_assert!(sign < 12);
        prop_assert!((0.0..30.0).contains(&deg));
        prop_assert!((sign as f64 * 30.0 + deg - normalize_360(x)).abs() < 1e-9);
    }

    /// Nakshatra index and pada stay in range.
    #[test]
    fn nakshatra_in_range(x in any_longitude()) {
        let info = nakshatra_from_longitude(x);
        prop_assert!(info.nakshatra_index <= 26);
        prop_assert!((1..=4).contains(&info.pada));
    }

    /// Navamsha division and sign stay in range.
    #[test]
    fn navamsa_in_range(x in any_longitude()) {
        prop_assert!(navamsa_index(x) <= 8);
        prop_assert!(navamsa_sign(x) < 12);
    }

    /// DMS components are always carried into range.
    #[test]
    fn dms_components_in_range(x in 0.0f64..360.0) {
        let d = deg_to_dms(x);
        prop_assert!(d.min < 60);
        prop_assert!(d.sec < 60);
        prop_assert!(d.deg <= 360);
    }

    /// Houses form a bijection over 1..=12 and the ascendant's sign is house 1.
    #[test]
    fn house_bijection(asc in 0u8..12) {
        let mut houses: Vec<u8> = (0..12u8).map(|s| house_of(s, asc)).collect();
        houses.sort_unstable();
        prop_assert_eq!(houses, (1..=12u8).collect::<Vec<_>>());
        prop_assert_eq!(house_table(asc)[0].sign, asc);
    }

    /// A planet in the ascendant's sign is always in house 1.
    #[test]
    fn ascendant_sign_is_house_one(asc_lon in any_longitude(), offset in 0.0f64..30.0) {
        let asc = rashi_index_of(asc_lon);
        let lon = asc as f64 * 30.0 + offset;
        prop_assume!(rashi_index_of(lon) == asc);
        prop_assert_eq!(place(Planet::Moon, lon, asc).house, 1);
    }
}
