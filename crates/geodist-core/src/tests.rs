//! Unit tests for geodist-core.

#[cfg(test)]
mod fixtures {
    use crate::{Point, Route};

    pub const EURATECH: Point = Point { latitude: 50.63328, longitude: 3.02014 };
    pub const CITADELLE: Point = Point { latitude: 50.64126, longitude: 3.04464 };
    pub const BIARRITZ: Point = Point { latitude: 43.48997, longitude: -1.50331 };
    pub const STRASBOURG: Point = Point { latitude: 48.58754, longitude: 7.74420 };

    /// ~1.9 km across Lille.
    pub fn lille() -> Route {
        Route::new(EURATECH, CITADELLE)
    }

    /// ~910 km across France.
    pub fn biarritz_strasbourg() -> Route {
        Route::new(BIARRITZ, STRASBOURG)
    }

    pub fn assert_near(got: i64, want: i64, tol: i64) {
        assert!((got - want).abs() <= tol, "got {got}, want {want} ± {tol}");
    }
}

#[cfg(test)]
mod point {
    use crate::{DistanceError, Point};

    #[test]
    fn from_pair_is_lat_then_lon() {
        assert_eq!(Point::from((50.5, 3.1)), Point::new(50.5, 3.1));
        assert_eq!(Point::from([50.5, 3.1]), Point::new(50.5, 3.1));
    }

    #[test]
    fn out_of_range_is_kept() {
        let p = Point::new(123.0, -400.0);
        assert_eq!(p.latitude, 123.0);
        assert_eq!(p.longitude, -400.0);
    }

    #[test]
    fn display_six_decimals() {
        assert_eq!(Point::new(50.63328, 3.02014).to_string(), "(50.633280, 3.020140)");
    }

    #[test]
    fn parse() {
        assert_eq!("48.58754, 7.7442".parse::<Point>().unwrap(), Point::new(48.58754, 7.7442));
        assert!(matches!("48.5".parse::<Point>(), Err(DistanceError::ParsePoint(_))));
        assert!(matches!("a,b".parse::<Point>(), Err(DistanceError::ParsePoint(_))));
    }

    #[test]
    fn coincidence_is_exact() {
        let p = Point::new(10.0, 20.0);
        assert!(p.coincides_with(p));
        assert!(!p.coincides_with(Point::new(10.0, 20.0 + 1e-10)));
    }
}

#[cfg(test)]
mod route {
    use super::fixtures::*;
    use crate::{Route, format_distance};

    #[test]
    fn reversed_swaps_endpoints() {
        let r = lille().reversed();
        assert_eq!(r.start, CITADELLE);
        assert_eq!(r.end, EURATECH);
        assert_eq!(r.reversed(), lille());
    }

    #[test]
    fn degenerate() {
        assert!(Route::new(EURATECH, EURATECH).is_degenerate());
        assert!(!lille().is_degenerate());
    }

    #[test]
    fn format_boundaries() {
        assert_eq!(format_distance(0), "0m");
        assert_eq!(format_distance(1500), "1500m");
        assert_eq!(format_distance(9999), "9999m");
        assert_eq!(format_distance(10000), "10km");
        assert_eq!(format_distance(12300), "12.3km");
        assert_eq!(format_distance(1234567), "1234.567km");
    }

    #[test]
    fn human_readable_matches_free_fn() {
        assert_eq!(Route::human_readable_distance(911408), format_distance(911408));
        assert_eq!(Route::human_readable_distance(911408), "911.408km");
    }
}

#[cfg(test)]
mod radius {
    use crate::{DistanceError, EarthRadius};

    #[test]
    fn constants() {
        assert_eq!(EarthRadius::Mean.meters(), 6_371_000.0);
        assert_eq!(EarthRadius::Equatorial.meters(), 6_378_137.0);
        assert_eq!(EarthRadius::Polar.meters(), 6_356_752.3142);
        assert_eq!(EarthRadius::default(), EarthRadius::Equatorial);
    }

    #[test]
    fn values_in_sweep_order() {
        let names: Vec<_> = EarthRadius::values().map(|(n, _)| n).collect();
        assert_eq!(names, ["mean", "equatorial", "polar"]);
    }

    #[test]
    fn parse_by_name() {
        assert_eq!("Polar".parse::<EarthRadius>().unwrap(), EarthRadius::Polar);
        assert!(matches!("oblate".parse::<EarthRadius>(), Err(DistanceError::ParseRadius(_))));
    }
}

#[cfg(test)]
mod haversine {
    use super::fixtures::*;
    use crate::{DistanceCalculator, EarthRadius, HaversineCalculator, Point, Route};

    #[test]
    fn default_radius_is_equatorial() {
        assert_eq!(HaversineCalculator::default().earth_radius(), 6_378_137.0);
    }

    #[test]
    fn zero_distance() {
        let calc = HaversineCalculator::default();
        for p in [EURATECH, BIARRITZ, Point::new(-90.0, 0.0), Point::new(200.0, 500.0)] {
            assert_eq!(calc.distance(&Route::new(p, p)), 0);
        }
    }

    #[test]
    fn lille_all_radii() {
        for (radius, want) in [(EarthRadius::Mean, 1942), (EarthRadius::Equatorial, 1945), (EarthRadius::Polar, 1938)] {
            let d = HaversineCalculator::new(radius.meters()).calculate(&lille()).unwrap();
            assert_near(d, want, 1);
        }
    }

    #[test]
    fn biarritz_to_strasbourg() {
        assert_near(HaversineCalculator::default().distance(&biarritz_strasbourg()), 911_408, 1);
    }

    #[test]
    fn symmetric() {
        let calc = HaversineCalculator::new(EarthRadius::Mean.meters());
        for route in [lille(), biarritz_strasbourg()] {
            assert_eq!(calc.distance(&route), calc.distance(&route.reversed()));
        }
    }

    #[test]
    fn half_circumference_on_equator() {
        let route = Route::new(Point::new(0.0, 0.0), Point::new(0.0, 180.0));
        assert_near(HaversineCalculator::default().distance(&route), 20_037_508, 1);
    }

    #[test]
    fn near_duplicate_points_still_zero() {
        let route = Route::new(Point::new(10.0, 20.0), Point::new(10.0, 20.0 + 1e-12));
        assert!(!route.is_degenerate());
        assert_eq!(HaversineCalculator::default().distance(&route), 0);
    }
}

#[cfg(test)]
mod vincenty {
    use super::fixtures::*;
    use crate::vincenty::DEFAULT_ITERATION_LIMIT;
    use crate::{DistanceCalculator, DistanceError, EarthRadius, Point, Route, VincentyCalculator};

    #[test]
    fn semi_minor_axis_matches_polar_radius() {
        let b = VincentyCalculator::default().semi_minor_axis();
        assert!((b - EarthRadius::Polar.meters()).abs() < 0.001, "got {b}");
    }

    #[test]
    fn zero_distance() {
        let calc = VincentyCalculator::default();
        for p in [EURATECH, STRASBOURG, Point::new(0.0, 0.0), Point::new(-95.0, 1000.0)] {
            assert_eq!(calc.calculate(&Route::new(p, p)).unwrap(), 0);
        }
    }

    #[test]
    fn lille_all_radii() {
        for (radius, want) in [(EarthRadius::Mean, 1945), (EarthRadius::Equatorial, 1947), (EarthRadius::Polar, 1941)] {
            let d = VincentyCalculator::new(radius.meters()).calculate(&lille()).unwrap();
            assert_near(d, want, 1);
        }
    }

    #[test]
    fn biarritz_to_strasbourg() {
        let d = VincentyCalculator::default().calculate(&biarritz_strasbourg()).unwrap();
        assert_near(d, 911_846, 1);
    }

    #[test]
    fn new_york_london() {
        let route = Route::new(Point::new(40.7128, -74.006), Point::new(51.5074, -0.1278));
        assert_near(VincentyCalculator::default().calculate(&route).unwrap(), 5_585_234, 1);
    }

    #[test]
    fn along_equator() {
        let route = Route::new(Point::new(0.0, 0.0), Point::new(0.0, 10.0));
        assert_near(VincentyCalculator::default().calculate(&route).unwrap(), 1_113_195, 1);
    }

    #[test]
    fn along_meridian() {
        let route = Route::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_near(VincentyCalculator::default().calculate(&route).unwrap(), 1_105_855, 1);
    }

    #[test]
    fn symmetric() {
        let calc = VincentyCalculator::default();
        for route in [lille(), biarritz_strasbourg()] {
            let fwd = calc.calculate(&route).unwrap();
            let back = calc.calculate(&route.reversed()).unwrap();
            assert!((fwd - back).abs() <= 1, "{fwd} vs {back}");
        }
    }

    #[test]
    fn non_positive_limit_rejected() {
        let calc = VincentyCalculator::default();
        for limit in [0, -1, i32::MIN] {
            assert!(matches!(
                calc.calculate_with_limit(&lille(), limit),
                Err(DistanceError::InvalidIterationLimit(l)) if l == limit
            ));
        }
    }

    #[test]
    fn limit_checked_before_degenerate_shortcut() {
        let route = Route::new(EURATECH, EURATECH);
        assert!(matches!(
            VincentyCalculator::default().calculate_with_limit(&route, 0),
            Err(DistanceError::InvalidIterationLimit(0))
        ));
    }

    #[test]
    fn limit_of_one_fails_unless_degenerate() {
        let calc = VincentyCalculator::default();
        assert!(matches!(
            calc.calculate_with_limit(&lille(), 1),
            Err(DistanceError::ConvergenceFailure { iteration_limit: 1 })
        ));
        assert_eq!(calc.calculate_with_limit(&Route::new(BIARRITZ, BIARRITZ), 1).unwrap(), 0);
    }

    #[test]
    fn limit_of_n_allows_n_minus_one_updates() {
        // Lille converges after four λ updates.
        let calc = VincentyCalculator::default();
        assert!(calc.calculate_with_limit(&lille(), 4).is_err());
        assert_near(calc.calculate_with_limit(&lille(), 5).unwrap(), 1947, 1);
    }

    #[test]
    fn nearly_antipodal_does_not_converge() {
        let route = Route::new(Point::new(0.0, 0.0), Point::new(0.5, 179.7));
        assert!(matches!(
            VincentyCalculator::default().calculate(&route),
            Err(DistanceError::ConvergenceFailure { iteration_limit: DEFAULT_ITERATION_LIMIT })
        ));
    }

    #[test]
    fn near_duplicate_points_round_to_zero() {
        // Not bitwise-equal, so the λ loop runs.
        let route = Route::new(Point::new(10.0, 20.0), Point::new(10.0, 20.0000000001));
        assert!(!route.is_degenerate());
        assert_eq!(VincentyCalculator::default().calculate(&route).unwrap(), 0);
    }

    #[test]
    fn coincident_in_radians_exits_loop_with_zero() {
        // Adjacent f64 longitudes that collide under to_radians(): λ = 0, so
        // sinσ is exactly 0 on the first pass.
        let (a, b) = (30.000000000000007_f64, 30.00000000000001_f64);
        assert_ne!(a, b);
        assert_eq!(a.to_radians(), b.to_radians());

        let route = Route::new(Point::new(10.0, a), Point::new(10.0, b));
        assert!(!route.is_degenerate());

        let calc = VincentyCalculator::default();
        assert_eq!(calc.calculate(&route).unwrap(), 0);
        // The early exit needs one λ pass, which a limit of 1 does not allow.
        assert!(matches!(
            calc.calculate_with_limit(&route, 1),
            Err(DistanceError::ConvergenceFailure { iteration_limit: 1 })
        ));
    }
}

#[cfg(test)]
mod cross_algorithm {
    use super::fixtures::*;
    use crate::{DistanceCalculator, DistanceFormula, EarthRadius, HaversineCalculator, VincentyCalculator};

    #[test]
    fn lille_agrees_within_five_meters() {
        let h = HaversineCalculator::default().calculate(&lille()).unwrap();
        let v = VincentyCalculator::default().calculate(&lille()).unwrap();
        assert!((1_900..=2_000).contains(&h), "haversine {h}");
        assert!((1_900..=2_000).contains(&v), "vincenty {v}");
        assert!((h - v).abs() <= 5, "{h} vs {v}");
    }

    #[test]
    fn biarritz_strasbourg_within_half_percent() {
        for (_, radius) in EarthRadius::values() {
            let h = HaversineCalculator::new(radius).calculate(&biarritz_strasbourg()).unwrap();
            let v = VincentyCalculator::new(radius).calculate(&biarritz_strasbourg()).unwrap();
            let rel = (h - v).abs() as f64 / v as f64;
            assert!(rel < 0.005, "{h} vs {v} ({rel})");
        }
    }

    #[test]
    fn formulas_are_substitutable() {
        let calcs: Vec<_> = DistanceFormula::ALL
            .into_iter()
            .map(|f| f.calculator(EarthRadius::Equatorial.meters()))
            .collect();
        for calc in &calcs {
            let d = calc.calculate(&biarritz_strasbourg()).unwrap();
            assert!(d > 900_000 && d < 920_000, "got {d}");
            assert_eq!(calc.calculate(&lille().reversed()).unwrap(), calc.calculate(&lille()).unwrap());
        }
    }

    #[test]
    fn formula_names_round_trip() {
        for f in DistanceFormula::ALL {
            assert_eq!(f.as_str().parse::<DistanceFormula>().unwrap(), f);
        }
        assert!("cosine".parse::<DistanceFormula>().is_err());
    }
}
