//! End-to-end checks of the theories against published positions

use approx::{assert_abs_diff_eq, assert_relative_eq};
use rstest::rstest;

use skyephem::almanac::{body_rise_transit_set, RiseSetConfig};
use skyephem::constants::DEG2RAD;
use skyephem::coordinates::HeliocentricEquatorial;
use skyephem::earthlib::{apparent_sidereal_time, mean_sidereal_time};
use skyephem::framelib::{light_time_correction, rotate_equatorial, Equatorial, LightTimeConfig};
use skyephem::keplerlib::{elements_to_position, KeplerConfig, OrbitalElements};
use skyephem::magnitudes::{comet_magnitude, MagnitudeParameters};
use skyephem::nutationlib::nutation_matrix;
use skyephem::planetlib::{vsop87_ecliptic_to_equator, Body, EarthCache, Planet};
use skyephem::positions::{geometric_position, geometric_table};
use skyephem::precessionlib::{precession_matrix, PrecessionDirection};
use skyephem::time::JulianDate;

fn reference_epoch() -> JulianDate {
    JulianDate::from_jd(2_455_200.5)
}

#[rstest]
#[case(Body::Sun, 18.968_112_4, -22.766_760_6, 0.983_292_81)]
#[case(Body::Mars, 9.456_397_41, 19.076_806_7, 0.723_964_96)]
#[case(Body::Jupiter, 21.958_641_3, -13.444_214_4, 5.670_271_80)]
#[case(Body::Saturn, 12.331_571_1, 0.355_458_01, 9.273_335_11)]
fn test_geometric_places_2010_jan_4(
    #[case] body: Body,
    #[case] ra_hours: f64,
    #[case] dec_degrees: f64,
    #[case] distance: f64,
) {
    let mut cache = EarthCache::new();
    let place = geometric_position(body, reference_epoch(), &mut cache).unwrap();
    assert_relative_eq!(place.ra_hours(), ra_hours, max_relative = 1e-6);
    assert_abs_diff_eq!(place.dec_degrees(), dec_degrees, epsilon = 1e-5);
    assert_relative_eq!(place.distance, distance, max_relative = 1e-6);
}

#[test]
fn test_reference_table_is_complete_and_serializable() {
    let mut cache = EarthCache::new();
    let table = geometric_table(reference_epoch(), &mut cache).unwrap();
    assert_eq!(table.len(), 10);

    let pluto = table.iter().find(|p| p.body == Body::Pluto).unwrap();
    assert!((31.0..34.0).contains(&pluto.distance), "{pluto}");

    let json = serde_json::to_string(&table).unwrap();
    assert!(json.contains("\"Jupiter\""));
}

#[test]
fn test_polaris_to_2050_and_back() {
    let epoch = JulianDate::from_jd(2_469_807.5);
    let polaris = Equatorial::from_degrees(
        (2.0 + 31.0 / 60.0 + 48.704 / 3600.0) * 15.0,
        89.0 + 15.0 / 60.0 + 50.72 / 3600.0,
    );

    let forward = precession_matrix(epoch, PrecessionDirection::FromJ2000);
    let of_date = rotate_equatorial(&nutation_matrix(epoch), &rotate_equatorial(&forward, &polaris));
    // Polaris keeps approaching the pole until about 2100
    assert!(of_date.dec > polaris.dec);

    let back = rotate_equatorial(
        &precession_matrix(epoch, PrecessionDirection::ToJ2000),
        &rotate_equatorial(&nutation_matrix(epoch).transpose(), &of_date),
    );
    assert_abs_diff_eq!(back.ra, polaris.ra, epsilon = 1e-8);
    assert_abs_diff_eq!(back.dec, polaris.dec, epsilon = 1e-10);
}

#[test]
fn test_comet_encke_meeus_33a() {
    // Elements for the J2000 equinox; 1990 October 6.0 TD
    let e = 0.850_219_6;
    let perihelion_time = JulianDate::new(2_448_192.5, 0.545_02);
    let encke = OrbitalElements::from_degrees(
        perihelion_time,
        0.0,
        0.0,
        2.209_140_4 * (1.0 - e),
        e,
        186.233_52,
        334.750_06,
        11.945_24,
    );
    let kepler = KeplerConfig::default();
    let tt = JulianDate::from_jd(2_448_170.5);

    let mut cache = EarthCache::new();
    let earth = vsop87_ecliptic_to_equator(&cache.earth(tt));
    let solution = light_time_correction(
        tt,
        &earth.xyz(),
        |t| {
            let helio = elements_to_position(t, &encke, &kepler)?;
            Ok(vsop87_ecliptic_to_equator(&helio).xyz())
        },
        &LightTimeConfig::default(),
    )
    .unwrap();

    let comet = HeliocentricEquatorial::new(solution.position);
    let (ra, dec, delta) = comet.geocentric(&earth).to_spherical();
    assert_abs_diff_eq!(ra / DEG2RAD, 158.558, epsilon = 0.01);
    assert_abs_diff_eq!(dec / DEG2RAD, 19.1585, epsilon = 0.01);
    assert_abs_diff_eq!(delta, 0.8243, epsilon = 0.01);

    let m = comet_magnitude(&comet, &earth, &MagnitudeParameters::new(9.8, 4.0));
    assert!(m.is_finite() && m > 9.0);
}

#[test]
fn test_sidereal_time_at_boston() {
    // 2010 February 18, 15:20 EST
    let jd = JulianDate::new(2_455_246.0, 0.347_23);
    let longitude = -(71.0 + 3.0 / 60.0 + 42.0 / 3600.0) * DEG2RAD;
    let mean = mean_sidereal_time(jd, jd, longitude);
    let apparent = apparent_sidereal_time(jd, jd, longitude);

    // The equation of the equinoxes stays within about 1.2 s of time
    let diff = (apparent - mean) * 12.0 / std::f64::consts::PI * 3600.0;
    assert!(diff.abs() < 1.2, "{diff}");
    assert!((0.0..std::f64::consts::TAU).contains(&mean));
}

#[test]
fn test_sun_rise_and_set_order_in_summer() {
    // 2010 June 21 at 40° N: about fifteen hours of daylight
    let date = JulianDate::from_jd(2_455_368.5);
    let rts = body_rise_transit_set(
        Body::Sun,
        date,
        0.0,
        40.0 * DEG2RAD,
        66.0,
        &RiseSetConfig::default(),
    )
    .unwrap();

    let (rise, transit, set) = (rts.rise.unwrap(), rts.transit.unwrap(), rts.set.unwrap());
    assert!(rise < transit && transit < set);
    let daylight_hours = (set - rise) * 24.0;
    assert_abs_diff_eq!(daylight_hours, 15.0, epsilon = 0.2);
}

#[test]
fn test_planets_parse_like_bodies() {
    for planet in Planet::ALL {
        let body: Body = planet.name().parse().unwrap();
        assert_eq!(body.planet(), Some(planet));
    }
}
