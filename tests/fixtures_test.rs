mod common;

use astrocalc::astrometry::{
    calculate_angular_distance, calculate_proper_motions, calculate_total_proper_motion,
};
use astrocalc::catalog_query::{create_irsa_url, create_simbad_url};
use astrocalc::conversion::{convert_to_decimal_coords, convert_to_sexagesimal_coords};
use astrocalc::coordinates::{AngularUnit, DecimalCoords};
use astrocalc::photometry::{calculate_distance_from_magnitudes, get_panstarrs_object_info_flags};
use astrocalc::time::convert_mjd_str_to_datetime;
use chrono::NaiveDate;
use common::{assert_coords_close, coords, init_tracing, QSO_EPOCH_A, QSO_EPOCH_B};

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[test]
fn test_delimiter_equivalence() {
    init_tracing();

    for (ra, dec) in [
        ("12h 57m 21.00s", "+71d 53m 49.2s"),
        ("12h57m21.00s", "+71d53m49.2s"),
        ("12h 57' 21.00\"", "+71° 53' 49.2\""),
        ("12:57:21.00", "+71:53:49.2"),
    ] {
        let position = convert_to_decimal_coords(ra, dec).unwrap();
        assert_eq!(round4(position.ra()), 194.3375, "{ra}");
        assert_eq!(round4(position.dec()), 71.897, "{dec}");
    }
}

#[test]
fn test_sexagesimal_round_trip() {
    init_tracing();

    let text = convert_to_sexagesimal_coords(QSO_EPOCH_A.0, QSO_EPOCH_A.1).unwrap();
    assert_eq!(text, "12 57 21.00 71 53 49.19");

    let (ra_text, dec_text) = text.split_at(11);
    let back = convert_to_decimal_coords(ra_text, dec_text).unwrap();
    // Seconds of time are printed to 0.01 s, i.e. 0.15 arcsec of RA
    assert_coords_close(&back, QSO_EPOCH_A, 0.0075 / 3600.0 * 15.0);
    assert_eq!(
        convert_to_sexagesimal_coords(back.ra(), back.dec()).unwrap(),
        text
    );
}

#[test]
fn test_angular_distance_fixture() {
    let distance = calculate_angular_distance(
        &coords(QSO_EPOCH_A),
        &coords(QSO_EPOCH_B),
        AngularUnit::MilliArcSecond,
    );
    assert_eq!(distance, 2826.5755661016333);
}

#[test]
fn test_proper_motion_fixture() {
    let pm = calculate_proper_motions(
        &coords(QSO_EPOCH_A),
        &coords(QSO_EPOCH_B),
        55400.0,
        56700.0,
        AngularUnit::MilliArcSecond,
    )
    .unwrap();
    assert_eq!(pm.pm_ra, -764.7309441403478);
    assert_eq!(pm.pm_dec, 212.1604615256536);

    assert_eq!(
        calculate_total_proper_motion(-764.7309441403478, 212.16046152565366),
        793.6154474054586
    );
}

#[test]
fn test_mjd_fixtures() {
    assert_eq!(
        convert_mjd_str_to_datetime("58432.63880639").unwrap(),
        NaiveDate::from_ymd_opt(2018, 11, 10)
            .unwrap()
            .and_hms_micro_opt(15, 19, 52, 872096)
            .unwrap()
    );
    assert_eq!(
        convert_mjd_str_to_datetime("58435.58375519")
            .unwrap()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
        "2018-11-13T14:00:36.448416"
    );
}

#[test]
fn test_distance_from_magnitudes_fixture() {
    assert_eq!(
        calculate_distance_from_magnitudes(14.25, 10.75).unwrap(),
        50.11872336272722
    );
}

#[test]
fn test_flag_decode_fixture() {
    let flags = get_panstarrs_object_info_flags(60);
    let pairs: Vec<(&str, &str)> = flags.iter().map(|flag| flag.as_pair()).collect();
    assert_eq!(
        pairs,
        vec![
            (
                "4",
                "object IDed with known ICRF quasar (may have ICRF position measurement)"
            ),
            (
                "8",
                "identified as likely QSO (Hernitschek+ 2015ApJ...801...45H) PQSO>=0.60"
            ),
            (
                "16",
                "identified as possible QSO (Hernitschek+ 2015ApJ...801...45H) PQSO>=0.05"
            ),
            (
                "32",
                "identified as likely RR Lyra (Hernitschek+ 2015ApJ...801...45H) PRRLyra>=0.60"
            ),
        ]
    );
}

#[test]
fn test_query_url_fixtures() {
    let position = DecimalCoords::new(194.3375, 71.897).unwrap();

    assert_eq!(
        create_simbad_url(&position, 0.001).unwrap(),
        "https://simbad.cds.unistra.fr/simbad/sim-tap/sync?request=doQuery&lang=adql&format=csv&query=\
         SELECT%20main_id%2C%20otype_txt%2C%20ra%2C%20dec%2C%20plx_value%2C%20pmra%2C%20pmdec%2C%20\
         rvz_radvel%2C%20sp_type%20FROM%20basic%20WHERE%201%3DCONTAINS%28POINT%28%27ICRS%27%2C%20ra\
         %2C%20dec%29%2C%20CIRCLE%28%27ICRS%27%2C%20194.3375%2C%2071.897%2C%200.001%29%29"
    );
    assert_eq!(
        create_irsa_url(&position, 0.001).unwrap(),
        "https://irsa.ipac.caltech.edu/SCS?table=allwise_p3as_psd&RA=194.3375&DEC=71.897&SR=0.001&format=csv"
    );
}
