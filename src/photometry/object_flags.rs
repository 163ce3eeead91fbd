//! # Pan-STARRS object information flags
//!
//! Decoding of the Pan-STARRS1 DR2 `objInfoFlag` bitmask. The table is static and ordered by
//! ascending bit value; decoding keeps that order and emits every bit value in decimal.

use crate::coordinates::FlagDescription;

/// `(bit value, description)` for every documented `objInfoFlag` bit.
pub static PANSTARRS_OBJECT_INFO_FLAGS: [(u32, &str); 31] = [
    (1, "used within relphot (FEW); skip star"),
    (2, "used within relphot (POOR); skip star"),
    (4, "object IDed with known ICRF quasar (may have ICRF position measurement)"),
    (8, "identified as likely QSO (Hernitschek+ 2015ApJ...801...45H) PQSO>=0.60"),
    (16, "identified as possible QSO (Hernitschek+ 2015ApJ...801...45H) PQSO>=0.05"),
    (32, "identified as likely RR Lyra (Hernitschek+ 2015ApJ...801...45H) PRRLyra>=0.60"),
    (64, "identified as possible RR Lyra (Hernitschek+ 2015ApJ...801...45H) PRRLyra>=0.05"),
    (128, "identified as a variable based on ChiSq (Hernitschek+ 2015ApJ...801...45H)"),
    (256, "identified as a non-periodic (stationary) transient"),
    (512, "at least one detection identified with a known solar-system object (asteroid or other)"),
    (1024, "most detections identified with a known solar-system object (asteroid or other)"),
    (2048, "star with large proper motion"),
    (4096, "simple weighted average position was used (no IRLS fitting)"),
    (8192, "average position was fitted"),
    (16384, "proper motion model was fitted"),
    (32768, "parallax model was fitted"),
    (65536, "average position used (not PM or PAR)"),
    (131072, "proper motion used (not AVE or PAR)"),
    (262144, "parallax used (not AVE or PM)"),
    (524288, "mean astrometry could not be measured"),
    (1048576, "stack position used for mean astrometry"),
    (2097152, "mean astrometry used for stack position"),
    (4194304, "failure to measure proper-motion model"),
    (8388608, "extended in our data (eg, PS)"),
    (16777216, "extended in external data (eg, 2MASS)"),
    (33554432, "good-quality measurement in our data (eg,PS)"),
    (67108864, "good-quality measurement in external data (eg, 2MASS)"),
    (134217728, "good-quality object in the stack (>1 good stack measurement)"),
    (268435456, "the primary stack measurements are the best measurements"),
    (
        536870912,
        "suspect object in the stack (no more than 1 good measurement, 2 or more suspect or good stack measurement)",
    ),
    (
        1073741824,
        "poor-quality stack object (no more than 1 good or suspect measurement)",
    ),
];

/// Decode a Pan-STARRS `objInfoFlag` bitmask.
///
/// Arguments
/// ---------
/// * `bitmask`: the raw flag value from the catalog
///
/// Return
/// ------
/// * one [`FlagDescription`] per set bit, in ascending bit order. Set bits without a documented
///   meaning (bit 31) are skipped.
pub fn get_panstarrs_object_info_flags(bitmask: u32) -> Vec<FlagDescription> {
    PANSTARRS_OBJECT_INFO_FLAGS
        .iter()
        .filter(|(bit, _)| bitmask & bit != 0)
        .map(|(bit, description)| FlagDescription::new(bit.to_string(), *description))
        .collect()
}

#[cfg(test)]
mod object_flags_test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_table_is_ordered_single_bits() {
        for (index, (bit, _)) in PANSTARRS_OBJECT_INFO_FLAGS.iter().enumerate() {
            assert_eq!(*bit, 1 << index);
        }
    }

    #[test]
    fn test_decode_quasar_flags() {
        let flags = get_panstarrs_object_info_flags(60);
        let values = flags.iter().map(|flag| flag.value.as_str()).collect_vec();
        assert_eq!(values, ["4", "8", "16", "32"]);
        assert_eq!(
            flags[0].description,
            "object IDed with known ICRF quasar (may have ICRF position measurement)"
        );
        assert_eq!(
            flags[3].description,
            "identified as likely RR Lyra (Hernitschek+ 2015ApJ...801...45H) PRRLyra>=0.60"
        );
    }

    #[test]
    fn test_decode_edge_cases() {
        assert!(get_panstarrs_object_info_flags(0).is_empty());
        assert_eq!(get_panstarrs_object_info_flags(u32::MAX).len(), 31);
        assert!(get_panstarrs_object_info_flags(1 << 31).is_empty());

        let flags = get_panstarrs_object_info_flags(1 | 1073741824);
        assert_eq!(flags[0].value, "1");
        assert_eq!(flags[1].value, "1073741824");
    }
}
