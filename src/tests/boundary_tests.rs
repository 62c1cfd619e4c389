//! Mask widths and field boundaries

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_mask_for_every_width() {
        for bits in 0..=MAX_FIELD_BITS {
            let expected = ((1i32 << bits) - 1) as i16;
            let config = FlexIdConfig::new(0, bits, bits).unwrap();
            assert_eq!(config.sequence_mask(), expected, "bits = {bits}");
            assert_eq!(config.partition_mask(), expected, "bits = {bits}");
        }
    }

    #[test]
    fn test_zero_sequence_bits_always_extract_zero() {
        let mut g = FlexId::new(0, 0, 8).unwrap();
        for seq in [0i16, 1, 0x5A, 0x7FFF, -1] {
            let id = g.generate_exact(1_000, seq, 0x11);
            assert_eq!(g.extract.sequence(id), 0);
            assert_eq!(g.extract.partition(id, 0), 0x11);
        }
        let id = g.generate_at(1_000);
        let id2 = g.generate_at(1_000);
        assert_eq!(g.extract.sequence(id2), 0);
        assert_eq!(id, id2);
    }

    #[test]
    fn test_max_field_values() {
        let g = FlexId::new(0, 15, 15).unwrap();
        let id = g.generate_exact(1, 0x7FFF, 0x7FFF);

        assert_eq!(id, (1i64 << 30) | (0x7FFF << 15) | 0x7FFF);
        assert_eq!(g.extract.decompose(id), (1, 0x7FFF, 0x7FFF));
    }

    #[test]
    fn test_largest_millis_for_widest_fields() {
        let g = FlexId::new(0, 15, 15).unwrap();
        let max_millis = i64::MAX >> 30;
        let id = g.generate_exact(max_millis, 0x7FFF, 0x7FFF);

        assert_eq!(id, i64::MAX);
        assert_eq!(g.extract.millis(id), max_millis);
    }
}
