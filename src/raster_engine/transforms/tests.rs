#[cfg(test)]
mod tests {
    use crate::raster_engine::common::error::RasterError;
    use crate::raster_engine::histogram::{HistogramChannel, build_histogram};
    use crate::raster_engine::raster::{ChannelLayout, Raster};
    use crate::raster_engine::transforms::{
        Operation, StretchParams, ThresholdMode, negate, posterize, stretch, threshold,
    };

    fn gradient(layout: ChannelLayout) -> Raster {
        let len = 16 * 16 * layout.channel_count();
        let samples = (0..len).map(|i| (i % 256) as u8).collect();
        Raster::new(16, 16, layout, samples).unwrap()
    }

    fn luma(samples: &[u8]) -> Raster {
        Raster::new(samples.len(), 1, ChannelLayout::Luma, samples.to_vec()).unwrap()
    }

    #[test]
    fn test_simple_threshold() {
        let out = threshold(&luma(&[10, 200]), 100, ThresholdMode::Simple).unwrap();
        assert_eq!(out.samples(), &[0, 255]);
    }

    #[test]
    fn test_multilevel_threshold_is_non_decreasing() {
        let input = gradient(ChannelLayout::Luma);
        for bins in [1, 2, 3, 4, 7, 16, 100, 255, 1000] {
            let out = threshold(&input, bins, ThresholdMode::Multilevel).unwrap();
            let mut pairs: Vec<(u8, u8)> = input
                .samples()
                .iter()
                .copied()
                .zip(out.samples().iter().copied())
                .collect();
            pairs.sort();
            for w in pairs.windows(2) {
                assert!(w[0].1 <= w[1].1, "bins {}: {:?}", bins, w);
            }
        }
    }

    #[test]
    fn test_multilevel_threshold_levels() {
        let out = threshold(&luma(&[0, 62, 63, 130, 255]), 4, ThresholdMode::Multilevel).unwrap();
        assert_eq!(out.samples(), &[0, 0, 63, 126, 189]);
    }

    #[test]
    fn test_threshold_non_positive_is_noop() {
        let input = luma(&[1, 2, 3]);
        for mode in [ThresholdMode::Simple, ThresholdMode::Multilevel] {
            assert_eq!(threshold(&input, 0, mode).unwrap(), input);
            assert_eq!(threshold(&input, -5, mode).unwrap(), input);
        }
    }

    #[test]
    fn test_threshold_rejects_color() {
        let err = threshold(&gradient(ChannelLayout::Rgb), 2, ThresholdMode::Simple).unwrap_err();
        assert!(matches!(
            err,
            RasterError::UnsupportedChannelLayout { operation: "threshold", .. }
        ));
    }

    #[test]
    fn test_negate_rgb_pixel() {
        let input = Raster::new(1, 1, ChannelLayout::Rgb, vec![10, 20, 30]).unwrap();
        assert_eq!(negate(&input).samples(), &[245, 235, 225]);
    }

    #[test]
    fn test_negate_twice_is_identity() {
        for layout in [ChannelLayout::Luma, ChannelLayout::Rgb, ChannelLayout::Rgba] {
            let input = gradient(layout);
            assert_eq!(negate(&negate(&input)), input);
        }
    }

    #[test]
    fn test_posterize_rgb_pixel() {
        let input = Raster::new(1, 1, ChannelLayout::Rgb, vec![100, 150, 200]).unwrap();
        assert_eq!(posterize(&input, 4).unwrap().samples(), &[64, 128, 192]);
    }

    #[test]
    fn test_posterize_keeps_alpha() {
        let input = Raster::new(1, 1, ChannelLayout::Rgba, vec![100, 150, 200, 77]).unwrap();
        assert_eq!(posterize(&input, 4).unwrap().samples(), &[64, 128, 192, 77]);
    }

    #[test]
    fn test_posterize_rejects_luma() {
        assert!(matches!(
            posterize(&luma(&[1]), 4),
            Err(RasterError::UnsupportedChannelLayout { operation: "posterize", .. })
        ));
    }

    #[test]
    fn test_stretch_explicit_endpoints() {
        let params = StretchParams::new(10, 200, 0, 255);
        let out = stretch(&luma(&[10, 200]), Some(params)).unwrap();
        assert_eq!(out.samples(), &[0, 255]);
    }

    #[test]
    fn test_stretch_auto_uses_occupied_range() {
        let out = stretch(&luma(&[50, 100, 150]), None).unwrap();
        assert_eq!(out.samples(), &[0, 127, 255]);
    }

    #[test]
    fn test_stretch_output_stays_within_clamps() {
        let input = gradient(ChannelLayout::Luma);
        let params = StretchParams::new(60, 90, 30, 200);
        let out = stretch(&input, Some(params)).unwrap();
        assert!(out.samples().iter().all(|s| (30..=200).contains(s)));
    }

    #[test]
    fn test_stretch_flat_raster_is_division_by_zero() {
        let input = Raster::filled(3, 3, ChannelLayout::Luma, 90).unwrap();
        assert!(matches!(stretch(&input, None), Err(RasterError::DivisionByZero(_))));
    }

    #[test]
    fn test_stretch_rejects_color() {
        assert!(matches!(
            stretch(&gradient(ChannelLayout::Rgba), None),
            Err(RasterError::UnsupportedChannelLayout { .. })
        ));
    }

    #[test]
    fn test_transforms_preserve_histogram_total() {
        let input = gradient(ChannelLayout::Luma);
        let out = Operation::Threshold { value: 5, mode: ThresholdMode::Multilevel }
            .apply(&input)
            .unwrap();
        let histogram = build_histogram(&out);
        assert_eq!(histogram.table(HistogramChannel::Luma).unwrap().total(), 256);
    }

    #[test]
    fn test_operation_dispatch() {
        let input = Raster::new(1, 1, ChannelLayout::Rgb, vec![10, 20, 30]).unwrap();
        assert_eq!(Operation::Negate.apply(&input).unwrap(), negate(&input));
        assert_eq!(Operation::Posterize { bin_count: 4 }.to_string(), "posterize(4)");
        assert_eq!(Operation::Stretch(None).name(), "stretch");
    }
}
