mod tests {
    use embassy_time::Instant;
    use eyeblink_composer::color::{
        BLACK, Ramp, Rgb, rgb_from_u32, rgb_to_u32, scale_color,
    };

    const MAGENTA: Rgb = Rgb { r: 255, g: 0, b: 255 };
    const AMBER: Rgb = Rgb { r: 200, g: 100, b: 37 };

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x00FF_00FF), MAGENTA);
        assert_eq!(rgb_from_u32(0x0012_3456), Rgb::new(0x12, 0x34, 0x56));
        // Top byte is ignored
        assert_eq!(rgb_from_u32(0xAB12_3456), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn test_rgb_to_u32() {
        assert_eq!(rgb_to_u32(MAGENTA), 0x00FF_00FF);
        assert_eq!(rgb_to_u32(BLACK), 0);
        assert_eq!(rgb_to_u32(rgb_from_u32(0xFF12_3456)), 0x0012_3456);
    }

    #[test]
    fn test_scale_color_endpoints() {
        assert_eq!(scale_color(MAGENTA, ms(100), ms(100), ms(1100)), BLACK);
        assert_eq!(scale_color(MAGENTA, ms(1100), ms(100), ms(1100)), MAGENTA);
        assert_eq!(scale_color(AMBER, ms(1100), ms(100), ms(1100)), AMBER);
    }

    #[test]
    fn test_scale_color_midpoint() {
        let half = scale_color(MAGENTA, ms(500), ms(0), ms(1000));
        assert!((120..=128).contains(&half.r), "red was {}", half.r);
        assert!((120..=128).contains(&half.b), "blue was {}", half.b);
        assert_eq!(half.g, 0);
    }

    #[test]
    fn test_scale_color_clamps_outside_window() {
        assert_eq!(scale_color(AMBER, ms(50), ms(100), ms(200)), BLACK);
        assert_eq!(scale_color(AMBER, ms(5000), ms(100), ms(200)), AMBER);
    }

    #[test]
    fn test_scale_color_reversed_window() {
        assert_eq!(scale_color(AMBER, ms(100), ms(200), ms(100)), AMBER);
        assert_eq!(scale_color(AMBER, ms(200), ms(200), ms(100)), BLACK);
    }

    #[test]
    fn test_scale_color_never_exceeds_input() {
        for t in (0..=1200).step_by(7) {
            let scaled = scale_color(AMBER, ms(t), ms(100), ms(1100));
            assert!(scaled.r <= AMBER.r);
            assert!(scaled.g <= AMBER.g);
            assert!(scaled.b <= AMBER.b);
        }
    }

    #[test]
    fn test_scale_color_empty_window() {
        assert_eq!(scale_color(AMBER, ms(10), ms(10), ms(10)), AMBER);
    }

    #[test]
    fn test_ramp_directions() {
        assert_eq!(Ramp::Up.apply(AMBER, ms(0), ms(0), ms(400)), BLACK);
        assert_eq!(Ramp::Up.apply(AMBER, ms(400), ms(0), ms(400)), AMBER);
        assert_eq!(Ramp::Down.apply(AMBER, ms(0), ms(0), ms(400)), AMBER);
        assert_eq!(Ramp::Down.apply(AMBER, ms(400), ms(0), ms(400)), BLACK);

        let rising = Ramp::Up.apply(AMBER, ms(100), ms(0), ms(400));
        let falling = Ramp::Down.apply(AMBER, ms(100), ms(0), ms(400));
        assert!(rising.r < falling.r);
    }
}
