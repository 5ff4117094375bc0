mod tests {
    use embassy_time::{Duration, Instant};
    use eyeblink_composer::{
        BLACK, EyeConfig, EyeState, FrameScheduler, OutputDriver, RandomRange, RenderingBounds,
        Rgb, Strip,
    };

    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    /// Always draws the lower bound
    struct MinRng;

    impl RandomRange for MinRng {
        fn random_range(&mut self, min: u32, _max: u32) -> u32 {
            min
        }
    }

    /// Always draws the upper bound
    struct MaxRng;

    impl RandomRange for MaxRng {
        fn random_range(&mut self, min: u32, max: u32) -> u32 {
            if max > min { max - 1 } else { min }
        }
    }

    #[derive(Default)]
    struct FrameLog {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for FrameLog {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    fn green_config(position: u16) -> EyeConfig {
        EyeConfig {
            position,
            separation: 2,
            color: GREEN,
            fade_in: Duration::from_millis(1000),
            blink_min: 1,
            blink_max: 1,
            ..EyeConfig::default()
        }
    }

    #[test]
    fn test_spawn_respects_capacity() {
        let strip = Strip::<10>::new();
        let mut scheduler = FrameScheduler::<_, _, 10, 2>::new(
            &strip,
            FrameLog::default(),
            MinRng,
            RenderingBounds::new(0, 10),
        );

        assert!(scheduler.spawn(green_config(0), ms(0)).is_ok());
        assert!(scheduler.spawn(green_config(4), ms(0)).is_ok());
        let rejected = scheduler.spawn(green_config(7), ms(0));
        assert_eq!(rejected.map_err(|config| config.position), Err(7));
        assert_eq!(scheduler.eyes().len(), 2);
    }

    #[test]
    fn test_tick_renders_and_flushes() {
        let strip = Strip::<6>::new();
        let mut scheduler = FrameScheduler::<_, _, 6, 4>::new(
            &strip,
            FrameLog::default(),
            MinRng,
            RenderingBounds::new(0, 6),
        );
        scheduler.spawn(green_config(1), ms(0)).unwrap();

        scheduler.tick(ms(0));
        scheduler.tick(ms(1));
        assert_eq!(scheduler.eyes()[0].state(), Some(EyeState::FadeIn));
        scheduler.tick(ms(1002));
        assert_eq!(scheduler.eyes()[0].state(), Some(EyeState::On));

        let frames = &scheduler.output().frames;
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], vec![BLACK; 6]);
        assert_eq!(frames[2], vec![BLACK, GREEN, BLACK, GREEN, BLACK, BLACK]);
    }

    #[test]
    fn test_frame_pacing() {
        let strip = Strip::<4>::new();
        let mut scheduler = FrameScheduler::<_, _, 4, 1>::with_frame_duration(
            &strip,
            FrameLog::default(),
            MinRng,
            RenderingBounds::new(0, 4),
            Duration::from_millis(10),
        );

        let first = scheduler.tick(ms(0));
        assert_eq!(first.next_deadline, ms(10));
        assert_eq!(first.sleep_duration, Duration::from_millis(10));

        let on_time = scheduler.tick(ms(12));
        assert_eq!(on_time.next_deadline, ms(20));
        assert_eq!(on_time.sleep_duration, Duration::from_millis(8));

        // More than two frames behind: skip the backlog
        let late = scheduler.tick(ms(100));
        assert_eq!(late.next_deadline, ms(110));
        assert_eq!(late.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_spawn_random_stays_in_bounds() {
        let strip = Strip::<12>::new();
        let bounds = RenderingBounds::new(4, 10);

        let mut low = FrameScheduler::<_, _, 12, 1>::new(&strip, FrameLog::default(), MinRng, bounds);
        low.spawn_random(GREEN, 2, ms(0)).unwrap();
        assert_eq!(low.eyes()[0].position(), 4);

        let mut high = FrameScheduler::<_, _, 12, 1>::new(&strip, FrameLog::default(), MaxRng, bounds);
        high.spawn_random(GREEN, 2, ms(0)).unwrap();
        let eye = &high.eyes()[0];
        assert_eq!(eye.position(), 7);
        assert!(bounds.contains(eye.position() + u16::from(eye.separation())));
    }

    #[test]
    fn test_remove_blanks_pixels() {
        let strip = Strip::<6>::new();
        let mut scheduler = FrameScheduler::<_, _, 6, 2>::new(
            &strip,
            FrameLog::default(),
            MinRng,
            RenderingBounds::new(0, 6),
        );
        scheduler.spawn(green_config(1), ms(0)).unwrap();
        scheduler.tick(ms(1));
        scheduler.tick(ms(1002));
        assert_eq!(strip.pixel(1), Some(GREEN));

        assert!(!scheduler.remove(3));
        assert!(scheduler.remove(0));
        assert!(scheduler.eyes().is_empty());
        assert_eq!(strip.pixel(1), Some(BLACK));
        assert_eq!(strip.pixel(3), Some(BLACK));
    }
}
