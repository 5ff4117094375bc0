mod tests {
    use eyeblink_composer::math8::{map8, scale8_trunc};

    #[test]
    fn test_scale8_trunc() {
        assert_eq!(scale8_trunc(255, 255), 255);
        assert_eq!(scale8_trunc(255, 0), 0);
        assert_eq!(scale8_trunc(255, 127), 127);
        assert_eq!(scale8_trunc(100, 128), 50);
        assert_eq!(scale8_trunc(0, 200), 0);
    }

    #[test]
    fn test_map8() {
        assert_eq!(map8(0, 0, 1000), 0);
        assert_eq!(map8(500, 0, 1000), 127);
        assert_eq!(map8(1000, 0, 1000), 255);
        assert_eq!(map8(2000, 0, 1000), 255);
        assert_eq!(map8(10, 100, 1000), 0);
    }

    #[test]
    fn test_map8_inverted() {
        assert_eq!(map8(0, 1000, 0), 255);
        assert_eq!(map8(500, 1000, 0), 127);
        assert_eq!(map8(1000, 1000, 0), 0);
        assert_eq!(map8(1500, 1000, 0), 0);
    }

    #[test]
    fn test_map8_empty_window() {
        assert_eq!(map8(5, 7, 7), 255);
    }
}
