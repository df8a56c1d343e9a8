mod tests {
    use myrtio_pin_led::Gamma;

    #[test]
    fn test_gamma_new() {
        assert!(Gamma::new(2.2).is_some());
        assert!(Gamma::new(0.5).is_some());
        assert!(Gamma::new(0.0).is_none());
        assert!(Gamma::new(-1.0).is_none());
        assert!(Gamma::new(f64::NAN).is_none());
        assert!(Gamma::new(f64::INFINITY).is_none());
    }

    #[test]
    fn test_linear_gamma_is_identity() {
        for duty in 0..=255u8 {
            assert_eq!(Gamma::LINEAR.correct(duty), duty);
        }
    }

    #[test]
    fn test_standard_gamma() {
        assert_eq!(Gamma::default(), Gamma::STANDARD);
        assert_eq!(Gamma::STANDARD.correct(0), 0);
        assert_eq!(Gamma::STANDARD.correct(255), 255);
        assert_eq!(Gamma::STANDARD.correct(128), 56);
        assert_eq!(Gamma::STANDARD.correct(127), 55);
        assert_eq!(Gamma::STANDARD.correct(64), 12);
    }

    #[test]
    fn test_gamma_is_monotonic() {
        for exponent in [1.5, 2.2, 2.8, 0.45] {
            let gamma = Gamma::new(exponent).unwrap();
            let mut previous = gamma.correct(0);
            for duty in 1..=255u8 {
                let current = gamma.correct(duty);
                assert!(current >= previous, "gamma {exponent} at {duty}");
                previous = current;
            }
        }
    }
}
