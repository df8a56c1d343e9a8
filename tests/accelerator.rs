mod tests {
    use myrtio_pin_led::AcceleratingValue;

    #[test]
    fn test_accelerate_is_quadratic() {
        let mut value = AcceleratingValue::new(0.5);
        for n in 1..=20u32 {
            let returned = value.accelerate();
            let expected = 0.5 * f64::from(n * (n + 1)) / 2.0;
            assert_eq!(returned, expected, "step {n}");
            assert_eq!(value.value(), expected);
            assert_eq!(value.acceleration(), 0.5 * f64::from(n));
        }
    }

    #[test]
    fn test_reset() {
        let mut value = AcceleratingValue::new(3.0);
        value.accelerate();
        value.accelerate();
        assert_eq!(value.value(), 9.0);

        value.reset();
        assert_eq!(value.value(), 0.0);
        assert_eq!(value.acceleration(), 0.0);
        assert_eq!(value.rate(), 3.0);
        assert_eq!(value.accelerate(), 3.0);
    }
}
