mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{self, ErrorKind, OutputPin};
    use embedded_hal::pwm::{self, SetDutyCycle};
    use myrtio_pin_led::{DigitalPins, DualPwmLed, Gamma, HalError, Led, Polarity, PwmPins};

    #[derive(Debug, Default)]
    struct FakePin {
        high: Option<bool>,
    }

    impl digital::ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = Some(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = Some(true);
            Ok(())
        }
    }

    struct BrokenPin;

    impl digital::ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(ErrorKind::Other)
        }
    }

    #[derive(Debug)]
    struct FakePwm {
        duty: u16,
        max: u16,
    }

    impl FakePwm {
        fn new(max: u16) -> Self {
            Self { duty: 0, max }
        }
    }

    impl pwm::ErrorType for FakePwm {
        type Error = Infallible;
    }

    impl SetDutyCycle for FakePwm {
        fn max_duty_cycle(&self) -> u16 {
            self.max
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            self.duty = duty;
            Ok(())
        }
    }

    #[test]
    fn test_digital_pins_follow_polarity() {
        let mut pins = DigitalPins::new([FakePin::default(), FakePin::default()]);
        let mut high = Led::digital(0, Polarity::ActiveHigh);
        let mut low = Led::digital(1, Polarity::ActiveLow);

        high.begin(&mut pins).unwrap();
        low.begin(&mut pins).unwrap();
        high.set_byte_value(&mut pins, 200).unwrap();
        low.set_byte_value(&mut pins, 200).unwrap();

        let [high_pin, low_pin] = pins.release();
        assert_eq!(high_pin.high, Some(true));
        assert_eq!(low_pin.high, Some(false));
    }

    #[test]
    fn test_digital_pins_threshold_pwm_writes() {
        let mut pins = DigitalPins::new([FakePin::default()]);
        let mut led = Led::pwm(0, Polarity::ActiveHigh, Gamma::LINEAR);

        led.set_byte_value(&mut pins, 127).unwrap();
        let [pin] = pins.release();
        assert_eq!(pin.high, Some(false));

        let mut pins = DigitalPins::new([pin]);
        led.set_byte_value(&mut pins, 128).unwrap();
        let [pin] = pins.release();
        assert_eq!(pin.high, Some(true));
    }

    #[test]
    fn test_unknown_pin() {
        let mut pins = DigitalPins::new([FakePin::default()]);
        let led = Led::digital(3, Polarity::ActiveHigh);
        assert!(matches!(led.begin(&mut pins), Err(HalError::UnknownPin(3))));
    }

    #[test]
    fn test_pin_errors_are_propagated() {
        let mut pins = DigitalPins::new([BrokenPin]);
        let mut led = Led::digital(0, Polarity::ActiveHigh);
        assert!(matches!(
            led.set_value(&mut pins, 1.0),
            Err(HalError::Pin(ErrorKind::Other))
        ));
    }

    #[test]
    fn test_pwm_pins_scale_duty() {
        let mut pins = PwmPins::new([FakePwm::new(1000), FakePwm::new(1000)]);
        let mut pair = DualPwmLed::new(0, 1, Polarity::ActiveHigh, Gamma::LINEAR);

        pair.begin(&mut pins).unwrap();
        pair.set_bipolar_byte_value(&mut pins, 255).unwrap();
        let [first, second] = pins.release();
        assert_eq!(first.duty, 1000);
        assert_eq!(second.duty, 0);

        let mut pins = PwmPins::new([first, second]);
        pair.set_bipolar_byte_value(&mut pins, 128).unwrap();
        let [first, _] = pins.release();
        assert_eq!(first.duty, 501);
    }

    #[test]
    fn test_pwm_pins_digital_led() {
        let mut pins = PwmPins::new([FakePwm::new(4096)]);
        let mut led = Led::digital(0, Polarity::ActiveLow);

        led.begin(&mut pins).unwrap();
        let [channel] = pins.release();
        assert_eq!(channel.duty, 4096);

        let mut pins = PwmPins::new([channel]);
        led.set_value(&mut pins, 1.0).unwrap();
        let [channel] = pins.release();
        assert_eq!(channel.duty, 0);
    }
}
