//! Blocking delay abstraction
//!
//! Bit-banged protocols need delays accurate to the microsecond. An
//! implementation must busy-wait: yielding to a scheduler would let the
//! pad's shift register run ahead of the sampling loop.

/// Microsecond busy-wait
pub trait DelayUs {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

impl<T: DelayUs + ?Sized> DelayUs for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tally {
        total_us: u64,
    }

    impl DelayUs for Tally {
        fn delay_us(&mut self, us: u32) {
            self.total_us += us as u64;
        }
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn pulse<D: DelayUs>(mut delay: D) {
            delay.delay_us(12);
        }

        let mut tally = Tally { total_us: 0 };
        pulse(&mut tally);
        pulse(&mut tally);
        assert_eq!(tally.total_us, 24);
    }
}
