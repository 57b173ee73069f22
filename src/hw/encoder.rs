// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Quadrature encoder inputs via STM32F7 timers in encoder mode.
//!
//! TIM2 counts over the full 32-bit range, TIM3 over 16 bits. Both report a signed count through
//! [`crate::motors::Encoder`], so either can feed a steering controller or a lift side.

use stm32f7xx_hal::pac;

use crate::motors::Encoder;

/// A general-purpose timer configured as a quadrature decoder.
pub struct TimerEncoder<TIM> {
    tim: TIM,
    inverted: bool,
}

impl<TIM> TimerEncoder<TIM> {
    /// Count the other way, for an encoder mounted facing the opposite direction.
    pub fn inverted(mut self) -> Self {
        self.inverted = !self.inverted;
        self
    }

    /// Consume the wrapper and return the underlying timer peripheral.
    #[inline]
    pub fn free(self) -> TIM {
        self.tim
    }
}

macro_rules! timer_encoder {
    ($TIM:ident, $ctor:ident, $arr:expr, $signed:ty) => {
        impl TimerEncoder<pac::$TIM> {
            /// Configure the timer in encoder mode 3 and start counting from zero.
            #[allow(unused_unsafe)]
            pub fn $ctor(tim: pac::$TIM) -> Self {
                tim.cr1.modify(|_, w| w.cen().clear_bit());
                tim.arr.write(|w| unsafe { w.bits($arr) });

                // Count on both TI1 and TI2 edges.
                tim.smcr.modify(|_, w| w.sms().bits(0b011));
                tim.ccmr1_input().modify(|_, w| w.cc1s().ti1().cc2s().ti2());
                tim.ccer.modify(|_, w| {
                    w.cc1p()
                        .clear_bit()
                        .cc2p()
                        .clear_bit()
                        .cc1e()
                        .set_bit()
                        .cc2e()
                        .set_bit()
                });

                tim.cnt.write(|w| unsafe { w.bits(0) });
                tim.cr1.modify(|_, w| w.cen().set_bit());

                Self {
                    tim,
                    inverted: false,
                }
            }

            /// Zero the count at the current shaft position.
            #[allow(unused_unsafe)]
            #[inline]
            pub fn reset(&mut self) {
                self.tim.cnt.write(|w| unsafe { w.bits(0) });
            }
        }

        impl Encoder for TimerEncoder<pac::$TIM> {
            #[inline]
            fn count(&self) -> i32 {
                // Sign-extend from the counter width so wrap-around below zero reads negative.
                let raw = i32::from(self.tim.cnt.read().cnt().bits() as $signed);
                if self.inverted {
                    raw.wrapping_neg()
                } else {
                    raw
                }
            }
        }
    };
}

timer_encoder!(TIM2, tim2, 0xFFFF_FFFF, i32);
timer_encoder!(TIM3, tim3, 0xFFFF, i16);
