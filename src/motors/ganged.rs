// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Actuator combinators for axes driven by more than one motor.

use super::Actuator;

/// Two motors mechanically tied to one axis. Both always receive the identical command.
pub struct Ganged<A, B> {
    a: A,
    b: B,
}

impl<A: Actuator, B: Actuator> Ganged<A, B> {
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Tear down and return both motors.
    pub fn free(self) -> (A, B) {
        (self.a, self.b)
    }
}

impl<A: Actuator, B: Actuator> Actuator for Ganged<A, B> {
    fn set_power(&mut self, power: f32) {
        self.a.set_power(power);
        self.b.set_power(power);
    }
}

/// Motor mounted mirror-image to its partner; every command is negated on the way through.
pub struct Reversed<A>(pub A);

impl<A: Actuator> Actuator for Reversed<A> {
    #[inline]
    fn set_power(&mut self, power: f32) {
        self.0.set_power(-power);
    }
}
