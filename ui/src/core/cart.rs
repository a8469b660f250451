//! Session-local add-to-cart counter. Not a real cart: it remembers how many
//! times something was added, not what.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartCounter(u32);

impl CartCounter {
    pub fn new() -> Self {
        Self(0)
    }

    /// Record one add-to-cart interaction.
    pub fn add_item(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn count(self) -> u32 {
        self.0
    }

    /// Badge value for the cart icon; `None` hides the badge.
    pub fn badge(self) -> Option<u32> {
        (self.0 > 0).then_some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_without_badge() {
        let cart = CartCounter::new();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.badge(), None);
    }

    #[test]
    fn each_add_increments_by_one() {
        let mut cart = CartCounter::new();
        for expected in 1..=7 {
            let before = cart.count();
            cart.add_item();
            assert_eq!(cart.count(), expected);
            assert!(cart.count() > before);
        }
        assert_eq!(cart.badge(), Some(7));
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let mut cart = CartCounter(u32::MAX);
        cart.add_item();
        assert_eq!(cart.count(), u32::MAX);
    }
}
