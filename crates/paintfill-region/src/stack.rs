//! Seed stack
//!
//! The fill engine never recurses. Pending seeds live on an explicit,
//! growable LIFO stack, so the depth of the call stack stays constant no
//! matter how large the filled region is.

/// A pixel coordinate a fill or sub-fill starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedPoint {
    pub x: u32,
    pub y: u32,
}

impl SeedPoint {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for SeedPoint {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// LIFO queue of pending seed points.
#[derive(Debug, Default)]
pub struct SeedStack {
    seeds: Vec<SeedPoint>,
    high_water: usize,
}

impl SeedStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, seed: SeedPoint) {
        self.seeds.push(seed);
        self.high_water = self.high_water.max(self.seeds.len());
    }

    pub fn pop(&mut self) -> Option<SeedPoint> {
        self.seeds.pop()
    }

    /// Largest number of seeds held at once since creation.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = SeedStack::new();
        assert_eq!(stack.pop(), None);

        stack.push(SeedPoint::new(1, 1));
        stack.push(SeedPoint::new(2, 2));
        stack.push((3, 3).into());

        assert_eq!(stack.pop(), Some(SeedPoint::new(3, 3)));
        assert_eq!(stack.pop(), Some(SeedPoint::new(2, 2)));
        stack.push(SeedPoint::new(4, 4));
        assert_eq!(stack.pop(), Some(SeedPoint::new(4, 4)));
        assert_eq!(stack.pop(), Some(SeedPoint::new(1, 1)));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_high_water_survives_pops() {
        let mut stack = SeedStack::new();
        for i in 0..5 {
            stack.push(SeedPoint::new(i, 0));
        }
        while stack.pop().is_some() {}
        stack.push(SeedPoint::new(0, 0));
        assert_eq!(stack.high_water(), 5);
    }
}
