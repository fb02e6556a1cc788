/// Pseudorandom number generator from the "Xorshift RNGs" paper by George Marsaglia.
///
/// Seeded explicitly so test arrays are reproducible between runs.
pub struct XorShift {
    state: u32,
}

impl XorShift {
    pub fn new(seed: u32) -> Self {
        // zero is a fixed point of xorshift
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut random = self.state;
        random ^= random << 13;
        random ^= random >> 17;
        random ^= random << 5;
        self.state = random;
        random
    }

    /// Values in `0 .. bound`.
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }

    pub fn array(&mut self, count: usize, bound: u32) -> Vec<i32> {
        (0 .. count).map(|_| self.below(bound) as i32).collect()
    }

    /// Values in `-bound .. bound`.
    pub fn signed_array(&mut self, count: usize, bound: u32) -> Vec<i32> {
        (0 .. count).map(|_| self.below(2 * bound) as i32 - bound as i32).collect()
    }
}

pub fn must_sorted<T: PartialOrd + std::fmt::Debug>(v: &[T]) {
    let res = v.iter().enumerate().skip(1).find(|(i, e)| *e < &v[i - 1]);
    if let Some((index, e)) = res {
        panic!("{:?} > {:?}. Index = {}", v[index - 1], e, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = XorShift::new(7);
        let mut b = XorShift::new(7);
        assert_eq!(a.array(32, 1000), b.array(32, 1000));
    }

    #[test]
    fn signed_array_in_bounds() {
        let mut rng = XorShift::new(3);
        assert!(rng.signed_array(500, 50).iter().all(|x| (-50 .. 50).contains(x)));
    }
}
