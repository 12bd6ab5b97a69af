// Seeded permutation table backing the Perlin gradient hash.
// A shuffle of [0,256) duplicated into 512 entries, so chained
// lookups never need a modulo.
pub(crate) struct PermutationTable {
    table: [u8; 512],
}

impl PermutationTable {
    pub(crate) fn new(seed: u64) -> Self {
        let mut p: Vec<u8> = (0..256).map(|i| i as u8).collect();
        // Simple xorshift-based RNG for shuffling
        let mut x = seed ^ 0xDEADBEEFCAFEBABE_u64;
        let mut rng = || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x & 0xFF) as u8
        };
        // Fisher–Yates shuffle p[0..256]
        for i in (1..256).rev() {
            let j = (rng() as usize) % (i + 1);
            p.swap(i, j);
        }
        // Duplicate into an array of length 512
        let mut table = [0u8; 512];
        for i in 0..512 {
            table[i] = p[i & 255];
        }
        Self { table }
    }

    // One link of the corner hash chain: fold the wrapped lattice
    // coordinate into the running hash and look it up again. `hash`
    // must be a previous chain result (or 0), so the sum stays below
    // 511 and the duplicated upper half absorbs the overflow.
    #[inline]
    pub(crate) fn chain(&self, hash: usize, coord: i64) -> usize {
        self.table[hash + (coord & 255) as usize] as usize
    }
}

#[cfg(test)]
mod tests {
    use super::PermutationTable;

    #[test]
    fn table_is_a_permutation_of_0_to_255() {
        let t = PermutationTable::new(42);
        let mut seen = [false; 256];
        for i in 0..256 {
            seen[t.chain(0, i as i64)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_table() {
        let a = PermutationTable::new(7);
        let b = PermutationTable::new(7);
        for i in 0..512 {
            assert_eq!(a.chain(i & 255, i as i64), b.chain(i & 255, i as i64));
        }
    }

    #[test]
    fn chained_lookup_uses_the_duplicated_upper_half() {
        // When a chained hash pushes the index past 255, the lookup
        // lands in the duplicated half and must agree with the wrapped
        // index into the first half.
        let t = PermutationTable::new(42);
        for hash in [1usize, 100, 200, 255] {
            for coord in [1i64, 100, 200, 255] {
                let wrapped = (hash + coord as usize) & 255;
                assert_eq!(t.chain(hash, coord), t.chain(0, wrapped as i64));
            }
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = PermutationTable::new(1);
        let b = PermutationTable::new(2);
        let differs = (0..256).any(|i| a.chain(0, i) != b.chain(0, i));
        assert!(differs);
    }
}
