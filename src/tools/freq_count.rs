use rayon::prelude::*;

/// Dense byte histogram, index = byte value.
pub type Freqs = [u64; 256];

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Freqs {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || [0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || [0_u64; 256],
                |mut s, f| {
                    s.iter_mut().zip(f.iter()).for_each(|(a, b)| *a += b);
                    s
                },
            )
    } else {
        let mut freqs = [0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}

#[cfg(test)]
mod test {
    use super::freqs;

    #[test]
    fn small_count_test() {
        let f = freqs(b"AAABBC");
        assert_eq!(f[b'A' as usize], 3);
        assert_eq!(f[b'B' as usize], 2);
        assert_eq!(f[b'C' as usize], 1);
        assert_eq!(f.iter().sum::<u64>(), 6);
    }

    #[test]
    fn parallel_count_matches_sequential_test() {
        let data: Vec<u8> = (0..200_000_u32).map(|i| (i * 7 % 251) as u8).collect();
        let f = freqs(&data);
        let mut expected = [0_u64; 256];
        data.iter().for_each(|&b| expected[b as usize] += 1);
        assert_eq!(f, expected);
        assert_eq!(f.iter().sum::<u64>(), data.len() as u64);
    }
}
