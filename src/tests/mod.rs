use super::*;

// Shared test helpers
fn lcg_sizes(seed: u64, len: usize) -> Vec<usize> {
    let mut state = seed;
    let mut sizes = Vec::new();
    let mut total = 0usize;
    while total < len {
        // LCG: constants from Knuth's MMIX
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // chunk size in [1..8]
        let mut n = ((state >> 33) as usize % 8) + 1;
        if total + n > len {
            n = len - total;
        }
        sizes.push(n);
        total += n;
    }
    sizes
}

fn chunk_by_char(s: &str, sizes: &[usize]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut iter = s.chars().peekable();
    let mut sizes = sizes.iter().copied().cycle();
    while iter.peek().is_some() {
        let n = sizes.next().unwrap_or(1).max(1);
        let chunk: String = iter.by_ref().take(n).collect();
        chunks.push(chunk);
    }
    chunks
}

mod pipeline;
mod statements;
