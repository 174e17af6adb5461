use super::{CARRY_BIT, MASK, MAX_VLQ_LEN};

/// Returns the number of bytes `n` occupies once encoded.
///
/// Zero still takes one byte.
pub fn encoded_len(n: u32) -> usize {
    let bits = (u32::BITS - n.leading_zeros()).max(1) as usize;
    (bits + 6) / 7
}

/// Returns the total encoded length of `values`.
pub fn encoded_len_all(values: &[u32]) -> usize {
    values.iter().map(|value| encoded_len(*value)).sum()
}

/// Appends the encoding of `n` to `buf`, returning the number of bytes written.
pub fn write_vlq(mut n: u32, buf: &mut Vec<u8>) -> usize {
    if n < 0x80 {
        buf.push(n as u8);
        return 1;
    }

    // groups come out least significant first, so fill from the back
    let mut vlq_buf = [0u8; MAX_VLQ_LEN];
    let mut index = MAX_VLQ_LEN;

    while n > 0 {
        index -= 1;
        vlq_buf[index] = (n as u8 & MASK) | CARRY_BIT;
        n >>= 7;
    }

    vlq_buf[MAX_VLQ_LEN - 1] &= MASK;
    buf.extend_from_slice(&vlq_buf[index..]);
    MAX_VLQ_LEN - index
}

/// Encodes every value in order. Values are delimited by their continuation
/// bits alone, so the output is a plain concatenation.
pub fn encode(values: &[u32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len_all(values));
    for value in values {
        write_vlq(*value, &mut buf);
    }
    buf
}
