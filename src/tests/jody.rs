use std::hash::{BuildHasher, Hasher};

use crate::jody::{BuildJodyHasher, JODY_CONSTANT, JodyHasher, combine, jody_step};

#[test]
fn fresh_state_is_zero() {
    let h = JodyHasher::new();
    assert_eq!(h.state(), 0);
    assert_eq!(h.finalize(), 0);
    assert_eq!(JodyHasher::default(), h);
}

#[test]
fn mix_constant() {
    assert_eq!(JODY_CONSTANT, 0x1F3D_5B79);
}

/// s = 0, x = 0: ((K rotl 14) rotl 14) ⊕ K = (K << 28) ⊕ K.
#[test]
fn known_vectors() {
    assert_eq!(jody_step(0, 0), 0x01F3_D5B7_8F3D_5B79);
    assert_eq!(combine([1, 2]), 0x7DE7_A76F_4F22_E624);
    assert_eq!(combine([2, 1]), 0x7CE7_B36F_4F22_2623);
}

#[test]
fn finalize_is_not_destructive() {
    let h = JodyHasher::new().with(10).with(20);
    assert_eq!(h.finalize(), h.finalize());
    assert_eq!(h.state(), h.finalize());
}

#[test]
fn deterministic() {
    let digests = [0xAAAA, 0, u64::MAX, 42];
    assert_eq!(combine(digests), combine(digests));
}

#[test]
fn order_sensitive() {
    let a = 0x1234_u64;
    let b = 0x5678_u64;
    assert_ne!(combine([a, b]), combine([b, a]));
}

/// Length is significant: absorbing a zero digest still moves the state.
#[test]
fn zero_digest_moves_state() {
    assert_ne!(JodyHasher::new().finalize(), combine([0]));
    assert_ne!(combine([0]), combine([0, 0]));
}

#[test]
fn single_bit_flip_changes_output() {
    let base = combine([0x1234, 0x9999]);
    for bit in 0..64 {
        assert_ne!(base, combine([0x1234 ^ (1 << bit), 0x9999]), "bit {bit}");
        assert_ne!(base, combine([0x1234, 0x9999 ^ (1 << bit)]), "bit {bit}");
    }
}

#[test]
fn absorb_and_with_agree() {
    let mut h = JodyHasher::new();
    h.absorb(3);
    h.absorb(4);
    assert_eq!(h, JodyHasher::new().with(3).with(4));
}

/// A copied state continues independently.
#[test]
fn fork_prefix() {
    let prefix = JodyHasher::new().with(1).with(2);
    let left = prefix.with(3);
    let right = prefix.with(4);
    assert_eq!(prefix.finalize(), combine([1, 2]));
    assert_eq!(left.finalize(), combine([1, 2, 3]));
    assert_eq!(right.finalize(), combine([1, 2, 4]));
}

#[test]
fn resume_from_state() {
    let prefix = JodyHasher::new().with(1).with(2);
    let resumed = JodyHasher::from_state(prefix.state()).with(3);
    assert_eq!(resumed.finalize(), combine([1, 2, 3]));
}

#[test]
fn iterator_traits() {
    let collected: JodyHasher = vec![5, 6, 7].into_iter().collect();
    let mut extended = JodyHasher::new();
    extended.extend([5, 6]);
    extended.extend([7]);
    assert_eq!(collected, extended);
    assert_eq!(collected.finalize(), combine([5, 6, 7]));
}

// ---------------------------------------------------------------------------
// Hasher adapter
// ---------------------------------------------------------------------------

#[test]
fn write_u64_absorbs_one_digest() {
    let mut h = JodyHasher::new();
    h.write_u64(99);
    assert_eq!(h.finish(), combine([99]));
}

#[test]
fn write_bytes_in_le_words() {
    let mut h = JodyHasher::new();
    h.write(&0x0102_0304_0506_0708_u64.to_le_bytes());
    assert_eq!(h.finish(), combine([0x0102_0304_0506_0708]));
}

#[test]
fn write_tail_is_zero_padded() {
    let mut h = JodyHasher::new();
    h.write(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(h.finish(), combine([0x0807_0605_0403_0201, 0x0A09]));

    let mut empty = JodyHasher::new();
    empty.write(&[]);
    assert_eq!(empty.finish(), 0);
}

/// Trailing zero bytes are indistinguishable from padding.
#[test]
fn byte_writes_are_not_length_delimited() {
    let mut short = JodyHasher::new();
    short.write(&[1]);
    let mut padded = JodyHasher::new();
    padded.write(&[1, 0]);
    assert_eq!(short.finish(), padded.finish());

    let mut word = JodyHasher::new();
    word.write(&[1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(short.finish(), word.finish());
}

#[test]
fn build_hasher() {
    assert_eq!(BuildJodyHasher.hash_one(5_u64), combine([5]));
    assert_eq!(BuildJodyHasher.build_hasher(), JodyHasher::new());
}

#[test]
fn debug_format() {
    let dbg = format!("{:?}", JodyHasher::new());
    assert!(dbg.contains("JodyHasher"));
    assert!(dbg.contains("state"));
}
