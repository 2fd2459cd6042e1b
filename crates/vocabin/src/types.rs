//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{VBResult, VocabinError};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max rank in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert a rank to a token, failing if the vocabulary overflows `T`.
pub fn rank_to_token<T: TokenType>(
    rank: usize,
    vocab_size: usize,
) -> VBResult<T> {
    T::from_usize(rank).ok_or(VocabinError::VocabSizeOverflow { size: vocab_size })
}

/// Widen a token for error reporting.
pub fn token_to_u64<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type VBHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VBHashMap<K, V> {
            VBHashMap::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type VBHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> VBHashMap<K, V> {
            VBHashMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_rank_to_token() {
        assert_eq!(rank_to_token::<u8>(255, 256).unwrap(), 255u8);

        match rank_to_token::<u8>(256, 257) {
            Err(VocabinError::VocabSizeOverflow { size }) => assert_eq!(size, 257),
            other => panic!("unexpected: {other:?}"),
        }

        assert_eq!(token_to_u64(7u16), 7);
    }
}
