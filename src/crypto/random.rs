//! Secure randomness helpers

use crate::error::{FairDiceError, Result};
use crate::types::Bit;
use rand::{CryptoRng, RngCore};

/// Draw one uniformly random bit
pub fn random_bit<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Bit> {
    let mut byte = [0u8; 1];
    rng.try_fill_bytes(&mut byte)
        .map_err(|e| FairDiceError::RandomnessUnavailable(e.to_string()))?;
    Ok(Bit::from_byte(byte[0]))
}

/// Draw an index uniformly from `0..len`, rejecting the biased tail of the u64 range
pub fn random_index<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(FairDiceError::InvalidSelection(
            "cannot pick from an empty list".to_string(),
        ));
    }

    let bound = len as u64;
    let zone = u64::MAX - (u64::MAX % bound);
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| FairDiceError::RandomnessUnavailable(e.to_string()))?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}
