// ABOUTME: Session identifier and join code generation for video-call bookings
// ABOUTME: Produces collision-resistant base-36 session ids paired with 6-digit join codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitBro

//! Session identifier generator
//!
//! Generation is stateless and consults no external state: the identifier
//! space is large enough that collisions across concurrent bookings are
//! practically negligible, and uniqueness is enforced downstream by the
//! store's unique key on `session_id`. Callers retry on a store-level
//! collision (see [`crate::booking_service`]).

use rand::Rng;

/// Characters of a lowercase base-36 alphabet
const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of one session id fragment; two fragments are concatenated
const FRAGMENT_LEN: usize = 13;

/// Inclusive range of join codes, always rendering as 6 digits
const JOIN_CODE_MIN: u32 = 100_000;
const JOIN_CODE_MAX: u32 = 999_999;

/// A freshly generated (session id, join code) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCodes {
    /// Room key for the video-call session; 26 base-36 characters
    pub session_id: String,
    /// 6-digit numeric code for low-friction verbal/manual room entry
    pub join_code: String,
}

impl SessionCodes {
    /// Generate a new pair from thread-local randomness
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut session_id = String::with_capacity(FRAGMENT_LEN * 2);
        push_base36_fragment(&mut rng, &mut session_id);
        push_base36_fragment(&mut rng, &mut session_id);

        let join_code = rng.gen_range(JOIN_CODE_MIN..=JOIN_CODE_MAX).to_string();

        Self {
            session_id,
            join_code,
        }
    }
}

fn push_base36_fragment<R: Rng>(rng: &mut R, out: &mut String) {
    for _ in 0..FRAGMENT_LEN {
        let idx = rng.gen_range(0..BASE36_ALPHABET.len());
        out.push(char::from(BASE36_ALPHABET[idx]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn session_id_is_26_lowercase_base36_chars() {
        let codes = SessionCodes::generate();
        assert_eq!(codes.session_id.len(), 26);
        assert!(codes
            .session_id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn join_code_is_six_digits() {
        for _ in 0..100 {
            let codes = SessionCodes::generate();
            assert_eq!(codes.join_code.len(), 6);
            assert!(codes.join_code.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(codes.join_code.as_bytes()[0], b'0');
        }
    }

    #[test]
    fn generated_session_ids_do_not_repeat() {
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(SessionCodes::generate().session_id));
        }
    }
}
