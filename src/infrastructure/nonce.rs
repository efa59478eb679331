//! Form nonces: short HMAC tokens tying a submission to a rendered form
//!
//! A token is valid for the tick it was issued in and the following one,
//! where a tick lasts half the configured lifetime.

use std::fmt::Debug;

use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Hex characters kept from the MAC
const TOKEN_HEX_LEN: usize = 20;

/// Issues and checks form nonces
pub trait NonceService: Send + Sync + Debug {
    /// Issue a token for `action`
    fn create(&self, action: &str) -> String;

    /// Check a submitted token against `action`
    fn verify(&self, token: &str, action: &str) -> bool;
}

/// HMAC-SHA256 nonce service
#[derive(Clone)]
pub struct HmacNonceService {
    secret: Vec<u8>,
    tick_secs: i64,
}

impl Debug for HmacNonceService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacNonceService")
            .field("secret", &"[REDACTED]")
            .field("tick_secs", &self.tick_secs)
            .finish()
    }
}

impl HmacNonceService {
    pub fn new(secret: impl Into<Vec<u8>>, lifetime_secs: u64) -> Self {
        let tick_secs = i64::try_from(lifetime_secs / 2).unwrap_or(i64::MAX).max(1);

        Self {
            secret: secret.into(),
            tick_secs,
        }
    }

    /// Build a service with a random per-process secret
    pub fn with_random_secret(lifetime_secs: u64) -> Self {
        let mut secret = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self::new(secret.to_vec(), lifetime_secs)
    }

    fn tick(&self, now: i64) -> i64 {
        now.div_euclid(self.tick_secs) + 1
    }

    fn mac(&self, tick: i64, action: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(format!("{}|{}", tick, action).as_bytes());
        mac
    }

    pub fn create_at(&self, action: &str, now: i64) -> String {
        let tag = self.mac(self.tick(now), action).finalize().into_bytes();
        let mut token = hex::encode(tag);
        token.truncate(TOKEN_HEX_LEN);
        token
    }

    pub fn verify_at(&self, token: &str, action: &str, now: i64) -> bool {
        if token.len() != TOKEN_HEX_LEN {
            return false;
        }

        let Ok(submitted) = hex::decode(token) else {
            return false;
        };

        let tick = self.tick(now);

        [tick, tick - 1].into_iter().any(|candidate| {
            self.mac(candidate, action)
                .verify_truncated_left(&submitted)
                .is_ok()
        })
    }
}

impl NonceService for HmacNonceService {
    fn create(&self, action: &str) -> String {
        self.create_at(action, Utc::now().timestamp())
    }

    fn verify(&self, token: &str, action: &str) -> bool {
        self.verify_at(token, action, Utc::now().timestamp())
    }
}
