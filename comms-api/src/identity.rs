/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Placeholder identities for clients that do not ask for one.

use rand::seq::SliceRandom;
use rand::Rng;

/// Produces an identity when the caller supplies none.
pub trait IdentityGenerator: Send + Sync {
    fn generate(&self) -> String;
}

const ADJECTIVES: &[&str] = &[
    "amber", "brave", "calm", "clever", "dusty", "eager", "fuzzy", "gentle", "happy", "jolly",
    "keen", "lucky", "mellow", "nimble", "quiet", "rapid", "shy", "sunny", "swift", "witty",
];

const NOUNS: &[&str] = &[
    "badger", "comet", "falcon", "ferret", "gecko", "heron", "koala", "lemur", "lynx", "marmot",
    "otter", "panda", "pigeon", "puffin", "raven", "salmon", "tiger", "walrus", "wombat", "yak",
];

/// Random human-readable usernames such as `"brave_otter42"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomUsername;

impl IdentityGenerator for RandomUsername {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES.choose(&mut rng).copied().unwrap_or("quiet");
        let noun = NOUNS.choose(&mut rng).copied().unwrap_or("otter");
        let suffix: u8 = rng.gen_range(10..100);
        format!("{adjective}_{noun}{suffix}")
    }
}

/// Always returns the same identity.
#[derive(Debug, Clone)]
pub struct FixedIdentity(pub String);

impl IdentityGenerator for FixedIdentity {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
