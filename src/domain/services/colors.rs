use std::collections::{HashMap, HashSet};
use rand::Rng;
use sha2::{Digest, Sha256};
use crate::domain::models::schedule::{ColorMode, ColorTag, PALETTE};
use crate::domain::models::session::Session;

/// Colours handed out during one regeneration pass. Once every palette
/// entry has been used the set starts over.
#[derive(Debug, Default, Clone)]
pub struct ColorPass {
    used: HashSet<ColorTag>,
}

impl ColorPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, tag: ColorTag) -> bool {
        self.used.contains(&tag)
    }

    fn mark(&mut self, tag: ColorTag) {
        self.used.insert(tag);
        if self.used.len() >= PALETTE.len() {
            self.used.clear();
        }
    }
}

const MAX_DRAWS: usize = PALETTE.len() * 2;

pub fn assign_colors(sessions: &[Session], mode: ColorMode, pass: &mut ColorPass) -> HashMap<String, ColorTag> {
    match mode {
        ColorMode::Stable => assign_stable(sessions, pass),
        ColorMode::Random => assign_random(sessions, &mut rand::thread_rng(), pass),
    }
}

/// Rejection sampling over the palette. After `MAX_DRAWS` misses the first
/// unused palette entry is taken instead.
pub fn assign_random<R: Rng>(sessions: &[Session], rng: &mut R, pass: &mut ColorPass) -> HashMap<String, ColorTag> {
    let mut colors = HashMap::with_capacity(sessions.len());

    for session in sessions {
        if colors.contains_key(&session.session_id) {
            continue;
        }

        let drawn = (0..MAX_DRAWS)
            .map(|_| PALETTE[rng.gen_range(0..PALETTE.len())])
            .find(|tag| !pass.is_used(*tag));
        let tag = drawn
            .or_else(|| PALETTE.iter().copied().find(|tag| !pass.is_used(*tag)))
            .unwrap_or(PALETTE[0]);

        pass.mark(tag);
        colors.insert(session.session_id.clone(), tag);
    }

    colors
}

/// Deterministic variant: the preferred colour comes from a hash of the
/// session id, probing forward through the palette on collision.
pub fn assign_stable(sessions: &[Session], pass: &mut ColorPass) -> HashMap<String, ColorTag> {
    let mut colors = HashMap::with_capacity(sessions.len());

    for session in sessions {
        if colors.contains_key(&session.session_id) {
            continue;
        }

        let preferred = preferred_index(&session.session_id);
        let tag = (0..PALETTE.len())
            .map(|offset| PALETTE[(preferred + offset) % PALETTE.len()])
            .find(|tag| !pass.is_used(*tag))
            .unwrap_or(PALETTE[preferred]);

        pass.mark(tag);
        colors.insert(session.session_id.clone(), tag);
    }

    colors
}

fn preferred_index(session_id: &str) -> usize {
    let mut hasher = Sha256::new();
    hasher.update(session_id.as_bytes());
    let digest = hasher.finalize();

    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(prefix) % PALETTE.len() as u64) as usize
}
