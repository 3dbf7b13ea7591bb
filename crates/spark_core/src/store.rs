//! Unordered storage for live particles

use crate::particle::Particle;

/// Live particles, in no meaningful order.
///
/// Removal goes through `Vec::retain_mut`, which visits every element
/// exactly once and compacts survivors in place.
#[derive(Debug, Default, Clone)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            particles: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Apply `update` to every particle and keep those for which it
    /// returns `true`. Returns how many were dropped.
    pub fn update_retain<F>(&mut self, mut update: F) -> usize
    where
        F: FnMut(&mut Particle) -> bool,
    {
        let before = self.particles.len();
        self.particles.retain_mut(|p| update(p));
        before - self.particles.len()
    }

    /// Remove every dead particle. Running it twice is the same as once.
    pub fn cull(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(Particle::is_alive);
        before - self.particles.len()
    }
}

impl Extend<Particle> for ParticleStore {
    fn extend<I: IntoIterator<Item = Particle>>(&mut self, iter: I) {
        self.particles.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ParticleStore {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
