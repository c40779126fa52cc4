//! Diagnostic counters observing the matching algorithm's job outcomes.
//!
//! Match jobs run on the matcher's worker threads and report through
//! `&MatchStats`, so every field is its own atomic. No cross-field
//! transaction exists: a reader may briefly see a new maximum next to the
//! previous record's material. Stats are diagnostic, never authority.

use bevy::prelude::*;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use crate::materials::TransferMaterial;

/// Sentinel for "no material recorded yet" in the atomic material slots.
const NO_MATERIAL: u32 = u32::MAX;

/// One completed match job, reported once and not retained.
#[derive(Debug, Clone, Copy)]
pub struct MatchJobObservation {
    pub material: TransferMaterial,
    pub duration_ms: u64,
    pub incoming_count: u32,
    pub outgoing_count: u32,
}

/// Process-lifetime aggregates over all match jobs. Monotonic; never rolled
/// back.
#[derive(Resource, Debug)]
pub struct MatchStats {
    total_jobs: AtomicU64,
    total_time_ms: AtomicU64,
    longest_ms: AtomicU64,
    longest_material: AtomicU32,
    largest_key: AtomicU32,
    largest_incoming: AtomicU32,
    largest_outgoing: AtomicU32,
    largest_material: AtomicU32,
}

impl Default for MatchStats {
    fn default() -> Self {
        Self {
            total_jobs: AtomicU64::new(0),
            total_time_ms: AtomicU64::new(0),
            longest_ms: AtomicU64::new(0),
            longest_material: AtomicU32::new(NO_MATERIAL),
            largest_key: AtomicU32::new(0),
            largest_incoming: AtomicU32::new(0),
            largest_outgoing: AtomicU32::new(0),
            largest_material: AtomicU32::new(NO_MATERIAL),
        }
    }
}

impl MatchStats {
    /// Fold one job into the aggregates.
    ///
    /// Maxima replace under strict greater-than only, so ties keep the
    /// earlier record. The largest-match key is `min(incoming, outgoing)` —
    /// the number of pairs the job could have produced at most.
    pub fn record(&self, observation: &MatchJobObservation) {
        self.total_jobs.fetch_add(1, Ordering::Relaxed);
        self.total_time_ms
            .fetch_add(observation.duration_ms, Ordering::Relaxed);

        let mut longest = self.longest_ms.load(Ordering::Relaxed);
        while observation.duration_ms > longest {
            match self.longest_ms.compare_exchange_weak(
                longest,
                observation.duration_ms,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    self.longest_material
                        .store(observation.material.as_raw() as u32, Ordering::Relaxed);
                    break;
                }
                Err(current) => longest = current,
            }
        }

        let key = observation.incoming_count.min(observation.outgoing_count);
        let mut largest = self.largest_key.load(Ordering::Relaxed);
        while key > largest {
            match self.largest_key.compare_exchange_weak(
                largest,
                key,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    self.largest_incoming
                        .store(observation.incoming_count, Ordering::Relaxed);
                    self.largest_outgoing
                        .store(observation.outgoing_count, Ordering::Relaxed);
                    self.largest_material
                        .store(observation.material.as_raw() as u32, Ordering::Relaxed);
                    break;
                }
                Err(current) => largest = current,
            }
        }
    }

    pub fn total_jobs(&self) -> u64 {
        self.total_jobs.load(Ordering::Relaxed)
    }

    pub fn total_time_ms(&self) -> u64 {
        self.total_time_ms.load(Ordering::Relaxed)
    }

    /// Mean job duration in milliseconds; `0.0` before the first job.
    pub fn average_duration_ms(&self) -> f64 {
        let jobs = self.total_jobs();
        if jobs == 0 {
            return 0.0;
        }
        self.total_time_ms() as f64 / jobs as f64
    }

    /// Duration and material of the slowest job seen so far.
    pub fn longest_match(&self) -> Option<(u64, TransferMaterial)> {
        let material = decode_material(self.longest_material.load(Ordering::Relaxed))?;
        Some((self.longest_ms.load(Ordering::Relaxed), material))
    }

    /// Incoming count, outgoing count, and material of the largest job seen
    /// so far.
    pub fn largest_match(&self) -> Option<(u32, u32, TransferMaterial)> {
        let material = decode_material(self.largest_material.load(Ordering::Relaxed))?;
        Some((
            self.largest_incoming.load(Ordering::Relaxed),
            self.largest_outgoing.load(Ordering::Relaxed),
            material,
        ))
    }
}

fn decode_material(raw: u32) -> Option<TransferMaterial> {
    if raw == NO_MATERIAL {
        return None;
    }
    TransferMaterial::from_raw(raw as u8)
}

pub struct MatchStatsPlugin;

impl Plugin for MatchStatsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MatchStats>();
    }
}
