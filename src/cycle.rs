//! The phase cycle engine: maps elapsed time to `(phase, progress)`.
//!
//! One cycle is an ordered sequence of fixed-duration phases that repeats
//! forever on a wall-clock modulus. Phase state is never stored; it is
//! derived at read time from the elapsed time the caller supplies, so the
//! whole engine is a pure function of `(time, table)`.

use strum::{Display, EnumIter};

use crate::units::Seconds;

/// One named interval of the immune response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Phase {
    /// T-cells patrol, the tumour pulses normally
    Scout,
    /// T-cells tighten orbit toward the tumour
    Approach,
    /// T-cells dock: the immunological synapse
    Contact,
    /// Tumour shrinks and darkens, T-cells begin to pull back
    Damage,
    /// Tumour collapses and fragments scatter
    Death,
    /// Fragments fade, the tumour reforms
    Reset,
}

/// Derived position within the cycle: which phase, and how far through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleState {
    pub phase: Phase,
    /// Normalized progress within the phase, always in [0, 1].
    pub progress: f32,
}

#[derive(Debug, Clone, Copy)]
struct PhaseSpan {
    phase: Phase,
    duration: f32,
    offset: f32,
}

/// Ordered phase table with precomputed cumulative offsets.
#[derive(Debug, Clone)]
pub struct PhaseTable {
    spans: Vec<PhaseSpan>,
    cycle_length: Seconds,
}

impl PhaseTable {
    pub fn new(phases: impl IntoIterator<Item = (Phase, Seconds)>) -> Self {
        let mut spans = Vec::new();
        let mut offset = 0.0;
        for (phase, duration) in phases {
            spans.push(PhaseSpan {
                phase,
                duration: *duration,
                offset,
            });
            offset += *duration;
        }
        assert!(!spans.is_empty(), "a cycle needs at least one phase");
        Self {
            spans,
            cycle_length: Seconds(offset),
        }
    }

    /// The six-phase cytotoxic response cycle, 17 seconds per loop.
    pub fn immune_response() -> Self {
        Self::new([
            (Phase::Scout, Seconds(4.5)),
            (Phase::Approach, Seconds(3.0)),
            (Phase::Contact, Seconds(2.0)),
            (Phase::Damage, Seconds(3.0)),
            (Phase::Death, Seconds(2.5)),
            (Phase::Reset, Seconds(2.0)),
        ])
    }

    pub fn cycle_length(&self) -> Seconds {
        self.cycle_length
    }

    /// Derive `(phase, progress)` for any elapsed time.
    ///
    /// Wraps on the cycle length, then scans the cumulative offsets. If the
    /// wrapped time lands exactly on the cycle length (a floating-point
    /// boundary the scan cannot claim), the cycle has just restarted: the
    /// answer is the first phase at progress zero.
    pub fn state_at(&self, elapsed: Seconds) -> CycleState {
        let wrapped = *(elapsed % self.cycle_length);
        for span in &self.spans {
            if wrapped < span.offset + span.duration {
                return CycleState {
                    phase: span.phase,
                    progress: (wrapped - span.offset) / span.duration,
                };
            }
        }
        CycleState {
            phase: self.spans[0].phase,
            progress: 0.0,
        }
    }

    /// Normalized progress across a contiguous run of phases, from the start
    /// of `from` to the end of `to`. Clamped to [0, 1], so a caller holding a
    /// time outside the span still gets a finite endpoint value. Used when a
    /// single visual gesture spans more than one phase and must stay
    /// continuous across the interior boundary.
    pub fn span_progress(&self, from: Phase, to: Phase, elapsed: Seconds) -> f32 {
        let start = self.span(from).offset;
        let end_span = self.span(to);
        let end = end_span.offset + end_span.duration;
        debug_assert!(end > start, "span must run forward through the cycle");
        let wrapped = *(elapsed % self.cycle_length);
        ((wrapped - start) / (end - start)).clamp(0.0, 1.0)
    }

    /// Absolute offset of a phase within the cycle.
    pub fn offset_of(&self, phase: Phase) -> Seconds {
        Seconds(self.span(phase).offset)
    }

    pub fn duration_of(&self, phase: Phase) -> Seconds {
        Seconds(self.span(phase).duration)
    }

    fn span(&self, phase: Phase) -> &PhaseSpan {
        self.spans
            .iter()
            .find(|span| span.phase == phase)
            .expect("phase not in table")
    }
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self::immune_response()
    }
}
