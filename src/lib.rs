use instant::Instant;
use winit::event_loop::EventLoopProxy;

use crate::units::Seconds;
use crate::wgpu::Wgpu;

pub mod application;
pub mod camera;
pub mod choreography;
pub mod cycle;
pub mod easing;
pub mod keyboard;
pub mod scene;
pub mod units;
pub mod wgpu;

#[derive(Debug, Clone)]
pub enum PlaybackAction {
    TogglePause,
    SpeedUp,
    SlowDown,
    Restart,
}

#[derive(Debug, Clone)]
pub enum SceneEvent {
    ContextCreated(Wgpu),
    Playback(PlaybackAction),
    Exit,
}

pub type Radio = EventLoopProxy<SceneEvent>;

impl SceneEvent {
    pub fn send(self, radio: &Radio) {
        radio.send_event(self).expect("radio working")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlState {
    Animating,
    Paused,
}

const MIN_SPEED: f32 = 0.125;
const MAX_SPEED: f32 = 8.0;

/// Wall clock for the animation, with pause and playback speed.
///
/// The clock is the only state the animation carries between frames; every
/// visual property is recomputed from the elapsed seconds it reports.
pub struct PlaybackClock {
    anchor: Instant,
    banked: f32,
    speed: f32,
    paused: bool,
}

impl PlaybackClock {
    pub fn new(speed: f32, paused: bool) -> Self {
        Self {
            anchor: Instant::now(),
            banked: 0.0,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            paused,
        }
    }

    pub fn elapsed(&self) -> Seconds {
        let running = if self.paused {
            0.0
        } else {
            self.anchor.elapsed().as_secs_f32() * self.speed
        };
        Seconds(self.banked + running)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Returns true when the clock is paused afterwards.
    pub fn toggle_pause(&mut self) -> bool {
        self.bank();
        self.paused = !self.paused;
        self.paused
    }

    pub fn scale_speed(&mut self, factor: f32) {
        self.bank();
        self.speed = (self.speed * factor).clamp(MIN_SPEED, MAX_SPEED);
    }

    pub fn restart(&mut self) {
        self.banked = 0.0;
        self.anchor = Instant::now();
    }

    // Fold the running interval into the bank so speed and pause changes
    // never rewind what has already elapsed
    fn bank(&mut self) {
        self.banked = *self.elapsed();
        self.anchor = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paused_clock_stands_still() {
        let clock = PlaybackClock::new(1.0, true);
        assert_eq!(*clock.elapsed(), 0.0);
    }

    #[test]
    fn test_restart_rewinds_to_zero() {
        let mut clock = PlaybackClock::new(1.0, true);
        clock.restart();
        assert_eq!(*clock.elapsed(), 0.0);
    }

    #[test]
    fn test_speed_stays_in_bounds() {
        let mut clock = PlaybackClock::new(1.0, true);
        for _ in 0..50 {
            clock.scale_speed(2.0);
        }
        assert_eq!(clock.speed(), MAX_SPEED);
        for _ in 0..50 {
            clock.scale_speed(0.5);
        }
        assert_eq!(clock.speed(), MIN_SPEED);
    }
}
