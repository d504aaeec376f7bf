//! Pseudo-physics for the wheel and ball.
//!
//! The winning number is fixed before a spin starts; the animation only has to
//! land the ball on it. All random parameters for a spin are drawn once into a
//! [`SpinProfile`] and never redrawn, so repeated renders of the same spin
//! follow the same path. Time is fed in through [`WheelAnimation::tick`].

use std::time::Duration;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::pockets::pocket_angle;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum WheelPhase {
    Idle,
    Spinning,
    Bouncing,
    Settled,
}

/// An angular kick applied `at` seconds into the bouncing phase.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Bounce {
    pub at: f64,
    pub kick: f64,
}

/// Cosmetic parameters for one spin.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinProfile {
    pub wheel_speed: f64,
    pub ball_speed: f64,
    pub bounces: Vec<Bounce>,
    pub settle_offset: f64,
}

impl SpinProfile {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let wheel_speed = rng.gen_range(WHEEL_SPEED_MIN..WHEEL_SPEED_MAX);
        let ball_speed = rng.gen_range(BALL_SPEED_MIN..BALL_SPEED_MAX);

        let mut bounces = Vec::new();
        let mut at = 0.0;
        while bounces.len() < MAX_BOUNCE_COUNT {
            at += rng.gen_range(BOUNCE_INTERVAL_MIN_SECS..BOUNCE_INTERVAL_MAX_SECS);
            if at >= BOUNCE_SECS {
                break;
            }
            bounces.push(Bounce {
                at,
                kick: rng.gen_range(-BOUNCE_KICK_DEGREES..BOUNCE_KICK_DEGREES),
            });
        }

        Self {
            wheel_speed,
            ball_speed,
            bounces,
            settle_offset: rng.gen_range(-SETTLE_OFFSET_DEGREES..SETTLE_OFFSET_DEGREES),
        }
    }
}

/// Upper bound on how long any spin takes from `start` to `SpinComplete`.
/// The slowest ball starts just under `BALL_SPEED_MAX`. Phase changes and the
/// caller's frames each land up to one step late, hence the slack.
pub fn longest_spin() -> Duration {
    let drop = ((BALL_SPEED_MAX - BALL_DROP_SPEED) / BALL_DECELERATION).max(MIN_SPIN_SECS);
    let secs = drop + BOUNCE_SECS + SETTLE_HOLD_SECS + 6.0 * MAX_STEP_SECS;
    Duration::from_millis((secs * 1000.0).ceil() as u64)
}

/// What the wheel looks like right now.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WheelAnimationState {
    pub phase: WheelPhase,
    pub wheel_rotation: f64,
    pub ball_angle: f64,
    pub ball_radius: f64,
    pub ball_speed: f64,
    pub bounce_count: u32,
}

impl Default for WheelAnimationState {
    fn default() -> Self {
        Self {
            phase: WheelPhase::Idle,
            wheel_rotation: 0.0,
            ball_angle: 0.0,
            ball_radius: OUTER_RADIUS,
            ball_speed: 0.0,
            bounce_count: 0,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    BallDropped,
    Settled { winning_number: u8 },
    SpinComplete { winning_number: u8 },
}

#[derive(Debug, Clone)]
struct ActiveSpin {
    winning_number: u8,
    profile: SpinProfile,
    elapsed: f64,
    phase_elapsed: f64,
    next_bounce: usize,
    completed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WheelAnimation {
    state: WheelAnimationState,
    spin: Option<ActiveSpin>,
}

impl WheelAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WheelAnimationState {
        &self.state
    }

    pub fn phase(&self) -> WheelPhase {
        self.state.phase
    }

    pub fn profile(&self) -> Option<&SpinProfile> {
        self.spin.as_ref().map(|spin| &spin.profile)
    }

    pub fn winning_number(&self) -> Option<u8> {
        self.spin.as_ref().map(|spin| spin.winning_number)
    }

    /// True while frames still change something or a completion is pending.
    pub fn is_animating(&self) -> bool {
        self.spin.as_ref().map_or(false, |spin| !spin.completed)
    }

    pub fn start<R: Rng + ?Sized>(&mut self, winning_number: u8, rng: &mut R) {
        self.start_with_profile(winning_number, SpinProfile::random(rng));
    }

    /// Begins a spin toward `winning_number`, replacing any spin in flight.
    pub fn start_with_profile(&mut self, winning_number: u8, profile: SpinProfile) {
        debug!(
            "wheel spin toward {} (wheel {:.2}, ball {:.2}, {} bounces)",
            winning_number,
            profile.wheel_speed,
            profile.ball_speed,
            profile.bounces.len()
        );
        self.state = WheelAnimationState {
            phase: WheelPhase::Spinning,
            wheel_rotation: self.state.wheel_rotation.rem_euclid(360.0),
            ball_angle: 0.0,
            ball_radius: OUTER_RADIUS,
            ball_speed: profile.ball_speed,
            bounce_count: 0,
        };
        self.spin = Some(ActiveSpin {
            winning_number,
            profile,
            elapsed: 0.0,
            phase_elapsed: 0.0,
            next_bounce: 0,
            completed: false,
        });
    }

    pub fn reset(&mut self) {
        let rotation = self.state.wheel_rotation.rem_euclid(360.0);
        self.state = WheelAnimationState {
            wheel_rotation: rotation,
            ..WheelAnimationState::default()
        };
        self.spin = None;
    }

    /// Advances the animation by `dt`. Long gaps are integrated in small steps,
    /// so several events can come out of one call.
    pub fn tick(&mut self, dt: Duration) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 && self.is_animating() {
            let step = remaining.min(MAX_STEP_SECS);
            if let Some(event) = self.step(step) {
                events.push(event);
            }
            remaining -= step;
        }
        events
    }

    fn step(&mut self, dt: f64) -> Option<AnimationEvent> {
        let spin = self.spin.as_mut()?;
        let state = &mut self.state;
        let frames = dt * FRAMES_PER_SECOND;

        spin.elapsed += dt;
        spin.phase_elapsed += dt;

        match state.phase {
            WheelPhase::Idle => None,
            WheelPhase::Spinning => {
                advance_wheel(state, &spin.profile, spin.elapsed, frames);

                let speed = (spin.profile.ball_speed - BALL_DECELERATION * spin.elapsed).max(0.0);
                state.ball_speed = speed;
                state.ball_angle = (state.ball_angle + speed * frames).rem_euclid(360.0);
                state.ball_radius = OUTER_RADIUS;

                if speed < BALL_DROP_SPEED && spin.elapsed > MIN_SPIN_SECS {
                    debug!("ball dropped after {:.2}s", spin.elapsed);
                    state.phase = WheelPhase::Bouncing;
                    spin.phase_elapsed = 0.0;
                    return Some(AnimationEvent::BallDropped);
                }
                None
            }
            WheelPhase::Bouncing => {
                advance_wheel(state, &spin.profile, spin.elapsed, frames);

                let t = spin.phase_elapsed;
                let spiral = (SPIRAL_SPEED_START - SPIRAL_SPEED_DECAY * t).max(SPIRAL_SPEED_MIN);
                state.ball_speed = spiral;
                state.ball_angle = (state.ball_angle + spiral * frames).rem_euclid(360.0);

                let progress = (t / BOUNCE_SECS).min(1.0);
                let wobble = (t * BOUNCE_WOBBLE_RATE).sin() * BOUNCE_WOBBLE_PX * (1.0 - progress);
                state.ball_radius = (OUTER_RADIUS - (OUTER_RADIUS - INNER_RADIUS) * progress + wobble)
                    .clamp(INNER_RADIUS, OUTER_RADIUS);

                while let Some(bounce) = spin.profile.bounces.get(spin.next_bounce) {
                    if bounce.at > t {
                        break;
                    }
                    state.ball_angle = (state.ball_angle + bounce.kick).rem_euclid(360.0);
                    state.bounce_count += 1;
                    spin.next_bounce += 1;
                }

                if t >= BOUNCE_SECS {
                    let pocket = pocket_angle(spin.winning_number).unwrap_or(0.0);
                    state.ball_angle =
                        (state.wheel_rotation + pocket + spin.profile.settle_offset).rem_euclid(360.0);
                    state.ball_radius = INNER_RADIUS;
                    state.ball_speed = 0.0;
                    state.phase = WheelPhase::Settled;
                    spin.phase_elapsed = 0.0;
                    debug!("ball settled on {} after {} bounces", spin.winning_number, state.bounce_count);
                    return Some(AnimationEvent::Settled {
                        winning_number: spin.winning_number,
                    });
                }
                None
            }
            WheelPhase::Settled => {
                if spin.phase_elapsed >= SETTLE_HOLD_SECS {
                    spin.completed = true;
                    return Some(AnimationEvent::SpinComplete {
                        winning_number: spin.winning_number,
                    });
                }
                None
            }
        }
    }
}

fn advance_wheel(state: &mut WheelAnimationState, profile: &SpinProfile, elapsed: f64, frames: f64) {
    let speed = (profile.wheel_speed - WHEEL_DECELERATION * elapsed).max(0.0);
    state.wheel_rotation += speed * WHEEL_DEGREES_PER_UNIT * frames;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pockets::pocket_at;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_micros(16_667);

    fn fixed_profile() -> SpinProfile {
        SpinProfile {
            wheel_speed: 4.0,
            ball_speed: 30.0,
            bounces: vec![
                Bounce { at: 0.3, kick: 10.0 },
                Bounce { at: 0.9, kick: -12.0 },
                Bounce { at: 1.6, kick: 5.0 },
            ],
            settle_offset: 2.0,
        }
    }

    fn run_to_completion(animation: &mut WheelAnimation) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        for _ in 0..60 * 20 {
            events.extend(animation.tick(FRAME));
            if !animation.is_animating() {
                break;
            }
        }
        events
    }

    #[test]
    fn test_random_profile_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let profile = SpinProfile::random(&mut rng);
            assert!((WHEEL_SPEED_MIN..WHEEL_SPEED_MAX).contains(&profile.wheel_speed));
            assert!((BALL_SPEED_MIN..BALL_SPEED_MAX).contains(&profile.ball_speed));
            assert!(profile.settle_offset.abs() <= SETTLE_OFFSET_DEGREES);
            assert!(!profile.bounces.is_empty());
            assert!(profile.bounces.len() <= MAX_BOUNCE_COUNT);
            let mut last = 0.0;
            for bounce in &profile.bounces {
                assert!(bounce.at > last && bounce.at < BOUNCE_SECS);
                assert!(bounce.kick.abs() <= BOUNCE_KICK_DEGREES);
                last = bounce.at;
            }
        }
    }

    #[test]
    fn test_short_intervals_stop_at_the_bounce_cap() {
        // Every interval at the minimum would fit twelve bounces in the window.
        assert!(BOUNCE_SECS / BOUNCE_INTERVAL_MIN_SECS > MAX_BOUNCE_COUNT as f64);
        let mut rng = StdRng::seed_from_u64(11);
        let most = (0..2000)
            .map(|_| SpinProfile::random(&mut rng).bounces.len())
            .max()
            .unwrap();
        assert!(most <= MAX_BOUNCE_COUNT);
    }

    #[test]
    fn test_slowest_ball_finishes_within_longest_spin() {
        let mut profile = fixed_profile();
        profile.ball_speed = BALL_SPEED_MAX - 1e-9;
        let mut animation = WheelAnimation::new();
        animation.start_with_profile(8, profile);
        let mut elapsed = Duration::ZERO;
        while animation.is_animating() {
            animation.tick(FRAME);
            elapsed += FRAME;
        }
        assert!(elapsed <= longest_spin(), "{:?} > {:?}", elapsed, longest_spin());
        assert!(longest_spin() <= Duration::from_millis(SPIN_DURATION_MS));
    }

    #[test]
    fn test_phases_run_in_order() {
        let mut animation = WheelAnimation::new();
        assert_eq!(animation.phase(), WheelPhase::Idle);
        animation.start_with_profile(17, fixed_profile());
        assert_eq!(animation.phase(), WheelPhase::Spinning);

        let events = run_to_completion(&mut animation);
        assert_eq!(
            events,
            vec![
                AnimationEvent::BallDropped,
                AnimationEvent::Settled { winning_number: 17 },
                AnimationEvent::SpinComplete { winning_number: 17 },
            ]
        );
        assert_eq!(animation.phase(), WheelPhase::Settled);
        assert_eq!(animation.state().bounce_count, 3);
    }

    #[test]
    fn test_profile_is_held_for_the_whole_spin() {
        let mut animation = WheelAnimation::new();
        animation.start_with_profile(5, fixed_profile());
        for _ in 0..200 {
            animation.tick(FRAME);
            assert_eq!(animation.profile(), Some(&fixed_profile()));
        }
    }

    #[test]
    fn test_wheel_rotation_never_decreases() {
        let mut animation = WheelAnimation::new();
        animation.start_with_profile(0, fixed_profile());
        let mut last = animation.state().wheel_rotation;
        while animation.phase() != WheelPhase::Settled {
            animation.tick(FRAME);
            assert!(animation.state().wheel_rotation >= last);
            let radius = animation.state().ball_radius;
            assert!((INNER_RADIUS..=OUTER_RADIUS).contains(&radius));
            last = animation.state().wheel_rotation;
        }
    }

    #[test]
    fn test_ball_lands_in_the_winning_pocket() {
        let mut rng = StdRng::seed_from_u64(42);
        for number in 0..=36u8 {
            let mut animation = WheelAnimation::new();
            animation.start(number, &mut rng);
            run_to_completion(&mut animation);
            let state = animation.state();
            assert_eq!(state.ball_radius, INNER_RADIUS);
            assert_eq!(pocket_at(state.ball_angle - state.wheel_rotation), number);
        }
    }

    #[test]
    fn test_settled_state_is_frozen() {
        let mut animation = WheelAnimation::new();
        animation.start_with_profile(9, fixed_profile());
        run_to_completion(&mut animation);
        let frozen = animation.state().clone();
        assert!(animation.tick(Duration::from_secs(5)).is_empty());
        assert_eq!(animation.state(), &frozen);
    }

    #[test]
    fn test_one_long_tick_finishes_the_spin() {
        let mut animation = WheelAnimation::new();
        animation.start_with_profile(26, fixed_profile());
        let events = animation.tick(Duration::from_secs(10));
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], AnimationEvent::SpinComplete { winning_number: 26 });
    }

    #[test]
    fn test_spin_completes_before_the_table_resolves() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mut animation = WheelAnimation::new();
            animation.start(1, &mut rng);
            let mut elapsed = Duration::ZERO;
            while animation.is_animating() {
                animation.tick(FRAME);
                elapsed += FRAME;
            }
            assert!(elapsed.as_millis() < SPIN_DURATION_MS as u128);
        }
    }

    #[test]
    fn test_reset_returns_to_idle() {
        let mut animation = WheelAnimation::new();
        animation.start_with_profile(3, fixed_profile());
        animation.tick(Duration::from_secs(1));
        animation.reset();
        assert_eq!(animation.phase(), WheelPhase::Idle);
        assert_eq!(animation.state().ball_radius, OUTER_RADIUS);
        assert_eq!(animation.winning_number(), None);
        assert!(animation.tick(FRAME).is_empty());
    }

    #[test]
    fn test_completed_spin_resets_and_spins_again() {
        let mut animation = WheelAnimation::new();
        animation.start_with_profile(12, fixed_profile());
        run_to_completion(&mut animation);
        let rotation = animation.state().wheel_rotation;

        animation.reset();
        let idle = animation.state();
        assert_eq!(idle.phase, WheelPhase::Idle);
        assert_eq!(idle.ball_radius, OUTER_RADIUS);
        assert_eq!(idle.bounce_count, 0);
        assert!((idle.wheel_rotation - rotation.rem_euclid(360.0)).abs() < 1e-9);

        animation.start_with_profile(30, fixed_profile());
        let events = run_to_completion(&mut animation);
        assert_eq!(events.last(), Some(&AnimationEvent::SpinComplete { winning_number: 30 }));
    }
}
