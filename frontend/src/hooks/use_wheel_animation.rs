use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use shared::shared_roulette_game::SpinTicket;
use shared::wheel_animation::{AnimationEvent, WheelAnimation, WheelAnimationState};
use yew::prelude::*;

/// How long the settled ball stays in its pocket before the wheel goes idle.
const IDLE_AFTER_MS: u32 = 2000;

/// Pending browser callbacks for one spin. Dropping them cancels them.
#[derive(Default)]
struct SpinHandles {
    frame: RefCell<Option<AnimationFrame>>,
    reset: RefCell<Option<Timeout>>,
}

/// Runs the wheel toward each new ticket's number, one tick per display frame,
/// and returns it to idle a while after the spin completes.
///
/// A new ticket replaces the running chain. Unmounting cancels it.
#[hook]
pub fn use_wheel_animation(ticket: Option<SpinTicket>) -> WheelAnimationState {
    let animation = use_mut_ref(WheelAnimation::new);
    let view = use_state_eq(WheelAnimationState::default);

    {
        let animation = animation.clone();
        let view = view.clone();
        use_effect_with(ticket, move |ticket| {
            let handles = Rc::new(SpinHandles::default());

            if let Some(ticket) = *ticket {
                log::debug!("wheel spinning toward {} (round {})", ticket.winning_number, ticket.round);
                animation.borrow_mut().start(ticket.winning_number, &mut rand::thread_rng());
                schedule_frame(animation, handles.clone(), view, None);
            }

            move || {
                handles.frame.borrow_mut().take();
                handles.reset.borrow_mut().take();
            }
        });
    }

    (*view).clone()
}

fn schedule_frame(
    animation: Rc<RefCell<WheelAnimation>>,
    handles: Rc<SpinHandles>,
    view: UseStateHandle<WheelAnimationState>,
    last_timestamp: Option<f64>,
) {
    let slot = handles.clone();
    let handle = request_animation_frame(move |timestamp| {
        let dt_ms = last_timestamp.map_or(0.0, |last| (timestamp - last).max(0.0));
        let events = animation.borrow_mut().tick(Duration::from_secs_f64(dt_ms / 1000.0));
        for event in events {
            match event {
                AnimationEvent::BallDropped => log::debug!("ball dropped"),
                AnimationEvent::Settled { winning_number } => log::debug!("ball settled in {}", winning_number),
                AnimationEvent::SpinComplete { winning_number } => {
                    log::info!("wheel stopped on {}", winning_number);
                    schedule_idle(animation.clone(), &slot, view.clone());
                }
            }
        }

        let (state, animating) = {
            let animation = animation.borrow();
            (animation.state().clone(), animation.is_animating())
        };
        view.set(state);

        if animating {
            schedule_frame(animation, slot, view, Some(timestamp));
        }
    });
    *handles.frame.borrow_mut() = Some(handle);
}

fn schedule_idle(
    animation: Rc<RefCell<WheelAnimation>>,
    handles: &SpinHandles,
    view: UseStateHandle<WheelAnimationState>,
) {
    let timeout = Timeout::new(IDLE_AFTER_MS, move || {
        let state = {
            let mut animation = animation.borrow_mut();
            animation.reset();
            animation.state().clone()
        };
        log::debug!("wheel idle");
        view.set(state);
    });
    *handles.reset.borrow_mut() = Some(timeout);
}
