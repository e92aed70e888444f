//! Click feedback beep.
//!
//! Registered as a capturing listener on the document so it fires before
//! any target handler can stop propagation. The `AudioContext` is created
//! on the first click and reused for the rest of the page.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AudioContext, AudioContextState, AudioScheduledSourceNode, OscillatorType, Window};

use crate::app::{AudioSlot, PageContext};
use crate::error::BehaviorError;
use crate::features::Wiring;
use crate::state::audio::{BeepEnvelope, CLICK_BEEP};
use crate::util::dom::{self, ListenOptions};

const CONSTRUCTORS: [&str; 2] = ["AudioContext", "webkitAudioContext"];

pub fn init(ctx: &PageContext) -> Result<Wiring, BehaviorError> {
    if !CONSTRUCTORS.iter().any(|name| dom::has_global(&ctx.window, name)) {
        return Ok(Wiring::Skipped("no AudioContext"));
    }

    let window = ctx.window.clone();
    let slot = AudioSlot::clone(&ctx.audio);
    dom::listen(&ctx.document, "click", ListenOptions { passive: true, capture: true }, move |_| {
        if let Err(err) = play(&window, &slot, &CLICK_BEEP) {
            log::debug!("click-audio: {err}");
        }
    })?;

    Ok(Wiring::Active)
}

fn play(window: &Window, slot: &AudioSlot, beep: &BeepEnvelope) -> Result<(), BehaviorError> {
    let Some(ctx) = audio_context(window, slot)? else {
        return Ok(());
    };

    let osc = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    osc.set_type(OscillatorType::Sine);
    osc.frequency().set_value(beep.frequency_hz);

    let now = ctx.current_time();
    let (ramp_end, stop) = beep.schedule(now);
    gain.gain().set_value_at_time(beep.start_gain, now)?;
    gain.gain().exponential_ramp_to_value_at_time(beep.end_gain, ramp_end)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    let source: &AudioScheduledSourceNode = &osc;
    source.start()?;
    source.stop_with_when(stop)?;
    Ok(())
}

/// Shared context, created on first use and resumed if suspended.
fn audio_context(window: &Window, slot: &AudioSlot) -> Result<Option<AudioContext>, BehaviorError> {
    let mut slot = slot.borrow_mut();
    if slot.is_none() {
        *slot = construct(window)?;
    }
    let Some(ctx) = slot.as_ref() else {
        return Ok(None);
    };
    if ctx.state() == AudioContextState::Suspended {
        resume(ctx);
    }
    Ok(Some(ctx.clone()))
}

fn construct(window: &Window) -> Result<Option<AudioContext>, BehaviorError> {
    for name in CONSTRUCTORS {
        let ctor = Reflect::get(window, &JsValue::from_str(name))?;
        if let Some(ctor) = ctor.dyn_ref::<Function>() {
            let instance = Reflect::construct(ctor, &Array::new())?;
            log::debug!("click-audio: created {name}");
            return Ok(Some(instance.unchecked_into()));
        }
    }
    Ok(None)
}

fn resume(ctx: &AudioContext) {
    match ctx.resume() {
        Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::debug!("click-audio: resume rejected: {err:?}");
            }
        }),
        Err(err) => log::debug!("click-audio: resume failed: {err:?}"),
    }
}
